//! Shared domain types.
//!
//! These types are intentionally kept small, `Copy` and serializable so they can be:
//!
//! - passed by value through the converter without borrowing gymnastics
//! - emitted as JSON by whatever application embeds the crate
//!
//! Nothing here knows about the conversion table itself; see `crate::table`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An evaluation method, i.e. one standardized-test score scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// Thinking-skills assessment, scored out of 100.
    Tsa,
    /// National high-school graduation exam, three-subject total out of 30.
    Thpt,
    /// Competency assessment, scored out of 150.
    Hsa,
    /// High-school transcript average, three-subject total out of 30.
    Hocba,
}

impl Method {
    /// All methods, in conversion-table column order.
    pub const ALL: [Method; 4] = [Method::Tsa, Method::Thpt, Method::Hsa, Method::Hocba];

    /// Upper-case label used in output and accepted (case-insensitively) by `FromStr`.
    pub fn label(self) -> &'static str {
        match self {
            Method::Tsa => "TSA",
            Method::Thpt => "THPT",
            Method::Hsa => "HSA",
            Method::Hocba => "HOCBA",
        }
    }

    /// Column index into a table row.
    pub(crate) fn column(self) -> usize {
        match self {
            Method::Tsa => 0,
            Method::Thpt => 1,
            Method::Hsa => 2,
            Method::Hocba => 3,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string does not name a known method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMethod(pub String);

impl fmt::Display for UnknownMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown method '{}' (expected one of TSA, THPT, HSA, HOCBA).",
            self.0
        )
    }
}

impl std::error::Error for UnknownMethod {}

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Method::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownMethod(s.to_string()))
    }
}

/// A percentile-rank band: 1 is the highest-scoring band, 7 the lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Band(u8);

impl Band {
    /// Number of bands in every conversion table.
    pub const COUNT: usize = 7;

    /// All bands in scan order (1 first).
    pub const ALL: [Band; Band::COUNT] = [
        Band(1),
        Band(2),
        Band(3),
        Band(4),
        Band(5),
        Band(6),
        Band(7),
    ];

    /// Build a band from its 1-based rank. Returns `None` outside `1..=7`.
    pub fn new(rank: u8) -> Option<Self> {
        (1..=Band::COUNT as u8).contains(&rank).then_some(Band(rank))
    }

    /// 1-based rank (1 = highest band).
    pub fn rank(self) -> u8 {
        self.0
    }

    /// 0-based row index into a table.
    pub(crate) fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl TryFrom<u8> for Band {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Band::new(value).ok_or_else(|| format!("band must be in 1..=7, got {value}"))
    }
}

impl From<Band> for u8 {
    fn from(value: Band) -> Self {
        value.0
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "band {}", self.0)
    }
}

/// A closed score interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

impl ScoreRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Inclusive on both ends. Always false for NaN.
    pub fn contains(&self, score: f64) -> bool {
        score >= self.min && score <= self.max
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

impl fmt::Display for ScoreRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// One converted score per method. `None` means the score could not be converted
/// into that method's scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MethodScores {
    pub tsa: Option<f64>,
    pub thpt: Option<f64>,
    pub hsa: Option<f64>,
    pub hocba: Option<f64>,
}

impl MethodScores {
    pub fn get(&self, method: Method) -> Option<f64> {
        match method {
            Method::Tsa => self.tsa,
            Method::Thpt => self.thpt,
            Method::Hsa => self.hsa,
            Method::Hocba => self.hocba,
        }
    }

    pub(crate) fn set(&mut self, method: Method, value: Option<f64>) {
        let slot = match method {
            Method::Tsa => &mut self.tsa,
            Method::Thpt => &mut self.thpt,
            Method::Hsa => &mut self.hsa,
            Method::Hocba => &mut self.hocba,
        };
        *slot = value;
    }

    /// `(method, value)` pairs in `Method::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Method, Option<f64>)> + '_ {
        Method::ALL.into_iter().map(move |m| (m, self.get(m)))
    }
}
