// src/models/review.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Glyph repeated once per rating point when a review is displayed.
pub const STAR: &str = "⭐";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingError {
    #[error("rating must be a whole number, got {0:?}")]
    NotANumber(String),
    #[error("rating must be between 1 and 5, got {0}")]
    OutOfRange(i64),
}

/// Star rating of a review. Only the values 1 through 5 are representable.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rating {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
}

impl Rating {
    /// All ratings, lowest first.
    pub const ALL: [Rating; 5] = [
        Rating::One,
        Rating::Two,
        Rating::Three,
        Rating::Four,
        Rating::Five,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    /// Option label shown in the rating select, e.g. "1 star" or "4 stars".
    pub fn label(self) -> String {
        match self {
            Rating::One => "1 star".to_string(),
            other => format!("{} stars", other.value()),
        }
    }

    pub fn stars(self) -> String {
        STAR.repeat(usize::from(self.value()))
    }

    /// Parses the value of the rating select. The empty placeholder option
    /// means no rating has been chosen yet.
    pub fn parse_selection(value: &str) -> Result<Option<Rating>, RatingError> {
        if value.is_empty() {
            return Ok(None);
        }
        value.parse().map(Some)
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::ALL
            .into_iter()
            .find(|rating| rating.value() == value)
            .ok_or(RatingError::OutOfRange(i64::from(value)))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl FromStr for Rating {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: i64 = s
            .trim()
            .parse()
            .map_err(|_| RatingError::NotANumber(s.to_string()))?;
        let byte = u8::try_from(number).map_err(|_| RatingError::OutOfRange(number))?;
        Rating::try_from(byte)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A submitted review. Created once by a successful form submission and never
/// modified afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub email: String,         // Address typed by the reviewer, not format-checked
    pub rating: Option<Rating>, // None when the placeholder was still selected
    pub text: String,          // Review body
}

impl Review {
    /// Star glyphs for this review's rating; empty when no rating was chosen.
    pub fn stars(&self) -> String {
        self.rating.map(Rating::stars).unwrap_or_default()
    }
}
