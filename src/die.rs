use std::fmt::Display;
use std::ops::RangeInclusive;

use log::trace;
use serde::Serialize;

use crate::{Count, Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(tag = "kind", content = "size", rename_all = "snake_case")]
pub enum Die {
    Ordinary(u32),
    Plot(u32),
}

impl Die {
    /// Reads a single `d<n>` or `pd<n>` token.
    ///
    /// Returns `Ok(None)` for anything that is not a die token at all, and an
    /// error for a die token whose size is zero, negative or out of range.
    pub fn parse(token: &str) -> Result<Option<Self>> {
        let lower = token.trim().to_ascii_lowercase();
        let (die, digits): (fn(u32) -> Die, &str) = if let Some(rest) = lower.strip_prefix("pd") {
            (Die::Plot, rest)
        } else if let Some(rest) = lower.strip_prefix('d') {
            (Die::Ordinary, rest)
        } else {
            trace!("ignoring token `{token}`");
            return Ok(None);
        };

        let negative = digits.starts_with('-');
        let magnitude = digits.strip_prefix('-').unwrap_or(digits);
        if magnitude.is_empty() || !magnitude.bytes().all(|b| b.is_ascii_digit()) {
            trace!("ignoring token `{token}`");
            return Ok(None);
        }

        match magnitude.parse::<u32>() {
            Ok(size) if size > 0 && !negative => Ok(Some(die(size))),
            _ => Err(Error::InvalidDie {
                token: token.to_string(),
            }),
        }
    }

    #[must_use]
    pub fn size(&self) -> u32 {
        match *self {
            Die::Ordinary(n) | Die::Plot(n) => n,
        }
    }

    #[must_use]
    pub fn is_plot(&self) -> bool {
        matches!(self, Die::Plot(_))
    }

    /// Face values the die can show. Plot dice never roll below half their size.
    #[must_use]
    pub fn faces(&self) -> RangeInclusive<u32> {
        match *self {
            Die::Ordinary(n) => 1..=n,
            Die::Plot(n) => n / 2..=n,
        }
    }

    /// Number of distinct faces, i.e. the branching factor during enumeration.
    #[must_use]
    pub fn branches(&self) -> Count {
        let faces = self.faces();
        if faces.is_empty() {
            return 0;
        }
        Count::from(faces.end() - faces.start()) + 1
    }
}

impl Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = if self.is_plot() { "pd" } else { "d" };
        write!(f, "{prefix}{}", self.size())
    }
}
