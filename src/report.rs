use serde::Serialize;

use crate::{Count, Distributions, Key, Ladder, Map};

/// Result of a statistics request. Every variant is an expected answer.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Statistics {
    /// No dice were recognised.
    Empty,
    /// More dice than the engine accepts.
    Overloaded { dice: usize, limit: usize },
    /// The pool has more outcomes than the step budget; `None` if the count overflowed.
    TooComplex {
        combinations: Option<Count>,
        budget: Count,
    },
    Computed(Report),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Chance {
    pub difficulty: String,
    pub threshold: Key,
    pub percent: f64,
}

/// Percentages for one pool, ready for display.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub combinations: Count,
    pub totals: Map<f64>,
    pub difficulties: Vec<Chance>,
    pub doom: Map<f64>,
    pub mean: f64,
    pub stddev: f64,
}

impl Report {
    #[must_use]
    pub fn assemble(dist: &Distributions, ladder: &Ladder) -> Self {
        Self {
            combinations: dist.totals.denom(),
            totals: dist.totals.probabilities(),
            difficulties: ladder.evaluate(&dist.totals),
            doom: dist.doom.probabilities(),
            mean: dist.totals.mean(),
            stddev: dist.totals.stddev(),
        }
    }
}

impl Statistics {
    #[must_use]
    pub fn report(&self) -> Option<&Report> {
        match self {
            Statistics::Computed(report) => Some(report),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::standard;
    use crate::{enumerate, PlotFace, Pool};

    #[test]
    fn assemble_two_dice() {
        let pool = Pool::new(vec![10, 12], vec![]);
        let dist = Distributions::build(&enumerate(&pool, &PlotFace), 120);
        let report = Report::assemble(&dist, &standard());

        assert_eq!(report.combinations, 120);
        assert_eq!(
            report.totals.keys().copied().collect::<Vec<Key>>(),
            (2..=22).collect::<Vec<Key>>()
        );
        assert_eq!(report.doom, Map::from([(0, 100.0)]));
        assert_eq!(report.difficulties.len(), 8);
        assert_eq!(report.difficulties[0].difficulty, "Easy");
        assert!((report.difficulties[0].percent - 119.0 / 120.0 * 100.0).abs() < 1e-9);
        assert!((report.mean - 12.0).abs() < 1e-9);
    }

    #[test]
    fn serializes_with_status_tag() {
        let json = serde_json::to_value(Statistics::Overloaded { dice: 7, limit: 6 }).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "status": "overloaded", "dice": 7, "limit": 6 })
        );
        let json = serde_json::to_value(Statistics::Empty).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "empty" }));
    }

    #[test]
    fn report_accessor() {
        assert!(Statistics::Empty.report().is_none());
    }
}
