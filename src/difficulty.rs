use std::sync::LazyLock;

use itertools::Itertools;
use serde::Serialize;

use crate::report::Chance;
use crate::{Frequency, Key};

pub static STANDARD: LazyLock<Ladder> = LazyLock::new(|| {
    Ladder::new([
        ("Easy", 3),
        ("Average", 7),
        ("Hard", 11),
        ("Formidable", 15),
        ("Heroic", 19),
        ("Incredible", 23),
        ("Ridiculous", 27),
        ("Impossible", 31),
    ])
});

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Difficulty {
    pub name: String,
    pub threshold: Key,
}

/// Named difficulties, ordered by increasing threshold.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Ladder {
    steps: Vec<Difficulty>,
}

pub fn standard() -> Ladder {
    STANDARD.clone()
}

impl Ladder {
    pub fn new<I, S>(steps: I) -> Self
    where
        I: IntoIterator<Item = (S, Key)>,
        S: Into<String>,
    {
        let steps = steps
            .into_iter()
            .map(|(name, threshold)| Difficulty {
                name: name.into(),
                threshold,
            })
            .sorted_by_key(|d| d.threshold)
            .collect();
        Self { steps }
    }

    #[must_use]
    pub fn steps(&self) -> &[Difficulty] {
        &self.steps
    }

    /// Chance of meeting each difficulty, in ladder order.
    #[must_use]
    pub fn evaluate(&self, totals: &Frequency) -> Vec<Chance> {
        self.steps
            .iter()
            .map(|d| Chance {
                difficulty: d.name.clone(),
                threshold: d.threshold,
                percent: totals.at_least(d.threshold),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_ladder() {
        let ladder = standard();
        let names = ladder.steps().iter().map(|d| d.name.as_str()).collect_vec();
        assert_eq!(
            names,
            [
                "Easy",
                "Average",
                "Hard",
                "Formidable",
                "Heroic",
                "Incredible",
                "Ridiculous",
                "Impossible"
            ]
        );
        let thresholds = ladder.steps().iter().map(|d| d.threshold).collect_vec();
        assert_eq!(thresholds, [3, 7, 11, 15, 19, 23, 27, 31]);
    }

    #[test]
    fn new_sorts_by_threshold() {
        let ladder = Ladder::new([("Hard", 10), ("Easy", 2)]);
        assert_eq!(ladder.steps()[0].name, "Easy");
        assert_eq!(ladder.steps()[1].name, "Hard");
    }

    #[test]
    fn evaluate_d6() {
        let totals = Frequency::tally(1..=6);
        let chances = Ladder::new([("Low", 3), ("High", 6), ("Never", 7)]).evaluate(&totals);
        let percents = chances.iter().map(|c| c.percent).collect_vec();
        assert!((percents[0] - 400.0 / 6.0).abs() < 1e-9);
        assert!((percents[1] - 100.0 / 6.0).abs() < 1e-9);
        assert_eq!(percents[2], 0.0);
        assert_eq!(chances[2].difficulty, "Never");
    }
}
