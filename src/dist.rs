use std::collections::BTreeMap;

use num::rational::Ratio;
use num::ToPrimitive;
use serde::Serialize;

use crate::{Count, DoomRule, Key, Map, Outcome, Pool};

/// How often each key occurred among `denom` outcomes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Frequency {
    counts: Map<Count>,
    denom: Count,
}

/// Frequency of roll totals and of generated doom over the same outcomes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Distributions {
    pub totals: Frequency,
    pub doom: Frequency,
}

impl Frequency {
    pub fn tally<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = Key>,
    {
        let mut counts = Map::<Count>::new();
        for key in keys {
            *counts.entry(key).or_default() += 1;
        }
        Self::from_counts(counts)
    }

    #[must_use]
    pub fn from_counts(counts: Map<Count>) -> Self {
        let denom = counts.values().sum();
        Self { counts, denom }
    }

    #[must_use]
    pub fn denom(&self) -> Count {
        self.denom
    }

    #[must_use]
    pub fn counts(&self) -> &Map<Count> {
        &self.counts
    }

    #[must_use]
    pub fn count(&self, key: Key) -> Count {
        self.counts.get(&key).copied().unwrap_or_default()
    }

    /// Percentage chance of each key that occurred at least once.
    #[must_use]
    pub fn probabilities(&self) -> Map<f64> {
        self.counts
            .iter()
            .map(|(&k, &c)| (k, percent(c, self.denom)))
            .collect()
    }

    /// Percentage chance of a key greater than or equal to `threshold`.
    #[must_use]
    pub fn at_least(&self, threshold: Key) -> f64 {
        let hits: Count = self.counts.range(threshold..).map(|(_, c)| c).sum();
        percent(hits, self.denom)
    }

    #[must_use]
    pub fn mean(&self) -> f64 {
        self.counts
            .iter()
            .map(|(&k, &c)| k as f64 * fraction(c, self.denom))
            .sum()
    }

    #[must_use]
    pub fn variance(&self) -> f64 {
        let m = self.mean();
        self.counts
            .iter()
            .map(|(&k, &c)| (k as f64 - m).powi(2) * fraction(c, self.denom))
            .sum()
    }

    #[must_use]
    pub fn stddev(&self) -> f64 {
        self.variance().sqrt()
    }
}

impl Distributions {
    /// Tallies enumerated outcomes.
    ///
    /// # Panics
    ///
    /// If the number of outcomes differs from `combinations`; the enumerator and the
    /// combination count disagree, which is a bug.
    #[must_use]
    pub fn build(outcomes: &[Outcome], combinations: Count) -> Self {
        assert_eq!(
            outcomes.len() as Count,
            combinations,
            "enumerated outcomes disagree with combination count"
        );
        Self {
            totals: Frequency::tally(outcomes.iter().map(Outcome::total)),
            doom: Frequency::tally(outcomes.iter().map(Outcome::doom)),
        }
    }

    /// Same tables as [`Distributions::build`] without materialising outcomes:
    /// the joint (total, doom) counts are convolved one die at a time.
    ///
    /// # Panics
    ///
    /// If the convolved outcome count differs from `combinations`.
    #[must_use]
    pub fn convolve(pool: &Pool, rule: &dyn DoomRule, combinations: Count) -> Self {
        if pool.is_empty() {
            assert_eq!(
                combinations, 0,
                "convolved outcomes disagree with combination count"
            );
            return Self::default();
        }

        let mut joint = BTreeMap::from([(Outcome::default(), 1 as Count)]);
        for die in pool.dice() {
            let mut next = BTreeMap::<Outcome, Count>::new();
            for (outcome, count) in &joint {
                for face in die.faces() {
                    *next.entry(outcome.roll(die, face, rule)).or_default() += count;
                }
            }
            joint = next;
        }

        let mut totals = Map::<Count>::new();
        let mut doom = Map::<Count>::new();
        for (outcome, count) in joint {
            *totals.entry(outcome.total()).or_default() += count;
            *doom.entry(outcome.doom()).or_default() += count;
        }
        let totals = Frequency::from_counts(totals);
        assert_eq!(
            totals.denom(),
            combinations,
            "convolved outcomes disagree with combination count"
        );
        Self {
            totals,
            doom: Frequency::from_counts(doom),
        }
    }
}

fn fraction(count: Count, denom: Count) -> f64 {
    if denom == 0 {
        return 0.0;
    }
    Ratio::new(count, denom).to_f64().unwrap_or_default()
}

fn percent(count: Count, denom: Count) -> f64 {
    fraction(count, denom) * 100.0
}
