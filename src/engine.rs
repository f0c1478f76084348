use bon::Builder;
use log::{debug, warn};

use crate::difficulty::{self, Ladder};
use crate::{
    combinations, enumerate, Count, Distributions, DoomRule, PlotFace, Pool, Report, Result,
    Statistics, MAX_DICE, MAX_OUTCOMES,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Visit every combination of faces.
    #[default]
    Enumerate,
    /// Fold per-die distributions together.
    Convolve,
}

#[derive(Debug, Clone, Builder)]
pub struct Engine {
    #[builder(default = MAX_DICE)]
    max_dice: usize,
    #[builder(default = MAX_OUTCOMES)]
    max_outcomes: Count,
    #[builder(default)]
    strategy: Strategy,
    #[builder(default = Box::new(PlotFace) as Box<dyn DoomRule>)]
    doom_rule: Box<dyn DoomRule>,
    #[builder(default = difficulty::standard())]
    ladder: Ladder,
}

impl Default for Engine {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Statistics for command arguments with the default engine.
pub fn statistics<I, S>(tokens: I) -> Result<Statistics>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Engine::default().stats(tokens)
}

impl Engine {
    #[must_use]
    pub fn max_dice(&self) -> usize {
        self.max_dice
    }

    #[must_use]
    pub fn max_outcomes(&self) -> Count {
        self.max_outcomes
    }

    #[must_use]
    pub fn ladder(&self) -> &Ladder {
        &self.ladder
    }

    pub fn stats<I, S>(&self, tokens: I) -> Result<Statistics>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pool = Pool::parse(tokens)?;
        Ok(self.evaluate(&pool))
    }

    #[must_use]
    pub fn evaluate(&self, pool: &Pool) -> Statistics {
        if pool.is_empty() {
            return Statistics::Empty;
        }
        if pool.len() > self.max_dice {
            debug!("{} dice over the limit of {}", pool.len(), self.max_dice);
            return Statistics::Overloaded {
                dice: pool.len(),
                limit: self.max_dice,
            };
        }

        let combinations = match combinations(pool) {
            Some(n) if n <= self.max_outcomes => n,
            n => {
                warn!(
                    "refusing `{pool}`: {} outcomes over budget {}",
                    n.map_or_else(|| "too many".to_string(), |n| n.to_string()),
                    self.max_outcomes
                );
                return Statistics::TooComplex {
                    combinations: n,
                    budget: self.max_outcomes,
                };
            }
        };

        debug!("`{pool}`: {combinations} outcomes, {:?}", self.strategy);
        let dist = match self.strategy {
            Strategy::Enumerate => {
                let outcomes = enumerate(pool, &*self.doom_rule);
                Distributions::build(&outcomes, combinations)
            }
            Strategy::Convolve => {
                Distributions::convolve(pool, &*self.doom_rule, combinations)
            }
        };

        Statistics::Computed(Report::assemble(&dist, &self.ladder))
    }
}
