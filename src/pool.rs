use std::fmt::Display;

use itertools::Itertools;
use log::debug;
use serde::Serialize;

use crate::{Die, Result};

/// Dice recognised in a command, split into ordinary and plot dice.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Pool {
    ordinary: Vec<u32>,
    plot: Vec<u32>,
}

impl Pool {
    /// Zero-sided dice are dropped.
    #[must_use]
    pub fn new(ordinary: Vec<u32>, plot: Vec<u32>) -> Self {
        ordinary
            .into_iter()
            .map(Die::Ordinary)
            .chain(plot.into_iter().map(Die::Plot))
            .collect()
    }

    /// Builds a pool from command arguments, the command name already removed.
    pub fn parse<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pool = Self::default();
        for token in tokens {
            if let Some(die) = Die::parse(token.as_ref())? {
                pool.push(die);
            }
        }
        Ok(pool)
    }

    pub fn push(&mut self, die: Die) {
        if die.size() == 0 {
            debug!("dropping zero-sided {die}");
            return;
        }
        match die {
            Die::Ordinary(n) => self.ordinary.push(n),
            Die::Plot(n) => self.plot.push(n),
        }
    }

    #[must_use]
    pub fn ordinary(&self) -> &[u32] {
        &self.ordinary
    }

    #[must_use]
    pub fn plot(&self) -> &[u32] {
        &self.plot
    }

    /// All dice, ordinary first, in the order they were given.
    pub fn dice(&self) -> impl Iterator<Item = Die> + '_ {
        self.ordinary
            .iter()
            .map(|&n| Die::Ordinary(n))
            .chain(self.plot.iter().map(|&n| Die::Plot(n)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ordinary.len() + self.plot.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordinary.is_empty() && self.plot.is_empty()
    }
}

impl Display for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dice().join(" "))
    }
}

impl FromIterator<Die> for Pool {
    fn from_iter<T: IntoIterator<Item = Die>>(iter: T) -> Self {
        let mut pool = Self::default();
        iter.into_iter().for_each(|die| pool.push(die));
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn parse_splits_dice() {
        let pool = Pool::parse(["d10", "pd6", "d12", "pd4"]).unwrap();
        assert_eq!(pool.ordinary(), &[10, 12]);
        assert_eq!(pool.plot(), &[6, 4]);
        assert_eq!(pool.len(), 4);
        assert_eq!(pool.to_string(), "d10 d12 pd6 pd4");
    }

    #[test]
    fn parse_drops_unrecognised_tokens() {
        let pool = Pool::parse(["xyz", "d8", "athletics", "12"]).unwrap();
        assert_eq!(pool, Pool::new(vec![8], vec![]));
    }

    #[test]
    fn parse_nothing() {
        let pool = Pool::parse(["xyz"]).unwrap();
        assert!(pool.is_empty());
        assert_eq!(pool.len(), 0);
        assert!(Pool::parse(Vec::<String>::new()).unwrap().is_empty());
    }

    #[test]
    fn parse_does_not_cap_size() {
        let pool = Pool::parse(["d4"; 9]).unwrap();
        assert_eq!(pool.len(), 9);
    }

    #[test]
    fn parse_fails_on_zero_sided_die() {
        assert_eq!(
            Pool::parse(["d6", "pd0"]),
            Err(Error::InvalidDie {
                token: "pd0".to_string()
            })
        );
    }

    #[test]
    fn zero_sided_dice_are_dropped() {
        assert!(Pool::new(vec![0], vec![]).is_empty());
        assert_eq!(Pool::new(vec![6, 0], vec![0, 4]), Pool::new(vec![6], vec![4]));
        let pool: Pool = [Die::Ordinary(0), Die::Plot(0)].into_iter().collect();
        assert!(pool.is_empty());
    }

    #[test]
    fn collect_from_dice() {
        let pool: Pool = [Die::Plot(8), Die::Ordinary(6)].into_iter().collect();
        assert_eq!(pool.ordinary(), &[6]);
        assert_eq!(pool.plot(), &[8]);
    }
}
