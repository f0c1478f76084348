use crate::{Count, Die, DoomRule, Outcome, Pool};

/// Number of outcomes [`enumerate`] produces for `pool`, or `None` on overflow.
#[must_use]
pub fn combinations(pool: &Pool) -> Option<Count> {
    if pool.is_empty() {
        return Some(0);
    }
    pool.dice()
        .try_fold(Count::from(1u8), |acc, die| acc.checked_mul(die.branches()))
}

/// Every outcome of `pool`, one per combination of faces.
///
/// Ordinary dice are expanded first, then plot dice. Each branch extends a copy of
/// its parent outcome, so siblings never see each other's faces.
#[must_use]
pub fn enumerate(pool: &Pool, rule: &dyn DoomRule) -> Vec<Outcome> {
    if pool.is_empty() {
        return Vec::new();
    }
    let capacity = combinations(pool)
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or_default();
    let mut outcomes = Vec::with_capacity(capacity);
    expand(
        pool.ordinary(),
        pool.plot(),
        Outcome::default(),
        rule,
        &mut outcomes,
    );
    outcomes
}

fn expand(
    ordinary: &[u32],
    plot: &[u32],
    acc: Outcome,
    rule: &dyn DoomRule,
    outcomes: &mut Vec<Outcome>,
) {
    if let Some((&size, rest)) = ordinary.split_first() {
        let die = Die::Ordinary(size);
        for face in die.faces() {
            expand(rest, plot, acc.roll(die, face, rule), rule, outcomes);
        }
    } else if let Some((&size, rest)) = plot.split_first() {
        let die = Die::Plot(size);
        for face in die.faces() {
            expand(&[], rest, acc.roll(die, face, rule), rule, outcomes);
        }
    } else {
        outcomes.push(acc);
    }
}
