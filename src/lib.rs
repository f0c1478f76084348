mod command;
pub mod difficulty;
mod die;
mod dist;
mod engine;
mod enumerate;
mod outcome;
mod pool;
pub mod prelude;
pub mod render;
mod report;

use std::collections::BTreeMap;

pub use command::StatCommand;
pub use difficulty::{Difficulty, Ladder};
pub use die::Die;
pub use dist::{Distributions, Frequency};
pub use engine::{statistics, Engine, Strategy};
pub use enumerate::{combinations, enumerate};
pub use outcome::{DoomRule, Opportunities, Outcome, PlotFace};
pub use pool::Pool;
pub use report::{Chance, Report, Statistics};
use thiserror::Error;

pub type Key = i64;
pub type Count = u64;
pub type Map<V> = BTreeMap<Key, V>;
pub type Result<T> = ::core::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid die size in `{token}`")]
    InvalidDie { token: String },
}

const MAX_DICE: usize = 6;
const MAX_OUTCOMES: Count = 5_000_000;
