pub use crate::difficulty::{standard, Difficulty, Ladder};
pub use crate::render::{RenderExt, Titles};
pub use crate::{
    statistics, Die, DoomRule, Engine, Opportunities, PlotFace, Pool, Report, StatCommand,
    Statistics, Strategy,
};
