use std::fmt::Debug;

use dyn_clone::DynClone;

use crate::{Die, Key};

/// One full assignment of faces across a pool: the roll total and the doom it generates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Outcome {
    total: Key,
    doom: Key,
}

/// How much doom a single die face generates.
pub trait DoomRule: Debug + DynClone + Send + Sync {
    fn ordinary(&self, face: Key) -> Key;

    fn plot(&self, face: Key) -> Key;

    fn doom(&self, die: Die, face: Key) -> Key {
        if die.is_plot() {
            self.plot(face)
        } else {
            self.ordinary(face)
        }
    }
}

impl Clone for Box<dyn DoomRule> {
    fn clone(&self) -> Self {
        dyn_clone::clone_box(&**self)
    }
}

/// Plot dice add their face to doom, ordinary dice add nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlotFace;

/// Every ordinary die showing a 1 adds one doom.
#[derive(Clone, Copy, Debug, Default)]
pub struct Opportunities;

impl DoomRule for PlotFace {
    fn ordinary(&self, _face: Key) -> Key {
        0
    }

    fn plot(&self, face: Key) -> Key {
        face
    }
}

impl DoomRule for Opportunities {
    fn ordinary(&self, face: Key) -> Key {
        Key::from(face == 1)
    }

    fn plot(&self, _face: Key) -> Key {
        0
    }
}

impl Outcome {
    #[must_use]
    pub fn new(total: Key, doom: Key) -> Self {
        Self { total, doom }
    }

    #[must_use]
    pub fn total(&self) -> Key {
        self.total
    }

    #[must_use]
    pub fn doom(&self) -> Key {
        self.doom
    }

    /// A copy of this outcome extended by one rolled die.
    #[must_use]
    pub fn roll(self, die: Die, face: u32, rule: &dyn DoomRule) -> Self {
        let face = Key::from(face);
        Self {
            total: self.total + face,
            doom: self.doom + rule.doom(die, face),
        }
    }
}
