//! Compass facing and its rotation/displacement rules.

use crate::error::CommandError;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four cardinal directions.
///
/// The discriminants are the positions in the clockwise cycle
/// NORTH → EAST → SOUTH → WEST, so rotation is ordinal arithmetic mod 4.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Orientation {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Orientation {
    /// All orientations in clockwise order, indexed by ordinal.
    pub const ALL: [Orientation; 4] = [Self::North, Self::East, Self::South, Self::West];

    const NAMES: [&'static str; 4] = ["NORTH", "EAST", "SOUTH", "WEST"];

    const STEPS: [IVec2; 4] = [
        IVec2::new(0, 1),
        IVec2::new(1, 0),
        IVec2::new(0, -1),
        IVec2::new(-1, 0),
    ];

    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Turns 90 degrees counter-clockwise.
    pub fn rotate_left(self) -> Self {
        Self::ALL[(self.ordinal() + 3) % 4]
    }

    /// Turns 90 degrees clockwise.
    pub fn rotate_right(self) -> Self {
        Self::ALL[(self.ordinal() + 1) % 4]
    }

    /// Unit displacement of one forward step. North is `+y`, east is `+x`.
    pub fn step_vector(self) -> IVec2 {
        Self::STEPS[self.ordinal()]
    }

    /// Upper-case name as used by the command language.
    pub fn name(self) -> &'static str {
        Self::NAMES[self.ordinal()]
    }

    /// Case-insensitive exact match against the four names.
    pub fn parse(text: &str) -> Result<Self, CommandError> {
        Self::NAMES
            .iter()
            .position(|name| name.eq_ignore_ascii_case(text))
            .map(|idx| Self::ALL[idx])
            .ok_or_else(|| CommandError::UnknownOrientation(text.to_string()))
    }
}

impl FromStr for Orientation {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
