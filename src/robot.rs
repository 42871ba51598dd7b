//! Robot state and the commands that act on it.

use crate::grid::Grid;
use crate::orientation::Orientation;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the robot stands and which way it faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    /// Table cell, `+x` east and `+y` north.
    pub position: IVec2,

    /// Current facing.
    pub orientation: Orientation,
}

impl Pose {
    pub fn new(x: i32, y: i32, orientation: Orientation) -> Self {
        Self {
            position: IVec2::new(x, y),
            orientation,
        }
    }

    /// The cell one step ahead, which may be off the table.
    pub fn ahead(&self) -> IVec2 {
        self.position + self.orientation.step_vector()
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}",
            self.position.x, self.position.y, self.orientation
        )
    }
}

/// The robot's lifecycle.
///
/// Starts `Unplaced`; the first successful [`place`](Self::place) moves it to
/// `Placed`, and nothing ever moves it back. While unplaced every operation
/// except `place` is a silent no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RobotState {
    #[default]
    Unplaced,
    Placed(Pose),
}

impl RobotState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_placed(&self) -> bool {
        matches!(self, Self::Placed(_))
    }

    pub fn pose(&self) -> Option<Pose> {
        match self {
            Self::Placed(pose) => Some(*pose),
            Self::Unplaced => None,
        }
    }

    /// Puts the robot at `(x, y)` facing `orientation` if that cell is on `grid`.
    ///
    /// An off-table placement leaves the state exactly as it was, placed or not.
    /// Returns whether the placement happened.
    pub fn place(&mut self, grid: &Grid, x: i32, y: i32, orientation: Orientation) -> bool {
        if !grid.is_valid(x, y) {
            return false;
        }
        *self = Self::Placed(Pose::new(x, y, orientation));
        true
    }

    /// Steps one cell forward unless that would leave the table.
    pub fn move_forward(&mut self, grid: &Grid) {
        if let Self::Placed(pose) = self {
            let candidate = pose.ahead();
            if grid.contains(candidate) {
                pose.position = candidate;
            }
        }
    }

    pub fn rotate_left(&mut self) {
        if let Self::Placed(pose) = self {
            pose.orientation = pose.orientation.rotate_left();
        }
    }

    pub fn rotate_right(&mut self) {
        if let Self::Placed(pose) = self {
            pose.orientation = pose.orientation.rotate_right();
        }
    }

    /// `"X,Y,F"` for a placed robot, `None` otherwise.
    pub fn report(&self) -> Option<String> {
        self.pose().map(|pose| pose.to_string())
    }
}

/// A decoded line of the command language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// `PLACE X,Y,F`. Coordinates are kept wide so that huge values are
    /// rejected by the bounds check rather than the parser.
    Place {
        x: i64,
        y: i64,
        orientation: Orientation,
    },
    /// `MOVE`
    Move,
    /// `LEFT`
    Left,
    /// `RIGHT`
    Right,
    /// `REPORT`
    Report,
}
