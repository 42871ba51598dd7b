//! The rectangular table the robot moves on.

use crate::error::GridError;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default table edge length.
pub const DEFAULT_SIZE: i32 = 5;

/// An immutable `width x height` table.
///
/// Cell `(0, 0)` is the south-west corner; `+x` points east and `+y` north.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
        }
    }
}

impl Grid {
    /// Builds a table, rejecting non-positive dimensions.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns `true` when `(x, y)` lies on the table.
    pub fn is_valid(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    pub fn contains(&self, position: IVec2) -> bool {
        self.is_valid(position.x, position.y)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
