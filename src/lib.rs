//! # toy-robot
//!
//! A deterministic simulator for a single robot on a bounded table, driven by a
//! tiny case-insensitive command language:
//!
//! ```text
//! PLACE X,Y,F    F is NORTH, EAST, SOUTH or WEST
//! MOVE
//! LEFT
//! RIGHT
//! REPORT
//! ```
//!
//! The robot ignores everything until it has been placed on the table, and it
//! refuses any move that would take it off the edge. Malformed lines are
//! rejected and reported to a [`DiagnosticSink`] instead of failing the session.
//!
//! ```
//! use toy_robot::{CommandInterpreter, MemorySink, SimulatorConfig};
//!
//! let mut robot = CommandInterpreter::with_sink(SimulatorConfig::default(), MemorySink::new())?;
//! robot.execute("PLACE 0,0,NORTH");
//! robot.execute("MOVE");
//! assert_eq!(robot.execute("REPORT").output.as_deref(), Some("0,1,NORTH"));
//! # Ok::<(), toy_robot::GridError>(())
//! ```

pub mod diagnostics;
pub mod error;
pub mod grid;
pub mod interpreter;
pub mod orientation;
pub mod robot;

pub use diagnostics::*;
pub use error::*;
pub use grid::*;
pub use interpreter::*;
pub use orientation::*;
pub use robot::*;
