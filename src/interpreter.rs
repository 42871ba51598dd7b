//! Interpreter that drives a [`RobotState`] from lines of the command language.
//!
//! The entry point is [`CommandInterpreter`]. Build it from a [`SimulatorConfig`]
//! (or a ready [`Grid`]) and a [`DiagnosticSink`], then feed it one line at a
//! time with [`CommandInterpreter::execute`] or a whole stream with
//! [`CommandInterpreter::run`].
//!
//! Malformed input never surfaces as an error to the caller: every bad line
//! becomes a rejected [`Outcome`] plus a diagnostic, and the session carries on.

use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::error::{CommandError, CommandResult, GridError};
use crate::grid::{DEFAULT_SIZE, Grid};
use crate::orientation::Orientation;
use crate::robot::{Command, RobotState};
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;

/// Configuration for a simulation session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Table width (x extent). Must be positive.
    pub width: i32,
    /// Table height (y extent). Must be positive.
    pub height: i32,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
        }
    }
}

impl SimulatorConfig {
    pub fn grid(&self) -> Result<Grid, GridError> {
        Grid::new(self.width, self.height)
    }
}

/// Result of executing a single line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Whether the line was a well-formed command that took effect.
    pub accepted: bool,
    /// Text produced by `REPORT` on a placed robot.
    pub output: Option<String>,
}

impl Outcome {
    pub fn accepted() -> Self {
        Self {
            accepted: true,
            output: None,
        }
    }

    pub fn rejected() -> Self {
        Self::default()
    }

    fn report(output: Option<String>) -> Self {
        Self {
            accepted: true,
            output,
        }
    }
}

/// Counters for a completed [`CommandInterpreter::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub lines: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub reports: usize,
}

/// Parses an optionally signed decimal integer.
///
/// Values beyond the `i64` range are still integers; they saturate so the
/// bounds check rejects them as off the table.
pub fn parse_integer(text: &str) -> CommandResult<i64> {
    text.parse::<i64>().or_else(|err| match err.kind() {
        IntErrorKind::PosOverflow => Ok(i64::MAX),
        IntErrorKind::NegOverflow => Ok(i64::MIN),
        _ => Err(CommandError::NonIntegerCoordinate(text.to_string())),
    })
}

/// Parses one of the four orientation names, ignoring case.
pub fn parse_orientation(text: &str) -> CommandResult<Orientation> {
    Orientation::parse(text)
}

/// Decodes one line into a [`Command`].
///
/// Returns `Ok(None)` for a blank line. Keywords are matched case-insensitively
/// and, apart from `PLACE`, must stand alone on the line.
pub fn parse_command(line: &str) -> CommandResult<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let upper = line.to_uppercase();
    let (keyword, rest) = match upper.find(char::is_whitespace) {
        Some(idx) => (&upper[..idx], Some(&upper[idx..])),
        None => (upper.as_str(), None),
    };

    let command = match (keyword, rest) {
        ("PLACE", Some(args)) => parse_place_args(args)?,
        ("PLACE", None) => return Err(CommandError::MalformedCommand(upper.clone())),
        ("MOVE", None) => Command::Move,
        ("LEFT", None) => Command::Left,
        ("RIGHT", None) => Command::Right,
        ("REPORT", None) => Command::Report,
        _ => return Err(CommandError::UnrecognizedCommand(upper.clone())),
    };
    Ok(Some(command))
}

/// `args` is everything after the `PLACE` keyword, separator included.
fn parse_place_args(args: &str) -> CommandResult<Command> {
    let malformed = || CommandError::MalformedCommand(args.trim().to_string());

    // Exactly one space, then a single whitespace-free group.
    let group = args
        .strip_prefix(' ')
        .filter(|group| !group.is_empty() && !group.contains(char::is_whitespace))
        .ok_or_else(malformed)?;

    let parts: Vec<&str> = group.split(',').collect();
    let &[x, y, facing] = parts.as_slice() else {
        return Err(malformed());
    };

    Ok(Command::Place {
        x: parse_integer(x)?,
        y: parse_integer(y)?,
        orientation: parse_orientation(facing)?,
    })
}

/// Owns one robot and one table for the lifetime of a session.
pub struct CommandInterpreter<S = LogSink> {
    grid: Grid,
    state: RobotState,
    sink: S,
}

impl CommandInterpreter<LogSink> {
    /// Creates an interpreter that reports diagnostics through the `log` facade.
    pub fn new(config: SimulatorConfig) -> Result<Self, GridError> {
        Self::with_sink(config, LogSink)
    }
}

impl Default for CommandInterpreter<LogSink> {
    fn default() -> Self {
        Self::from_grid(Grid::default(), LogSink)
    }
}

impl<S: DiagnosticSink> CommandInterpreter<S> {
    /// Creates an interpreter with an explicit diagnostics sink.
    ///
    /// Fails only when the configured table has a non-positive dimension.
    pub fn with_sink(config: SimulatorConfig, sink: S) -> Result<Self, GridError> {
        Ok(Self::from_grid(config.grid()?, sink))
    }

    pub fn from_grid(grid: Grid, sink: S) -> Self {
        Self {
            grid,
            state: RobotState::new(),
            sink,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> &RobotState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Parses and applies one line.
    ///
    /// Blank lines are rejected silently. Every other failure is rejected and
    /// recorded in the sink at the severity given by [`CommandError::level`].
    pub fn execute(&mut self, line: &str) -> Outcome {
        match parse_command(line) {
            Ok(Some(command)) => self.apply(command),
            Ok(None) => Outcome::rejected(),
            Err(err) => {
                self.diagnose(&err);
                Outcome::rejected()
            }
        }
    }

    /// Applies an already decoded command.
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Place { x, y, orientation } => {
                let placed = match (i32::try_from(x), i32::try_from(y)) {
                    (Ok(cx), Ok(cy)) => self.state.place(&self.grid, cx, cy, orientation),
                    _ => false,
                };
                if placed {
                    Outcome::accepted()
                } else {
                    self.diagnose(&CommandError::OutOfBounds { x, y });
                    Outcome::rejected()
                }
            }
            Command::Move => {
                self.state.move_forward(&self.grid);
                Outcome::accepted()
            }
            Command::Left => {
                self.state.rotate_left();
                Outcome::accepted()
            }
            Command::Right => {
                self.state.rotate_right();
                Outcome::accepted()
            }
            Command::Report => Outcome::report(self.state.report()),
        }
    }

    /// Executes every line of `input`, writing each report as a line of `output`.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily and end up rejected
    /// like any other unknown command. Only I/O failures end the session early.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> io::Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let outcome = self.execute(&String::from_utf8_lossy(&buf));
            summary.lines += 1;
            if outcome.accepted {
                summary.accepted += 1;
            } else {
                summary.rejected += 1;
            }
            if let Some(report) = outcome.output {
                writeln!(output, "{report}")?;
                summary.reports += 1;
            }
        }
        output.flush()?;
        Ok(summary)
    }

    fn diagnose(&mut self, err: &CommandError) {
        self.sink.record(err.level(), &err.to_string());
    }
}
