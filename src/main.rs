//! Runs a toy robot session over stdin (or a command file), printing every report.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use toy_robot::{CommandInterpreter, SessionSummary, SimulatorConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Toy robot simulator", allow_negative_numbers = true)]
struct Args {
    /// Read commands from this file instead of stdin
    file: Option<PathBuf>,

    /// Table width
    #[arg(long, default_value_t = 5)]
    width: i32,

    /// Table height
    #[arg(long, default_value_t = 5)]
    height: i32,

    /// Print the final robot state as JSON on stderr
    #[arg(long)]
    dump_state: bool,
}

impl Args {
    fn config(&self) -> SimulatorConfig {
        SimulatorConfig {
            width: self.width,
            height: self.height,
        }
    }
}

/// Runs one session: reports go to `output`, the optional state dump to `dump`.
fn run_session<R: BufRead, W: Write, D: Write>(
    args: &Args,
    input: R,
    output: W,
    mut dump: D,
) -> Result<SessionSummary> {
    let mut interpreter =
        CommandInterpreter::new(args.config()).context("failed to set up the table")?;
    info!("table {}", interpreter.grid());

    let summary = interpreter
        .run(input, output)
        .context("failed to process commands")?;
    debug!("session finished: {summary:?}");

    if args.dump_state {
        let json = serde_json::to_string_pretty(interpreter.state())
            .context("failed to serialize robot state")?;
        writeln!(dump, "{json}").context("failed to write robot state")?;
    }

    Ok(summary)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let stdout = io::stdout().lock();
    let stderr = io::stderr().lock();
    match &args.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open command file {}", path.display()))?;
            run_session(&args, BufReader::new(file), stdout, stderr)?;
        }
        None => {
            run_session(&args, io::stdin().lock(), stdout, stderr)?;
        }
    }

    Ok(())
}
