use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use log::debug;

use bool_sat::report::Report;
use bool_sat::sat::Mode;
use bool_sat::Error;

/// Second positional argument that switches on debug mode.
const DEBUG_SENTINEL: &str = "DEBUG";

#[derive(Debug, Parser)]
#[command(author, version, about = "Exhaustive satisfiability check of a boolean expression")]
struct Cli {
    /// File whose first line is the expression.
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Pass `DEBUG` to print every assignment together with the result.
    #[arg(value_name = "DEBUG")]
    debug: Option<String>,

    /// Log level (logs go to stderr).
    #[clap(long, value_name = "LEVEL", default_value = "warn")]
    log_level: simplelog::LevelFilter,
}

impl Cli {
    fn mode(&self) -> Mode {
        match self.debug.as_deref() {
            Some(DEBUG_SENTINEL) => Mode::Debug,
            _ => Mode::Normal,
        }
    }
}

/// Returns the first line of the file, or an empty string for an empty file.
fn read_expression(path: &Path) -> Result<String, Error> {
    let content = fs::read_to_string(path).map_err(|source| Error::Input {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.lines().next().unwrap_or_default().to_string())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    debug!("args = {:?}", args);

    let expression = read_expression(&args.input)?;
    let report = Report::build(&expression, args.mode())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report.write_to(&mut out)?;
    out.flush()?;

    Ok(())
}
