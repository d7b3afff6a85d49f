mod command;
mod error;
mod session;

use clap::Parser;
use error::{report_to_stderr, Error};
use rustyline::{error::ReadlineError, DefaultEditor};
use session::Session;
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};
use std::{fs::File, io::{self, BufReader, IsTerminal, Read}, path::PathBuf, process::ExitCode};
use verbatim_parser::parser::DEFAULT_MAX_DEPTH;

/// Reads expressions exactly as written, then expands and groups them.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// How deeply pieces of an expression may nest before they are rejected
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long = "log", env = "VERBATIM_LOG", default_value = "warn")]
    log_level: LevelFilter,

    /// File of lines to run instead of the interactive prompt
    file: Option<PathBuf>,
}

/// Runs one line, printing its diagnostics and then its output.
fn run_line(session: &mut Session, line: &str) {
    match session.execute(line) {
        Ok(outcome) => {
            report_to_stderr(&outcome.diagnostics, line);
            for output in outcome.lines {
                println!("{}", output);
            }
        },
        Err(err) => err.report_to_stderr(line),
    }
}

/// Runs every non-empty line of the given source.
fn run_batch(session: &mut Session, mut source: impl Read) -> Result<(), Error> {
    let mut input = String::new();
    source.read_to_string(&mut input)?;

    for line in input.lines().filter(|line| !line.trim().is_empty()) {
        run_line(session, line);
    }
    Ok(())
}

/// Runs the interactive editor until end of input.
fn run_interactive(session: &mut Session) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;

    loop {
        let input = match rl.readline("> ") {
            Ok(input) => input,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err),
        };
        if input.trim().is_empty() {
            continue;
        }

        rl.add_history_entry(&input)?;
        run_line(session, &input);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if CombinedLogger::init(vec![TermLogger::new(
        cli.log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]).is_err() {
        eprintln!("warning: could not install the logger");
    }

    let parser = verbatim_parser::Parser::with_max_depth(cli.max_depth);
    let mut session = Session::new(parser);
    let result = if let Some(filename) = cli.file {
        File::open(filename)
            .map_err(Error::from)
            .and_then(|file| run_batch(&mut session, BufReader::new(file)))
    } else if !io::stdin().is_terminal() {
        run_batch(&mut session, io::stdin())
    } else {
        run_interactive(&mut session)
            .map_err(|err| Error::Io(io::Error::new(io::ErrorKind::Other, err.to_string())))
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.report_to_stderr("");
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags() {
        let cli = Cli::try_parse_from(["verbatim", "--max-depth", "8", "--log", "debug", "in.txt"])
            .unwrap();
        assert_eq!(cli.max_depth, 8);
        assert_eq!(cli.log_level, LevelFilter::Debug);
        assert_eq!(cli.file, Some(PathBuf::from("in.txt")));

        let cli = Cli::try_parse_from(["verbatim"]).unwrap();
        assert_eq!(cli.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(cli.file, None);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Cli::try_parse_from(["verbatim", "--max-depth", "deep"]).is_err());
        assert!(Cli::try_parse_from(["verbatim", "--log", "loud"]).is_err());
        assert!(Cli::try_parse_from(["verbatim", "a.txt", "b.txt"]).is_err());
    }
}
