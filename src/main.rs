use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use scientific_calculator::{Menu, ResultStore, DEFAULT_CAPACITY};
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug)]
#[clap(name = "scientific-calculator", version, about = "Interactive console calculator")]
struct Cli {
    #[clap(
        long,
        short,
        default_value = "warn",
        help = "Log level written to stderr (off, error, warn, info, debug, trace)"
    )]
    log_level: LevelFilter,

    #[clap(
        long,
        default_value_t = DEFAULT_CAPACITY,
        value_parser = parse_capacity,
        help = "Number of results kept for the session"
    )]
    capacity: usize,
}

fn parse_capacity(arg: &str) -> std::result::Result<usize, String> {
    match arg.parse::<usize>() {
        Ok(0) => Err("capacity must be at least 1".to_string()),
        Ok(capacity) => Ok(capacity),
        Err(e) => Err(e.to_string()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Stdout carries the dialogue, so logs stay on stderr
    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .target(env_logger::Target::Stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), stdout.lock(), cli.capacity)
}

/// Run one session, logging the error that ends it early
fn run_session<R: BufRead, W: Write>(input: R, output: W, capacity: usize) -> Result<()> {
    let mut menu = Menu::new(input, output, ResultStore::with_capacity(capacity));
    if let Err(e) = menu.run() {
        log::error!("Session aborted: {}", e);
        return Err(e.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_capacity() {
        assert_eq!(parse_capacity("100"), Ok(100));
        assert!(parse_capacity("0").is_err());
        assert!(parse_capacity("-1").is_err());
        assert!(parse_capacity("many").is_err());
    }

    /// Sink whose every write fails
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_output_failure_aborts_session() {
        let result = run_session(io::Cursor::new("1 2 3\n7\n"), BrokenPipe, DEFAULT_CAPACITY);
        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("I/O error"));
    }

    #[test]
    fn test_session_completes() {
        let mut output = Vec::new();
        run_session(io::Cursor::new("1 2 3\n7\n"), &mut output, DEFAULT_CAPACITY).unwrap();
        assert!(String::from_utf8(output).unwrap().contains("Result: 5.0"));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["scientific-calculator"]);
        assert_eq!(cli.capacity, DEFAULT_CAPACITY);
        assert_eq!(cli.log_level, LevelFilter::Warn);
    }
}
