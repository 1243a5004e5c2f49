// patternbook: interpreter, memento and observer walkthrough

use std::process::ExitCode;

use clap::Parser;
use crossterm::style::{style, Stylize};
use crossterm::tty::IsTty;
use patternbook::demo::{self, DemoConfig, DEFAULT_EXPRESSION};
use patternbook::theme::DEFAULT_THEME;

/// Run the design pattern walkthrough
#[derive(Debug, Parser)]
#[command(name = "patternbook", version, about)]
struct Args {
    /// Expression evaluated in the interpreter section
    #[arg(short, long, default_value = DEFAULT_EXPRESSION)]
    expr: String,

    /// Disable coloured output (also off with NO_COLOR or when stdout is not a terminal)
    #[arg(long)]
    no_color: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("patternbook=debug")
        } else {
            EnvFilter::new("patternbook=info")
        }
    });

    // Logs go to stderr; stdout carries the walkthrough itself
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_tracing(args.verbose);

    let config = DemoConfig {
        expression: args.expr,
        color: demo::color_enabled(
            args.no_color,
            std::env::var_os("NO_COLOR").is_some(),
            std::io::stdout().is_tty(),
        ),
    };

    let color = config.color;
    let mut stdout = std::io::stdout().lock();
    match demo::run(&mut stdout, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if color {
                eprintln!("{} {}", style("Error:").with(DEFAULT_THEME.error).bold(), e);
            } else {
                eprintln!("Error: {}", e);
            }
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}
