use crate::cli::{Cli, RunContext};
use crate::input::LineSource;
use crate::scaffold::Scaffolder;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

mod cli;
mod console;
mod error;
mod filesystem;
mod input;
mod scaffold;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let context = RunContext::from_cli(&cli);
    init_tracing(context.color());

    let mut scaffolder = Scaffolder::new(
        &context,
        cli.supplied(),
        LineSource::stdin(),
        std::io::stdout(),
    );

    let code = match scaffolder.run() {
        Ok(outcome) => outcome.exit_code(),
        Err(error) => {
            scaffolder.console().report(&error)?;
            1
        }
    };

    std::process::exit(code)
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` and quiet by default.
fn init_tracing(ansi: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .with_target(false),
        )
        .init();
}
