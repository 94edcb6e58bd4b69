//! tiapp CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tiapp::cli::{Cli, CommandDispatcher};
use tiapp::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `--verbose` flag sets level to INFO
/// 3. `RUST_LOG` environment variable (if set)
/// 4. Default is WARN
fn init_tracing(debug: bool, verbose: bool) {
    let filter = if debug {
        EnvFilter::new("tiapp=debug")
    } else if verbose {
        EnvFilter::new("tiapp=info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tiapp=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --no-color before anything styles output
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    init_tracing(cli.debug, cli.verbose);
    tracing::debug!("tiapp starting with args: {:?}", cli);

    let mut ui = create_ui(OutputMode::from_flags(cli.verbose, cli.quiet));

    // Determine project root
    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let dispatcher = CommandDispatcher::new(cli.descriptor_path(&project_root));

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            for line in e.diagnostic_lines() {
                ui.error(&line);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
