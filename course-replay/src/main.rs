//! Entry point for the `course-replay` tool.

use clap::Parser;
use course_replay::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            tracing::error!(kind = %e.kind(), "invalid arguments");
            let _ = e.print();
            std::process::exit(1);
        }
    };

    course_replay::runner::install_panic_hook();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = course_replay::run(&cli.command, &mut out) {
        tracing::error!(error = %e, "replay failed");
        std::process::exit(1);
    }
}
