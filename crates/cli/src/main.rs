//! board-column-id entry point.
//!
//! Prints the identifier of a GitHub project board column:
//!
//! ```text
//! GITHUB_API_KEY=… board-column-id --organization acme --project Roadmap --column Done
//! 42
//! ```
//!
//! Standard output carries only the identifier. Logs (filtered by `RUST_LOG`,
//! default `warn`) and error messages go to standard error.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::CliArgs;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();
    let args = CliArgs::parse();

    let env = |name: &str| std::env::var(name).ok();
    let mut stdout = std::io::stdout();
    match cli::run(&args, env, cli::connect_github, &mut stdout).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
