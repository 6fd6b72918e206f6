use carte::application::session::Session;
use carte::domain::menu::Menu;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a JSON menu config (optional). If omitted, the builtin
    /// catalog is used.
    #[arg(long)]
    menu: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries only the session transcript.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let menu = match cli.menu {
        Some(path) => Menu::load(path).into_diagnostic()?,
        None => Menu::builtin(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), menu);
    session.run().into_diagnostic()?;

    Ok(())
}
