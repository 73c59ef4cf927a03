use anyhow::Result;
use repodoc::cli;

fn main() -> Result<()> {
    cli::run_cli()
}
