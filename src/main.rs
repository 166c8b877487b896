use clap::Parser;
use miette::Result;
use skit::cli::{Cli, Commands};
use skit::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    skit::cli::init_logging(cli.verbose);

    let printer = Printer::new();

    match cli.command {
        Commands::Check(args) => skit::cli::check::run(args, &printer)?,
        Commands::Dump(args) => skit::cli::dump::run(args)?,
        Commands::Tokens(args) => skit::cli::tokens::run(args)?,
        Commands::Init(args) => skit::cli::init::run(args, &printer)?,
        Commands::Completions(args) => skit::cli::completions::run(args)?,
    }

    Ok(())
}
