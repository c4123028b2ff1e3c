use clap::Parser;
use miette::Result;
use tqt::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Init(args) => tqt::cli::commands::init::run(args),
        Commands::Truck(cmd) => tqt::cli::commands::truck::run(cmd),
        Commands::Tax(cmd) => tqt::cli::commands::tax::run(cmd),
        Commands::Quote(cmd) => tqt::cli::commands::quote::run(cmd),
        Commands::Fleet(cmd) => tqt::cli::commands::fleet::run(cmd),
    }
}
