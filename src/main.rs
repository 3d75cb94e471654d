use clap::Parser;
use miette::Result;
use firequote::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Install miette's fancy error handler for readable diagnostics
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

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => firequote::cli::commands::session::run(&cli.global),
        Commands::Catalog(cmd) => firequote::cli::commands::catalog::run(cmd, &cli.global),
        Commands::Roles(args) => firequote::cli::commands::roles::run(args, &cli.global),
        Commands::Completions(args) => firequote::cli::commands::completions::run(args),
    }
}
