//! CLI entry point - the composition root.
//!
//! Initializes logging and configuration, then dispatches to a handler.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use eventreg_cli::{Cli, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve {
            host,
            port,
            allow_origin,
        } => {
            let config = handlers::serve::server_config(host, port, allow_origin, cli.database)?;
            handlers::serve::execute(config).await?;
        }
        Commands::Paths => {
            handlers::paths::execute()?;
        }
        Commands::Persons => {
            let ctx = bootstrap(cli.database).await?;
            handlers::list::persons(&ctx).await?;
        }
        Commands::Events => {
            let ctx = bootstrap(cli.database).await?;
            handlers::list::events(&ctx).await?;
        }
        Commands::AddPerson { name } => {
            let ctx = bootstrap(cli.database).await?;
            handlers::add::person(&ctx, &name).await?;
        }
        Commands::AddEvent {
            name,
            date,
            start,
            end,
        } => {
            let ctx = bootstrap(cli.database).await?;
            handlers::add::event(&ctx, &name, date, start, end).await?;
        }
        Commands::Register { person, event } => {
            let ctx = bootstrap(cli.database).await?;
            handlers::register::execute(&ctx, &person, &event).await?;
        }
    }

    Ok(())
}
