use clap::{Args, Subcommand};

mod check;

#[derive(Debug, Args)]
pub(crate) struct DbCommand {
    #[command(subcommand)]
    command: DbSubcommand,
}

#[derive(Debug, Subcommand)]
enum DbSubcommand {
    /// Probe the database and fail when it cannot be reached
    Check(check::CheckArgs),
}

pub(crate) async fn run(command: DbCommand) -> Result<(), String> {
    match command.command {
        DbSubcommand::Check(args) => check::run(args).await,
    }
}
