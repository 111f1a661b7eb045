use clap::{Args, Parser, Subcommand};
use dispensary_app::database::{self, DatabaseSettings, Db};

mod db;
mod medication;

#[derive(Debug, Parser)]
#[command(name = "dispensary-app", about = "Dispensary CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Medication(medication::MedicationCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Medication(command) => medication::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

impl DatabaseArgs {
    pub(crate) fn connect(&self) -> Result<Db, String> {
        database::connect(&DatabaseSettings::new(self.database_url.as_str()))
            .map_err(|error| format!("failed to configure database: {error}"))
    }
}
