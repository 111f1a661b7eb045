use clap::{Args, Subcommand};

mod create;
mod list;

#[derive(Debug, Args)]
pub(crate) struct MedicationCommand {
    #[command(subcommand)]
    command: MedicationSubcommand,
}

#[derive(Debug, Subcommand)]
enum MedicationSubcommand {
    /// Register a new medication
    Create(create::CreateMedicationArgs),

    /// Print every registered medication
    List(list::ListMedicationsArgs),
}

pub(crate) async fn run(command: MedicationCommand) -> Result<(), String> {
    match command.command {
        MedicationSubcommand::Create(args) => create::run(args).await,
        MedicationSubcommand::List(args) => list::run(args).await,
    }
}
