use clap::Args;
use dispensary_app::domain::medications::{MedicationsService, PgMedicationsService};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ListMedicationsArgs {
    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: ListMedicationsArgs) -> Result<(), String> {
    let service = PgMedicationsService::new(args.database.connect()?);

    let medications = service
        .list_medications()
        .await
        .map_err(|error| format!("failed to list medications: {error}"))?;

    if medications.is_empty() {
        println!("no medications registered");

        return Ok(());
    }

    for medication in medications {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            medication.id().map(i64::from).unwrap_or_default(),
            medication.name(),
            medication.manufacturer(),
            medication.active_ingredient(),
            medication.price(),
            medication.expiration_date(),
        );
    }

    Ok(())
}
