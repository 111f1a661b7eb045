use clap::Args;
use dispensary_app::domain::medications::{
    MedicationsService, PgMedicationsService, data::NewMedication,
};
use jiff::civil::Date;
use rust_decimal::Decimal;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CreateMedicationArgs {
    /// Brand name
    #[arg(long)]
    name: String,

    /// Manufacturer name
    #[arg(long)]
    manufacturer: String,

    /// Active ingredient
    #[arg(long)]
    active_ingredient: String,

    /// Price with exact cents, e.g. 9.90
    #[arg(long)]
    price: Decimal,

    /// Expiration date (YYYY-MM-DD)
    #[arg(long)]
    expiration_date: Date,

    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: CreateMedicationArgs) -> Result<(), String> {
    let service = PgMedicationsService::new(args.database.connect()?);

    let medication = service
        .create_medication(NewMedication {
            name: args.name,
            manufacturer: args.manufacturer,
            active_ingredient: args.active_ingredient,
            price: args.price,
            expiration_date: args.expiration_date,
        })
        .await
        .map_err(|error| format!("failed to create medication: {error}"))?;

    if let Some(id) = medication.id() {
        println!("medication_id: {id}");
    }

    println!("medication_name: {}", medication.name());

    Ok(())
}
