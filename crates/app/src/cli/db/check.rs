use clap::Args;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: CheckArgs) -> Result<(), String> {
    let db = args.database.connect()?;

    if !db.health_check().await {
        return Err("database is unreachable".to_string());
    }

    println!("database is reachable");

    Ok(())
}
