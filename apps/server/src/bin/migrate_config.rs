//! Prints the migration tool configuration as JSON.
//!
//! Reads `DATABASE_URL` from the environment (a local `.env` file is
//! honored) and exits non-zero when it is missing, so CI fails before the
//! migration tool runs with a broken config.

use meeple::migration::{MigrationConfig, SystemEnv};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = MigrationConfig::load(&SystemEnv)?;
    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}
