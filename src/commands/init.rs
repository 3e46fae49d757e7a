//! Storage initialization command.
//!
//! Runs the start-up sequence explicitly (schema, legacy import, catalog
//! seeding) and reports what it did. Every other command does the same
//! implicitly on first access, so this is mainly useful after dropping a
//! legacy `expenses.json` into the data directory.

use crate::{
    db::{import::ImportOutcome, storage::Storage},
    libs::{
        config::{Config, CONFIG_FILE_NAME},
        data_storage::DataStorage,
        messages::Message,
    },
    msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Also write the effective configuration to config.json
    #[arg(long)]
    save_config: bool,
}

pub async fn cmd(storage: &Storage, config: &Config, init_args: InitArgs) -> Result<()> {
    let db = storage.initialize().await?;

    if let Some(report) = storage.init_report() {
        match &report.import {
            ImportOutcome::NoSource => {}
            ImportOutcome::Aborted(reason) => msg_warning!(Message::LegacyImportAborted(
                storage.config().legacy_path().display().to_string(),
                reason.clone()
            )),
            ImportOutcome::Completed(import) => msg_info!(Message::LegacyImportCompleted {
                imported: import.imported,
                duplicates: import.duplicates,
                skipped: import.skipped_no_date,
                failed: import.failed,
            }),
        }
        if report.seeded_courses > 0 {
            msg_info!(Message::CoursesSeeded(report.seeded_courses));
        }
    }

    if init_args.save_config {
        config.save()?;
        let path = DataStorage::new().base_path().join(CONFIG_FILE_NAME);
        msg_success!(Message::ConfigSaved(path.display().to_string()));
    }

    msg_success!(Message::StorageReady(db.path().display().to_string()));
    Ok(())
}
