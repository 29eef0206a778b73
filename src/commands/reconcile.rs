//! Command: write resource entries into the project descriptor.
use anyhow::{Context as _, Result};

use super::{CommandSetup, record_report};
use crate::cli::{GlobalOpts, ResourceOpts};
use crate::document::{DocumentStore, FileDocumentStore};
use crate::logging::{EntryStatus, Log, Logger};
use crate::reconcile::{ReconcileReport, reconcile_document};
use crate::resources::ResourceDescriptor;

/// Run the reconcile command.
///
/// # Errors
///
/// Returns an error if setup fails or the document cannot be read or
/// written.
pub fn run(global: &GlobalOpts, opts: &ResourceOpts, log: &Logger) -> Result<()> {
    let setup = CommandSetup::init(global, opts, log)?;
    let store = FileDocumentStore::new(setup.config.config_xml_path());
    let result = apply(&store, &setup.resources, global.dry_run, log);
    if let Err(ref e) = result {
        log.record(&store.location(), EntryStatus::Failed, Some(&format!("{e:#}")));
    }
    log.print_summary();
    result.map(|_| ())
}

/// Reconcile `resources` into the document held by `store`, saving it when
/// something changed and `dry_run` is off.
///
/// # Errors
///
/// Returns an error if the document cannot be loaded or saved.
pub fn apply(
    store: &dyn DocumentStore,
    resources: &[ResourceDescriptor],
    dry_run: bool,
    log: &dyn Log,
) -> Result<ReconcileReport> {
    let location = store.location();
    log.stage(&format!("Reconciling {location}"));

    let mut doc = store
        .load()
        .with_context(|| format!("reading {location}"))?;
    let report = reconcile_document(&mut doc, resources);

    let changed = if dry_run {
        EntryStatus::DryRun
    } else {
        EntryStatus::Changed
    };
    record_report(&report, changed, log);

    if !report.has_changes() {
        log.info(&format!("{location} is up to date"));
    } else if dry_run {
        log.dry_run(&format!("would write {location}"));
    } else {
        store
            .save(&doc)
            .with_context(|| format!("writing {location}"))?;
        log.info(&format!("wrote {location}"));
    }

    Ok(report)
}
