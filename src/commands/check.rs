//! Command: verify the project descriptor is up to date.
use anyhow::{Context as _, Result};

use super::{CommandSetup, record_report};
use crate::cli::{GlobalOpts, ResourceOpts};
use crate::document::{DocumentStore, FileDocumentStore};
use crate::logging::{EntryStatus, Log, Logger};
use crate::reconcile::{ReconcileReport, reconcile_document};
use crate::resources::ResourceDescriptor;

/// Run the check command.
///
/// # Errors
///
/// Returns an error if setup fails, the document cannot be read, or it
/// would be changed by `reconcile`.
pub fn run(global: &GlobalOpts, opts: &ResourceOpts, log: &Logger) -> Result<()> {
    let setup = CommandSetup::init(global, opts, log)?;
    let store = FileDocumentStore::new(setup.config.config_xml_path());
    let report = verify(&store, &setup.resources, log)?;
    log.print_summary();

    let stale = report.platforms.iter().filter(|p| p.has_changes()).count();
    if stale > 0 {
        anyhow::bail!(
            "{} is out of date for {stale} platform(s); run `resconf reconcile`",
            store.location()
        );
    }
    Ok(())
}

/// Reconcile the stored document in memory without saving it.
///
/// # Errors
///
/// Returns an error if the document cannot be loaded.
pub fn verify(
    store: &dyn DocumentStore,
    resources: &[ResourceDescriptor],
    log: &dyn Log,
) -> Result<ReconcileReport> {
    let location = store.location();
    log.stage(&format!("Checking {location}"));

    let mut doc = store
        .load()
        .with_context(|| format!("reading {location}"))?;
    let report = reconcile_document(&mut doc, resources);
    record_report(&report, EntryStatus::Failed, log);

    if report.has_changes() {
        log.warn(&format!("{location} has missing or stale resource entries"));
    } else {
        log.info(&format!("{location} is up to date"));
    }
    Ok(report)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::document::{self, MockDocumentStore};
    use crate::logging::isolated_logger;
    use crate::platform::{Platform, ResourceType};
    use crate::resources::ResourceKey;

    fn splash() -> ResourceDescriptor {
        ResourceDescriptor::new(Platform::Ios, ResourceType::Splash)
            .with(ResourceKey::Src, "resources/ios/splash/Default@2x~universal~anyany.png")
            .with(ResourceKey::Width, 2732u32)
            .with(ResourceKey::Height, 2732u32)
    }

    fn store_with(xml: &'static str) -> MockDocumentStore {
        let mut store = MockDocumentStore::new();
        store
            .expect_location()
            .return_const("config.xml".to_string());
        store
            .expect_load()
            .returning(move || document::parse(xml));
        store.expect_save().times(0);
        store
    }

    #[test]
    fn stale_document_records_failure() {
        let (log, _tmp, _guard) = isolated_logger();
        let store = store_with("<widget/>");
        let report = verify(&store, &[splash()], &log).unwrap();
        assert!(report.has_changes());
        assert_eq!(log.failure_count(), 1);
    }

    #[test]
    fn current_document_passes() {
        let (log, _tmp, _guard) = isolated_logger();
        let store = store_with(
            r#"<widget><platform name="ios"><splash src="resources/ios/splash/Default@2x~universal~anyany.png" width="2732" height="2732"/></platform></widget>"#,
        );
        let report = verify(&store, &[splash()], &log).unwrap();
        assert!(!report.has_changes());
        assert_eq!(log.failure_count(), 0);
    }

    #[test]
    fn backslash_paths_count_as_stale() {
        let (log, _tmp, _guard) = isolated_logger();
        let store = store_with(
            r#"<widget><platform name="ios"><splash src="resources\ios\splash\Default@2x~universal~anyany.png" width="2732" height="2732"/></platform></widget>"#,
        );
        let report = verify(&store, &[splash()], &log).unwrap();
        assert_eq!(report.platforms[0].updated(), 1);
        assert_eq!(report.platforms[0].created(), 0);
    }
}
