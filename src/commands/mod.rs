//! Top-level subcommand orchestration.
pub mod check;
pub mod reconcile;
pub mod version;

use anyhow::{Context as _, Result};
use std::path::PathBuf;

use crate::cli::{GlobalOpts, ResourceOpts};
use crate::config::Config;
use crate::config::validation::{ConfigValidator, ResourceFileValidator, RuleTableValidator};
use crate::logging::{EntryStatus, Log};
use crate::reconcile::{PlatformReport, ReconcileReport};
use crate::resources::{ResourceDescriptor, catalog, manifest};

/// Shared state produced by the common command setup sequence.
#[derive(Debug)]
pub struct CommandSetup {
    /// Settings with command-line overrides applied.
    pub config: Config,
    /// Where the descriptors came from ("catalog" or the manifest path).
    pub source: String,
    /// Descriptors to reconcile, in input order.
    pub resources: Vec<ResourceDescriptor>,
}

impl CommandSetup {
    /// Resolve the project root, load settings, and collect descriptors.
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be determined, the settings file
    /// fails to parse, or the manifest cannot be loaded.
    pub fn init(global: &GlobalOpts, opts: &ResourceOpts, log: &dyn Log) -> Result<Self> {
        let root = resolve_root(global)?;

        log.stage("Loading configuration");
        let config = Config::load(&root)
            .context("loading resconf.toml")?
            .with_overrides(opts.overrides(global));
        log.debug(&format!("project root: {}", config.root.display()));
        log.debug(&format!("document: {}", config.config_xml_path().display()));

        let (source, resources) = collect_resources(&config)?;
        log.info(&format!(
            "{} resource(s) from {source} for {} platform(s)",
            resources.len(),
            config.settings.platforms.len()
        ));

        let validators: [&dyn ConfigValidator; 2] = [
            &RuleTableValidator::default(),
            &ResourceFileValidator::new(&source, &resources),
        ];
        for validator in validators {
            let warnings = validator.validate(&config.root);
            if warnings.is_empty() {
                log.debug(&format!("{}: ok", validator.name()));
                continue;
            }
            log.warn(&format!(
                "{}: {} validation warning(s):",
                validator.name(),
                warnings.len()
            ));
            for warning in &warnings {
                log.warn(&format!(
                    "  {} [{}]: {}",
                    warning.source, warning.item, warning.message
                ));
            }
        }

        Ok(Self {
            config,
            source,
            resources,
        })
    }
}

/// Resolve the project root directory.
///
/// Uses `--root` if given, then `RESCONF_ROOT`, then the current directory.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
pub fn resolve_root(global: &GlobalOpts) -> Result<PathBuf> {
    if let Some(ref root) = global.root {
        return Ok(root.clone());
    }
    if let Ok(root) = std::env::var("RESCONF_ROOT") {
        return Ok(PathBuf::from(root));
    }
    std::env::current_dir().context("cannot determine project root; use --root")
}

/// Collect descriptors from the manifest, if configured, or the catalog,
/// restricted to the configured platforms and types.
fn collect_resources(config: &Config) -> Result<(String, Vec<ResourceDescriptor>)> {
    let settings = &config.settings;
    match config.manifest_path() {
        Some(path) => {
            let resources = manifest::load(&path)
                .with_context(|| format!("loading manifest {}", path.display()))?
                .into_iter()
                .filter(|d| settings.platforms.contains(&d.platform))
                .filter(|d| settings.types.contains(&d.kind))
                .collect();
            Ok((path.display().to_string(), resources))
        }
        None => Ok((
            "catalog".to_string(),
            catalog::descriptors(
                &settings.platforms,
                &settings.types,
                &settings.resources_dir,
            ),
        )),
    }
}

/// One-line description of a platform's outcome counts.
fn describe(platform: &PlatformReport) -> String {
    format!(
        "{} created, {} updated, {} unchanged, {} skipped",
        platform.created(),
        platform.updated(),
        platform.unchanged(),
        platform.skipped()
    )
}

/// Record one summary entry per platform.
///
/// `changed` is the status used for platforms that were modified.
fn record_report(report: &ReconcileReport, changed: EntryStatus, log: &dyn Log) {
    for platform in &report.platforms {
        for outcome in &platform.outcomes {
            log.debug(&format!(
                "{} {} {}: {:?}",
                platform.platform, outcome.kind, outcome.label, outcome.change
            ));
        }
        let status = if platform.has_changes() {
            changed
        } else {
            EntryStatus::Unchanged
        };
        log.record(
            platform.platform.as_str(),
            status,
            Some(&describe(platform)),
        );
    }
}
