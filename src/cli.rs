//! Command-line argument definitions.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Overrides;
use crate::platform::{Platform, ResourceType};

/// Top-level CLI entry point.
#[derive(Parser, Debug)]
#[command(
    name = "resconf",
    about = "Keep icon and splash entries in a Cordova config.xml in sync with generated resources",
    version
)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared by every subcommand
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Preview changes without writing the document
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,

    /// Project root directory (defaults to the current directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Document to reconcile, relative to the project root
    #[arg(long, global = true)]
    pub config_xml: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write resource entries into the project's config.xml
    Reconcile(ResourceOpts),
    /// Fail if config.xml is missing or has stale resource entries
    Check(ResourceOpts),
    /// Print version information
    Version,
}

/// Resource selection shared by `reconcile` and `check`.
#[derive(Parser, Debug, Clone, Default)]
pub struct ResourceOpts {
    /// Only these platforms
    #[arg(long, value_delimiter = ',', value_enum)]
    pub platform: Vec<Platform>,

    /// Only these resource types
    #[arg(long = "type", value_delimiter = ',', value_enum)]
    pub types: Vec<ResourceType>,

    /// Directory catalog paths are prefixed with
    #[arg(long)]
    pub resources_dir: Option<String>,

    /// Read descriptors from a JSON manifest instead of the built-in catalog
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

impl ResourceOpts {
    /// Settings overrides given on the command line.
    #[must_use]
    pub fn overrides(&self, global: &GlobalOpts) -> Overrides {
        Overrides {
            config_xml: global.config_xml.clone(),
            resources_dir: self.resources_dir.clone(),
            platforms: self.platform.clone(),
            types: self.types.clone(),
            manifest: self.manifest.clone(),
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_reconcile_defaults() {
        let cli = Cli::parse_from(["resconf", "reconcile"]);
        let Command::Reconcile(opts) = cli.command else {
            panic!("expected reconcile");
        };
        assert!(opts.platform.is_empty());
        assert!(opts.types.is_empty());
        assert!(!cli.global.dry_run);
    }

    #[test]
    fn parse_platform_list() {
        let cli = Cli::parse_from(["resconf", "reconcile", "--platform", "android,ios"]);
        let Command::Reconcile(opts) = cli.command else {
            panic!("expected reconcile");
        };
        assert_eq!(opts.platform, [Platform::Android, Platform::Ios]);
    }

    #[test]
    fn parse_type_list() {
        let cli = Cli::parse_from(["resconf", "check", "--type", "adaptive-icon,splash"]);
        let Command::Check(opts) = cli.command else {
            panic!("expected check");
        };
        assert_eq!(opts.types, [ResourceType::AdaptiveIcon, ResourceType::Splash]);
    }

    #[test]
    fn rejects_unknown_platform() {
        assert!(Cli::try_parse_from(["resconf", "reconcile", "--platform", "tizen"]).is_err());
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "resconf",
            "reconcile",
            "-d",
            "-v",
            "--root",
            "/project",
            "--config-xml",
            "app/config.xml",
        ]);
        assert!(cli.global.dry_run);
        assert!(cli.verbose);
        assert_eq!(cli.global.root, Some(PathBuf::from("/project")));
        assert_eq!(cli.global.config_xml, Some(PathBuf::from("app/config.xml")));
    }

    #[test]
    fn parse_version() {
        let cli = Cli::parse_from(["resconf", "version"]);
        assert!(matches!(cli.command, Command::Version));
    }

    #[test]
    fn overrides_carry_every_flag() {
        let cli = Cli::parse_from([
            "resconf",
            "--config-xml",
            "www/config.xml",
            "reconcile",
            "--resources-dir",
            "assets",
            "--manifest",
            "assets/manifest.json",
            "--platform",
            "windows",
        ]);
        let Command::Reconcile(opts) = cli.command else {
            panic!("expected reconcile");
        };
        let overrides = opts.overrides(&cli.global);
        assert_eq!(overrides.config_xml, Some(PathBuf::from("www/config.xml")));
        assert_eq!(overrides.resources_dir.as_deref(), Some("assets"));
        assert_eq!(overrides.manifest, Some(PathBuf::from("assets/manifest.json")));
        assert_eq!(overrides.platforms, [Platform::Windows]);
    }
}
