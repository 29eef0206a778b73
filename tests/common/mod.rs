// Shared helpers for integration tests.
//
// Provides a temporary project directory holding a config.xml and an
// optional resconf.toml so each test can run a command against an isolated
// tree.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use resconf_cli::cli::GlobalOpts;

/// Minimal Cordova project descriptor with content outside any platform.
pub const WIDGET: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<widget id="io.example.app" version="1.0.0" xmlns="http://www.w3.org/ns/widgets">
    <name>Example</name>
    <!-- keep me -->
    <preference name="Fullscreen" value="true"/>
</widget>
"#;

/// An isolated project backed by a [`tempfile::TempDir`].
pub struct TestProject {
    pub root: tempfile::TempDir,
}

impl TestProject {
    /// Create an empty project directory.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Create a project whose config.xml is [`WIDGET`].
    pub fn with_widget() -> Self {
        Self::new().with_config_xml(WIDGET)
    }

    /// Write `config.xml` at the project root.
    pub fn with_config_xml(self, xml: &str) -> Self {
        self.with_file("config.xml", xml)
    }

    /// Write `resconf.toml` at the project root.
    pub fn with_settings(self, toml: &str) -> Self {
        self.with_file("resconf.toml", toml)
    }

    /// Write a JSON manifest at `name`.
    pub fn with_manifest(self, name: &str, json: &str) -> Self {
        self.with_file(name, json)
    }

    /// Write `contents` to `relative`, creating parent directories.
    pub fn with_file(self, relative: &str, contents: &str) -> Self {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dir");
        }
        std::fs::write(&path, contents).expect("write project file");
        self
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn config_xml_path(&self) -> PathBuf {
        self.path().join("config.xml")
    }

    /// Global options pointing at this project.
    pub fn global(&self) -> GlobalOpts {
        GlobalOpts {
            root: Some(self.path().to_path_buf()),
            ..GlobalOpts::default()
        }
    }

    /// Global options pointing at this project with `--dry-run`.
    pub fn dry_run(&self) -> GlobalOpts {
        GlobalOpts {
            dry_run: true,
            ..self.global()
        }
    }

    pub fn read_config_xml(&self) -> String {
        std::fs::read_to_string(self.config_xml_path()).expect("read config.xml")
    }
}

/// Count occurrences of `needle` in `haystack`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
