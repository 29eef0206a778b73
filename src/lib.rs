//! Resource reconciliation for Cordova-style project descriptors.
//!
//! Keeps the `<icon>` and `<splash>` entries inside each
//! `<platform name="…">` block of `config.xml` in sync with the images an
//! upstream pipeline generates, without duplicating entries across runs or
//! across `/` vs `\` path spellings.
//!
//! The public API is organised into layers:
//!
//! - **[`resources`]**: resource descriptors, the built-in catalog and JSON manifests
//! - **[`rules`]**: the static per-platform, per-type rule table
//! - **[`reconcile`]**: selector generation, find-or-create, attribute writing and the driver
//! - **[`document`]**: the owned XML tree with its reader and writer
//! - **[`config`]**: `resconf.toml` settings and validation
//! - **[`commands`]**: top-level subcommand orchestration (`reconcile`, `check`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod platform;
pub mod reconcile;
pub mod resources;
pub mod rules;
