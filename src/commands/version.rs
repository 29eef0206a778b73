//! Command: print version information.

/// Version string, preferring the one stamped by the build script.
#[must_use]
pub fn version() -> &'static str {
    option_env!("RESCONF_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Print the resconf version to stdout.
#[allow(clippy::print_stdout)]
pub fn run() {
    println!("resconf {}", version());
}
