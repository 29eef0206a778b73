//! Target platforms, resource types and orientations.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A target platform whose project descriptor carries resource entries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Android (`res/` densities).
    Android,
    /// iOS (point sizes and scale suffixes).
    Ios,
    /// Windows (UWP tile targets).
    Windows,
}

impl Platform {
    /// Every supported platform, in the order containers are documented.
    pub const ALL: [Self; 3] = [Self::Android, Self::Ios, Self::Windows];

    /// Name used for the `<platform name="…">` container.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Android => "android",
            Self::Ios => "ios",
            Self::Windows => "windows",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of generated resource.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceType {
    /// Plain, single-layer icon.
    Icon,
    /// Composite icon built from a foreground and a background layer.
    AdaptiveIcon,
    /// Splash/launch screen.
    Splash,
}

impl ResourceType {
    /// Every resource type.
    pub const ALL: [Self; 3] = [Self::Icon, Self::AdaptiveIcon, Self::Splash];

    /// Name used in manifests and log output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Icon => "icon",
            Self::AdaptiveIcon => "adaptive-icon",
            Self::Splash => "splash",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Screen orientation a splash resource is drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Taller than wide.
    Portrait,
    /// Wider than tall.
    Landscape,
}

impl Orientation {
    /// Value stored in the `orientation` field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
