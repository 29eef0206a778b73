//! Resource descriptors: one record per generated asset.
pub mod catalog;
pub mod manifest;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::platform::{Orientation, Platform, ResourceType};

/// Field names a descriptor may carry.  Each doubles as the XML attribute
/// name the value is written under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKey {
    /// Single image path.
    Src,
    /// Adaptive icon foreground layer path.
    Foreground,
    /// Adaptive icon background layer path.
    Background,
    /// Width in pixels.
    Width,
    /// Height in pixels.
    Height,
    /// Android density qualifier (`mdpi`, `land-hdpi`).
    Density,
    /// `portrait` or `landscape`.
    Orientation,
    /// Windows asset target (`Square44x44Logo`).
    Target,
}

impl ResourceKey {
    /// Field and attribute name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Src => "src",
            Self::Foreground => "foreground",
            Self::Background => "background",
            Self::Width => "width",
            Self::Height => "height",
            Self::Density => "density",
            Self::Orientation => "orientation",
            Self::Target => "target",
        }
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scalar descriptor value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceValue {
    /// JSON boolean.
    Flag(bool),
    /// Non-negative JSON number.
    Number(u64),
    /// JSON string.
    Text(String),
}

impl ResourceValue {
    /// Empty strings, zero and `false` count as absent when writing.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Number(n) => *n != 0,
            Self::Text(text) => !text.is_empty(),
        }
    }
}

impl fmt::Display for ResourceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for ResourceValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ResourceValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u32> for ResourceValue {
    fn from(value: u32) -> Self {
        Self::Number(u64::from(value))
    }
}

impl From<bool> for ResourceValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<Orientation> for ResourceValue {
    fn from(value: Orientation) -> Self {
        Self::Text(value.as_str().to_string())
    }
}

/// One generated asset to be reflected into the project descriptor.
///
/// # Examples
///
/// ```
/// use resconf_cli::platform::{Platform, ResourceType};
/// use resconf_cli::resources::{ResourceDescriptor, ResourceKey};
///
/// let icon = ResourceDescriptor::new(Platform::Android, ResourceType::Icon)
///     .with(ResourceKey::Src, "resources/android/icon/drawable-mdpi-icon.png")
///     .with(ResourceKey::Density, "mdpi");
///
/// assert_eq!(icon.text(ResourceKey::Density), Some("mdpi"));
/// assert!(icon.get(ResourceKey::Target).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// Platform the asset belongs to.
    pub platform: Platform,
    /// Resource type, `type` in manifests.
    #[serde(rename = "type")]
    pub kind: ResourceType,
    #[serde(flatten)]
    fields: BTreeMap<ResourceKey, ResourceValue>,
}

impl ResourceDescriptor {
    /// A descriptor with no fields.
    #[must_use]
    pub const fn new(platform: Platform, kind: ResourceType) -> Self {
        Self {
            platform,
            kind,
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field setter.
    #[must_use]
    pub fn with(mut self, key: ResourceKey, value: impl Into<ResourceValue>) -> Self {
        self.fields.insert(key, value.into());
        self
    }

    /// Value of `key`, if the descriptor carries it.
    #[must_use]
    pub fn get(&self, key: ResourceKey) -> Option<&ResourceValue> {
        self.fields.get(&key)
    }

    /// Value of `key` if it is a text value.
    #[must_use]
    pub fn text(&self, key: ResourceKey) -> Option<&str> {
        match self.fields.get(&key) {
            Some(ResourceValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Short label for log messages: the first path-like field present.
    #[must_use]
    pub fn label(&self) -> String {
        [ResourceKey::Src, ResourceKey::Foreground, ResourceKey::Background]
            .into_iter()
            .find_map(|key| self.get(key))
            .map_or_else(
                || format!("{} {}", self.platform, self.kind),
                ToString::to_string,
            )
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn falsy_values() {
        assert!(!ResourceValue::from("").is_truthy());
        assert!(!ResourceValue::from(0u32).is_truthy());
        assert!(!ResourceValue::from(false).is_truthy());
        assert!(ResourceValue::from("x").is_truthy());
        assert!(ResourceValue::from(1u32).is_truthy());
        assert!(ResourceValue::from(true).is_truthy());
    }

    #[test]
    fn value_display() {
        assert_eq!(ResourceValue::from(36u32).to_string(), "36");
        assert_eq!(ResourceValue::from("ldpi").to_string(), "ldpi");
        assert_eq!(ResourceValue::from(true).to_string(), "true");
    }

    #[test]
    fn absent_keys_are_not_defaulted() {
        let d = ResourceDescriptor::new(Platform::Ios, ResourceType::Icon)
            .with(ResourceKey::Src, "icon.png");
        assert_eq!(d.text(ResourceKey::Src), Some("icon.png"));
        assert!(d.get(ResourceKey::Width).is_none());
    }

    #[test]
    fn deserializes_flat_json() {
        let json = r#"{"platform":"android","type":"adaptive-icon","foreground":"f.png","background":"b.png","density":"mdpi","width":108}"#;
        let d: ResourceDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(d.platform, Platform::Android);
        assert_eq!(d.kind, ResourceType::AdaptiveIcon);
        assert_eq!(d.text(ResourceKey::Foreground), Some("f.png"));
        assert_eq!(d.get(ResourceKey::Width), Some(&ResourceValue::Number(108)));
    }

    #[test]
    fn rejects_unknown_key() {
        let json = r#"{"platform":"ios","type":"icon","colour":"red"}"#;
        assert!(serde_json::from_str::<ResourceDescriptor>(json).is_err());
    }

    #[test]
    fn serializes_flat_json() {
        let d = ResourceDescriptor::new(Platform::Windows, ResourceType::Splash)
            .with(ResourceKey::Target, "SplashScreen");
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["platform"], "windows");
        assert_eq!(json["type"], "splash");
        assert_eq!(json["target"], "SplashScreen");
    }

    #[test]
    fn label_prefers_src() {
        let d = ResourceDescriptor::new(Platform::Android, ResourceType::AdaptiveIcon)
            .with(ResourceKey::Foreground, "f.png");
        assert_eq!(d.label(), "f.png");
        let bare = ResourceDescriptor::new(Platform::Ios, ResourceType::Splash);
        assert_eq!(bare.label(), "ios splash");
    }
}
