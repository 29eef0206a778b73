//! Descriptor manifests written by an external image pipeline.
//!
//! ```json
//! { "resources": [
//!     { "platform": "android", "type": "icon", "src": "resources/android/icon/drawable-ldpi-icon.png",
//!       "width": 36, "height": 36, "density": "ldpi" }
//! ] }
//! ```
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::ResourceDescriptor;
use crate::error::ManifestError;

/// Top-level manifest document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Descriptors in pipeline order.
    #[serde(default)]
    pub resources: Vec<ResourceDescriptor>,
}

/// Load the descriptors listed in the manifest at `path`.
///
/// # Errors
///
/// Returns [`ManifestError::Io`] if the file cannot be read and
/// [`ManifestError::Json`] if it is not a valid manifest.
pub fn load(path: &Path) -> Result<Vec<ResourceDescriptor>, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let manifest: Manifest =
        serde_json::from_str(&content).map_err(|source| ManifestError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(manifest.resources)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::platform::{Platform, ResourceType};
    use crate::resources::ResourceKey;

    fn write_manifest(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.json");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_resources_in_order() {
        let (_dir, path) = write_manifest(
            r#"{"resources": [
                {"platform": "ios", "type": "icon", "src": "resources/ios/icon/icon.png", "width": 57, "height": 57},
                {"platform": "windows", "type": "splash", "src": "resources/windows/splash/SplashScreen.scale-100.png", "target": "SplashScreen"}
            ]}"#,
        );
        let resources = load(&path).unwrap();
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].platform, Platform::Ios);
        assert_eq!(resources[1].kind, ResourceType::Splash);
        assert_eq!(resources[1].text(ResourceKey::Target), Some("SplashScreen"));
    }

    #[test]
    fn empty_object_has_no_resources() {
        let (_dir, path) = write_manifest("{}");
        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn unknown_platform_is_an_error() {
        let (_dir, path) =
            write_manifest(r#"{"resources": [{"platform": "tizen", "type": "icon"}]}"#);
        let err = load(&path).unwrap_err();
        assert!(matches!(err, ManifestError::Json { .. }), "got {err}");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ManifestError::Io { .. }));
    }
}
