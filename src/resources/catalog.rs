//! Static tables of the assets the image pipeline produces per platform.
//!
//! Paths are relative to the project's resources directory and always use
//! `/`.  Expanding a table yields one [`ResourceDescriptor`] per entry.
use rayon::prelude::*;

use super::{ResourceDescriptor, ResourceKey};
use crate::platform::{Orientation, Platform, ResourceType};

/// Image file(s) backing a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// A single image, written as `src`.
    Single(&'static str),
    /// Foreground and background layers of an adaptive icon.
    Layered {
        /// Foreground layer.
        foreground: &'static str,
        /// Background layer.
        background: &'static str,
    },
}

/// One generated asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Image file(s), relative to the resources directory.
    pub source: Source,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Android density qualifier.
    pub density: Option<&'static str>,
    /// Orientation the image is drawn for.
    pub orientation: Option<Orientation>,
    /// Windows asset target.
    pub target: Option<&'static str>,
}

impl CatalogEntry {
    const fn square(file: &'static str, size: u32) -> Self {
        Self {
            source: Source::Single(file),
            width: size,
            height: size,
            density: None,
            orientation: None,
            target: None,
        }
    }

    const fn sized(file: &'static str, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::square(file, 0)
        }
    }

    const fn density(mut self, density: &'static str) -> Self {
        self.density = Some(density);
        self
    }

    const fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    const fn target(mut self, target: &'static str) -> Self {
        self.target = Some(target);
        self
    }

    const fn layered(
        foreground: &'static str,
        background: &'static str,
        size: u32,
        density: &'static str,
    ) -> Self {
        Self {
            source: Source::Layered {
                foreground,
                background,
            },
            width: size,
            height: size,
            density: Some(density),
            orientation: None,
            target: None,
        }
    }

    /// Build the descriptor for this entry, prefixing paths with
    /// `resources_dir`.
    #[must_use]
    pub fn descriptor(
        &self,
        platform: Platform,
        kind: ResourceType,
        resources_dir: &str,
    ) -> ResourceDescriptor {
        let mut descriptor = ResourceDescriptor::new(platform, kind);
        descriptor = match self.source {
            Source::Single(file) => descriptor.with(ResourceKey::Src, join(resources_dir, file)),
            Source::Layered {
                foreground,
                background,
            } => descriptor
                .with(ResourceKey::Foreground, join(resources_dir, foreground))
                .with(ResourceKey::Background, join(resources_dir, background)),
        };
        descriptor = descriptor
            .with(ResourceKey::Width, self.width)
            .with(ResourceKey::Height, self.height);
        if let Some(density) = self.density {
            descriptor = descriptor.with(ResourceKey::Density, density);
        }
        if let Some(orientation) = self.orientation {
            descriptor = descriptor.with(ResourceKey::Orientation, orientation);
        }
        if let Some(target) = self.target {
            descriptor = descriptor.with(ResourceKey::Target, target);
        }
        descriptor
    }
}

fn join(dir: &str, file: &str) -> String {
    let dir = dir.trim_end_matches(['/', '\\']);
    if dir.is_empty() {
        file.to_string()
    } else {
        format!("{dir}/{file}")
    }
}

const ANDROID_ICONS: &[CatalogEntry] = &[
    CatalogEntry::square("android/icon/drawable-ldpi-icon.png", 36).density("ldpi"),
    CatalogEntry::square("android/icon/drawable-mdpi-icon.png", 48).density("mdpi"),
    CatalogEntry::square("android/icon/drawable-hdpi-icon.png", 72).density("hdpi"),
    CatalogEntry::square("android/icon/drawable-xhdpi-icon.png", 96).density("xhdpi"),
    CatalogEntry::square("android/icon/drawable-xxhdpi-icon.png", 144).density("xxhdpi"),
    CatalogEntry::square("android/icon/drawable-xxxhdpi-icon.png", 192).density("xxxhdpi"),
];

const ANDROID_ADAPTIVE_ICONS: &[CatalogEntry] = &[
    CatalogEntry::layered(
        "android/icon/ldpi-foreground.png",
        "android/icon/ldpi-background.png",
        81,
        "ldpi",
    ),
    CatalogEntry::layered(
        "android/icon/mdpi-foreground.png",
        "android/icon/mdpi-background.png",
        108,
        "mdpi",
    ),
    CatalogEntry::layered(
        "android/icon/hdpi-foreground.png",
        "android/icon/hdpi-background.png",
        162,
        "hdpi",
    ),
    CatalogEntry::layered(
        "android/icon/xhdpi-foreground.png",
        "android/icon/xhdpi-background.png",
        216,
        "xhdpi",
    ),
    CatalogEntry::layered(
        "android/icon/xxhdpi-foreground.png",
        "android/icon/xxhdpi-background.png",
        324,
        "xxhdpi",
    ),
    CatalogEntry::layered(
        "android/icon/xxxhdpi-foreground.png",
        "android/icon/xxxhdpi-background.png",
        432,
        "xxxhdpi",
    ),
];

const ANDROID_SPLASHES: &[CatalogEntry] = &[
    CatalogEntry::sized("android/splash/drawable-land-ldpi-screen.png", 320, 240)
        .density("land-ldpi")
        .orientation(Orientation::Landscape),
    CatalogEntry::sized("android/splash/drawable-land-mdpi-screen.png", 480, 320)
        .density("land-mdpi")
        .orientation(Orientation::Landscape),
    CatalogEntry::sized("android/splash/drawable-land-hdpi-screen.png", 800, 480)
        .density("land-hdpi")
        .orientation(Orientation::Landscape),
    CatalogEntry::sized("android/splash/drawable-land-xhdpi-screen.png", 1280, 720)
        .density("land-xhdpi")
        .orientation(Orientation::Landscape),
    CatalogEntry::sized("android/splash/drawable-land-xxhdpi-screen.png", 1600, 960)
        .density("land-xxhdpi")
        .orientation(Orientation::Landscape),
    CatalogEntry::sized("android/splash/drawable-land-xxxhdpi-screen.png", 1920, 1280)
        .density("land-xxxhdpi")
        .orientation(Orientation::Landscape),
    CatalogEntry::sized("android/splash/drawable-port-ldpi-screen.png", 240, 320)
        .density("port-ldpi")
        .orientation(Orientation::Portrait),
    CatalogEntry::sized("android/splash/drawable-port-mdpi-screen.png", 320, 480)
        .density("port-mdpi")
        .orientation(Orientation::Portrait),
    CatalogEntry::sized("android/splash/drawable-port-hdpi-screen.png", 480, 800)
        .density("port-hdpi")
        .orientation(Orientation::Portrait),
    CatalogEntry::sized("android/splash/drawable-port-xhdpi-screen.png", 720, 1280)
        .density("port-xhdpi")
        .orientation(Orientation::Portrait),
    CatalogEntry::sized("android/splash/drawable-port-xxhdpi-screen.png", 960, 1600)
        .density("port-xxhdpi")
        .orientation(Orientation::Portrait),
    CatalogEntry::sized("android/splash/drawable-port-xxxhdpi-screen.png", 1280, 1920)
        .density("port-xxxhdpi")
        .orientation(Orientation::Portrait),
];

const IOS_ICONS: &[CatalogEntry] = &[
    CatalogEntry::square("ios/icon/icon.png", 57),
    CatalogEntry::square("ios/icon/icon@2x.png", 114),
    CatalogEntry::square("ios/icon/icon-20.png", 20),
    CatalogEntry::square("ios/icon/icon-20@2x.png", 40),
    CatalogEntry::square("ios/icon/icon-20@3x.png", 60),
    CatalogEntry::square("ios/icon/icon-29.png", 29),
    CatalogEntry::square("ios/icon/icon-29@2x.png", 58),
    CatalogEntry::square("ios/icon/icon-29@3x.png", 87),
    CatalogEntry::square("ios/icon/icon-40.png", 40),
    CatalogEntry::square("ios/icon/icon-40@2x.png", 80),
    CatalogEntry::square("ios/icon/icon-40@3x.png", 120),
    CatalogEntry::square("ios/icon/icon-50.png", 50),
    CatalogEntry::square("ios/icon/icon-50@2x.png", 100),
    CatalogEntry::square("ios/icon/icon-60@2x.png", 120),
    CatalogEntry::square("ios/icon/icon-60@3x.png", 180),
    CatalogEntry::square("ios/icon/icon-72.png", 72),
    CatalogEntry::square("ios/icon/icon-72@2x.png", 144),
    CatalogEntry::square("ios/icon/icon-76.png", 76),
    CatalogEntry::square("ios/icon/icon-76@2x.png", 152),
    CatalogEntry::square("ios/icon/icon-83.5@2x.png", 167),
    CatalogEntry::square("ios/icon/icon-1024.png", 1024),
];

const IOS_SPLASHES: &[CatalogEntry] = &[
    CatalogEntry::sized("ios/splash/Default-568h@2x~iphone.png", 640, 1136)
        .orientation(Orientation::Portrait),
    CatalogEntry::sized("ios/splash/Default-667h.png", 750, 1334)
        .orientation(Orientation::Portrait),
    CatalogEntry::sized("ios/splash/Default-736h.png", 1242, 2208)
        .orientation(Orientation::Portrait),
    CatalogEntry::sized("ios/splash/Default-Landscape-736h.png", 2208, 1242)
        .orientation(Orientation::Landscape),
    CatalogEntry::sized("ios/splash/Default-Landscape@2x~ipad.png", 2048, 1536)
        .orientation(Orientation::Landscape),
    CatalogEntry::sized("ios/splash/Default-Landscape@~ipadpro.png", 2732, 2048)
        .orientation(Orientation::Landscape),
    CatalogEntry::sized("ios/splash/Default-Landscape~ipad.png", 1024, 768)
        .orientation(Orientation::Landscape),
    CatalogEntry::sized("ios/splash/Default-Portrait@2x~ipad.png", 1536, 2048)
        .orientation(Orientation::Portrait),
    CatalogEntry::sized("ios/splash/Default-Portrait@~ipadpro.png", 2048, 2732)
        .orientation(Orientation::Portrait),
    CatalogEntry::sized("ios/splash/Default-Portrait~ipad.png", 768, 1024)
        .orientation(Orientation::Portrait),
    CatalogEntry::sized("ios/splash/Default@2x~iphone.png", 640, 960)
        .orientation(Orientation::Portrait),
    CatalogEntry::sized("ios/splash/Default~iphone.png", 320, 480)
        .orientation(Orientation::Portrait),
    CatalogEntry::sized("ios/splash/Default@2x~universal~anyany.png", 2732, 2732),
];

const WINDOWS_ICONS: &[CatalogEntry] = &[
    CatalogEntry::square("windows/icon/StoreLogo.scale-100.png", 50).target("StoreLogo"),
    CatalogEntry::square("windows/icon/StoreLogo.scale-400.png", 200).target("StoreLogo"),
    CatalogEntry::square("windows/icon/Square30x30Logo.scale-100.png", 30)
        .target("Square30x30Logo"),
    CatalogEntry::square("windows/icon/Square44x44Logo.scale-100.png", 44)
        .target("Square44x44Logo"),
    CatalogEntry::square("windows/icon/Square44x44Logo.scale-240.png", 106)
        .target("Square44x44Logo"),
    CatalogEntry::square("windows/icon/Square70x70Logo.scale-100.png", 70)
        .target("Square70x70Logo"),
    CatalogEntry::square("windows/icon/Square71x71Logo.scale-100.png", 71)
        .target("Square71x71Logo"),
    CatalogEntry::square("windows/icon/Square71x71Logo.scale-240.png", 170)
        .target("Square71x71Logo"),
    CatalogEntry::square("windows/icon/Square150x150Logo.scale-100.png", 150)
        .target("Square150x150Logo"),
    CatalogEntry::square("windows/icon/Square150x150Logo.scale-240.png", 360)
        .target("Square150x150Logo"),
    CatalogEntry::square("windows/icon/Square310x310Logo.scale-100.png", 310)
        .target("Square310x310Logo"),
    CatalogEntry::sized("windows/icon/Wide310x150Logo.scale-100.png", 310, 150)
        .target("Wide310x150Logo"),
    CatalogEntry::sized("windows/icon/Wide310x150Logo.scale-240.png", 744, 360)
        .target("Wide310x150Logo"),
    // Packaged by the build, never referenced from the descriptor.
    CatalogEntry::square(
        "windows/icon/Square44x44Logo.targetsize-24_altform-unplated.png",
        24,
    ),
];

const WINDOWS_SPLASHES: &[CatalogEntry] = &[
    CatalogEntry::sized("windows/splash/SplashScreen.scale-100.png", 620, 300)
        .target("SplashScreen"),
    CatalogEntry::sized("windows/splash/SplashScreen.scale-125.png", 775, 375)
        .target("SplashScreen"),
    CatalogEntry::sized("windows/splash/SplashScreen.scale-150.png", 930, 450)
        .target("SplashScreen"),
    CatalogEntry::sized("windows/splash/SplashScreen.scale-200.png", 1240, 600)
        .target("SplashScreen"),
    CatalogEntry::sized("windows/splash/SplashScreen.scale-400.png", 2480, 1200)
        .target("SplashScreen"),
];

/// Catalog entries generated for `(platform, kind)`; empty when the
/// platform does not offer that resource type.
#[must_use]
pub const fn entries(platform: Platform, kind: ResourceType) -> &'static [CatalogEntry] {
    match (platform, kind) {
        (Platform::Android, ResourceType::Icon) => ANDROID_ICONS,
        (Platform::Android, ResourceType::AdaptiveIcon) => ANDROID_ADAPTIVE_ICONS,
        (Platform::Android, ResourceType::Splash) => ANDROID_SPLASHES,
        (Platform::Ios, ResourceType::Icon) => IOS_ICONS,
        (Platform::Ios, ResourceType::Splash) => IOS_SPLASHES,
        (Platform::Windows, ResourceType::Icon) => WINDOWS_ICONS,
        (Platform::Windows, ResourceType::Splash) => WINDOWS_SPLASHES,
        (Platform::Ios | Platform::Windows, ResourceType::AdaptiveIcon) => &[],
    }
}

/// Expand the catalog into descriptors for every `platform × kind` pair.
///
/// Platforms are expanded in parallel; the result is ordered by platform
/// (as given), then by type (as given), then by table order.
#[must_use]
pub fn descriptors(
    platforms: &[Platform],
    kinds: &[ResourceType],
    resources_dir: &str,
) -> Vec<ResourceDescriptor> {
    let per_platform: Vec<Vec<ResourceDescriptor>> = platforms
        .par_iter()
        .map(|&platform| {
            kinds
                .iter()
                .flat_map(|&kind| {
                    entries(platform, kind)
                        .iter()
                        .map(move |entry| entry.descriptor(platform, kind, resources_dir))
                })
                .collect()
        })
        .collect();
    per_platform.into_iter().flatten().collect()
}
