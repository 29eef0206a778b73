#![allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
//! Reconciling the same descriptors twice yields the same document.
mod common;

use resconf_cli::document::{self, Selector};
use resconf_cli::platform::{Platform, ResourceType};
use resconf_cli::reconcile::{NodeChange, reconcile_document};
use resconf_cli::resources::{ResourceDescriptor, ResourceKey, catalog};

fn reconcile_twice(xml: &str, resources: &[ResourceDescriptor]) -> (String, String) {
    let mut doc = document::parse(xml).unwrap();
    reconcile_document(&mut doc, resources);
    let first = document::to_string(&doc).unwrap();

    let mut doc = document::parse(&first).unwrap();
    let report = reconcile_document(&mut doc, resources);
    assert!(!report.has_changes(), "second pass changed: {report:?}");
    (first, document::to_string(&doc).unwrap())
}

/// The full catalog converges after one pass.
#[test]
fn full_catalog_converges() {
    let resources = catalog::descriptors(&Platform::ALL, &ResourceType::ALL, "resources");
    let (first, second) = reconcile_twice(common::WIDGET, &resources);
    assert_eq!(first, second);
}

/// Legacy backslash entries are rewritten in place, not duplicated.
#[test]
fn backslash_entries_are_normalized_in_place() {
    let legacy = r#"<widget>
    <platform name="android">
        <icon src="resources\android\icon\drawable-hdpi-icon.png" density="hdpi"/>
        <splash src="resources\android\splash\drawable-land-mdpi-screen.png" density="land-mdpi"/>
    </platform>
</widget>
"#;
    let resources = catalog::descriptors(&[Platform::Android], &ResourceType::ALL, "resources");
    let (first, second) = reconcile_twice(legacy, &resources);
    assert_eq!(first, second);

    let doc = document::parse(&first).unwrap();
    let android = doc
        .root
        .find(&Selector::new("platform").with(document::Predicate::equals("name", "android")))
        .unwrap();
    assert_eq!(android.child_elements().count(), 6 + 6 + 12);
    assert!(!first.contains('\\'));
    assert_eq!(
        common::count(&first, "drawable-hdpi-icon.png"),
        1,
        "hdpi icon duplicated"
    );
}

/// Descriptors for a platform appear in the report in first-seen order.
#[test]
fn report_follows_descriptor_order() {
    let resources = vec![
        ResourceDescriptor::new(Platform::Windows, ResourceType::Splash)
            .with(ResourceKey::Src, "w.png")
            .with(ResourceKey::Target, "SplashScreen"),
        ResourceDescriptor::new(Platform::Ios, ResourceType::Icon).with(ResourceKey::Src, "i.png"),
    ];
    let mut doc = document::parse("<widget/>").unwrap();
    let report = reconcile_document(&mut doc, &resources);

    let order: Vec<_> = report.platforms.iter().map(|p| p.platform).collect();
    assert_eq!(order, vec![Platform::Windows, Platform::Ios]);
    assert!(report.platforms[0].container_created);
    assert_eq!(report.platforms[1].outcomes[0].change, NodeChange::Created);
}
