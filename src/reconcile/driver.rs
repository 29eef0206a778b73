//! Per-platform reconciliation loop.
use tracing::debug;

use super::{
    NodeChange, PlatformReport, ReconcileReport, ResourceOutcome, SkipReason, attributes,
    resolver, selectors,
};
use crate::document::{Document, Element, Predicate, Selector};
use crate::platform::Platform;
use crate::resources::{ResourceDescriptor, ResourceKey};
use crate::rules;

/// The project's preferred screen orientation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OrientationPreference {
    /// No preference: every orientation is written.
    #[default]
    Default,
    /// Only resources for this orientation (or none) are written.
    Only(String),
}

impl OrientationPreference {
    /// Parse a preference value; empty and `default` mean no preference.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | "default" => Self::Default,
            other => Self::Only(other.to_string()),
        }
    }

    /// Read `<preference name="Orientation" value="…"/>` from the root
    /// element's direct children.
    #[must_use]
    pub fn from_root(root: &Element) -> Self {
        let selector =
            Selector::new("preference").with(Predicate::equals("name", "Orientation"));
        root.find(&selector)
            .and_then(|pref| pref.attr("value"))
            .map_or(Self::Default, Self::parse)
    }

    /// Whether `descriptor` should be written under this preference.
    #[must_use]
    pub fn admits(&self, descriptor: &ResourceDescriptor) -> bool {
        match self {
            Self::Default => true,
            Self::Only(wanted) => descriptor
                .get(ResourceKey::Orientation)
                .is_none_or(|value| value.to_string() == *wanted),
        }
    }
}

/// Partition `resources` by platform.
///
/// Platforms appear in order of first occurrence; each partition keeps the
/// input order of its descriptors.
#[must_use]
pub fn group_by_platform(
    resources: &[ResourceDescriptor],
) -> Vec<(Platform, Vec<&ResourceDescriptor>)> {
    let mut groups: Vec<(Platform, Vec<&ResourceDescriptor>)> = Vec::new();
    for descriptor in resources {
        if let Some((_, group)) = groups.iter_mut().find(|(p, _)| *p == descriptor.platform) {
            group.push(descriptor);
        } else {
            groups.push((descriptor.platform, vec![descriptor]));
        }
    }
    groups
}

/// Reconcile `resources` into the `<platform>` containers under `root`.
///
/// The tree is mutated in place.  Descriptor-level problems (unsupported
/// pairs, excluded descriptors, orientation mismatches) are reported as
/// skips, never as errors.
pub fn reconcile(
    root: &mut Element,
    resources: &[ResourceDescriptor],
    orientation: &OrientationPreference,
) -> ReconcileReport {
    let platforms = group_by_platform(resources)
        .into_iter()
        .map(|(platform, group)| reconcile_platform(root, platform, &group, orientation))
        .collect();
    ReconcileReport { platforms }
}

/// Reconcile the document's root using the orientation preference it
/// declares.
pub fn reconcile_document(doc: &mut Document, resources: &[ResourceDescriptor]) -> ReconcileReport {
    let orientation = OrientationPreference::from_root(&doc.root);
    debug!("orientation preference: {orientation:?}");
    reconcile(&mut doc.root, resources, &orientation)
}

fn reconcile_platform(
    root: &mut Element,
    platform: Platform,
    group: &[&ResourceDescriptor],
    orientation: &OrientationPreference,
) -> PlatformReport {
    let container_selector =
        Selector::new("platform").with(Predicate::equals("name", platform.as_str()));
    let container = resolver::resolve(root, "platform", &[container_selector], |container| {
        container.set_attr("name", platform.as_str());
        group
            .iter()
            .map(|descriptor| ResourceOutcome {
                kind: descriptor.kind,
                label: descriptor.label(),
                change: reconcile_resource(container, descriptor, orientation),
            })
            .collect::<Vec<_>>()
    });
    if container.created {
        debug!("created <platform name=\"{platform}\">");
    }

    PlatformReport {
        platform,
        container_created: container.created,
        outcomes: container.output,
    }
}

fn reconcile_resource(
    container: &mut Element,
    descriptor: &ResourceDescriptor,
    orientation: &OrientationPreference,
) -> NodeChange {
    let skip = |reason: SkipReason| {
        debug!("skip {} ({}): {}", descriptor.label(), descriptor.kind, reason.as_str());
        NodeChange::Skipped(reason)
    };

    if !orientation.admits(descriptor) {
        return skip(SkipReason::OrientationMismatch);
    }
    let Some(rule) = rules::lookup(descriptor.platform, descriptor.kind) else {
        return skip(SkipReason::Unsupported);
    };
    if !rule.includes(descriptor) {
        return skip(SkipReason::Excluded);
    }

    let selectors = selectors(rule, descriptor);
    let resolved = resolver::resolve(container, rule.node_name, &selectors, |element| {
        attributes::write(element, rule, descriptor)
    });

    let change = if resolved.created {
        NodeChange::Created
    } else if resolved.output {
        NodeChange::Updated
    } else {
        NodeChange::Unchanged
    };
    debug!("{change:?} {}", descriptor.label());
    change
}
