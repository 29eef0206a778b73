//! The compiled-in rule table.
use super::{IndexAttribute, NodeAttribute, RuleSet, always, has_target};
use crate::platform::{Platform, ResourceType};
use crate::resources::ResourceKey;

const ANDROID_ICON: RuleSet = RuleSet {
    node_name: "icon",
    node_attributes: &[
        NodeAttribute::path(ResourceKey::Src),
        NodeAttribute::plain(ResourceKey::Density),
    ],
    index_attributes: &[IndexAttribute::path(ResourceKey::Src)],
    included: always,
};

const ANDROID_ADAPTIVE_ICON: RuleSet = RuleSet {
    node_name: "icon",
    node_attributes: &[
        NodeAttribute::path(ResourceKey::Foreground),
        NodeAttribute::path(ResourceKey::Background),
        NodeAttribute::plain(ResourceKey::Density),
    ],
    index_attributes: &[
        IndexAttribute::path(ResourceKey::Foreground),
        IndexAttribute::path(ResourceKey::Background),
        IndexAttribute::value(ResourceKey::Density),
    ],
    included: always,
};

const ANDROID_SPLASH: RuleSet = RuleSet {
    node_name: "splash",
    node_attributes: &[
        NodeAttribute::path(ResourceKey::Src),
        NodeAttribute::plain(ResourceKey::Density),
    ],
    index_attributes: &[IndexAttribute::path(ResourceKey::Src)],
    included: always,
};

const IOS_ICON: RuleSet = RuleSet {
    node_name: "icon",
    node_attributes: &[
        NodeAttribute::path(ResourceKey::Src),
        NodeAttribute::plain(ResourceKey::Width),
        NodeAttribute::plain(ResourceKey::Height),
    ],
    index_attributes: &[IndexAttribute::path(ResourceKey::Src)],
    included: always,
};

const IOS_SPLASH: RuleSet = RuleSet {
    node_name: "splash",
    node_attributes: &[
        NodeAttribute::path(ResourceKey::Src),
        NodeAttribute::plain(ResourceKey::Width),
        NodeAttribute::plain(ResourceKey::Height),
    ],
    index_attributes: &[IndexAttribute::path(ResourceKey::Src)],
    included: always,
};

const WINDOWS_ICON: RuleSet = RuleSet {
    node_name: "icon",
    node_attributes: &[
        NodeAttribute::path(ResourceKey::Src),
        NodeAttribute::plain(ResourceKey::Target),
    ],
    index_attributes: &[IndexAttribute::path(ResourceKey::Src)],
    included: has_target,
};

const WINDOWS_SPLASH: RuleSet = RuleSet {
    node_name: "splash",
    node_attributes: &[
        NodeAttribute::path(ResourceKey::Src),
        NodeAttribute::plain(ResourceKey::Width),
        NodeAttribute::plain(ResourceKey::Height),
        NodeAttribute::plain(ResourceKey::Target),
    ],
    index_attributes: &[IndexAttribute::path(ResourceKey::Src)],
    included: has_target,
};

/// Rule set for `(platform, kind)`, or `None` when the platform does not
/// offer that resource type.
#[must_use]
pub const fn lookup(platform: Platform, kind: ResourceType) -> Option<&'static RuleSet> {
    match (platform, kind) {
        (Platform::Android, ResourceType::Icon) => Some(&ANDROID_ICON),
        (Platform::Android, ResourceType::AdaptiveIcon) => Some(&ANDROID_ADAPTIVE_ICON),
        (Platform::Android, ResourceType::Splash) => Some(&ANDROID_SPLASH),
        (Platform::Ios, ResourceType::Icon) => Some(&IOS_ICON),
        (Platform::Ios, ResourceType::Splash) => Some(&IOS_SPLASH),
        (Platform::Windows, ResourceType::Icon) => Some(&WINDOWS_ICON),
        (Platform::Windows, ResourceType::Splash) => Some(&WINDOWS_SPLASH),
        (Platform::Ios | Platform::Windows, ResourceType::AdaptiveIcon) => None,
    }
}

/// Every defined `(platform, kind, rule set)` triple.
pub fn all() -> impl Iterator<Item = (Platform, ResourceType, &'static RuleSet)> {
    Platform::ALL.into_iter().flat_map(|platform| {
        ResourceType::ALL
            .into_iter()
            .filter_map(move |kind| lookup(platform, kind).map(|rule| (platform, kind, rule)))
    })
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::resources::ResourceDescriptor;
    use crate::rules::{AttributeKind, IndexTransform};

    #[test]
    fn unsupported_pairs_are_absent() {
        assert!(lookup(Platform::Ios, ResourceType::AdaptiveIcon).is_none());
        assert!(lookup(Platform::Windows, ResourceType::AdaptiveIcon).is_none());
    }

    #[test]
    fn all_lists_seven_rule_sets() {
        assert_eq!(all().count(), 7);
    }

    #[test]
    fn every_index_attribute_is_declared() {
        for (platform, kind, rule) in all() {
            for index in rule.index_attributes {
                assert!(
                    rule.node_attribute(index.key).is_some(),
                    "{platform} {kind}: index key {} is not a node attribute",
                    index.key
                );
            }
        }
    }

    #[test]
    fn every_path_index_is_a_path_attribute() {
        for (platform, kind, rule) in all() {
            for index in rule.index_attributes {
                if index.transform == IndexTransform::PathVariants {
                    assert_eq!(
                        rule.node_attribute(index.key).map(|a| a.kind),
                        Some(AttributeKind::Path),
                        "{platform} {kind}: {}",
                        index.key
                    );
                }
            }
        }
    }

    #[test]
    fn adaptive_icon_shares_icon_node_name() {
        let adaptive = lookup(Platform::Android, ResourceType::AdaptiveIcon).unwrap();
        let icon = lookup(Platform::Android, ResourceType::Icon).unwrap();
        assert_eq!(adaptive.node_name, icon.node_name);
        assert_eq!(adaptive.index_attributes.len(), 3);
        assert_eq!(adaptive.index_attributes[2].transform, IndexTransform::Identity);
    }

    #[test]
    fn windows_rules_require_target() {
        let icon = ResourceDescriptor::new(Platform::Windows, ResourceType::Icon);
        let rule = lookup(Platform::Windows, ResourceType::Icon).unwrap();
        assert!(!rule.includes(&icon));
        assert!(rule.includes(&icon.with(ResourceKey::Target, "StoreLogo")));
    }

    #[test]
    fn android_and_ios_include_everything() {
        for platform in [Platform::Android, Platform::Ios] {
            let rule = lookup(platform, ResourceType::Splash).unwrap();
            assert!(rule.includes(&ResourceDescriptor::new(platform, ResourceType::Splash)));
        }
    }
}
