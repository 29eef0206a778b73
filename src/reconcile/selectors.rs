//! Selector generation from a rule set's index attributes.
use crate::document::{Predicate, Selector};
use crate::resources::ResourceDescriptor;
use crate::rules::{IndexAttribute, IndexTransform, RuleSet};

/// Build the ordered selectors identifying `descriptor`'s element.
///
/// Each index attribute contributes a list of candidate predicates; the
/// result is their cartesian product in declaration order, with the last
/// attribute varying fastest.  Attributes that contribute nothing are
/// dropped, so a rule with no usable index attributes yields a single bare
/// `node_name` selector.
///
/// # Examples
///
/// ```
/// use resconf_cli::platform::{Platform, ResourceType};
/// use resconf_cli::reconcile::selectors;
/// use resconf_cli::resources::{ResourceDescriptor, ResourceKey};
/// use resconf_cli::rules;
///
/// let rule = rules::lookup(Platform::Android, ResourceType::Icon).unwrap();
/// let icon = ResourceDescriptor::new(Platform::Android, ResourceType::Icon)
///     .with(ResourceKey::Src, "res/icon.png");
///
/// let found: Vec<String> = selectors(rule, &icon).iter().map(ToString::to_string).collect();
/// assert_eq!(found, ["icon[@src='res/icon.png']", "icon[@src='res\\icon.png']"]);
/// ```
#[must_use]
pub fn selectors(rule: &RuleSet, descriptor: &ResourceDescriptor) -> Vec<Selector> {
    let lists = rule
        .index_attributes
        .iter()
        .map(|index| fragments(rule, index, descriptor))
        .filter(|list| !list.is_empty())
        .collect::<Vec<_>>();
    product(rule.node_name, &lists)
}

/// Cartesian product of predicate lists, last list varying fastest.
fn product(node_name: &str, lists: &[Vec<Predicate>]) -> Vec<Selector> {
    let mut combos: Vec<Vec<Predicate>> = vec![Vec::new()];
    for fragments in lists {
        combos = combos
            .iter()
            .flat_map(|prefix| {
                fragments.iter().map(move |fragment| {
                    let mut chain = prefix.clone();
                    chain.push(fragment.clone());
                    chain
                })
            })
            .collect();
    }

    combos
        .into_iter()
        .map(|predicates| Selector {
            node_name: node_name.to_string(),
            predicates,
        })
        .collect()
}

/// Candidate predicates one index attribute contributes.
fn fragments(
    rule: &RuleSet,
    index: &IndexAttribute,
    descriptor: &ResourceDescriptor,
) -> Vec<Predicate> {
    if rule.node_attribute(index.key).is_none() {
        return Vec::new();
    }
    let key = index.key.as_str();
    if index.transform == IndexTransform::None {
        return vec![Predicate::present(key)];
    }
    let Some(value) = descriptor.get(index.key) else {
        return Vec::new();
    };
    index
        .transform
        .apply(&value.to_string())
        .into_iter()
        .map(|candidate| Predicate::equals(key, candidate))
        .collect()
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::platform::{Platform, ResourceType};
    use crate::resources::ResourceKey;
    use crate::rules::{NodeAttribute, always};

    fn render(selectors: &[Selector]) -> Vec<String> {
        selectors.iter().map(ToString::to_string).collect()
    }

    fn icon() -> ResourceDescriptor {
        ResourceDescriptor::new(Platform::Android, ResourceType::Icon)
    }

    #[test]
    fn no_index_attributes_yield_one_bare_selector() {
        let rule = RuleSet {
            node_name: "icon",
            node_attributes: const { &[NodeAttribute::path(ResourceKey::Src)] },
            index_attributes: &[],
            included: always,
        };
        let found = selectors(&rule, &icon().with(ResourceKey::Src, "a.png"));
        assert_eq!(render(&found), ["icon"]);
    }

    #[test]
    fn undeclared_index_key_is_dropped() {
        let rule = RuleSet {
            node_name: "icon",
            node_attributes: const { &[NodeAttribute::path(ResourceKey::Src)] },
            index_attributes: const { &[
                IndexAttribute::value(ResourceKey::Density),
                IndexAttribute::path(ResourceKey::Src),
            ] },
            included: always,
        };
        let found = selectors(
            &rule,
            &icon()
                .with(ResourceKey::Src, "a.png")
                .with(ResourceKey::Density, "mdpi"),
        );
        assert_eq!(render(&found), ["icon[@src='a.png']"]);
    }

    #[test]
    fn presence_index_ignores_value() {
        let rule = RuleSet {
            node_name: "icon",
            node_attributes: const { &[NodeAttribute::plain(ResourceKey::Target)] },
            index_attributes: const { &[IndexAttribute::presence(ResourceKey::Target)] },
            included: always,
        };
        assert_eq!(render(&selectors(&rule, &icon())), ["icon[@target]"]);
    }

    #[test]
    fn absent_value_drops_the_fragment() {
        let rule = RuleSet {
            node_name: "splash",
            node_attributes: const { &[
                NodeAttribute::path(ResourceKey::Src),
                NodeAttribute::plain(ResourceKey::Density),
            ] },
            index_attributes: const { &[
                IndexAttribute::path(ResourceKey::Src),
                IndexAttribute::value(ResourceKey::Density),
            ] },
            included: always,
        };
        let found = selectors(&rule, &icon().with(ResourceKey::Density, "hdpi"));
        assert_eq!(render(&found), ["splash[@density='hdpi']"]);
    }

    #[test]
    fn cartesian_product_varies_last_attribute_fastest() {
        let rule = RuleSet {
            node_name: "icon",
            node_attributes: const { &[
                NodeAttribute::path(ResourceKey::Foreground),
                NodeAttribute::path(ResourceKey::Background),
            ] },
            index_attributes: const { &[
                IndexAttribute::path(ResourceKey::Foreground),
                IndexAttribute::path(ResourceKey::Background),
            ] },
            included: always,
        };
        let descriptor = ResourceDescriptor::new(Platform::Android, ResourceType::AdaptiveIcon)
            .with(ResourceKey::Foreground, "a/f.png")
            .with(ResourceKey::Background, "a/b/c\\bg.png");
        let found = selectors(&rule, &descriptor);
        insta::assert_snapshot!(render(&found).join("\n"), @r"
        icon[@foreground='a/f.png'][@background='a/b/c/bg.png']
        icon[@foreground='a/f.png'][@background='a\b\c\bg.png']
        icon[@foreground='a\f.png'][@background='a/b/c/bg.png']
        icon[@foreground='a\f.png'][@background='a\b\c\bg.png']
        ");
    }

    #[test]
    fn presence_fragment_follows_value_fragments() {
        let rule = RuleSet {
            node_name: "splash",
            node_attributes: const { &[
                NodeAttribute::path(ResourceKey::Src),
                NodeAttribute::plain(ResourceKey::Density),
                NodeAttribute::plain(ResourceKey::Orientation),
            ] },
            index_attributes: const { &[
                IndexAttribute::path(ResourceKey::Src),
                IndexAttribute::value(ResourceKey::Density),
                IndexAttribute::presence(ResourceKey::Orientation),
            ] },
            included: always,
        };
        let descriptor = ResourceDescriptor::new(Platform::Android, ResourceType::Splash)
            .with(ResourceKey::Src, "res/splash.png")
            .with(ResourceKey::Density, "port-mdpi");
        let found = render(&selectors(&rule, &descriptor));
        assert_eq!(
            found,
            [
                "splash[@src='res/splash.png'][@density='port-mdpi'][@orientation]",
                "splash[@src='res\\splash.png'][@density='port-mdpi'][@orientation]",
            ]
        );
    }

    #[test]
    fn two_by_three_yields_six_with_second_fastest() {
        let lists = vec![
            vec![Predicate::equals("src", "a"), Predicate::equals("src", "b")],
            vec![
                Predicate::equals("density", "1"),
                Predicate::equals("density", "2"),
                Predicate::equals("density", "3"),
            ],
        ];
        let found = product("icon", &lists);
        assert_eq!(found.len(), 6);
        insta::assert_snapshot!(render(&found).join("\n"), @r"
        icon[@src='a'][@density='1']
        icon[@src='a'][@density='2']
        icon[@src='a'][@density='3']
        icon[@src='b'][@density='1']
        icon[@src='b'][@density='2']
        icon[@src='b'][@density='3']
        ");
    }

    #[test]
    fn numeric_identity_values_use_their_string_form() {
        let rule = RuleSet {
            node_name: "icon",
            node_attributes: const { &[NodeAttribute::plain(ResourceKey::Width)] },
            index_attributes: const { &[IndexAttribute::value(ResourceKey::Width)] },
            included: always,
        };
        let found = selectors(&rule, &icon().with(ResourceKey::Width, 48u32));
        assert_eq!(render(&found), ["icon[@width='48']"]);
    }

    #[test]
    fn android_adaptive_icon_scenario() {
        let rule = crate::rules::lookup(Platform::Android, ResourceType::AdaptiveIcon).unwrap();
        let descriptor = ResourceDescriptor::new(Platform::Android, ResourceType::AdaptiveIcon)
            .with(ResourceKey::Foreground, "f.png")
            .with(ResourceKey::Background, "b.png")
            .with(ResourceKey::Density, "mdpi");
        insta::assert_snapshot!(
            render(&selectors(rule, &descriptor)).join("\n"),
            @"icon[@foreground='f.png'][@background='b.png'][@density='mdpi']"
        );
    }
}
