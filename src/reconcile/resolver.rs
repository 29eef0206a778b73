//! Find-or-create of resource elements inside a container.
use crate::document::{Element, Selector};

/// Result of applying a closure to the resolved element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<T> {
    /// Value returned by the closure.
    pub output: T,
    /// `true` if no existing child matched and a new one was appended.
    pub created: bool,
}

/// Resolve the child of `container` that `selectors` identify and run
/// `apply` on it.
///
/// Selectors are tried in order; the first child matching the first
/// selector that matches anything wins.  If none match, a new empty
/// `node_name` element is appended.  Never fails.
pub fn resolve<T>(
    container: &mut Element,
    node_name: &str,
    selectors: &[Selector],
    apply: impl FnOnce(&mut Element) -> T,
) -> Resolved<T> {
    let existing = selectors
        .iter()
        .find_map(|selector| container.position(selector));

    if let Some(element) = existing.and_then(|index| container.child_element_mut(index)) {
        return Resolved {
            output: apply(element),
            created: false,
        };
    }

    let mut element = Element::new(node_name);
    let output = apply(&mut element);
    container.append_element(element);
    Resolved {
        output,
        created: true,
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::document::Predicate;

    fn by_src(value: &str) -> Selector {
        Selector::new("icon").with(Predicate::equals("src", value))
    }

    fn attr_of(key: &'static str) -> impl FnOnce(&mut Element) -> Option<String> {
        move |el| el.attr(key).map(str::to_string)
    }

    #[test]
    fn appends_when_nothing_matches() {
        let mut container = Element::new("platform");
        let resolved = resolve(&mut container, "icon", &[by_src("a.png")], |el| {
            el.set_attr("src", "a.png")
        });
        assert!(resolved.created);
        assert!(resolved.output);
        assert_eq!(container.child_elements().count(), 1);
        assert_eq!(container.child_elements().next().unwrap().attr("src"), Some("a.png"));
    }

    #[test]
    fn reuses_first_match() {
        let mut container = Element::new("platform")
            .with_child(Element::new("icon").with_attr("src", "a.png"))
            .with_child(Element::new("icon").with_attr("src", "a.png").with_attr("dup", "1"));
        let resolved = resolve(&mut container, "icon", &[by_src("a.png")], attr_of("dup"));
        assert!(!resolved.created);
        assert_eq!(resolved.output, None);
    }

    #[test]
    fn earlier_selector_takes_priority() {
        let mut container = Element::new("platform")
            .with_child(Element::new("icon").with_attr("src", "b.png"))
            .with_child(Element::new("icon").with_attr("src", "a.png"));
        let resolved = resolve(
            &mut container,
            "icon",
            &[by_src("a.png"), by_src("b.png")],
            attr_of("src"),
        );
        assert_eq!(resolved.output.as_deref(), Some("a.png"));
    }

    #[test]
    fn later_selector_used_when_first_misses() {
        let mut container =
            Element::new("platform").with_child(Element::new("icon").with_attr("src", "res\\a.png"));
        let resolved = resolve(
            &mut container,
            "icon",
            &[by_src("res/a.png"), by_src("res\\a.png")],
            |el| el.set_attr("src", "res/a.png"),
        );
        assert!(!resolved.created);
        assert_eq!(container.child_elements().count(), 1);
        assert_eq!(container.child_elements().next().unwrap().attr("src"), Some("res/a.png"));
    }

    #[test]
    fn ignores_children_with_other_names() {
        let mut container =
            Element::new("platform").with_child(Element::new("splash").with_attr("src", "a.png"));
        let resolved = resolve(&mut container, "icon", &[by_src("a.png")], |el| el.name.clone());
        assert!(resolved.created);
        assert_eq!(resolved.output, "icon");
        assert_eq!(container.children.len(), 2);
    }

    #[test]
    fn bare_selector_matches_any_same_named_child() {
        let mut container =
            Element::new("platform").with_child(Element::new("icon").with_attr("src", "x.png"));
        let resolved = resolve(&mut container, "icon", &[Selector::new("icon")], |_| ());
        assert!(!resolved.created);
    }

    #[test]
    fn appended_element_carries_written_attributes() {
        let mut container = Element::new("platform").with_child(Element::new("splash"));
        resolve(&mut container, "icon", &[], |el| el.set_attr("src", "a.png"));
        let last = container.child_elements().last().unwrap();
        assert_eq!(last.name, "icon");
        assert_eq!(last.attr("src"), Some("a.png"));
    }
}
