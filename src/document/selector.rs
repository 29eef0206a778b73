//! Structural selectors: a node name plus a chain of attribute predicates.
//!
//! The string form mirrors the familiar XPath step syntax, e.g.
//! `icon[@foreground='f.png'][@density='mdpi']`, and is what diagnostics and
//! tests compare against.  Matching is done on the typed form.
use std::fmt;

use super::Element;

/// A single attribute predicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// `[@key]`: the attribute exists, whatever its value.
    Present(String),
    /// `[@key='value']`: the attribute exists with exactly this value.
    Equals(String, String),
}

impl Predicate {
    /// `[@key]`.
    #[must_use]
    pub fn present(key: impl Into<String>) -> Self {
        Self::Present(key.into())
    }

    /// `[@key='value']`.
    #[must_use]
    pub fn equals(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Equals(key.into(), value.into())
    }

    /// Whether `element` satisfies this predicate.
    #[must_use]
    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Self::Present(key) => element.attr(key).is_some(),
            Self::Equals(key, value) => element.attr(key) == Some(value.as_str()),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(key) => write!(f, "[@{key}]"),
            Self::Equals(key, value) if value.contains('\'') => {
                write!(f, "[@{key}=\"{value}\"]")
            }
            Self::Equals(key, value) => write!(f, "[@{key}='{value}']"),
        }
    }
}

/// A node name and the predicates a matching element must satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    /// Required element name.
    pub node_name: String,
    /// Predicates, all of which must hold.
    pub predicates: Vec<Predicate>,
}

impl Selector {
    /// A selector matching any element named `node_name`.
    #[must_use]
    pub fn new(node_name: impl Into<String>) -> Self {
        Self {
            node_name: node_name.into(),
            predicates: Vec::new(),
        }
    }

    /// Append a predicate.
    #[must_use]
    pub fn with(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Whether `element` has the right name and satisfies every predicate.
    #[must_use]
    pub fn matches(&self, element: &Element) -> bool {
        element.name == self.node_name && self.predicates.iter().all(|p| p.matches(element))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.node_name)?;
        for predicate in &self.predicates {
            write!(f, "{predicate}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn bare_selector_display() {
        assert_eq!(Selector::new("icon").to_string(), "icon");
    }

    #[test]
    fn chained_predicates_display() {
        let selector = Selector::new("icon")
            .with(Predicate::equals("foreground", "f.png"))
            .with(Predicate::present("density"));
        assert_eq!(selector.to_string(), "icon[@foreground='f.png'][@density]");
    }

    #[test]
    fn value_with_single_quote_uses_double_quotes() {
        let predicate = Predicate::equals("src", "it's.png");
        assert_eq!(predicate.to_string(), "[@src=\"it's.png\"]");
    }

    #[test]
    fn bare_selector_matches_by_name_only() {
        let selector = Selector::new("icon");
        assert!(selector.matches(&Element::new("icon").with_attr("src", "a")));
        assert!(!selector.matches(&Element::new("splash")));
    }

    #[test]
    fn present_predicate_ignores_value() {
        let selector = Selector::new("icon").with(Predicate::present("density"));
        assert!(selector.matches(&Element::new("icon").with_attr("density", "")));
        assert!(!selector.matches(&Element::new("icon").with_attr("src", "a")));
    }

    #[test]
    fn equals_predicate_is_exact() {
        let selector = Selector::new("icon").with(Predicate::equals("src", "a/b.png"));
        assert!(selector.matches(&Element::new("icon").with_attr("src", "a/b.png")));
        assert!(!selector.matches(&Element::new("icon").with_attr("src", "a\\b.png")));
    }

    #[test]
    fn all_predicates_must_hold() {
        let selector = Selector::new("icon")
            .with(Predicate::equals("src", "a"))
            .with(Predicate::equals("density", "mdpi"));
        assert!(selector.matches(
            &Element::new("icon")
                .with_attr("src", "a")
                .with_attr("density", "mdpi")
        ));
        assert!(!selector.matches(
            &Element::new("icon")
                .with_attr("src", "a")
                .with_attr("density", "hdpi")
        ));
    }
}
