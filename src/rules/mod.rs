//! Declarative rules describing how a resource becomes an XML element.
//!
//! A [`RuleSet`] names the element, lists which descriptor fields are copied
//! onto it (and how their values are normalized), lists the index attributes
//! used to recognise "the same logical resource" across runs, and gates
//! whether the resource is written at all.
mod table;

pub use table::{all, lookup};

use crate::resources::{ResourceDescriptor, ResourceKey};

/// How a node attribute value is normalized before writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// Written as-is.
    Plain,
    /// A file path; backslashes are rewritten to `/`.
    Path,
}

/// A descriptor field copied onto the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeAttribute {
    /// Descriptor field and attribute name.
    pub key: ResourceKey,
    /// How the value is normalized.
    pub kind: AttributeKind,
}

impl NodeAttribute {
    /// Attribute written as-is.
    #[must_use]
    pub const fn plain(key: ResourceKey) -> Self {
        Self {
            key,
            kind: AttributeKind::Plain,
        }
    }

    /// Path attribute with separators normalized to `/`.
    #[must_use]
    pub const fn path(key: ResourceKey) -> Self {
        Self {
            key,
            kind: AttributeKind::Path,
        }
    }
}

/// How an index attribute turns a descriptor value into match candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexTransform {
    /// Match by presence of the attribute only (`[@key]`).
    None,
    /// Match the value exactly (`[@key='value']`).
    Identity,
    /// Match any separator spelling of a path: the `/` form first, then the
    /// `\` form when it differs.
    PathVariants,
}

impl IndexTransform {
    /// Candidate values for `value`; empty for [`IndexTransform::None`].
    ///
    /// # Examples
    ///
    /// ```
    /// use resconf_cli::rules::IndexTransform;
    ///
    /// assert_eq!(
    ///     IndexTransform::PathVariants.apply("res/icon.png"),
    ///     vec!["res/icon.png".to_string(), "res\\icon.png".to_string()],
    /// );
    /// assert_eq!(IndexTransform::PathVariants.apply("icon.png"), vec!["icon.png".to_string()]);
    /// assert_eq!(IndexTransform::Identity.apply("mdpi"), vec!["mdpi".to_string()]);
    /// ```
    #[must_use]
    pub fn apply(self, value: &str) -> Vec<String> {
        match self {
            Self::None => Vec::new(),
            Self::Identity => vec![value.to_string()],
            Self::PathVariants => {
                let forward = value.replace('\\', "/");
                let backward = value.replace('/', "\\");
                if forward == backward {
                    vec![forward]
                } else {
                    vec![forward, backward]
                }
            }
        }
    }
}

/// A descriptor field used to build match selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexAttribute {
    /// Descriptor field and attribute name.
    pub key: ResourceKey,
    /// How candidate values are derived.
    pub transform: IndexTransform,
}

impl IndexAttribute {
    /// Match on presence of `key`.
    #[must_use]
    pub const fn presence(key: ResourceKey) -> Self {
        Self {
            key,
            transform: IndexTransform::None,
        }
    }

    /// Match on the exact value of `key`.
    #[must_use]
    pub const fn value(key: ResourceKey) -> Self {
        Self {
            key,
            transform: IndexTransform::Identity,
        }
    }

    /// Match on any separator spelling of the path in `key`.
    #[must_use]
    pub const fn path(key: ResourceKey) -> Self {
        Self {
            key,
            transform: IndexTransform::PathVariants,
        }
    }
}

/// Static description of the element for one `(platform, type)` pair.
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    /// Tag of the element.
    pub node_name: &'static str,
    /// Fields copied onto the element, in write order.
    pub node_attributes: &'static [NodeAttribute],
    /// Fields identifying an existing element, in selector order.
    pub index_attributes: &'static [IndexAttribute],
    /// Whether a descriptor should be written at all.
    pub included: fn(&ResourceDescriptor) -> bool,
}

impl RuleSet {
    /// The declared node attribute for `key`, if any.
    #[must_use]
    pub fn node_attribute(&self, key: ResourceKey) -> Option<&NodeAttribute> {
        self.node_attributes.iter().find(|a| a.key == key)
    }

    /// Whether `descriptor` passes the inclusion predicate.
    #[must_use]
    pub fn includes(&self, descriptor: &ResourceDescriptor) -> bool {
        (self.included)(descriptor)
    }
}

/// Inclusion predicate admitting every descriptor.
#[must_use]
pub const fn always(_: &ResourceDescriptor) -> bool {
    true
}

/// Inclusion predicate requiring a non-empty `target`.
#[must_use]
pub fn has_target(descriptor: &ResourceDescriptor) -> bool {
    descriptor
        .get(ResourceKey::Target)
        .is_some_and(crate::resources::ResourceValue::is_truthy)
}
