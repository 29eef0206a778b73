//! Non-fatal checks run before reconciliation.
use std::collections::HashSet;
use std::path::Path;

use crate::platform::{Platform, ResourceType};
use crate::resources::ResourceDescriptor;
use crate::rules::{self, AttributeKind, RuleSet};

/// A validation warning detected while preparing a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// Where the problem lives (e.g. "rules", "manifest.json").
    pub source: String,
    /// The specific item that triggered the warning.
    pub item: String,
    /// Human-readable warning message.
    pub message: String,
}

impl ValidationWarning {
    /// Create a warning.
    #[must_use]
    pub fn new(
        source: impl Into<String>,
        item: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            item: item.into(),
            message: message.into(),
        }
    }
}

/// Trait for validators whose findings are reported but never fatal.
pub trait ConfigValidator {
    /// Validate and return any warnings found.
    fn validate(&self, root: &Path) -> Vec<ValidationWarning>;

    /// Human-readable name for this validator.
    fn name(&self) -> &'static str;
}

/// Checks rule sets for definitions the engine tolerates but that are
/// almost certainly mistakes.
#[derive(Debug)]
pub struct RuleTableValidator<'a> {
    rules: Vec<(Platform, ResourceType, &'a RuleSet)>,
}

impl<'a> RuleTableValidator<'a> {
    /// Check `rules` instead of the built-in table.
    #[must_use]
    pub const fn new(rules: Vec<(Platform, ResourceType, &'a RuleSet)>) -> Self {
        Self { rules }
    }
}

impl Default for RuleTableValidator<'static> {
    fn default() -> Self {
        Self::new(rules::all().collect())
    }
}

impl ConfigValidator for RuleTableValidator<'_> {
    fn validate(&self, _root: &Path) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        for (platform, kind, rule) in &self.rules {
            let item = format!("{platform} {kind}");

            let mut seen = HashSet::new();
            for attribute in rule.node_attributes {
                if !seen.insert(attribute.key) {
                    warnings.push(ValidationWarning::new(
                        "rules",
                        &item,
                        format!("node attribute '{}' is declared twice", attribute.key),
                    ));
                }
            }

            for index in rule.index_attributes {
                if rule.node_attribute(index.key).is_none() {
                    warnings.push(ValidationWarning::new(
                        "rules",
                        &item,
                        format!(
                            "index attribute '{}' is not a node attribute and will not narrow matches",
                            index.key
                        ),
                    ));
                }
            }
        }

        warnings
    }

    fn name(&self) -> &'static str {
        "rules"
    }
}

/// Checks that the files descriptors point at exist under the project root.
#[derive(Debug)]
pub struct ResourceFileValidator<'a> {
    source: &'a str,
    resources: &'a [ResourceDescriptor],
}

impl<'a> ResourceFileValidator<'a> {
    /// `source` names where the descriptors came from, for reporting.
    #[must_use]
    pub const fn new(source: &'a str, resources: &'a [ResourceDescriptor]) -> Self {
        Self { source, resources }
    }
}

impl ConfigValidator for ResourceFileValidator<'_> {
    fn validate(&self, root: &Path) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        for descriptor in self.resources {
            let Some(rule) = rules::lookup(descriptor.platform, descriptor.kind) else {
                continue;
            };
            for attribute in rule.node_attributes {
                if attribute.kind != AttributeKind::Path {
                    continue;
                }
                let Some(value) = descriptor.get(attribute.key).filter(|v| v.is_truthy()) else {
                    continue;
                };
                let relative = value.to_string().replace('\\', "/");
                if !root.join(&relative).exists() {
                    warnings.push(ValidationWarning::new(
                        self.source,
                        &relative,
                        format!("{} file does not exist", attribute.key),
                    ));
                }
            }
        }

        warnings
    }

    fn name(&self) -> &'static str {
        "resource files"
    }
}
