//! Copying descriptor values onto a resolved element.
use crate::document::Element;
use crate::resources::ResourceDescriptor;
use crate::rules::{AttributeKind, RuleSet};

/// Write every node attribute `rule` declares from `descriptor` onto
/// `element`.
///
/// Absent and falsy values (empty string, zero, `false`) are skipped and the
/// existing attribute, if any, is left alone.  Path values have `\` replaced
/// by `/`.  Returns `true` if any attribute changed.
pub fn write(element: &mut Element, rule: &RuleSet, descriptor: &ResourceDescriptor) -> bool {
    let mut changed = false;
    for attribute in rule.node_attributes {
        let Some(value) = descriptor.get(attribute.key) else {
            continue;
        };
        if !value.is_truthy() {
            continue;
        }
        let rendered = match attribute.kind {
            AttributeKind::Path => value.to_string().replace('\\', "/"),
            AttributeKind::Plain => value.to_string(),
        };
        changed |= element.set_attr(attribute.key.as_str(), &rendered);
    }
    changed
}
