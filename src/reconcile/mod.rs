//! The reconciliation engine.
//!
//! Given a document tree and a list of resource descriptors, the engine
//! makes sure each descriptor is represented by exactly one element inside
//! its `<platform name="…">` container, reusing elements written by earlier
//! runs.  Running it twice with the same inputs changes nothing the second
//! time.
//!
//! The pieces, leaves first:
//!
//! - [`selectors`] turns a rule set's index attributes into match selectors
//! - [`resolve`] finds or creates the element those selectors identify
//! - [`attributes::write`] copies descriptor values onto it
//! - [`reconcile`] drives the above per platform
mod attributes;
mod driver;
mod resolver;
mod selectors;

pub use attributes::write;
pub use driver::{OrientationPreference, group_by_platform, reconcile, reconcile_document};
pub use resolver::{Resolved, resolve};
pub use selectors::selectors;

use crate::platform::{Platform, ResourceType};

/// Why a descriptor was not written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The platform has no rule set for the resource type.
    Unsupported,
    /// The rule set's inclusion predicate rejected the descriptor.
    Excluded,
    /// The descriptor targets an orientation the project does not use.
    OrientationMismatch,
}

impl SkipReason {
    /// Short form used in log messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unsupported => "unsupported on this platform",
            Self::Excluded => "excluded by rule",
            Self::OrientationMismatch => "orientation mismatch",
        }
    }
}

/// What reconciling one descriptor did to the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeChange {
    /// A new element was appended.
    Created,
    /// An existing element had attributes changed.
    Updated,
    /// An existing element already carried every value.
    Unchanged,
    /// The descriptor was not written.
    Skipped(SkipReason),
}

/// Outcome for one descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceOutcome {
    /// Resource type of the descriptor.
    pub kind: ResourceType,
    /// Short description of the resource (its path when it has one).
    pub label: String,
    /// What happened to the tree.
    pub change: NodeChange,
}

/// Outcome for one platform container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformReport {
    /// Platform the container belongs to.
    pub platform: Platform,
    /// The container element did not exist before this run.
    pub container_created: bool,
    /// One outcome per descriptor, in input order.
    pub outcomes: Vec<ResourceOutcome>,
}

impl PlatformReport {
    fn count(&self, pred: impl Fn(NodeChange) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o.change)).count()
    }

    /// Number of appended elements.
    #[must_use]
    pub fn created(&self) -> usize {
        self.count(|c| c == NodeChange::Created)
    }

    /// Number of existing elements that changed.
    #[must_use]
    pub fn updated(&self) -> usize {
        self.count(|c| c == NodeChange::Updated)
    }

    /// Number of elements already up to date.
    #[must_use]
    pub fn unchanged(&self) -> usize {
        self.count(|c| c == NodeChange::Unchanged)
    }

    /// Number of descriptors not written.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(|c| matches!(c, NodeChange::Skipped(_)))
    }

    /// Whether anything in this container was modified.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.container_created || self.created() > 0 || self.updated() > 0
    }
}

/// Outcome of a whole reconciliation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Platforms in the order they first appeared in the input.
    pub platforms: Vec<PlatformReport>,
}

impl ReconcileReport {
    /// Whether the tree was modified at all.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.platforms.iter().any(PlatformReport::has_changes)
    }
}
