//! In-memory XML project descriptor: an owned element tree.
//!
//! Each [`Element`] owns its children by value; there are no parent links.
//! Reading and writing live in [`reader`] and [`writer`]; selector matching
//! lives in [`selector`].
mod reader;
pub mod selector;
mod store;
mod writer;

pub use reader::{load, parse};
pub use selector::{Predicate, Selector};
pub use store::{DocumentStore, FileDocumentStore};
#[cfg(test)]
pub use store::MockDocumentStore;
pub use writer::{save, to_string};

/// A parsed document: optional declaration, top-level misc nodes, and the
/// single root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// `<?xml …?>` declaration, if present.
    pub declaration: Option<Declaration>,
    /// Comments and doctype before the root element.
    pub prolog: Vec<Node>,
    /// The root element (`<widget>` for Cordova projects).
    pub root: Element,
    /// Comments after the root element.
    pub epilog: Vec<Node>,
}

impl Document {
    /// Create a document with a standard declaration around `root`.
    #[must_use]
    pub fn new(root: Element) -> Self {
        Self {
            declaration: Some(Declaration::default()),
            prolog: Vec::new(),
            root,
            epilog: Vec::new(),
        }
    }
}

/// The XML declaration fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// `version` pseudo-attribute, usually `1.0`.
    pub version: String,
    /// `encoding` pseudo-attribute.
    pub encoding: Option<String>,
    /// `standalone` pseudo-attribute.
    pub standalone: Option<String>,
}

impl Default for Declaration {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            encoding: Some("utf-8".to_string()),
            standalone: None,
        }
    }
}

/// A child node of an element (or of the document outside the root).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A nested element.
    Element(Element),
    /// Unescaped character data.
    Text(String),
    /// Comment body without the `<!--`/`-->` delimiters.
    Comment(String),
    /// CDATA section content.
    CData(String),
    /// Doctype declaration body.
    DocType(String),
    /// Processing instruction body (`xml-stylesheet href="…"`).
    PI(String),
}

/// A single attribute; keys are unique within an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name, including any namespace prefix.
    pub key: String,
    /// Unescaped value.
    pub value: String,
}

/// An XML element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name.
    pub name: String,
    attributes: Vec<Attribute>,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes and no children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter.
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Builder-style child appender.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Attributes in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Value of attribute `key`, if present.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }

    /// Set attribute `key` to `value`, keeping its position if it already
    /// exists.  Returns `true` if the element changed.
    pub fn set_attr(&mut self, key: &str, value: &str) -> bool {
        if let Some(existing) = self.attributes.iter_mut().find(|a| a.key == key) {
            if existing.value == value {
                return false;
            }
            value.clone_into(&mut existing.value);
            return true;
        }
        self.attributes.push(Attribute {
            key: key.to_string(),
            value: value.to_string(),
        });
        true
    }

    /// Iterate over child elements, skipping text and comments.
    pub fn child_elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            _ => None,
        })
    }

    /// First child element matching `selector`.
    #[must_use]
    pub fn find(&self, selector: &Selector) -> Option<&Self> {
        self.child_elements().find(|el| selector.matches(el))
    }

    /// Index into [`children`](Self::children) of the first child element
    /// matching `selector`.
    #[must_use]
    pub fn position(&self, selector: &Selector) -> Option<usize> {
        self.children
            .iter()
            .position(|node| matches!(node, Node::Element(el) if selector.matches(el)))
    }

    /// Mutable access to the child element at `index` in
    /// [`children`](Self::children).
    pub fn child_element_mut(&mut self, index: usize) -> Option<&mut Self> {
        match self.children.get_mut(index) {
            Some(Node::Element(el)) => Some(el),
            _ => None,
        }
    }

    /// Append `element` as the last child.
    pub fn append_element(&mut self, element: Self) {
        self.children.push(Node::Element(element));
    }
}
