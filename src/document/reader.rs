//! Parse XML text into a [`Document`] with `quick-xml`.
use quick_xml::Reader;
use quick_xml::events::{BytesDecl, BytesStart, Event};
use std::path::Path;

use super::{Declaration, Document, Element, Node};
use crate::error::DocumentError;

/// Read and parse the document at `path`.
///
/// # Errors
///
/// Returns [`DocumentError::Io`] if the file cannot be read, or a parse error
/// if the content is not a well-formed single-rooted document.
pub fn load(path: &Path) -> Result<Document, DocumentError> {
    let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content)
}

/// Parse `xml` into a [`Document`].
///
/// Whitespace-only text is dropped; the writer re-indents the tree.
///
/// # Errors
///
/// Returns [`DocumentError::Parse`] for syntax errors reported by the reader
/// and [`DocumentError::Malformed`] for missing, duplicated or unclosed root
/// elements.
pub fn parse(xml: &str) -> Result<Document, DocumentError> {
    let mut reader = Reader::from_str(xml);
    let mut builder = TreeBuilder::default();

    loop {
        let event = reader.read_event().map_err(|e| DocumentError::Parse {
            position: u64::try_from(reader.buffer_position()).unwrap_or(u64::MAX),
            message: e.to_string(),
        })?;
        match event {
            Event::Decl(decl) => builder.declaration = Some(declaration(&decl)?),
            Event::Start(start) => builder.open.push(element(&start)?),
            Event::Empty(start) => builder.attach(Node::Element(element(&start)?))?,
            Event::End(_) => {
                let closed = builder
                    .open
                    .pop()
                    .ok_or_else(|| DocumentError::Malformed("unexpected end tag".to_string()))?;
                builder.attach(Node::Element(closed))?;
            }
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|e| DocumentError::Malformed(e.to_string()))?;
                if !text.trim().is_empty() && !builder.open.is_empty() {
                    builder.attach(Node::Text(text.into_owned()))?;
                }
            }
            Event::CData(data) => {
                builder.attach(Node::CData(String::from_utf8_lossy(&data).into_owned()))?;
            }
            Event::Comment(comment) => {
                builder.attach(Node::Comment(String::from_utf8_lossy(&comment).into_owned()))?;
            }
            Event::DocType(doctype) => {
                builder.attach(Node::DocType(
                    String::from_utf8_lossy(&doctype).trim().to_string(),
                ))?;
            }
            Event::PI(pi) => {
                builder.attach(Node::PI(String::from_utf8_lossy(&pi).into_owned()))?;
            }
            Event::Eof => break,
        }
    }

    builder.finish()
}

#[derive(Default)]
struct TreeBuilder {
    declaration: Option<Declaration>,
    prolog: Vec<Node>,
    root: Option<Element>,
    epilog: Vec<Node>,
    open: Vec<Element>,
}

impl TreeBuilder {
    fn attach(&mut self, node: Node) -> Result<(), DocumentError> {
        if let Some(parent) = self.open.last_mut() {
            parent.children.push(node);
            return Ok(());
        }
        match node {
            Node::Element(el) => {
                if self.root.is_some() {
                    return Err(DocumentError::Malformed(format!(
                        "second root element <{}>",
                        el.name
                    )));
                }
                self.root = Some(el);
            }
            other if self.root.is_some() => self.epilog.push(other),
            other => self.prolog.push(other),
        }
        Ok(())
    }

    fn finish(self) -> Result<Document, DocumentError> {
        if let Some(unclosed) = self.open.last() {
            return Err(DocumentError::Malformed(format!(
                "unclosed element <{}>",
                unclosed.name
            )));
        }
        let root = self
            .root
            .ok_or_else(|| DocumentError::Malformed("no root element".to_string()))?;
        Ok(Document {
            declaration: self.declaration,
            prolog: self.prolog,
            root,
            epilog: self.epilog,
        })
    }
}

fn element(start: &BytesStart<'_>) -> Result<Element, DocumentError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut el = Element::new(name);
    for attr in start.attributes() {
        let attr = attr.map_err(|e| DocumentError::Malformed(e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| DocumentError::Malformed(e.to_string()))?;
        el.set_attr(&key, &value);
    }
    Ok(el)
}

fn declaration(decl: &BytesDecl<'_>) -> Result<Declaration, DocumentError> {
    let version = decl
        .version()
        .map_err(|e| DocumentError::Malformed(e.to_string()))?;
    let version = String::from_utf8_lossy(&version).into_owned();
    let encoding = decl
        .encoding()
        .transpose()
        .map_err(|e| DocumentError::Malformed(e.to_string()))?
        .map(|v| String::from_utf8_lossy(&v).into_owned());
    let standalone = decl
        .standalone()
        .transpose()
        .map_err(|e| DocumentError::Malformed(e.to_string()))?
        .map(|v| String::from_utf8_lossy(&v).into_owned());
    Ok(Declaration {
        version,
        encoding,
        standalone,
    })
}
