//! Serialize a [`Document`] back to indented XML with `quick-xml`.
use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event};
use std::io::Write;
use std::path::Path;

use super::{Document, Element, Node};
use crate::error::DocumentError;

/// Indentation width used for nested elements.
const INDENT: usize = 4;

/// Serialize `doc` to a string terminated by a newline.
///
/// # Errors
///
/// Returns [`DocumentError::Write`] if the writer rejects an event.
pub fn to_string(doc: &Document) -> Result<String, DocumentError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT);

    if let Some(decl) = &doc.declaration {
        emit(
            &mut writer,
            Event::Decl(BytesDecl::new(
                &decl.version,
                decl.encoding.as_deref(),
                decl.standalone.as_deref(),
            )),
        )?;
    }
    for node in &doc.prolog {
        write_node(&mut writer, node)?;
    }
    write_element(&mut writer, &doc.root)?;
    for node in &doc.epilog {
        write_node(&mut writer, node)?;
    }

    let mut out = String::from_utf8(writer.into_inner())
        .map_err(|e| DocumentError::Write(e.to_string()))?;
    out.push('\n');
    Ok(out)
}

/// Serialize `doc` and write it to `path`.
///
/// # Errors
///
/// Returns [`DocumentError::Io`] if the file cannot be written.
pub fn save(path: &Path, doc: &Document) -> Result<(), DocumentError> {
    let content = to_string(doc)?;
    std::fs::write(path, content).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<(), DocumentError> {
    writer
        .write_event(event)
        .map_err(|e| DocumentError::Write(e.to_string()))
}

fn write_node<W: Write>(writer: &mut Writer<W>, node: &Node) -> Result<(), DocumentError> {
    match node {
        Node::Element(el) => write_element(writer, el),
        Node::Text(text) => emit(writer, Event::Text(BytesText::new(text))),
        Node::Comment(comment) => emit(writer, Event::Comment(BytesText::from_escaped(comment))),
        Node::CData(data) => emit(writer, Event::CData(BytesCData::new(data))),
        Node::DocType(doctype) => emit(writer, Event::DocType(BytesText::from_escaped(doctype))),
        Node::PI(pi) => emit(writer, Event::PI(BytesPI::new(pi.as_str()))),
    }
}

fn write_element<W: Write>(writer: &mut Writer<W>, el: &Element) -> Result<(), DocumentError> {
    let mut start = BytesStart::new(el.name.as_str());
    for attr in el.attributes() {
        start.push_attribute((attr.key.as_str(), attr.value.as_str()));
    }

    if el.children.is_empty() {
        return emit(writer, Event::Empty(start));
    }

    emit(writer, Event::Start(start))?;
    for child in &el.children {
        write_node(writer, child)?;
    }
    emit(writer, Event::End(BytesEnd::new(el.name.as_str())))
}
