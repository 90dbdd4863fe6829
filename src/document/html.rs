use std::collections::HashMap;

use scraper::{ElementRef, Html};
use thiserror::Error;

use super::lines::{LineIndex, tag_offsets};
use super::{DocumentTree, NodeId};

/// Bytes sniffed for NUL when deciding whether input is text at all.
const BINARY_SNIFF_LEN: usize = 8 * 1024;

/// Input the HTML parser cannot make a tree from, even with recovery.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("invalid UTF-8 at byte {offset}")]
    InvalidEncoding { offset: usize },

    #[error("binary content (NUL byte at {offset})")]
    Binary { offset: usize },
}

#[derive(Debug)]
struct ElementData {
    tag: String,
    attrs: Vec<(String, String)>,
    parent: Option<NodeId>,
    /// One past the last descendant in `order`.
    subtree_end: usize,
    text: String,
    line: Option<usize>,
}

/// Owned, parser-independent snapshot of an HTML document.
///
/// Elements are stored in document (pre-)order so a subtree is a contiguous
/// slice of `order`.
#[derive(Debug)]
pub struct HtmlDocument {
    nodes: Vec<ElementData>,
    order: Vec<NodeId>,
}

impl HtmlDocument {
    /// Parse markup with html5ever's error recovery. Never fails.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let html = Html::parse_document(source);
        let mut nodes: Vec<ElementData> = Vec::new();
        let mut index = HashMap::new();
        let mut open: Vec<usize> = Vec::new();

        for node in html.tree.root().descendants() {
            let Some(element) = ElementRef::wrap(node) else {
                continue;
            };

            let position = nodes.len();
            let parent = node
                .ancestors()
                .find_map(|ancestor| index.get(&ancestor.id()).copied());

            // Close every open subtree that this element is not part of.
            while let Some(&top) = open.last() {
                if Some(top) == parent {
                    break;
                }
                nodes[top].subtree_end = position;
                open.pop();
            }

            nodes.push(ElementData {
                tag: element.value().name().to_ascii_lowercase(),
                attrs: element
                    .value()
                    .attrs()
                    .map(|(name, value)| (name.to_ascii_lowercase(), value.to_string()))
                    .collect(),
                parent: parent.map(NodeId),
                subtree_end: position + 1,
                text: normalize_text(element.text()),
                line: None,
            });
            index.insert(node.id(), position);
            open.push(position);
        }

        let total = nodes.len();
        for top in open {
            nodes[top].subtree_end = total;
        }

        assign_lines(&mut nodes, source);

        Self {
            order: (0..total).map(NodeId).collect(),
            nodes,
        }
    }

    /// Decode and parse raw file bytes.
    ///
    /// # Errors
    /// Returns an error when the bytes are not UTF-8 text.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DocumentError> {
        let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);

        let sniff = &bytes[..bytes.len().min(BINARY_SNIFF_LEN)];
        if let Some(offset) = sniff.iter().position(|&b| b == 0) {
            return Err(DocumentError::Binary { offset });
        }

        let source = std::str::from_utf8(bytes).map_err(|e| DocumentError::InvalidEncoding {
            offset: e.valid_up_to(),
        })?;
        Ok(Self::parse(source))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, id: NodeId) -> &ElementData {
        &self.nodes[id.0]
    }
}

impl DocumentTree for HtmlDocument {
    fn elements(&self) -> &[NodeId] {
        &self.order
    }

    fn tag(&self, node: NodeId) -> &str {
        &self.node(node).tag
    }

    fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node)
            .attrs
            .iter()
            .find(|(attr, _)| attr.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    fn text(&self, node: NodeId) -> &str {
        &self.node(node).text
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }

    fn descendants(&self, node: NodeId) -> &[NodeId] {
        &self.order[node.0 + 1..self.node(node).subtree_end]
    }

    fn line(&self, node: NodeId) -> Option<usize> {
        self.node(node).line
    }
}

/// Concatenate text nodes as rendered, then collapse whitespace runs.
/// Adjacent nodes join without a separator: `Sk<b>ip</b>` reads `Skip`.
fn normalize_text<'a>(pieces: impl Iterator<Item = &'a str>) -> String {
    let raw: String = pieces.collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Pair the n-th parsed element of each tag with the n-th `<tag` in the
/// source. Tags whose counts disagree (parser-inserted `tbody`, implied
/// `head`/`body`, markup inside scripts) get no line.
fn assign_lines(nodes: &mut [ElementData], source: &str) {
    let offsets = tag_offsets(source);
    let lines = LineIndex::new(source);

    let mut parsed_counts: HashMap<&str, usize> = HashMap::new();
    for node in nodes.iter() {
        *parsed_counts.entry(node.tag.as_str()).or_default() += 1;
    }
    let usable: HashMap<String, bool> = parsed_counts
        .iter()
        .map(|(tag, &count)| {
            let found = offsets.get(*tag).map_or(0, Vec::len);
            ((*tag).to_string(), found == count)
        })
        .collect();

    let mut seen: HashMap<String, usize> = HashMap::new();
    for node in nodes.iter_mut() {
        let ordinal = seen.entry(node.tag.clone()).or_default();
        if usable.get(&node.tag).copied().unwrap_or(false) {
            node.line = offsets
                .get(&node.tag)
                .and_then(|found| found.get(*ordinal))
                .map(|&offset| lines.line_of(offset));
        }
        *ordinal += 1;
    }
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
