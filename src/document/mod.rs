//! Document model consumed by the checker.
//!
//! Rules only see the narrow [`DocumentTree`] interface: element enumeration
//! in document order, tag and attribute access, normalized text, and
//! parent/descendant links. [`HtmlDocument`] satisfies it on top of `scraper`,
//! but any parser able to fill those queries can be plugged in.

mod html;
mod lines;

pub use html::{DocumentError, HtmlDocument};

/// Opaque handle to one element of a [`DocumentTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// Read-only view of a parsed HTML document.
pub trait DocumentTree: Send + Sync {
    /// Every element, in document order.
    fn elements(&self) -> &[NodeId];

    /// Lowercase tag name.
    fn tag(&self, node: NodeId) -> &str;

    fn attr(&self, node: NodeId, name: &str) -> Option<&str>;

    /// Descendant text with whitespace runs collapsed and ends trimmed.
    fn text(&self, node: NodeId) -> &str;

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Every element below `node`, in document order.
    fn descendants(&self, node: NodeId) -> &[NodeId];

    /// 1-based source line of the element's start tag, when known.
    fn line(&self, node: NodeId) -> Option<usize>;
}

impl<'d> dyn DocumentTree + 'd {
    pub fn all(&self) -> impl Iterator<Item = Element<'_>> + '_ {
        self.elements().iter().map(move |&id| Element { doc: self, id })
    }

    pub fn select<'s, P>(&'s self, predicate: P) -> impl Iterator<Item = Element<'s>> + 's
    where
        P: Fn(&Element<'s>) -> bool + 's,
    {
        self.all().filter(move |el| predicate(el))
    }

    pub fn by_tag<'s>(&'s self, tag: &'s str) -> impl Iterator<Item = Element<'s>> + 's {
        self.select(move |el| el.is(tag))
    }

    pub fn any<'s, P>(&'s self, predicate: P) -> bool
    where
        P: Fn(&Element<'s>) -> bool + 's,
    {
        self.select(predicate).next().is_some()
    }

    /// The `<html>` element, if the parser produced one.
    #[must_use]
    pub fn root(&self) -> Option<Element<'_>> {
        self.all().find(|el| el.is("html") && el.parent().is_none())
    }
}

/// Element handle bound to the document it came from.
#[derive(Clone, Copy)]
pub struct Element<'a> {
    doc: &'a dyn DocumentTree,
    id: NodeId,
}

impl<'a> Element<'a> {
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    #[must_use]
    pub fn tag(&self) -> &'a str {
        self.doc.tag(self.id)
    }

    #[must_use]
    pub fn is(&self, tag: &str) -> bool {
        self.tag().eq_ignore_ascii_case(tag)
    }

    #[must_use]
    pub fn is_any(&self, tags: &[&str]) -> bool {
        tags.iter().any(|tag| self.is(tag))
    }

    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.doc.attr(self.id, name)
    }

    #[must_use]
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Attribute value, treating an empty value as absent. Whitespace counts
    /// as a value.
    #[must_use]
    pub fn non_empty_attr(&self, name: &str) -> Option<&'a str> {
        self.attr(name).filter(|v| !v.is_empty())
    }

    #[must_use]
    pub fn attr_is(&self, name: &str, value: &str) -> bool {
        self.attr(name) == Some(value)
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    #[must_use]
    pub fn text(&self) -> &'a str {
        self.doc.text(self.id)
    }

    #[must_use]
    pub fn line(&self) -> Option<usize> {
        self.doc.line(self.id)
    }

    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.doc.parent(self.id).map(|id| Self { doc: self.doc, id })
    }

    /// Parent, grandparent, ... up to the root.
    pub fn ancestors(self) -> impl Iterator<Item = Element<'a>> + 'a {
        let doc = self.doc;
        std::iter::successors(self.parent(), move |el| {
            doc.parent(el.id).map(|id| Element { doc, id })
        })
    }

    pub fn descendants(self) -> impl Iterator<Item = Element<'a>> + 'a {
        let doc = self.doc;
        doc.descendants(self.id)
            .iter()
            .map(move |&id| Element { doc, id })
    }
}

impl std::fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.id)
            .field("tag", &self.tag())
            .finish()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
