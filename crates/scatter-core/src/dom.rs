// File: crates/scatter-core/src/dom.rs
// Summary: Owned element tree used as the chart's mount point and output surface.
// Notes:
// - Attribute order is preserved so serialised markup is deterministic.
// - Text nodes are escaped on output; there is no raw-HTML node.

use std::fmt::{self, Write as _};

/// Elements serialised without a closing tag.
const VOID_TAGS: [&str; 1] = ["br"];

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), attrs: Vec::new(), children: Vec::new() }
    }

    /// Builder form of [`Element::set_attr`].
    pub fn attr(mut self, name: &str, value: impl ToString) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set or overwrite an attribute, keeping its original position.
    pub fn set_attr(&mut self, name: &str, value: impl ToString) {
        let value = value.to_string();
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let pos = self.attrs.iter().position(|(k, _)| k == name)?;
        Some(self.attrs.remove(pos).1)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn id(&self) -> Option<&str> { self.get_attr("id") }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_ascii_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Builder: append a child element.
    pub fn child(mut self, el: Element) -> Self {
        self.children.push(Node::Element(el));
        self
    }

    /// Builder: append a text node.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn append(&mut self, el: Element) {
        self.children.push(Node::Element(el));
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Direct child elements, skipping text nodes.
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.element_children().find_map(|c| c.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        for node in &mut self.children {
            if let Node::Element(e) = node {
                if let Some(found) = e.find_by_id_mut(id) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Descendants (and self) carrying `class`, in document order.
    pub fn find_all_by_class(&self, class: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_matching(self, &|e| e.has_class(class), &mut out);
        out
    }

    /// Descendants (and self) with tag `tag`, in document order.
    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_matching(self, &|e| e.tag == tag, &mut out);
        out
    }

    /// Number of elements in this subtree, self included.
    pub fn element_count(&self) -> usize {
        1 + self.element_children().map(Element::element_count).sum::<usize>()
    }

    pub fn to_markup(&self) -> String {
        self.to_string()
    }
}

fn collect_matching<'a>(el: &'a Element, pred: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
    if pred(el) {
        out.push(el);
    }
    for c in el.element_children() {
        collect_matching(c, pred, out);
    }
}

fn collect_text(el: &Element, out: &mut String) {
    for node in &el.children {
        match node {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => collect_text(e, out),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('<')?;
        f.write_str(&self.tag)?;
        for (k, v) in &self.attrs {
            write!(f, " {k}=\"{}\"", escape_attr(v))?;
        }
        f.write_char('>')?;
        if VOID_TAGS.contains(&self.tag.as_str()) {
            return Ok(());
        }
        for node in &self.children {
            match node {
                Node::Element(e) => write!(f, "{e}")?,
                Node::Text(t) => f.write_str(&escape_text(t))?,
            }
        }
        write!(f, "</{}>", self.tag)
    }
}

pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
