//! A small retained element tree used as the drawing surface.
//!
//! Elements keep attributes and inline style in insertion order so the
//! serialized markup is stable, which keeps rendered pages diffable.

use std::fmt::{self, Write};

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Pre-rendered markup, emitted without escaping.
    Raw(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    style: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            style: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: impl ToString) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn style(mut self, name: &str, value: impl ToString) -> Self {
        self.set_style(name, value);
        self
    }

    pub fn child(mut self, element: Element) -> Self {
        self.children.push(Node::Element(element));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn set_attr(&mut self, name: &str, value: impl ToString) {
        upsert(&mut self.attrs, name, value.to_string());
    }

    pub fn set_style(&mut self, name: &str, value: impl ToString) {
        upsert(&mut self.style, name, value.to_string());
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        lookup(&self.attrs, name)
    }

    pub fn get_style(&self, name: &str) -> Option<&str> {
        lookup(&self.style, name)
    }

    pub fn append(&mut self, element: Element) {
        self.children.push(Node::Element(element));
    }

    pub fn set_html(&mut self, markup: impl Into<String>) {
        self.children = vec![Node::Raw(markup.into())];
    }

    /// Removes every child node, leaving the element's own attributes in place.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            _ => None,
        })
    }

    /// Depth-first, document order, excluding `self`.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_descendants(self, &mut out);
        out
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.descendants().into_iter().find(|el| el.id() == Some(id))
    }

    pub fn select_all(&self, tag: &str, class: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|el| el.tag == tag && el.has_class(class))
            .collect()
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            match node {
                Node::Element(el) => out.push_str(&el.text_content()),
                Node::Text(text) => out.push_str(text),
                Node::Raw(markup) => out.push_str(&strip_tags(markup)),
            }
        }
        out
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            write!(f, " {name}=\"{}\"", escape(value))?;
        }
        if !self.style.is_empty() {
            let mut css = String::new();
            for (name, value) in &self.style {
                write!(css, "{name}: {value}; ")?;
            }
            write!(f, " style=\"{}\"", escape(css.trim_end()))?;
        }
        if self.children.is_empty() && is_void(&self.tag) {
            return f.write_str("/>");
        }
        f.write_char('>')?;
        for node in &self.children {
            match node {
                Node::Element(el) => write!(f, "{el}")?,
                Node::Text(text) => f.write_str(&escape(text))?,
                Node::Raw(markup) => f.write_str(markup)?,
            }
        }
        write!(f, "</{}>", self.tag)
    }
}

fn upsert(pairs: &mut Vec<(String, String)>, name: &str, value: String) {
    match pairs.iter_mut().find(|(key, _)| key == name) {
        Some(pair) => pair.1 = value,
        None => pairs.push((name.to_string(), value)),
    }
}

fn lookup<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

fn collect_descendants<'a>(element: &'a Element, out: &mut Vec<&'a Element>) {
    for child in element.children() {
        out.push(child);
        collect_descendants(child, out);
    }
}

// SVG shapes self-close; HTML containers such as div must not.
fn is_void(tag: &str) -> bool {
    matches!(tag, "rect" | "line" | "path" | "circle" | "br")
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn strip_tags(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}
