//! Element tree types.
//!
//! A small owned tree independent of any parser's representation:
//!
//! ```text
//! Node::Element(Element { tag, attrs: [Attr], children: [Node] })
//! Node::Text(decoded)
//! Node::Comment(body)
//! ```
//!
//! Only elements carry attributes and children. Accessors return `Option`
//! so tree walkers can treat leaf nodes uniformly.

/// A single attribute. Boolean attributes (`<input disabled>`) have an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

impl Attr {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Element node: lowercase tag, ordered attributes, ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<Attr>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push(Attr::new(name, value));
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Position of the first attribute named `name`.
    pub fn attr_position(&self, name: &str) -> Option<usize> {
        self.attrs.iter().position(|a| a.name == name)
    }

    pub fn attr(&self, name: &str) -> Option<&Attr> {
        self.attrs.iter().find(|a| a.name == name)
    }
}

/// A node in the element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Decoded text; escaping happens on serialization.
    Text(String),
    /// Comment body without the `<!--` / `-->` delimiters.
    Comment(String),
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Depth-first search for the first element with `tag` (self included).
    pub fn find_element_mut(&mut self, tag: &str) -> Option<&mut Element> {
        let Self::Element(elem) = self else {
            return None;
        };
        if elem.tag == tag {
            return Some(elem);
        }
        elem.children
            .iter_mut()
            .find_map(|child| child.find_element_mut(tag))
    }
}

impl From<Element> for Node {
    fn from(elem: Element) -> Self {
        Self::Element(elem)
    }
}
