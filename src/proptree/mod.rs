//! Property Tree Module
//!
//! Parses the nested creation schema into a tree of named nodes.
//!
//! ## Grammar
//! ```text
//! node     := NAME props? children?
//! props    := '<' (KEY '=' VALUE (',' KEY '=' VALUE)*)? '>'
//! children := '{' (node (',' node)*)? '}'
//! ```
//!
//! Example (three levels: table → locality groups → column families):
//! ```text
//! table1<mergesize=100>{
//!     lg0<storage=memory>{ cf1<maxversions=3>, cf2<ttl=100> },
//!     lg1{ cf3 }
//! }
//! ```
//!
//! Whitespace between tokens is ignored. `max_depth`/`min_depth` count nodes
//! on the longest/shortest root-to-leaf path, so a bare `table1` has depth 1.

mod parser;

use std::fmt;

use crate::error::Result;

/// One named node with its properties and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: String,

    /// `key=value` pairs in source order, keys unique within the node
    pub properties: Vec<(String, String)>,

    pub children: Vec<Node>,
}

impl Node {
    fn depths(&self) -> (usize, usize) {
        if self.children.is_empty() {
            return (1, 1);
        }
        let mut max = 0;
        let mut min = usize::MAX;
        for child in &self.children {
            let (child_max, child_min) = child.depths();
            max = max.max(child_max);
            min = min.min(child_min);
        }
        (max + 1, min + 1)
    }
}

/// A parsed property tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropTree {
    root: Node,
    max_depth: usize,
    min_depth: usize,
}

impl PropTree {
    /// Parse a nested schema string
    pub fn parse(text: &str) -> Result<Self> {
        let root = parser::Parser::new(text).parse()?;
        let (max_depth, min_depth) = root.depths();
        Ok(Self {
            root,
            max_depth,
            min_depth,
        })
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn min_depth(&self) -> usize {
        self.min_depth
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.properties.is_empty() {
            f.write_str("<")?;
            for (i, (key, value)) in self.properties.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{}={}", key, value)?;
            }
            f.write_str(">")?;
        }
        if !self.children.is_empty() {
            f.write_str("{")?;
            for (i, child) in self.children.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{}", child)?;
            }
            f.write_str("}")?;
        }
        Ok(())
    }
}

impl fmt::Display for PropTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}
