//! Property tree parser
//!
//! Recursive descent over the raw bytes. Every delimiter is ASCII, so byte
//! offsets of delimiters are always valid `str` slice boundaries.

use crate::error::{Result, SchemaError};

use super::Node;

/// Deepest nesting accepted before the parser gives up
const MAX_NESTING: usize = 16;

/// Bytes of remaining input quoted in error messages
const FRAGMENT_LEN: usize = 24;

pub(super) struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    pub(super) fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Parse exactly one root node spanning the whole input
    pub(super) fn parse(mut self) -> Result<Node> {
        let root = self.parse_node(1)?;
        self.skip_whitespace();
        if !self.is_at_end() {
            return Err(self.error("unexpected trailing input"));
        }
        Ok(root)
    }

    // ========================================================================
    // Grammar rules
    // ========================================================================

    fn parse_node(&mut self, depth: usize) -> Result<Node> {
        if depth > MAX_NESTING {
            return Err(self.error("nesting too deep"));
        }
        self.skip_whitespace();
        let name = self.expect_identifier("node name")?;

        self.skip_whitespace();
        let properties = if self.check(b'<') {
            self.parse_properties()?
        } else {
            Vec::new()
        };

        self.skip_whitespace();
        let children = if self.check(b'{') {
            self.parse_children(depth)?
        } else {
            Vec::new()
        };

        Ok(Node {
            name,
            properties,
            children,
        })
    }

    fn parse_properties(&mut self) -> Result<Vec<(String, String)>> {
        self.expect(b'<')?;
        let mut properties: Vec<(String, String)> = Vec::new();

        self.skip_whitespace();
        if self.check(b'>') {
            self.advance();
            return Ok(properties);
        }

        loop {
            self.skip_whitespace();
            let key_pos = self.pos;
            let key = self.expect_identifier("property name")?;
            self.skip_whitespace();
            self.expect(b'=')?;
            self.skip_whitespace();
            let value = self.expect_value()?;

            if properties.iter().any(|(k, _)| *k == key) {
                self.pos = key_pos;
                return Err(self.error(&format!("duplicate property `{}`", key)));
            }
            properties.push((key, value));

            self.skip_whitespace();
            match self.current() {
                Some(b',') => self.advance(),
                Some(b'>') => {
                    self.advance();
                    return Ok(properties);
                }
                _ => return Err(self.error("expected `,` or `>`")),
            }
        }
    }

    fn parse_children(&mut self, depth: usize) -> Result<Vec<Node>> {
        self.expect(b'{')?;
        let mut children = Vec::new();

        self.skip_whitespace();
        if self.check(b'}') {
            self.advance();
            return Ok(children);
        }

        loop {
            children.push(self.parse_node(depth + 1)?);
            self.skip_whitespace();
            match self.current() {
                Some(b',') => self.advance(),
                Some(b'}') => {
                    self.advance();
                    return Ok(children);
                }
                _ => return Err(self.error("expected `,` or `}`")),
            }
        }
    }

    // ========================================================================
    // Helper methods
    // ========================================================================

    fn current(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn check(&self, byte: u8) -> bool {
        self.current() == Some(byte)
    }

    fn expect(&mut self, byte: u8) -> Result<()> {
        if self.check(byte) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(&format!("expected `{}`", byte as char)))
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn expect_identifier(&mut self, what: &str) -> Result<String> {
        let start = self.pos;
        while matches!(self.current(), Some(b) if is_identifier_byte(b)) {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(self.error(&format!("expected {}", what)));
        }
        Ok(self.input[start..self.pos].to_string())
    }

    fn expect_value(&mut self) -> Result<String> {
        let start = self.pos;
        while matches!(self.current(), Some(b) if is_value_byte(b)) {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(self.error("expected property value"));
        }
        Ok(self.input[start..self.pos].to_string())
    }

    fn error(&self, reason: &str) -> SchemaError {
        let rest = &self.input[self.pos..];
        let fragment = if rest.is_empty() {
            "<end of input>".to_string()
        } else {
            rest.chars().take(FRAGMENT_LEN).collect()
        };
        SchemaError::grammar(fragment, format!("{} at offset {}", reason, self.pos))
    }
}

fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_value_byte(b: u8) -> bool {
    !b.is_ascii_whitespace() && !matches!(b, b',' | b'<' | b'>' | b'{' | b'}' | b'=')
}
