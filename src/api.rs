use crate::ast::ExpressionNode;
use crate::error::{SerializeError, StyleError};
use crate::export::{to_value, Value};
use crate::parser::Parser;
use serde::{Serialize, Serializer};

/// The result of successfully parsing a style.
///
/// Holds the typed tree and offers the canonical string and structured
/// exports of it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedStyle {
    pub root: ExpressionNode,
}

impl Serialize for ParsedStyle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_value().serialize(serializer)
    }
}

impl ParsedStyle {
    /// The canonical style notation of the tree.
    ///
    /// # Errors
    /// Returns a `SerializeError` if a slot cannot be written.
    pub fn to_style_string(&self) -> Result<String, SerializeError> {
        crate::serializer::serialize(&self.root)
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        to_value(&self.root)
    }

    /// Serializes the tree view into a pretty-printed JSON string.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self)
    }

    /// Serializes the tree view into a YAML string.
    ///
    /// # Errors
    /// Returns a `serde_yaml::Error` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self)
    }
}

/// Parses a style; `file_name` labels any diagnostic.
///
/// # Errors
/// Returns a `StyleError` if the style fails to tokenize or type-check.
pub fn analyze(source: &str, file_name: &str) -> Result<ParsedStyle, StyleError> {
    let root = Parser::new_with_name(source, file_name.to_string()).parse_style()?;
    Ok(ParsedStyle { root })
}

/// Parses `text` into a typed tree with the standard registry.
///
/// # Errors
/// Returns a `StyleError` if the style fails to tokenize or type-check.
pub fn parse(text: &str) -> Result<ExpressionNode, StyleError> {
    crate::parser::parse(text)
}

/// Like [`parse`], with `file_name` shown in rendered diagnostics.
///
/// # Errors
/// Returns a `StyleError` if the style fails to tokenize or type-check.
pub fn parse_with_name(text: &str, file_name: &str) -> Result<ExpressionNode, StyleError> {
    analyze(text, file_name).map(|parsed| parsed.root)
}

/// Writes a tree in canonical style notation.
///
/// # Errors
/// Returns a `StyleError::Serialize` if a slot has no value and no default.
pub fn serialize(node: &ExpressionNode) -> Result<String, StyleError> {
    Ok(crate::serializer::serialize(node)?)
}
