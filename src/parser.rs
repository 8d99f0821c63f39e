use crate::ast::{ExpressionNode, Value};
use crate::error::{ParseError, StyleError};
use crate::lexer::{RawArg, Tokenizer};
use crate::names::{Color, Effect, LockupType};
use crate::registry::{registry, Registry};
use crate::types::{ArgumentSpec, Category};
use miette::{NamedSource, SourceSpan};
use std::ops::Range;
use std::sync::Arc;

/// How many levels of nested elements a style may contain by default.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// A recursive, registry-driven parser for a single style expression.
///
/// Each element is tokenized into its name and raw arguments, resolved in the
/// registry, and its arguments are parsed against the declared argument types.
/// Arguments that are themselves elements are tokenized again from their span
/// in the full text, so every error points into the source the caller gave.
#[derive(Debug)]
pub struct Parser<'a> {
    source: Arc<NamedSource<String>>,
    source_text: &'a str,
    registry: &'a Registry,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(source_text: &'a str) -> Self {
        Self::new_with_name(source_text, "style".to_string())
    }

    /// `name` is shown in rendered diagnostics.
    #[must_use]
    pub fn new_with_name(source_text: &'a str, name: String) -> Self {
        Self {
            source: Arc::new(NamedSource::new(name, source_text.to_string())),
            source_text,
            registry: registry(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    #[must_use]
    pub fn with_registry(mut self, registry: &'a Registry) -> Self {
        self.registry = registry;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses the whole source as one style.
    ///
    /// # Errors
    /// Returns a `StyleError` if the text cannot be tokenized, names an unknown
    /// element, has the wrong number of arguments, or an argument does not fit
    /// its declared type.
    pub fn parse_style(&self) -> Result<ExpressionNode, StyleError> {
        self.parse_element(0..self.source_text.len(), 0)
    }

    fn parse_element(
        &self,
        range: Range<usize>,
        depth: usize,
    ) -> Result<ExpressionNode, StyleError> {
        if depth > self.max_depth {
            return Err(ParseError::NestingTooDeep {
                src: self.src(),
                span: range.into(),
                max: self.max_depth,
            }
            .into());
        }

        let tokens = Tokenizer::new_in_range(self.source_text, &self.source, range.clone())
            .tokenize()?;
        let Some(signature) = self.registry.lookup(&tokens.name) else {
            return Err(ParseError::UnknownElement {
                src: self.src(),
                span: tokens.name_span.into(),
                name: tokens.name,
            }
            .into());
        };
        let signature = Arc::clone(signature);
        log::debug!(
            "parsing `{}` with {} argument(s) at depth {}",
            signature.key,
            tokens.args.len(),
            depth
        );

        let declared = signature.args.len();
        if tokens.args.len() > declared && !signature.is_variadic() {
            let extra = &tokens.args[declared..];
            let start = extra.first().map_or(range.start, |arg| arg.span.start);
            let end = extra.last().map_or(range.end, |arg| arg.span.end);
            return Err(ParseError::TooManyArguments {
                src: self.src(),
                span: (start..end).into(),
                element: signature.key.to_string(),
                expected: declared,
                found: tokens.args.len(),
            }
            .into());
        }

        let mut node = ExpressionNode::new(Arc::clone(&signature));
        for index in 0..tokens.args.len().max(declared) {
            let Some(spec) = signature.spec_for(index) else {
                break;
            };
            match tokens.args.get(index) {
                Some(raw) => {
                    let value = self.parse_argument(spec, raw, depth)?;
                    node.bind(index, Some(value));
                }
                // Unset slots serialize as their default; a variadic tail may be empty.
                None if spec.tag.variadic || spec.default.is_some() => {}
                None => {
                    return Err(ParseError::TooFewArguments {
                        src: self.src(),
                        span: (tokens.name_span.start..range.end).into(),
                        element: signature.key.to_string(),
                        argument: spec.name.to_string(),
                    }
                    .into());
                }
            }
        }
        Ok(node)
    }

    fn parse_argument(
        &self,
        spec: &ArgumentSpec,
        raw: &RawArg,
        depth: usize,
    ) -> Result<Value, StyleError> {
        if raw.text.contains('<') || self.names_element(&raw.text) {
            let value = Value::Expression(self.parse_element(raw.span.clone(), depth + 1)?);
            spec.tag.admits(&value).map_err(|found| ParseError::TypeMismatch {
                src: self.src(),
                span: raw.span.clone().into(),
                expected: spec.tag.category,
                found,
            })?;
            return Ok(value);
        }
        Ok(self.parse_literal(spec.tag.category, raw)?)
    }

    /// A bare element key such as `AltF`, `AltF()` or `&style_pov`.
    fn names_element(&self, text: &str) -> bool {
        let text = text.strip_prefix('&').unwrap_or(text);
        let text = text.strip_suffix("()").unwrap_or(text);
        self.registry.contains(text)
    }

    fn parse_literal(&self, category: Category, raw: &RawArg) -> Result<Value, ParseError> {
        let text = raw.text.as_str();
        let src = || self.src();
        let span = || SourceSpan::from(raw.span.clone());
        let owned = || text.to_string();

        match category {
            Category::RawInt | Category::Int => {
                parse_int(text)
                    .map(Value::Int)
                    .ok_or_else(|| ParseError::NotANumber {
                        src: src(),
                        span: span(),
                        text: owned(),
                    })
            }
            Category::Bool => parse_bool(text)
                .map(Value::from)
                .ok_or_else(|| ParseError::InvalidBoolean {
                    src: src(),
                    span: span(),
                    text: owned(),
                }),
            Category::Bits => parse_bits(text)
                .map(Value::Int)
                .ok_or_else(|| ParseError::InvalidBits {
                    src: src(),
                    span: span(),
                    text: owned(),
                }),
            Category::Color => Color::parse(text)
                .map(Value::Color)
                .ok_or_else(|| ParseError::UnknownColor {
                    src: src(),
                    span: span(),
                    text: owned(),
                }),
            Category::Effect => Effect::parse(text)
                .map(Value::Effect)
                .ok_or_else(|| ParseError::UnknownEffect {
                    src: src(),
                    span: span(),
                    text: owned(),
                }),
            Category::LockupState => LockupType::parse(text)
                .map(Value::LockupState)
                .ok_or_else(|| ParseError::UnknownLockupState {
                    src: src(),
                    span: span(),
                    text: owned(),
                }),
            Category::Wrapper | Category::Builtin => Err(ParseError::TypeMismatch {
                src: src(),
                span: span(),
                expected: category,
                found: format!("literal `{text}`"),
            }),
        }
    }

    fn src(&self) -> NamedSource<String> {
        (*self.source).clone()
    }
}

/// An optional `-` followed by decimal digits, within `i32`.
fn parse_int(text: &str) -> Option<i32> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "true" => Some(true),
        "false" => Some(false),
        _ => parse_int(text).map(|n| n != 0),
    }
}

/// `0b` followed by up to 16 bits, least significant first, or a decimal `0..=65535`.
fn parse_bits(text: &str) -> Option<i32> {
    let Some(bits) = text.strip_prefix("0b") else {
        return parse_int(text).filter(|n| (0..=0xFFFF).contains(n));
    };
    if bits.is_empty() || bits.len() > 16 {
        return None;
    }
    bits.bytes()
        .enumerate()
        .try_fold(0, |acc, (bit, digit)| match digit {
            b'0' => Some(acc),
            b'1' => Some(acc | 1 << bit),
            _ => None,
        })
}

/// Parses `text` against the standard registry.
///
/// # Errors
/// See [`Parser::parse_style`].
pub fn parse(text: &str) -> Result<ExpressionNode, StyleError> {
    Parser::new(text).parse_style()
}
