use crate::types::Category;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum StyleError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Tokenize(#[from] TokenizeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Serialize(#[from] SerializeError),
}

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum TokenizeError {
    #[error("Empty style")]
    #[diagnostic(
        code(tokenize::empty),
        help("A style needs at least an element name, e.g. `StylePtr<Blue>()`.")
    )]
    Empty {
        #[source_code]
        src: NamedSource<String>,
        #[label("Nothing to parse here")]
        span: SourceSpan,
    },

    #[error("Unbalanced `>` in `{element}`")]
    #[diagnostic(
        code(tokenize::unbalanced),
        help("Every `>` must close an earlier `<`.")
    )]
    Unbalanced {
        #[source_code]
        src: NamedSource<String>,
        #[label("This `>` closes nothing")]
        span: SourceSpan,
        element: String,
    },

    #[error("Unterminated argument list for `{element}`")]
    #[diagnostic(
        code(tokenize::unterminated),
        help("The style ended before every `<` was closed with a matching `>`.")
    )]
    Unterminated {
        #[source_code]
        src: NamedSource<String>,
        #[label("This `<` is never closed")]
        span: SourceSpan,
        element: String,
    },

    #[error("Unexpected characters after `{element}`")]
    #[diagnostic(
        code(tokenize::trailing_characters),
        help("Only `()` may follow the closing `>` of a style.")
    )]
    TrailingCharacters {
        #[source_code]
        src: NamedSource<String>,
        #[label("Unexpected text")]
        span: SourceSpan,
        element: String,
    },
}

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum ParseError {
    #[error("Unknown style element `{name}`")]
    #[diagnostic(
        code(parser::unknown_element),
        help("Element names are case-sensitive and must be registered.")
    )]
    UnknownElement {
        #[source_code]
        src: NamedSource<String>,
        #[label("Not a known element")]
        span: SourceSpan,
        name: String,
    },

    #[error("Too many arguments for `{element}`")]
    #[diagnostic(code(parser::too_many_arguments))]
    TooManyArguments {
        #[source_code]
        src: NamedSource<String>,
        #[label("`{element}` takes at most {expected} argument(s), found {found}")]
        span: SourceSpan,
        element: String,
        expected: usize,
        found: usize,
    },

    #[error("Too few arguments for `{element}`")]
    #[diagnostic(
        code(parser::too_few_arguments),
        help("Arguments without a default value must be supplied.")
    )]
    TooFewArguments {
        #[source_code]
        src: NamedSource<String>,
        #[label("Missing a value for \"{argument}\"")]
        span: SourceSpan,
        element: String,
        argument: String,
    },

    #[error("Mismatched argument type: expected {expected}, found {found}")]
    #[diagnostic(code(parser::type_mismatch))]
    TypeMismatch {
        #[source_code]
        src: NamedSource<String>,
        #[label("Expected {expected} here")]
        span: SourceSpan,
        expected: Category,
        found: String,
    },

    #[error("Expected a number, found `{text}`")]
    #[diagnostic(code(parser::not_a_number))]
    NotANumber {
        #[source_code]
        src: NamedSource<String>,
        #[label("Not a 32-bit integer")]
        span: SourceSpan,
        text: String,
    },

    #[error("Expected `true` or `false`, found `{text}`")]
    #[diagnostic(code(parser::invalid_boolean))]
    InvalidBoolean {
        #[source_code]
        src: NamedSource<String>,
        #[label("Not a boolean")]
        span: SourceSpan,
        text: String,
    },

    #[error("Invalid bit pattern `{text}`")]
    #[diagnostic(
        code(parser::invalid_bits),
        help("Write up to 16 bits as `0b` followed by 0/1, least significant bit first, or a number from 0 to 65535.")
    )]
    InvalidBits {
        #[source_code]
        src: NamedSource<String>,
        #[label("Not a 16-bit pattern")]
        span: SourceSpan,
        text: String,
    },

    #[error("Unknown color `{text}`")]
    #[diagnostic(code(parser::unknown_color))]
    UnknownColor {
        #[source_code]
        src: NamedSource<String>,
        #[label("Not a named color or a color-returning style")]
        span: SourceSpan,
        text: String,
    },

    #[error("Unknown effect `{text}`")]
    #[diagnostic(code(parser::unknown_effect))]
    UnknownEffect {
        #[source_code]
        src: NamedSource<String>,
        #[label("Not a known effect")]
        span: SourceSpan,
        text: String,
    },

    #[error("Unknown lockup type `{text}`")]
    #[diagnostic(code(parser::unknown_lockup_state))]
    UnknownLockupState {
        #[source_code]
        src: NamedSource<String>,
        #[label("Not a known lockup type")]
        span: SourceSpan,
        text: String,
    },

    #[error("Style nested deeper than {max} levels")]
    #[diagnostic(code(parser::nesting_too_deep))]
    NestingTooDeep {
        #[source_code]
        src: NamedSource<String>,
        #[label("Nesting limit exceeded here")]
        span: SourceSpan,
        max: usize,
    },
}

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum SerializeError {
    #[error("Missing value for argument \"{argument}\" of `{element}`")]
    #[diagnostic(
        code(serialize::missing_value),
        help("Bind a value to the argument; it has no default.")
    )]
    MissingValue { element: String, argument: String },

    #[error("Cannot write {found} as {category} for argument \"{argument}\" of `{element}`")]
    #[diagnostic(code(serialize::unknown_enum_value))]
    UnknownEnumValue {
        element: String,
        argument: String,
        category: Category,
        found: String,
    },
}

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("`{element}` has no argument {index} (it has {len})")]
    #[diagnostic(code(bind::index_out_of_range))]
    IndexOutOfRange {
        element: String,
        index: usize,
        len: usize,
    },

    #[error("`{element}` does not take variadic arguments")]
    #[diagnostic(code(bind::not_variadic))]
    NotVariadic { element: String },

    #[error("Argument \"{argument}\" of `{element}` expects {expected}, found {found}")]
    #[diagnostic(code(bind::type_mismatch))]
    TypeMismatch {
        element: String,
        argument: String,
        expected: Category,
        found: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_error_display() {
        let err = SerializeError::MissingValue {
            element: "StylePtr".to_string(),
            argument: "Style Contents".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("StylePtr"));
        assert!(msg.contains("Style Contents"));
    }

    #[test]
    fn test_type_mismatch_display_uses_category_names() {
        let err = ParseError::TypeMismatch {
            src: NamedSource::new("test.style", "AudioFlicker<5,Blue>".to_string()),
            span: (13, 1).into(),
            expected: Category::Color,
            found: "integer 5".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Mismatched argument type: expected Color, found integer 5"
        );
    }
}
