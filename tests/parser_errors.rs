// Parser error paths, checked through the public API

use bladestyle_core::{analyze, parse, ParseError, StyleError, TokenizeError};

#[test]
fn test_parser_error_too_many_arguments() {
    let result = parse("Int<1,2>");
    assert!(
        matches!(
            result,
            Err(StyleError::Parse(ParseError::TooManyArguments {
                expected: 1,
                found: 2,
                ..
            }))
        ),
        "Should fail with too many arguments: {result:?}"
    );
}

#[test]
fn test_parser_error_too_few_arguments() {
    let result = parse("Scale<Int<1>>");
    assert!(
        matches!(
            result,
            Err(StyleError::Parse(ParseError::TooFewArguments { .. }))
        ),
        "Should fail with too few arguments"
    );
}

#[test]
fn test_parser_error_integer_for_color() {
    let result = parse("AudioFlicker<5,Blue>");
    assert!(result.is_err(), "5 is not a colour");
    assert!(parse("AudioFlicker<White,Blue>").is_ok());
}

#[test]
fn test_parser_error_unknown_element() {
    let result = analyze("NotARealStyle<1>", "test.style");
    assert!(matches!(
        result,
        Err(StyleError::Parse(ParseError::UnknownElement { ref name, .. })) if name == "NotARealStyle"
    ));
}

#[test]
fn test_parser_error_unterminated() {
    let result = parse("StylePtr<AudioFlicker<White,Blue>()");
    assert!(matches!(
        result,
        Err(StyleError::Tokenize(TokenizeError::Unterminated { .. }))
    ));
}

#[test]
fn test_parser_error_unbalanced() {
    let result = parse("StylePtr<Blue>>()");
    assert!(matches!(
        result,
        Err(StyleError::Tokenize(TokenizeError::Unbalanced { .. }))
    ));
}

#[test]
fn test_parser_error_empty() {
    assert!(matches!(
        parse("   "),
        Err(StyleError::Tokenize(TokenizeError::Empty { .. }))
    ));
}

#[test]
fn test_parser_error_trailing_characters() {
    assert!(matches!(
        parse("StylePtr<Blue>() StylePtr<Red>()"),
        Err(StyleError::Tokenize(TokenizeError::TrailingCharacters { .. }))
    ));
}

#[test]
fn test_parser_error_empty_argument() {
    assert!(matches!(
        parse("Rgb<1,,3>"),
        Err(StyleError::Parse(ParseError::NotANumber { .. }))
    ));
}

#[test]
fn test_parser_error_integer_overflow() {
    assert!(matches!(
        parse("Int<99999999999>"),
        Err(StyleError::Parse(ParseError::NotANumber { .. }))
    ));
}

#[test]
fn test_parser_error_builtin_nested() {
    assert!(matches!(
        parse("StylePtr<&style_pov>()"),
        Err(StyleError::Parse(ParseError::TypeMismatch { .. }))
    ));
}

#[test]
fn test_parser_error_unknown_names() {
    assert!(matches!(
        parse("StylePtr<AudioFlicker<white,Blue>>()"),
        Err(StyleError::Parse(ParseError::UnknownColor { .. }))
    ));
    assert!(matches!(
        parse("EffectPulseF<EFFECT_BOGUS>"),
        Err(StyleError::Parse(ParseError::UnknownEffect { .. }))
    ));
    assert!(matches!(
        parse("LockupPulseF<SaberBase::LOCKUP_BOGUS>"),
        Err(StyleError::Parse(ParseError::UnknownLockupState { .. }))
    ));
}

#[test]
fn test_parser_error_nesting_too_deep() {
    let mut style = "Int<1>".to_string();
    for _ in 0..80 {
        style = format!("Sum<{style}>");
    }
    assert!(matches!(
        parse(&style),
        Err(StyleError::Parse(ParseError::NestingTooDeep { max: 64, .. }))
    ));
}

#[test]
fn test_error_spans_point_at_offending_argument() {
    let source = "StyleNormalPtr<AudioFlicker<Blue,DodgerBlue>,White,3OO,800>()";
    let Err(StyleError::Parse(ParseError::NotANumber { span, text, .. })) = parse(source) else {
        panic!("expected NotANumber");
    };
    assert_eq!(text, "3OO");
    assert_eq!(&source[span.offset()..span.offset() + span.len()], "3OO");
}
