// Error paths of the binding and serialization API

use bladestyle_core::{
    registry, serialize, BindError, Category, Color, Effect, SerializeError, StyleError, Value,
};
use miette::Diagnostic;

#[test]
fn test_serialize_missing_value() {
    let node = registry().instantiate("AudioFlicker").unwrap();
    let err = serialize(&node).unwrap_err();
    assert!(matches!(
        err,
        StyleError::Serialize(SerializeError::MissingValue { ref argument, .. }) if argument == "Base Color"
    ));
    assert_eq!(
        err.code().map(|code| code.to_string()).as_deref(),
        Some("serialize::missing_value")
    );
}

#[test]
fn test_bind_wrong_category() {
    let mut node = registry().instantiate("EffectPulseF").unwrap();
    let err = node.set_arg(0, Value::Color(Color::Red)).unwrap_err();
    assert_eq!(
        err,
        BindError::TypeMismatch {
            element: "EffectPulseF".to_string(),
            argument: "Trigger Effect".to_string(),
            expected: Category::Effect,
            found: "a colour".to_string(),
        }
    );
    node.set_arg(0, Value::Effect(Effect::Force)).unwrap();
    assert_eq!(serialize(&node).unwrap(), "EffectPulseF<EFFECT_FORCE>");
}

#[test]
fn test_bind_rejects_out_of_range_bits_and_bool() {
    let mut sequence = registry().instantiate("SequenceF").unwrap();
    sequence.set_arg(0, Value::Int(100)).unwrap();
    sequence.set_arg(1, Value::Int(4)).unwrap();
    assert_eq!(
        sequence.push_variadic(Value::Int(100_000)),
        Err(BindError::TypeMismatch {
            element: "SequenceF".to_string(),
            argument: "Bit Section".to_string(),
            expected: Category::Bits,
            found: "integer 100000".to_string(),
        })
    );
    sequence.push_variadic(Value::Int(13)).unwrap();
    assert_eq!(serialize(&sequence).unwrap(), "SequenceF<100,4,0b1011000000000000>");

    let mut helper = registry().instantiate("InOutHelperF").unwrap();
    assert!(matches!(
        helper.set_arg(1, Value::Int(5)),
        Err(BindError::TypeMismatch { expected: Category::Bool, .. })
    ));
    helper.set_arg(1, Value::from(false)).unwrap();
}

#[test]
fn test_bind_out_of_range() {
    let mut node = registry().instantiate("Int").unwrap();
    assert!(matches!(
        node.set_arg(1, Value::Int(1)),
        Err(BindError::IndexOutOfRange { index: 1, len: 1, .. })
    ));
    assert!(matches!(
        node.push_variadic(Value::Int(1)),
        Err(BindError::NotVariadic { .. })
    ));
}

#[test]
fn test_bind_rejects_top_level_elements() {
    let mut node = registry().instantiate("StylePtr").unwrap();
    let inner = registry().instantiate("style_pov").unwrap();
    assert!(node.set_arg(0, Value::Expression(inner)).is_err());
}

#[test]
fn test_clear_arg_restores_default() {
    let mut node = registry().instantiate("StyleRainbowPtr").unwrap();
    node.set_arg(0, Value::Int(300)).unwrap();
    node.set_arg(1, Value::Int(800)).unwrap();
    node.set_arg(2, Value::Color(Color::Red)).unwrap();
    assert_eq!(serialize(&node).unwrap(), "StyleRainbowPtr<300,800,Red,White>()");
    node.clear_arg(2);
    assert_eq!(serialize(&node).unwrap(), "StyleRainbowPtr<300,800,White,White>()");
}
