//! Serde views of parsed styles and of the element catalog.

use crate::ast::{ExpressionNode, Value as StyleValue};
use crate::serializer::render_argument;
use crate::types::{ArgumentSpec, Category, Signature};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Number(i64),
    Boolean(bool),
    Null,
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

/// `{ element, name, returns, args: [{ name, value, is_default }] }`
pub(crate) fn to_value(node: &ExpressionNode) -> Value {
    let signature = node.signature();
    let args = node
        .args()
        .iter()
        .enumerate()
        .filter_map(|(index, slot)| {
            let spec = node.spec_for(index)?;
            let (value, is_default) = match slot {
                Some(value) => (argument_value(spec, value), false),
                None => (
                    spec.default
                        .as_ref()
                        .map_or(Value::Null, |value| argument_value(spec, value)),
                    true,
                ),
            };
            let mut map = BTreeMap::new();
            map.insert("name".to_string(), Value::String(spec.name.to_string()));
            map.insert("value".to_string(), value);
            map.insert("is_default".to_string(), Value::Boolean(is_default));
            Some(Value::Object(map))
        })
        .collect();

    let mut map = BTreeMap::new();
    map.insert("element".to_string(), Value::String(signature.key.to_string()));
    map.insert(
        "name".to_string(),
        Value::String(signature.human_name.to_string()),
    );
    map.insert(
        "returns".to_string(),
        Value::String(signature.returns.to_string()),
    );
    map.insert("args".to_string(), Value::Array(args));
    Value::Object(map)
}

fn argument_value(spec: &ArgumentSpec, value: &StyleValue) -> Value {
    match (spec.tag.category, value) {
        (_, StyleValue::Expression(inner)) => to_value(inner),
        (Category::Bool, StyleValue::Int(n)) => Value::Boolean(*n != 0),
        (Category::RawInt | Category::Int, StyleValue::Int(n)) => Value::Number(i64::from(*n)),
        // Bit patterns, colours and names keep their written spelling.
        _ => render_argument("", spec, value).map_or(Value::Null, Value::String),
    }
}

/// One element as shown in a picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementInfo {
    pub key: String,
    pub human_name: String,
    pub returns: Category,
    /// e.g. `Layer (Transparent Color)`.
    pub return_type: String,
    pub transparent: bool,
    pub args: Vec<ArgumentInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentInfo {
    pub name: String,
    pub category: Category,
    /// e.g. `Color...` for a variadic colour argument.
    pub type_name: String,
    pub sub_expression: bool,
    pub variadic: bool,
    /// The default in style notation, if the argument has one.
    pub default: Option<String>,
}

impl ElementInfo {
    #[must_use]
    pub fn from_signature(signature: &Signature) -> Self {
        let args = signature
            .args
            .iter()
            .map(|spec| ArgumentInfo {
                name: spec.name.to_string(),
                category: spec.tag.category,
                type_name: spec.tag.to_string(),
                sub_expression: spec.tag.sub_expression,
                variadic: spec.tag.variadic,
                default: spec
                    .default
                    .as_ref()
                    .and_then(|value| render_argument(signature.key, spec, value).ok()),
            })
            .collect();

        Self {
            key: signature.key.to_string(),
            human_name: signature.human_name.to_string(),
            returns: signature.return_category(),
            return_type: signature.returns.to_string(),
            transparent: signature.returns.transparent,
            args,
        }
    }
}
