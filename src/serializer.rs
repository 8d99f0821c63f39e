use crate::ast::{ExpressionNode, Value};
use crate::error::SerializeError;
use crate::types::{ArgumentSpec, Category};

/// Writes a tree back out in canonical style notation.
///
/// Every slot is written, unset ones as their default, so the output never
/// depends on which defaults the reader assumes.
///
/// # Errors
/// Returns `MissingValue` for an unset slot without a default and
/// `UnknownEnumValue` for a value that does not belong to its slot's category.
pub fn serialize(node: &ExpressionNode) -> Result<String, SerializeError> {
    let mut out = String::new();
    write_node(node, &mut out)?;
    Ok(out)
}

fn write_node(node: &ExpressionNode, out: &mut String) -> Result<(), SerializeError> {
    let category = node.return_category();
    if category == Category::Builtin {
        out.push('&');
    }
    out.push_str(node.key());

    let mut rendered = Vec::with_capacity(node.args().len());
    for (index, slot) in node.args().iter().enumerate() {
        let Some(spec) = node.spec_for(index) else {
            break;
        };
        let value = match slot {
            Some(value) => value,
            None => spec
                .default
                .as_ref()
                .ok_or_else(|| SerializeError::MissingValue {
                    element: node.key().to_string(),
                    argument: spec.name.to_string(),
                })?,
        };
        rendered.push(render_argument(node.key(), spec, value)?);
    }

    if !rendered.is_empty() {
        out.push('<');
        out.push_str(&rendered.join(","));
        out.push('>');
    }
    if category == Category::Wrapper {
        out.push_str("()");
    }
    Ok(())
}

/// Renders one argument value in the spelling its slot expects.
pub(crate) fn render_argument(
    element: &str,
    spec: &ArgumentSpec,
    value: &Value,
) -> Result<String, SerializeError> {
    let category = spec.tag.category;
    let rendered = match (category, value) {
        (_, Value::Expression(inner)) if spec.tag.accepts_expression(inner.return_category()) => {
            Some(serialize(inner)?)
        }
        (Category::RawInt | Category::Int, Value::Int(n)) => Some(n.to_string()),
        (Category::Bool, Value::Int(n)) => Some(String::from(if *n != 0 { "true" } else { "false" })),
        (Category::Bits, Value::Int(n)) => Some(render_bits(*n)),
        (Category::Color, Value::Color(color)) => Some(color.name().to_string()),
        (Category::Effect, Value::Effect(effect)) => Some(effect.code()),
        (Category::LockupState, Value::LockupState(lockup)) => Some(lockup.name().to_string()),
        _ => None,
    };
    rendered.ok_or_else(|| SerializeError::UnknownEnumValue {
        element: element.to_string(),
        argument: spec.name.to_string(),
        category,
        found: value.describe(),
    })
}

/// `0b` and sixteen digits, least significant bit first.
fn render_bits(n: i32) -> String {
    let digits: String = (0..16)
        .map(|bit| if (n >> bit) & 1 == 1 { '1' } else { '0' })
        .collect();
    format!("0b{digits}")
}
