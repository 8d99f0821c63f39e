use crate::error::BindError;
use crate::names::{Color, Effect, LockupType};
use crate::types::{ArgumentSpec, Category, Signature};
use std::sync::Arc;

/// A value bound to an argument slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Also carries `Bool` (0 or 1) and `Bits` (low 16 bits) arguments.
    Int(i32),
    Color(Color),
    Effect(Effect),
    LockupState(LockupType),
    Expression(ExpressionNode),
}

impl Value {
    /// Short description used in type errors.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Value::Int(n) => format!("integer {n}"),
            Value::Color(_) => "a colour".to_string(),
            Value::Effect(_) => "an effect".to_string(),
            Value::LockupState(_) => "a lockup type".to_string(),
            Value::Expression(node) => {
                format!("`{}` returning {}", node.key(), node.return_category())
            }
        }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Int(i32::from(b))
    }
}

impl From<Color> for Value {
    fn from(color: Color) -> Self {
        Value::Color(color)
    }
}

impl From<Effect> for Value {
    fn from(effect: Effect) -> Self {
        Value::Effect(effect)
    }
}

impl From<LockupType> for Value {
    fn from(lockup: LockupType) -> Self {
        Value::LockupState(lockup)
    }
}

impl From<ExpressionNode> for Value {
    fn from(node: ExpressionNode) -> Self {
        Value::Expression(node)
    }
}

/// A bound instance of a registered element.
///
/// Slot `i` is governed by the signature's argument `min(i, N - 1)`, so every
/// slot past the declared list belongs to the variadic tail. An unset slot
/// falls back to its argument's default when serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionNode {
    signature: Arc<Signature>,
    args: Vec<Option<Value>>,
}

impl ExpressionNode {
    #[must_use]
    pub fn new(signature: Arc<Signature>) -> Self {
        let args = vec![None; signature.fixed_len()];
        Self { signature, args }
    }

    /// Builds a node and binds `values` positionally, extending a variadic tail as needed.
    ///
    /// # Errors
    /// Fails on the first value that does not fit its slot.
    pub fn with_args(
        signature: Arc<Signature>,
        values: impl IntoIterator<Item = Value>,
    ) -> Result<Self, BindError> {
        let mut node = Self::new(signature);
        for (index, value) in values.into_iter().enumerate() {
            if index < node.signature.fixed_len() {
                node.set_arg(index, value)?;
            } else {
                node.push_variadic(value)?;
            }
        }
        Ok(node)
    }

    #[must_use]
    pub fn signature(&self) -> &Arc<Signature> {
        &self.signature
    }

    #[must_use]
    pub fn key(&self) -> &'static str {
        self.signature.key
    }

    #[must_use]
    pub fn return_category(&self) -> Category {
        self.signature.return_category()
    }

    #[must_use]
    pub fn args(&self) -> &[Option<Value>] {
        &self.args
    }

    #[must_use]
    pub fn spec_for(&self, index: usize) -> Option<&ArgumentSpec> {
        self.signature.spec_for(index)
    }

    /// The explicitly bound value in slot `index`, if any.
    #[must_use]
    pub fn arg(&self, index: usize) -> Option<&Value> {
        self.args.get(index).and_then(Option::as_ref)
    }

    /// The bound value, or the argument default when the slot is unset.
    #[must_use]
    pub fn effective_arg(&self, index: usize) -> Option<&Value> {
        match self.args.get(index)? {
            Some(value) => Some(value),
            None => self.spec_for(index)?.default.as_ref(),
        }
    }

    /// Type-checks and binds `value` into an existing slot.
    ///
    /// # Errors
    /// Fails when the slot does not exist or the value does not fit it.
    pub fn set_arg(&mut self, index: usize, value: Value) -> Result<(), BindError> {
        if index >= self.args.len() {
            return Err(BindError::IndexOutOfRange {
                element: self.key().to_string(),
                index,
                len: self.args.len(),
            });
        }
        self.check(index, &value)?;
        self.args[index] = Some(value);
        Ok(())
    }

    /// Resets a slot so that it serializes as its default.
    pub fn clear_arg(&mut self, index: usize) {
        if let Some(slot) = self.args.get_mut(index) {
            *slot = None;
        }
    }

    /// Appends a value to the variadic tail.
    ///
    /// # Errors
    /// Fails when the element has no variadic argument or the value does not fit it.
    pub fn push_variadic(&mut self, value: Value) -> Result<(), BindError> {
        if !self.signature.is_variadic() {
            return Err(BindError::NotVariadic {
                element: self.key().to_string(),
            });
        }
        let index = self.args.len();
        self.check(index, &value)?;
        self.args.push(Some(value));
        Ok(())
    }

    /// Number of values bound to the variadic tail.
    #[must_use]
    pub fn variadic_len(&self) -> usize {
        if self.signature.is_variadic() {
            self.args.len() - self.signature.fixed_len()
        } else {
            0
        }
    }

    /// Parser-side binding; the parser has already checked the value.
    pub(crate) fn bind(&mut self, index: usize, value: Option<Value>) {
        if index < self.args.len() {
            self.args[index] = value;
        } else {
            self.args.push(value);
        }
    }

    fn check(&self, index: usize, value: &Value) -> Result<(), BindError> {
        let Some(spec) = self.spec_for(index) else {
            return Err(BindError::IndexOutOfRange {
                element: self.key().to_string(),
                index,
                len: self.args.len(),
            });
        };
        spec.tag.admits(value).map_err(|found| BindError::TypeMismatch {
            element: self.key().to_string(),
            argument: spec.name.to_string(),
            expected: spec.tag.category,
            found,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::registry;

    fn node(key: &str) -> ExpressionNode {
        registry().instantiate(key).unwrap()
    }

    #[test]
    fn test_new_node_has_fixed_slots() {
        let normal = node("StyleNormalPtr");
        assert_eq!(normal.args().len(), 6);
        assert!(normal.args().iter().all(Option::is_none));

        let sum = node("Sum");
        assert_eq!(sum.args().len(), 0);
        assert_eq!(sum.variadic_len(), 0);
    }

    #[test]
    fn test_set_arg_checks_type() {
        let mut flicker = node("AudioFlicker");
        assert!(flicker.set_arg(0, Value::Color(Color::White)).is_ok());
        let err = flicker.set_arg(1, Value::Int(5)).unwrap_err();
        assert!(matches!(err, BindError::TypeMismatch { expected: Category::Color, .. }));
        assert!(matches!(
            flicker.set_arg(2, Value::Color(Color::Blue)),
            Err(BindError::IndexOutOfRange { index: 2, len: 2, .. })
        ));
    }

    #[test]
    fn test_nested_expression_must_return_slot_category() {
        let mut ptr = node("StylePtr");
        assert!(ptr.set_arg(0, Value::Expression(node("Sin"))).is_err());
        assert!(ptr
            .set_arg(0, Value::Expression(node("AudioFlicker")))
            .is_ok());
    }

    #[test]
    fn test_effective_arg_falls_back_to_default() {
        let mut normal = node("StyleNormalPtr");
        assert_eq!(normal.effective_arg(4), Some(&Value::Color(Color::White)));
        normal.set_arg(4, Value::Color(Color::Red)).unwrap();
        assert_eq!(normal.effective_arg(4), Some(&Value::Color(Color::Red)));
        normal.clear_arg(4);
        assert_eq!(normal.arg(4), None);
        assert_eq!(normal.effective_arg(0), None);
    }

    #[test]
    fn test_push_variadic() {
        let mut sum = node("Sum");
        sum.push_variadic(Value::Int(1)).unwrap();
        sum.push_variadic(Value::Expression(node("AltF"))).unwrap();
        assert_eq!(sum.variadic_len(), 2);
        assert!(sum.push_variadic(Value::Color(Color::Red)).is_err());

        let mut flicker = node("AudioFlicker");
        assert!(matches!(
            flicker.push_variadic(Value::Color(Color::Red)),
            Err(BindError::NotVariadic { .. })
        ));
    }

    #[test]
    fn test_with_args_spills_into_variadic_tail() {
        let layers = ExpressionNode::with_args(
            registry().lookup("Layers").unwrap().clone(),
            vec![
                Value::Color(Color::Blue),
                Value::Expression(node("AudioFlickerL")),
                Value::Expression(node("BlastL")),
            ],
        )
        .unwrap();
        assert_eq!(layers.args().len(), 3);
        assert_eq!(layers.variadic_len(), 2);
    }
}
