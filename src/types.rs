use crate::ast::Value;
use serde::Serialize;
use std::fmt::{self, Display};

/// The closed set of value kinds an argument can take or an element can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    /// A plain integer literal, never a nested expression.
    RawInt,
    /// An integer, or an expression producing one.
    Int,
    /// A 16-bit pattern.
    Bits,
    Bool,
    Color,
    Effect,
    LockupState,
    /// A top-level style pointer such as `StylePtr<...>()`.
    Wrapper,
    /// A zero-argument named style such as `&style_charging`.
    Builtin,
}

impl Category {
    /// Wrappers and built-ins can only ever appear at the top of a style.
    #[must_use]
    pub fn is_top_level_only(self) -> bool {
        matches!(self, Category::Wrapper | Category::Builtin)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::RawInt => "Raw Int",
            Category::Int => "Int",
            Category::Bits => "Bits",
            Category::Bool => "Boolean",
            Category::Color => "Color",
            Category::Effect => "Effect",
            Category::LockupState => "Lockup Type",
            Category::Wrapper => "Wrapper",
            Category::Builtin => "Built-In",
        };
        f.write_str(name)
    }
}

/// A category together with its independent modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeTag {
    pub category: Category,
    /// The slot accepts a nested expression returning `category`.
    pub sub_expression: bool,
    /// Final argument only: zero or more trailing values.
    pub variadic: bool,
    /// Marks a colour-returning element as a composable layer.
    pub transparent: bool,
}

impl TypeTag {
    #[must_use]
    pub const fn new(category: Category) -> Self {
        Self {
            category,
            sub_expression: false,
            variadic: false,
            transparent: false,
        }
    }

    #[must_use]
    pub const fn with_sub_expression(mut self) -> Self {
        self.sub_expression = true;
        self
    }

    #[must_use]
    pub const fn with_variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    #[must_use]
    pub const fn with_transparent(mut self) -> Self {
        self.transparent = true;
        self
    }

    /// Whether a nested expression returning `returns` may fill a slot of this tag.
    #[must_use]
    pub fn accepts_expression(&self, returns: Category) -> bool {
        self.sub_expression && !returns.is_top_level_only() && returns == self.category
    }

    /// Checks a bound value against this tag.
    ///
    /// # Errors
    /// Returns a short description of what was found when the value does not fit.
    pub fn admits(&self, value: &Value) -> Result<(), String> {
        let fits = match (self.category, value) {
            (Category::RawInt | Category::Int, Value::Int(_)) => true,
            (Category::Bits, Value::Int(n)) => (0..=0xFFFF).contains(n),
            (Category::Bool, Value::Int(n)) => matches!(n, 0 | 1),
            (Category::Color, Value::Color(_)) => true,
            (Category::Effect, Value::Effect(_)) => true,
            (Category::LockupState, Value::LockupState(_)) => true,
            (_, Value::Expression(node)) => self.accepts_expression(node.return_category()),
            _ => false,
        };
        if fits {
            Ok(())
        } else {
            Err(value.describe())
        }
    }
}

impl Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.transparent && self.category == Category::Color {
            f.write_str("Layer (Transparent Color)")?;
        } else {
            write!(f, "{}", self.category)?;
        }
        if self.variadic {
            f.write_str("...")?;
        }
        Ok(())
    }
}

/// One declared parameter of an element.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentSpec {
    pub name: &'static str,
    pub tag: TypeTag,
    pub default: Option<Value>,
}

impl ArgumentSpec {
    #[must_use]
    pub fn new(name: &'static str, tag: TypeTag) -> Self {
        Self {
            name,
            tag,
            default: None,
        }
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// The immutable description of a registered element.
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    pub key: &'static str,
    pub human_name: &'static str,
    pub returns: TypeTag,
    pub args: Vec<ArgumentSpec>,
}

impl Signature {
    #[must_use]
    pub fn new(
        key: &'static str,
        human_name: &'static str,
        returns: TypeTag,
        args: Vec<ArgumentSpec>,
    ) -> Self {
        debug_assert!(
            args.iter()
                .rev()
                .skip(1)
                .all(|arg| !arg.tag.variadic),
            "variadic argument before the end of `{key}`"
        );
        Self {
            key,
            human_name,
            returns,
            args,
        }
    }

    #[must_use]
    pub fn return_category(&self) -> Category {
        self.returns.category
    }

    #[must_use]
    pub fn is_variadic(&self) -> bool {
        self.args.last().is_some_and(|arg| arg.tag.variadic)
    }

    /// Number of slots that exist before any variadic tail value is bound.
    #[must_use]
    pub fn fixed_len(&self) -> usize {
        if self.is_variadic() {
            self.args.len() - 1
        } else {
            self.args.len()
        }
    }

    /// The argument governing slot `index`; slots past the end share a variadic tail.
    #[must_use]
    pub fn spec_for(&self, index: usize) -> Option<&ArgumentSpec> {
        match self.args.get(index) {
            Some(spec) => Some(spec),
            None if self.is_variadic() => self.args.last(),
            None => None,
        }
    }
}
