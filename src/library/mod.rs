//! The declarative element tables the standard registry is built from.
//!
//! Plain integer parameters of the firmware templates are `RawInt` literals;
//! parameters that take an integer function are `Int` sub-expressions. Colour
//! parameters always accept nested colour-returning styles.

pub(crate) mod builtins;
pub(crate) mod functions;
pub(crate) mod styles;
pub(crate) mod wrappers;

use crate::types::{ArgumentSpec, Category, Signature, TypeTag};

fn raw_int_arg(name: &'static str) -> ArgumentSpec {
    ArgumentSpec::new(name, TypeTag::new(Category::RawInt))
}

fn int_arg(name: &'static str) -> ArgumentSpec {
    ArgumentSpec::new(name, TypeTag::new(Category::Int).with_sub_expression())
}

fn color_arg(name: &'static str) -> ArgumentSpec {
    ArgumentSpec::new(name, TypeTag::new(Category::Color).with_sub_expression())
}

fn effect_arg(name: &'static str) -> ArgumentSpec {
    ArgumentSpec::new(name, TypeTag::new(Category::Effect))
}

fn lockup_arg(name: &'static str) -> ArgumentSpec {
    ArgumentSpec::new(name, TypeTag::new(Category::LockupState))
}

fn bool_arg(name: &'static str) -> ArgumentSpec {
    ArgumentSpec::new(name, TypeTag::new(Category::Bool))
}

fn bits_arg(name: &'static str) -> ArgumentSpec {
    ArgumentSpec::new(name, TypeTag::new(Category::Bits))
}

fn variadic(mut spec: ArgumentSpec) -> ArgumentSpec {
    spec.tag = spec.tag.with_variadic();
    spec
}

fn function(key: &'static str, human_name: &'static str, args: Vec<ArgumentSpec>) -> Signature {
    Signature::new(key, human_name, TypeTag::new(Category::Int), args)
}

fn style(key: &'static str, human_name: &'static str, args: Vec<ArgumentSpec>) -> Signature {
    Signature::new(key, human_name, TypeTag::new(Category::Color), args)
}

/// A colour-returning element meant to be stacked inside `Layers<>`.
fn layer(key: &'static str, human_name: &'static str, args: Vec<ArgumentSpec>) -> Signature {
    Signature::new(
        key,
        human_name,
        TypeTag::new(Category::Color).with_transparent(),
        args,
    )
}

fn wrapper(key: &'static str, human_name: &'static str, args: Vec<ArgumentSpec>) -> Signature {
    Signature::new(key, human_name, TypeTag::new(Category::Wrapper), args)
}

fn builtin(key: &'static str, human_name: &'static str) -> Signature {
    Signature::new(key, human_name, TypeTag::new(Category::Builtin), Vec::new())
}
