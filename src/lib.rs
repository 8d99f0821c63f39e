pub mod api;
pub mod ast;
pub mod error;
pub mod export;
pub mod lexer;
mod library;
pub mod names;
pub mod parser;
pub mod registry;
pub mod serializer;
pub mod types;

pub use api::{analyze, parse, parse_with_name, serialize, ParsedStyle};
pub use ast::{ExpressionNode, Value};
pub use error::{BindError, ParseError, SerializeError, StyleError, TokenizeError};
pub use names::{Color, Effect, EffectGroup, LockupType};
pub use registry::{registry, Registry, RegistryBuilder};
pub use types::{ArgumentSpec, Category, Signature, TypeTag};
