use crate::ast::ExpressionNode;
use crate::export::ElementInfo;
use crate::library;
use crate::types::{Category, Signature};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::sync::Arc;

/// The table of every element the parser can resolve, keyed by element name.
///
/// Keys are case-sensitive and globally unique across all categories.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    elements: BTreeMap<&'static str, Arc<Signature>>,
}

static STANDARD: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::standard();
    log::debug!("built standard style registry with {} elements", registry.len());
    registry
});

/// The process-wide standard registry, built on first use.
#[must_use]
pub fn registry() -> &'static Registry {
    &STANDARD
}

impl Registry {
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Builds the full ProffieOS element table: functions, styles, wrappers and built-ins.
    ///
    /// # Panics
    /// Panics if two tables declare the same key.
    #[must_use]
    pub fn standard() -> Self {
        Self::builder()
            .register_all(library::functions::signatures())
            .register_all(library::styles::signatures())
            .register_all(library::wrappers::signatures())
            .register_all(library::builtins::signatures())
            .build()
    }

    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&Arc<Signature>> {
        self.elements.get(key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.elements.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// All signatures in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Signature>> {
        self.elements.values()
    }

    /// Signatures whose return category is `category`, in key order.
    pub fn iter_returning(&self, category: Category) -> impl Iterator<Item = &Arc<Signature>> {
        self.iter()
            .filter(move |sig| sig.return_category() == category)
    }

    /// A fresh node of the element `key` with every slot unset.
    #[must_use]
    pub fn instantiate(&self, key: &str) -> Option<ExpressionNode> {
        self.lookup(key).map(|sig| ExpressionNode::new(Arc::clone(sig)))
    }

    /// Serializable descriptions of every element, in key order.
    #[must_use]
    pub fn catalog(&self) -> Vec<ElementInfo> {
        self.iter().map(|sig| ElementInfo::from_signature(sig)).collect()
    }
}

#[derive(Debug, Default)]
pub struct RegistryBuilder {
    elements: BTreeMap<&'static str, Arc<Signature>>,
}

impl RegistryBuilder {
    /// Adds one element.
    ///
    /// # Panics
    /// Panics if `signature.key` is already registered.
    #[must_use]
    pub fn register(mut self, signature: Arc<Signature>) -> Self {
        debug_assert!(
            signature.args.iter().all(|arg| arg
                .default
                .as_ref()
                .map_or(true, |default| arg.tag.admits(default).is_ok())),
            "`{}` has a default that does not fit its argument",
            signature.key
        );
        let key = signature.key;
        let previous = self.elements.insert(key, signature);
        assert!(previous.is_none(), "element `{key}` registered twice");
        self
    }

    #[must_use]
    pub fn register_all(self, signatures: impl IntoIterator<Item = Arc<Signature>>) -> Self {
        signatures.into_iter().fold(self, Self::register)
    }

    #[must_use]
    pub fn build(self) -> Registry {
        Registry {
            elements: self.elements,
        }
    }
}
