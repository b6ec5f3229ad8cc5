//! Cross-field lookup interface.
//!
//! Context-aware rules compare the value under test against a sibling
//! field's value. The sibling data source is an external collaborator; this
//! module only fixes the interface it must satisfy and adapts raw mappings
//! into it.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

// ============================================================================
// CONTEXT LOOKUP
// ============================================================================

/// Lookup interface a sibling data source must satisfy.
///
/// Implemented by the out-of-crate data-wrapping layer; [`MapContext`] is
/// the built-in adapter for plain mappings. The base rule contract never
/// consults the context, only context-aware variants do.
pub trait ContextLookup {
    /// Returns the value recorded under `identifier`, if any.
    fn lookup(&self, identifier: &str) -> Option<Value>;
}

/// Adapts a plain mapping into [`ContextLookup`].
#[derive(Debug, Clone, Default)]
pub struct MapContext {
    values: BTreeMap<String, Value>,
}

impl MapContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites a field value. Chainable.
    pub fn insert(&mut self, identifier: impl Into<String>, value: Value) -> &mut Self {
        self.values.insert(identifier.into(), value);
        self
    }

    /// Builder flavor of [`insert`](Self::insert).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_value(mut self, identifier: impl Into<String>, value: Value) -> Self {
        self.values.insert(identifier.into(), value);
        self
    }
}

impl From<BTreeMap<String, Value>> for MapContext {
    fn from(values: BTreeMap<String, Value>) -> Self {
        Self { values }
    }
}

impl ContextLookup for MapContext {
    fn lookup(&self, identifier: &str) -> Option<Value> {
        self.values.get(identifier).cloned()
    }
}

// ============================================================================
// CONTEXT SOURCE
// ============================================================================

/// Input accepted by `set_context`.
///
/// Raw mappings are adapted into the lookup interface before storage;
/// objects already satisfying the interface are stored as-is. The
/// [`Unchanged`](Self::Unchanged) arm is the absent case: a no-op that
/// leaves any previously installed context in place (`None` converts to
/// it).
#[derive(Clone, Default)]
pub enum ContextSource {
    /// Leave the rule's current context untouched.
    #[default]
    Unchanged,
    /// A raw mapping; adapted into a [`MapContext`] before storage.
    Map(BTreeMap<String, Value>),
    /// An object already satisfying the lookup interface.
    Lookup(Arc<dyn ContextLookup>),
}

impl ContextSource {
    /// Resolves to a storable lookup handle, or `None` for the no-op arm.
    pub(crate) fn into_lookup(self) -> Option<Arc<dyn ContextLookup>> {
        match self {
            Self::Unchanged => None,
            Self::Map(values) => Some(Arc::new(MapContext::from(values))),
            Self::Lookup(lookup) => Some(lookup),
        }
    }
}

impl fmt::Debug for ContextSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unchanged => f.write_str("Unchanged"),
            Self::Map(values) => f.debug_tuple("Map").field(values).finish(),
            Self::Lookup(_) => f.write_str("Lookup(..)"),
        }
    }
}

impl From<BTreeMap<String, Value>> for ContextSource {
    fn from(values: BTreeMap<String, Value>) -> Self {
        Self::Map(values)
    }
}

impl From<MapContext> for ContextSource {
    fn from(context: MapContext) -> Self {
        Self::Lookup(Arc::new(context))
    }
}

impl From<Arc<dyn ContextLookup>> for ContextSource {
    fn from(lookup: Arc<dyn ContextLookup>) -> Self {
        Self::Lookup(lookup)
    }
}

impl<C: Into<ContextSource>> From<Option<C>> for ContextSource {
    fn from(context: Option<C>) -> Self {
        context.map_or(Self::Unchanged, Into::into)
    }
}

// ============================================================================
// TESTS
// ============================================================================
