use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::error::{RegistryError, Result};
use crate::predicate::Predicate;
use crate::tag::TypeTag;
use crate::value::Value;

/// Where the tag of a matching entry comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagSource {
    Fixed(TypeTag),
    /// The instance names its own subtype (`Value::type_field`); `family` is
    /// used only when it reports nothing.
    SelfReported { family: TypeTag },
}

impl TagSource {
    /// Tag this entry is declared under.
    pub fn declared(&self) -> &TypeTag {
        match self {
            TagSource::Fixed(tag) => tag,
            TagSource::SelfReported { family } => family,
        }
    }

    fn resolve(&self, value: &Value) -> TypeTag {
        match self {
            TagSource::Fixed(tag) => tag.clone(),
            TagSource::SelfReported { family } => value
                .type_field()
                .filter(|t| !t.is_empty())
                .map(|t| TypeTag::new(t))
                .unwrap_or_else(|| family.clone()),
        }
    }
}

#[derive(Clone)]
pub struct RegistryEntry {
    pub predicate: Predicate,
    pub source: TagSource,
}

impl RegistryEntry {
    pub fn fixed(tag: impl Into<TypeTag>, predicate: Predicate) -> Self {
        Self { predicate, source: TagSource::Fixed(tag.into()) }
    }

    pub fn family(family: impl Into<TypeTag>, predicate: Predicate) -> Self {
        Self { predicate, source: TagSource::SelfReported { family: family.into() } }
    }

    pub fn matches(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }
}

impl fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry").field("source", &self.source).finish_non_exhaustive()
    }
}

/// Ordered, frozen list of domain entries. Earlier entries win.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Arc<[RegistryEntry]>,
}

impl Default for Registry {
    fn default() -> Self {
        Self { entries: Arc::from(Vec::new()) }
    }
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter()
    }

    pub fn tags(&self) -> Vec<TypeTag> {
        self.entries.iter().map(|e| e.source.declared().clone()).collect()
    }

    /// First matching entry's tag, or `None` when nothing claims the value.
    pub fn resolve(&self, value: &Value) -> Option<TypeTag> {
        self.entries.iter().find(|e| e.matches(value)).map(|e| e.source.resolve(value))
    }
}

#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: Vec<RegistryEntry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, tag: impl Into<TypeTag>, predicate: Predicate) -> Self {
        self.entries.push(RegistryEntry::fixed(tag, predicate));
        self
    }

    pub fn register_family(mut self, family: impl Into<TypeTag>, predicate: Predicate) -> Self {
        self.entries.push(RegistryEntry::family(family, predicate));
        self
    }

    pub fn push(mut self, entry: RegistryEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Append every entry of `other`, keeping its order.
    pub fn extend(mut self, other: &Registry) -> Self {
        self.entries.extend(other.iter().cloned());
        self
    }

    pub fn build(self) -> Result<Registry> {
        let mut seen: HashSet<TypeTag> = HashSet::with_capacity(self.entries.len());
        for (index, entry) in self.entries.iter().enumerate() {
            let tag = entry.source.declared();
            if tag.is_empty() {
                return Err(RegistryError::EmptyTag { index });
            }
            if tag.is_reserved() {
                return Err(RegistryError::ReservedTag(tag.to_string()));
            }
            if !seen.insert(tag.clone()) {
                return Err(RegistryError::DuplicateTag(tag.to_string()));
            }
        }
        let registry = Registry { entries: self.entries.into() };
        debug!(
            "built type registry with {} entries: [{}]",
            registry.len(),
            registry.tags().iter().map(TypeTag::as_str).collect::<Vec<_>>().join(", ")
        );
        Ok(registry)
    }
}
