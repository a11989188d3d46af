use log::trace;

use crate::config::{ClassifierConfig, ConfigResult};
use crate::kind::PrimitiveKind;
use crate::math;
use crate::registry::Registry;
use crate::tag::TypeTag;
use crate::value::Value;

/// Resolves any value to exactly one [`TypeTag`].
///
/// Resolution order, first match wins:
///
/// | value                         | tag                         |
/// |-------------------------------|-----------------------------|
/// | callable                      | `Function`                  |
/// | bare primitive                | its kind, lower case        |
/// | `Null`                        | `null`                      |
/// | `Array` / `Date` / `RegExp`   | `Array` / `Date` / `RegExp` |
/// | claimed by a registry entry   | the entry's tag             |
/// | anything else                 | `Object`                    |
///
/// Built-in shapes are decided before the registry is consulted, so no
/// registered predicate can reclassify them.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    registry: Registry,
}

impl Classifier {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Built-in rules only; every domain object falls back to `Object`.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Classifier over the math domain types, in the order `config` lists them.
    pub fn from_config(config: &ClassifierConfig) -> ConfigResult<Self> {
        config.validate()?;
        let registry = math::registry_for(&config.domain.order)?;
        Ok(Self::new(registry))
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn classify(&self, value: &Value) -> TypeTag {
        let kind = value.kind();
        let tag = match kind {
            PrimitiveKind::Function => TypeTag::FUNCTION,
            k if k.is_bare() => TypeTag::of_kind(k),
            _ => self.classify_object(value),
        };
        trace!("classify: kind={} tag={}", kind, tag);
        tag
    }

    fn classify_object(&self, value: &Value) -> TypeTag {
        match value {
            Value::Null => TypeTag::NULL,
            Value::Array(_) => TypeTag::ARRAY,
            Value::Date(_) => TypeTag::DATE,
            Value::RegExp(_) => TypeTag::REGEXP,
            _ => self.registry.resolve(value).unwrap_or(TypeTag::OBJECT),
        }
    }
}
