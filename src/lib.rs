//! Runtime type tags for Lyra values.
//!
//! [`Classifier::classify`] maps any [`Value`] to a [`TypeTag`]: primitive
//! kinds by name (`number`, `string`, ...), built-in shapes (`null`, `Array`,
//! `Date`, `RegExp`, `Function`), domain objects through an ordered
//! [`Registry`] of membership tests, and everything else to `Object`.
//!
//! ```
//! use lyra_typeof::{math, Classifier, Value};
//!
//! let classifier = Classifier::new(math::default_registry().unwrap());
//! assert_eq!(classifier.classify(&Value::Number(3.5)), "number");
//! assert_eq!(classifier.classify(&Value::foreign(math::Complex::new(2.0, 3.0))), "Complex");
//! assert_eq!(classifier.classify(&Value::foreign(math::Node::symbol("x"))), "SymbolNode");
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod foreign;
pub mod kind;
pub mod math;
pub mod predicate;
pub mod registry;
pub mod tag;
pub mod value;

pub use classifier::Classifier;
pub use config::{ClassifierConfig, ConfigError, ConfigResult};
pub use error::{RegistryError, Result};
pub use foreign::{Foreign, LyObj};
pub use kind::PrimitiveKind;
pub use predicate::Predicate;
pub use registry::{Registry, RegistryBuilder, RegistryEntry, TagSource};
pub use tag::TypeTag;
pub use value::{AssocMap, NativeFunction, Value};
