//! # Type Registry
//!
//! A [`TypeRegistry`] indexes the structs and enums of a schema by qualified name, so
//! consumers that only have a name (a command line, a config file) can find a definition.
//!
//! ```rust
//! use refract_core::registry::TypeRegistry;
//!
//! let mut registry = TypeRegistry::new();
//! registry.register::<Vec<String>>();
//!
//! // Primitives and containers are not records.
//! assert!(registry.is_empty());
//! ```
//!
//! Registering a type registers every record reachable from it. Process-wide registries are
//! usually built once behind a lazy static and only read afterwards.
use crate::descriptor::{RecordInfo, Reflective, TypeDescriptor, TypeSignature, reachable_records};
use std::collections::BTreeMap;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("Type '{0}' not found")]
    NotFound(String),

    #[error("Type name '{name}' is ambiguous, candidates: {}", .candidates.join(", "))]
    Ambiguous {
        name: String,
        candidates: Vec<&'static str>,
    },
}

/// Records of a schema, by qualified name.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    records: BTreeMap<&'static str, RecordInfo>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every record reachable from `T`. Registering a record twice is a no-op.
    pub fn register<T: Reflective>(&mut self) -> &mut Self {
        self.register_signature(&T::descriptor().signature())
    }

    /// Registers every record reachable from `signature`.
    pub fn register_signature(&mut self, signature: &TypeSignature) -> &mut Self {
        for record in reachable_records(signature) {
            if self.records.insert(record.qualified_name(), record).is_none() {
                tracing::debug!(
                    record = record.qualified_name(),
                    kind = record.kind(),
                    "Registered record"
                );
            }
        }

        self
    }

    /// Finds a record by its qualified name (e.g. `user.User`).
    pub fn get(&self, qualified_name: &str) -> Option<RecordInfo> {
        self.records.get(qualified_name).copied()
    }

    /// Finds a record by qualified name, or by simple name when exactly one record has it.
    ///
    /// # Returns
    ///
    /// * `Ok(RecordInfo)` - The record.
    /// * `Err(LookupError::NotFound)` - No record has this name.
    /// * `Err(LookupError::Ambiguous)` - The simple name is shared by several records.
    pub fn lookup(&self, name: &str) -> Result<RecordInfo, LookupError> {
        if let Some(record) = self.get(name) {
            return Ok(record);
        }

        let mut candidates = self.records.values().filter(|r| r.name() == name);

        match (candidates.next(), candidates.next()) {
            (Some(record), None) => Ok(*record),
            (None, _) => Err(LookupError::NotFound(name.to_string())),
            (Some(first), Some(second)) => {
                let candidates = [first, second]
                    .into_iter()
                    .chain(candidates)
                    .map(|r| r.qualified_name())
                    .collect();

                Err(LookupError::Ambiguous {
                    name: name.to_string(),
                    candidates,
                })
            }
        }
    }

    /// All records, ordered by qualified name.
    pub fn records(&self) -> impl Iterator<Item = RecordInfo> + '_ {
        self.records.values().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
