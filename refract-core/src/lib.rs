//! # Refract Core
//!
//! `refract-core` lets a caller write one algorithm (e.g. "uppercase every string") and
//! apply it to any schema-generated value: structs, enums, arrays, optionals and primitives,
//! recursively, without knowing the shape of the data at compile time.
//!
//! ## Key Components
//!
//! * **[`TypeDescriptor`]:** Every generated type exposes exactly one descriptor through
//!   [`Reflective`]. The descriptor knows which structural variant the type is and how to
//!   rebuild a value of that type from transformed parts.
//! * **[`TypeEquivalence`]:** A witness that an opaque type parameter `T` and a concrete type
//!   (`String`, `Vec<E>`, `Option<E>`, ...) are the same type, so visitor bodies can work on
//!   native values.
//! * **[`ReflectiveTypeVisitor`]:** The single-dispatch consumer a descriptor hands itself to.
//!   Exactly one callback fires per [`TypeDescriptor::accept`] call.
//! * **[`ReflectiveTransformer`]:** The reentrant capability recombination operations call to
//!   recurse into nested values.
//! * **[`transform_all`] & [`LeafTransform`]:** The engine entry point. Implement only the
//!   leaves you care about; everything else is returned unchanged.
//!
//! ## Introspection
//!
//! Descriptors also describe their type: [`TypeSignature`] is the erased view used by the
//! [`TypeRegistry`](registry::TypeRegistry) and by [`TypeSignature::to_json`].
//!
//! ## Example
//!
//! ```rust
//! use refract_core::map_strings;
//!
//! let names = vec![Some("tarzan".to_string()), None];
//! let upper = map_strings(names, |s| s.to_uppercase());
//!
//! assert_eq!(upper, vec![Some("TARZAN".to_string()), None]);
//! ```
//!
//! ## Re-exports
//!
//! The primitive representations (`bytes::Bytes` and `prost_types::Timestamp`) come from
//! re-exported crates so generated code uses compatible versions.
pub mod descriptor;
pub mod equivalence;
pub mod registry;
pub mod transform;
pub mod transformer;
pub mod visitor;

pub use descriptor::{
    ArrayDescriptor, BoxableDescriptor, EnumDescriptor, EnumInfo, FieldDescriptor,
    OptionalDescriptor, PrimitiveDescriptor, PrimitiveType, RecordInfo, Reflective,
    ReflectiveEnum, ReflectiveStruct, StructDescriptor, StructInfo, TypeDescriptor,
    TypeSignature, VariantDescriptor, reachable_records, signature_of,
};
pub use equivalence::TypeEquivalence;
pub use transform::{
    LeafTransform, MapStrings, Transformer, map_strings, transform_all, transform_with,
};
pub use transformer::ReflectiveTransformer;
pub use visitor::ReflectiveTypeVisitor;

// Re-exports
pub use bytes;
pub use prost_types;
