//! # Type Descriptors
//!
//! Every schema-generated type exposes exactly one [`TypeDescriptor`] through [`Reflective`].
//! A descriptor belongs to exactly one structural variant, fixed by its Rust type:
//!
//! | Variant     | Descriptor                  | Described type        |
//! |-------------|-----------------------------|-----------------------|
//! | `Struct`    | [`StructDescriptor<T>`]     | a generated struct    |
//! | `Enum`      | [`EnumDescriptor<T>`]       | a generated enum      |
//! | `Array`     | [`ArrayDescriptor<E>`]      | `Vec<E>`              |
//! | `Optional`  | [`OptionalDescriptor<E>`]   | `Option<E>`           |
//! | `Primitive` | [`PrimitiveDescriptor<T>`]  | `bool`, `String`, ... |
//!
//! Descriptors are `Copy` handles onto `'static` metadata, so asking a type for its
//! descriptor never allocates and the result can be shared freely between threads.
//!
//! Besides dispatching visitors, a descriptor describes its type as a [`TypeSignature`].
//! Signatures reference structs and enums by name instead of expanding them, which keeps
//! recursive schemas finite.
mod array;
mod enums;
mod json;
mod optional;
mod primitive;
mod structs;

pub use array::ArrayDescriptor;
pub use enums::{EnumDescriptor, EnumInfo, ReflectiveEnum, VariantDescriptor};
pub use optional::OptionalDescriptor;
pub use primitive::{PrimitiveDescriptor, PrimitiveType};
pub use structs::{FieldDescriptor, ReflectiveStruct, StructDescriptor, StructInfo};

use crate::visitor::ReflectiveTypeVisitor;
use std::collections::HashSet;
use std::fmt;

/// Describes one schema type and dispatches visitors according to its variant.
pub trait TypeDescriptor: Copy + Send + Sync + 'static {
    /// The Rust type this descriptor describes.
    type Value: 'static;

    /// The erased description of [`TypeDescriptor::Value`].
    fn signature(&self) -> TypeSignature;

    /// Invokes exactly one callback of `visitor`, chosen by the variant of this descriptor
    /// and never by inspecting a runtime value.
    fn accept<V>(self, visitor: V) -> V::Output
    where
        V: ReflectiveTypeVisitor<Self::Value>;
}

/// A type with a descriptor that can be discovered statically.
///
/// Generated structs and enums implement this next to [`ReflectiveStruct`] or
/// [`ReflectiveEnum`]. The engine provides it for primitives, `Vec<E>`, `Option<E>`, and
/// boxed records.
pub trait Reflective: Sized + 'static {
    type Descriptor: TypeDescriptor<Value = Self>;

    fn descriptor() -> Self::Descriptor;
}

/// Shorthand for `T::descriptor().signature()`.
pub fn signature_of<T: Reflective>() -> TypeSignature {
    T::descriptor().signature()
}

/// Descriptors of records that can also describe the same record behind a `Box`.
///
/// Recursive schemas are spelled `Option<Box<Self>>` in Rust; a boxed record keeps the
/// variant and metadata of the record it points to.
pub trait BoxableDescriptor: TypeDescriptor {
    type Boxed: TypeDescriptor<Value = Box<Self::Value>>;

    fn boxed(self) -> Self::Boxed;
}

impl<T> Reflective for Box<T>
where
    T: Reflective,
    T::Descriptor: BoxableDescriptor,
{
    type Descriptor = <T::Descriptor as BoxableDescriptor>::Boxed;

    fn descriptor() -> Self::Descriptor {
        T::descriptor().boxed()
    }
}

/// The erased shape of a schema type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeSignature {
    Primitive(PrimitiveType),
    Optional(Box<TypeSignature>),
    Array(Box<TypeSignature>),
    Struct(StructInfo),
    Enum(EnumInfo),
}

impl TypeSignature {
    /// Returns the struct or enum this signature names, if it names one directly.
    pub fn record(&self) -> Option<RecordInfo> {
        match self {
            TypeSignature::Struct(info) => Some(RecordInfo::Struct(*info)),
            TypeSignature::Enum(info) => Some(RecordInfo::Enum(*info)),
            _ => None,
        }
    }

    /// Whether a value of this type may be absent.
    pub fn is_optional(&self) -> bool {
        matches!(self, TypeSignature::Optional(_))
    }
}

impl fmt::Display for TypeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSignature::Primitive(primitive) => write!(f, "{primitive}"),
            TypeSignature::Optional(other) => write!(f, "{other}?"),
            TypeSignature::Array(item) => write!(f, "[{item}]"),
            TypeSignature::Struct(info) => f.write_str(info.qualified_name()),
            TypeSignature::Enum(info) => f.write_str(info.qualified_name()),
        }
    }
}

/// A struct or enum definition, without its Rust type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordInfo {
    Struct(StructInfo),
    Enum(EnumInfo),
}

impl RecordInfo {
    /// Returns the name (e.g. `User`) of the record.
    pub fn name(&self) -> &'static str {
        match self {
            RecordInfo::Struct(info) => info.name(),
            RecordInfo::Enum(info) => info.name(),
        }
    }

    /// Returns the qualified name (e.g. `user.User`) of the record.
    pub fn qualified_name(&self) -> &'static str {
        match self {
            RecordInfo::Struct(info) => info.qualified_name(),
            RecordInfo::Enum(info) => info.qualified_name(),
        }
    }

    /// `"struct"` or `"enum"`.
    pub fn kind(&self) -> &'static str {
        match self {
            RecordInfo::Struct(_) => "struct",
            RecordInfo::Enum(_) => "enum",
        }
    }

    /// The signature naming this record.
    pub fn signature(&self) -> TypeSignature {
        match *self {
            RecordInfo::Struct(info) => TypeSignature::Struct(info),
            RecordInfo::Enum(info) => TypeSignature::Enum(info),
        }
    }

    /// Signatures this record refers to directly: field types for a struct, payload types
    /// for an enum.
    pub fn dependencies(&self) -> Vec<TypeSignature> {
        match self {
            RecordInfo::Struct(info) => info.fields().iter().map(|f| f.signature()).collect(),
            RecordInfo::Enum(info) => info
                .variants()
                .iter()
                .filter_map(|v| v.payload())
                .collect(),
        }
    }
}

/// Collects every record reachable from `signature`, in discovery order, each once.
///
/// Records are resolved by name, so the walk terminates on recursive schemas.
pub fn reachable_records(signature: &TypeSignature) -> Vec<RecordInfo> {
    let mut seen = HashSet::new();
    let mut records = Vec::new();
    let mut pending = vec![signature.clone()];

    while let Some(next) = pending.pop() {
        let record = match next {
            TypeSignature::Primitive(_) => continue,
            TypeSignature::Optional(other) | TypeSignature::Array(other) => {
                pending.push(*other);
                continue;
            }
            TypeSignature::Struct(info) => RecordInfo::Struct(info),
            TypeSignature::Enum(info) => RecordInfo::Enum(info),
        };

        if seen.insert(record.qualified_name()) {
            records.push(record);
            // Pushed in reverse so dependencies pop in declaration order.
            pending.extend(record.dependencies().into_iter().rev());
        }
    }

    records
}
