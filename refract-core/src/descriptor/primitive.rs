use super::{Reflective, TypeDescriptor, TypeSignature};
use crate::{equivalence::TypeEquivalence, visitor::ReflectiveTypeVisitor};
use bytes::Bytes;
use prost_types::Timestamp;
use std::fmt;
use std::marker::PhantomData;

/// The terminal kinds of the schema language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveType {
    Bool,
    Int32,
    Int64,
    /// An unsigned 64-bit hash.
    Hash64,
    Float32,
    Float64,
    Timestamp,
    String,
    Bytes,
}

impl PrimitiveType {
    /// The name of the kind in the schema language.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::Bool => "bool",
            PrimitiveType::Int32 => "int32",
            PrimitiveType::Int64 => "int64",
            PrimitiveType::Hash64 => "hash64",
            PrimitiveType::Float32 => "float32",
            PrimitiveType::Float64 => "float64",
            PrimitiveType::Timestamp => "timestamp",
            PrimitiveType::String => "string",
            PrimitiveType::Bytes => "bytes",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptor of a primitive Rust type.
///
/// Only instantiated for the representations listed in [`PrimitiveType`]:
/// `bool`, `i32`, `i64`, `u64`, `f32`, `f64`, [`Timestamp`], `String` and [`Bytes`].
pub struct PrimitiveDescriptor<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> PrimitiveDescriptor<T> {
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for PrimitiveDescriptor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for PrimitiveDescriptor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PrimitiveDescriptor<T> {}

impl<T: Reflective> fmt::Debug for PrimitiveDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrimitiveDescriptor({})", T::descriptor().signature())
    }
}

macro_rules! primitive_descriptors {
    ($($ty:ty => $kind:ident, $visit:ident;)*) => {
        $(
            impl PrimitiveDescriptor<$ty> {
                pub const fn primitive_type(&self) -> PrimitiveType {
                    PrimitiveType::$kind
                }
            }

            impl TypeDescriptor for PrimitiveDescriptor<$ty> {
                type Value = $ty;

                fn signature(&self) -> TypeSignature {
                    TypeSignature::Primitive(PrimitiveType::$kind)
                }

                fn accept<V>(self, visitor: V) -> V::Output
                where
                    V: ReflectiveTypeVisitor<Self::Value>,
                {
                    visitor.$visit(TypeEquivalence::identity())
                }
            }

            impl Reflective for $ty {
                type Descriptor = PrimitiveDescriptor<$ty>;

                fn descriptor() -> Self::Descriptor {
                    PrimitiveDescriptor::new()
                }
            }
        )*
    };
}

primitive_descriptors! {
    bool => Bool, visit_bool;
    i32 => Int32, visit_int32;
    i64 => Int64, visit_int64;
    u64 => Hash64, visit_hash64;
    f32 => Float32, visit_float32;
    f64 => Float64, visit_float64;
    Timestamp => Timestamp, visit_timestamp;
    String => String, visit_string;
    Bytes => Bytes, visit_bytes;
}
