//! # Visitor
//!
//! A [`ReflectiveTypeVisitor<T>`] is what a descriptor of `T` hands itself to. The descriptor
//! picks exactly one callback from its own variant and passes, where the callback works on a
//! concrete representation, the [`TypeEquivalence`] between `T` and that representation.
//!
//! Every callback defaults to [`ReflectiveTypeVisitor::visit_default`], so a visitor only
//! overrides the branches it cares about:
//!
//! ```rust
//! use refract_core::{Reflective, ReflectiveTypeVisitor, TypeDescriptor, TypeEquivalence};
//!
//! /// Counts the characters of a value, if it is a string.
//! struct CharCount<T>(T);
//!
//! impl<T> ReflectiveTypeVisitor<T> for CharCount<T> {
//!     type Output = Option<usize>;
//!
//!     fn visit_default(self) -> Option<usize> {
//!         None
//!     }
//!
//!     fn visit_string(self, equivalence: TypeEquivalence<T, String>) -> Option<usize> {
//!         Some(equivalence.from_t(self.0).chars().count())
//!     }
//! }
//!
//! assert_eq!(String::descriptor().accept(CharCount("Cheeta".to_string())), Some(6));
//! assert_eq!(i32::descriptor().accept(CharCount(7)), None);
//! ```
//!
//! Adding a variant to the schema model means adding a callback here, which every visitor
//! sees at compile time.
use crate::descriptor::{
    ArrayDescriptor, EnumDescriptor, OptionalDescriptor, Reflective, ReflectiveEnum,
    ReflectiveStruct, StructDescriptor,
};
use crate::equivalence::TypeEquivalence;
use bytes::Bytes;
use prost_types::Timestamp;

/// Per-variant callbacks for a descriptor of `T`.
pub trait ReflectiveTypeVisitor<T>: Sized {
    type Output;

    /// Fallback for every callback that is not overridden.
    fn visit_default(self) -> Self::Output;

    fn visit_optional<E: Reflective>(
        self,
        _descriptor: OptionalDescriptor<E>,
        _equivalence: TypeEquivalence<T, Option<E>>,
    ) -> Self::Output {
        self.visit_default()
    }

    fn visit_array<E: Reflective>(
        self,
        _descriptor: ArrayDescriptor<E>,
        _equivalence: TypeEquivalence<T, Vec<E>>,
    ) -> Self::Output {
        self.visit_default()
    }

    /// Structs need no witness: recombination goes through [`StructDescriptor::map_fields`].
    fn visit_struct(self, _descriptor: StructDescriptor<T>) -> Self::Output
    where
        T: ReflectiveStruct,
    {
        self.visit_default()
    }

    /// Enums need no witness: recombination goes through [`EnumDescriptor::map_value`].
    fn visit_enum(self, _descriptor: EnumDescriptor<T>) -> Self::Output
    where
        T: ReflectiveEnum,
    {
        self.visit_default()
    }

    fn visit_bool(self, _equivalence: TypeEquivalence<T, bool>) -> Self::Output {
        self.visit_default()
    }

    fn visit_int32(self, _equivalence: TypeEquivalence<T, i32>) -> Self::Output {
        self.visit_default()
    }

    fn visit_int64(self, _equivalence: TypeEquivalence<T, i64>) -> Self::Output {
        self.visit_default()
    }

    fn visit_hash64(self, _equivalence: TypeEquivalence<T, u64>) -> Self::Output {
        self.visit_default()
    }

    fn visit_float32(self, _equivalence: TypeEquivalence<T, f32>) -> Self::Output {
        self.visit_default()
    }

    fn visit_float64(self, _equivalence: TypeEquivalence<T, f64>) -> Self::Output {
        self.visit_default()
    }

    fn visit_timestamp(self, _equivalence: TypeEquivalence<T, Timestamp>) -> Self::Output {
        self.visit_default()
    }

    fn visit_string(self, _equivalence: TypeEquivalence<T, String>) -> Self::Output {
        self.visit_default()
    }

    fn visit_bytes(self, _equivalence: TypeEquivalence<T, Bytes>) -> Self::Output {
        self.visit_default()
    }
}
