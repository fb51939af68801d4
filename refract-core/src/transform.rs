//! # Transform Engine
//!
//! [`transform_all`] threads a [`LeafTransform`] through every primitive of a value. Composite
//! values (structs, enums, arrays, optionals) are taken apart by their descriptors, their
//! parts are transformed recursively and the value is rebuilt around the results.
//!
//! Leaf errors stop the walk: the first error is returned as it is and no partial value is
//! built.
//!
//! Recursion follows the depth of the value, not of the schema, so recursive schemas are
//! fine. Each level of nesting costs a few stack frames; values nested deeper than the
//! thread's stack allows are not supported.
use crate::descriptor::{
    ArrayDescriptor, EnumDescriptor, OptionalDescriptor, Reflective, ReflectiveEnum,
    ReflectiveStruct, StructDescriptor, TypeDescriptor, signature_of,
};
use crate::equivalence::TypeEquivalence;
use crate::transformer::ReflectiveTransformer;
use crate::visitor::ReflectiveTypeVisitor;
use bytes::Bytes;
use prost_types::Timestamp;
use std::convert::Infallible;

/// Caller logic for primitive values.
///
/// Every method returns its input unchanged by default; override the kinds you care about.
///
/// ```rust
/// use refract_core::{LeafTransform, transform_all};
///
/// struct Negate;
///
/// impl LeafTransform for Negate {
///     type Error = std::convert::Infallible;
///
///     fn bool(&self, value: bool) -> Result<bool, Self::Error> {
///         Ok(!value)
///     }
/// }
///
/// let flags = vec![true, false];
/// assert_eq!(transform_all(flags, &Negate), Ok(vec![false, true]));
/// ```
pub trait LeafTransform {
    type Error;

    fn bool(&self, value: bool) -> Result<bool, Self::Error> {
        Ok(value)
    }

    fn int32(&self, value: i32) -> Result<i32, Self::Error> {
        Ok(value)
    }

    fn int64(&self, value: i64) -> Result<i64, Self::Error> {
        Ok(value)
    }

    fn hash64(&self, value: u64) -> Result<u64, Self::Error> {
        Ok(value)
    }

    fn float32(&self, value: f32) -> Result<f32, Self::Error> {
        Ok(value)
    }

    fn float64(&self, value: f64) -> Result<f64, Self::Error> {
        Ok(value)
    }

    fn timestamp(&self, value: Timestamp) -> Result<Timestamp, Self::Error> {
        Ok(value)
    }

    fn string(&self, value: String) -> Result<String, Self::Error> {
        Ok(value)
    }

    fn bytes(&self, value: Bytes) -> Result<Bytes, Self::Error> {
        Ok(value)
    }
}

/// Applies `leaf` to every primitive inside `input`.
pub fn transform_all<T, L>(input: T, leaf: &L) -> Result<T, L::Error>
where
    T: Reflective,
    L: LeafTransform + ?Sized,
{
    let _span =
        tracing::trace_span!("transform_all", schema_type = %signature_of::<T>()).entered();

    transform_with(input, T::descriptor(), leaf)
}

/// Like [`transform_all`], with an explicit descriptor for `input`.
pub fn transform_with<D, L>(
    input: D::Value,
    descriptor: D,
    leaf: &L,
) -> Result<D::Value, L::Error>
where
    D: TypeDescriptor,
    L: LeafTransform + ?Sized,
{
    descriptor.accept(TransformVisitor { input, leaf })
}

/// The [`ReflectiveTransformer`] that re-enters the engine with the same leaf logic.
pub struct Transformer<'a, L: ?Sized> {
    leaf: &'a L,
}

impl<'a, L: ?Sized> Transformer<'a, L> {
    pub fn new(leaf: &'a L) -> Self {
        Self { leaf }
    }
}

impl<L: ?Sized> Clone for Transformer<'_, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: ?Sized> Copy for Transformer<'_, L> {}

impl<L> ReflectiveTransformer for Transformer<'_, L>
where
    L: LeafTransform + ?Sized,
{
    type Error = L::Error;

    fn transform<D: TypeDescriptor>(
        &self,
        input: D::Value,
        descriptor: D,
    ) -> Result<D::Value, Self::Error> {
        transform_with(input, descriptor, self.leaf)
    }
}

/// Holds the value being transformed until its descriptor picks a callback.
struct TransformVisitor<'a, T, L: ?Sized> {
    input: T,
    leaf: &'a L,
}

macro_rules! leaf_callbacks {
    ($($visit:ident => $leaf:ident: $ty:ty;)*) => {
        $(
            fn $visit(self, equivalence: TypeEquivalence<T, $ty>) -> Self::Output {
                let Self { input, leaf } = self;
                equivalence.try_map(input, |value| leaf.$leaf(value))
            }
        )*
    };
}

impl<T, L> ReflectiveTypeVisitor<T> for TransformVisitor<'_, T, L>
where
    L: LeafTransform + ?Sized,
{
    type Output = Result<T, L::Error>;

    fn visit_default(self) -> Self::Output {
        Ok(self.input)
    }

    fn visit_optional<E: Reflective>(
        self,
        descriptor: OptionalDescriptor<E>,
        equivalence: TypeEquivalence<T, Option<E>>,
    ) -> Self::Output {
        let Self { input, leaf } = self;
        equivalence.try_map(input, |value| descriptor.map(value, &Transformer::new(leaf)))
    }

    fn visit_array<E: Reflective>(
        self,
        descriptor: ArrayDescriptor<E>,
        equivalence: TypeEquivalence<T, Vec<E>>,
    ) -> Self::Output {
        let Self { input, leaf } = self;
        equivalence.try_map(input, |items| descriptor.map(items, &Transformer::new(leaf)))
    }

    fn visit_struct(self, descriptor: StructDescriptor<T>) -> Self::Output
    where
        T: ReflectiveStruct,
    {
        descriptor.map_fields(self.input, &Transformer::new(self.leaf))
    }

    fn visit_enum(self, descriptor: EnumDescriptor<T>) -> Self::Output
    where
        T: ReflectiveEnum,
    {
        descriptor.map_value(self.input, &Transformer::new(self.leaf))
    }

    leaf_callbacks! {
        visit_bool => bool: bool;
        visit_int32 => int32: i32;
        visit_int64 => int64: i64;
        visit_hash64 => hash64: u64;
        visit_float32 => float32: f32;
        visit_float64 => float64: f64;
        visit_timestamp => timestamp: Timestamp;
        visit_string => string: String;
        visit_bytes => bytes: Bytes;
    }
}

/// A [`LeafTransform`] that applies a function to every string.
#[derive(Debug, Clone, Copy)]
pub struct MapStrings<F>(pub F);

impl<F> LeafTransform for MapStrings<F>
where
    F: Fn(String) -> String,
{
    type Error = Infallible;

    fn string(&self, value: String) -> Result<String, Infallible> {
        Ok((self.0)(value))
    }
}

/// Applies `f` to every string inside `input`.
pub fn map_strings<T: Reflective>(input: T, f: impl Fn(String) -> String) -> T {
    match transform_all(input, &MapStrings(f)) {
        Ok(output) => output,
        Err(never) => match never {},
    }
}
