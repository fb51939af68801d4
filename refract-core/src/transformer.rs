//! The recursive capability used by recombination operations.
use crate::descriptor::{Reflective, TypeDescriptor};

/// "Given any value and its descriptor, produce a new value of the same type."
///
/// Recombination operations ([`map`](crate::ArrayDescriptor::map),
/// [`map_fields`](crate::StructDescriptor::map_fields),
/// [`map_value`](crate::EnumDescriptor::map_value)) call this for every nested value, so one
/// algorithm reaches every depth.
///
/// Implementations must be referentially transparent: equal inputs give equal outputs, and
/// no state is kept between calls. The engine calls them reentrantly.
pub trait ReflectiveTransformer {
    type Error;

    fn transform<D: TypeDescriptor>(
        &self,
        input: D::Value,
        descriptor: D,
    ) -> Result<D::Value, Self::Error>;

    /// Transforms `input` with the descriptor its type exposes.
    fn transform_value<T: Reflective>(&self, input: T) -> Result<T, Self::Error> {
        self.transform(input, T::descriptor())
    }
}
