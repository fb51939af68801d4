use super::{Reflective, TypeDescriptor, TypeSignature};
use crate::{
    equivalence::TypeEquivalence, transformer::ReflectiveTransformer,
    visitor::ReflectiveTypeVisitor,
};
use std::fmt;
use std::marker::PhantomData;

/// Descriptor of `Vec<E>`.
pub struct ArrayDescriptor<E> {
    _marker: PhantomData<fn() -> E>,
}

impl<E: Reflective> ArrayDescriptor<E> {
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    /// The descriptor of the element type.
    pub fn item_descriptor(&self) -> E::Descriptor {
        E::descriptor()
    }

    /// Passes every element through `transformer`, in order.
    ///
    /// The result has the length and order of `input`. Stops at the first error.
    pub fn map<F>(&self, input: Vec<E>, transformer: &F) -> Result<Vec<E>, F::Error>
    where
        F: ReflectiveTransformer,
    {
        input
            .into_iter()
            .map(|item| transformer.transform(item, E::descriptor()))
            .collect()
    }
}

impl<E: Reflective> Default for ArrayDescriptor<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for ArrayDescriptor<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ArrayDescriptor<E> {}

impl<E: Reflective> fmt::Debug for ArrayDescriptor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArrayDescriptor({})", self.signature())
    }
}

impl<E: Reflective> TypeDescriptor for ArrayDescriptor<E> {
    type Value = Vec<E>;

    fn signature(&self) -> TypeSignature {
        TypeSignature::Array(Box::new(E::descriptor().signature()))
    }

    fn accept<V>(self, visitor: V) -> V::Output
    where
        V: ReflectiveTypeVisitor<Self::Value>,
    {
        visitor.visit_array(self, TypeEquivalence::identity())
    }
}

impl<E: Reflective> Reflective for Vec<E> {
    type Descriptor = ArrayDescriptor<E>;

    fn descriptor() -> Self::Descriptor {
        ArrayDescriptor::new()
    }
}
