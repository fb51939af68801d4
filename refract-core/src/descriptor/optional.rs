use super::{Reflective, TypeDescriptor, TypeSignature};
use crate::{
    equivalence::TypeEquivalence, transformer::ReflectiveTransformer,
    visitor::ReflectiveTypeVisitor,
};
use std::fmt;
use std::marker::PhantomData;

/// Descriptor of `Option<E>`.
pub struct OptionalDescriptor<E> {
    _marker: PhantomData<fn() -> E>,
}

impl<E: Reflective> OptionalDescriptor<E> {
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    /// The descriptor of the wrapped type.
    pub fn other_descriptor(&self) -> E::Descriptor {
        E::descriptor()
    }

    /// Absent stays absent; a present value is passed through `transformer` and wrapped
    /// again. `transformer` never sees an absent value.
    pub fn map<F>(&self, input: Option<E>, transformer: &F) -> Result<Option<E>, F::Error>
    where
        F: ReflectiveTransformer,
    {
        input
            .map(|value| transformer.transform(value, E::descriptor()))
            .transpose()
    }
}

impl<E: Reflective> Default for OptionalDescriptor<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for OptionalDescriptor<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for OptionalDescriptor<E> {}

impl<E: Reflective> fmt::Debug for OptionalDescriptor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OptionalDescriptor({})", self.signature())
    }
}

impl<E: Reflective> TypeDescriptor for OptionalDescriptor<E> {
    type Value = Option<E>;

    fn signature(&self) -> TypeSignature {
        TypeSignature::Optional(Box::new(E::descriptor().signature()))
    }

    fn accept<V>(self, visitor: V) -> V::Output
    where
        V: ReflectiveTypeVisitor<Self::Value>,
    {
        visitor.visit_optional(self, TypeEquivalence::identity())
    }
}

impl<E: Reflective> Reflective for Option<E> {
    type Descriptor = OptionalDescriptor<E>;

    fn descriptor() -> Self::Descriptor {
        OptionalDescriptor::new()
    }
}
