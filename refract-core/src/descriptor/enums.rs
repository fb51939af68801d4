//! Enum descriptors and payload recombination.
use super::{BoxableDescriptor, TypeDescriptor, TypeSignature};
use crate::{transformer::ReflectiveTransformer, visitor::ReflectiveTypeVisitor};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;

/// Implemented by generated enums.
pub trait ReflectiveEnum: Sized + 'static {
    /// The number of the active variant.
    fn variant_number(&self) -> i32;

    /// Rebuilds the active variant with its payload passed through `transformer`.
    ///
    /// Only called for variants that declare a payload. The active variant of the returned
    /// value must be the active variant of `self`.
    fn map_value<F>(self, transformer: &F) -> Result<Self, F::Error>
    where
        F: ReflectiveTransformer;
}

impl<T: ReflectiveEnum> ReflectiveEnum for Box<T> {
    fn variant_number(&self) -> i32 {
        self.as_ref().variant_number()
    }

    fn map_value<F>(self, transformer: &F) -> Result<Self, F::Error>
    where
        F: ReflectiveTransformer,
    {
        (*self).map_value(transformer).map(Box::new)
    }
}

/// One declared variant of an enum.
#[derive(Clone, Copy)]
pub struct VariantDescriptor {
    name: &'static str,
    number: i32,
    payload: Option<fn() -> TypeSignature>,
}

impl VariantDescriptor {
    /// A variant without payload (e.g. `FREE`).
    pub const fn constant(name: &'static str, number: i32) -> Self {
        Self {
            name,
            number,
            payload: None,
        }
    }

    /// A variant holding one value (e.g. `trial: Trial`).
    pub const fn wrapper(
        name: &'static str,
        number: i32,
        payload: fn() -> TypeSignature,
    ) -> Self {
        Self {
            name,
            number,
            payload: Some(payload),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    /// The payload type, `None` for constant variants.
    pub fn payload(&self) -> Option<TypeSignature> {
        self.payload.map(|signature| signature())
    }

    pub fn has_payload(&self) -> bool {
        self.payload.is_some()
    }
}

impl fmt::Debug for VariantDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantDescriptor")
            .field("name", &self.name)
            .field("number", &self.number)
            .field("payload", &self.payload().map(|p| p.to_string()))
            .finish()
    }
}

/// The definition of an enum: its names and its variants in schema order.
///
/// Two `EnumInfo`s are equal when they have the same qualified name.
#[derive(Clone, Copy)]
pub struct EnumInfo {
    name: &'static str,
    qualified_name: &'static str,
    variants: &'static [VariantDescriptor],
}

impl EnumInfo {
    pub const fn new(
        name: &'static str,
        qualified_name: &'static str,
        variants: &'static [VariantDescriptor],
    ) -> Self {
        Self {
            name,
            qualified_name,
            variants,
        }
    }

    /// Returns the name (e.g.`SubscriptionStatus`) of the enum.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the qualified name (e.g.`user.SubscriptionStatus`) of the enum.
    pub fn qualified_name(&self) -> &'static str {
        self.qualified_name
    }

    pub fn variants(&self) -> &'static [VariantDescriptor] {
        self.variants
    }

    pub fn variant(&self, name: &str) -> Option<&'static VariantDescriptor> {
        self.variants.iter().find(|v| v.name == name)
    }

    pub fn variant_by_number(&self, number: i32) -> Option<&'static VariantDescriptor> {
        self.variants.iter().find(|v| v.number == number)
    }
}

impl PartialEq for EnumInfo {
    fn eq(&self, other: &Self) -> bool {
        self.qualified_name == other.qualified_name
    }
}

impl Eq for EnumInfo {}

impl Hash for EnumInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.qualified_name.hash(state);
    }
}

impl fmt::Debug for EnumInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumInfo")
            .field("qualified_name", &self.qualified_name)
            .field(
                "variants",
                &self.variants.iter().map(|v| v.name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Descriptor of the generated enum `T`.
pub struct EnumDescriptor<T> {
    info: EnumInfo,
    _marker: PhantomData<fn() -> T>,
}

impl<T> EnumDescriptor<T> {
    pub const fn new(
        name: &'static str,
        qualified_name: &'static str,
        variants: &'static [VariantDescriptor],
    ) -> Self {
        Self {
            info: EnumInfo::new(name, qualified_name, variants),
            _marker: PhantomData,
        }
    }

    pub fn info(&self) -> EnumInfo {
        self.info
    }
}

impl<T: ReflectiveEnum> EnumDescriptor<T> {
    /// The declared variant `value` currently holds, `None` if its number is not declared.
    pub fn active_variant(&self, value: &T) -> Option<&'static VariantDescriptor> {
        self.info.variant_by_number(value.variant_number())
    }

    /// Returns `input` with its payload passed through `transformer`.
    ///
    /// Values whose active variant carries no payload are returned as they are, without
    /// calling `transformer` or the generated code.
    pub fn map_value<F>(&self, input: T, transformer: &F) -> Result<T, F::Error>
    where
        F: ReflectiveTransformer,
    {
        match self.active_variant(&input) {
            Some(variant) if variant.has_payload() => input.map_value(transformer),
            _ => Ok(input),
        }
    }
}

impl<T> Deref for EnumDescriptor<T> {
    type Target = EnumInfo;

    fn deref(&self) -> &EnumInfo {
        &self.info
    }
}

impl<T> Clone for EnumDescriptor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EnumDescriptor<T> {}

impl<T> fmt::Debug for EnumDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EnumDescriptor").field(&self.info).finish()
    }
}

impl<T: ReflectiveEnum> TypeDescriptor for EnumDescriptor<T> {
    type Value = T;

    fn signature(&self) -> TypeSignature {
        TypeSignature::Enum(self.info)
    }

    fn accept<V>(self, visitor: V) -> V::Output
    where
        V: ReflectiveTypeVisitor<Self::Value>,
    {
        visitor.visit_enum(self)
    }
}

impl<T: ReflectiveEnum> BoxableDescriptor for EnumDescriptor<T> {
    type Boxed = EnumDescriptor<Box<T>>;

    fn boxed(self) -> EnumDescriptor<Box<T>> {
        EnumDescriptor {
            info: self.info,
            _marker: PhantomData,
        }
    }
}
