//! Struct descriptors and field recombination.
use super::{BoxableDescriptor, TypeDescriptor, TypeSignature};
use crate::{transformer::ReflectiveTransformer, visitor::ReflectiveTypeVisitor};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;

/// Implemented by generated structs.
pub trait ReflectiveStruct: Sized + 'static {
    /// Rebuilds the struct from its fields, each passed through `transformer` with the
    /// descriptor of its declared type, in schema order.
    ///
    /// The returned struct has the same fields in the same order; no field may read another
    /// field's value. The first error returned by `transformer` is returned as is.
    fn map_fields<F>(self, transformer: &F) -> Result<Self, F::Error>
    where
        F: ReflectiveTransformer;
}

impl<T: ReflectiveStruct> ReflectiveStruct for Box<T> {
    fn map_fields<F>(self, transformer: &F) -> Result<Self, F::Error>
    where
        F: ReflectiveTransformer,
    {
        (*self).map_fields(transformer).map(Box::new)
    }
}

/// One declared field of a struct.
#[derive(Clone, Copy)]
pub struct FieldDescriptor {
    name: &'static str,
    number: u32,
    signature: fn() -> TypeSignature,
}

impl FieldDescriptor {
    /// # Arguments
    ///
    /// * `name` - The field name as written in the schema (e.g. `user_id`).
    /// * `number` - The stable field number.
    /// * `signature` - Usually `signature_of::<FieldType>`; resolved lazily so that recursive
    ///   structs can be described.
    pub const fn new(name: &'static str, number: u32, signature: fn() -> TypeSignature) -> Self {
        Self {
            name,
            number,
            signature,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn signature(&self) -> TypeSignature {
        (self.signature)()
    }

    /// Whether the field may be absent from a struct value.
    pub fn is_optional(&self) -> bool {
        self.signature().is_optional()
    }
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("number", &self.number)
            .field("type", &self.signature().to_string())
            .finish()
    }
}

/// The definition of a struct: its names and its fields in schema order.
///
/// Two `StructInfo`s are equal when they have the same qualified name.
#[derive(Clone, Copy)]
pub struct StructInfo {
    name: &'static str,
    qualified_name: &'static str,
    fields: &'static [FieldDescriptor],
}

impl StructInfo {
    pub const fn new(
        name: &'static str,
        qualified_name: &'static str,
        fields: &'static [FieldDescriptor],
    ) -> Self {
        Self {
            name,
            qualified_name,
            fields,
        }
    }

    /// Returns the name (e.g.`User`) of the struct.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the qualified name (e.g.`user.User`) of the struct.
    pub fn qualified_name(&self) -> &'static str {
        self.qualified_name
    }

    /// Declared fields, in schema order.
    pub fn fields(&self) -> &'static [FieldDescriptor] {
        self.fields
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_by_number(&self, number: u32) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.number == number)
    }
}

impl PartialEq for StructInfo {
    fn eq(&self, other: &Self) -> bool {
        self.qualified_name == other.qualified_name
    }
}

impl Eq for StructInfo {}

impl Hash for StructInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.qualified_name.hash(state);
    }
}

impl fmt::Debug for StructInfo {
    // Field types are left out: a recursive struct would print forever.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructInfo")
            .field("qualified_name", &self.qualified_name)
            .field(
                "fields",
                &self.fields.iter().map(|f| f.name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Descriptor of the generated struct `T`.
pub struct StructDescriptor<T> {
    info: StructInfo,
    _marker: PhantomData<fn() -> T>,
}

impl<T> StructDescriptor<T> {
    /// Generated code keeps the field list in a `const` so the descriptor points at
    /// `'static` data:
    ///
    /// ```rust
    /// # use refract_core::{FieldDescriptor, Reflective, ReflectiveStruct, StructDescriptor};
    /// # use refract_core::{ReflectiveTransformer, signature_of};
    /// struct Pet {
    ///     name: String,
    /// }
    ///
    /// impl Reflective for Pet {
    ///     type Descriptor = StructDescriptor<Self>;
    ///
    ///     fn descriptor() -> Self::Descriptor {
    ///         const FIELDS: &[FieldDescriptor] =
    ///             &[FieldDescriptor::new("name", 0, signature_of::<String>)];
    ///         StructDescriptor::new("Pet", "user.Pet", FIELDS)
    ///     }
    /// }
    ///
    /// impl ReflectiveStruct for Pet {
    ///     fn map_fields<F>(self, transformer: &F) -> Result<Self, F::Error>
    ///     where
    ///         F: ReflectiveTransformer,
    ///     {
    ///         Ok(Self {
    ///             name: transformer.transform_value(self.name)?,
    ///         })
    ///     }
    /// }
    ///
    /// assert_eq!(Pet::descriptor().fields().len(), 1);
    /// ```
    pub const fn new(
        name: &'static str,
        qualified_name: &'static str,
        fields: &'static [FieldDescriptor],
    ) -> Self {
        Self {
            info: StructInfo::new(name, qualified_name, fields),
            _marker: PhantomData,
        }
    }

    pub fn info(&self) -> StructInfo {
        self.info
    }
}

impl<T: ReflectiveStruct> StructDescriptor<T> {
    /// Returns a new struct whose fields went through `transformer`.
    pub fn map_fields<F>(&self, input: T, transformer: &F) -> Result<T, F::Error>
    where
        F: ReflectiveTransformer,
    {
        input.map_fields(transformer)
    }
}

impl<T> Deref for StructDescriptor<T> {
    type Target = StructInfo;

    fn deref(&self) -> &StructInfo {
        &self.info
    }
}

impl<T> Clone for StructDescriptor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StructDescriptor<T> {}

impl<T> fmt::Debug for StructDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StructDescriptor").field(&self.info).finish()
    }
}

impl<T: ReflectiveStruct> TypeDescriptor for StructDescriptor<T> {
    type Value = T;

    fn signature(&self) -> TypeSignature {
        TypeSignature::Struct(self.info)
    }

    fn accept<V>(self, visitor: V) -> V::Output
    where
        V: ReflectiveTypeVisitor<Self::Value>,
    {
        visitor.visit_struct(self)
    }
}

impl<T: ReflectiveStruct> BoxableDescriptor for StructDescriptor<T> {
    type Boxed = StructDescriptor<Box<T>>;

    fn boxed(self) -> StructDescriptor<Box<T>> {
        StructDescriptor {
            info: self.info,
            _marker: PhantomData,
        }
    }
}
