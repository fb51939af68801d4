//! # Type Equivalence
//!
//! A [`TypeEquivalence<T, U>`] proves that an opaque type parameter `T` and a concrete type
//! `U` have the same runtime representation, and converts between them.
//!
//! Descriptors build one right before invoking a visitor callback. A visitor that is generic
//! over `T` cannot call `to_uppercase` on a `T`, but inside `visit_string` it receives a
//! `TypeEquivalence<T, String>`: it can pull the `String` out, work on it with ordinary
//! methods, and hand the result back as a `T`.
//!
//! Witnesses are two plain `fn` pointers. Built-in descriptors only ever hand out
//! [`TypeEquivalence::identity`], so the conversions compile down to moves.
use std::any::type_name;
use std::fmt;

/// A loss-free, inverse pair of conversions between `T` and `U`.
///
/// For every `x: U` and `y: T`, `to_t(from_t(y)) == y` and `from_t(to_t(x)) == x`.
pub struct TypeEquivalence<T, U> {
    to_t: fn(U) -> T,
    from_t: fn(T) -> U,
}

impl<T> TypeEquivalence<T, T> {
    /// The witness for `T == T`.
    pub const fn identity() -> Self {
        Self {
            to_t: std::convert::identity,
            from_t: std::convert::identity,
        }
    }
}

impl<T, U> TypeEquivalence<T, U> {
    /// Builds a witness from an explicit conversion pair.
    ///
    /// Intended for generated code whose representation of a schema type is a wrapper
    /// around the concrete type (e.g. a newtype over `String`).
    ///
    /// # Contract
    ///
    /// `to_t` and `from_t` must be total and inverse of each other. A lossy pair breaks the
    /// identity law of every transform that goes through it.
    pub const fn new(to_t: fn(U) -> T, from_t: fn(T) -> U) -> Self {
        Self { to_t, from_t }
    }

    /// Re-wraps a concrete value as `T`.
    pub fn to_t(&self, value: U) -> T {
        (self.to_t)(value)
    }

    /// Extracts the concrete representation of a `T`.
    pub fn from_t(&self, value: T) -> U {
        (self.from_t)(value)
    }

    /// Applies `f` to the concrete representation of `value`.
    pub fn map(&self, value: T, f: impl FnOnce(U) -> U) -> T {
        self.to_t(f(self.from_t(value)))
    }

    /// Fallible version of [`TypeEquivalence::map`]. On error nothing is re-wrapped.
    pub fn try_map<E>(&self, value: T, f: impl FnOnce(U) -> Result<U, E>) -> Result<T, E> {
        f(self.from_t(value)).map(|concrete| self.to_t(concrete))
    }
}

impl<T, U> Clone for TypeEquivalence<T, U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, U> Copy for TypeEquivalence<T, U> {}

impl<T, U> fmt::Debug for TypeEquivalence<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeEquivalence")
            .field("t", &type_name::<T>())
            .field("u", &type_name::<U>())
            .finish()
    }
}
