//! Base and progressive builders.
//!
//! A build is a chain of layers, one [`Pending`] per required field still
//! missing, ending in a [`Done`] that owns the value being built. The type
//! of the outermost layer is the list of fields that still have to be set:
//!
//! ```text
//! required![Point; point::x, point::y]
//!     == Pending<Point, point::x, Pending<Point, point::y, Done<Point>>>
//! ```
//!
//! Every tracked `set` consumes the builder and returns one with that field
//! removed from the list. Only `Done` can be finalized, so a build with a
//! missing field does not compile.
//!
//! ```
//! use proof_builder::{required, selectors};
//!
//! #[derive(Debug, Default, PartialEq)]
//! pub struct Point {
//!     pub x: i32,
//!     pub y: i32,
//!     pub label: String,
//! }
//!
//! selectors! {
//!     pub mod point for Point {
//!         x: i32,
//!         y: i32,
//!         label: String,
//!     }
//! }
//!
//! type PointBuilder = required![Point; point::x, point::y];
//!
//! fn main() {
//!     let p = PointBuilder::default()
//!         .set(point::y, 4)
//!         .set(point::x, 3)
//!         .build();
//!
//!     assert_eq!(p, Point { x: 3, y: 4, label: String::new() });
//! }
//! ```
//!
//! Finalizing early is rejected at the call site:
//!
//! ```compile_fail,E0277
//! use proof_builder::{required, selectors};
//!
//! #[derive(Default)]
//! pub struct Point { pub x: i32, pub y: i32 }
//!
//! selectors! {
//!     pub mod point for Point { x: i32, y: i32 }
//! }
//!
//! fn main() {
//!     let _ = <required![Point; point::x, point::y]>::default()
//!         .set(point::x, 3)
//!         .build();
//! }
//! ```
//!
//! So is setting a tracked field twice:
//!
//! ```compile_fail,E0277
//! use proof_builder::{required, selectors};
//!
//! #[derive(Default)]
//! pub struct Point { pub x: i32, pub y: i32 }
//!
//! selectors! {
//!     pub mod point for Point { x: i32, y: i32 }
//! }
//!
//! fn main() {
//!     let _ = <required![Point; point::x, point::y]>::default()
//!         .set(point::x, 3)
//!         .set(point::x, 5);
//! }
//! ```

use crate::field::{Field, FieldId};
use crate::passthrough::Assign;
use std::fmt;
use std::marker::PhantomData;

#[cfg(feature = "checked")]
use crate::checked::CheckedBuilder;

mod sealed {
    /// Access to the owned value. Only builders of this crate implement it,
    /// so an incomplete value can never be taken out from outside.
    pub trait Layer: super::Builder {
        fn target(&self) -> &Self::Target;

        fn target_mut(&mut self) -> &mut Self::Target;

        fn into_target(self) -> Self::Target;
    }
}

pub(crate) use sealed::Layer;

/// Common surface of [`Done`] and every [`Pending`] layer.
pub trait Builder: Sized {
    /// The structure being built.
    type Target;

    /// Number of required fields still missing.
    const PENDING: usize;

    /// Bit set of the `Field::INDEX` of every pending field.
    #[doc(hidden)]
    const MASK: u128;

    /// Whether the pending list names some field twice.
    #[doc(hidden)]
    const DUPLICATE: bool;

    /// Start a build from an initial value.
    fn new(value: Self::Target) -> Self;

    /// The pending required fields, front first.
    fn pending_fields() -> Vec<FieldId>;
}

/// Finalize gate: implemented only by builders with no pending fields.
#[diagnostic::on_unimplemented(
    message = "cannot finalize an incomplete build: `{Self}` still has required fields pending",
    label = "required fields are still missing",
    note = "call `set` for every remaining required field before `build` or `get`"
)]
pub trait Complete: Layer {}

impl<T> Complete for Done<T> {}

const fn field_bit(index: usize) -> u128 {
    assert!(index < 128, "field index out of range for required-field tracking");
    1u128 << index
}

/// Builder with no required fields left: the value can be taken out.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Done<T> {
    value: T,
}

impl<T> Done<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Set any field of `T`. Nothing is tracked at this point, so this also
    /// overwrites required fields that were already set.
    pub fn set<G>(mut self, _field: G, value: G::Value) -> Self
    where
        G: Field<Owner = T>,
    {
        G::write(&mut self.value, value);
        self
    }

    /// In-place form of [`set`](Self::set).
    pub fn assign<G>(&mut self, _field: G, value: G::Value) -> &mut Self
    where
        G: Field<Owner = T>,
    {
        G::write(&mut self.value, value);
        self
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Take the finished value.
    pub fn build(self) -> T {
        self.value
    }

    /// Continue as a runtime-checked build with nothing pending.
    #[cfg(feature = "checked")]
    pub fn into_checked(self) -> CheckedBuilder<T> {
        CheckedBuilder::new(self.value)
    }
}

impl<T> Builder for Done<T> {
    type Target = T;

    const PENDING: usize = 0;
    const MASK: u128 = 0;
    const DUPLICATE: bool = false;

    fn new(value: T) -> Self {
        Self { value }
    }

    fn pending_fields() -> Vec<FieldId> {
        Vec::new()
    }
}

impl<T> Layer for Done<T> {
    fn target(&self) -> &T {
        &self.value
    }

    fn target_mut(&mut self) -> &mut T {
        &mut self.value
    }

    fn into_target(self) -> T {
        self.value
    }
}

impl<T> From<T> for Done<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Done<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Done").field("value", &self.value).finish()
    }
}

/// Builder layer tracking the required field `F`, with the layer for the
/// remaining fields nested inside.
///
/// Has no way to take the value out. `set` on `F` returns the nested layer;
/// `set` on any other pending field is forwarded to the nested layer and the
/// result is wrapped again so `F` stays pending.
pub struct Pending<T, F, R> {
    pub(crate) inner: R,
    pub(crate) _front: PhantomData<fn() -> (T, F)>,
}

impl<T, F, R> Pending<T, F, R>
where
    F: Field<Owner = T>,
    R: Layer<Target = T>,
{
    pub fn new(value: T) -> Self {
        <Self as Builder>::new(value)
    }

    pub(crate) fn wrap(inner: R) -> Self {
        Self {
            inner,
            _front: PhantomData,
        }
    }

    /// Set a pending required field.
    ///
    /// The result type drops `field` from the pending list. The position
    /// witness `I` is inferred and never written by callers.
    #[must_use = "the returned builder carries the build forward"]
    pub fn set<G, I>(self, _field: G, value: G::Value) -> <Self as Assign<G, I>>::Output
    where
        G: Field,
        Self: Assign<G, I>,
    {
        <Self as Assign<G, I>>::apply(self, value)
    }

    /// Set any field of `T` without touching the pending list.
    ///
    /// Meant for fields outside the required list. Writing a pending required
    /// field this way does not satisfy it; it still has to be `set`.
    #[must_use = "the returned builder carries the build forward"]
    pub fn set_untracked<G>(mut self, _field: G, value: G::Value) -> Self
    where
        G: Field<Owner = T>,
    {
        G::write(self.target_mut(), value);
        self
    }

    /// Names of the required fields still missing, front first.
    pub fn remaining(&self) -> Vec<&'static str> {
        Self::pending_fields().iter().map(FieldId::name).collect()
    }

    /// Never callable: a pending layer is not [`Complete`].
    pub fn build(self) -> T
    where
        Self: Complete + Layer<Target = T>,
    {
        self.into_target()
    }

    /// Never callable: a pending layer is not [`Complete`].
    pub fn get(&self) -> &T
    where
        Self: Complete + Layer<Target = T>,
    {
        self.target()
    }

    /// Continue as a runtime-checked build with the same pending fields.
    #[cfg(feature = "checked")]
    pub fn into_checked(self) -> CheckedBuilder<T> {
        CheckedBuilder::with_pending(self.into_target(), Self::pending_fields())
    }
}

impl<T, F, R> Builder for Pending<T, F, R>
where
    F: Field<Owner = T>,
    R: Layer<Target = T>,
{
    type Target = T;

    const PENDING: usize = R::PENDING + 1;
    const MASK: u128 = R::MASK | field_bit(F::INDEX);
    const DUPLICATE: bool = R::DUPLICATE || (R::MASK & field_bit(F::INDEX)) != 0;

    fn new(value: T) -> Self {
        const {
            assert!(
                !<Self as Builder>::DUPLICATE,
                "duplicate field in required-field list"
            );
        }
        Self::wrap(R::new(value))
    }

    fn pending_fields() -> Vec<FieldId> {
        let mut fields = Vec::with_capacity(Self::PENDING);
        fields.push(FieldId::of::<F>());
        fields.extend(R::pending_fields());
        fields
    }
}

impl<T, F, R> Layer for Pending<T, F, R>
where
    F: Field<Owner = T>,
    R: Layer<Target = T>,
{
    fn target(&self) -> &T {
        self.inner.target()
    }

    fn target_mut(&mut self) -> &mut T {
        self.inner.target_mut()
    }

    fn into_target(self) -> T {
        self.inner.into_target()
    }
}

impl<T, F, R> Default for Pending<T, F, R>
where
    T: Default,
    F: Field<Owner = T>,
    R: Layer<Target = T>,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T, F, R> Clone for Pending<T, F, R>
where
    R: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _front: PhantomData,
        }
    }
}

impl<T, F, R> fmt::Debug for Pending<T, F, R>
where
    T: fmt::Debug,
    F: Field<Owner = T>,
    R: Layer<Target = T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pending")
            .field("value", self.target())
            .field("remaining", &Self::pending_fields())
            .finish()
    }
}

/// Spell the builder type for a structure and its required fields.
///
/// `required![T; a, b, c]` expands to
/// `Pending<T, a, Pending<T, b, Pending<T, c, Done<T>>>>`, and
/// `required![T]` to `Done<T>`.
///
/// A list naming the same field twice fails to build:
///
/// ```compile_fail,E0080
/// use proof_builder::{required, selectors};
///
/// #[derive(Default)]
/// pub struct Point { pub x: i32, pub y: i32 }
///
/// selectors! {
///     pub mod point for Point { x: i32, y: i32 }
/// }
///
/// fn main() {
///     let _ = <required![Point; point::x, point::x]>::default();
/// }
/// ```
#[macro_export]
macro_rules! required {
    ($owner:ty $(;)?) => {
        $crate::Done<$owner>
    };
    ($owner:ty; $field:ty $(, $rest:ty)* $(,)?) => {
        $crate::Pending<$owner, $field, $crate::required!($owner; $($rest),*)>
    };
}
