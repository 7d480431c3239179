//! Tracked assignment and the nested passthrough.
//!
//! `Assign<G, I>` is implemented for a builder when `G` is one of its pending
//! fields, with `I` recording where in the list `G` sits:
//!
//! - `Here`: `G` is the front field. The write goes straight into the owned
//!   value and the layer is dropped, leaving the nested builder.
//! - `There<I>`: `G` is further down. The call is forwarded into the nested
//!   builder, which removes `G` at position `I`, and the result is wrapped
//!   again with the front field still pending.
//!
//! The position is found by inference. With no duplicates in the list at
//! most one `I` fits. A field that is not pending is only ever matched by
//! the `There` impl, which bottoms out at `Done` where there is no impl at
//! all:
//!
//! ```compile_fail,E0277
//! use proof_builder::{required, selectors};
//!
//! #[derive(Default)]
//! pub struct Point { pub x: i32, pub y: i32, pub label: String }
//!
//! selectors! {
//!     pub mod point for Point { x: i32, y: i32, label: String }
//! }
//!
//! fn main() {
//!     // `label` is not in the required list; tracked `set` rejects it.
//!     let _ = <required![Point; point::x, point::y]>::default()
//!         .set(point::label, String::new());
//! }
//! ```
//!
//! A selector for a different structure is rejected the same way:
//!
//! ```compile_fail,E0277
//! use proof_builder::{required, selectors};
//!
//! #[derive(Default)]
//! pub struct Point { pub x: i32, pub y: i32 }
//!
//! #[derive(Default)]
//! pub struct Size { pub x: i32 }
//!
//! selectors! {
//!     pub mod point for Point { x: i32, y: i32 }
//! }
//!
//! selectors! {
//!     pub mod size for Size { x: i32 }
//! }
//!
//! fn main() {
//!     let _ = <required![Point; point::x, point::y]>::default()
//!         .set(size::x, 1);
//! }
//! ```

use crate::builder::{Layer, Pending};
use crate::field::Field;

/// Position witness: the field is at the front of the pending list.
pub enum Here {}

/// Position witness: the field is somewhere behind the front, at `I` within
/// the nested list.
pub struct There<I>(std::marker::PhantomData<I>);

/// Set the pending field `G`, removing it from the tracked list.
#[diagnostic::on_unimplemented(
    message = "`{G}` is not a pending required field of `{Self}`",
    label = "field is either already set or not part of the required-field list",
    note = "fields outside the required list can be written with `set_untracked`"
)]
pub trait Assign<G: Field, I>: Layer {
    /// The builder left after `G` has been set.
    type Output: Layer<Target = Self::Target>;

    fn apply(self, value: G::Value) -> Self::Output;
}

impl<T, F, R> Assign<F, Here> for Pending<T, F, R>
where
    F: Field<Owner = T>,
    R: Layer<Target = T>,
{
    type Output = R;

    fn apply(self, value: F::Value) -> R {
        let mut inner = self.inner;
        F::write(inner.target_mut(), value);
        inner
    }
}

impl<T, F, G, R, I> Assign<G, There<I>> for Pending<T, F, R>
where
    F: Field<Owner = T>,
    G: Field,
    R: Layer<Target = T> + Assign<G, I>,
{
    type Output = Pending<T, F, R::Output>;

    fn apply(self, value: G::Value) -> Self::Output {
        Pending::wrap(<R as Assign<G, I>>::apply(self.inner, value))
    }
}
