//! proof-builder: builders that prove, at compile time, that every required
//! field of a structure was set before the value can be taken out.
//!
//! A build starts from a value of the target structure and the list of its
//! required fields. The builder's type is the list of fields still missing:
//! each `set` consumes the builder and returns one whose type no longer
//! lists that field. Only the builder with an empty list ([`Done`]) has
//! `build`, so an incomplete build is a type error rather than a runtime
//! failure. Fields can be set in any order.
//!
//! Three pieces make this work:
//!
//! 1. **Field selectors** ([`field`]): zero-sized types naming one field of
//!    one structure, declared with [`selectors!`].
//! 2. **Builders** ([`builder`]): [`Done`] holds the value once nothing is
//!    pending; [`Pending`] tracks one required field and nests the builder
//!    for the rest. [`required!`] spells the full type.
//! 3. **Nested passthrough** ([`passthrough`]): setting a field that is not
//!    at the front is forwarded into the nested builder and the front field
//!    is put back on top of the result.
//!
//! A runtime-checked counterpart, [`CheckedBuilder`], keeps the pending list
//! as data for cases where it is only known while running.
//!
//! # Quick Start
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
//!         .set(point::x, 3)
//!         .set(point::y, 4)
//!         .build();
//!     assert_eq!(p, Point { x: 3, y: 4, label: String::new() });
//!
//!     // Optional fields can still be set once the build is complete.
//!     let labelled = PointBuilder::default()
//!         .set(point::y, 4)
//!         .set(point::x, 3)
//!         .set(point::label, "origin-ish".to_string())
//!         .build();
//!     assert_eq!(labelled.label, "origin-ish");
//! }
//! ```

pub mod builder;
#[cfg(feature = "checked")]
pub mod checked;
pub mod error;
pub mod field;
pub mod passthrough;

// Re-export core types for convenience
pub use builder::{Builder, Complete, Done, Pending};
#[cfg(feature = "checked")]
pub use checked::CheckedBuilder;
pub use error::{BuildError, BuildResult};
pub use field::{same_field, Field, FieldId, OwnerOf, TypeOf};
pub use passthrough::{Assign, Here, There};
