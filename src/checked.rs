//! Runtime-checked builder.
//!
//! Same contract as the typed builders, with the pending list kept as data:
//! fields are registered with [`require`](CheckedBuilder::require), `set`
//! removes them, and finalizing while any remain fails with
//! [`BuildError::Incomplete`]. Useful when the required fields are decided
//! at runtime, or to store builds of different progress under one type.
//!
//! A typed build can be handed over with `into_checked`, carrying its
//! pending fields along.
//!
//! ```
//! use proof_builder::{selectors, BuildError, CheckedBuilder};
//!
//! #[derive(Debug, Default, PartialEq)]
//! pub struct Point {
//!     pub x: i32,
//!     pub y: i32,
//! }
//!
//! selectors! {
//!     pub mod point for Point { x: i32, y: i32 }
//! }
//!
//! fn main() -> Result<(), BuildError> {
//!     let builder = CheckedBuilder::<Point>::default()
//!         .require(point::x)?
//!         .require(point::y)?
//!         .set(point::x, 3);
//!
//!     assert_eq!(builder.remaining_names(), vec!["y"]);
//!     assert!(builder.build().is_err());
//!     Ok(())
//! }
//! ```

use crate::error::{BuildError, BuildResult};
use crate::field::{Field, FieldId};
use std::any::type_name;
use tracing::{debug, trace};

/// Builder whose pending required fields are checked when it is finalized.
#[derive(Debug, Clone)]
pub struct CheckedBuilder<T> {
    value: T,
    pending: Vec<FieldId>,
}

impl<T> CheckedBuilder<T> {
    /// Start a build with no required fields registered.
    pub fn new(value: T) -> Self {
        Self {
            value,
            pending: Vec::new(),
        }
    }

    pub(crate) fn with_pending(value: T, pending: Vec<FieldId>) -> Self {
        Self { value, pending }
    }

    /// Register `field` as required.
    ///
    /// Registering a field twice is an error, whether or not it has been set
    /// in between.
    pub fn require<F>(mut self, _field: F) -> BuildResult<Self>
    where
        F: Field<Owner = T>,
    {
        let id = FieldId::of::<F>();
        if self.pending.contains(&id) {
            return Err(BuildError::DuplicateRequirement {
                target: type_name::<T>(),
                field: F::NAME,
            });
        }

        trace!(target_type = type_name::<T>(), field = F::NAME, "Registered required field");
        self.pending.push(id);
        Ok(self)
    }

    /// Set any field of `T`, marking it satisfied if it was pending.
    pub fn set<F>(mut self, field: F, value: F::Value) -> Self
    where
        F: Field<Owner = T>,
    {
        self.assign(field, value);
        self
    }

    /// In-place form of [`set`](Self::set).
    pub fn assign<F>(&mut self, _field: F, value: F::Value) -> &mut Self
    where
        F: Field<Owner = T>,
    {
        F::write(&mut self.value, value);

        let id = FieldId::of::<F>();
        match self.pending.iter().position(|pending| *pending == id) {
            Some(pos) => {
                self.pending.remove(pos);
                trace!(
                    target_type = type_name::<T>(),
                    field = F::NAME,
                    remaining = self.pending.len(),
                    "Set required field"
                );
            }
            None => {
                trace!(target_type = type_name::<T>(), field = F::NAME, "Set untracked field");
            }
        }
        self
    }

    /// Required fields still missing, in registration order.
    pub fn remaining(&self) -> &[FieldId] {
        &self.pending
    }

    pub fn remaining_names(&self) -> Vec<&'static str> {
        self.pending.iter().map(FieldId::name).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.pending.is_empty()
    }

    /// Borrow the finished value.
    #[must_use = "an incomplete build is reported through the result"]
    pub fn get(&self) -> BuildResult<&T> {
        self.check()?;
        Ok(&self.value)
    }

    /// Take the finished value.
    #[must_use = "an incomplete build is reported through the result"]
    pub fn build(self) -> BuildResult<T> {
        self.check()?;
        Ok(self.value)
    }

    fn check(&self) -> BuildResult<()> {
        if self.pending.is_empty() {
            return Ok(());
        }

        let missing = self.remaining_names();
        debug!(
            target_type = type_name::<T>(),
            missing = ?missing,
            "Finalize attempted on incomplete build"
        );
        Err(BuildError::Incomplete {
            target: type_name::<T>(),
            missing,
        })
    }
}

impl<T: Default> Default for CheckedBuilder<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
