//! Field selectors: compile-time identifiers for one field of one structure.
//!
//! A selector is a zero-sized type implementing [`Field`]. It names the
//! structure that owns the field, the field's value type, and how to reach
//! the field. Selectors are normally declared with [`selectors!`](crate::selectors):
//!
//! ```
//! use proof_builder::{selectors, Field, OwnerOf, TypeOf};
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
//! fn main() {
//!     let x: TypeOf<point::x> = 3;
//!     let owner: OwnerOf<point::label> = Point::default();
//!     assert_eq!(x, 3);
//!     assert_eq!(<point::label as Field>::get(&owner), "");
//!     assert_eq!(point::y::NAME, "y");
//!     assert_eq!(point::label::INDEX, 2);
//! }
//! ```

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A compile-time selector for a single field of [`Field::Owner`].
///
/// `INDEX` must be unique among the selectors of one owner; duplicate
/// detection in required-field lists relies on it. Selectors are `'static`
/// types (normally unit structs), which gives them a `TypeId`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a field selector",
    label = "not a field selector",
    note = "declare field selectors with `proof_builder::selectors!`"
)]
pub trait Field: 'static {
    /// The structure this field belongs to.
    type Owner;

    /// The type stored in the field.
    type Value;

    /// Field name, used in diagnostics and by the runtime-checked builder.
    const NAME: &'static str;

    /// Declaration position of the field within its owner.
    const INDEX: usize;

    fn get(target: &Self::Owner) -> &Self::Value;

    fn get_mut(target: &mut Self::Owner) -> &mut Self::Value;

    /// Overwrite the field, dropping the previous value.
    fn write(target: &mut Self::Owner, value: Self::Value) {
        *Self::get_mut(target) = value;
    }
}

/// The value type of a field selector.
pub type TypeOf<F> = <F as Field>::Value;

/// The structure a field selector belongs to.
pub type OwnerOf<F> = <F as Field>::Owner;

/// Whether two selectors denote the same field of the same structure.
///
/// Identity is by selector, never by value type: two `i32` fields of one
/// structure are different fields.
pub fn same_field<A: Field, B: Field>() -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
}

/// Value-level identity of a field selector.
///
/// Used where the set of fields is only known at runtime (see the
/// runtime-checked builder). Two ids are equal exactly when
/// [`same_field`] holds for their selectors; the names are for display.
#[derive(Clone, Copy)]
pub struct FieldId {
    selector: TypeId,
    owner: &'static str,
    name: &'static str,
    index: usize,
}

impl FieldId {
    pub fn of<F: Field>() -> Self {
        Self {
            selector: TypeId::of::<F>(),
            owner: std::any::type_name::<F::Owner>(),
            name: F::NAME,
            index: F::INDEX,
        }
    }

    /// Type name of the owning structure.
    pub fn owner(&self) -> &'static str {
        self.owner
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl PartialEq for FieldId {
    fn eq(&self, other: &Self) -> bool {
        self.selector == other.selector
    }
}

impl Eq for FieldId {}

impl Hash for FieldId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.selector.hash(state);
    }
}

impl fmt::Debug for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Shorten the owner's own path, keep generic arguments as they are.
        let (path, args) = self.owner.split_at(self.owner.find('<').unwrap_or(self.owner.len()));
        let owner = path.rsplit("::").next().unwrap_or(path);
        write!(f, "{owner}{args}::{}", self.name)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Declare field selectors for a structure.
///
/// Generates a module holding one unit struct per listed field, each
/// implementing [`Field`] for the named owner. Refer to selectors through
/// the module path (`point::x`); glob-importing them would turn plain
/// `let x = ...` bindings into patterns.
///
/// The module visibility decides the selector visibility: `pub mod` gives
/// public selectors, `pub(crate) mod` crate-visible ones, and a private
/// module gives selectors visible to the declaring module.
///
/// The owner is any type naming a concrete structure, so path-qualified
/// owners and concrete instantiations such as `Wrapper<u8>` work. The
/// generated module sees the caller's scope through `use super::*`.
/// Selectors that are themselves generic over the owner's type parameters
/// (one `inner` selector for every `Wrapper<T>`) need a hand-written
/// [`Field`] impl on a generic marker type.
///
/// ```compile_fail,E0277
/// use proof_builder::Done;
///
/// #[derive(Default)]
/// pub struct Point { pub x: i32 }
///
/// fn main() {
///     // `u8` is not a field selector.
///     let _ = Done::new(Point::default()).set(42u8, 1);
/// }
/// ```
#[macro_export]
macro_rules! selectors {
    (
        $(#[$meta:meta])*
        pub mod $module:ident for $owner:ty {
            $( $(#[$field_meta:meta])* $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $crate::__selector_module!(
            [$(#[$meta])*] [pub] [pub] $module $owner;
            $( $(#[$field_meta])* $field : $ty, )*
        );
    };
    (
        $(#[$meta:meta])*
        pub(crate) mod $module:ident for $owner:ty {
            $( $(#[$field_meta:meta])* $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $crate::__selector_module!(
            [$(#[$meta])*] [pub(crate)] [pub(crate)] $module $owner;
            $( $(#[$field_meta])* $field : $ty, )*
        );
    };
    (
        $(#[$meta:meta])*
        mod $module:ident for $owner:ty {
            $( $(#[$field_meta:meta])* $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $crate::__selector_module!(
            [$(#[$meta])*] [] [pub(super)] $module $owner;
            $( $(#[$field_meta])* $field : $ty, )*
        );
    };
}

/// Internal: emits the selector module. Not part of public API.
#[macro_export]
#[doc(hidden)]
macro_rules! __selector_module {
    (
        [$($meta:tt)*] [$($mod_vis:tt)*] [$($field_vis:tt)*] $module:ident $owner:ty;
        $($fields:tt)*
    ) => {
        $($meta)*
        #[allow(non_camel_case_types)]
        $($mod_vis)* mod $module {
            #[allow(unused_imports)]
            use super::*;

            $crate::__selector_fields!([$($field_vis)*] $owner; 0usize; $($fields)*);
        }
    };
}

/// Internal: TT muncher assigning consecutive indices. Not part of public API.
#[macro_export]
#[doc(hidden)]
macro_rules! __selector_fields {
    ([$($vis:tt)*] $owner:ty; $index:expr; ) => {};
    (
        [$($vis:tt)*] $owner:ty; $index:expr;
        $(#[$field_meta:meta])* $field:ident : $ty:ty, $($rest:tt)*
    ) => {
        $(#[$field_meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $($vis)* struct $field;

        impl $crate::Field for $field {
            type Owner = $owner;
            type Value = $ty;

            const NAME: &'static str = stringify!($field);
            const INDEX: usize = $index;

            #[inline]
            fn get(__target: &$owner) -> &$ty {
                &__target.$field
            }

            #[inline]
            fn get_mut(__target: &mut $owner) -> &mut $ty {
                &mut __target.$field
            }
        }

        $crate::__selector_fields!([$($vis)*] $owner; $index + 1usize; $($rest)*);
    };
}
