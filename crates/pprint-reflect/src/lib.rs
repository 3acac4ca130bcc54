//! Explicit-registration enum reflection.
//!
//! This crate maps enumerator values to their textual names and back. Enums
//! are registered with the [`reflect_enum!`] macro, which defines the enum
//! and records its ordinal↔name table in declaration order. All lookups run
//! against that `'static` table; nothing is derived at call time.
//!
//! # Example
//!
//! ```rust
//! use pprint_reflect::{self as reflect, reflect_enum};
//!
//! reflect_enum! {
//!     pub enum Color: i32 {
//!         Red = 2,
//!         Green = 4,
//!         Blue = 6,
//!     }
//! }
//!
//! assert_eq!(reflect::name_of::<Color>(4), Some("Green"));
//! assert_eq!(reflect::cast_from_name::<Color>("Blue"), Some(Color::Blue));
//! assert_eq!(reflect::cast_from_ordinal::<Color>(5), None);
//! assert_eq!(reflect::count::<Color>(), 3);
//! ```
//!
//! # Visibility range
//!
//! Each registered enum carries a closed ordinal interval `[MIN, MAX]`,
//! defaulting to `[-128, 128]` clamped to the representable range of the
//! underlying integer type (so an unsigned repr clamps `MIN` to 0).
//! Enumerators whose ordinal lies outside the interval are invisible to
//! every lookup. Override the interval per type with a `range` clause:
//!
//! ```rust
//! use pprint_reflect::reflect_enum;
//!
//! reflect_enum! {
//!     pub enum Status: i16 range(-1024, 1024) {
//!         Unknown = -512,
//!         Ok = 0,
//!         Overflowed = 512,
//!     }
//! }
//! ```
//!
//! # Registration rules
//!
//! Two enumerators sharing an underlying value is a registration error and
//! fails compilation, as does a range whose max does not exceed its min.

mod macros;
mod reflect;

pub use reflect::{
    cast_from_name, cast_from_ordinal, count, name_of, name_of_value, names, value_at, values,
    EnumReflect,
};

/// Support items for macro-expanded code. Not part of the public API.
#[doc(hidden)]
pub mod rt {
    /// Default lower bound of the visibility range.
    pub const DEFAULT_RANGE_MIN: i64 = -128;
    /// Default upper bound of the visibility range.
    pub const DEFAULT_RANGE_MAX: i64 = 128;

    /// Clamps a requested lower bound to what the underlying repr can hold.
    pub const fn effective_min(requested: i64, repr_min: i128) -> i64 {
        let floor = if repr_min < i64::MIN as i128 {
            i64::MIN
        } else {
            repr_min as i64
        };
        if requested > floor {
            requested
        } else {
            floor
        }
    }

    /// Clamps a requested upper bound to what the underlying repr can hold.
    pub const fn effective_max(requested: i64, repr_max: i128) -> i64 {
        let ceiling = if repr_max > i64::MAX as i128 {
            i64::MAX
        } else {
            repr_max as i64
        };
        if requested < ceiling {
            requested
        } else {
            ceiling
        }
    }

    /// Compile-time scan for duplicate ordinals in a registration table.
    pub const fn has_duplicate_ordinal(entries: &[(i64, &str)]) -> bool {
        let mut i = 0;
        while i < entries.len() {
            let mut j = i + 1;
            while j < entries.len() {
                if entries[i].0 == entries[j].0 {
                    return true;
                }
                j += 1;
            }
            i += 1;
        }
        false
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn effective_min_clamps_to_repr() {
            assert_eq!(effective_min(-128, i8::MIN as i128), -128);
            assert_eq!(effective_min(-128, u8::MIN as i128), 0);
            assert_eq!(effective_min(-300, i8::MIN as i128), -128);
        }

        #[test]
        fn effective_max_clamps_to_repr() {
            assert_eq!(effective_max(128, i8::MAX as i128), 127);
            assert_eq!(effective_max(128, i32::MAX as i128), 128);
            assert_eq!(effective_max(128, u64::MAX as i128), 128);
        }

        #[test]
        fn duplicate_scan() {
            assert!(!has_duplicate_ordinal(&[(1, "A"), (2, "B")]));
            assert!(has_duplicate_ordinal(&[(1, "A"), (2, "B"), (1, "C")]));
            assert!(!has_duplicate_ordinal(&[]));
        }
    }
}
