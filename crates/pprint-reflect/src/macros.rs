//! The `reflect_enum!` registration macro.

/// Defines an enum and registers its ordinal↔name table.
///
/// Every enumerator must carry an explicit discriminant; the table is the
/// single source of truth for lookups, so implicit numbering would hide the
/// registration from the reader. Duplicate discriminants fail compilation.
///
/// ```rust
/// use pprint_reflect::reflect_enum;
///
/// reflect_enum! {
///     /// Log severity.
///     pub enum Severity: i32 {
///         Debug = 0,
///         Info = 1,
///         Warn = 2,
///         Error = 3,
///     }
/// }
/// ```
///
/// An optional `range(min, max)` clause overrides the default `[-128, 128]`
/// visibility window:
///
/// ```rust
/// use pprint_reflect::reflect_enum;
///
/// reflect_enum! {
///     pub enum HttpClass: i32 range(0, 600) {
///         Informational = 100,
///         Success = 200,
///         Redirect = 300,
///         ClientError = 400,
///         ServerError = 500,
///     }
/// }
/// ```
#[macro_export]
macro_rules! reflect_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ident {
            $($(#[$variant_meta:meta])* $variant:ident = $value:expr),+ $(,)?
        }
    ) => {
        $crate::reflect_enum! {
            $(#[$meta])*
            $vis enum $name : $repr range($crate::rt::DEFAULT_RANGE_MIN, $crate::rt::DEFAULT_RANGE_MAX) {
                $($(#[$variant_meta])* $variant = $value),+
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ident range($min:expr, $max:expr) {
            $($(#[$variant_meta:meta])* $variant:ident = $value:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr($repr)]
        $vis enum $name {
            $($(#[$variant_meta])* $variant = $value),+
        }

        impl $crate::EnumReflect for $name {
            const ENTRIES: &'static [(i64, &'static str)] =
                &[$(($value as i64, stringify!($variant))),+];

            const MIN: i64 = $crate::rt::effective_min($min, <$repr>::MIN as i128);
            const MAX: i64 = $crate::rt::effective_max($max, <$repr>::MAX as i128);

            fn from_ordinal(ordinal: i64) -> ::core::option::Option<Self> {
                $(
                    if ordinal == $value as i64 {
                        return ::core::option::Option::Some(Self::$variant);
                    }
                )+
                ::core::option::Option::None
            }

            fn ordinal(self) -> i64 {
                self as $repr as i64
            }
        }

        const _: () = {
            assert!(
                !$crate::rt::has_duplicate_ordinal(<$name as $crate::EnumReflect>::ENTRIES),
                concat!("reflect_enum!: duplicate enumerator value in ", stringify!($name)),
            );
            assert!(
                <$name as $crate::EnumReflect>::MAX > <$name as $crate::EnumReflect>::MIN,
                concat!("reflect_enum!: range max must exceed range min for ", stringify!($name)),
            );
        };
    };
}
