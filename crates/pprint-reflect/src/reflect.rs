//! Lookup operations over registered enum tables.
//!
//! Every operation filters the registration table through the type's
//! `[MIN, MAX]` visibility range before matching, so an enumerator registered
//! outside the range behaves as if it did not exist. Misses resolve to
//! `None`; the only panicking operation is [`value_at`] on a violated index
//! precondition.

/// A registered enumeration.
///
/// Implemented by the [`reflect_enum!`](crate::reflect_enum) macro; not
/// intended for manual implementation, though nothing prevents one as long
/// as `ENTRIES` ordinals are unique and `from_ordinal`/`ordinal` agree with
/// the table.
pub trait EnumReflect: Copy + 'static {
    /// The ordinal↔name registration table, in declaration order.
    const ENTRIES: &'static [(i64, &'static str)];

    /// Lower bound (inclusive) of the visibility range.
    const MIN: i64;

    /// Upper bound (inclusive) of the visibility range.
    const MAX: i64;

    /// Decodes a registered ordinal back into the enum, ignoring the
    /// visibility range. Returns `None` for unregistered ordinals.
    fn from_ordinal(ordinal: i64) -> Option<Self>;

    /// The underlying integer value of this enumerator.
    fn ordinal(self) -> i64;
}

fn in_range<E: EnumReflect>(ordinal: i64) -> bool {
    ordinal >= E::MIN && ordinal <= E::MAX
}

/// Returns the enumerator name for `ordinal`, or `None` when the ordinal is
/// outside the visibility range or not registered.
pub fn name_of<E: EnumReflect>(ordinal: i64) -> Option<&'static str> {
    if !in_range::<E>(ordinal) {
        return None;
    }
    E::ENTRIES
        .iter()
        .find(|(value, _)| *value == ordinal)
        .map(|(_, name)| *name)
}

/// Returns the name of an enumerator value, or `None` when its ordinal lies
/// outside the visibility range.
pub fn name_of_value<E: EnumReflect>(value: E) -> Option<&'static str> {
    name_of::<E>(value.ordinal())
}

/// Looks an enumerator up by exact name (case-sensitive, untrimmed).
///
/// Linear scan over the in-range portion of the table; `None` on no match.
pub fn cast_from_name<E: EnumReflect>(name: &str) -> Option<E> {
    E::ENTRIES
        .iter()
        .filter(|(value, _)| in_range::<E>(*value))
        .find(|(_, n)| *n == name)
        .and_then(|(value, _)| E::from_ordinal(*value))
}

/// Casts an ordinal to the enum, succeeding only when the ordinal has a
/// discoverable name (registered and in range).
pub fn cast_from_ordinal<E: EnumReflect>(ordinal: i64) -> Option<E> {
    if name_of::<E>(ordinal).is_some() {
        E::from_ordinal(ordinal)
    } else {
        None
    }
}

fn visible_entries<E: EnumReflect>() -> Vec<(i64, &'static str)> {
    let mut entries: Vec<(i64, &'static str)> = E::ENTRIES
        .iter()
        .copied()
        .filter(|(value, _)| in_range::<E>(*value))
        .collect();
    entries.sort_unstable_by_key(|(value, _)| *value);
    entries
}

/// All in-range enumerator values, in ascending ordinal order.
pub fn values<E: EnumReflect>() -> Vec<E> {
    visible_entries::<E>()
        .into_iter()
        .filter_map(|(value, _)| E::from_ordinal(value))
        .collect()
}

/// All in-range enumerator names, aligned index-for-index with [`values`].
pub fn names<E: EnumReflect>() -> Vec<&'static str> {
    visible_entries::<E>()
        .into_iter()
        .map(|(_, name)| name)
        .collect()
}

/// Number of in-range enumerators.
pub fn count<E: EnumReflect>() -> usize {
    E::ENTRIES
        .iter()
        .filter(|(value, _)| in_range::<E>(*value))
        .count()
}

/// Returns the `index`-th element of [`values`].
///
/// # Panics
///
/// Panics when `index >= count::<E>()`.
pub fn value_at<E: EnumReflect>(index: usize) -> E {
    let values = values::<E>();
    assert!(
        index < values.len(),
        "value_at: index {} out of bounds for {} enumerators",
        index,
        values.len()
    );
    values[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect_enum;

    reflect_enum! {
        enum Level: i32 {
            Low = -3,
            Mid = 0,
            High = 9,
        }
    }

    reflect_enum! {
        enum Flags: u8 {
            None = 0,
            Read = 1,
            Write = 2,
        }
    }

    // Tall is registered but sits outside the default [-128, 128] window.
    reflect_enum! {
        enum Sparse: i16 {
            Short = 1,
            Tall = 400,
        }
    }

    #[test]
    fn name_lookup_hits_and_misses() {
        assert_eq!(name_of::<Level>(-3), Some("Low"));
        assert_eq!(name_of::<Level>(0), Some("Mid"));
        assert_eq!(name_of::<Level>(9), Some("High"));
        assert_eq!(name_of::<Level>(1), None);
        assert_eq!(name_of::<Level>(-129), None);
        assert_eq!(name_of::<Level>(129), None);
    }

    #[test]
    fn name_of_value_matches_ordinal_lookup() {
        assert_eq!(name_of_value(Level::High), Some("High"));
        assert_eq!(name_of_value(Flags::Write), Some("Write"));
    }

    #[test]
    fn cast_from_name_is_exact() {
        assert_eq!(cast_from_name::<Level>("Mid"), Some(Level::Mid));
        assert_eq!(cast_from_name::<Level>("mid"), None);
        assert_eq!(cast_from_name::<Level>(" Mid"), None);
        assert_eq!(cast_from_name::<Level>("Missing"), None);
    }

    #[test]
    fn cast_from_ordinal_requires_a_name() {
        assert_eq!(cast_from_ordinal::<Level>(9), Some(Level::High));
        assert_eq!(cast_from_ordinal::<Level>(8), None);
        assert_eq!(cast_from_ordinal::<Level>(500), None);
    }

    #[test]
    fn values_ascend_and_align_with_names() {
        assert_eq!(values::<Level>(), vec![Level::Low, Level::Mid, Level::High]);
        assert_eq!(names::<Level>(), vec!["Low", "Mid", "High"]);
        assert_eq!(count::<Level>(), 3);
        for (i, value) in values::<Level>().iter().enumerate() {
            assert_eq!(name_of_value(*value), Some(names::<Level>()[i]));
        }
    }

    #[test]
    fn unsigned_repr_clamps_min_to_zero() {
        assert_eq!(<Flags as EnumReflect>::MIN, 0);
        assert_eq!(<Flags as EnumReflect>::MAX, 128);
        assert_eq!(name_of::<Flags>(0), Some("None"));
    }

    #[test]
    fn out_of_range_enumerator_is_invisible() {
        assert_eq!(name_of::<Sparse>(400), None);
        assert_eq!(name_of_value(Sparse::Tall), None);
        assert_eq!(cast_from_name::<Sparse>("Tall"), None);
        assert_eq!(cast_from_ordinal::<Sparse>(400), None);
        assert_eq!(values::<Sparse>(), vec![Sparse::Short]);
        assert_eq!(count::<Sparse>(), 1);
    }

    #[test]
    fn value_at_indexes_ascending_values() {
        assert_eq!(value_at::<Level>(0), Level::Low);
        assert_eq!(value_at::<Level>(2), Level::High);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn value_at_panics_past_the_end() {
        let _ = value_at::<Level>(3);
    }
}
