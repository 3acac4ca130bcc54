//! The `Pretty` capability trait and its implementations.
//!
//! Each implementation lowers one value category into the tagged [`Node`]
//! tree; the layout pass never inspects concrete value types. Tagged unions
//! need no machinery of their own: a Rust enum's `Pretty` impl matches on
//! the active variant and delegates to that variant's payload.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

use crate::node::Node;

/// A value the printer knows how to lower into a render tree.
pub trait Pretty {
    /// Lowers this value into its render tree.
    fn node(&self) -> Node;
}

impl Pretty for bool {
    fn node(&self) -> Node {
        Node::text(if *self { "true" } else { "false" })
    }
}

macro_rules! impl_pretty_integer {
    ($($ty:ty)+) => {
        $(
            impl Pretty for $ty {
                fn node(&self) -> Node {
                    Node::text(self.to_string())
                }
            }
        )+
    };
}

impl_pretty_integer!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

impl Pretty for f64 {
    fn node(&self) -> Node {
        Node::text(self.to_string())
    }
}

// Single precision keeps its `f` marker so the width is visible in output.
impl Pretty for f32 {
    fn node(&self) -> Node {
        Node::text(format!("{}f", self))
    }
}

impl Pretty for char {
    fn node(&self) -> Node {
        Node::text(format!("'{}'", self))
    }
}

impl Pretty for str {
    fn node(&self) -> Node {
        Node::quoted(self)
    }
}

impl Pretty for String {
    fn node(&self) -> Node {
        Node::quoted(self)
    }
}

impl<T: Pretty + ?Sized> Pretty for &T {
    fn node(&self) -> Node {
        (**self).node()
    }
}

impl<T: Pretty + ?Sized> Pretty for Box<T> {
    fn node(&self) -> Node {
        (**self).node()
    }
}

impl<T: Pretty> Pretty for Option<T> {
    fn node(&self) -> Node {
        match self {
            Some(value) => value.node(),
            None => Node::text("nullopt"),
        }
    }
}

impl<A: Pretty, B: Pretty> Pretty for (A, B) {
    fn node(&self) -> Node {
        Node::pair(self.0.node(), self.1.node())
    }
}

impl<T> Pretty for *const T {
    fn node(&self) -> Node {
        Node::pointer(*self)
    }
}

impl<T> Pretty for *mut T {
    fn node(&self) -> Node {
        Node::pointer(*self as *const T)
    }
}

macro_rules! impl_pretty_seq {
    ($($container:ident)+) => {
        $(
            impl<T: Pretty> Pretty for $container<T> {
                fn node(&self) -> Node {
                    Node::Seq(self.iter().map(Pretty::node).collect())
                }
            }
        )+
    };
}

impl_pretty_seq!(Vec VecDeque LinkedList);

impl<T: Pretty> Pretty for [T] {
    fn node(&self) -> Node {
        Node::Seq(self.iter().map(Pretty::node).collect())
    }
}

impl<T: Pretty, const N: usize> Pretty for [T; N] {
    fn node(&self) -> Node {
        Node::Seq(self.iter().map(Pretty::node).collect())
    }
}

impl<T: Pretty> Pretty for BTreeSet<T> {
    fn node(&self) -> Node {
        Node::Set(self.iter().map(Pretty::node).collect())
    }
}

impl<T: Pretty, S> Pretty for HashSet<T, S> {
    fn node(&self) -> Node {
        Node::Set(self.iter().map(Pretty::node).collect())
    }
}

impl<K: Pretty, V: Pretty> Pretty for BTreeMap<K, V> {
    fn node(&self) -> Node {
        Node::Map(self.iter().map(|(k, v)| (k.node(), v.node())).collect())
    }
}

impl<K: Pretty, V: Pretty, S> Pretty for HashMap<K, V, S> {
    fn node(&self) -> Node {
        Node::Map(self.iter().map(|(k, v)| (k.node(), v.node())).collect())
    }
}

/// Wrapper that renders any value as the opaque-object placeholder
/// `<Object TypeName>`.
///
/// Rust has no fallback dispatch, so values without a recognized category
/// opt into the placeholder explicitly:
///
/// ```rust
/// use pprint::{pformat, Object};
///
/// struct Widget;
///
/// let text = pformat(&Object(&Widget)).unwrap();
/// assert!(text.starts_with("<Object "));
/// assert!(text.contains("Widget"));
/// ```
pub struct Object<'a, T: ?Sized>(pub &'a T);

impl<T: ?Sized> Pretty for Object<'_, T> {
    fn node(&self) -> Node {
        Node::object::<T>()
    }
}

/// Wrapper that renders a member-function reference as
/// `<Object.method TypeName>`.
///
/// ```rust
/// use pprint::{pformat, Method};
///
/// let text = pformat(&Method(str::len)).unwrap();
/// assert!(text.starts_with("<Object.method "));
/// ```
pub struct Method<T>(pub T);

impl<T> Pretty for Method<T> {
    fn node(&self) -> Node {
        Node::method::<T>()
    }
}

/// Lowers a registered enum: its name when the ordinal is visible, the
/// underlying integer otherwise.
pub fn enum_node<E: pprint_reflect::EnumReflect>(value: &E) -> Node {
    match pprint_reflect::name_of_value(*value) {
        Some(name) => Node::text(name),
        None => Node::text(value.ordinal().to_string()),
    }
}

/// Implements [`Pretty`] for enums registered with
/// [`reflect_enum!`](pprint_reflect::reflect_enum).
///
/// A blanket impl over `EnumReflect` would collide with the primitive impls
/// under coherence, so the bridge is one generated line per type:
///
/// ```rust
/// use pprint::{impl_pretty_enum, pformat};
/// use pprint_reflect::reflect_enum;
///
/// reflect_enum! {
///     pub enum Color: i32 {
///         Red = 2,
///         Green = 4,
///         Blue = 6,
///     }
/// }
///
/// impl_pretty_enum!(Color);
///
/// assert_eq!(pformat(&Color::Green).unwrap(), "Green\n");
/// ```
#[macro_export]
macro_rules! impl_pretty_enum {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Pretty for $ty {
                fn node(&self) -> $crate::Node {
                    $crate::enum_node(self)
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_format_themselves() {
        assert_eq!(true.node(), Node::text("true"));
        assert_eq!(42_i32.node(), Node::text("42"));
        assert_eq!(3.5_f64.node(), Node::text("3.5"));
        assert_eq!(2.5_f32.node(), Node::text("2.5f"));
        assert_eq!('x'.node(), Node::text("'x'"));
        assert_eq!("abc".node(), Node::text("\"abc\""));
    }

    #[test]
    fn options_lower_to_inner_or_nullopt() {
        assert_eq!(Some(5_i32).node(), Node::text("5"));
        assert_eq!(None::<i32>.node(), Node::text("nullopt"));
        // A present optional is indistinguishable from the bare value.
        assert_eq!(Some("a").node(), "a".node());
    }

    #[test]
    fn containers_pick_their_category() {
        assert!(matches!(vec![1, 2].node(), Node::Seq(_)));
        assert!(matches!([1, 2, 3].node(), Node::Seq(_)));
        assert!(matches!(BTreeSet::from([1, 2]).node(), Node::Set(_)));
        assert!(matches!(BTreeMap::from([(1, 2)]).node(), Node::Map(_)));
        assert!(matches!((1, "a").node(), Node::Pair(_, _)));
    }

    #[test]
    fn references_delegate_to_the_pointee() {
        let items = vec!["a", "b"];
        assert_eq!((&items).node(), items.node());
        assert_eq!(Box::new(9_i32).node(), Node::text("9"));
    }

    #[test]
    fn wrappers_produce_placeholders() {
        struct Opaque;

        let object = Object(&Opaque).node();
        match object {
            Node::Scalar(text) => {
                assert!(text.starts_with("<Object "));
                assert!(text.contains("Opaque"));
            }
            other => panic!("expected scalar, got {:?}", other),
        }

        let method = Method(str::len).node();
        match method {
            Node::Scalar(text) => assert!(text.starts_with("<Object.method ")),
            other => panic!("expected scalar, got {:?}", other),
        }
    }
}
