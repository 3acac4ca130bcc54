//! # pprint - Generic Value Pretty-Printer
//!
//! `pprint` renders built-in types, containers, pairs, optional values,
//! tagged unions, and pointers into human-readable text, with indentation
//! and bracket/brace framing for nested structure.
//!
//! Values are lowered through the [`Pretty`] trait into a closed tagged
//! [`Node`] tree; a single layout pass then decides framing and line breaks.
//! Top-level containers with multiple elements go multi-line; anything
//! nested inside another container always stays on one line.
//!
//! ## Quick Start
//!
//! ```rust
//! use pprint::pformat;
//!
//! assert_eq!(pformat(&vec![1, 2, 3]).unwrap(), "[\n1, \n2, \n3\n]\n");
//! assert_eq!(pformat(&None::<i32>).unwrap(), "nullopt\n");
//!
//! use std::collections::BTreeMap;
//! let scores = BTreeMap::from([("a", 1)]);
//! assert_eq!(pformat(&scores).unwrap(), "{\"a\" : 1}\n");
//! ```
//!
//! ## Rendering rules
//!
//! | Value | Rendered as |
//! |---|---|
//! | `bool` | `true` / `false` |
//! | integers, `f64` | native form |
//! | `f32` | native form with trailing `f` |
//! | `char` | single-quoted |
//! | `str`, `String` | double-quoted |
//! | null raw pointer | `nullptr` |
//! | non-null raw pointer | `<TypeName at 0xADDR>` |
//! | registered enum | enumerator name, or the underlying integer |
//! | `Option` | contained value, or `nullopt` |
//! | `(A, B)` | `(first, second)` |
//! | `Vec`, `VecDeque`, `LinkedList`, slices, arrays | `[` `]` framing |
//! | `BTreeSet`, `HashSet` | `{` `}` framing |
//! | `BTreeMap`, `HashMap`, JSON objects | `{` `}` with `key : value` slots |
//! | [`Object`] wrapper | `<Object TypeName>` |
//! | [`Method`] wrapper | `<Object.method TypeName>` |
//!
//! Tagged unions are ordinary Rust enums: implement [`Pretty`] by matching
//! on the active variant and delegating to its payload.
//!
//! ## Enums
//!
//! Enumeration rendering resolves names through `pprint-reflect`'s
//! registration tables; [`impl_pretty_enum!`] bridges a registered enum into
//! the printer:
//!
//! ```rust
//! use pprint::{impl_pretty_enum, pformat};
//! use pprint_reflect::reflect_enum;
//!
//! reflect_enum! {
//!     pub enum Fruit: i32 {
//!         Apple = 0,
//!         Pear = 1,
//!     }
//! }
//!
//! impl_pretty_enum!(Fruit);
//!
//! assert_eq!(pformat(&Fruit::Pear).unwrap(), "Pear\n");
//! ```
//!
//! ## Failure policy
//!
//! Rendering never fails on a value: misses fall back to placeholder text
//! (`nullopt`, `nullptr`, `<Object …>`). The only error surface is the
//! output sink, reported as [`PrintError`].

mod error;
mod json;
mod layout;
mod node;
mod pretty;
mod printer;

pub use error::PrintError;
pub use node::Node;
pub use pretty::{enum_node, Method, Object, Pretty};
pub use printer::{pformat, Printer, PrinterOptions};
