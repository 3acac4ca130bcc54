//! Layout: turning a render tree into text.
//!
//! The algorithm is parameterized by bracket pair and slot shape and is
//! otherwise identical for sequences, sets, and maps:
//!
//! - empty container: the bracket pair with no internal whitespace
//! - one slot at the top level: single line inside the brackets
//! - multiple slots at the top level: one slot per line at
//!   `context indent + step` columns, `, ` before each line break, and one
//!   extra line break before the closing bracket when any slot is itself a
//!   container
//! - any container below the top level: always single line
//!
//! The nesting level and indent thread through every call as an immutable
//! [`RenderContext`]; the trailing-newline flag is consulted only at the
//! top level.

use std::io::{self, Write};

use crate::node::Node;

/// Immutable state threaded through the recursive layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RenderContext {
    /// Columns of padding owed before this node, when it starts a line.
    pub indent: usize,
    /// Recursion depth; level 0 is the top-level print call.
    pub level: usize,
}

impl RenderContext {
    /// Context for a top-level print call.
    pub fn root() -> Self {
        RenderContext {
            indent: 0,
            level: 0,
        }
    }

    /// Context for a node rendered inside another node. Nested nodes never
    /// start a line of their own, so they carry no padding.
    pub fn nested(self) -> Self {
        RenderContext {
            indent: 0,
            level: self.level + 1,
        }
    }

    fn is_top(self) -> bool {
        self.level == 0
    }
}

/// One layout slot: a plain element, or a map entry rendered `key : value`.
enum Slot<'a> {
    Item(&'a Node),
    Entry(&'a Node, &'a Node),
}

impl Slot<'_> {
    fn is_container(&self) -> bool {
        match self {
            Slot::Item(node) => node.is_container(),
            // The original keyed the decision on the mapped type; here it is
            // the value node that counts.
            Slot::Entry(_, value) => value.is_container(),
        }
    }
}

fn pad<W: Write>(sink: &mut W, width: usize) -> io::Result<()> {
    for _ in 0..width {
        sink.write_all(b" ")?;
    }
    Ok(())
}

/// Renders one node. `step` is the printer's configured indentation width;
/// `trailing_newline` applies only when `context` is the top level.
pub(crate) fn render<W: Write>(
    sink: &mut W,
    node: &Node,
    context: RenderContext,
    step: usize,
    trailing_newline: bool,
) -> io::Result<()> {
    match node {
        Node::Scalar(text) => {
            pad(sink, context.indent)?;
            sink.write_all(text.as_bytes())?;
            if context.is_top() && trailing_newline {
                sink.write_all(b"\n")?;
            }
            Ok(())
        }
        Node::Pair(first, second) => {
            pad(sink, context.indent)?;
            sink.write_all(b"(")?;
            render(sink, first, context.nested(), step, false)?;
            sink.write_all(b", ")?;
            render(sink, second, context.nested(), step, false)?;
            sink.write_all(b")")?;
            if context.is_top() && trailing_newline {
                sink.write_all(b"\n")?;
            }
            Ok(())
        }
        Node::Seq(items) => {
            let slots: Vec<Slot> = items.iter().map(Slot::Item).collect();
            render_framed(sink, &slots, b"[", b"]", context, step, trailing_newline)
        }
        Node::Set(items) => {
            let slots: Vec<Slot> = items.iter().map(Slot::Item).collect();
            render_framed(sink, &slots, b"{", b"}", context, step, trailing_newline)
        }
        Node::Map(entries) => {
            let slots: Vec<Slot> = entries
                .iter()
                .map(|(key, value)| Slot::Entry(key, value))
                .collect();
            render_framed(sink, &slots, b"{", b"}", context, step, trailing_newline)
        }
    }
}

fn write_slot<W: Write>(
    sink: &mut W,
    slot: &Slot<'_>,
    context: RenderContext,
    step: usize,
) -> io::Result<()> {
    match slot {
        Slot::Item(node) => render(sink, node, context, step, false),
        Slot::Entry(key, value) => {
            render(sink, key, context, step, false)?;
            sink.write_all(b" : ")?;
            render(sink, value, context, step, false)
        }
    }
}

fn render_framed<W: Write>(
    sink: &mut W,
    slots: &[Slot<'_>],
    open: &[u8],
    close: &[u8],
    context: RenderContext,
    step: usize,
    trailing_newline: bool,
) -> io::Result<()> {
    if !context.is_top() {
        sink.write_all(open)?;
        let last = slots.len().saturating_sub(1);
        for (i, slot) in slots.iter().enumerate() {
            write_slot(sink, slot, context.nested(), step)?;
            if i < last {
                sink.write_all(b", ")?;
            }
        }
        sink.write_all(close)?;
        return Ok(());
    }

    pad(sink, context.indent)?;
    match slots.len() {
        0 => {
            sink.write_all(open)?;
            sink.write_all(close)?;
        }
        1 => {
            sink.write_all(open)?;
            write_slot(sink, &slots[0], context.nested(), step)?;
            sink.write_all(close)?;
        }
        n => {
            sink.write_all(open)?;
            sink.write_all(b"\n")?;
            for (i, slot) in slots.iter().enumerate() {
                pad(sink, context.indent + step)?;
                write_slot(sink, slot, context.nested(), step)?;
                if i < n - 1 {
                    sink.write_all(b", \n")?;
                }
            }
            sink.write_all(b"\n")?;
            if slots.iter().any(Slot::is_container) {
                sink.write_all(b"\n")?;
            }
            sink.write_all(close)?;
        }
    }
    if trailing_newline {
        sink.write_all(b"\n")?;
    }
    Ok(())
}
