//! Rendering for `serde_json::Value`.
//!
//! JSON values carry their category at runtime, so one impl covers the whole
//! data model: arrays lower to sequences, objects to maps with double-quoted
//! keys. `Null` renders as `null` — it is a value of the JSON data model,
//! not an absent optional.

use serde_json::Value;

use crate::node::Node;
use crate::pretty::Pretty;

impl Pretty for Value {
    fn node(&self) -> Node {
        match self {
            Value::Null => Node::text("null"),
            Value::Bool(flag) => Node::text(if *flag { "true" } else { "false" }),
            Value::Number(number) => Node::text(number.to_string()),
            Value::String(text) => Node::quoted(text),
            Value::Array(items) => Node::Seq(items.iter().map(Pretty::node).collect()),
            Value::Object(entries) => Node::Map(
                entries
                    .iter()
                    .map(|(key, value)| (Node::quoted(key), value.node()))
                    .collect(),
            ),
        }
    }
}
