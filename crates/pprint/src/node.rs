//! The tagged render tree.
//!
//! Values are lowered into a closed set of render categories before any
//! layout decision is made. Scalars arrive fully formatted (quoting, the
//! `f` suffix on single-precision floats, placeholder text) so the layout
//! pass only decides framing, separators, and line breaks.

/// One value lowered for rendering.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Fully formatted leaf text.
    Scalar(String),
    /// A key-value pair, rendered `(first, second)`. Not a container for
    /// layout purposes.
    Pair(Box<Node>, Box<Node>),
    /// Sequential container, framed `[` `]`.
    Seq(Vec<Node>),
    /// Set-like container, framed `{` `}`.
    Set(Vec<Node>),
    /// Map-like container, framed `{` `}` with `key : value` slots.
    Map(Vec<(Node, Node)>),
}

impl Node {
    /// Leaf node from already-formatted text.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Scalar(text.into())
    }

    /// Leaf node wrapped in double quotes.
    pub fn quoted(text: &str) -> Self {
        Node::Scalar(format!("\"{}\"", text))
    }

    /// Pair node from two rendered sides.
    pub fn pair(first: Node, second: Node) -> Self {
        Node::Pair(Box::new(first), Box::new(second))
    }

    /// Diagnostic placeholder for a value with no recognized category.
    pub fn object<T: ?Sized>() -> Self {
        Node::Scalar(format!("<Object {}>", std::any::type_name::<T>()))
    }

    /// Diagnostic placeholder for a member-function reference.
    pub fn method<T: ?Sized>() -> Self {
        Node::Scalar(format!("<Object.method {}>", std::any::type_name::<T>()))
    }

    /// Renders a raw pointer: `nullptr` when null, otherwise the pointee
    /// type name with an address token for diagnostic identity.
    pub fn pointer<T>(ptr: *const T) -> Self {
        if ptr.is_null() {
            Node::Scalar("nullptr".to_string())
        } else {
            Node::Scalar(format!("<{} at {:p}>", std::any::type_name::<T>(), ptr))
        }
    }

    /// Whether this node is a container category (`Seq`, `Set`, or `Map`).
    ///
    /// Containers get bracket framing and drive the multi-line/single-line
    /// layout split; scalars and pairs do not.
    pub fn is_container(&self) -> bool {
        matches!(self, Node::Seq(_) | Node::Set(_) | Node::Map(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_classification() {
        assert!(Node::Seq(vec![]).is_container());
        assert!(Node::Set(vec![]).is_container());
        assert!(Node::Map(vec![]).is_container());
        assert!(!Node::text("1").is_container());
        assert!(!Node::pair(Node::text("1"), Node::text("2")).is_container());
    }

    #[test]
    fn quoted_wraps_in_double_quotes() {
        assert_eq!(Node::quoted("abc"), Node::Scalar("\"abc\"".to_string()));
    }

    #[test]
    fn null_pointer_is_nullptr() {
        let node = Node::pointer(std::ptr::null::<i32>());
        assert_eq!(node, Node::Scalar("nullptr".to_string()));
    }

    #[test]
    fn live_pointer_names_type_and_address() {
        let value = 7_i32;
        let node = Node::pointer(&value as *const i32);
        match node {
            Node::Scalar(text) => {
                assert!(text.starts_with("<i32 at 0x"));
                assert!(text.ends_with('>'));
            }
            other => panic!("expected scalar, got {:?}", other),
        }
    }
}
