use crate::node_id::NodeId;

/// One element of the chain. `prev`/`next` index into the owning arena and
/// never own anything themselves.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) prev: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
}

impl<T> Node<T> {
    /// A node not yet linked to any neighbour.
    pub(crate) fn detached(value: T) -> Self {
        Node {
            value,
            prev: None,
            next: None,
        }
    }
}
