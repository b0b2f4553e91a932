/// Stable index of a node inside one list's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

impl NodeId {
    /// Returns the raw numeric identifier for debugging.
    pub(crate) fn as_raw(&self) -> usize {
        self.0
    }
}
