//! Render target abstract Trait

use crate::presenter::{ContainerId, NodeId, NodeRef};

/// Surface that presenters mount their representations on
///
/// Implementations must make `replace` atomic: `new_node` takes the place of
/// `old_node` in one step, with no state in which both or neither are shown.
pub trait RenderTarget {
    /// Mount `node` at the end of `container`
    fn attach(&mut self, node: NodeRef<'_>, container: ContainerId);

    /// Swap `old_node` for `new_node` in place
    fn replace(&mut self, new_node: NodeRef<'_>, old_node: NodeId);

    /// Unmount `node`; unknown nodes are ignored
    fn detach(&mut self, node: NodeId);

    /// Redraw an attached node whose state changed
    fn update(&mut self, node: NodeRef<'_>);

    /// Play the attention animation on `node`
    fn shake(&mut self, node: NodeId);
}
