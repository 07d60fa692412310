//! 终端渲染面
//!
//! 实现 trip-planner-core 的 RenderTarget trait。
//! presenter 通过它挂载、替换、卸载自己的节点；View 层只读取这里的内容。

use std::collections::HashMap;
use std::time::{Duration, Instant};

use trip_planner_core::presenter::{ContainerId, Node, NodeId, NodeRef};
use trip_planner_core::types::EventId;
use trip_planner_core::RenderTarget;

/// 抖动动画时长
pub const SHAKE_DURATION: Duration = Duration::from_millis(600);

/// 抖动时每一帧的持续时间
const SHAKE_FRAME: Duration = Duration::from_millis(100);

/// 终端上当前显示的节点
#[derive(Debug, Default)]
pub struct TerminalSurface {
    container: Option<ContainerId>,
    nodes: HashMap<NodeId, Node>,
    shakes: HashMap<NodeId, Instant>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// 抖动中的节点在当前帧的水平偏移
    pub fn shake_offset(&self, id: NodeId, now: Instant) -> Option<u16> {
        let started = self.shakes.get(&id)?;
        let elapsed = now.saturating_duration_since(*started);
        if elapsed >= SHAKE_DURATION {
            return None;
        }
        let frame = elapsed.as_millis() / SHAKE_FRAME.as_millis();
        Some(if frame % 2 == 0 { 2 } else { 0 })
    }

    /// 取出已结束的抖动，返回仍在显示的节点对应的事件
    pub fn finished_shakes(&mut self, now: Instant) -> Vec<EventId> {
        let finished: Vec<NodeId> = self
            .shakes
            .iter()
            .filter(|(_, started)| now.saturating_duration_since(**started) >= SHAKE_DURATION)
            .map(|(id, _)| *id)
            .collect();

        finished
            .into_iter()
            .filter_map(|id| {
                self.shakes.remove(&id);
                self.nodes.get(&id).map(|n| n.event_id().clone())
            })
            .collect()
    }
}

impl RenderTarget for TerminalSurface {
    fn attach(&mut self, node: NodeRef<'_>, container: ContainerId) {
        if self.container.is_some_and(|c| c != container) {
            tracing::warn!("Node attached to a second container");
        }
        self.container = Some(container);
        self.nodes.insert(node.id(), node.to_node());
    }

    fn replace(&mut self, new_node: NodeRef<'_>, old_node: NodeId) {
        if self.nodes.remove(&old_node).is_none() {
            tracing::warn!("Replaced node {old_node:?} was not attached");
        }
        self.shakes.remove(&old_node);
        self.nodes.insert(new_node.id(), new_node.to_node());
    }

    fn detach(&mut self, node: NodeId) {
        self.nodes.remove(&node);
        self.shakes.remove(&node);
    }

    fn update(&mut self, node: NodeRef<'_>) {
        if let Some(slot) = self.nodes.get_mut(&node.id()) {
            *slot = node.to_node();
        }
    }

    fn shake(&mut self, node: NodeId) {
        if self.nodes.contains_key(&node) {
            self.shakes.insert(node, Instant::now());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trip_planner_core::presenter::{EditStatus, PointForm, PointView};

    use crate::test_utils::test_app;

    fn sample_view() -> PointView {
        let app = test_app();
        let presenter = &app.board.presenters()[0];
        PointView::build(presenter.event(), app.board.reference())
    }

    #[test]
    fn replace_swaps_nodes() {
        let mut surface = TerminalSurface::new();
        let view = sample_view();
        let form = PointForm::build(&view.event);

        surface.attach(NodeRef::View(&view), ContainerId::new());
        surface.replace(NodeRef::Edit(&form, EditStatus::Idle), view.node());

        assert_eq!(surface.len(), 1);
        assert!(surface.node(view.node()).is_none());
        assert!(matches!(surface.node(form.node()), Some(Node::Edit { .. })));

        surface.detach(form.node());
        assert!(surface.is_empty());
    }

    #[test]
    fn shake_alternates_then_finishes() {
        let mut surface = TerminalSurface::new();
        let view = sample_view();
        surface.attach(NodeRef::View(&view), ContainerId::new());
        surface.shake(view.node());

        let started = Instant::now();
        assert!(surface.shake_offset(view.node(), started).is_some());
        assert!(surface.finished_shakes(started).is_empty());

        let finished = surface.finished_shakes(started + SHAKE_DURATION);
        assert_eq!(finished, vec![view.event.id.clone()]);
        assert!(surface.shake_offset(view.node(), started).is_none());
    }

    #[test]
    fn unknown_node_is_not_shaken() {
        let mut surface = TerminalSurface::new();
        let view = sample_view();
        surface.shake(view.node());
        assert!(surface.finished_shakes(Instant::now() + SHAKE_DURATION).is_empty());
    }
}
