// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oceanid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oceanid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Flow, HierarchyNode, NodeId};
use crate::nav::Side;

/// Single-node isolation.
///
/// At most one node on one side may be focused at a time, so the state
/// is a single slot; focusing a side inherently clears the other.
/// Focus narrows what is visible without changing drill depth and
/// without touching the aggregation or layout algorithms.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FocusState {
    #[default]
    Idle,
    Focused {
        side: Side,
        node_id: NodeId,
    },
}

impl FocusState {
    /// Replaces any previous focus. Repeated identical calls are
    /// idempotent; the same-node-click drill-in convention is the
    /// hosting layer's business, not the engine's.
    pub fn focus(&mut self, side: Side, node_id: NodeId) {
        *self = Self::Focused { side, node_id };
    }

    pub fn clear(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn focused_on(&self, query_side: Side) -> Option<&NodeId> {
        match self {
            Self::Focused { side, node_id } if *side == query_side => Some(node_id),
            _ => None,
        }
    }

    /// Collapses `nodes` to the focused node when `query_side` is the
    /// focused side; otherwise passes the sequence through unchanged.
    pub fn filter_nodes<'t>(
        &self,
        query_side: Side,
        nodes: Vec<&'t HierarchyNode>,
    ) -> Vec<&'t HierarchyNode> {
        match self.focused_on(query_side) {
            None => nodes,
            Some(node_id) => nodes
                .into_iter()
                .filter(|node| node.id() == node_id)
                .collect(),
        }
    }

    /// Drops flows not touching the focused node; pass-through when idle.
    pub fn filter_flows(&self, flows: Vec<Flow>) -> Vec<Flow> {
        match self {
            Self::Idle => flows,
            Self::Focused { node_id, .. } => flows
                .into_iter()
                .filter(|flow| flow.touches(node_id))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FocusState;
    use crate::model::fixtures::medicine_tree;
    use crate::model::{Flow, NodeId};
    use crate::nav::Side;

    fn id(value: &str) -> NodeId {
        NodeId::new(value).expect("node id")
    }

    fn sample_flows() -> Vec<Flow> {
        vec![
            Flow::new(id("antibiotics"), id("icu"), 60.0, "fast", 92.0),
            Flow::new(id("antibiotics"), id("wards"), 40.0, "medium", 88.0),
            Flow::new(id("analgesics"), id("icu"), 50.0, "medium", 90.0),
        ]
    }

    #[test]
    fn focusing_one_side_clears_the_other() {
        let mut focus = FocusState::default();
        focus.focus(Side::Source, id("antibiotics"));
        focus.focus(Side::Destination, id("icu"));
        assert_eq!(focus.focused_on(Side::Source), None);
        assert_eq!(focus.focused_on(Side::Destination), Some(&id("icu")));
    }

    #[test]
    fn repeated_identical_focus_is_idempotent() {
        let mut focus = FocusState::default();
        focus.focus(Side::Source, id("antibiotics"));
        let snapshot = focus.clone();
        focus.focus(Side::Source, id("antibiotics"));
        assert_eq!(focus, snapshot);
    }

    #[test]
    fn filter_nodes_collapses_only_the_focused_side() {
        let tree = medicine_tree();
        let mut focus = FocusState::default();
        focus.focus(Side::Source, id("analgesics"));

        let sources = focus.filter_nodes(Side::Source, tree.roots().iter().collect());
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].name(), "Analgesics");

        let destinations = focus.filter_nodes(Side::Destination, tree.roots().iter().collect());
        assert_eq!(destinations.len(), 2);
    }

    #[test]
    fn filter_flows_keeps_only_touching_flows() {
        let mut focus = FocusState::default();
        focus.focus(Side::Destination, id("icu"));
        let flows = focus.filter_flows(sample_flows());
        assert_eq!(flows.len(), 2);
        assert!(flows.iter().all(|flow| flow.target_id() == &id("icu")));
    }

    #[test]
    fn clear_restores_pass_through() {
        let mut focus = FocusState::default();
        focus.focus(Side::Source, id("antibiotics"));
        focus.clear();
        assert!(focus.is_idle());
        assert_eq!(focus.filter_flows(sample_flows()).len(), 3);
    }
}
