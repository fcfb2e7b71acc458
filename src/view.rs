// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oceanid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oceanid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The top-level container the host UI runs against.
//!
//! A `FlowView` owns the two immutable trees, the optional authoritative
//! flow records, and the only mutable engine state there is: the two
//! drill paths and the focus slot. Every query returns a fresh snapshot
//! recomputed from scratch; nothing is cached, so the host may call on
//! every interaction event.

use crate::layout::{layout_ribbons, LayoutParams, RibbonLayout};
use crate::model::{Flow, FlowRecord, HierarchyNode, HierarchyTree, NodeId};
use crate::nav::{DrillStep, HierarchyNavigator, Side};
use crate::query::{aggregate_flows, FocusState};

#[derive(Debug, Clone, PartialEq)]
pub struct FlowView {
    source_tree: HierarchyTree,
    destination_tree: HierarchyTree,
    records: Vec<FlowRecord>,
    navigator: HierarchyNavigator,
    focus: FocusState,
}

impl FlowView {
    pub fn new(source_tree: HierarchyTree, destination_tree: HierarchyTree) -> Self {
        Self {
            source_tree,
            destination_tree,
            records: Vec::new(),
            navigator: HierarchyNavigator::new(),
            focus: FocusState::default(),
        }
    }

    pub fn source_tree(&self) -> &HierarchyTree {
        &self.source_tree
    }

    pub fn destination_tree(&self) -> &HierarchyTree {
        &self.destination_tree
    }

    fn tree(&self, side: Side) -> &HierarchyTree {
        match side {
            Side::Source => &self.source_tree,
            Side::Destination => &self.destination_tree,
        }
    }

    pub fn records(&self) -> &[FlowRecord] {
        &self.records
    }

    /// Replaces the authoritative rows when new data arrives. Any
    /// time-period rescaling happens host-side before this call.
    pub fn set_flow_records(&mut self, records: Vec<FlowRecord>) {
        self.records = records;
    }

    pub fn path(&self, side: Side) -> &[DrillStep] {
        self.navigator.path(side)
    }

    pub fn focus_state(&self) -> &FocusState {
        &self.focus
    }

    /// The node sequence visible on `side` at the current drill depth,
    /// after the connected-destination restriction and any focus.
    ///
    /// While the source side is drilled in and the destination side sits
    /// at root level, destination roots collapse to the drilled source
    /// node's connected set; an empty set means the data is absent and
    /// imposes no restriction.
    pub fn visible_nodes(&self, side: Side) -> Vec<&HierarchyNode> {
        let mut nodes = self.navigator.visible_nodes(side, self.tree(side));

        if side == Side::Destination
            && self.navigator.at_root(Side::Destination)
            && !self.navigator.at_root(Side::Source)
        {
            if let Some(drilled) = self
                .navigator
                .resolved_node(Side::Source, &self.source_tree)
            {
                let connected = drilled.connected_destinations();
                if !connected.is_empty() {
                    nodes.retain(|node| connected.contains(node.id()));
                }
            }
        }

        self.focus.filter_nodes(side, nodes)
    }

    /// The aggregated flow list between the currently visible sets, in
    /// the stable (source index, destination index, insertion) order.
    pub fn current_flows(&self) -> Vec<Flow> {
        let sources = self.visible_nodes(Side::Source);
        let destinations = self.visible_nodes(Side::Destination);

        let destination_root = self
            .navigator
            .path(Side::Destination)
            .first()
            .map(|step| step.node_id().clone());

        let flows = aggregate_flows(
            &sources,
            &destinations,
            &self.records,
            destination_root.as_ref(),
        );
        self.focus.filter_flows(flows)
    }

    /// The full geometry snapshot for the current drill/focus state.
    pub fn layout_geometry(&self, params: &LayoutParams) -> RibbonLayout {
        let sources = self.visible_nodes(Side::Source);
        let destinations = self.visible_nodes(Side::Destination);
        let flows = self.current_flows();
        layout_ribbons(&sources, &destinations, &flows, params)
    }

    /// Drills into a visible non-leaf node; a leaf or unknown id is a
    /// silent no-op. Any drill transition resets focus on both sides.
    ///
    /// Returns whether the path changed.
    pub fn drill_into(&mut self, side: Side, node_id: &NodeId) -> bool {
        let tree = match side {
            Side::Source => &self.source_tree,
            Side::Destination => &self.destination_tree,
        };
        let drilled = self.navigator.drill_into(side, tree, node_id);
        if drilled {
            self.focus.clear();
        }
        drilled
    }

    /// Keeps path entries `[0..=keep]` on `side`; `None` returns that
    /// side to root level. Clears focus like any drill transition.
    pub fn truncate(&mut self, side: Side, keep: Option<usize>) {
        self.navigator.truncate(side, keep);
        self.focus.clear();
    }

    pub fn go_back(&mut self, side: Side) {
        self.navigator.go_back(side);
        self.focus.clear();
    }

    /// Returns both sides to root level and clears focus.
    pub fn reset(&mut self) {
        self.navigator.reset();
        self.focus.clear();
    }

    /// Focuses a single node on `side`; the opposite side's focus, if
    /// any, is replaced. Idempotent for repeated identical calls.
    pub fn focus(&mut self, side: Side, node_id: NodeId) {
        self.focus.focus(side, node_id);
    }

    pub fn clear_focus(&mut self) {
        self.focus.clear();
    }
}
