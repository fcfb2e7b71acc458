// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oceanid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oceanid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Drill-path state machine over the two hierarchies.
//!
//! The navigator owns nothing but the two paths; trees are borrowed per
//! call so the host can swap in freshly fetched data without touching
//! navigation state. A path that no longer resolves against the current
//! tree is "no data", never an error.

use smallvec::SmallVec;
use smol_str::SmolStr;

use crate::model::{HierarchyNode, HierarchyTree, NodeId};

/// Which hierarchy a call addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Source,
    Destination,
}

/// One ancestor selection in a drill path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillStep {
    node_id: NodeId,
    node_name: SmolStr,
}

impl DrillStep {
    pub fn new(node_id: NodeId, node_name: impl Into<SmolStr>) -> Self {
        Self {
            node_id,
            node_name: node_name.into(),
        }
    }

    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    pub fn node_name(&self) -> &str {
        &self.node_name
    }
}

/// Ordered ancestor selections for one side; empty means root level.
///
/// Observed hierarchies are at most three levels deep, so paths never
/// exceed two steps and stay inline.
pub type DrillPath = SmallVec<[DrillStep; 3]>;

/// Tracks the current drill depth for both sides.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HierarchyNavigator {
    source_path: DrillPath,
    destination_path: DrillPath,
}

impl HierarchyNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self, side: Side) -> &[DrillStep] {
        match side {
            Side::Source => &self.source_path,
            Side::Destination => &self.destination_path,
        }
    }

    fn path_mut(&mut self, side: Side) -> &mut DrillPath {
        match side {
            Side::Source => &mut self.source_path,
            Side::Destination => &mut self.destination_path,
        }
    }

    pub fn depth(&self, side: Side) -> usize {
        self.path(side).len()
    }

    pub fn at_root(&self, side: Side) -> bool {
        self.path(side).is_empty()
    }

    fn path_ids(&self, side: Side) -> Vec<NodeId> {
        self.path(side)
            .iter()
            .map(|step| step.node_id().clone())
            .collect()
    }

    /// The node the path currently points at, if it still resolves.
    pub fn resolved_node<'t>(&self, side: Side, tree: &'t HierarchyTree) -> Option<&'t HierarchyNode> {
        tree.resolve_path(&self.path_ids(side))
    }

    /// The node sequence visible at the current depth, in render order.
    ///
    /// Empty path yields the root level; a resolved node with children
    /// yields those children; a resolved leaf behaves as its own level
    /// and yields itself. Any unresolved step yields an empty sequence.
    pub fn visible_nodes<'t>(&self, side: Side, tree: &'t HierarchyTree) -> Vec<&'t HierarchyNode> {
        if self.at_root(side) {
            return tree.roots().iter().collect();
        }
        match self.resolved_node(side, tree) {
            None => Vec::new(),
            Some(node) if node.is_leaf() => vec![node],
            Some(node) => node.children().iter().collect(),
        }
    }

    /// Appends a step for `node_id` if it is currently visible and has
    /// at least one child; drilling into a leaf or an unknown id is a
    /// silent no-op (stale UI state, not programmer error).
    ///
    /// Returns whether the path changed.
    pub fn drill_into(&mut self, side: Side, tree: &HierarchyTree, node_id: &NodeId) -> bool {
        let step = {
            let visible = self.visible_nodes(side, tree);
            let Some(node) = visible.into_iter().find(|node| node.id() == node_id) else {
                return false;
            };
            if node.is_leaf() {
                return false;
            }
            DrillStep::new(node.id().clone(), node.name())
        };
        self.path_mut(side).push(step);
        true
    }

    /// Keeps path entries `[0..=keep]`; `None` clears the path entirely
    /// (return to root level).
    pub fn truncate(&mut self, side: Side, keep: Option<usize>) {
        let path = self.path_mut(side);
        match keep {
            None => path.clear(),
            Some(index) => path.truncate(index.saturating_add(1)),
        }
    }

    /// Pops one step; no-op at root level.
    pub fn go_back(&mut self, side: Side) {
        self.path_mut(side).pop();
    }

    /// Clears both paths.
    pub fn reset(&mut self) {
        self.source_path.clear();
        self.destination_path.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{HierarchyNavigator, Side};
    use crate::model::fixtures::{area_tree, medicine_tree};
    use crate::model::NodeId;

    fn id(value: &str) -> NodeId {
        NodeId::new(value).expect("node id")
    }

    fn names(nodes: &[&crate::model::HierarchyNode]) -> Vec<String> {
        nodes.iter().map(|node| node.name().to_owned()).collect()
    }

    #[test]
    fn root_level_shows_roots_in_order() {
        let tree = medicine_tree();
        let nav = HierarchyNavigator::new();
        let visible = nav.visible_nodes(Side::Source, &tree);
        assert_eq!(names(&visible), vec!["Antibiotics", "Analgesics"]);
    }

    #[test]
    fn drill_into_descends_one_level() {
        let tree = medicine_tree();
        let mut nav = HierarchyNavigator::new();
        assert!(nav.drill_into(Side::Source, &tree, &id("antibiotics")));
        let visible = nav.visible_nodes(Side::Source, &tree);
        assert_eq!(names(&visible), vec!["Penicillins", "Macrolides"]);
        assert_eq!(nav.depth(Side::Source), 1);
    }

    #[test]
    fn drill_into_leaf_is_a_no_op() {
        let tree = medicine_tree();
        let mut nav = HierarchyNavigator::new();
        assert!(!nav.drill_into(Side::Source, &tree, &id("analgesics")));
        assert!(nav.at_root(Side::Source));

        nav.drill_into(Side::Source, &tree, &id("antibiotics"));
        assert!(!nav.drill_into(Side::Source, &tree, &id("penicillins")));
        assert_eq!(nav.depth(Side::Source), 1);
    }

    #[test]
    fn drill_into_unknown_id_is_a_no_op() {
        let tree = medicine_tree();
        let mut nav = HierarchyNavigator::new();
        assert!(!nav.drill_into(Side::Source, &tree, &id("vaccines")));
        assert!(nav.at_root(Side::Source));
    }

    #[test]
    fn drill_into_icu_shows_its_sub_areas() {
        let tree = area_tree();
        let mut nav = HierarchyNavigator::new();
        nav.drill_into(Side::Destination, &tree, &id("icu"));
        let visible = nav.visible_nodes(Side::Destination, &tree);
        assert_eq!(names(&visible), vec!["ICU North", "ICU South"]);
    }

    #[test]
    fn path_resolving_to_a_leaf_yields_the_leaf_itself() {
        // Data refresh can flatten a drilled-into node down to a leaf;
        // the leaf then behaves as its own level.
        use crate::model::{HierarchyNode, HierarchyTree};

        let before = area_tree();
        let mut nav = HierarchyNavigator::new();
        nav.drill_into(Side::Destination, &before, &id("icu"));

        let after = HierarchyTree::new(vec![HierarchyNode::new_with(
            id("icu"),
            "Intensive Care",
            150.0,
            Vec::new(),
        )]);
        let visible = nav.visible_nodes(Side::Destination, &after);
        assert_eq!(names(&visible), vec!["Intensive Care"]);
    }

    #[test]
    fn stale_path_yields_empty_sequence() {
        let medicine = medicine_tree();
        let mut nav = HierarchyNavigator::new();
        nav.drill_into(Side::Source, &medicine, &id("antibiotics"));

        // Tree swap: the drilled id no longer resolves.
        let areas = area_tree();
        assert!(nav.visible_nodes(Side::Source, &areas).is_empty());
    }

    #[test]
    fn truncate_none_equals_reset_for_that_side() {
        let medicine = medicine_tree();
        let areas = area_tree();
        let mut nav = HierarchyNavigator::new();
        nav.drill_into(Side::Source, &medicine, &id("antibiotics"));
        nav.drill_into(Side::Destination, &areas, &id("icu"));

        nav.truncate(Side::Source, None);
        assert!(nav.at_root(Side::Source));
        assert_eq!(nav.depth(Side::Destination), 1);
    }

    #[test]
    fn truncate_keeps_entries_through_index() {
        let areas = area_tree();
        let mut nav = HierarchyNavigator::new();
        nav.drill_into(Side::Destination, &areas, &id("icu"));
        nav.truncate(Side::Destination, Some(0));
        assert_eq!(nav.depth(Side::Destination), 1);
        assert_eq!(nav.path(Side::Destination)[0].node_name(), "Intensive Care");
    }

    #[test]
    fn go_back_pops_one_step_and_is_safe_at_root() {
        let medicine = medicine_tree();
        let mut nav = HierarchyNavigator::new();
        nav.drill_into(Side::Source, &medicine, &id("antibiotics"));
        nav.go_back(Side::Source);
        assert!(nav.at_root(Side::Source));
        nav.go_back(Side::Source);
        assert!(nav.at_root(Side::Source));
    }

    #[test]
    fn reset_clears_both_sides() {
        let medicine = medicine_tree();
        let areas = area_tree();
        let mut nav = HierarchyNavigator::new();
        nav.drill_into(Side::Source, &medicine, &id("antibiotics"));
        nav.drill_into(Side::Destination, &areas, &id("icu"));
        nav.reset();
        assert!(nav.at_root(Side::Source));
        assert!(nav.at_root(Side::Destination));
    }
}
