// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oceanid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oceanid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};

use smol_str::SmolStr;

use super::ids::NodeId;

/// Tolerance used when comparing rolled-up volumes against stored totals.
pub(crate) const VOLUME_EPSILON: f64 = 1e-6;

/// Per-destination flow attributes embedded on a source-side node.
///
/// Used as the fallback flow source when no authoritative flow record
/// list is supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowAttr {
    volume: f64,
    qualitative_tag: SmolStr,
}

impl FlowAttr {
    pub fn new(volume: f64, qualitative_tag: impl Into<SmolStr>) -> Self {
        Self {
            volume,
            qualitative_tag: qualitative_tag.into(),
        }
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn qualitative_tag(&self) -> &str {
        &self.qualitative_tag
    }
}

/// One entity at any level of either hierarchy.
///
/// The backend names the child collection by level (`subcategories`,
/// `types`, `brands`, `products`, `level2`, `level3`); semantically it is
/// always "the next level down, if any", so the model keeps a single
/// ordered `children` sequence and leaves level names to the payload
/// layer.
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyNode {
    id: NodeId,
    name: SmolStr,
    children: Vec<HierarchyNode>,
    connected_destinations: BTreeSet<NodeId>,
    flow_by_destination: BTreeMap<NodeId, FlowAttr>,
    qualitative_tag: Option<SmolStr>,
    total_volume: f64,
}

impl HierarchyNode {
    pub fn new(id: NodeId, name: impl Into<SmolStr>) -> Self {
        Self {
            id,
            name: name.into(),
            children: Vec::new(),
            connected_destinations: BTreeSet::new(),
            flow_by_destination: BTreeMap::new(),
            qualitative_tag: None,
            total_volume: 0.0,
        }
    }

    pub fn new_with(
        id: NodeId,
        name: impl Into<SmolStr>,
        total_volume: f64,
        children: Vec<HierarchyNode>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            children,
            connected_destinations: BTreeSet::new(),
            flow_by_destination: BTreeMap::new(),
            qualitative_tag: None,
            total_volume,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[HierarchyNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child(&self, child_id: &NodeId) -> Option<&HierarchyNode> {
        self.children.iter().find(|child| child.id() == child_id)
    }

    pub fn connected_destinations(&self) -> &BTreeSet<NodeId> {
        &self.connected_destinations
    }

    pub fn set_connected_destinations(&mut self, destinations: BTreeSet<NodeId>) {
        self.connected_destinations = destinations;
    }

    pub fn flow_by_destination(&self) -> &BTreeMap<NodeId, FlowAttr> {
        &self.flow_by_destination
    }

    pub fn set_flow_by_destination(&mut self, flows: BTreeMap<NodeId, FlowAttr>) {
        self.flow_by_destination = flows;
    }

    pub fn qualitative_tag(&self) -> Option<&str> {
        self.qualitative_tag.as_deref()
    }

    pub fn set_qualitative_tag<T: Into<SmolStr>>(&mut self, tag: Option<T>) {
        self.qualitative_tag = tag.map(Into::into);
    }

    pub fn total_volume(&self) -> f64 {
        self.total_volume
    }

    pub fn set_total_volume(&mut self, total_volume: f64) {
        self.total_volume = total_volume;
    }

    /// Sum of the direct children's totals; `None` for leaves.
    pub fn rolled_up_volume(&self) -> Option<f64> {
        if self.is_leaf() {
            return None;
        }
        Some(self.children.iter().map(HierarchyNode::total_volume).sum())
    }

    /// Checks the rollup invariant recursively: wherever children exist,
    /// `total_volume` equals the sum of the children's `total_volume`.
    pub fn rollup_consistent(&self) -> bool {
        match self.rolled_up_volume() {
            None => true,
            Some(sum) => {
                (sum - self.total_volume).abs() <= VOLUME_EPSILON
                    && self.children.iter().all(HierarchyNode::rollup_consistent)
            }
        }
    }
}

/// A read-only forest of hierarchy nodes.
///
/// The "root level" is the ordered root sequence; order is the render
/// order and is preserved from construction. The tree is immutable for
/// the lifetime of a view: navigation and aggregation only ever borrow
/// it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HierarchyTree {
    roots: Vec<HierarchyNode>,
}

impl HierarchyTree {
    pub fn new(roots: Vec<HierarchyNode>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[HierarchyNode] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn root(&self, root_id: &NodeId) -> Option<&HierarchyNode> {
        self.roots.iter().find(|root| root.id() == root_id)
    }

    /// Walks the child collections along `path`. Empty path resolves to
    /// `None` (there is no single root node, only the root level).
    /// Any unresolved step resolves to `None` as well; a stale path is
    /// "no data", not an error.
    pub fn resolve_path(&self, path: &[NodeId]) -> Option<&HierarchyNode> {
        let (first, rest) = path.split_first()?;
        let mut node = self.root(first)?;
        for step in rest {
            node = node.child(step)?;
        }
        Some(node)
    }

    pub fn rollup_consistent(&self) -> bool {
        self.roots.iter().all(HierarchyNode::rollup_consistent)
    }
}
