// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oceanid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oceanid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::flow::FlowRecord;
use super::hierarchy::{FlowAttr, HierarchyNode, HierarchyTree};
use super::ids::NodeId;

fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

/// Source side: two medicine categories, one of them two levels deep.
///
/// ```text
/// antibiotics (100) -> { penicillins (60), macrolides (40) }
/// analgesics  (50)
/// ```
pub(crate) fn medicine_tree() -> HierarchyTree {
    let mut penicillins = HierarchyNode::new_with(nid("penicillins"), "Penicillins", 60.0, Vec::new());
    penicillins.set_flow_by_destination(
        [
            (nid("icu"), FlowAttr::new(35.0, "fast")),
            (nid("wards"), FlowAttr::new(25.0, "medium")),
        ]
        .into_iter()
        .collect::<BTreeMap<_, _>>(),
    );
    penicillins.set_qualitative_tag(Some("fast"));

    let mut macrolides = HierarchyNode::new_with(nid("macrolides"), "Macrolides", 40.0, Vec::new());
    macrolides.set_flow_by_destination(
        [(nid("icu"), FlowAttr::new(40.0, "slow"))]
            .into_iter()
            .collect::<BTreeMap<_, _>>(),
    );
    macrolides.set_qualitative_tag(Some("slow"));

    let mut antibiotics = HierarchyNode::new_with(
        nid("antibiotics"),
        "Antibiotics",
        100.0,
        vec![penicillins, macrolides],
    );
    antibiotics.set_connected_destinations([nid("icu"), nid("wards")].into_iter().collect());
    antibiotics.set_flow_by_destination(
        [
            (nid("icu"), FlowAttr::new(60.0, "fast")),
            (nid("wards"), FlowAttr::new(40.0, "medium")),
        ]
        .into_iter()
        .collect::<BTreeMap<_, _>>(),
    );

    let mut analgesics = HierarchyNode::new_with(nid("analgesics"), "Analgesics", 50.0, Vec::new());
    analgesics.set_connected_destinations([nid("icu")].into_iter().collect());
    analgesics.set_flow_by_destination(
        [(nid("icu"), FlowAttr::new(50.0, "medium"))]
            .into_iter()
            .collect::<BTreeMap<_, _>>(),
    );

    HierarchyTree::new(vec![antibiotics, analgesics])
}

/// Destination side: two hospital areas, the ICU one level deep.
pub(crate) fn area_tree() -> HierarchyTree {
    let icu_children = vec![
        HierarchyNode::new_with(nid("icu-north"), "ICU North", 70.0, Vec::new()),
        HierarchyNode::new_with(nid("icu-south"), "ICU South", 80.0, Vec::new()),
    ];
    let icu = HierarchyNode::new_with(nid("icu"), "Intensive Care", 150.0, icu_children);
    let wards = HierarchyNode::new_with(nid("wards"), "General Wards", 40.0, Vec::new());
    HierarchyTree::new(vec![icu, wards])
}

/// Authoritative rows matching the root level of both fixture trees.
pub(crate) fn root_flow_records() -> Vec<FlowRecord> {
    vec![
        FlowRecord::new(nid("antibiotics"), nid("icu"), 60.0, "fast", 92.0),
        FlowRecord::new(nid("antibiotics"), nid("wards"), 40.0, "medium", 88.0),
        FlowRecord::new(nid("analgesics"), nid("icu"), 50.0, "medium", 90.0),
    ]
}
