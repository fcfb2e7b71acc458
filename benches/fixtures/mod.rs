// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oceanid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oceanid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use oceanid::model::{FlowRecord, HierarchyNode, HierarchyTree, NodeId};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    MediumDense,
    Large,
}

impl Case {
    fn sources(self) -> usize {
        match self {
            Case::Small => 4,
            Case::MediumDense => 24,
            Case::Large => 120,
        }
    }

    fn destinations(self) -> usize {
        match self {
            Case::Small => 3,
            Case::MediumDense => 12,
            Case::Large => 40,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Case::Small => "small",
            Case::MediumDense => "medium_dense",
            Case::Large => "large",
        }
    }
}

fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

pub fn source_tree(case: Case) -> HierarchyTree {
    let roots = (0..case.sources())
        .map(|index| {
            HierarchyNode::new_with(
                nid(&format!("src-{index}")),
                format!("Category {index}"),
                (index + 1) as f64 * 10.0,
                Vec::new(),
            )
        })
        .collect();
    HierarchyTree::new(roots)
}

pub fn destination_tree(case: Case) -> HierarchyTree {
    let roots = (0..case.destinations())
        .map(|index| {
            HierarchyNode::new_with(
                nid(&format!("dst-{index}")),
                format!("Area {index}"),
                (index + 1) as f64 * 10.0,
                Vec::new(),
            )
        })
        .collect();
    HierarchyTree::new(roots)
}

/// One record per (source, destination) pair, dense bipartite.
pub fn flow_records(case: Case) -> Vec<FlowRecord> {
    let mut records = Vec::with_capacity(case.sources() * case.destinations());
    for s in 0..case.sources() {
        for d in 0..case.destinations() {
            records.push(FlowRecord::new(
                nid(&format!("src-{s}")),
                nid(&format!("dst-{d}")),
                ((s * 7 + d * 3) % 50 + 1) as f64,
                if (s + d) % 2 == 0 { "fast" } else { "slow" },
                85.0 + ((s + d) % 13) as f64,
            ));
        }
    }
    records
}
