// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oceanid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oceanid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use crate::metric;
use crate::model::{Flow, FlowRecord, HierarchyNode, NodeId};

/// Builds the normalized flow list between the currently visible node
/// sequences.
///
/// Authoritative `records` are the preferred source: non-empty input is
/// filtered to rows whose endpoints are both visible. When no records
/// are supplied the flows are derived from each visible source node's
/// embedded per-destination attributes, keyed on the destination id or,
/// for a drilled-in destination side, on `destination_root` (the top
/// level ancestor the visible destinations share).
///
/// Rows referencing non-visible nodes and rows with `quantity <= 0` are
/// dropped silently. The result is always freshly allocated and ordered
/// by (source visible-index, destination visible-index, insertion
/// order); band partitioning downstream relies on exactly this order,
/// so changing it is a behavioral change.
pub fn aggregate_flows(
    visible_sources: &[&HierarchyNode],
    visible_destinations: &[&HierarchyNode],
    records: &[FlowRecord],
    destination_root: Option<&NodeId>,
) -> Vec<Flow> {
    if visible_sources.is_empty() || visible_destinations.is_empty() {
        return Vec::new();
    }

    let flows = if records.is_empty() {
        derive_from_nodes(visible_sources, visible_destinations, destination_root)
    } else {
        filter_records(visible_sources, visible_destinations, records)
    };

    flows
        .into_iter()
        .filter(|flow| flow.quantity() > 0.0)
        .collect()
}

fn visible_index<'a>(nodes: &'a [&'a HierarchyNode]) -> BTreeMap<&'a NodeId, usize> {
    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| (node.id(), index))
        .collect()
}

fn filter_records(
    visible_sources: &[&HierarchyNode],
    visible_destinations: &[&HierarchyNode],
    records: &[FlowRecord],
) -> Vec<Flow> {
    let source_index = visible_index(visible_sources);
    let destination_index = visible_index(visible_destinations);

    let mut keyed: Vec<(usize, usize, usize, Flow)> = Vec::new();
    for (insertion, record) in records.iter().enumerate() {
        let Some(&si) = source_index.get(record.source()) else {
            continue;
        };
        let Some(&di) = destination_index.get(record.target()) else {
            continue;
        };
        keyed.push((si, di, insertion, record.to_flow()));
    }

    keyed.sort_by(|a, b| (a.0, a.1, a.2).cmp(&(b.0, b.1, b.2)));
    keyed.into_iter().map(|(_, _, _, flow)| flow).collect()
}

fn derive_from_nodes(
    visible_sources: &[&HierarchyNode],
    visible_destinations: &[&HierarchyNode],
    destination_root: Option<&NodeId>,
) -> Vec<Flow> {
    // Source-major, destination-minor iteration already produces the
    // contract order, so no sort is needed on this path.
    let mut flows = Vec::new();
    for source in visible_sources {
        for destination in visible_destinations {
            let attr = source
                .flow_by_destination()
                .get(destination.id())
                .or_else(|| {
                    destination_root.and_then(|root| source.flow_by_destination().get(root))
                });
            let Some(attr) = attr else {
                continue;
            };
            let score = metric::performance_score(source.id(), destination.id());
            flows.push(Flow::new(
                source.id().clone(),
                destination.id().clone(),
                attr.volume(),
                attr.qualitative_tag(),
                score,
            ));
        }
    }
    flows
}
