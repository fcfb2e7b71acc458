// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oceanid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oceanid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use smol_str::SmolStr;

use crate::model::{Flow, HierarchyNode, NodeId};
use crate::nav::Side;

/// Caller-supplied knobs for one concrete diagram.
///
/// Each renderer (bipartite chord, Sankey, ...) feeds the shared engine
/// its own span/padding/thickness parameters; the engine itself carries
/// no per-diagram defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutParams {
    span: f64,
    band_padding: f64,
    source_x: f64,
    target_x: f64,
    min_thickness: f64,
    max_thickness: f64,
    tag_thickness_scale: BTreeMap<SmolStr, f64>,
}

impl LayoutParams {
    pub fn new(span: f64, band_padding: f64, source_x: f64, target_x: f64) -> Self {
        Self {
            span,
            band_padding: band_padding.clamp(0.0, 0.95),
            source_x,
            target_x,
            min_thickness: 1.0,
            max_thickness: 24.0,
            tag_thickness_scale: BTreeMap::new(),
        }
    }

    pub fn with_thickness_range(mut self, min: f64, max: f64) -> Self {
        self.min_thickness = min;
        self.max_thickness = max.max(min);
        self
    }

    /// Qualitative multiplier applied on top of the proportional
    /// thickness, keyed by the flow's tag (e.g. over-consumption 1.5,
    /// under-consumption 0.5). Unknown tags scale by 1.0.
    pub fn with_tag_thickness_scale(
        mut self,
        scale: impl IntoIterator<Item = (SmolStr, f64)>,
    ) -> Self {
        self.tag_thickness_scale = scale.into_iter().collect();
        self
    }

    pub fn span(&self) -> f64 {
        self.span
    }

    pub fn band_padding(&self) -> f64 {
        self.band_padding
    }

    pub fn source_x(&self) -> f64 {
        self.source_x
    }

    pub fn target_x(&self) -> f64 {
        self.target_x
    }

    pub fn min_thickness(&self) -> f64 {
        self.min_thickness
    }

    pub fn max_thickness(&self) -> f64 {
        self.max_thickness
    }

    fn tag_scale(&self, tag: &str) -> f64 {
        self.tag_thickness_scale.get(tag).copied().unwrap_or(1.0)
    }
}

/// An absolute point in the diagram's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

/// The fixed-height rectangle assigned to one visible node.
#[derive(Debug, Clone, PartialEq)]
pub struct BandRect {
    node_id: NodeId,
    side: Side,
    x: f64,
    y: f64,
    height: f64,
}

impl BandRect {
    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

/// One flow's fractional sub-range of its owning node's band.
///
/// For a fixed node, the segments of all flows touching it partition
/// `[0, 1]` contiguously in the aggregator's flow order: no gap, no
/// overlap, last `end` exactly `1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct BandSegment {
    owner_node_id: NodeId,
    side: Side,
    start: f64,
    end: f64,
}

impl BandSegment {
    pub fn owner_node_id(&self) -> &NodeId {
        &self.owner_node_id
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }
}

/// Anchor and control points of one ribbon's horizontal S-curve.
///
/// Four anchors (segment boundaries on each band edge) plus two cubic
/// control points at the horizontal midpoint, vertically aligned with
/// each endpoint's segment center. A geometry contract, not a drawing
/// instruction.
#[derive(Debug, Clone, PartialEq)]
pub struct RibbonPath {
    source_top: Point,
    source_bottom: Point,
    target_top: Point,
    target_bottom: Point,
    control_source: Point,
    control_target: Point,
}

impl RibbonPath {
    pub fn source_top(&self) -> Point {
        self.source_top
    }

    pub fn source_bottom(&self) -> Point {
        self.source_bottom
    }

    pub fn target_top(&self) -> Point {
        self.target_top
    }

    pub fn target_bottom(&self) -> Point {
        self.target_bottom
    }

    pub fn control_source(&self) -> Point {
        self.control_source
    }

    pub fn control_target(&self) -> Point {
        self.control_target
    }
}

/// One flow with its computed geometry attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Ribbon {
    flow: Flow,
    thickness: f64,
    source_segment: BandSegment,
    target_segment: BandSegment,
    path: RibbonPath,
}

impl Ribbon {
    pub fn flow(&self) -> &Flow {
        &self.flow
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn source_segment(&self) -> &BandSegment {
        &self.source_segment
    }

    pub fn target_segment(&self) -> &BandSegment {
        &self.target_segment
    }

    pub fn path(&self) -> &RibbonPath {
        &self.path
    }
}

/// The full geometry snapshot for one render pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RibbonLayout {
    source_bands: Vec<BandRect>,
    destination_bands: Vec<BandRect>,
    ribbons: Vec<Ribbon>,
}

impl RibbonLayout {
    pub fn source_bands(&self) -> &[BandRect] {
        &self.source_bands
    }

    pub fn destination_bands(&self) -> &[BandRect] {
        &self.destination_bands
    }

    pub fn ribbons(&self) -> &[Ribbon] {
        &self.ribbons
    }

    pub fn is_empty(&self) -> bool {
        self.source_bands.is_empty() && self.destination_bands.is_empty()
    }

    pub fn band(&self, side: Side, node_id: &NodeId) -> Option<&BandRect> {
        let bands = match side {
            Side::Source => &self.source_bands,
            Side::Destination => &self.destination_bands,
        };
        bands.iter().find(|band| band.node_id() == node_id)
    }

    /// All segments on `side` owned by `node_id`, in flow order.
    pub fn segments_for(&self, side: Side, node_id: &NodeId) -> Vec<&BandSegment> {
        self.ribbons
            .iter()
            .map(|ribbon| match side {
                Side::Source => ribbon.source_segment(),
                Side::Destination => ribbon.target_segment(),
            })
            .filter(|segment| segment.owner_node_id() == node_id)
            .collect()
    }
}

/// Computes the proportional geometry for the given visible node
/// sequences and flow list.
///
/// Pure function of its inputs: feed it the currently visible sets
/// (after any focus restriction) and the matching aggregated flows.
/// Nodes without touching flows keep their band and simply have no
/// ribbons; empty inputs yield an empty layout. Never panics.
pub fn layout_ribbons(
    visible_sources: &[&HierarchyNode],
    visible_destinations: &[&HierarchyNode],
    flows: &[Flow],
    params: &LayoutParams,
) -> RibbonLayout {
    let source_bands = band_scale(visible_sources, Side::Source, params.source_x(), params);
    let destination_bands = band_scale(
        visible_destinations,
        Side::Destination,
        params.target_x(),
        params,
    );

    // Flows citing nodes outside the visible sets reflect a drill-level
    // mismatch; they are dropped before any totals are taken so they
    // cannot skew the band partitions.
    let placeable: Vec<(&Flow, &BandRect, &BandRect)> = flows
        .iter()
        .filter_map(|flow| {
            let source_band = source_bands
                .iter()
                .find(|band| band.node_id() == flow.source_id())?;
            let target_band = destination_bands
                .iter()
                .find(|band| band.node_id() == flow.target_id())?;
            Some((flow, source_band, target_band))
        })
        .collect();

    let max_quantity = placeable
        .iter()
        .map(|(flow, _, _)| flow.quantity())
        .fold(0.0_f64, f64::max)
        .max(f64::MIN_POSITIVE);

    // Single pass: per-node totals first, then a running cursor per node
    // in flow order partitions each band without re-filtering per node.
    let mut source_cursors: BTreeMap<&NodeId, PartitionCursor> = BTreeMap::new();
    let mut target_cursors: BTreeMap<&NodeId, PartitionCursor> = BTreeMap::new();
    for (flow, _, _) in &placeable {
        source_cursors
            .entry(flow.source_id())
            .or_insert_with(PartitionCursor::empty)
            .add(flow.quantity());
        target_cursors
            .entry(flow.target_id())
            .or_insert_with(PartitionCursor::empty)
            .add(flow.quantity());
    }

    let mut ribbons = Vec::with_capacity(placeable.len());
    for (flow, source_band, target_band) in placeable {
        let source_segment = source_cursors
            .get_mut(flow.source_id())
            .expect("cursor seeded above")
            .next_segment(flow.source_id().clone(), Side::Source, flow.quantity());
        let target_segment = target_cursors
            .get_mut(flow.target_id())
            .expect("cursor seeded above")
            .next_segment(flow.target_id().clone(), Side::Destination, flow.quantity());

        let scale = params.tag_scale(flow.qualitative_tag());
        let proportional = params.min_thickness()
            + (flow.quantity() / max_quantity)
                * (params.max_thickness() - params.min_thickness());
        let thickness = proportional * scale;

        let path = ribbon_path(source_band, &source_segment, target_band, &target_segment, params);

        ribbons.push(Ribbon {
            flow: flow.clone(),
            thickness,
            source_segment,
            target_segment,
            path,
        });
    }

    RibbonLayout {
        source_bands,
        destination_bands,
        ribbons,
    }
}

/// Classic band scale: the span is divided into N equal slots, each
/// band is its slot shrunk by the padding fraction and centered.
fn band_scale(
    nodes: &[&HierarchyNode],
    side: Side,
    x: f64,
    params: &LayoutParams,
) -> Vec<BandRect> {
    if nodes.is_empty() {
        return Vec::new();
    }
    let slot = params.span() / nodes.len() as f64;
    let height = slot * (1.0 - params.band_padding());
    let inset = (slot - height) / 2.0;

    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| BandRect {
            node_id: node.id().clone(),
            side,
            x,
            y: index as f64 * slot + inset,
            height,
        })
        .collect()
}

/// Walks a node's band in flow order, handing out contiguous fractional
/// sub-ranges. The final segment's `end` is forced to exactly `1.0` to
/// absorb floating-point drift; a zero total splits evenly.
#[derive(Debug)]
struct PartitionCursor {
    total: f64,
    remaining: usize,
    count: usize,
    cursor: f64,
}

impl PartitionCursor {
    fn empty() -> Self {
        Self {
            total: 0.0,
            remaining: 0,
            count: 0,
            cursor: 0.0,
        }
    }

    fn add(&mut self, quantity: f64) {
        self.total += quantity;
        self.count += 1;
        self.remaining += 1;
    }

    fn next_segment(&mut self, owner_node_id: NodeId, side: Side, quantity: f64) -> BandSegment {
        let share = if self.total > 0.0 {
            quantity / self.total
        } else if self.count > 0 {
            1.0 / self.count as f64
        } else {
            1.0
        };

        let start = self.cursor;
        self.remaining = self.remaining.saturating_sub(1);
        let end = if self.remaining == 0 {
            1.0
        } else {
            (start + share).min(1.0)
        };
        self.cursor = end;

        BandSegment {
            owner_node_id,
            side,
            start,
            end,
        }
    }
}

fn ribbon_path(
    source_band: &BandRect,
    source_segment: &BandSegment,
    target_band: &BandRect,
    target_segment: &BandSegment,
    params: &LayoutParams,
) -> RibbonPath {
    let source_top_y = source_band.y() + source_segment.start() * source_band.height();
    let source_bottom_y = source_band.y() + source_segment.end() * source_band.height();
    let target_top_y = target_band.y() + target_segment.start() * target_band.height();
    let target_bottom_y = target_band.y() + target_segment.end() * target_band.height();

    let mid_x = (params.source_x() + params.target_x()) / 2.0;

    RibbonPath {
        source_top: Point::new(params.source_x(), source_top_y),
        source_bottom: Point::new(params.source_x(), source_bottom_y),
        target_top: Point::new(params.target_x(), target_top_y),
        target_bottom: Point::new(params.target_x(), target_bottom_y),
        control_source: Point::new(mid_x, (source_top_y + source_bottom_y) / 2.0),
        control_target: Point::new(mid_x, (target_top_y + target_bottom_y) / 2.0),
    }
}
