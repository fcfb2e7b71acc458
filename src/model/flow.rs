// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oceanid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oceanid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;

use super::ids::NodeId;

/// A directed edge between a visible source node and a visible
/// destination node, ready to render.
///
/// Flows are recomputed from scratch on every drill or focus change and
/// never mutated in place; callers own the returned lists outright.
#[derive(Debug, Clone, PartialEq)]
pub struct Flow {
    source_id: NodeId,
    target_id: NodeId,
    quantity: f64,
    qualitative_tag: SmolStr,
    performance_score: f64,
    forecast_quantity: Option<f64>,
    forecast_share: Option<f64>,
}

impl Flow {
    pub fn new(
        source_id: NodeId,
        target_id: NodeId,
        quantity: f64,
        qualitative_tag: impl Into<SmolStr>,
        performance_score: f64,
    ) -> Self {
        Self {
            source_id,
            target_id,
            quantity,
            qualitative_tag: qualitative_tag.into(),
            performance_score,
            forecast_quantity: None,
            forecast_share: None,
        }
    }

    pub fn source_id(&self) -> &NodeId {
        &self.source_id
    }

    pub fn target_id(&self) -> &NodeId {
        &self.target_id
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn set_quantity(&mut self, quantity: f64) {
        self.quantity = quantity;
    }

    pub fn qualitative_tag(&self) -> &str {
        &self.qualitative_tag
    }

    pub fn performance_score(&self) -> f64 {
        self.performance_score
    }

    pub fn set_performance_score(&mut self, score: f64) {
        self.performance_score = score;
    }

    pub fn forecast_quantity(&self) -> Option<f64> {
        self.forecast_quantity
    }

    pub fn set_forecast_quantity(&mut self, quantity: Option<f64>) {
        self.forecast_quantity = quantity;
    }

    pub fn forecast_share(&self) -> Option<f64> {
        self.forecast_share
    }

    pub fn set_forecast_share(&mut self, share: Option<f64>) {
        self.forecast_share = share;
    }

    /// True when either endpoint is `node_id`.
    pub fn touches(&self, node_id: &NodeId) -> bool {
        &self.source_id == node_id || &self.target_id == node_id
    }
}

/// An authoritative flow row handed over by the backend layer.
///
/// Records are the preferred flow source; the `flow_by_destination`
/// fallback only runs when the record list is absent or empty. The host
/// applies any time-period rescaling before handing records over.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowRecord {
    source: NodeId,
    target: NodeId,
    quantity: f64,
    qualitative_tag: SmolStr,
    performance_score: f64,
    forecast_quantity: Option<f64>,
    forecast_share: Option<f64>,
}

impl FlowRecord {
    pub fn new(
        source: NodeId,
        target: NodeId,
        quantity: f64,
        qualitative_tag: impl Into<SmolStr>,
        performance_score: f64,
    ) -> Self {
        Self {
            source,
            target,
            quantity,
            qualitative_tag: qualitative_tag.into(),
            performance_score,
            forecast_quantity: None,
            forecast_share: None,
        }
    }

    pub fn new_with(
        source: NodeId,
        target: NodeId,
        quantity: f64,
        qualitative_tag: impl Into<SmolStr>,
        performance_score: f64,
        forecast_quantity: Option<f64>,
        forecast_share: Option<f64>,
    ) -> Self {
        Self {
            source,
            target,
            quantity,
            qualitative_tag: qualitative_tag.into(),
            performance_score,
            forecast_quantity,
            forecast_share,
        }
    }

    pub fn source(&self) -> &NodeId {
        &self.source
    }

    pub fn target(&self) -> &NodeId {
        &self.target
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn qualitative_tag(&self) -> &str {
        &self.qualitative_tag
    }

    pub fn performance_score(&self) -> f64 {
        self.performance_score
    }

    pub fn forecast_quantity(&self) -> Option<f64> {
        self.forecast_quantity
    }

    pub fn forecast_share(&self) -> Option<f64> {
        self.forecast_share
    }

    /// Materializes the record as a render flow, copying every attribute.
    pub fn to_flow(&self) -> Flow {
        let mut flow = Flow::new(
            self.source.clone(),
            self.target.clone(),
            self.quantity,
            self.qualitative_tag.clone(),
            self.performance_score,
        );
        flow.set_forecast_quantity(self.forecast_quantity);
        flow.set_forecast_share(self.forecast_share);
        flow
    }
}

#[cfg(test)]
mod tests {
    use super::{Flow, FlowRecord};
    use crate::model::NodeId;

    fn id(value: &str) -> NodeId {
        NodeId::new(value).expect("node id")
    }

    #[test]
    fn flow_touches_either_endpoint() {
        let flow = Flow::new(id("a"), id("x"), 60.0, "fast", 92.0);
        assert!(flow.touches(&id("a")));
        assert!(flow.touches(&id("x")));
        assert!(!flow.touches(&id("b")));
    }

    #[test]
    fn record_to_flow_copies_all_attributes() {
        let record = FlowRecord::new_with(
            id("a"),
            id("x"),
            60.0,
            "fast",
            92.0,
            Some(66.0),
            Some(0.25),
        );
        let flow = record.to_flow();
        assert_eq!(flow.source_id(), &id("a"));
        assert_eq!(flow.target_id(), &id("x"));
        assert_eq!(flow.quantity(), 60.0);
        assert_eq!(flow.qualitative_tag(), "fast");
        assert_eq!(flow.performance_score(), 92.0);
        assert_eq!(flow.forecast_quantity(), Some(66.0));
        assert_eq!(flow.forecast_share(), Some(0.25));
    }
}
