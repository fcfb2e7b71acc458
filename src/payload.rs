// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oceanid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oceanid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Backend JSON boundary.
//!
//! The backend delivers camelCase payloads whose child collections are
//! named by level (`subcategories`, `types`, `brands`, `products`,
//! `level2`, `level3`); all of them decode into the one `children`
//! sequence. Decoding validates ids and repairs missing `totalVolume`
//! by rolling up children, keeping the model's rollup invariant intact.
//! Rows with non-positive quantities survive decoding; they are dropped
//! later at aggregation time.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::model::{
    FlowAttr, FlowRecord, HierarchyNode, HierarchyTree, IdError, NodeId,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyNodePayload {
    pub id: String,
    pub name: String,
    #[serde(
        default,
        alias = "subcategories",
        alias = "types",
        alias = "brands",
        alias = "products",
        alias = "level2",
        alias = "level3"
    )]
    pub children: Vec<HierarchyNodePayload>,
    #[serde(default)]
    pub connected_destination_ids: Vec<String>,
    #[serde(default)]
    pub flow_by_destination: BTreeMap<String, FlowAttrPayload>,
    #[serde(default)]
    pub total_volume: Option<f64>,
    #[serde(default)]
    pub qualitative_tag: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowAttrPayload {
    pub volume: f64,
    pub qualitative_tag: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowRecordPayload {
    pub source: String,
    pub target: String,
    pub quantity: f64,
    pub qualitative_tag: String,
    pub performance_score: f64,
    #[serde(default)]
    pub forecast_quantity: Option<f64>,
    #[serde(default)]
    pub forecast_share: Option<f64>,
}

#[derive(Debug)]
pub enum PayloadError {
    Json(serde_json::Error),
    InvalidId { id: String, source: IdError },
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid payload json: {err}"),
            Self::InvalidId { id, source } => {
                write!(f, "invalid id {id:?} in payload: {source}")
            }
        }
    }
}

impl std::error::Error for PayloadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::InvalidId { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for PayloadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

fn node_id(value: &str) -> Result<NodeId, PayloadError> {
    NodeId::new(value).map_err(|source| PayloadError::InvalidId {
        id: value.to_owned(),
        source,
    })
}

impl HierarchyNodePayload {
    pub fn into_node(self) -> Result<HierarchyNode, PayloadError> {
        let id = node_id(&self.id)?;

        let children = self
            .children
            .into_iter()
            .map(HierarchyNodePayload::into_node)
            .collect::<Result<Vec<_>, _>>()?;

        let total_volume = match self.total_volume {
            Some(total) => total,
            // Missing totals are repaired from the children's rollup;
            // a leaf without a total stays at zero.
            None => children.iter().map(HierarchyNode::total_volume).sum(),
        };

        let mut node = HierarchyNode::new_with(id, self.name, total_volume, children);

        node.set_connected_destinations(
            self.connected_destination_ids
                .iter()
                .map(|value| node_id(value))
                .collect::<Result<_, _>>()?,
        );
        node.set_flow_by_destination(
            self.flow_by_destination
                .into_iter()
                .map(|(destination, attr)| {
                    Ok((
                        node_id(&destination)?,
                        FlowAttr::new(attr.volume, attr.qualitative_tag),
                    ))
                })
                .collect::<Result<_, PayloadError>>()?,
        );
        node.set_qualitative_tag(self.qualitative_tag);

        Ok(node)
    }
}

impl FlowRecordPayload {
    pub fn into_record(self) -> Result<FlowRecord, PayloadError> {
        Ok(FlowRecord::new_with(
            node_id(&self.source)?,
            node_id(&self.target)?,
            self.quantity,
            self.qualitative_tag,
            self.performance_score,
            self.forecast_quantity,
            self.forecast_share,
        ))
    }
}

/// Decodes a hierarchy payload (a JSON array of root nodes) into a tree.
pub fn decode_hierarchy(json: &str) -> Result<HierarchyTree, PayloadError> {
    let roots: Vec<HierarchyNodePayload> = serde_json::from_str(json)?;
    let roots = roots
        .into_iter()
        .map(HierarchyNodePayload::into_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HierarchyTree::new(roots))
}

/// Decodes the authoritative flow list.
pub fn decode_flow_records(json: &str) -> Result<Vec<FlowRecord>, PayloadError> {
    let rows: Vec<FlowRecordPayload> = serde_json::from_str(json)?;
    rows.into_iter().map(FlowRecordPayload::into_record).collect()
}
