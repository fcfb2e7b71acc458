// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oceanid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oceanid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Two read-only hierarchies (source categories, destination areas) plus
//! the flow records rendered between their currently visible levels.

pub mod flow;
pub mod hierarchy;
pub mod ids;

#[cfg(test)]
pub(crate) mod fixtures;

pub use flow::{Flow, FlowRecord};
pub use hierarchy::{FlowAttr, HierarchyNode, HierarchyTree};
pub use ids::{Id, IdError, NodeId};
