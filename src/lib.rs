// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oceanid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oceanid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Oceanid — hierarchical flow aggregation and proportional ribbon
//! layout for drill-down supply diagrams.
//!
//! The engine is synchronous and pure: the host feeds it already
//! resolved hierarchy/flow data, drives drill and focus transitions,
//! and reads back fresh node/flow/geometry snapshots on every event.
//! Rendering, styling and transport belong to the host.

pub mod layout;
pub mod metric;
pub mod model;
pub mod nav;
pub mod payload;
pub mod query;
pub mod view;
