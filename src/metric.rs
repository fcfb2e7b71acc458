// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oceanid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oceanid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Deterministic fallback metrics.
//!
//! When authoritative per-item data is absent, derived attributes are
//! computed from the item id alone so the same id yields the same value
//! everywhere in the application, within one process and across
//! processes. Real data always wins; these are fallbacks only.

use crate::model::NodeId;

/// Folds the string's character codes into a 32-bit signed accumulator
/// via `acc = acc * 31 + code` with wraparound, then takes the absolute
/// value. Stable across runs; no seeding involved.
pub fn hash(s: &str) -> u32 {
    let mut acc: i32 = 0;
    for ch in s.chars() {
        acc = acc.wrapping_mul(31).wrapping_add(ch as i32);
    }
    acc.unsigned_abs()
}

/// Units on hand, in `[100, 549]`.
pub fn stock_level(id: &str) -> u32 {
    100 + hash(id) % 450
}

/// On-Time-In-Full percentage with one decimal place, in `[85.0, 97.9]`.
pub fn otif_percent(id: &str) -> f64 {
    85.0 + (hash(id) % 130) as f64 / 10.0
}

/// Delivery turnaround in hours, in `[1.5, 4.4]`.
pub fn turnaround_hours(id: &str) -> f64 {
    1.5 + (hash(id) % 30) as f64 / 10.0
}

/// OTIF fallback for a derived flow, keyed on the concatenated endpoint
/// ids so every (source, destination) pair scores consistently.
pub fn performance_score(source_id: &NodeId, target_id: &NodeId) -> f64 {
    let mut key = String::with_capacity(source_id.as_str().len() + target_id.as_str().len());
    key.push_str(source_id.as_str());
    key.push_str(target_id.as_str());
    otif_percent(&key)
}
