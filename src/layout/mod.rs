// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oceanid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oceanid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Proportional geometry for bipartite ribbon diagrams.
//!
//! This module converts an aggregated flow list into concrete bands,
//! band partitions and ribbon curves; it knows nothing about drill or
//! focus state and must always be fed the currently visible sets.

pub mod ribbon;

pub use ribbon::{
    layout_ribbons, BandRect, BandSegment, LayoutParams, Point, Ribbon, RibbonLayout, RibbonPath,
};
