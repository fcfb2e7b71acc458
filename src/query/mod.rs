// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oceanid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oceanid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over the model.
//!
//! Queries derive the flow list rendered between the currently visible
//! levels; they never mutate trees or navigation state.

pub mod aggregate;
pub mod focus;

pub use aggregate::aggregate_flows;
pub use focus::FocusState;
