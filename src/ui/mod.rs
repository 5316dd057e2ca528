// SPDX-License-Identifier: MPL-2.0
//! Shared UI building blocks: design tokens consumed by the toast widget
//! and the demo host views.

pub mod design_tokens;
