// SPDX-License-Identifier: MPL-2.0
//! User interface: toast overlay, gallery screen, styles, and design tokens.

pub mod design_tokens;
pub mod gallery;
pub mod styles;
pub mod theming;
pub mod toasts;
