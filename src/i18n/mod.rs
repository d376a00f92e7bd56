// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Translation files are embedded from `assets/i18n/` at build time.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, or system settings
//! - Placeable arguments (prices, quantities) through [`fluent::I18n::tr_with_args`]
//! - Fallback to `en-US` when no requested locale is available

pub mod fluent;
