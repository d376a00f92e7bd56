// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles.

pub mod button;
