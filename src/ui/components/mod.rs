// SPDX-License-Identifier: MPL-2.0
//! Reusable drawing components shared across screens.

pub mod checkerboard;
