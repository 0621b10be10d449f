// SPDX-License-Identifier: MPL-2.0
//! `iced_compare` is a before/after photo comparison tool built with the Iced
//! GUI framework.
//!
//! Two photos are picked from disk or taken with the camera; the second one is
//! revealed over the first with a slider.

#![doc(html_root_url = "https://docs.rs/iced_compare/0.1.0")]

pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
