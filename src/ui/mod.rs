// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`compare`] - Photo acquisition and the before/after reveal view
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (action button)
//! - [`widgets`] - Custom Iced widgets (cropped image)
//! - [`styles`] - Centralized styling (buttons, containers, slider)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod compare;
pub mod components;
pub mod design_tokens;
pub mod styles;
pub mod theming;
pub mod widgets;
