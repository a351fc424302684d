//! ShadCN-style reusable UI components.
//!
//! This module provides a set of composable UI components inspired by
//! shadcn/ui, rendered via Leptos SSR.
//!
//! # Components
//!
//! - [`Button`]: Clickable button with variants
//! - [`Card`], [`CardContent`]: Card container
//! - [`Badge`]: Status badge/tag
//! - [`Dialog`], [`DialogHeader`], [`DialogTitle`]: Modal overlay
//! - [`icons`]: SVG icon components

mod badge;
mod button;
mod card;
mod dialog;
mod icons;

pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent};
pub use dialog::{Dialog, DialogHeader, DialogTitle};
pub use icons::*;
