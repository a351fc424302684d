//! UI components and layouts.
//!
//! This module provides Leptos SSR components for rendering the application
//! shell, following ShadCN-UI design principles. The components are rendered
//! to HTML inside axum handlers; interactivity is wired with HTMX and
//! Alpine.js attributes plus the `<chat-stream>` Web Component.
//!
//! # Structure
//!
//! - [`app`]: Document shell and chat page composition
//! - [`components`]: Reusable ShadCN-style UI components
//! - [`chat`]: Chat-specific layout components

pub mod app;
pub mod chat;
pub mod components;
