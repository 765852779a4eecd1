//! Dioxus rendering of the hashmd editor toolbar.
//!
//! # Architecture
//!
//! - `component`: the `Toolbar` component and its right-hand buttons
//! - `dropdown`: left-hand icons, hover dropdown panels and their placement
//! - `host`: bridges toolbar notifications to an `EventHandler` prop
//! - `platform`: link opening, viewport size and element measurement
//!
//! # Re-exports
//!
//! This crate re-exports `hashmd-toolbar-core` for convenience, so consumers
//! only need to depend on `hashmd-toolbar`.

// Re-export core crate
pub use hashmd_toolbar_core;
pub use hashmd_toolbar_core::*;

pub mod component;
pub mod dropdown;
pub mod host;
pub mod platform;

pub use component::{Toolbar, ToolbarProps};
pub use dropdown::LeftActionButton;
pub use host::DioxusHost;
