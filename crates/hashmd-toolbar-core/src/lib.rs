//! hashmd-toolbar-core: Toolbar logic for the hashmd editor without framework dependencies.
//!
//! This crate provides:
//! - `Action` / `Handler` - toolbar buttons and their click or dropdown behaviour
//! - `Toolbar` - right-action derivation and the left/right view model
//! - `ToolbarEvent` / `ToolbarHost` - typed notifications raised to the hosting editor
//! - `compute_position` - dropdown placement with flip and shift
//! - `DropdownTracker` - hover sessions guarding late position results
//! - `Locale` / `ToolbarConfig` - strings and settings, loadable from JSON

pub mod action;
pub mod config;
pub mod context;
pub mod error;
pub mod event;
pub mod hover;
pub mod icons;
pub mod locale;
pub mod position;
pub mod toolbar;

pub use action::{Action, ActionHandler, Callback, Dropdown, Handler, RightAction};
pub use config::{DEFAULT_SOURCE_URL, ToolbarConfig};
pub use context::EditorContext;
pub use error::{PositionError, ToolbarError};
pub use event::{ActiveTab, Panel, Sidebar, Tab, ToolbarEvent, ToolbarHost};
pub use hover::{DropdownTracker, HoverTicket, OFFSCREEN};
pub use locale::Locale;
pub use position::{Align, Placement, Point, Positioned, Rect, Side, Size, compute_position};
pub use smol_str::SmolStr;
pub use toolbar::{LeftIcon, LeftRegion, TabItem, Toolbar, ToolbarState, derive_right_actions};
