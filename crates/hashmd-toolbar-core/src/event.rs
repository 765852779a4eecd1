//! View-state enums and the notifications the toolbar raises to its host.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An auxiliary panel beside the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    Toc,
    Help,
}

impl Panel {
    pub fn as_str(self) -> &'static str {
        match self {
            Panel::Toc => "toc",
            Panel::Help => "help",
        }
    }
}

/// Which auxiliary panel is currently open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sidebar {
    #[default]
    Closed,
    Toc,
    Help,
}

impl Sidebar {
    pub fn is_open(self, panel: Panel) -> bool {
        matches!(
            (self, panel),
            (Sidebar::Toc, Panel::Toc) | (Sidebar::Help, Panel::Help)
        )
    }
}

impl From<Panel> for Sidebar {
    fn from(panel: Panel) -> Self {
        match panel {
            Panel::Toc => Sidebar::Toc,
            Panel::Help => Sidebar::Help,
        }
    }
}

/// A single-pane editor view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Write,
    Preview,
}

impl Tab {
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Write => "write",
            Tab::Preview => "preview",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Left-region display mode.
///
/// `Icon` is split mode: formatting icons on the left, write and preview side
/// by side. `Write` and `Preview` show one pane with a tab switcher instead.
/// The host owns this value; the toolbar only reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveTab {
    #[default]
    Icon,
    Write,
    Preview,
}

impl ActiveTab {
    pub fn is_split(self) -> bool {
        self == ActiveTab::Icon
    }

    pub fn is(self, tab: Tab) -> bool {
        self == ActiveTab::from(tab)
    }
}

impl From<Tab> for ActiveTab {
    fn from(tab: Tab) -> Self {
        match tab {
            Tab::Write => ActiveTab::Write,
            Tab::Preview => ActiveTab::Preview,
        }
    }
}

/// A request raised by the toolbar. The host decides whether to honour it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarEvent {
    /// Open the named panel, or close it if already open.
    ToggleSidebar(Panel),
    /// Switch the single-pane view, or leave it if already active.
    Tab(Tab),
    ToggleFullscreen,
}

impl ToolbarEvent {
    pub fn name(self) -> &'static str {
        match self {
            ToolbarEvent::ToggleSidebar(_) => "toggle-sidebar",
            ToolbarEvent::Tab(_) => "tab",
            ToolbarEvent::ToggleFullscreen => "toggle-fullscreen",
        }
    }

    pub fn detail(self) -> Option<&'static str> {
        match self {
            ToolbarEvent::ToggleSidebar(panel) => Some(panel.as_str()),
            ToolbarEvent::Tab(tab) => Some(tab.as_str()),
            ToolbarEvent::ToggleFullscreen => None,
        }
    }
}

impl fmt::Display for ToolbarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.detail() {
            Some(detail) => write!(f, "{}({})", self.name(), detail),
            None => f.write_str(self.name()),
        }
    }
}

/// The hosting editor shell.
///
/// Implementations receive the toolbar's notifications and perform the one
/// side effect the toolbar cannot express as a notification: opening an
/// external link in a new browsing context.
pub trait ToolbarHost {
    fn notify(&self, event: ToolbarEvent);

    fn open_link(&self, url: &str);
}
