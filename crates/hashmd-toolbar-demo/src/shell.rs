//! View state owned by the editor shell.

use hashmd_toolbar::{ActiveTab, Sidebar, ToolbarEvent};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewState {
    pub sidebar: Sidebar,
    pub fullscreen: bool,
    pub active_tab: ActiveTab,
}

impl ViewState {
    /// Apply a toolbar request. Requesting the open panel or the active tab
    /// again closes it.
    pub fn apply(&mut self, event: ToolbarEvent) {
        match event {
            ToolbarEvent::ToggleSidebar(panel) => {
                self.sidebar = if self.sidebar.is_open(panel) {
                    Sidebar::Closed
                } else {
                    panel.into()
                };
            }
            ToolbarEvent::Tab(tab) => {
                self.active_tab = if self.active_tab.is(tab) {
                    ActiveTab::Icon
                } else {
                    tab.into()
                };
            }
            ToolbarEvent::ToggleFullscreen => self.fullscreen = !self.fullscreen,
        }
        tracing::debug!(?event, state = ?self, "view state updated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashmd_toolbar::{Panel, Tab};

    #[test]
    fn test_sidebar_switches_then_closes() {
        let mut state = ViewState::default();
        state.apply(ToolbarEvent::ToggleSidebar(Panel::Help));
        assert_eq!(state.sidebar, Sidebar::Help);
        state.apply(ToolbarEvent::ToggleSidebar(Panel::Toc));
        assert_eq!(state.sidebar, Sidebar::Toc);
        state.apply(ToolbarEvent::ToggleSidebar(Panel::Toc));
        assert_eq!(state.sidebar, Sidebar::Closed);
    }

    #[test]
    fn test_tab_returns_to_split() {
        let mut state = ViewState::default();
        state.apply(ToolbarEvent::Tab(Tab::Preview));
        assert_eq!(state.active_tab, ActiveTab::Preview);
        state.apply(ToolbarEvent::Tab(Tab::Write));
        assert_eq!(state.active_tab, ActiveTab::Write);
        state.apply(ToolbarEvent::Tab(Tab::Write));
        assert_eq!(state.active_tab, ActiveTab::Icon);
    }

    #[test]
    fn test_fullscreen_toggles() {
        let mut state = ViewState::default();
        state.apply(ToolbarEvent::ToggleFullscreen);
        assert!(state.fullscreen);
        state.apply(ToolbarEvent::ToggleFullscreen);
        assert!(!state.fullscreen);
    }
}
