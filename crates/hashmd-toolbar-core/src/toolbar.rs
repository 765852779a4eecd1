//! Toolbar state, right-action derivation and the render view model.
//!
//! The toolbar has two regions separated by a flexible gap:
//!
//! - left: formatting icons in split mode, or a write/preview tab switcher
//! - right: built-in toggles (TOC, help, write-only, preview-only,
//!   fullscreen, source link) followed by host-supplied actions
//!
//! Everything here is recomputed from [`ToolbarState`] on each render. The
//! toolbar never mutates view state itself; it raises [`ToolbarEvent`]s
//! through a [`ToolbarHost`].

use std::rc::Rc;

use smol_str::SmolStr;

use crate::action::{Action, RightAction};
use crate::config::ToolbarConfig;
use crate::context::EditorContext;
use crate::event::{ActiveTab, Panel, Sidebar, Tab, ToolbarEvent, ToolbarHost};
use crate::hover::{DropdownTracker, HoverTicket};
use crate::icons;
use crate::locale::Locale;

/// Inputs for one render, owned by the host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolbarState {
    /// Left-side actions, shown only in split mode.
    pub actions: Vec<Action>,
    /// Appended verbatim after the built-in right actions.
    pub right_afferent_actions: Vec<Action>,
    pub sidebar: Sidebar,
    pub fullscreen: bool,
    pub active_tab: ActiveTab,
    pub locale: Locale,
    pub context: EditorContext,
}

fn emit(host: &Rc<dyn ToolbarHost>, event: ToolbarEvent) -> impl Fn(&EditorContext) + 'static {
    let host = host.clone();
    move |_| {
        tracing::debug!(event = event.name(), detail = event.detail(), "toolbar event");
        host.notify(event);
    }
}

fn sidebar_toggle(
    state: &ToolbarState,
    host: &Rc<dyn ToolbarHost>,
    panel: Panel,
    open_title: &SmolStr,
    close_title: &SmolStr,
    icon: &'static str,
) -> RightAction {
    let active = state.sidebar.is_open(panel);
    let title = if active { close_title } else { open_title };
    RightAction {
        action: Action::new(title.clone(), icon).with_click(emit(host, ToolbarEvent::ToggleSidebar(panel))),
        active,
        hidden: false,
    }
}

fn tab_toggle(
    state: &ToolbarState,
    host: &Rc<dyn ToolbarHost>,
    tab: Tab,
    enter_title: &SmolStr,
    exit_title: &SmolStr,
    icon: &'static str,
) -> RightAction {
    let active = state.active_tab.is(tab);
    let title = if active { exit_title } else { enter_title };
    RightAction {
        action: Action::new(title.clone(), icon).with_click(emit(host, ToolbarEvent::Tab(tab))),
        active,
        hidden: !state.active_tab.is_split(),
    }
}

/// Build the right-side action list.
///
/// Order is fixed: TOC toggle, help toggle, write-only, preview-only,
/// fullscreen, source link, then `state.right_afferent_actions` unchanged.
pub fn derive_right_actions(
    state: &ToolbarState,
    config: &ToolbarConfig,
    host: &Rc<dyn ToolbarHost>,
) -> Vec<RightAction> {
    let locale = &state.locale;

    let fullscreen = {
        let (title, icon) = if state.fullscreen {
            (&locale.exit_fullscreen, icons::EXIT_FULLSCREEN)
        } else {
            (&locale.fullscreen, icons::FULLSCREEN)
        };
        Action::new(title.clone(), icon).with_click(emit(host, ToolbarEvent::ToggleFullscreen))
    };

    let source = {
        let host = host.clone();
        let url = config.source_url.clone();
        Action::new(locale.source.clone(), icons::SOURCE).with_click(move |_| {
            tracing::debug!(%url, "opening source link");
            host.open_link(&url);
        })
    };

    let mut actions = Vec::with_capacity(6 + state.right_afferent_actions.len());
    actions.push(sidebar_toggle(
        state,
        host,
        Panel::Toc,
        &locale.toc,
        &locale.close_toc,
        icons::TOC,
    ));
    actions.push(sidebar_toggle(
        state,
        host,
        Panel::Help,
        &locale.help,
        &locale.close_help,
        icons::HELP,
    ));
    actions.push(tab_toggle(
        state,
        host,
        Tab::Write,
        &locale.write_only,
        &locale.exit_write_only,
        icons::WRITE,
    ));
    actions.push(tab_toggle(
        state,
        host,
        Tab::Preview,
        &locale.preview_only,
        &locale.exit_preview_only,
        icons::PREVIEW,
    ));
    actions.push(fullscreen.into());
    actions.push(source.into());
    actions.extend(state.right_afferent_actions.iter().cloned().map(RightAction::from));
    actions
}

/// One label of the write/preview switcher.
#[derive(Debug, Clone, PartialEq)]
pub struct TabItem {
    pub tab: Tab,
    pub label: SmolStr,
    pub active: bool,
}

/// An icon in the left region.
///
/// Clicks only reach `Action` handlers. Pointer enter and leave only drive
/// the hover session of a `Dropdown` handler; an `Action` handler's own hover
/// callbacks are never invoked from the left region.
#[derive(Debug, Clone, PartialEq)]
pub struct LeftIcon {
    action: Action,
}

impl LeftIcon {
    pub fn action(&self) -> &Action {
        &self.action
    }

    pub fn is_dropdown(&self) -> bool {
        self.action.dropdown().is_some()
    }

    /// A fresh hover session for a dropdown icon, `None` otherwise.
    pub fn dropdown_tracker(&self) -> Option<DropdownTracker> {
        self.is_dropdown().then(DropdownTracker::default)
    }

    pub fn click(&self, ctx: &EditorContext) -> bool {
        self.action.click(ctx)
    }

    /// Start a hover session. Returns the ticket a position result must
    /// present, or `None` when the icon has no dropdown.
    pub fn enter(&self, tracker: &mut DropdownTracker) -> Option<HoverTicket> {
        self.is_dropdown().then(|| tracker.enter())
    }

    /// End the hover session, parking the panel off-screen.
    pub fn leave(&self, tracker: &mut DropdownTracker) -> bool {
        if !self.is_dropdown() {
            return false;
        }
        tracker.leave();
        true
    }
}

/// What the left region shows.
#[derive(Debug, Clone, PartialEq)]
pub enum LeftRegion {
    /// Split mode: actions that have a handler, in order.
    Icons(Vec<LeftIcon>),
    /// Single-pane mode: write and preview labels.
    Tabs([TabItem; 2]),
}

/// A toolbar bound to one render's state.
#[derive(Clone)]
pub struct Toolbar {
    state: ToolbarState,
    config: ToolbarConfig,
    host: Rc<dyn ToolbarHost>,
    right_actions: Vec<RightAction>,
}

impl Toolbar {
    pub fn new(state: ToolbarState, config: ToolbarConfig, host: Rc<dyn ToolbarHost>) -> Self {
        let right_actions = derive_right_actions(&state, &config, &host);
        Self {
            state,
            config,
            host,
            right_actions,
        }
    }

    pub fn config(&self) -> &ToolbarConfig {
        &self.config
    }

    pub fn context(&self) -> &EditorContext {
        &self.state.context
    }

    /// The full derived list, hidden entries included.
    pub fn right_actions(&self) -> &[RightAction] {
        &self.right_actions
    }

    pub fn visible_right_actions(&self) -> impl Iterator<Item = &RightAction> {
        self.right_actions.iter().filter(|action| !action.hidden)
    }

    pub fn left_region(&self) -> LeftRegion {
        let active_tab = self.state.active_tab;
        if active_tab.is_split() {
            return LeftRegion::Icons(
                self.state
                    .actions
                    .iter()
                    .filter(|action| action.handler.is_some())
                    .map(|action| LeftIcon {
                        action: action.clone(),
                    })
                    .collect(),
            );
        }

        let locale = &self.state.locale;
        LeftRegion::Tabs([
            TabItem {
                tab: Tab::Write,
                label: locale.write.clone(),
                active: active_tab.is(Tab::Write),
            },
            TabItem {
                tab: Tab::Preview,
                label: locale.preview.clone(),
                active: active_tab.is(Tab::Preview),
            },
        ])
    }

    /// Raise a tab switch from the write/preview switcher.
    pub fn select_tab(&self, tab: Tab) {
        emit(&self.host, ToolbarEvent::Tab(tab))(&self.state.context);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<ToolbarEvent>>,
        links: RefCell<Vec<String>>,
    }

    impl ToolbarHost for Recorder {
        fn notify(&self, event: ToolbarEvent) {
            self.events.borrow_mut().push(event);
        }

        fn open_link(&self, url: &str) {
            self.links.borrow_mut().push(url.to_string());
        }
    }

    fn make_toolbar(state: ToolbarState) -> (Toolbar, Rc<Recorder>) {
        let recorder = Rc::new(Recorder::default());
        let host: Rc<dyn ToolbarHost> = recorder.clone();
        (Toolbar::new(state, ToolbarConfig::default(), host), recorder)
    }

    #[test]
    fn test_left_region_skips_actions_without_handler() {
        let state = ToolbarState {
            actions: vec![
                Action::new("Bold", "").with_click(|_| {}),
                Action::new("Placeholder", ""),
                Action::new("Heading", "").with_dropdown("Heading", vec![]),
            ],
            ..Default::default()
        };
        let (toolbar, _) = make_toolbar(state);

        let LeftRegion::Icons(icons) = toolbar.left_region() else {
            panic!("expected icons in split mode");
        };
        let titles: Vec<_> = icons.iter().map(|icon| icon.action().title.as_str()).collect();
        assert_eq!(titles, vec!["Bold", "Heading"]);
    }

    #[test]
    fn test_tabs_use_single_active_predicate() {
        for (active_tab, write, preview) in [
            (ActiveTab::Write, true, false),
            (ActiveTab::Preview, false, true),
        ] {
            let (toolbar, _) = make_toolbar(ToolbarState {
                active_tab,
                ..Default::default()
            });
            let LeftRegion::Tabs([w, p]) = toolbar.left_region() else {
                panic!("expected tabs outside split mode");
            };
            assert_eq!((w.tab, w.active), (Tab::Write, write));
            assert_eq!((p.tab, p.active), (Tab::Preview, preview));
            assert_eq!(w.label, "Write");
            assert_eq!(p.label, "Preview");
        }
    }

    #[test]
    fn test_select_tab_emits_event() {
        let (toolbar, recorder) = make_toolbar(ToolbarState {
            active_tab: ActiveTab::Write,
            ..Default::default()
        });
        toolbar.select_tab(Tab::Preview);
        assert_eq!(*recorder.events.borrow(), vec![ToolbarEvent::Tab(Tab::Preview)]);
    }

    #[test]
    fn test_source_link_opens_configured_url() {
        let recorder = Rc::new(Recorder::default());
        let host: Rc<dyn ToolbarHost> = recorder.clone();
        let config = ToolbarConfig {
            source_url: "https://example.com/src".into(),
            ..Default::default()
        };
        let toolbar = Toolbar::new(ToolbarState::default(), config, host);

        assert!(toolbar.right_actions()[5].action.click(toolbar.context()));
        assert_eq!(*recorder.links.borrow(), vec!["https://example.com/src".to_string()]);
        assert!(recorder.events.borrow().is_empty());
    }

    #[test]
    fn test_fullscreen_title_and_icon_follow_state() {
        let (toolbar, _) = make_toolbar(ToolbarState::default());
        assert!(!toolbar.right_actions()[4].active);
        assert_eq!(toolbar.right_actions()[4].action.title, "Fullscreen");

        let (toolbar, _) = make_toolbar(ToolbarState {
            fullscreen: true,
            ..Default::default()
        });
        assert_eq!(toolbar.right_actions()[4].action.title, "Exit fullscreen");
        assert_eq!(toolbar.right_actions()[4].action.icon, icons::EXIT_FULLSCREEN);
    }

    #[test]
    fn test_left_click_passes_toolbar_context() {
        let seen = Rc::new(RefCell::new(None));
        let sink = seen.clone();
        let action = Action::new("Bold", "").with_click(move |ctx| {
            *sink.borrow_mut() = ctx.downcast_ref::<&'static str>().copied();
        });
        let (toolbar, _) = make_toolbar(ToolbarState {
            actions: vec![action],
            context: EditorContext::new("editor-a"),
            ..Default::default()
        });
        let LeftRegion::Icons(icons) = toolbar.left_region() else {
            panic!("expected icons in split mode");
        };

        assert!(icons[0].click(toolbar.context()));
        assert_eq!(*seen.borrow(), Some("editor-a"));
    }

    #[test]
    fn test_left_action_icon_ignores_hover() {
        let fired = Rc::new(RefCell::new(false));
        let sink = fired.clone();
        let (toolbar, _) = make_toolbar(ToolbarState {
            actions: vec![Action::new("Bold", "").with_handler(
                crate::action::ActionHandler::new(|_| {})
                    .on_mouseenter(move |_| *sink.borrow_mut() = true),
            )],
            ..Default::default()
        });
        let LeftRegion::Icons(icons) = toolbar.left_region() else {
            panic!("expected icons in split mode");
        };
        let mut tracker = DropdownTracker::default();

        assert!(icons[0].dropdown_tracker().is_none());
        assert_eq!(icons[0].enter(&mut tracker), None);
        assert!(!icons[0].leave(&mut tracker));
        assert!(!*fired.borrow());
    }

    #[test]
    fn test_left_dropdown_click_is_noop() {
        let (toolbar, _) = make_toolbar(ToolbarState {
            actions: vec![Action::new("Heading", "").with_dropdown("Heading", vec![])],
            ..Default::default()
        });
        let LeftRegion::Icons(icons) = toolbar.left_region() else {
            panic!("expected icons in split mode");
        };
        assert!(icons[0].is_dropdown());
        assert!(!icons[0].click(toolbar.context()));
    }
}
