//! Editor toolbar component.

use std::rc::Rc;

use dioxus::prelude::*;
use hashmd_toolbar_core::{
    Action, ActiveTab, EditorContext, LeftRegion, Locale, RightAction, Sidebar, Toolbar as ToolbarModel,
    ToolbarConfig, ToolbarEvent, ToolbarHost, ToolbarState,
};

use crate::dropdown::LeftActionButton;
use crate::host::DioxusHost;

const TOOLBAR_CSS: Asset = asset!("/assets/toolbar.css");

#[derive(Props, Clone, PartialEq)]
pub struct ToolbarProps {
    /// Formatting actions for the left region (split mode only)
    #[props(default)]
    pub actions: Vec<Action>,
    /// Extra actions appended after the built-in right actions
    #[props(default)]
    pub right_afferent_actions: Vec<Action>,
    #[props(default)]
    pub sidebar: Sidebar,
    #[props(default)]
    pub fullscreen: bool,
    /// Owned by the host, which should update it in response to `Tab` events
    #[props(default)]
    pub active_tab: ActiveTab,
    #[props(default)]
    pub locale: Locale,
    /// Passed verbatim to every action callback
    #[props(default)]
    pub context: EditorContext,
    #[props(default)]
    pub config: ToolbarConfig,
    /// Sidebar, tab and fullscreen requests
    pub on_event: EventHandler<ToolbarEvent>,
}

/// Editor toolbar: icon actions or write/preview tabs on the left, view
/// toggles and host actions on the right.
///
/// The component holds no view state. Every request is raised through
/// `on_event`, and the right-hand actions are re-derived from props on each
/// render.
#[component]
pub fn Toolbar(props: ToolbarProps) -> Element {
    let state = ToolbarState {
        actions: props.actions,
        right_afferent_actions: props.right_afferent_actions,
        sidebar: props.sidebar,
        fullscreen: props.fullscreen,
        active_tab: props.active_tab,
        locale: props.locale,
        context: props.context,
    };
    let host: Rc<dyn ToolbarHost> = Rc::new(DioxusHost::new(props.on_event));
    let toolbar = ToolbarModel::new(state, props.config, host);

    let context = toolbar.context().clone();
    let config = toolbar.config().clone();
    let left = match toolbar.left_region() {
        LeftRegion::Icons(icons) => rsx! {
            for (title, icon) in icons.into_iter().map(|icon| (icon.action().title.clone(), icon)) {
                LeftActionButton {
                    key: "{title}",
                    icon,
                    context: context.clone(),
                    config: config.clone(),
                }
            }
        },
        LeftRegion::Tabs(tabs) => rsx! {
            for item in tabs {
                div {
                    key: "{item.tab}",
                    class: if item.active { "tab active" } else { "tab" },
                    onclick: {
                        let toolbar = toolbar.clone();
                        move |_| toolbar.select_tab(item.tab)
                    },
                    "{item.label}"
                }
            }
        },
    };

    let right: Vec<RightAction> = toolbar.visible_right_actions().cloned().collect();

    rsx! {
        document::Link { rel: "stylesheet", href: TOOLBAR_CSS }
        div { class: "toolbar",
            {left}
            div { class: "gap" }
            for (index, item) in right.into_iter().enumerate() {
                RightActionButton { key: "{index}", item, context: context.clone() }
            }
        }
    }
}

#[component]
fn RightActionButton(item: RightAction, context: EditorContext) -> Element {
    let title = item.action.title.to_string();
    let icon = item.action.icon.to_string();
    let class = if item.active { "icon active" } else { "icon" };

    rsx! {
        div {
            class,
            title,
            onclick: move |_| {
                item.action.click(&context);
            },
            span { class: "icon-svg", dangerous_inner_html: icon }
        }
    }
}
