use dioxus::prelude::*;
use hashmd_toolbar::{Action, ActionHandler, EditorContext, Toolbar, ToolbarConfig, ToolbarEvent};

mod shell;

use shell::ViewState;

const CONFIG_JSON: &str = include_str!("../toolbar.json");

const BOLD_ICON: &str = r#"<svg viewBox="0 0 24 24" width="16" height="16" fill="none" stroke="currentColor" stroke-width="2"><path d="M6 4h8a4 4 0 0 1 0 8H6zM6 12h9a4 4 0 0 1 0 8H6z"/></svg>"#;
const HEADING_ICON: &str = r#"<svg viewBox="0 0 24 24" width="16" height="16" fill="none" stroke="currentColor" stroke-width="2"><path d="M6 4v16M18 4v16M6 12h12"/></svg>"#;
const COUNT_ICON: &str = r#"<svg viewBox="0 0 24 24" width="16" height="16" fill="none" stroke="currentColor" stroke-width="2"><path d="M4 7h16M4 12h10M4 17h6"/></svg>"#;

/// What the demo passes through the toolbar as its editor context.
#[derive(Debug)]
struct DemoDocument {
    name: &'static str,
}

fn document_name(ctx: &EditorContext) -> &'static str {
    ctx.downcast_ref::<DemoDocument>()
        .map(|doc| doc.name)
        .unwrap_or("unknown")
}

fn left_actions() -> Vec<Action> {
    let headings = (1..=3)
        .map(|level| {
            Action::new(format!("Heading {level}"), "").with_handler(
                ActionHandler::new(move |ctx| {
                    tracing::info!(level, document = document_name(ctx), "insert heading")
                })
                .on_mouseenter(move |_| tracing::trace!(level, "heading preview"))
                .on_mouseleave(move |_| tracing::trace!(level, "heading preview cleared")),
            )
        })
        .collect();

    vec![
        Action::new("Bold", BOLD_ICON)
            .with_click(|ctx| tracing::info!(document = document_name(ctx), "toggle bold")),
        Action::new("Heading", HEADING_ICON).with_dropdown("Heading", headings),
    ]
}

fn right_actions() -> Vec<Action> {
    vec![Action::new("Word count", COUNT_ICON)
        .with_click(|ctx| tracing::info!(document = document_name(ctx), "word count"))]
}

fn load_config() -> ToolbarConfig {
    ToolbarConfig::from_json(CONFIG_JSON).unwrap_or_else(|e| {
        tracing::warn!("using default toolbar config: {}", e);
        ToolbarConfig::default()
    })
}

fn main() {
    // Must happen before dioxus::launch so dioxus skips its own init
    #[cfg(all(target_family = "wasm", target_os = "unknown"))]
    {
        use tracing::Level;
        use tracing::subscriber::set_global_default;
        use tracing_subscriber::Registry;
        use tracing_subscriber::layer::SubscriberExt;

        console_error_panic_hook::set_once();

        let console_level = if cfg!(debug_assertions) {
            Level::DEBUG
        } else {
            Level::INFO
        };

        let wasm_layer = tracing_wasm::WASMLayer::new(
            tracing_wasm::WASMLayerConfigBuilder::new()
                .set_max_level(console_level)
                .build(),
        );

        let _ = set_global_default(Registry::default().with(wasm_layer));
    }

    #[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
    {
        let level = if cfg!(debug_assertions) {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };
        let _ = tracing_subscriber::fmt().with_max_level(level).try_init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut view = use_signal(ViewState::default);
    let context = use_hook(|| EditorContext::new(DemoDocument { name: "README.md" }));
    let actions = use_hook(left_actions);
    let extra = use_hook(right_actions);
    let config = use_hook(load_config);

    let state = view();
    let sidebar = format!("{:?}", state.sidebar);
    let tab = format!("{:?}", state.active_tab);

    rsx! {
        Toolbar {
            actions,
            right_afferent_actions: extra,
            sidebar: state.sidebar,
            fullscreen: state.fullscreen,
            active_tab: state.active_tab,
            context,
            config,
            on_event: move |event: ToolbarEvent| view.write().apply(event),
        }
        main { class: "editor",
            p { "sidebar: {sidebar}" }
            p { "fullscreen: {state.fullscreen}" }
            p { "tab: {tab}" }
        }
    }
}
