//! Left-side icon buttons and their hover dropdowns.

use std::rc::Rc;

use dioxus::prelude::*;
use hashmd_toolbar_core::{
    Action, EditorContext, LeftIcon, Placement, Point, PositionError, Size, ToolbarConfig,
    compute_position,
};

use crate::platform;

/// Measure the icon and its panel, then solve for the panel's position.
async fn place_dropdown(
    button: Option<Rc<MountedData>>,
    panel: Option<Rc<MountedData>>,
    placement: Placement,
    padding: f64,
    fallback_viewport: Size,
) -> Result<Point, PositionError> {
    let reference = platform::measure(button, "toolbar icon").await?;
    let floating = platform::measure(panel, "dropdown").await?;
    let viewport = platform::viewport(fallback_viewport);
    let positioned = compute_position(reference, floating.size(), viewport, placement, padding)?;
    Ok(positioned.point)
}

/// An icon in the left region.
///
/// `Action` handlers fire on click. `Dropdown` handlers render a panel that is
/// parked off-screen and moved under the icon while the pointer is over it.
#[component]
pub fn LeftActionButton(icon: LeftIcon, context: EditorContext, config: ToolbarConfig) -> Element {
    let mut tracker = use_signal({
        let icon = icon.clone();
        move || icon.dropdown_tracker().unwrap_or_default()
    });
    let mut button = use_signal(|| None::<Rc<MountedData>>);
    let mut panel = use_signal(|| None::<Rc<MountedData>>);

    let dropdown = icon.action().dropdown().cloned();
    let title = icon.action().title.to_string();
    let markup = icon.action().icon.to_string();
    let panel_style = tracker.read().style();

    let onclick = {
        let icon = icon.clone();
        let context = context.clone();
        move |_| {
            icon.click(&context);
        }
    };

    let ToolbarConfig {
        placement,
        padding,
        fallback_viewport,
        ..
    } = config;
    let onmouseenter = {
        let icon = icon.clone();
        move |_| {
            let Some(ticket) = icon.enter(&mut tracker.write()) else {
                return;
            };
            spawn(async move {
                let button = (*button.peek()).clone();
                let panel = (*panel.peek()).clone();
                let result = place_dropdown(button, panel, placement, padding, fallback_viewport).await;
                tracker.write().resolve(ticket, result);
            });
        }
    };

    let onmouseleave = move |_| {
        icon.leave(&mut tracker.write());
    };

    rsx! {
        div {
            class: "icon",
            title: title,
            onmounted: move |evt| button.set(Some(evt.data())),
            onclick,
            onmouseenter,
            onmouseleave,
            span { class: "icon-svg", dangerous_inner_html: markup }
            if let Some(dropdown) = dropdown {
                div {
                    class: "dropdown",
                    style: panel_style,
                    onmounted: move |evt| panel.set(Some(evt.data())),
                    div { class: "dropdown-title", "{dropdown.title}" }
                    for (index, item) in dropdown.actions.into_iter().enumerate() {
                        DropdownItem { key: "{index}", action: item, context: context.clone() }
                    }
                }
            }
        }
    }
}

/// A row in a dropdown panel. Only `Action` handlers respond; nested
/// dropdowns are inert.
#[component]
fn DropdownItem(action: Action, context: EditorContext) -> Element {
    let title = action.title.to_string();

    let onclick = {
        let action = action.clone();
        let context = context.clone();
        move |_| {
            action.click(&context);
        }
    };
    let onmouseenter = {
        let action = action.clone();
        let context = context.clone();
        move |_| {
            action.mouseenter(&context);
        }
    };
    let onmouseleave = move |_| {
        action.mouseleave(&context);
    };

    rsx! {
        div {
            class: "dropdown-item",
            onclick,
            onmouseenter,
            onmouseleave,
            "{title}"
        }
    }
}
