use dioxus::prelude::*;
use hashmd_toolbar_core::{ToolbarEvent, ToolbarHost};

use crate::platform;

/// Forwards toolbar notifications to the component's `on_event` prop.
pub struct DioxusHost {
    on_event: EventHandler<ToolbarEvent>,
}

impl DioxusHost {
    pub fn new(on_event: EventHandler<ToolbarEvent>) -> Self {
        Self { on_event }
    }
}

impl ToolbarHost for DioxusHost {
    fn notify(&self, event: ToolbarEvent) {
        self.on_event.call(event);
    }

    fn open_link(&self, url: &str) {
        platform::open_link(url);
    }
}
