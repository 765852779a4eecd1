//! Toolbar actions and their handlers.
//!
//! An [`Action`] is a titled, iconed button. Its [`Handler`] decides what a
//! click or hover does: either invoke callbacks directly or open a dropdown
//! listing nested actions.

use std::fmt;
use std::rc::Rc;

use smol_str::SmolStr;

use crate::context::EditorContext;

/// Callback invoked with the editor context.
pub type Callback = Rc<dyn Fn(&EditorContext)>;

/// Click and hover callbacks for a plain action.
#[derive(Clone)]
pub struct ActionHandler {
    click: Callback,
    mouseenter: Option<Callback>,
    mouseleave: Option<Callback>,
}

impl ActionHandler {
    pub fn new(click: impl Fn(&EditorContext) + 'static) -> Self {
        Self {
            click: Rc::new(click),
            mouseenter: None,
            mouseleave: None,
        }
    }

    pub fn on_mouseenter(mut self, f: impl Fn(&EditorContext) + 'static) -> Self {
        self.mouseenter = Some(Rc::new(f));
        self
    }

    pub fn on_mouseleave(mut self, f: impl Fn(&EditorContext) + 'static) -> Self {
        self.mouseleave = Some(Rc::new(f));
        self
    }

    pub fn click(&self, ctx: &EditorContext) {
        (self.click)(ctx);
    }

    pub fn mouseenter(&self, ctx: &EditorContext) {
        if let Some(f) = &self.mouseenter {
            f(ctx);
        }
    }

    pub fn mouseleave(&self, ctx: &EditorContext) {
        if let Some(f) = &self.mouseleave {
            f(ctx);
        }
    }
}

fn same_callback(a: &Option<Callback>, b: &Option<Callback>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

// Callbacks compare by identity.
impl PartialEq for ActionHandler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.click, &other.click)
            && same_callback(&self.mouseenter, &other.mouseenter)
            && same_callback(&self.mouseleave, &other.mouseleave)
    }
}

impl fmt::Debug for ActionHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionHandler")
            .field("mouseenter", &self.mouseenter.is_some())
            .field("mouseleave", &self.mouseleave.is_some())
            .finish_non_exhaustive()
    }
}

/// A hover popover listing nested actions.
#[derive(Debug, Clone, PartialEq)]
pub struct Dropdown {
    pub title: SmolStr,
    pub actions: Vec<Action>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Handler {
    Action(ActionHandler),
    Dropdown(Dropdown),
}

/// A toolbar button.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub title: SmolStr,
    /// SVG markup, injected as-is by the renderer.
    pub icon: SmolStr,
    /// Actions without a handler are not rendered.
    pub handler: Option<Handler>,
}

impl Action {
    pub fn new(title: impl Into<SmolStr>, icon: impl Into<SmolStr>) -> Self {
        Self {
            title: title.into(),
            icon: icon.into(),
            handler: None,
        }
    }

    pub fn with_handler(mut self, handler: ActionHandler) -> Self {
        self.handler = Some(Handler::Action(handler));
        self
    }

    pub fn with_click(self, click: impl Fn(&EditorContext) + 'static) -> Self {
        self.with_handler(ActionHandler::new(click))
    }

    pub fn with_dropdown(mut self, title: impl Into<SmolStr>, actions: Vec<Action>) -> Self {
        self.handler = Some(Handler::Dropdown(Dropdown {
            title: title.into(),
            actions,
        }));
        self
    }

    pub fn dropdown(&self) -> Option<&Dropdown> {
        match &self.handler {
            Some(Handler::Dropdown(dropdown)) => Some(dropdown),
            Some(Handler::Action(_)) | None => None,
        }
    }

    fn action_handler(&self) -> Option<&ActionHandler> {
        match &self.handler {
            Some(Handler::Action(handler)) => Some(handler),
            Some(Handler::Dropdown(_)) => {
                tracing::trace!(title = %self.title, "dropdown handler ignores direct callbacks");
                None
            }
            None => None,
        }
    }

    /// Invoke the click callback. Returns `false` when the handler is not the
    /// `Action` variant, in which case nothing happens.
    pub fn click(&self, ctx: &EditorContext) -> bool {
        let Some(handler) = self.action_handler() else {
            return false;
        };
        handler.click(ctx);
        true
    }

    pub fn mouseenter(&self, ctx: &EditorContext) -> bool {
        let Some(handler) = self.action_handler() else {
            return false;
        };
        handler.mouseenter(ctx);
        true
    }

    pub fn mouseleave(&self, ctx: &EditorContext) -> bool {
        let Some(handler) = self.action_handler() else {
            return false;
        };
        handler.mouseleave(ctx);
        true
    }
}

/// An action on the right side of the bar, with optional highlight and
/// suppression flags.
#[derive(Debug, Clone, PartialEq)]
pub struct RightAction {
    pub action: Action,
    pub active: bool,
    pub hidden: bool,
}

impl From<Action> for RightAction {
    fn from(action: Action) -> Self {
        Self {
            action,
            active: false,
            hidden: false,
        }
    }
}
