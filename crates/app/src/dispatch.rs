//! The single seam between the panel and whatever answers its requests.
//!
//! The window never talks to a backend directly: the submit gesture and every
//! button press end up in an [`ActionHandler`]. The default handler does
//! nothing.

use shared::actions::Action;

/// What the panel holds when a request is made.
#[derive(Debug, Clone, Copy)]
pub struct ActionContext<'a> {
    /// Current input text.
    pub input: &'a str,
    /// Current result pane content.
    pub result: &'a str,
}

pub trait ActionHandler {
    /// Called on the submit gesture.
    fn submit(&mut self, _ctx: ActionContext<'_>) {}

    /// Called when an action button is pressed.
    fn handle(&mut self, _action: Action, _ctx: ActionContext<'_>) {}
}

/// Handler that accepts every request and does nothing.
#[derive(Debug, Default)]
pub struct NoopHandler;

impl ActionHandler for NoopHandler {
    fn submit(&mut self, ctx: ActionContext<'_>) {
        tracing::trace!(input_chars = ctx.input.chars().count(), "Submit ignored");
    }

    fn handle(&mut self, action: Action, ctx: ActionContext<'_>) {
        tracing::trace!(
            action = action.as_str(),
            input_chars = ctx.input.chars().count(),
            result_chars = ctx.result.chars().count(),
            "Action ignored"
        );
    }
}
