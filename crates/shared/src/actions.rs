//! Commands the panel's buttons can issue.
//!
//! Every button on the panel maps to exactly one [`Action`]; the window routes
//! all of them through a single handler instead of wiring one callback per
//! button.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user-triggered command from one of the panel buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Condense the input
    Summarize,
    /// Say the same thing differently
    Rephrase,
    /// Correct spelling and grammar
    FixGrammar,
    /// Generate ideas around the input
    Brainstorm,
    /// Draft an email from the input
    WriteEmail,
    /// Copy the result pane's content
    CopyResult,
    /// Clear the result pane
    Clear,
}

impl Action {
    /// Task buttons, in the order they appear on the panel.
    pub const TASKS: [Action; 5] = [
        Action::Summarize,
        Action::Rephrase,
        Action::FixGrammar,
        Action::Brainstorm,
        Action::WriteEmail,
    ];

    /// Result-row buttons, in display order.
    pub const RESULT: [Action; 2] = [Action::CopyResult, Action::Clear];

    /// Button caption.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Summarize => "Summarize",
            Action::Rephrase => "Rephrase",
            Action::FixGrammar => "Fix Grammar",
            Action::Brainstorm => "Brainstorm",
            Action::WriteEmail => "Write Email",
            Action::CopyResult => "Copy Result",
            Action::Clear => "Clear",
        }
    }

    /// Stable identifier, used in log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Summarize => "summarize",
            Action::Rephrase => "rephrase",
            Action::FixGrammar => "fix_grammar",
            Action::Brainstorm => "brainstorm",
            Action::WriteEmail => "write_email",
            Action::CopyResult => "copy_result",
            Action::Clear => "clear",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
