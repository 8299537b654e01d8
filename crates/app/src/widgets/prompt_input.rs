//! Multi-line prompt field that submits on Enter.
//!
//! Enter submits, Shift+Enter inserts a newline. The Enter key is consumed
//! before the text edit runs so a submit never leaves a stray newline behind.

use crate::style::{color, margin};
use egui::{Id, Key, Modifiers, Ui};
use shared::theme::InputStyle;

/// Result of showing a [`PromptInput`].
pub struct PromptResponse {
    /// The submit gesture happened this frame.
    pub submitted: bool,
    /// The field takes file drops.
    pub accepts_drops: bool,
}

pub struct PromptInput<'a> {
    id: Id,
    text: &'a mut String,
    style: &'a InputStyle,
    hint: &'a str,
    accept_drops: bool,
}

impl<'a> PromptInput<'a> {
    pub fn new(id: Id, text: &'a mut String, style: &'a InputStyle) -> Self {
        Self {
            id,
            text,
            style,
            hint: "",
            accept_drops: false,
        }
    }

    pub fn hint_text(mut self, hint: &'a str) -> Self {
        self.hint = hint;
        self
    }

    pub fn accept_drops(mut self, accept: bool) -> Self {
        self.accept_drops = accept;
        self
    }

    /// Show the field at `width`; its height comes from the style.
    pub fn show(self, ui: &mut Ui, width: f32) -> PromptResponse {
        let style = self.style;
        let submitted = ui.memory(|m| m.has_focus(self.id))
            && ui.input_mut(|i| {
                !i.modifiers.shift && i.consume_key(Modifiers::NONE, Key::Enter)
            });

        let inner_width = (width - style.padding.left - style.padding.right).max(0.0);
        let inner_height = (style.height - style.padding.top - style.padding.bottom).max(0.0);

        egui::Frame::none()
            .fill(color(style.background))
            .rounding(egui::Rounding::same(style.rounding))
            .inner_margin(margin(style.padding))
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .id_source(self.id.with("scroll"))
                    .max_height(inner_height)
                    .show(ui, |ui| {
                        ui.add_sized(
                            [inner_width, inner_height],
                            egui::TextEdit::multiline(self.text)
                                .id(self.id)
                                .hint_text(self.hint)
                                .frame(false)
                                .font(egui::FontId::proportional(style.font_size))
                                .text_color(color(style.text_color)),
                        )
                    });
            });

        PromptResponse {
            submitted,
            accepts_drops: self.accept_drops,
        }
    }
}
