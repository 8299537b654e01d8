//! Transient UI state held by the assistant window.
//!
//! Nothing here is persisted; all of it lives as long as the process.

use crate::simple_md::render_markdown;
use crate::style::{apply_scroll_style, color};
use eframe::egui;
use shared::theme::ScrollPaneStyle;

/// Whether the panel is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}

/// Scrollable rich-text area for responses. Starts hidden and empty.
#[derive(Debug, Default)]
pub struct ResultPane {
    pub(crate) visible: bool,
    pub(crate) content: String,
}

impl ResultPane {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Draw the pane if it is visible. Vertical scrolling only.
    pub fn show(&self, ui: &mut egui::Ui, style: &ScrollPaneStyle) {
        if !self.is_visible() {
            return;
        }
        egui::Frame::none()
            .fill(color(style.background))
            .rounding(egui::Rounding::same(style.rounding))
            .show(ui, |ui| {
                apply_scroll_style(ui, style);
                egui::ScrollArea::vertical()
                    .id_source("result-pane")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        render_markdown(ui, &self.content, color(style.text_color), 14.0);
                    });
            });
    }
}

const THUMBNAIL_HEIGHT: f32 = 48.0;

struct InlineImage {
    pixels: egui::ColorImage,
    texture: Option<egui::TextureHandle>,
}

/// Horizontal strip of inline images shown above the input. Nothing fills it yet.
#[derive(Default)]
pub struct ImageStrip {
    images: Vec<InlineImage>,
}

impl ImageStrip {
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Draw the strip, left-aligned. Uploads textures on first draw.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        if self.is_empty() {
            return;
        }
        ui.horizontal(|ui| {
            for (index, image) in self.images.iter_mut().enumerate() {
                let texture = image.texture.get_or_insert_with(|| {
                    ui.ctx().load_texture(
                        format!("inline-image-{index}"),
                        image.pixels.clone(),
                        egui::TextureOptions::LINEAR,
                    )
                });
                let [w, h] = image.pixels.size;
                let scale = THUMBNAIL_HEIGHT / h.max(1) as f32;
                ui.add(egui::Image::new((
                    texture.id(),
                    egui::vec2(w as f32 * scale, THUMBNAIL_HEIGHT),
                )));
            }
        });
    }
}
