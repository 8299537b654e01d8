//! Applies the typed theme from `shared::theme` to egui widgets.

use eframe::egui;
use shared::theme::{ButtonStyle, Padding, Rgba, ScrollPaneStyle};

pub fn color(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

pub fn margin(p: Padding) -> egui::Margin {
    egui::Margin {
        left: p.left,
        right: p.right,
        top: p.top,
        bottom: p.bottom,
    }
}

/// Draw a push button using `style`. With an icon texture, the icon is shown
/// before the caption at the style's icon size.
pub fn styled_button(
    ui: &mut egui::Ui,
    style: &ButtonStyle,
    caption: &str,
    icon: Option<&egui::TextureHandle>,
) -> egui::Response {
    ui.scope(|ui| {
        let visuals = ui.visuals_mut();
        for (state, fill) in [
            (&mut visuals.widgets.inactive, style.fill),
            (&mut visuals.widgets.hovered, style.hover_fill),
            (&mut visuals.widgets.active, style.hover_fill),
        ] {
            state.weak_bg_fill = color(fill);
            state.bg_fill = color(fill);
            state.bg_stroke = egui::Stroke::NONE;
        }

        let spacing = ui.spacing_mut();
        // egui pads buttons symmetrically; split the difference
        spacing.button_padding = egui::vec2(
            (style.padding.left + style.padding.right) / 2.0,
            (style.padding.top + style.padding.bottom) / 2.0,
        );
        spacing.icon_spacing = style.icon_spacing;

        let text = egui::RichText::new(caption)
            .size(style.font_size)
            .color(color(style.text_color));

        let button = match (icon, style.icon_size) {
            (Some(texture), Some(px)) => egui::Button::image_and_text(
                egui::Image::new((texture.id(), egui::vec2(px, px))),
                text,
            ),
            _ => egui::Button::new(text),
        }
        .rounding(egui::Rounding::same(style.rounding));

        match style.size {
            Some(size) => ui.add_sized(size, button),
            None => ui.add(button),
        }
    })
    .inner
}

/// Configure scroll bar metrics and colors for the result pane.
pub fn apply_scroll_style(ui: &mut egui::Ui, style: &ScrollPaneStyle) {
    let scroll = &mut ui.spacing_mut().scroll;
    scroll.bar_width = style.bar_width;
    scroll.handle_min_length = style.handle_min_length;

    let visuals = ui.visuals_mut();
    visuals.extreme_bg_color = color(style.bar_background);
    visuals.widgets.inactive.bg_fill = color(style.handle);
    visuals.widgets.hovered.bg_fill = color(style.handle);
    visuals.widgets.active.bg_fill = color(style.handle);
    visuals.widgets.inactive.rounding = egui::Rounding::same(style.handle_rounding);
}
