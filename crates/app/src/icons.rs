//! SVG icon descriptors and the helper that turns them into textures.

use eframe::egui;
use usvg::TreeParsing;

pub const MICROPHONE_ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="white" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
<path d="M12 1a3 3 0 0 0-3 3v8a3 3 0 0 0 6 0V4a3 3 0 0 0-3-3z"/>
<path d="M19 10v2a7 7 0 0 1-14 0v-2"/>
<line x1="12" y1="19" x2="12" y2="23"/>
<line x1="8" y1="23" x2="16" y2="23"/>
</svg>"##;

pub const COPY_ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="#1e1e1e" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
<rect x="9" y="9" width="13" height="13" rx="2" ry="2"/>
<path d="M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1"/>
</svg>"##;

pub const CLEAR_ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="#1e1e1e" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
<polyline points="3 6 5 6 21 6"/>
<path d="M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6"/>
<path d="M10 11v6"/>
<path d="M14 11v6"/>
<path d="M9 6V4a1 1 0 0 1 1-1h4a1 1 0 0 1 1 1v2"/>
</svg>"##;

#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("icon size must be non-zero")]
    EmptySize,
    #[error("invalid SVG icon: {0}")]
    Parse(#[from] usvg::Error),
}

/// Rasterize an SVG descriptor into a `size_px` square image.
///
/// The drawing is scaled uniformly so its larger side fills the square.
pub fn render_svg(svg: &str, size_px: u32) -> Result<egui::ColorImage, IconError> {
    let mut pixmap = tiny_skia::Pixmap::new(size_px, size_px).ok_or(IconError::EmptySize)?;

    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())?;
    let width = tree.size.width() as f32;
    let height = tree.size.height() as f32;
    let scale = size_px as f32 / width.max(height);

    let rtree = resvg::Tree::from_usvg(&tree);
    rtree.render(
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let side = size_px as usize;
    Ok(egui::ColorImage::from_rgba_premultiplied(
        [side, side],
        pixmap.data(),
    ))
}

/// Upload an icon as a texture, logging and skipping it on failure.
pub fn load_icon(
    ctx: &egui::Context,
    name: &str,
    svg: &str,
    size_px: u32,
) -> Option<egui::TextureHandle> {
    match render_svg(svg, size_px) {
        Ok(image) => Some(ctx.load_texture(name, image, egui::TextureOptions::LINEAR)),
        Err(e) => {
            tracing::warn!(icon = name, error = %e, "Falling back to a text-only button");
            None
        }
    }
}

/// Textures for every icon on the panel.
pub struct IconSet {
    pub microphone: Option<egui::TextureHandle>,
    pub copy: Option<egui::TextureHandle>,
    pub clear: Option<egui::TextureHandle>,
}

impl IconSet {
    pub fn load(ctx: &egui::Context, microphone_px: u32, result_px: u32) -> Self {
        Self {
            microphone: load_icon(ctx, "icon-microphone", MICROPHONE_ICON_SVG, microphone_px),
            copy: load_icon(ctx, "icon-copy", COPY_ICON_SVG, result_px),
            clear: load_icon(ctx, "icon-clear", CLEAR_ICON_SVG, result_px),
        }
    }
}
