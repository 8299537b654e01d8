//! Lightweight markdown renderer for the result pane.
//!
//! Handles the subset of markdown that model replies actually contain:
//! - `# Heading` through `#### Heading`
//! - `- bullet` and `* bullet` list items
//! - `**bold**`, `` `inline code` `` and `[text](url)` links
//! - Blank lines as paragraph breaks
//!
//! Links open in the system browser.

use eframe::egui;

/// One line of markdown, classified.
#[derive(Debug, PartialEq, Eq)]
pub enum Block<'a> {
    Blank,
    Heading(u8, &'a str),
    Bullet(&'a str),
    Paragraph(&'a str),
}

/// A run of inline text.
#[derive(Debug, PartialEq, Eq)]
pub enum Span<'a> {
    Plain(&'a str),
    Bold(&'a str),
    Code(&'a str),
    Link { text: &'a str, url: &'a str },
}

pub fn parse_block(line: &str) -> Block<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Block::Blank;
    }
    for (level, prefix) in [(4, "#### "), (3, "### "), (2, "## "), (1, "# ")] {
        if let Some(rest) = trimmed.strip_prefix(prefix) {
            return Block::Heading(level, rest);
        }
    }
    if let Some(rest) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        return Block::Bullet(rest);
    }
    Block::Paragraph(trimmed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Bold, // **
    Code, // `
    Link, // [
}

fn next_marker(text: &str) -> Option<(usize, Marker)> {
    let bold = text.find("**").map(|p| (p, Marker::Bold));
    let code = text.find('`').map(|p| (p, Marker::Code));
    // Only a bracket that is eventually followed by "](" starts a link
    let link = text
        .find('[')
        .filter(|&p| text[p..].contains("]("))
        .map(|p| (p, Marker::Link));

    [bold, code, link].into_iter().flatten().min_by_key(|(p, _)| *p)
}

/// Split a line into inline spans. Unterminated markers are kept as plain text.
pub fn parse_spans(text: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let Some((pos, marker)) = next_marker(rest) else {
            spans.push(Span::Plain(rest));
            break;
        };
        if pos > 0 {
            spans.push(Span::Plain(&rest[..pos]));
        }
        let after = &rest[pos..];

        let parsed = match marker {
            Marker::Bold => after[2..]
                .find("**")
                .map(|end| (Span::Bold(&after[2..2 + end]), 2 + end + 2)),
            Marker::Code => after[1..]
                .find('`')
                .map(|end| (Span::Code(&after[1..1 + end]), 1 + end + 1)),
            Marker::Link => after.find("](").and_then(|close| {
                let url_start = close + 2;
                after[url_start..].find(')').map(|end| {
                    (
                        Span::Link {
                            text: &after[1..close],
                            url: &after[url_start..url_start + end],
                        },
                        url_start + end + 1,
                    )
                })
            }),
        };

        match parsed {
            Some((span, consumed)) => {
                spans.push(span);
                rest = &after[consumed..];
            }
            None => {
                spans.push(Span::Plain(after));
                break;
            }
        }
    }

    spans
}

/// Render markdown text into an egui UI region.
pub fn render_markdown(ui: &mut egui::Ui, text: &str, base_color: egui::Color32, size: f32) {
    for line in text.lines() {
        match parse_block(line) {
            Block::Blank => ui.add_space(6.0),
            Block::Heading(level, rest) => {
                let heading_size = size + 2.0 * f32::from(5 - level);
                ui.add_space(heading_size / 3.0);
                ui.label(
                    egui::RichText::new(rest)
                        .strong()
                        .size(heading_size)
                        .color(base_color),
                );
            }
            Block::Bullet(rest) => {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new("  •  ").size(size).color(base_color));
                    render_spans(ui, rest, base_color, size);
                });
            }
            Block::Paragraph(rest) => {
                ui.horizontal_wrapped(|ui| render_spans(ui, rest, base_color, size));
            }
        }
    }
}

fn render_spans(ui: &mut egui::Ui, text: &str, base_color: egui::Color32, size: f32) {
    let link_color = egui::Color32::from_rgb(100, 170, 240);
    let code_bg = egui::Color32::from_rgba_unmultiplied(60, 60, 70, 200);

    for span in parse_spans(text) {
        match span {
            Span::Plain(t) => {
                ui.label(egui::RichText::new(t).size(size).color(base_color));
            }
            Span::Bold(t) => {
                ui.label(egui::RichText::new(t).size(size).strong().color(base_color));
            }
            Span::Code(t) => {
                egui::Frame::none()
                    .fill(code_bg)
                    .rounding(egui::Rounding::same(3.0))
                    .inner_margin(egui::Margin::symmetric(4.0, 1.0))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(t)
                                .size(size)
                                .monospace()
                                .color(base_color),
                        );
                    });
            }
            Span::Link { text, url } => {
                let response = ui
                    .link(egui::RichText::new(text).size(size).color(link_color).underline())
                    .on_hover_text(url);
                if response.clicked() {
                    if let Err(e) = open::that(url) {
                        tracing::warn!(url, error = %e, "Could not open link");
                    }
                }
            }
        }
    }
}
