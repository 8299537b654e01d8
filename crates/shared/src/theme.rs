//! Typed style configuration for the panel.
//!
//! One struct per widget class. Defaults reproduce the stock look of the
//! panel; any field can be overridden from `settings.json`.

use serde::{Deserialize, Deserializer, Serialize};

/// An sRGB color with straight (unmultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

}

/// Inner spacing, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Padding {
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            left: horizontal,
            right: horizontal,
            top: vertical,
            bottom: vertical,
        }
    }
}

/// Text-entry field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputStyle {
    pub background: Rgba,
    pub text_color: Rgba,
    pub rounding: f32,
    pub padding: Padding,
    pub font_size: f32,
    pub height: f32,
}

impl Default for InputStyle {
    fn default() -> Self {
        Self {
            background: Rgba::new(0, 0, 0, 200),
            text_color: Rgba::WHITE,
            rounding: 20.0,
            padding: Padding::symmetric(15.0, 10.0),
            font_size: 16.0,
            height: 100.0,
        }
    }
}

/// Any push button. Buttons with a fixed size set `size`; others size to content.
///
/// In `settings.json` a button entry only lists the fields it changes; the rest
/// come from that button's preset (see [`Theme`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonStyle {
    pub fill: Rgba,
    pub hover_fill: Rgba,
    pub text_color: Rgba,
    pub rounding: f32,
    pub padding: Padding,
    pub font_size: f32,
    pub size: Option<[f32; 2]>,
    pub icon_size: Option<f32>,
    /// Gap between icon and caption.
    pub icon_spacing: f32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            fill: Rgba::new(0, 0, 0, 200),
            hover_fill: Rgba::new(0, 0, 0, 200),
            text_color: Rgba::WHITE,
            rounding: 5.0,
            padding: Padding::symmetric(5.0, 2.5),
            font_size: 14.0,
            size: None,
            icon_size: None,
            icon_spacing: 0.0,
        }
    }
}

impl ButtonStyle {
    /// Round grey microphone button.
    pub fn microphone() -> Self {
        Self {
            fill: Rgba::new(100, 100, 100, 200),
            hover_fill: Rgba::new(100, 100, 100, 230),
            rounding: 20.0,
            padding: Padding::symmetric(0.0, 0.0),
            size: Some([40.0, 40.0]),
            icon_size: Some(24.0),
            ..Self::default()
        }
    }

    /// Red "X" close button.
    pub fn close() -> Self {
        Self {
            fill: Rgba::new(255, 0, 0, 150),
            hover_fill: Rgba::new(255, 0, 0, 200),
            rounding: 15.0,
            padding: Padding::symmetric(5.0, 5.0),
            font_size: 20.0,
            size: Some([30.0, 30.0]),
            ..Self::default()
        }
    }

    /// Copy Result / Clear buttons.
    pub fn result() -> Self {
        Self {
            fill: Rgba::new(240, 240, 240, 230),
            hover_fill: Rgba::new(255, 255, 255, 245),
            text_color: Rgba::new(30, 30, 30, 255),
            rounding: 4.0,
            padding: Padding {
                left: 4.0,
                right: 8.0,
                top: 2.5,
                bottom: 2.5,
            },
            icon_size: Some(18.0),
            icon_spacing: 4.0,
            ..Self::default()
        }
    }
}

/// A button entry as written in a settings file. Absent fields keep the preset.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ButtonOverrides {
    fill: Option<Rgba>,
    hover_fill: Option<Rgba>,
    text_color: Option<Rgba>,
    rounding: Option<f32>,
    padding: Option<Padding>,
    font_size: Option<f32>,
    size: Option<[f32; 2]>,
    icon_size: Option<f32>,
    icon_spacing: Option<f32>,
}

impl ButtonOverrides {
    fn apply(self, preset: ButtonStyle) -> ButtonStyle {
        ButtonStyle {
            fill: self.fill.unwrap_or(preset.fill),
            hover_fill: self.hover_fill.unwrap_or(preset.hover_fill),
            text_color: self.text_color.unwrap_or(preset.text_color),
            rounding: self.rounding.unwrap_or(preset.rounding),
            padding: self.padding.unwrap_or(preset.padding),
            font_size: self.font_size.unwrap_or(preset.font_size),
            size: self.size.or(preset.size),
            icon_size: self.icon_size.or(preset.icon_size),
            icon_spacing: self.icon_spacing.unwrap_or(preset.icon_spacing),
        }
    }
}

fn microphone_button<'de, D: Deserializer<'de>>(d: D) -> Result<ButtonStyle, D::Error> {
    ButtonOverrides::deserialize(d).map(|o| o.apply(ButtonStyle::microphone()))
}

fn close_button<'de, D: Deserializer<'de>>(d: D) -> Result<ButtonStyle, D::Error> {
    ButtonOverrides::deserialize(d).map(|o| o.apply(ButtonStyle::close()))
}

fn task_button<'de, D: Deserializer<'de>>(d: D) -> Result<ButtonStyle, D::Error> {
    ButtonOverrides::deserialize(d).map(|o| o.apply(ButtonStyle::default()))
}

fn result_button<'de, D: Deserializer<'de>>(d: D) -> Result<ButtonStyle, D::Error> {
    ButtonOverrides::deserialize(d).map(|o| o.apply(ButtonStyle::result()))
}

/// Result scroll pane and its vertical scroll bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollPaneStyle {
    pub background: Rgba,
    pub rounding: f32,
    pub text_color: Rgba,
    pub bar_width: f32,
    pub bar_background: Rgba,
    pub handle: Rgba,
    pub handle_min_length: f32,
    pub handle_rounding: f32,
}

impl Default for ScrollPaneStyle {
    fn default() -> Self {
        Self {
            background: Rgba::TRANSPARENT,
            rounding: 10.0,
            text_color: Rgba::WHITE,
            bar_width: 10.0,
            bar_background: Rgba::new(255, 255, 255, 200),
            handle: Rgba::new(255, 255, 255, 230),
            handle_min_length: 20.0,
            handle_rounding: 5.0,
        }
    }
}

/// Complete panel theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Outer margin around the panel content.
    pub panel_margin: f32,
    pub input: InputStyle,
    #[serde(deserialize_with = "microphone_button")]
    pub microphone_button: ButtonStyle,
    #[serde(deserialize_with = "close_button")]
    pub close_button: ButtonStyle,
    #[serde(deserialize_with = "task_button")]
    pub task_button: ButtonStyle,
    #[serde(deserialize_with = "result_button")]
    pub result_button: ButtonStyle,
    pub result_pane: ScrollPaneStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            panel_margin: 10.0,
            input: InputStyle::default(),
            microphone_button: ButtonStyle::microphone(),
            close_button: ButtonStyle::close(),
            task_button: ButtonStyle::default(),
            result_button: ButtonStyle::result(),
            result_pane: ScrollPaneStyle::default(),
        }
    }
}
