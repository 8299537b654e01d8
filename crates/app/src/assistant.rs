//! The assistant panel: a frameless, translucent, always-on-top window with a
//! prompt field, task buttons and a (hidden) result pane.
//!
//! The panel has two states, Hidden and Visible. It starts Hidden; `show()`
//! makes it Visible, the close button and Escape hide it again. Every button
//! and the submit gesture go through the [`ActionHandler`] seam.

use crate::dispatch::{ActionContext, ActionHandler, NoopHandler};
use crate::icons::IconSet;
use crate::style::styled_button;
use crate::types::{ImageStrip, ResultPane, Visibility};
use crate::widgets::{DragDropTracker, PromptInput};
use eframe::egui;
use shared::actions::Action;
use shared::settings::AppSettings;
use shared::theme::Theme;
use std::path::PathBuf;

pub const WINDOW_TITLE: &str = "AI assistant";
/// Fixed inner size of the panel.
pub const WINDOW_SIZE: [f32; 2] = [600.0, 200.0];
pub const INPUT_PLACEHOLDER: &str = "Ask me anything...";

const PROMPT_ID: &str = "assistant-prompt";

/// Everything the user did to the panel during one frame.
#[derive(Debug, Default)]
struct PanelEvents {
    submitted: bool,
    close: bool,
    microphone: bool,
    action: Option<Action>,
    accepts_drops: bool,
}

pub struct AssistantWindow {
    visibility: Visibility,
    /// Last visibility sent to the native window.
    applied_visibility: Option<Visibility>,
    input_text: String,
    result: ResultPane,
    images: ImageStrip,
    theme: Theme,
    icons: Option<IconSet>,
    drag_drop: DragDropTracker,
    handler: Box<dyn ActionHandler + Send>,
}

impl Default for AssistantWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl AssistantWindow {
    pub fn new() -> Self {
        Self::with_handler(NoopHandler)
    }

    pub fn with_handler(handler: impl ActionHandler + Send + 'static) -> Self {
        Self {
            visibility: Visibility::Hidden,
            applied_visibility: None,
            input_text: String::new(),
            result: ResultPane::default(),
            images: ImageStrip::default(),
            theme: Theme::default(),
            icons: None,
            drag_drop: DragDropTracker::new(),
            handler: Box::new(handler),
        }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        let mut window = Self::new();
        window.theme = settings.theme.clone();
        window
    }

    pub fn show(&mut self) {
        if !self.visibility.is_visible() {
            tracing::debug!("Showing assistant panel");
        }
        self.visibility = Visibility::Visible;
    }

    /// Hide the panel. The input text is kept.
    pub fn hide(&mut self) {
        if self.visibility.is_visible() {
            tracing::debug!("Hiding assistant panel");
        }
        self.visibility = Visibility::Hidden;
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility().is_visible()
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn result_pane(&self) -> &ResultPane {
        &self.result
    }

    pub fn geometry(&self) -> [f32; 2] {
        WINDOW_SIZE
    }

    /// The submit gesture. Sole entry point from the prompt into request handling.
    pub fn on_submit(&mut self) {
        tracing::debug!(chars = self.input_text().chars().count(), "Prompt submitted");
        let ctx = ActionContext {
            input: &self.input_text,
            result: self.result.content(),
        };
        self.handler.submit(ctx);
    }

    /// Route a button press to the action handler.
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(
            action = action.as_str(),
            result_visible = self.result_pane().is_visible(),
            "Action requested"
        );
        let ctx = ActionContext {
            input: &self.input_text,
            result: self.result.content(),
        };
        self.handler.handle(action, ctx);
    }

    pub fn on_drag_enter(&mut self) {
        tracing::trace!("Files dragged over prompt");
    }

    pub fn on_drop(&mut self, paths: &[PathBuf]) {
        tracing::trace!(count = paths.len(), "Files dropped on prompt");
    }

    /// Native window description: fixed size, no decorations, transparent,
    /// always on top, visible according to the current state.
    pub fn viewport_builder(&self) -> egui::ViewportBuilder {
        let size = egui::Vec2::from(self.geometry());
        egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(size)
            .with_min_inner_size(size)
            .with_max_inner_size(size)
            .with_resizable(false)
            .with_decorations(false)
            .with_transparent(true)
            .with_window_level(egui::WindowLevel::AlwaysOnTop)
            .with_visible(self.is_visible())
    }

    pub fn load_icons(&mut self, ctx: &egui::Context) {
        let mic_px = icon_px(self.theme.microphone_button.icon_size, 24);
        let result_px = icon_px(self.theme.result_button.icon_size, 18);
        self.icons = Some(IconSet::load(ctx, mic_px, result_px));
    }

    /// Run one frame of the panel.
    ///
    /// Escape hides the panel only without modifiers; Shift+Esc and the like pass through.
    pub fn ui(&mut self, ctx: &egui::Context) {
        if self.icons.is_none() {
            self.load_icons(ctx);
        }

        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Escape)) {
            self.hide();
        }

        let drag = self.drag_drop.update(ctx);
        let events = self.draw(ctx);

        if events.accepts_drops {
            if drag.entered {
                self.on_drag_enter();
            }
            if !drag.dropped.is_empty() {
                self.on_drop(&drag.dropped);
            }
        }
        if events.submitted {
            self.on_submit();
        }
        if events.microphone {
            tracing::debug!("Voice input is not available");
        }
        if let Some(action) = events.action {
            self.dispatch(action);
        }
        if events.close {
            self.hide();
        }

        self.sync_viewport(ctx);
    }

    fn sync_viewport(&mut self, ctx: &egui::Context) {
        if self.applied_visibility != Some(self.visibility) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Visible(self.is_visible()));
            self.applied_visibility = Some(self.visibility);
        }
    }

    fn draw(&mut self, ctx: &egui::Context) -> PanelEvents {
        let mut events = PanelEvents::default();
        let theme = &self.theme;
        let icons = self.icons.as_ref();

        let frame = egui::Frame::none()
            .fill(egui::Color32::TRANSPARENT)
            .inner_margin(egui::Margin::same(theme.panel_margin));

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            // No title bar, so dragging the background moves the window
            let background = ui.interact(
                ui.max_rect(),
                egui::Id::new("assistant-background"),
                egui::Sense::drag(),
            );
            if background.drag_started_by(egui::PointerButton::Primary) {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::StartDrag);
            }

            self.images.show(ui);

            ui.horizontal(|ui| {
                let spacing = ui.spacing().item_spacing.x;
                let mic_width = theme.microphone_button.size.map_or(40.0, |s| s[0]);
                let close_width = theme.close_button.size.map_or(30.0, |s| s[0]);
                let input_width =
                    (ui.available_width() - mic_width - close_width - 2.0 * spacing).max(0.0);

                let prompt = PromptInput::new(
                    egui::Id::new(PROMPT_ID),
                    &mut self.input_text,
                    &theme.input,
                )
                .hint_text(INPUT_PLACEHOLDER)
                .accept_drops(true)
                .show(ui, input_width);
                events.submitted = prompt.submitted;
                events.accepts_drops = prompt.accepts_drops;

                let mic_icon = icons.and_then(|i| i.microphone.as_ref());
                let mic_caption = if mic_icon.is_some() { "" } else { "Mic" };
                events.microphone =
                    styled_button(ui, &theme.microphone_button, mic_caption, mic_icon)
                        .on_hover_text("Voice input")
                        .clicked();

                events.close = styled_button(ui, &theme.close_button, "X", None)
                    .on_hover_text("Hide (Esc)")
                    .clicked();
            });

            ui.horizontal(|ui| {
                for action in Action::TASKS {
                    if styled_button(ui, &theme.task_button, action.label(), None).clicked() {
                        events.action = Some(action);
                    }
                }
            });

            ui.horizontal(|ui| {
                for action in Action::RESULT {
                    let icon = icons.and_then(|i| match action {
                        Action::CopyResult => i.copy.as_ref(),
                        _ => i.clear.as_ref(),
                    });
                    if styled_button(ui, &theme.result_button, action.label(), icon).clicked() {
                        events.action = Some(action);
                    }
                }
            });

            self.result.show(ui, &theme.result_pane);
        });

        events
    }
}

fn icon_px(size: Option<f32>, fallback: u32) -> u32 {
    size.map_or(fallback, |s| s.round().max(1.0) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct RecordingHandler {
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl ActionHandler for RecordingHandler {
        fn submit(&mut self, ctx: ActionContext<'_>) {
            self.calls.lock().push(format!("submit:{}", ctx.input));
        }

        fn handle(&mut self, action: Action, ctx: ActionContext<'_>) {
            self.calls
                .lock()
                .push(format!("{}:{}", action.as_str(), ctx.input));
        }
    }

    fn key(key: egui::Key) -> egui::RawInput {
        egui::RawInput {
            events: vec![egui::Event::Key {
                key,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::NONE,
            }],
            ..Default::default()
        }
    }

    fn run_frame(
        ctx: &egui::Context,
        window: &mut AssistantWindow,
        input: egui::RawInput,
    ) -> egui::FullOutput {
        ctx.run(input, |ctx| window.ui(ctx))
    }

    fn sent_visible(output: &egui::FullOutput, visible: bool) -> bool {
        output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .map_or(false, |v| {
                v.commands
                    .iter()
                    .any(|c| matches!(c, egui::ViewportCommand::Visible(b) if *b == visible))
            })
    }

    /// Screen rect of the first text drawn with exactly `caption`.
    fn caption_rect(output: &egui::FullOutput, caption: &str) -> egui::Rect {
        output
            .shapes
            .iter()
            .find_map(|clipped| match &clipped.shape {
                egui::Shape::Text(text) if text.galley.text() == caption => {
                    Some(egui::Rect::from_min_size(text.pos, text.galley.size()))
                }
                _ => None,
            })
            .unwrap_or_else(|| panic!("no text {caption:?} on the panel"))
    }

    fn pointer_button(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    /// Lay the panel out, then press and release the primary button on `caption`.
    /// Returns the output of the release frame.
    fn click_caption(
        ctx: &egui::Context,
        window: &mut AssistantWindow,
        caption: &str,
    ) -> egui::FullOutput {
        let layout = run_frame(ctx, window, egui::RawInput::default());
        let pos = caption_rect(&layout, caption).center();

        let press = egui::RawInput {
            events: vec![egui::Event::PointerMoved(pos), pointer_button(pos, true)],
            ..Default::default()
        };
        run_frame(ctx, window, press);

        let release = egui::RawInput {
            events: vec![pointer_button(pos, false)],
            ..Default::default()
        };
        run_frame(ctx, window, release)
    }

    fn all_actions() -> impl Iterator<Item = Action> {
        Action::TASKS.into_iter().chain(Action::RESULT)
    }

    #[test]
    fn test_starts_hidden_then_shows() {
        let mut window = AssistantWindow::new();
        assert_eq!(window.visibility(), Visibility::Hidden);

        window.show();
        assert_eq!(window.visibility(), Visibility::Visible);

        // Idempotent
        window.show();
        assert!(window.is_visible());
    }

    #[test]
    fn test_hide_keeps_input() {
        let mut window = AssistantWindow::new();
        window.show();
        window.input_text = "draft".into();

        window.hide();
        assert!(!window.is_visible());
        assert_eq!(window.input_text(), "draft");

        window.hide();
        assert_eq!(window.visibility(), Visibility::Hidden);
    }

    #[test]
    fn test_escape_hides_and_updates_native_window() {
        let ctx = egui::Context::default();
        let mut window = AssistantWindow::new();
        window.show();

        let first = run_frame(&ctx, &mut window, egui::RawInput::default());
        assert!(window.is_visible());
        assert!(sent_visible(&first, true));

        let second = run_frame(&ctx, &mut window, key(egui::Key::Escape));
        assert_eq!(window.visibility(), Visibility::Hidden);
        assert!(sent_visible(&second, false));

        // No repeated command once the native window matches
        let third = run_frame(&ctx, &mut window, egui::RawInput::default());
        assert!(!sent_visible(&third, false));
    }

    #[test]
    fn test_close_button_hides_panel() {
        let ctx = egui::Context::default();
        let mut window = AssistantWindow::new();
        window.show();
        window.input_text = "draft".into();

        let output = click_caption(&ctx, &mut window, "X");

        assert_eq!(window.visibility(), Visibility::Hidden);
        assert!(sent_visible(&output, false));
        assert_eq!(window.input_text(), "draft");
    }

    #[test]
    fn test_result_pane_hidden_on_every_construction_path() {
        let handler = RecordingHandler::default();
        for mut window in [
            AssistantWindow::new(),
            AssistantWindow::default(),
            AssistantWindow::with_handler(handler),
            AssistantWindow::from_settings(&AppSettings::default()),
        ] {
            assert!(!window.result_pane().is_visible());

            let ctx = egui::Context::default();
            window.show();
            run_frame(&ctx, &mut window, egui::RawInput::default());
            assert!(!window.result_pane().is_visible());
        }
    }

    #[test]
    fn test_submit_has_no_side_effects() {
        for input in ["", "Summarize this paragraph please", "multi\nline"] {
            let mut window = AssistantWindow::new();
            window.input_text = input.to_string();

            window.on_submit();

            assert_eq!(window.input_text(), input);
            assert!(!window.result_pane().is_visible());
            assert!(window.result_pane().content().is_empty());
        }
    }

    #[test]
    fn test_enter_in_prompt_reaches_submit_seam() {
        let handler = RecordingHandler::default();
        let calls = handler.calls.clone();
        let mut window = AssistantWindow::with_handler(handler);
        window.show();
        window.input_text = "hello".into();

        let ctx = egui::Context::default();
        run_frame(&ctx, &mut window, egui::RawInput::default());
        ctx.memory_mut(|m| m.request_focus(egui::Id::new(PROMPT_ID)));
        run_frame(&ctx, &mut window, key(egui::Key::Enter));

        assert_eq!(*calls.lock(), vec!["submit:hello".to_string()]);
        assert_eq!(window.input_text(), "hello");
    }

    #[test]
    fn test_geometry_is_fixed() {
        let summarize_top = |input: String| {
            let mut window = AssistantWindow::new();
            window.show();
            window.input_text = input;
            let ctx = egui::Context::default();
            let output = run_frame(&ctx, &mut window, egui::RawInput::default());

            let builder = window.viewport_builder();
            assert_eq!(builder.min_inner_size, Some(egui::vec2(600.0, 200.0)));
            assert_eq!(builder.max_inner_size, Some(egui::vec2(600.0, 200.0)));
            assert_eq!(window.geometry(), [600.0, 200.0]);

            caption_rect(&output, Action::Summarize.label()).top()
        };

        // The prompt keeps its height, so the rows below it do not move
        let empty = summarize_top(String::new());
        let long = summarize_top("a long line of input\n".repeat(500));
        assert_eq!(empty, long);
    }

    #[test]
    fn test_viewport_builder_describes_overlay() {
        let mut window = AssistantWindow::new();
        let builder = window.viewport_builder();
        let size = egui::vec2(600.0, 200.0);

        assert_eq!(builder.inner_size, Some(size));
        assert_eq!(builder.min_inner_size, Some(size));
        assert_eq!(builder.max_inner_size, Some(size));
        assert_eq!(builder.resizable, Some(false));
        assert_eq!(builder.decorations, Some(false));
        assert_eq!(builder.transparent, Some(true));
        assert_eq!(builder.window_level, Some(egui::WindowLevel::AlwaysOnTop));
        assert_eq!(builder.visible, Some(false));

        window.show();
        assert_eq!(window.viewport_builder().visible, Some(true));
    }

    #[test]
    fn test_buttons_have_no_effect_with_default_handler() {
        let ctx = egui::Context::default();
        let mut window = AssistantWindow::new();
        window.show();
        window.input_text = "text".into();

        for action in all_actions() {
            click_caption(&ctx, &mut window, action.label());
            window.dispatch(action);
            assert!(window.is_visible());
            assert_eq!(window.input_text(), "text");
            assert!(!window.result_pane().is_visible());
            assert!(window.result_pane().content().is_empty());
        }
    }

    #[test]
    fn test_every_button_goes_through_one_seam() {
        let handler = RecordingHandler::default();
        let calls = handler.calls.clone();
        let mut window = AssistantWindow::with_handler(handler);
        window.input_text = "x".into();

        for action in all_actions() {
            window.dispatch(action);
        }

        let expected: Vec<String> = all_actions()
            .map(|a| format!("{}:x", a.as_str()))
            .collect();
        assert_eq!(*calls.lock(), expected);
    }

    #[test]
    fn test_each_button_click_dispatches_its_action() {
        for action in all_actions() {
            let handler = RecordingHandler::default();
            let calls = handler.calls.clone();
            let mut window = AssistantWindow::with_handler(handler);
            window.show();
            window.input_text = "x".into();

            let ctx = egui::Context::default();
            click_caption(&ctx, &mut window, action.label());

            assert_eq!(*calls.lock(), vec![format!("{}:x", action.as_str())]);
            assert!(window.is_visible());
        }
    }

    #[test]
    fn test_partial_button_theme_keeps_presets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{ "theme": {
                "microphone_button": { "fill": { "r": 0, "g": 128, "b": 0, "a": 255 } },
                "close_button": { "fill": { "r": 0, "g": 0, "b": 255, "a": 255 } }
            } }"#,
        )
        .unwrap();

        let mut window = AssistantWindow::from_settings(&crate::utils::load_settings_at(&path));
        assert_eq!(window.theme.microphone_button.size, Some([40.0, 40.0]));
        assert_eq!(window.theme.microphone_button.icon_size, Some(24.0));
        assert_eq!(window.theme.close_button.size, Some([30.0, 30.0]));
        assert_eq!(window.theme.close_button.font_size, 20.0);

        // The restyled close button still works
        window.show();
        let ctx = egui::Context::default();
        click_caption(&ctx, &mut window, "X");
        assert!(!window.is_visible());
    }

    #[test]
    fn test_dropped_files_are_accepted_without_effect() {
        let ctx = egui::Context::default();
        let mut window = AssistantWindow::new();
        window.show();

        let input = egui::RawInput {
            hovered_files: vec![egui::HoveredFile {
                path: Some(PathBuf::from("/tmp/report.pdf")),
                ..Default::default()
            }],
            dropped_files: vec![egui::DroppedFile {
                path: Some(PathBuf::from("/tmp/report.pdf")),
                ..Default::default()
            }],
            ..Default::default()
        };
        run_frame(&ctx, &mut window, input);

        assert!(window.is_visible());
        assert!(window.input_text().is_empty());
        assert!(window.images.is_empty());
        assert!(!window.result_pane().is_visible());
    }

    #[test]
    fn test_icon_size_rounding() {
        assert_eq!(icon_px(None, 24), 24);
        assert_eq!(icon_px(Some(17.6), 24), 18);
        assert_eq!(icon_px(Some(0.0), 24), 1);
    }
}
