//! File drag-and-drop tracking.
//!
//! Uses egui's raw hovered/dropped file lists, which the native layer fills
//! for the whole window.

use egui::Context;
use std::path::PathBuf;

/// What happened with file drags during one frame.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DragEvents {
    /// Files started hovering over the window this frame.
    pub entered: bool,
    /// Paths dropped this frame.
    pub dropped: Vec<PathBuf>,
}

/// Tracks file drags across frames so a drag-enter is reported once.
#[derive(Debug, Default)]
pub struct DragDropTracker {
    hovering: bool,
}

impl DragDropTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this frame's drag state. Call once per frame.
    pub fn update(&mut self, ctx: &Context) -> DragEvents {
        ctx.input(|i| {
            let hovering = !i.raw.hovered_files.is_empty();
            let entered = hovering && !self.hovering;
            self.hovering = hovering;

            DragEvents {
                entered,
                dropped: i
                    .raw
                    .dropped_files
                    .iter()
                    .filter_map(|file| file.path.clone())
                    .collect(),
            }
        })
    }
}
