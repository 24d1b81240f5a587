use ab_glyph::Font;
use egui::{Color32, ColorImage, Pos2};
use image::DynamicImage;

use crate::error::PaintError;
use crate::fill::flood_fill;
use crate::history::SnapshotHistory;
use crate::import::fit_to_canvas;
use crate::input::PointerEvent;
use crate::raster::RasterBuffer;
use crate::shapes::{self, ShapeKind};
use crate::text::draw_text;
use crate::tools::{Tool, ToolState};

/// Reference canvas dimensions
pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 500;
/// Background color; also what the eraser paints with
pub const BACKGROUND: Color32 = Color32::WHITE;

/// What an input event did, so the chrome knows whether to repaint,
/// pop an input dialog, or update its color swatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditOutcome {
    /// Nothing happened
    Idle,
    /// The live buffer was mutated mid-gesture (freehand segment)
    BufferEdited,
    /// Only the shape preview overlay changed; the buffer is untouched
    PreviewUpdated,
    /// An edit was finalized and a history snapshot recorded
    Committed,
    /// The text tool wants a string and a resolved font for this point;
    /// the chrome should follow up with [`CanvasController::insert_text`]
    TextRequested { pos: Pos2 },
    /// The picker sampled this color and switched back to the pen
    ColorPicked { color: Color32 },
}

/// One editing session: the pixel grid, its undo history and the tool
/// state, driven by pointer events from the chrome.
///
/// Constructed once per session and passed by reference to the UI glue;
/// there are no ambient singletons. Everything runs synchronously on
/// the caller's thread.
pub struct CanvasController {
    buffer: RasterBuffer,
    history: SnapshotHistory,
    tools: ToolState,
}

impl CanvasController {
    /// A session with the reference 800x500 blank canvas
    pub fn new() -> Self {
        Self::with_size(CANVAS_WIDTH, CANVAS_HEIGHT)
    }

    pub fn with_size(width: u32, height: u32) -> Self {
        let buffer = RasterBuffer::new(width, height, BACKGROUND);
        let history = SnapshotHistory::new(buffer.snapshot());
        Self {
            buffer,
            history,
            tools: ToolState::default(),
        }
    }

    pub fn buffer(&self) -> &RasterBuffer {
        &self.buffer
    }

    pub fn tool(&self) -> Tool {
        self.tools.tool()
    }

    pub fn pen_color(&self) -> Color32 {
        self.tools.pen_color()
    }

    pub fn pen_width(&self) -> u32 {
        self.tools.pen_width()
    }

    // Tool/color selection events from the chrome; plain setters.

    pub fn set_tool(&mut self, tool: Tool) {
        self.tools.select(tool);
    }

    pub fn set_pen_color(&mut self, color: Color32) {
        self.tools.set_pen_color(color);
    }

    pub fn set_pen_width(&mut self, width: u32) {
        self.tools.set_pen_width(width);
    }

    /// Route one pointer event through the active tool
    pub fn handle_event(&mut self, event: PointerEvent) -> EditOutcome {
        match event {
            PointerEvent::Down { pos } => {
                self.tools.last_pos = Some(pos);
                EditOutcome::Idle
            }
            PointerEvent::Move { pos } => self.pointer_moved(pos),
            PointerEvent::Up { pos } => self.pointer_released(pos),
        }
    }

    fn pointer_moved(&mut self, pos: Pos2) -> EditOutcome {
        match self.tools.tool() {
            Tool::Pen | Tool::Eraser => {
                let Some(last) = self.tools.last_pos else {
                    return EditOutcome::Idle;
                };
                let segment = shapes::StrokeSegment {
                    a: last,
                    b: pos,
                    width: self.tools.pen_width(),
                    color: self.tools.stroke_color(BACKGROUND),
                };
                segment.rasterize(&mut self.buffer);
                self.tools.last_pos = Some(pos);
                EditOutcome::BufferEdited
            }
            tool if tool.is_shape() => {
                if self.tools.last_pos.is_some() {
                    self.tools.pending_end = Some(pos);
                    EditOutcome::PreviewUpdated
                } else {
                    EditOutcome::Idle
                }
            }
            _ => EditOutcome::Idle,
        }
    }

    fn pointer_released(&mut self, pos: Pos2) -> EditOutcome {
        let outcome = match self.tools.tool() {
            Tool::Fill => {
                let (x, y) = pixel(pos);
                match flood_fill(&mut self.buffer, x, y, self.tools.pen_color()) {
                    Ok(()) => {
                        self.commit();
                        EditOutcome::Committed
                    }
                    Err(err) => {
                        // fill released outside the canvas: nothing was touched
                        log::warn!("fill ignored: {err}");
                        EditOutcome::Idle
                    }
                }
            }
            tool if tool.is_shape() => {
                if let (Some(anchor), Some(kind)) =
                    (self.tools.last_pos, ShapeKind::from_tool(tool))
                {
                    shapes::draw_shape(
                        &mut self.buffer,
                        kind,
                        anchor,
                        pos,
                        self.tools.pen_width(),
                        self.tools.pen_color(),
                    );
                    self.commit();
                    EditOutcome::Committed
                } else {
                    EditOutcome::Idle
                }
            }
            Tool::Picker => {
                let (x, y) = pixel(pos);
                match self.buffer.get(x, y) {
                    Ok(color) => {
                        self.tools.set_pen_color(color);
                        self.tools.select(Tool::Pen);
                        EditOutcome::ColorPicked { color }
                    }
                    // picking outside the canvas is a silent no-op
                    Err(_) => EditOutcome::Idle,
                }
            }
            Tool::Text => EditOutcome::TextRequested { pos },
            Tool::Pen | Tool::Eraser => {
                // one snapshot for the whole stroke, not per segment
                self.commit();
                EditOutcome::Committed
            }
            _ => EditOutcome::Idle,
        };
        self.tools.last_pos = None;
        self.tools.pending_end = None;
        outcome
    }

    /// Follow-up to [`EditOutcome::TextRequested`]: rasterize the string
    /// the chrome collected, in the current pen color, with `pos` as the
    /// baseline origin. Cancelled/empty input mutates nothing.
    pub fn insert_text<F: Font>(
        &mut self,
        pos: Pos2,
        text: &str,
        font: &F,
        size: f32,
    ) -> EditOutcome {
        if text.is_empty() {
            return EditOutcome::Idle;
        }
        draw_text(&mut self.buffer, pos, text, font, size, self.tools.pen_color());
        self.commit();
        EditOutcome::Committed
    }

    /// "New image": reset every pixel to the background and commit
    pub fn clear(&mut self) {
        self.buffer.fill_all(BACKGROUND);
        self.commit();
        log::info!("canvas cleared");
    }

    /// Replace the canvas with a decoded source image, scaled to cover
    /// and center-cropped to the canvas dimensions
    pub fn load_image(&mut self, source: &DynamicImage) -> Result<(), PaintError> {
        self.buffer = fit_to_canvas(source, self.buffer.width(), self.buffer.height())?;
        self.commit();
        Ok(())
    }

    /// Step one committed edit back. Returns false when already at the
    /// oldest retained state.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.buffer.restore(snapshot);
                true
            }
            None => false,
        }
    }

    /// Step one undone edit forward. Returns false when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.buffer.restore(snapshot);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Render-ready surface: the live buffer, with the pending shape
    /// drawn over a copy while a drag is in progress. The live buffer
    /// itself is never touched by previewing.
    pub fn render(&self) -> ColorImage {
        let pending = self
            .tools
            .last_pos
            .zip(self.tools.pending_end)
            .zip(ShapeKind::from_tool(self.tools.tool()));
        if let Some(((anchor, end), kind)) = pending {
            let mut preview = self.buffer.clone();
            shapes::draw_shape(
                &mut preview,
                kind,
                anchor,
                end,
                self.tools.pen_width(),
                self.tools.pen_color(),
            );
            preview.to_color_image()
        } else {
            self.buffer.to_color_image()
        }
    }

    fn commit(&mut self) {
        self.history.push(self.buffer.snapshot());
        log::debug!("edit committed with {} tool", self.tools.tool().name());
    }
}

impl Default for CanvasController {
    fn default() -> Self {
        Self::new()
    }
}

fn pixel(pos: Pos2) -> (i32, i32) {
    (pos.x.round() as i32, pos.y.round() as i32)
}
