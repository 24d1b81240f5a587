use egui::{Color32, Pos2};

/// Default pen width; the reference UI exposes a 4..=30 slider.
pub const DEFAULT_PEN_WIDTH: u32 = 4;
pub const PEN_WIDTH_RANGE: std::ops::RangeInclusive<u32> = 4..=30;

/// The active editing tool. Exactly one tool is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Pen,
    Fill,
    Eraser,
    Square,
    Circle,
    Line,
    Arrow,
    Text,
    Picker,
    None,
}

impl Tool {
    pub fn name(self) -> &'static str {
        match self {
            Tool::Pen => "pen",
            Tool::Fill => "fill",
            Tool::Eraser => "eraser",
            Tool::Square => "square",
            Tool::Circle => "circle",
            Tool::Line => "line",
            Tool::Arrow => "arrow",
            Tool::Text => "text",
            Tool::Picker => "picker",
            Tool::None => "none",
        }
    }

    /// Tools that draw a preview shape between anchor and cursor
    pub fn is_shape(self) -> bool {
        matches!(self, Tool::Square | Tool::Circle | Tool::Line | Tool::Arrow)
    }
}

/// Tool selection, pen settings and the in-progress gesture state.
///
/// `last_pos` is the anchor recorded on pointer-down (and, for freehand
/// strokes, advanced on every move); `pending_end` is the preview-only
/// endpoint while dragging a shape.
pub struct ToolState {
    tool: Tool,
    pen_color: Color32,
    pen_width: u32,
    eraser: bool,
    pub(crate) last_pos: Option<Pos2>,
    pub(crate) pending_end: Option<Pos2>,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            tool: Tool::Pen,
            pen_color: Color32::BLACK,
            pen_width: DEFAULT_PEN_WIDTH,
            eraser: false,
            last_pos: None,
            pending_end: None,
        }
    }
}

impl ToolState {
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switch the active tool. The eraser flag is set only while the
    /// eraser itself is selected; any other selection clears it.
    pub fn select(&mut self, tool: Tool) {
        self.eraser = tool == Tool::Eraser;
        if self.tool != tool {
            log::info!("tool selected: {}", tool.name());
        }
        self.tool = tool;
        self.last_pos = None;
        self.pending_end = None;
    }

    pub fn pen_color(&self) -> Color32 {
        self.pen_color
    }

    pub fn set_pen_color(&mut self, color: Color32) {
        self.pen_color = color;
    }

    pub fn pen_width(&self) -> u32 {
        self.pen_width
    }

    pub fn set_pen_width(&mut self, width: u32) {
        self.pen_width = width.max(1);
    }

    pub fn is_erasing(&self) -> bool {
        self.eraser
    }

    /// Color freehand segments are stamped with: background white while
    /// erasing, the pen color otherwise.
    pub fn stroke_color(&self, background: Color32) -> Color32 {
        if self.eraser { background } else { self.pen_color }
    }
}
