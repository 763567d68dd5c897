//=========================================================================
// Render Primitives
//=========================================================================
//
// Display-list rendering seam.
//
// Scenes draw by recording primitive commands (rect, line, text) into a
// `Canvas`. The core thread packages the finished command list into a
// `Frame` and ships it to the platform thread, where a presentation
// backend can rasterize it. No backend is bundled; the display list is
// the contract.
//
// Architecture:
//   Scene::draw() → Canvas (records) → Frame → MPSC → Platform
//
//=========================================================================

//=== Color ===============================================================

/// RGBA color, 8 bits per channel.
///
/// The single color representation used throughout the engine; draw
/// commands, dots, and text all carry this concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Returns this color with the alpha channel replaced.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

//=== DrawCommand =========================================================

/// A single recorded draw primitive.
///
/// Coordinates are in screen space (pixels, top-left origin). Text `y`
/// is the baseline, matching typical bitmap-font draw conventions.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled axis-aligned rectangle.
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },

    /// One-pixel line segment.
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Color,
    },

    /// Text run at a fixed pixel size.
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
    },
}

//=== Canvas ==============================================================

/// Recording surface handed to scenes during `draw`.
///
/// Commands accumulate in submission order; the core loop drains them
/// into a [`Frame`] once per tick via [`take`](Self::take).
pub struct Canvas {
    width: f32,
    height: f32,
    commands: Vec<DrawCommand>,
}

impl Canvas {
    /// Creates an empty canvas with the given logical size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    //--- Dimensions -------------------------------------------------------

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    //--- Recording --------------------------------------------------------

    /// Records a filled rectangle.
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    /// Records a line segment.
    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color) {
        self.commands.push(DrawCommand::Line {
            x1,
            y1,
            x2,
            y2,
            color,
        });
    }

    /// Records a text run.
    pub fn text(&mut self, text: impl Into<String>, x: f32, y: f32, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            x,
            y,
            size,
            color,
        });
    }

    //--- Extraction -------------------------------------------------------

    /// Returns the commands recorded so far.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Takes all recorded commands, leaving the canvas empty for the
    /// next tick. Capacity is retained.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

//=== Frame ===============================================================

/// One tick's worth of draw commands, shipped core → platform.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
