//! Recording backend
//!
//! `CommandRecorder` implements the whole capability set by appending each
//! call to a command log. It is used to assert on what a painter emitted and
//! to snapshot paint sessions as JSON.

use crate::{
    Color, DashOptions, DrawingBackend, FillRule, LineCap, LineJoin, Operation, Paint, Result,
};
use serde::{Deserialize, Serialize};

/// Geometry of a gradient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GradientKind {
    Linear {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    Radial {
        x1: f64,
        y1: f64,
        r1: f64,
        x2: f64,
        y2: f64,
        r2: f64,
    },
}

/// A color stop along a gradient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    /// Position along the gradient, 0.0..=1.0
    pub offset: f64,
    pub color: Color,
    pub opacity: f64,
}

/// Gradient handle handed out by `CommandRecorder`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    /// Creation order within the recorder, starting at 0
    pub id: usize,
    pub kind: GradientKind,
    pub stops: Vec<ColorStop>,
}

impl Gradient {
    /// Add a color stop
    pub fn stop(&mut self, offset: f64, color: Color, opacity: f64) -> &mut Self {
        self.stops.push(ColorStop {
            offset,
            color,
            opacity,
        });
        self
    }
}

/// One recorded backend call with its arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    BezierCurveTo {
        cp1x: f64,
        cp1y: f64,
        cp2x: f64,
        cp2y: f64,
        x: f64,
        y: f64,
    },
    QuadraticCurveTo {
        cpx: f64,
        cpy: f64,
        x: f64,
        y: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    RoundedRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        radius: f64,
    },
    Circle { x: f64, y: f64, radius: f64 },
    Ellipse {
        x: f64,
        y: f64,
        rx: f64,
        ry: f64,
    },
    Polygon { points: Vec<(f64, f64)> },
    Path { data: String },
    Fill { rule: Option<FillRule> },
    Stroke,
    Clip { rule: Option<FillRule> },
    FillColor { paint: Paint<Gradient> },
    StrokeColor { paint: Paint<Gradient> },
    FillOpacity { opacity: f64 },
    StrokeOpacity { opacity: f64 },
    Opacity { opacity: f64 },
    LineWidth { width: f64 },
    LineCap { cap: LineCap },
    LineJoin { join: LineJoin },
    MiterLimit { limit: f64 },
    Dash {
        length: f64,
        options: DashOptions,
    },
    Font { name: String },
    FontSize { size: f64 },
    Translate { x: f64, y: f64 },
    Rotate {
        angle: f64,
        origin: Option<(f64, f64)>,
    },
    Scale {
        x: f64,
        y: f64,
        origin: Option<(f64, f64)>,
    },
    Save,
    Restore,
    Text {
        content: String,
        x: f64,
        y: f64,
    },
    LinearGradient { gradient: Gradient },
    RadialGradient { gradient: Gradient },
}

impl DrawCommand {
    /// The operation this command records
    pub fn operation(&self) -> Operation {
        match self {
            DrawCommand::MoveTo { .. } => Operation::MoveTo,
            DrawCommand::LineTo { .. } => Operation::LineTo,
            DrawCommand::BezierCurveTo { .. } => Operation::BezierCurveTo,
            DrawCommand::QuadraticCurveTo { .. } => Operation::QuadraticCurveTo,
            DrawCommand::Rect { .. } => Operation::Rect,
            DrawCommand::RoundedRect { .. } => Operation::RoundedRect,
            DrawCommand::Circle { .. } => Operation::Circle,
            DrawCommand::Ellipse { .. } => Operation::Ellipse,
            DrawCommand::Polygon { .. } => Operation::Polygon,
            DrawCommand::Path { .. } => Operation::Path,
            DrawCommand::Fill { .. } => Operation::Fill,
            DrawCommand::Stroke => Operation::Stroke,
            DrawCommand::Clip { .. } => Operation::Clip,
            DrawCommand::FillColor { .. } => Operation::FillColor,
            DrawCommand::StrokeColor { .. } => Operation::StrokeColor,
            DrawCommand::FillOpacity { .. } => Operation::FillOpacity,
            DrawCommand::StrokeOpacity { .. } => Operation::StrokeOpacity,
            DrawCommand::Opacity { .. } => Operation::Opacity,
            DrawCommand::LineWidth { .. } => Operation::LineWidth,
            DrawCommand::LineCap { .. } => Operation::LineCap,
            DrawCommand::LineJoin { .. } => Operation::LineJoin,
            DrawCommand::MiterLimit { .. } => Operation::MiterLimit,
            DrawCommand::Dash { .. } => Operation::Dash,
            DrawCommand::Font { .. } => Operation::Font,
            DrawCommand::FontSize { .. } => Operation::FontSize,
            DrawCommand::Translate { .. } => Operation::Translate,
            DrawCommand::Rotate { .. } => Operation::Rotate,
            DrawCommand::Scale { .. } => Operation::Scale,
            DrawCommand::Save => Operation::Save,
            DrawCommand::Restore => Operation::Restore,
            DrawCommand::Text { .. } => Operation::Text,
            DrawCommand::LinearGradient { .. } => Operation::LinearGradient,
            DrawCommand::RadialGradient { .. } => Operation::RadialGradient,
        }
    }
}

/// Backend that records every call it receives
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
    gradients: usize,
    depth: usize,
    unbalanced_restores: usize,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands in the order they were received
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Operations in the order they were received
    pub fn operations(&self) -> Vec<Operation> {
        self.commands.iter().map(DrawCommand::operation).collect()
    }

    /// Current graphics state nesting (saves minus restores)
    pub fn save_depth(&self) -> usize {
        self.depth
    }

    /// Whether every save was restored and no restore came without a save
    pub fn is_balanced(&self) -> bool {
        self.depth == 0 && self.unbalanced_restores == 0
    }

    /// Drain the log, keeping gradient numbering and save depth
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// The command log as a JSON array
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.commands)
    }

    fn record(&mut self, command: DrawCommand) -> Result<()> {
        self.commands.push(command);
        Ok(())
    }

    fn new_gradient(&mut self, kind: GradientKind) -> Gradient {
        let gradient = Gradient {
            id: self.gradients,
            kind,
            stops: Vec::new(),
        };
        self.gradients += 1;
        gradient
    }
}

impl DrawingBackend for CommandRecorder {
    type Gradient = Gradient;

    fn backend_name(&self) -> &str {
        "recorder"
    }

    fn move_to(&mut self, x: f64, y: f64) -> Result<()> {
        self.record(DrawCommand::MoveTo { x, y })
    }

    fn line_to(&mut self, x: f64, y: f64) -> Result<()> {
        self.record(DrawCommand::LineTo { x, y })
    }

    fn bezier_curve_to(
        &mut self,
        cp1x: f64,
        cp1y: f64,
        cp2x: f64,
        cp2y: f64,
        x: f64,
        y: f64,
    ) -> Result<()> {
        self.record(DrawCommand::BezierCurveTo {
            cp1x,
            cp1y,
            cp2x,
            cp2y,
            x,
            y,
        })
    }

    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) -> Result<()> {
        self.record(DrawCommand::QuadraticCurveTo {
            cpx,
            cpy,
            x,
            y,
        })
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<()> {
        self.record(DrawCommand::Rect {
            x,
            y,
            width,
            height,
        })
    }

    fn rounded_rect(&mut self, x: f64, y: f64, width: f64, height: f64, radius: f64) -> Result<()> {
        self.record(DrawCommand::RoundedRect {
            x,
            y,
            width,
            height,
            radius,
        })
    }

    fn circle(&mut self, x: f64, y: f64, radius: f64) -> Result<()> {
        self.record(DrawCommand::Circle { x, y, radius })
    }

    fn ellipse(&mut self, x: f64, y: f64, rx: f64, ry: f64) -> Result<()> {
        self.record(DrawCommand::Ellipse { x, y, rx, ry })
    }

    fn polygon(&mut self, points: &[(f64, f64)]) -> Result<()> {
        self.record(DrawCommand::Polygon {
            points: points.to_vec(),
        })
    }

    fn path(&mut self, data: &str) -> Result<()> {
        self.record(DrawCommand::Path {
            data: data.to_string(),
        })
    }

    fn fill(&mut self, rule: Option<FillRule>) -> Result<()> {
        self.record(DrawCommand::Fill { rule })
    }

    fn stroke(&mut self) -> Result<()> {
        self.record(DrawCommand::Stroke)
    }

    fn clip(&mut self, rule: Option<FillRule>) -> Result<()> {
        self.record(DrawCommand::Clip { rule })
    }

    fn fill_color(&mut self, paint: &Paint<Gradient>) -> Result<()> {
        self.record(DrawCommand::FillColor {
            paint: paint.clone(),
        })
    }

    fn stroke_color(&mut self, paint: &Paint<Gradient>) -> Result<()> {
        self.record(DrawCommand::StrokeColor {
            paint: paint.clone(),
        })
    }

    fn fill_opacity(&mut self, opacity: f64) -> Result<()> {
        self.record(DrawCommand::FillOpacity { opacity })
    }

    fn stroke_opacity(&mut self, opacity: f64) -> Result<()> {
        self.record(DrawCommand::StrokeOpacity { opacity })
    }

    fn opacity(&mut self, opacity: f64) -> Result<()> {
        self.record(DrawCommand::Opacity { opacity })
    }

    fn line_width(&mut self, width: f64) -> Result<()> {
        self.record(DrawCommand::LineWidth { width })
    }

    fn line_cap(&mut self, cap: LineCap) -> Result<()> {
        self.record(DrawCommand::LineCap { cap })
    }

    fn line_join(&mut self, join: LineJoin) -> Result<()> {
        self.record(DrawCommand::LineJoin { join })
    }

    fn miter_limit(&mut self, limit: f64) -> Result<()> {
        self.record(DrawCommand::MiterLimit { limit })
    }

    fn dash(&mut self, length: f64, options: DashOptions) -> Result<()> {
        self.record(DrawCommand::Dash { length, options })
    }

    fn font(&mut self, name: &str) -> Result<()> {
        self.record(DrawCommand::Font {
            name: name.to_string(),
        })
    }

    fn font_size(&mut self, size: f64) -> Result<()> {
        self.record(DrawCommand::FontSize { size })
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<()> {
        self.record(DrawCommand::Translate { x, y })
    }

    fn rotate(&mut self, angle: f64, origin: Option<(f64, f64)>) -> Result<()> {
        self.record(DrawCommand::Rotate { angle, origin })
    }

    fn scale(&mut self, x: f64, y: f64, origin: Option<(f64, f64)>) -> Result<()> {
        self.record(DrawCommand::Scale { x, y, origin })
    }

    fn save(&mut self) -> Result<()> {
        self.depth += 1;
        self.record(DrawCommand::Save)
    }

    fn restore(&mut self) -> Result<()> {
        match self.depth.checked_sub(1) {
            Some(depth) => self.depth = depth,
            None => self.unbalanced_restores += 1,
        }
        self.record(DrawCommand::Restore)
    }

    fn text(&mut self, content: &str, x: f64, y: f64) -> Result<()> {
        self.record(DrawCommand::Text {
            content: content.to_string(),
            x,
            y,
        })
    }

    fn linear_gradient(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Gradient> {
        let gradient = self.new_gradient(GradientKind::Linear { x1, y1, x2, y2 });
        self.record(DrawCommand::LinearGradient {
            gradient: gradient.clone(),
        })?;
        Ok(gradient)
    }

    fn radial_gradient(
        &mut self,
        x1: f64,
        y1: f64,
        r1: f64,
        x2: f64,
        y2: f64,
        r2: f64,
    ) -> Result<Gradient> {
        let gradient = self.new_gradient(GradientKind::Radial {
            x1,
            y1,
            r1,
            x2,
            y2,
            r2,
        });
        self.record(DrawCommand::RadialGradient {
            gradient: gradient.clone(),
        })?;
        Ok(gradient)
    }
}
