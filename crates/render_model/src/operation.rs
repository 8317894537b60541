//! The drawing capability set
//!
//! Every operation a painter can issue is listed here once. Backends, the
//! painter facade and the command recorder all key off this enum.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A drawing operation in the capability set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    // Path construction
    MoveTo,
    LineTo,
    BezierCurveTo,
    QuadraticCurveTo,
    Rect,
    RoundedRect,
    Circle,
    Ellipse,
    Polygon,
    Path,
    // Painting
    Fill,
    Stroke,
    Clip,
    // Styling
    FillColor,
    StrokeColor,
    FillOpacity,
    StrokeOpacity,
    Opacity,
    LineWidth,
    LineCap,
    LineJoin,
    MiterLimit,
    Dash,
    Font,
    FontSize,
    // Transforms
    Translate,
    Rotate,
    Scale,
    // Graphics state
    Save,
    Restore,
    // Text
    Text,
    // Gradients
    LinearGradient,
    RadialGradient,
}

/// Coarse grouping of operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    Path,
    Paint,
    Style,
    Transform,
    State,
    Text,
    Gradient,
}

impl Operation {
    /// The full capability set, in declaration order
    pub const ALL: [Operation; 33] = [
        Operation::MoveTo,
        Operation::LineTo,
        Operation::BezierCurveTo,
        Operation::QuadraticCurveTo,
        Operation::Rect,
        Operation::RoundedRect,
        Operation::Circle,
        Operation::Ellipse,
        Operation::Polygon,
        Operation::Path,
        Operation::Fill,
        Operation::Stroke,
        Operation::Clip,
        Operation::FillColor,
        Operation::StrokeColor,
        Operation::FillOpacity,
        Operation::StrokeOpacity,
        Operation::Opacity,
        Operation::LineWidth,
        Operation::LineCap,
        Operation::LineJoin,
        Operation::MiterLimit,
        Operation::Dash,
        Operation::Font,
        Operation::FontSize,
        Operation::Translate,
        Operation::Rotate,
        Operation::Scale,
        Operation::Save,
        Operation::Restore,
        Operation::Text,
        Operation::LinearGradient,
        Operation::RadialGradient,
    ];

    /// The operation's name in the drawing vocabulary (`"bezierCurveTo"`)
    pub fn name(&self) -> &'static str {
        match self {
            Operation::MoveTo => "moveTo",
            Operation::LineTo => "lineTo",
            Operation::BezierCurveTo => "bezierCurveTo",
            Operation::QuadraticCurveTo => "quadraticCurveTo",
            Operation::Rect => "rect",
            Operation::RoundedRect => "roundedRect",
            Operation::Circle => "circle",
            Operation::Ellipse => "ellipse",
            Operation::Polygon => "polygon",
            Operation::Path => "path",
            Operation::Fill => "fill",
            Operation::Stroke => "stroke",
            Operation::Clip => "clip",
            Operation::FillColor => "fillColor",
            Operation::StrokeColor => "strokeColor",
            Operation::FillOpacity => "fillOpacity",
            Operation::StrokeOpacity => "strokeOpacity",
            Operation::Opacity => "opacity",
            Operation::LineWidth => "lineWidth",
            Operation::LineCap => "lineCap",
            Operation::LineJoin => "lineJoin",
            Operation::MiterLimit => "miterLimit",
            Operation::Dash => "dash",
            Operation::Font => "font",
            Operation::FontSize => "fontSize",
            Operation::Translate => "translate",
            Operation::Rotate => "rotate",
            Operation::Scale => "scale",
            Operation::Save => "save",
            Operation::Restore => "restore",
            Operation::Text => "text",
            Operation::LinearGradient => "linearGradient",
            Operation::RadialGradient => "radialGradient",
        }
    }

    /// Look up an operation by its vocabulary name
    pub fn from_name(name: &str) -> Option<Operation> {
        Operation::ALL.into_iter().find(|op| op.name() == name)
    }

    pub fn kind(&self) -> OperationKind {
        use Operation::*;
        match self {
            MoveTo | LineTo | BezierCurveTo | QuadraticCurveTo | Rect | RoundedRect | Circle
            | Ellipse | Polygon | Path => OperationKind::Path,
            Fill | Stroke | Clip => OperationKind::Paint,
            FillColor | StrokeColor | FillOpacity | StrokeOpacity | Opacity | LineWidth
            | LineCap | LineJoin | MiterLimit | Dash | Font | FontSize => OperationKind::Style,
            Translate | Rotate | Scale => OperationKind::Transform,
            Save | Restore => OperationKind::State,
            Text => OperationKind::Text,
            LinearGradient | RadialGradient => OperationKind::Gradient,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
