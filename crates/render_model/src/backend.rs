//! The drawing backend capability trait
//!
//! A backend is whatever actually produces output: a PDF content stream
//! writer, a raster canvas, a recorder for tests. It implements the methods
//! for the operations it supports. Every method has a provided body that
//! fails with `PaintError::MissingCapability`, so a partial backend compiles
//! and reports the gap the first time a painter uses it.
//!
//! Argument meaning is up to the backend; the painter forwards values as
//! given and never inspects them.

use crate::{DashOptions, FillRule, LineCap, LineJoin, Operation, Paint, PaintError, Result};

/// A concrete drawing engine the painter forwards to
pub trait DrawingBackend {
    /// Handle returned by the gradient constructors
    type Gradient;

    /// Identity used in error messages and logs
    fn backend_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    // Path construction

    fn move_to(&mut self, _x: f64, _y: f64) -> Result<()> {
        Err(PaintError::missing(self, Operation::MoveTo))
    }

    fn line_to(&mut self, _x: f64, _y: f64) -> Result<()> {
        Err(PaintError::missing(self, Operation::LineTo))
    }

    fn bezier_curve_to(
        &mut self,
        _cp1x: f64,
        _cp1y: f64,
        _cp2x: f64,
        _cp2y: f64,
        _x: f64,
        _y: f64,
    ) -> Result<()> {
        Err(PaintError::missing(self, Operation::BezierCurveTo))
    }

    fn quadratic_curve_to(&mut self, _cpx: f64, _cpy: f64, _x: f64, _y: f64) -> Result<()> {
        Err(PaintError::missing(self, Operation::QuadraticCurveTo))
    }

    fn rect(&mut self, _x: f64, _y: f64, _width: f64, _height: f64) -> Result<()> {
        Err(PaintError::missing(self, Operation::Rect))
    }

    fn rounded_rect(
        &mut self,
        _x: f64,
        _y: f64,
        _width: f64,
        _height: f64,
        _radius: f64,
    ) -> Result<()> {
        Err(PaintError::missing(self, Operation::RoundedRect))
    }

    fn circle(&mut self, _x: f64, _y: f64, _radius: f64) -> Result<()> {
        Err(PaintError::missing(self, Operation::Circle))
    }

    fn ellipse(&mut self, _x: f64, _y: f64, _rx: f64, _ry: f64) -> Result<()> {
        Err(PaintError::missing(self, Operation::Ellipse))
    }

    fn polygon(&mut self, _points: &[(f64, f64)]) -> Result<()> {
        Err(PaintError::missing(self, Operation::Polygon))
    }

    /// Append SVG path data (`"M 0 0 L 10 10 Z"`)
    fn path(&mut self, _data: &str) -> Result<()> {
        Err(PaintError::missing(self, Operation::Path))
    }

    // Painting

    fn fill(&mut self, _rule: Option<FillRule>) -> Result<()> {
        Err(PaintError::missing(self, Operation::Fill))
    }

    fn stroke(&mut self) -> Result<()> {
        Err(PaintError::missing(self, Operation::Stroke))
    }

    fn clip(&mut self, _rule: Option<FillRule>) -> Result<()> {
        Err(PaintError::missing(self, Operation::Clip))
    }

    // Styling

    fn fill_color(&mut self, _paint: &Paint<Self::Gradient>) -> Result<()> {
        Err(PaintError::missing(self, Operation::FillColor))
    }

    fn stroke_color(&mut self, _paint: &Paint<Self::Gradient>) -> Result<()> {
        Err(PaintError::missing(self, Operation::StrokeColor))
    }

    fn fill_opacity(&mut self, _opacity: f64) -> Result<()> {
        Err(PaintError::missing(self, Operation::FillOpacity))
    }

    fn stroke_opacity(&mut self, _opacity: f64) -> Result<()> {
        Err(PaintError::missing(self, Operation::StrokeOpacity))
    }

    fn opacity(&mut self, _opacity: f64) -> Result<()> {
        Err(PaintError::missing(self, Operation::Opacity))
    }

    fn line_width(&mut self, _width: f64) -> Result<()> {
        Err(PaintError::missing(self, Operation::LineWidth))
    }

    fn line_cap(&mut self, _cap: LineCap) -> Result<()> {
        Err(PaintError::missing(self, Operation::LineCap))
    }

    fn line_join(&mut self, _join: LineJoin) -> Result<()> {
        Err(PaintError::missing(self, Operation::LineJoin))
    }

    fn miter_limit(&mut self, _limit: f64) -> Result<()> {
        Err(PaintError::missing(self, Operation::MiterLimit))
    }

    fn dash(&mut self, _length: f64, _options: DashOptions) -> Result<()> {
        Err(PaintError::missing(self, Operation::Dash))
    }

    fn font(&mut self, _name: &str) -> Result<()> {
        Err(PaintError::missing(self, Operation::Font))
    }

    fn font_size(&mut self, _size: f64) -> Result<()> {
        Err(PaintError::missing(self, Operation::FontSize))
    }

    // Transforms

    fn translate(&mut self, _x: f64, _y: f64) -> Result<()> {
        Err(PaintError::missing(self, Operation::Translate))
    }

    /// Rotate by `angle` degrees, around `origin` when given
    fn rotate(&mut self, _angle: f64, _origin: Option<(f64, f64)>) -> Result<()> {
        Err(PaintError::missing(self, Operation::Rotate))
    }

    fn scale(&mut self, _x: f64, _y: f64, _origin: Option<(f64, f64)>) -> Result<()> {
        Err(PaintError::missing(self, Operation::Scale))
    }

    // Graphics state

    fn save(&mut self) -> Result<()> {
        Err(PaintError::missing(self, Operation::Save))
    }

    fn restore(&mut self) -> Result<()> {
        Err(PaintError::missing(self, Operation::Restore))
    }

    // Text

    fn text(&mut self, _content: &str, _x: f64, _y: f64) -> Result<()> {
        Err(PaintError::missing(self, Operation::Text))
    }

    // Gradients

    fn linear_gradient(
        &mut self,
        _x1: f64,
        _y1: f64,
        _x2: f64,
        _y2: f64,
    ) -> Result<Self::Gradient> {
        Err(PaintError::missing(self, Operation::LinearGradient))
    }

    fn radial_gradient(
        &mut self,
        _x1: f64,
        _y1: f64,
        _r1: f64,
        _x2: f64,
        _y2: f64,
        _r2: f64,
    ) -> Result<Self::Gradient> {
        Err(PaintError::missing(self, Operation::RadialGradient))
    }
}
