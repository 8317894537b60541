//! Chainable painter facade
//!
//! A `Painter` wraps a mutable borrow of a backend for one paint session and
//! exposes one method per operation in the capability set. Each call forwards
//! its arguments unchanged to the backend's method of the same name, exactly
//! once, and hands the painter back so calls can be chained:
//!
//! ```
//! # use render_model::*;
//! # fn paint(backend: &mut CommandRecorder) -> Result<()> {
//! let mut painter = Painter::new(backend);
//! painter
//!     .save()?
//!     .translate(10.0, 20.0)?
//!     .rect(0.0, 0.0, 100.0, 50.0)?
//!     .fill(None)?
//!     .restore()?;
//! # Ok(())
//! # }
//! ```
//!
//! `linear_gradient` is the exception: it returns the backend's gradient
//! handle so the caller can add color stops before using it as a paint.
//! The mutable borrow keeps two painters from driving the same backend at
//! once.

use crate::{
    DashOptions, DrawingBackend, FillRule, LineCap, LineJoin, Operation, Paint, PaintError,
    Result,
};

/// Fluent drawing facade over a `DrawingBackend`
#[derive(Debug)]
pub struct Painter<'a, B: DrawingBackend + ?Sized> {
    backend: &'a mut B,
}

/// Declares a chainable method forwarding to the backend method of the same name
macro_rules! forward {
    ($(#[$meta:meta])* $method:ident => $op:ident($($arg:ident: $ty:ty),*)) => {
        $(#[$meta])*
        pub fn $method(&mut self, $($arg: $ty),*) -> Result<&mut Self> {
            self.forward(Operation::$op, |backend| backend.$method($($arg),*).map(drop))?;
            Ok(self)
        }
    };
}

impl<'a, B: DrawingBackend + ?Sized> Painter<'a, B> {
    /// Start a paint session on `backend`
    pub fn new(backend: &'a mut B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &*self.backend
    }

    /// End the session and give the backend borrow back
    pub fn into_backend(self) -> &'a mut B {
        self.backend
    }

    fn forward<T>(
        &mut self,
        operation: Operation,
        call: impl FnOnce(&mut B) -> Result<T>,
    ) -> Result<T> {
        tracing::trace!(%operation, kind = ?operation.kind(), "forwarding drawing operation");
        call(&mut *self.backend).map_err(|err| {
            if let PaintError::MissingCapability { backend, .. } = &err {
                tracing::debug!(%operation, %backend, "backend lacks drawing capability");
            }
            err
        })
    }

    // Path construction

    forward!(move_to => MoveTo(x: f64, y: f64));
    forward!(line_to => LineTo(x: f64, y: f64));
    forward!(
        /// Cubic curve from the current point through two control points
        bezier_curve_to => BezierCurveTo(
            cp1x: f64,
            cp1y: f64,
            cp2x: f64,
            cp2y: f64,
            x: f64,
            y: f64
        )
    );
    forward!(quadratic_curve_to => QuadraticCurveTo(cpx: f64, cpy: f64, x: f64, y: f64));
    forward!(rect => Rect(x: f64, y: f64, width: f64, height: f64));
    forward!(rounded_rect => RoundedRect(x: f64, y: f64, width: f64, height: f64, radius: f64));
    forward!(circle => Circle(x: f64, y: f64, radius: f64));
    forward!(ellipse => Ellipse(x: f64, y: f64, rx: f64, ry: f64));
    forward!(polygon => Polygon(points: &[(f64, f64)]));
    forward!(
        /// Append SVG path data
        path => Path(data: &str)
    );

    // Painting

    forward!(fill => Fill(rule: Option<FillRule>));
    forward!(stroke => Stroke());
    forward!(clip => Clip(rule: Option<FillRule>));

    // Styling

    forward!(fill_color => FillColor(paint: &Paint<B::Gradient>));
    forward!(stroke_color => StrokeColor(paint: &Paint<B::Gradient>));
    forward!(fill_opacity => FillOpacity(opacity: f64));
    forward!(stroke_opacity => StrokeOpacity(opacity: f64));
    forward!(opacity => Opacity(opacity: f64));
    forward!(line_width => LineWidth(width: f64));
    forward!(line_cap => LineCap(cap: LineCap));
    forward!(line_join => LineJoin(join: LineJoin));
    forward!(miter_limit => MiterLimit(limit: f64));
    forward!(dash => Dash(length: f64, options: DashOptions));
    forward!(font => Font(name: &str));
    forward!(font_size => FontSize(size: f64));

    // Transforms

    forward!(translate => Translate(x: f64, y: f64));
    forward!(
        /// Rotate by `angle` degrees, around `origin` when given
        rotate => Rotate(angle: f64, origin: Option<(f64, f64)>)
    );
    forward!(scale => Scale(x: f64, y: f64, origin: Option<(f64, f64)>));

    // Graphics state

    forward!(save => Save());
    forward!(restore => Restore());

    // Text

    forward!(text => Text(content: &str, x: f64, y: f64));

    // Gradients

    forward!(
        /// Create a radial gradient on the backend. The handle is discarded
        /// and the painter is returned, unlike `linear_gradient`.
        radial_gradient => RadialGradient(
            x1: f64,
            y1: f64,
            r1: f64,
            x2: f64,
            y2: f64,
            r2: f64
        )
    );

    /// Create a linear gradient and return the backend's handle.
    ///
    /// This ends the chain; configure the handle, wrap it in
    /// `Paint::Gradient` and pass it to `fill_color` or `stroke_color`.
    pub fn linear_gradient(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    ) -> Result<B::Gradient> {
        self.forward(Operation::LinearGradient, |backend| {
            backend.linear_gradient(x1, y1, x2, y2)
        })
    }
}

/// Start a paint session on `backend`
pub fn create_painter<B: DrawingBackend + ?Sized>(backend: &mut B) -> Painter<'_, B> {
    Painter::new(backend)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Backend that only knows how to move and save
    #[derive(Debug, Default)]
    struct SparseBackend {
        moves: Vec<(f64, f64)>,
        saves: usize,
    }

    impl DrawingBackend for SparseBackend {
        type Gradient = ();

        fn backend_name(&self) -> &str {
            "sparse"
        }

        fn move_to(&mut self, x: f64, y: f64) -> Result<()> {
            self.moves.push((x, y));
            Ok(())
        }

        fn save(&mut self) -> Result<()> {
            self.saves += 1;
            Ok(())
        }
    }

    #[test]
    fn test_supported_operations_chain() {
        let mut backend = SparseBackend::default();
        Painter::new(&mut backend)
            .save()
            .unwrap()
            .move_to(1.0, 2.0)
            .unwrap()
            .move_to(3.0, 4.0)
            .unwrap();

        assert_eq!(backend.moves, vec![(1.0, 2.0), (3.0, 4.0)]);
        assert_eq!(backend.saves, 1);
    }

    #[test]
    fn test_missing_capability_names_operation_and_backend() {
        let mut backend = SparseBackend::default();
        let mut painter = create_painter(&mut backend);

        let err = painter
            .move_to(0.0, 0.0)
            .and_then(|p| p.line_to(5.0, 5.0))
            .unwrap_err();

        match &err {
            PaintError::MissingCapability { operation, backend } => {
                assert_eq!(*operation, Operation::LineTo);
                assert_eq!(backend, "sparse");
            }
            other => panic!("expected MissingCapability, got {:?}", other),
        }
        assert_eq!(err.to_string(), "Backend sparse does not support lineTo");
        // The call before the failure still reached the backend
        assert_eq!(painter.into_backend().moves, vec![(0.0, 0.0)]);
    }

    #[test]
    fn test_missing_gradient_capability() {
        let mut backend = SparseBackend::default();
        let err = Painter::new(&mut backend)
            .linear_gradient(0.0, 0.0, 1.0, 1.0)
            .unwrap_err();
        assert_eq!(err.operation(), Operation::LinearGradient);
    }

    #[test]
    fn test_default_backend_name_is_type_name() {
        #[derive(Debug)]
        struct Nothing;
        impl DrawingBackend for Nothing {
            type Gradient = ();
        }

        let mut backend = Nothing;
        let err = Painter::new(&mut backend).stroke().unwrap_err();
        assert!(err.to_string().contains("Nothing"), "{}", err);
    }

    #[test]
    fn test_painter_over_trait_object() {
        let mut backend = SparseBackend::default();
        let dynamic: &mut dyn DrawingBackend<Gradient = ()> = &mut backend;
        Painter::new(dynamic).save().unwrap().save().unwrap();
        assert_eq!(backend.saves, 2);
    }
}
