//! Integration tests for the painter facade
//!
//! A `CommandRecorder` stands in for a real backend so that every forwarded
//! call, its arguments and its order can be checked.

use proptest::prelude::*;
use render_model::{
    create_painter, Color, ColorStop, CommandRecorder, DashOptions, DrawCommand, FillRule,
    Gradient, GradientKind, LineCap, LineJoin, Operation, Paint, Painter, Result,
};

#[test]
fn test_whole_vocabulary_chains() -> Result<()> {
    let mut recorder = CommandRecorder::new();
    let mut painter = create_painter(&mut recorder);

    painter
        .move_to(0.0, 0.0)?
        .line_to(10.0, 0.0)?
        .bezier_curve_to(1.0, 2.0, 3.0, 4.0, 5.0, 6.0)?
        .quadratic_curve_to(1.0, 2.0, 3.0, 4.0)?
        .rect(0.0, 0.0, 10.0, 20.0)?
        .rounded_rect(0.0, 0.0, 10.0, 20.0, 2.0)?
        .circle(5.0, 5.0, 5.0)?
        .ellipse(5.0, 5.0, 3.0, 4.0)?
        .polygon(&[(0.0, 0.0), (10.0, 0.0), (5.0, 8.0)])?
        .path("M 0 0 L 10 10 Z")?
        .fill(None)?
        .stroke()?
        .clip(Some(FillRule::EvenOdd))?
        .fill_color(&Paint::Color(Color::BLACK))?
        .stroke_color(&Paint::Color(Color::WHITE))?
        .fill_opacity(0.5)?
        .stroke_opacity(0.25)?
        .opacity(0.75)?
        .line_width(2.0)?
        .line_cap(LineCap::Round)?
        .line_join(LineJoin::Bevel)?
        .miter_limit(4.0)?
        .dash(3.0, DashOptions::new(2.0))?
        .font("Helvetica")?
        .font_size(12.0)?
        .translate(5.0, 5.0)?
        .rotate(90.0, None)?
        .scale(2.0, 2.0, Some((1.0, 1.0)))?
        .save()?
        .restore()?
        .text("Hello", 10.0, 20.0)?
        .radial_gradient(0.0, 0.0, 0.0, 0.0, 0.0, 10.0)?
        .save()?;
    let gradient = painter.linear_gradient(0.0, 0.0, 100.0, 0.0)?;

    // Declaration order up to and including `text`, then the tail of the chain
    let expected: Vec<Operation> = Operation::ALL[..=Operation::ALL
        .iter()
        .position(|op| *op == Operation::Text)
        .unwrap()]
        .iter()
        .copied()
        .chain([Operation::RadialGradient, Operation::Save, Operation::LinearGradient])
        .collect();

    assert_eq!(gradient.id, 1);
    assert_eq!(recorder.operations(), expected);
    Ok(())
}

#[test]
fn test_linear_gradient_returns_backend_handle() -> Result<()> {
    let mut recorder = CommandRecorder::new();
    let mut painter = Painter::new(&mut recorder);

    let mut gradient = painter.linear_gradient(0.0, 0.0, 200.0, 0.0)?;
    gradient
        .stop(0.0, Color::from_hex("#ff0000").unwrap(), 1.0)
        .stop(1.0, Color::from_hex("#0000ff").unwrap(), 0.5);

    painter
        .rect(0.0, 0.0, 200.0, 100.0)?
        .fill_color(&Paint::Gradient(gradient))?
        .fill(None)?;

    match &recorder.commands()[2] {
        DrawCommand::FillColor { paint: Paint::Gradient(used) } => {
            assert_eq!(used.kind, GradientKind::Linear { x1: 0.0, y1: 0.0, x2: 200.0, y2: 0.0 });
            assert_eq!(used.stops.len(), 2);
            assert_eq!(used.stops[1].color, Color::rgb(0, 0, 255));
            assert_eq!(used.stops[1].opacity, 0.5);
        }
        other => panic!("expected gradient fill, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_radial_gradient_keeps_chain() -> Result<()> {
    let mut recorder = CommandRecorder::new();
    Painter::new(&mut recorder)
        .radial_gradient(50.0, 50.0, 0.0, 50.0, 50.0, 50.0)?
        .circle(50.0, 50.0, 50.0)?
        .fill(None)?;

    assert_eq!(
        recorder.operations(),
        vec![Operation::RadialGradient, Operation::Circle, Operation::Fill]
    );
    Ok(())
}

#[test]
fn test_sessions_on_one_backend_run_in_sequence() -> Result<()> {
    let mut recorder = CommandRecorder::new();

    {
        let mut first = Painter::new(&mut recorder);
        first.save()?.translate(0.0, 0.0)?.restore()?;
    }
    let mut second = Painter::new(&mut recorder);
    second.save()?.restore()?;

    assert_eq!(recorder.commands().len(), 5);
    assert!(recorder.is_balanced());
    Ok(())
}

#[test]
fn test_recorded_session_snapshot() -> Result<()> {
    let mut recorder = CommandRecorder::new();
    Painter::new(&mut recorder)
        .save()?
        .translate(72.0, 72.0)?
        .font_size(18.0)?
        .text("Title", 0.0, 0.0)?
        .restore()?;

    let json: serde_json::Value = serde_json::from_str(&recorder.to_json().unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "op": "save" },
            { "op": "translate", "x": 72.0, "y": 72.0 },
            { "op": "fontSize", "size": 18.0 },
            { "op": "text", "content": "Title", "x": 0.0, "y": 0.0 },
            { "op": "restore" },
        ])
    );
    Ok(())
}

/// Issue the painter call matching a recorded command
fn replay(painter: &mut Painter<'_, CommandRecorder>, command: &DrawCommand) -> Result<()> {
    match command {
        DrawCommand::MoveTo { x, y } => painter.move_to(*x, *y).map(drop),
        DrawCommand::LineTo { x, y } => painter.line_to(*x, *y).map(drop),
        DrawCommand::BezierCurveTo {
            cp1x,
            cp1y,
            cp2x,
            cp2y,
            x,
            y,
        } => painter
            .bezier_curve_to(*cp1x, *cp1y, *cp2x, *cp2y, *x, *y)
            .map(drop),
        DrawCommand::QuadraticCurveTo { cpx, cpy, x, y } => {
            painter.quadratic_curve_to(*cpx, *cpy, *x, *y).map(drop)
        }
        DrawCommand::Rect {
            x,
            y,
            width,
            height,
        } => painter.rect(*x, *y, *width, *height).map(drop),
        DrawCommand::RoundedRect {
            x,
            y,
            width,
            height,
            radius,
        } => painter
            .rounded_rect(*x, *y, *width, *height, *radius)
            .map(drop),
        DrawCommand::Circle { x, y, radius } => painter.circle(*x, *y, *radius).map(drop),
        DrawCommand::Ellipse { x, y, rx, ry } => painter.ellipse(*x, *y, *rx, *ry).map(drop),
        DrawCommand::Polygon { points } => painter.polygon(points).map(drop),
        DrawCommand::Path { data } => painter.path(data).map(drop),
        DrawCommand::Fill { rule } => painter.fill(*rule).map(drop),
        DrawCommand::Stroke => painter.stroke().map(drop),
        DrawCommand::Clip { rule } => painter.clip(*rule).map(drop),
        DrawCommand::FillColor { paint } => painter.fill_color(paint).map(drop),
        DrawCommand::StrokeColor { paint } => painter.stroke_color(paint).map(drop),
        DrawCommand::FillOpacity { opacity } => painter.fill_opacity(*opacity).map(drop),
        DrawCommand::StrokeOpacity { opacity } => painter.stroke_opacity(*opacity).map(drop),
        DrawCommand::Opacity { opacity } => painter.opacity(*opacity).map(drop),
        DrawCommand::LineWidth { width } => painter.line_width(*width).map(drop),
        DrawCommand::LineCap { cap } => painter.line_cap(*cap).map(drop),
        DrawCommand::LineJoin { join } => painter.line_join(*join).map(drop),
        DrawCommand::MiterLimit { limit } => painter.miter_limit(*limit).map(drop),
        DrawCommand::Dash { length, options } => painter.dash(*length, *options).map(drop),
        DrawCommand::Font { name } => painter.font(name).map(drop),
        DrawCommand::FontSize { size } => painter.font_size(*size).map(drop),
        DrawCommand::Translate { x, y } => painter.translate(*x, *y).map(drop),
        DrawCommand::Rotate { angle, origin } => painter.rotate(*angle, *origin).map(drop),
        DrawCommand::Scale { x, y, origin } => painter.scale(*x, *y, *origin).map(drop),
        DrawCommand::Save => painter.save().map(drop),
        DrawCommand::Restore => painter.restore().map(drop),
        DrawCommand::Text { content, x, y } => painter.text(content, *x, *y).map(drop),
        DrawCommand::LinearGradient { gradient } => match &gradient.kind {
            GradientKind::Linear { x1, y1, x2, y2 } => {
                painter.linear_gradient(*x1, *y1, *x2, *y2).map(drop)
            }
            other => panic!("linear gradient with {:?} geometry", other),
        },
        DrawCommand::RadialGradient { gradient } => match &gradient.kind {
            GradientKind::Radial {
                x1,
                y1,
                r1,
                x2,
                y2,
                r2,
            } => painter
                .radial_gradient(*x1, *y1, *r1, *x2, *y2, *r2)
                .map(drop),
            other => panic!("radial gradient with {:?} geometry", other),
        },
    }
}

/// A freshly created gradient as the recorder reports it
fn new_gradient(id: usize, kind: GradientKind) -> Gradient {
    Gradient {
        id,
        kind,
        stops: Vec::new(),
    }
}

#[test]
fn test_every_operation_forwards_its_arguments() -> Result<()> {
    let striped = Gradient {
        id: 7,
        kind: GradientKind::Linear {
            x1: 0.0,
            y1: 0.0,
            x2: 1.0,
            y2: 1.0,
        },
        stops: vec![ColorStop {
            offset: 0.5,
            color: Color::rgb(10, 20, 30),
            opacity: 0.8,
        }],
    };
    let calls = vec![
        DrawCommand::MoveTo { x: 1.0, y: 2.0 },
        DrawCommand::LineTo { x: 3.0, y: -4.0 },
        DrawCommand::BezierCurveTo {
            cp1x: 1.5,
            cp1y: 2.5,
            cp2x: 3.5,
            cp2y: 4.5,
            x: 5.5,
            y: 6.5,
        },
        DrawCommand::QuadraticCurveTo {
            cpx: 7.0,
            cpy: 8.0,
            x: 9.0,
            y: 10.0,
        },
        DrawCommand::Rect {
            x: 0.0,
            y: 1.0,
            width: 20.0,
            height: 30.0,
        },
        DrawCommand::RoundedRect {
            x: 2.0,
            y: 3.0,
            width: 40.0,
            height: 50.0,
            radius: 4.0,
        },
        DrawCommand::Circle {
            x: 5.0,
            y: 6.0,
            radius: 7.0,
        },
        DrawCommand::Ellipse {
            x: 8.0,
            y: 9.0,
            rx: 10.0,
            ry: 11.0,
        },
        DrawCommand::Polygon {
            points: vec![(0.0, 0.0), (12.0, 0.0), (6.0, 9.0)],
        },
        DrawCommand::Path {
            data: "M 0 0 C 1 1 2 2 3 3".to_string(),
        },
        DrawCommand::Fill {
            rule: Some(FillRule::NonZero),
        },
        DrawCommand::Stroke,
        DrawCommand::Clip {
            rule: Some(FillRule::EvenOdd),
        },
        DrawCommand::FillColor {
            paint: Paint::Gradient(striped),
        },
        DrawCommand::StrokeColor {
            paint: Paint::Color(Color::rgba(1, 2, 3, 4)),
        },
        DrawCommand::FillOpacity { opacity: 0.1 },
        DrawCommand::StrokeOpacity { opacity: 0.2 },
        DrawCommand::Opacity { opacity: 0.3 },
        DrawCommand::LineWidth { width: 1.25 },
        DrawCommand::LineCap {
            cap: LineCap::Square,
        },
        DrawCommand::LineJoin {
            join: LineJoin::Round,
        },
        DrawCommand::MiterLimit { limit: 10.0 },
        DrawCommand::Dash {
            length: 4.0,
            options: DashOptions::new(2.0).with_phase(1.0),
        },
        DrawCommand::Font {
            name: "Times-Roman".to_string(),
        },
        DrawCommand::FontSize { size: 9.5 },
        DrawCommand::Translate { x: -3.0, y: 4.0 },
        DrawCommand::Rotate {
            angle: 45.0,
            origin: Some((10.0, 10.0)),
        },
        DrawCommand::Scale {
            x: 2.0,
            y: 0.5,
            origin: Some((1.0, 2.0)),
        },
        DrawCommand::Save,
        DrawCommand::Restore,
        DrawCommand::Text {
            content: "Chapter 1".to_string(),
            x: 72.0,
            y: 96.0,
        },
        DrawCommand::LinearGradient {
            gradient: new_gradient(
                0,
                GradientKind::Linear {
                    x1: 0.0,
                    y1: 0.0,
                    x2: 100.0,
                    y2: 50.0,
                },
            ),
        },
        DrawCommand::RadialGradient {
            gradient: new_gradient(
                1,
                GradientKind::Radial {
                    x1: 5.0,
                    y1: 5.0,
                    r1: 1.0,
                    x2: 6.0,
                    y2: 6.0,
                    r2: 20.0,
                },
            ),
        },
    ];

    let mut recorder = CommandRecorder::new();
    let mut painter = Painter::new(&mut recorder);
    for call in &calls {
        replay(&mut painter, call)?;
    }

    let covered: Vec<Operation> = calls.iter().map(DrawCommand::operation).collect();
    assert_eq!(covered, Operation::ALL.to_vec());
    assert_eq!(recorder.commands(), calls.as_slice());
    Ok(())
}

fn coordinate() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

fn unit() -> impl Strategy<Value = f64> {
    0.0..=1.0f64
}

fn origin() -> impl Strategy<Value = Option<(f64, f64)>> {
    prop::option::of((coordinate(), coordinate()))
}

fn fill_rule() -> impl Strategy<Value = Option<FillRule>> {
    prop::option::of(prop_oneof![Just(FillRule::NonZero), Just(FillRule::EvenOdd)])
}

fn color() -> impl Strategy<Value = Color> {
    any::<(u8, u8, u8, u8)>().prop_map(|(r, g, b, a)| Color::rgba(r, g, b, a))
}

fn linear_kind() -> impl Strategy<Value = GradientKind> {
    (coordinate(), coordinate(), coordinate(), coordinate())
        .prop_map(|(x1, y1, x2, y2)| GradientKind::Linear { x1, y1, x2, y2 })
}

fn radial_kind() -> impl Strategy<Value = GradientKind> {
    (
        coordinate(),
        coordinate(),
        coordinate(),
        coordinate(),
        coordinate(),
        coordinate(),
    )
        .prop_map(|(x1, y1, r1, x2, y2, r2)| GradientKind::Radial {
            x1,
            y1,
            r1,
            x2,
            y2,
            r2,
        })
}

fn paint() -> impl Strategy<Value = Paint<Gradient>> {
    let stop = (unit(), color(), unit()).prop_map(|(offset, color, opacity)| ColorStop {
        offset,
        color,
        opacity,
    });
    let gradient = (
        0..16usize,
        prop_oneof![linear_kind(), radial_kind()],
        prop::collection::vec(stop, 0..4),
    )
        .prop_map(|(id, kind, stops)| Gradient { id, kind, stops });
    prop_oneof![
        color().prop_map(Paint::Color),
        gradient.prop_map(Paint::Gradient),
    ]
}

fn path_command() -> impl Strategy<Value = DrawCommand> {
    prop_oneof![
        (coordinate(), coordinate()).prop_map(|(x, y)| DrawCommand::MoveTo { x, y }),
        (coordinate(), coordinate()).prop_map(|(x, y)| DrawCommand::LineTo { x, y }),
        (
            coordinate(),
            coordinate(),
            coordinate(),
            coordinate(),
            coordinate(),
            coordinate(),
        )
            .prop_map(|(cp1x, cp1y, cp2x, cp2y, x, y)| DrawCommand::BezierCurveTo {
                cp1x,
                cp1y,
                cp2x,
                cp2y,
                x,
                y,
            }),
        (coordinate(), coordinate(), coordinate(), coordinate())
            .prop_map(|(cpx, cpy, x, y)| DrawCommand::QuadraticCurveTo { cpx, cpy, x, y }),
        (coordinate(), coordinate(), coordinate(), coordinate()).prop_map(
            |(x, y, width, height)| DrawCommand::Rect {
                x,
                y,
                width,
                height,
            }
        ),
        (coordinate(), coordinate(), coordinate(), coordinate(), coordinate()).prop_map(
            |(x, y, width, height, radius)| DrawCommand::RoundedRect {
                x,
                y,
                width,
                height,
                radius,
            }
        ),
        (coordinate(), coordinate(), coordinate())
            .prop_map(|(x, y, radius)| DrawCommand::Circle { x, y, radius }),
        (coordinate(), coordinate(), coordinate(), coordinate())
            .prop_map(|(x, y, rx, ry)| DrawCommand::Ellipse { x, y, rx, ry }),
        prop::collection::vec((coordinate(), coordinate()), 0..8)
            .prop_map(|points| DrawCommand::Polygon { points }),
        "[MLCZ0-9 ]{0,24}".prop_map(|data| DrawCommand::Path { data }),
    ]
}

fn paint_command() -> impl Strategy<Value = DrawCommand> {
    prop_oneof![
        fill_rule().prop_map(|rule| DrawCommand::Fill { rule }),
        Just(DrawCommand::Stroke),
        fill_rule().prop_map(|rule| DrawCommand::Clip { rule }),
        paint().prop_map(|paint| DrawCommand::FillColor { paint }),
        paint().prop_map(|paint| DrawCommand::StrokeColor { paint }),
    ]
}

fn style_command() -> impl Strategy<Value = DrawCommand> {
    prop_oneof![
        unit().prop_map(|opacity| DrawCommand::FillOpacity { opacity }),
        unit().prop_map(|opacity| DrawCommand::StrokeOpacity { opacity }),
        unit().prop_map(|opacity| DrawCommand::Opacity { opacity }),
        (0.0..100.0f64).prop_map(|width| DrawCommand::LineWidth { width }),
        prop_oneof![Just(LineCap::Butt), Just(LineCap::Round), Just(LineCap::Square)]
            .prop_map(|cap| DrawCommand::LineCap { cap }),
        prop_oneof![Just(LineJoin::Miter), Just(LineJoin::Round), Just(LineJoin::Bevel)]
            .prop_map(|join| DrawCommand::LineJoin { join }),
        (0.0..100.0f64).prop_map(|limit| DrawCommand::MiterLimit { limit }),
        (
            0.0..100.0f64,
            prop::option::of(0.0..100.0f64),
            0.0..100.0f64,
        )
            .prop_map(|(length, space, phase)| DrawCommand::Dash {
                length,
                options: DashOptions { space, phase },
            }),
        "[A-Za-z-]{1,16}".prop_map(|name| DrawCommand::Font { name }),
        (1.0..200.0f64).prop_map(|size| DrawCommand::FontSize { size }),
    ]
}

fn transform_command() -> impl Strategy<Value = DrawCommand> {
    prop_oneof![
        (coordinate(), coordinate()).prop_map(|(x, y)| DrawCommand::Translate { x, y }),
        (coordinate(), origin())
            .prop_map(|(angle, origin)| DrawCommand::Rotate { angle, origin }),
        (coordinate(), coordinate(), origin())
            .prop_map(|(x, y, origin)| DrawCommand::Scale { x, y, origin }),
        Just(DrawCommand::Save),
        Just(DrawCommand::Restore),
        (".{0,12}", coordinate(), coordinate())
            .prop_map(|(content, x, y)| DrawCommand::Text { content, x, y }),
    ]
}

fn gradient_command() -> impl Strategy<Value = DrawCommand> {
    // Ids are assigned in creation order by `session`
    prop_oneof![
        linear_kind().prop_map(|kind| DrawCommand::LinearGradient {
            gradient: new_gradient(0, kind),
        }),
        radial_kind().prop_map(|kind| DrawCommand::RadialGradient {
            gradient: new_gradient(0, kind),
        }),
    ]
}

/// A sequence of painter calls as the recorder should log them
fn session() -> impl Strategy<Value = Vec<DrawCommand>> {
    let command = prop_oneof![
        path_command(),
        paint_command(),
        style_command(),
        transform_command(),
        gradient_command(),
    ];
    prop::collection::vec(command, 0..40).prop_map(|mut commands| {
        let created = commands.iter_mut().filter_map(|command| match command {
            DrawCommand::LinearGradient { gradient } | DrawCommand::RadialGradient { gradient } => {
                Some(gradient)
            }
            _ => None,
        });
        for (id, gradient) in created.enumerate() {
            gradient.id = id;
        }
        commands
    })
}

proptest! {
    #[test]
    fn prop_each_call_forwards_once_with_exact_arguments(commands in session()) {
        let mut recorder = CommandRecorder::new();
        let mut painter = Painter::new(&mut recorder);
        for command in &commands {
            replay(&mut painter, command).unwrap();
        }

        prop_assert_eq!(recorder.commands(), commands.as_slice());
    }
}
