//! Page size and orientation props

use crate::PaperSize;
use doc_model::PageBox;
use serde_json::{Map, Value};

/// Prop key holding a page's size
pub const SIZE_PROP: &str = "size";
/// Prop key holding a page's orientation
pub const ORIENTATION_PROP: &str = "orientation";

/// The shapes a page's `size` prop can take
#[derive(Debug, Clone, PartialEq)]
pub enum SizeSpec {
    /// A table name such as `"A4"`
    Named(String),
    /// `[width, height]`, taken verbatim
    Pair(Option<f64>, Option<f64>),
    /// `{width, height}`, either key may be missing
    Dimensions {
        width: Option<f64>,
        height: Option<f64>,
    },
    /// A bare number, which only fixes the width
    Width(f64),
    /// Any other value; neither side is known
    Unsized,
}

impl SizeSpec {
    /// Interpret a prop value. `null` counts as absent.
    pub fn from_value(value: &Value) -> Option<SizeSpec> {
        let spec = match value {
            Value::Null => return None,
            Value::String(name) => SizeSpec::Named(name.clone()),
            Value::Array(items) => SizeSpec::Pair(
                items.first().and_then(Value::as_f64),
                items.get(1).and_then(Value::as_f64),
            ),
            Value::Object(fields) => SizeSpec::Dimensions {
                width: fields.get("width").and_then(Value::as_f64),
                height: fields.get("height").and_then(Value::as_f64),
            },
            Value::Number(number) => match number.as_f64() {
                Some(width) => SizeSpec::Width(width),
                None => SizeSpec::Unsized,
            },
            Value::Bool(_) => SizeSpec::Unsized,
        };
        Some(spec)
    }

    /// The untransposed box this spec describes.
    ///
    /// Returns `None` only for a `Named` spec the table does not know.
    pub fn base_box(&self) -> Option<PageBox> {
        match self {
            SizeSpec::Named(name) => PaperSize::from_name(name)
                .map(|size| PageBox::sized(size.width(), size.height())),
            SizeSpec::Pair(width, height) => Some(PageBox::new(*width, *height)),
            SizeSpec::Dimensions { width, height } => Some(PageBox::new(*width, *height)),
            SizeSpec::Width(width) => Some(PageBox::new(Some(*width), None)),
            SizeSpec::Unsized => Some(PageBox::default()),
        }
    }
}

impl From<PaperSize> for SizeSpec {
    fn from(size: PaperSize) -> Self {
        SizeSpec::Named(size.name().to_string())
    }
}

impl From<SizeSpec> for Value {
    fn from(spec: SizeSpec) -> Self {
        fn number(side: Option<f64>) -> Value {
            side.map_or(Value::Null, Value::from)
        }

        match spec {
            SizeSpec::Named(name) => Value::String(name),
            SizeSpec::Pair(width, height) => Value::Array(vec![number(width), number(height)]),
            SizeSpec::Dimensions { width, height } => {
                let mut fields = Map::new();
                if let Some(width) = width {
                    fields.insert("width".to_string(), Value::from(width));
                }
                if let Some(height) = height {
                    fields.insert("height".to_string(), Value::from(height));
                }
                Value::Object(fields)
            }
            SizeSpec::Width(width) => Value::from(width),
            SizeSpec::Unsized => Value::Bool(false),
        }
    }
}

/// A page's `orientation` prop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
    /// Absent, or a value other than the two literals
    #[default]
    Unspecified,
}

impl Orientation {
    /// Interpret a prop value. Comparison is exact: `"Portrait"` is unspecified.
    pub fn from_value(value: Option<&Value>) -> Orientation {
        match value.and_then(Value::as_str) {
            Some("portrait") => Orientation::Portrait,
            Some("landscape") => Orientation::Landscape,
            _ => Orientation::Unspecified,
        }
    }

    /// Whether the base box is transposed.
    ///
    /// Only an explicit `"portrait"` transposes. Landscape and unspecified
    /// pages keep the base box as given.
    pub fn transposes(&self) -> bool {
        matches!(self, Orientation::Portrait)
    }

    pub fn apply(&self, base: PageBox) -> PageBox {
        if self.transposes() {
            base.transposed()
        } else {
            base
        }
    }

    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            Orientation::Portrait => Some("portrait"),
            Orientation::Landscape => Some("landscape"),
            Orientation::Unspecified => None,
        }
    }
}
