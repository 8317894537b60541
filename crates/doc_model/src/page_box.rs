//! Resolved page dimensions

use serde::{Deserialize, Serialize};

/// Physical dimensions of a page in points (1/72 inch).
///
/// Either side may be unknown: a page sized with a bare number only fixes
/// its width, and downstream layout has to cope with the missing height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PageBox {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl PageBox {
    pub fn new(width: Option<f64>, height: Option<f64>) -> Self {
        Self { width, height }
    }

    /// A box with both sides known
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(Some(width), Some(height))
    }

    /// The same box with width and height exchanged
    pub fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Whether both sides are known
    pub fn is_complete(&self) -> bool {
        self.width.is_some() && self.height.is_some()
    }
}
