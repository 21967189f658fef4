use crate::foundation::error::{AtelierError, AtelierResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Fixed drawing surface of a diagram, in SVG user units (pixels).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> AtelierResult<Self> {
        if width == 0 || height == 0 {
            return Err(AtelierError::render("canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Fill or stroke paint, written verbatim into the SVG attribute.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Paint {
    None,
    Color(String),
}

impl Paint {
    pub fn color(css: impl Into<String>) -> Self {
        Self::Color(css.into())
    }

    pub fn as_svg(&self) -> &str {
        match self {
            Self::None => "none",
            Self::Color(c) => c,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Translate-then-scale placement of a group, the only transform charts need.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform2D {
    pub translate: Vec2,
    pub scale: f64, // uniform, default 1
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

impl Transform2D {
    pub fn translate(x: f64, y: f64) -> Self {
        Self {
            translate: Vec2::new(x, y),
            ..Self::default()
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn is_identity(&self) -> bool {
        self.translate == Vec2::ZERO && self.scale == 1.0
    }

    pub fn to_affine(self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
