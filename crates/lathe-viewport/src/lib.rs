//! # lathe-viewport
//!
//! Quadrant layout for the split-surface clear demo.
//!
//! Computes the four scissored clear rectangles that paint a rendering
//! surface in four solid colors, from an explicit surface configuration
//! rather than shared canvas state. The renderer that actually issues
//! the scissor/clear calls consumes the [`ClearRect`] values verbatim.
//!
//! Coordinates follow graphics-API convention: origin at the
//! bottom-left, y growing upward.

use serde::{Deserialize, Serialize};

use lathe_types::{LatheError, LatheResult, Rgba};

/// Clear color of the bottom-left quadrant.
pub const BOTTOM_LEFT_COLOR: Rgba = Rgba::new(0.0, 0.0, 1.0, 1.0);
/// Clear color of the bottom-right quadrant.
pub const BOTTOM_RIGHT_COLOR: Rgba = Rgba::new(1.0, 1.0, 0.0, 1.0);
/// Clear color of the top-left quadrant.
pub const TOP_LEFT_COLOR: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);
/// Clear color of the top-right quadrant.
pub const TOP_RIGHT_COLOR: Rgba = Rgba::new(0.0, 1.0, 0.0, 1.0);

/// A scissored clear region: rectangle plus fill color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClearRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub color: Rgba,
}

/// Dimensions of the rendering surface.
///
/// Passed explicitly to whoever needs it instead of living in
/// module-level mutable state alongside the context handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    width: u32,
    height: u32,
}

impl SurfaceConfig {
    /// Creates a surface configuration, rejecting empty dimensions.
    pub fn new(width: u32, height: u32) -> LatheResult<Self> {
        if width == 0 || height == 0 {
            return Err(LatheError::InvalidParameter(format!(
                "surface dimensions must be non-zero (got {}x{})",
                width, height
            )));
        }
        Ok(Self { width, height })
    }

    /// Surface width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Recomputes the surface after a window resize.
    ///
    /// The surface stays square, sized to the smaller of the two
    /// window dimensions.
    pub fn resize(&mut self, window_width: u32, window_height: u32) -> LatheResult<()> {
        let side = window_width.min(window_height);
        if side == 0 {
            return Err(LatheError::InvalidParameter(
                "window collapsed to zero size".into(),
            ));
        }
        self.width = side;
        self.height = side;
        Ok(())
    }

    /// The four clear rectangles tiling the surface.
    ///
    /// Halves round down; the right and top quadrants absorb the odd
    /// remainder so the rectangles cover every pixel exactly once.
    pub fn quadrants(&self) -> [ClearRect; 4] {
        let half_w = self.width / 2;
        let half_h = self.height / 2;
        let right_w = self.width - half_w;
        let top_h = self.height - half_h;

        [
            ClearRect {
                x: 0,
                y: 0,
                width: half_w,
                height: half_h,
                color: BOTTOM_LEFT_COLOR,
            },
            ClearRect {
                x: half_w,
                y: 0,
                width: right_w,
                height: half_h,
                color: BOTTOM_RIGHT_COLOR,
            },
            ClearRect {
                x: 0,
                y: half_h,
                width: half_w,
                height: top_h,
                color: TOP_LEFT_COLOR,
            },
            ClearRect {
                x: half_w,
                y: half_h,
                width: right_w,
                height: top_h,
                color: TOP_RIGHT_COLOR,
            },
        ]
    }
}
