//! 2x2 grid geometry and quadrant cropping
//!
//! The grid is cut at `width / 2` and `height / 2` with truncating division,
//! so when a dimension is odd the right column and bottom row are one pixel
//! larger than their neighbours. The four rectangles always tile the source
//! exactly.

use image::{DynamicImage, GenericImageView};

/// One cell of the 2x2 grid, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Upper left cell
    TopLeft,
    /// Upper right cell
    TopRight,
    /// Lower left cell
    BottomLeft,
    /// Lower right cell
    BottomRight,
}

impl Quadrant {
    /// All quadrants in the order their avatars are numbered
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// 1-based position of this quadrant in [`Quadrant::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::TopLeft => 1,
            Self::TopRight => 2,
            Self::BottomLeft => 3,
            Self::BottomRight => 4,
        }
    }

    const fn is_right(self) -> bool {
        matches!(self, Self::TopRight | Self::BottomRight)
    }

    const fn is_bottom(self) -> bool {
        matches!(self, Self::BottomLeft | Self::BottomRight)
    }

    /// Rectangle this quadrant covers in a `width` x `height` source
    pub const fn rect(self, width: u32, height: u32) -> CropRect {
        let cell_width = width / 2;
        let cell_height = height / 2;

        let (x, w) = if self.is_right() {
            (cell_width, width - cell_width)
        } else {
            (0, cell_width)
        };
        let (y, h) = if self.is_bottom() {
            (cell_height, height - cell_height)
        } else {
            (0, cell_height)
        };

        CropRect {
            x,
            y,
            width: w,
            height: h,
        }
    }
}

/// Axis-aligned crop rectangle in source pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Crop `image` into its four quadrants, keeping the source color type
pub fn split_into_quadrants(image: &DynamicImage) -> [(Quadrant, DynamicImage); 4] {
    let (width, height) = image.dimensions();
    Quadrant::ALL.map(|quadrant| {
        let rect = quadrant.rect(width, height);
        (
            quadrant,
            image.crop_imm(rect.x, rect.y, rect.width, rect.height),
        )
    })
}
