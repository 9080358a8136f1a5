//! Axis-aligned block geometry.
//!
//! Coordinates are in block units (0.0..=1.0 spans one block). Content code
//! usually authors boxes in "pixels" (sixteenths) via [`VoxelShape::block_box`].

use super::position::Direction;

/// Pixels per block edge.
pub const PIXELS: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Aabb {
    pub const fn new(min: [f64; 3], max: [f64; 3]) -> Self {
        Self { min, max }
    }

    /// A box with zero extent on any axis encloses nothing.
    pub fn is_degenerate(&self) -> bool {
        (0..3).any(|i| self.max[i] <= self.min[i])
    }

    pub fn volume(&self) -> f64 {
        (0..3).map(|i| (self.max[i] - self.min[i]).max(0.0)).product()
    }

    fn union_bounds(&self, other: &Aabb) -> Aabb {
        let mut out = *self;
        for i in 0..3 {
            out.min[i] = out.min[i].min(other.min[i]);
            out.max[i] = out.max[i].max(other.max[i]);
        }
        out
    }
}

/// A union of boxes. Order is irrelevant; degenerate boxes are never stored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VoxelShape {
    boxes: Vec<Aabb>,
}

impl VoxelShape {
    pub const fn empty() -> Self {
        Self { boxes: Vec::new() }
    }

    pub fn full_block() -> Self {
        Self::block_box(0.0, 0.0, 0.0, 16.0, 16.0, 16.0)
    }

    /// Build a shape from pixel coordinates.
    pub fn block_box(x1: f64, y1: f64, z1: f64, x2: f64, y2: f64, z2: f64) -> Self {
        let aabb = Aabb::new(
            [x1 / PIXELS, y1 / PIXELS, z1 / PIXELS],
            [x2 / PIXELS, y2 / PIXELS, z2 / PIXELS],
        );
        if aabb.is_degenerate() {
            Self::empty()
        } else {
            Self { boxes: vec![aabb] }
        }
    }

    pub fn or(mut self, other: VoxelShape) -> Self {
        self.boxes.extend(other.boxes);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn boxes(&self) -> &[Aabb] {
        &self.boxes
    }

    /// Smallest box enclosing the whole shape.
    pub fn bounds(&self) -> Option<Aabb> {
        let (first, rest) = self.boxes.split_first()?;
        Some(rest.iter().fold(*first, |acc, b| acc.union_bounds(b)))
    }
}

/// Rotate a pixel box authored facing north about the block's vertical axis
/// so that it faces `direction`. Vertical directions leave the box as-is.
pub fn rotate_box(direction: Direction, x1: f64, y1: f64, z1: f64, x2: f64, y2: f64, z2: f64) -> VoxelShape {
    match direction {
        Direction::North | Direction::Up | Direction::Down => VoxelShape::block_box(x1, y1, z1, x2, y2, z2),
        Direction::East => VoxelShape::block_box(PIXELS - z2, y1, x1, PIXELS - z1, y2, x2),
        Direction::South => VoxelShape::block_box(PIXELS - x2, y1, PIXELS - z2, PIXELS - x1, y2, PIXELS - z1),
        Direction::West => VoxelShape::block_box(z1, y1, PIXELS - x2, z2, y2, PIXELS - x1),
    }
}
