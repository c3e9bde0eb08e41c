use crate::beam::{compute_beam, Direction};
use crate::circle::compute_circle;
use crate::opacity::Opacity;
use crate::point::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Which area a cast covers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Circle,
    Beam { direction: Direction, angle: f64 },
}

/// A complete description of one field-of-view computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cast {
    pub origin: Point,
    pub radius: u32,
    #[serde(default)]
    pub include_origin: bool,
    pub shape: Shape,
}

impl Cast {
    pub fn circle(origin: Point, radius: u32) -> Self {
        Cast {
            origin,
            radius,
            include_origin: false,
            shape: Shape::Circle,
        }
    }

    pub fn beam(origin: Point, radius: u32, direction: Direction, angle: f64) -> Self {
        Cast {
            origin,
            radius,
            include_origin: false,
            shape: Shape::Beam { direction, angle },
        }
    }

    pub fn with_origin(mut self, include_origin: bool) -> Self {
        self.include_origin = include_origin;
        self
    }

    /// Run the cast, calling `on_visible(cell, offset)` for each reported cell
    pub fn run<V, O>(&self, on_visible: V, is_opaque: O)
    where
        V: FnMut(Point, Point),
        O: FnMut(Point) -> Opacity,
    {
        match self.shape {
            Shape::Circle => compute_circle(self.origin, self.radius, self.include_origin, on_visible, is_opaque),
            Shape::Beam { direction, angle } => compute_beam(
                self.origin,
                self.radius,
                direction,
                angle,
                self.include_origin,
                on_visible,
                is_opaque,
            ),
        }
    }

    /// All reported cells, in absolute coordinates
    pub fn visible_set<O>(&self, is_opaque: O) -> HashSet<Point>
    where
        O: FnMut(Point) -> Opacity,
    {
        let mut visible = HashSet::new();
        self.run(
            |cell, _| {
                visible.insert(cell);
            },
            is_opaque,
        );
        visible
    }
}
