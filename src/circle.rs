use crate::octant::OCTANTS;
use crate::opacity::Opacity;
use crate::point::Point;
use crate::shadowcast::{cast_octant, CastContext};
use crate::slope::SlopeInterval;

/// Report every cell visible from `origin` within `radius`, in all directions.
///
/// `on_visible` receives the absolute cell and its offset from `origin`.
/// `is_opaque` is queried for each cell the sweep reaches. The origin itself
/// is only reported (with offset `(0, 0)`) when `include_origin` is set, and
/// is never queried.
pub fn compute_circle<V, O>(origin: Point, radius: u32, include_origin: bool, mut on_visible: V, mut is_opaque: O)
where
    V: FnMut(Point, Point),
    O: FnMut(Point) -> Opacity,
{
    log::debug!("circle cast from ({}, {}) radius {}", origin.x, origin.y, radius);

    let mut ctx = CastContext::new(origin, radius, &mut on_visible, &mut is_opaque);
    if include_origin {
        ctx.report(origin);
    }

    for octant in &OCTANTS {
        cast_octant(&mut ctx, octant, 1, SlopeInterval::FULL);
    }
}
