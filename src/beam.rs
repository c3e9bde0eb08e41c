use crate::circle::compute_circle;
use crate::octant::{Octant, MMN, MMY, MPN, MPY, PMN, PMY, PPN, PPY};
use crate::opacity::Opacity;
use crate::point::Point;
use crate::shadowcast::{cast_octant, CastContext};
use crate::slope::{clamp_unit, exceeds, SlopeInterval};
use serde::{Deserialize, Serialize};

/// Compass direction a beam faces. North is `-y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[serde(alias = "e")]
    East,
    #[serde(alias = "ne")]
    NorthEast,
    #[serde(alias = "n")]
    North,
    #[serde(alias = "nw")]
    NorthWest,
    #[serde(alias = "w")]
    West,
    #[serde(alias = "sw")]
    SouthWest,
    #[serde(alias = "s")]
    South,
    #[serde(alias = "se")]
    SouthEast,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::NorthEast,
        Direction::North,
        Direction::NorthWest,
        Direction::West,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    /// Cardinal beams are centred on an octant boundary, diagonal ones on an
    /// octant's diagonal, so they restrict their octants differently.
    pub fn is_cardinal(self) -> bool {
        matches!(self, Direction::East | Direction::North | Direction::West | Direction::South)
    }

    /// Unit step in this direction
    pub fn step(self) -> Point {
        match self {
            Direction::East => Point::new(1, 0),
            Direction::NorthEast => Point::new(1, -1),
            Direction::North => Point::new(0, -1),
            Direction::NorthWest => Point::new(-1, -1),
            Direction::West => Point::new(-1, 0),
            Direction::SouthWest => Point::new(-1, 1),
            Direction::South => Point::new(0, 1),
            Direction::SouthEast => Point::new(1, 1),
        }
    }

    /// Octants in the order the beam widens into them, two per step.
    ///
    /// The first pair straddles the beam's centre line; later pairs are only
    /// reached as the angle grows past each multiple of 90°.
    pub fn octant_order(self) -> [Octant; 8] {
        match self {
            Direction::East => [PPN, PMN, PPY, MPY, PMY, MMY, MPN, MMN],
            Direction::West => [MPN, MMN, PMY, MMY, PPY, MPY, PPN, PMN],
            Direction::North => [MPY, MMY, MMN, PMN, MPN, PPN, PMY, PPY],
            Direction::South => [PMY, PPY, MPN, PPN, MMN, PMN, MMY, MPY],
            Direction::NorthEast => [PMN, MPY, MMY, PPN, MMN, PPY, MPN, PMY],
            Direction::NorthWest => [MMN, MMY, MPN, MPY, PMY, PMN, PPY, PPN],
            Direction::SouthEast => [PPN, PPY, PMY, PMN, MPN, MPY, MMN, MMY],
            Direction::SouthWest => [PMY, MPN, PPY, MMN, PPN, MMY, PMN, MPY],
        }
    }
}

/// Slope restriction for each octant pair of a beam, `None` where the pair
/// is not involved at all.
///
/// `a` is the beam's full angle in quarter turns (`angle / 90`).
pub fn pair_intervals(direction: Direction, a: f64) -> [Option<SlopeInterval>; 4] {
    let involved = [true, exceeds(a, 1.0), exceeds(a, 2.0), exceeds(a, 3.0)];

    let intervals = if direction.is_cardinal() {
        [
            SlopeInterval::up_to(clamp_unit(a)),
            SlopeInterval::starting_at(clamp_unit(2.0 - a)),
            SlopeInterval::up_to(clamp_unit(a - 2.0)),
            SlopeInterval::starting_at(clamp_unit(4.0 - a)),
        ]
    } else {
        [
            SlopeInterval::starting_at(clamp_unit(1.0 - a)),
            SlopeInterval::up_to(clamp_unit(a - 1.0)),
            SlopeInterval::starting_at(clamp_unit(3.0 - a)),
            SlopeInterval::up_to(clamp_unit(a - 3.0)),
        ]
    };

    let mut pairs = [None; 4];
    for (i, interval) in intervals.into_iter().enumerate() {
        if involved[i] {
            pairs[i] = Some(interval);
        }
    }
    pairs
}

/// Report every cell visible from `origin` within `radius` inside a cone of
/// `angle` degrees centred on `direction`.
///
/// A negative (or NaN) angle reports nothing, not even the origin. An angle
/// of 360° or more is a full [`compute_circle`].
#[allow(clippy::too_many_arguments)]
pub fn compute_beam<V, O>(
    origin: Point,
    radius: u32,
    direction: Direction,
    angle: f64,
    include_origin: bool,
    mut on_visible: V,
    mut is_opaque: O,
) where
    V: FnMut(Point, Point),
    O: FnMut(Point) -> Opacity,
{
    if angle.is_nan() || angle < 0.0 {
        log::debug!("beam cast with angle {} reports nothing", angle);
        return;
    }
    if angle >= 360.0 {
        compute_circle(origin, radius, include_origin, on_visible, is_opaque);
        return;
    }

    log::debug!(
        "beam cast from ({}, {}) radius {} facing {:?} over {}°",
        origin.x,
        origin.y,
        radius,
        direction,
        angle
    );

    let mut ctx = CastContext::new(origin, radius, &mut on_visible, &mut is_opaque);
    if include_origin {
        ctx.report(origin);
    }

    let octants = direction.octant_order();
    for (pair, interval) in pair_intervals(direction, angle / 90.0).into_iter().enumerate() {
        let Some(interval) = interval else { continue };
        for octant in &octants[pair * 2..pair * 2 + 2] {
            cast_octant(&mut ctx, octant, 1, interval);
        }
    }
}
