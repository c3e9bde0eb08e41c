use crate::octant::Octant;
use crate::opacity::Opacity;
use crate::point::Point;
use crate::slope::{slope, SlopeInterval};

/// State shared by every branch of one cast: the source, the radius and the
/// caller's two callbacks.
///
/// Branches only borrow it; each one carries its own [`SlopeInterval`].
pub struct CastContext<'a, V, O>
where
    V: FnMut(Point, Point),
    O: FnMut(Point) -> Opacity,
{
    pub origin: Point,
    pub radius: u32,
    pub on_visible: &'a mut V,
    pub is_opaque: &'a mut O,
}

impl<'a, V, O> CastContext<'a, V, O>
where
    V: FnMut(Point, Point),
    O: FnMut(Point) -> Opacity,
{
    pub fn new(origin: Point, radius: u32, on_visible: &'a mut V, is_opaque: &'a mut O) -> Self {
        CastContext {
            origin,
            radius,
            on_visible,
            is_opaque,
        }
    }

    pub fn report(&mut self, cell: Point) {
        (self.on_visible)(cell, cell - self.origin);
    }

    fn query(&mut self, cell: Point) -> Opacity {
        (self.is_opaque)(cell)
    }
}

/// What the previous cell of the current column was
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SweepState {
    /// No cell swept yet in this column
    Unknown,
    Blocked,
    Open,
}

/// Highest secondary offset inside the circle for column `d`:
/// `floor(sqrt(radius² - d²))`
pub fn column_height(radius: u32, d: i32) -> i32 {
    let r = radius as i64;
    let d = d as i64;
    let rest = r * r - d * d;
    if rest <= 0 {
        return 0;
    }
    let mut h = (rest as f64).sqrt() as i64;
    // Guard against sqrt landing one off for large inputs
    while h * h > rest {
        h -= 1;
    }
    while (h + 1) * (h + 1) <= rest {
        h += 1;
    }
    h as i32
}

/// Sweep one octant from column `d` outward within `interval`.
///
/// Every maximal run of clear cells in a column continues as its own branch:
/// reaching an occluder spawns a branch for the run that just ended, and the
/// current branch carries on past it with a narrowed start slope.
pub fn cast_octant<V, O>(
    ctx: &mut CastContext<'_, V, O>,
    octant: &Octant,
    d: i32,
    interval: SlopeInterval,
) where
    V: FnMut(Point, Point),
    O: FnMut(Point) -> Opacity,
{
    if d < 1 || d as i64 > ctx.radius as i64 {
        return;
    }

    let (s0, mut s1) = interval.column_bounds(d);

    // The diagonal is shared with the neighbouring octant; only one reports it.
    if !octant.owns_diagonal && s1 == d {
        s1 -= 1;
    }

    let h = column_height(ctx.radius, d);
    if s1 > h {
        s1 = h;
    }
    if s0 > s1 {
        // Nothing of this column is inside both the interval and the circle
        return;
    }

    let mut interval = interval;
    let mut state = SweepState::Unknown;

    for s in s0..=s1 {
        let cell = octant.to_world(ctx.origin, d, s);

        match ctx.query(cell) {
            Opacity::Clear => {
                if octant.reports(s) {
                    ctx.report(cell);
                }

                if state == SweepState::Blocked {
                    interval.start = slope(d as f64 - 0.5, s as f64 - 0.5);
                }
                state = SweepState::Open;
            }
            opacity => {
                if opacity.is_reported() && octant.reports(s) {
                    ctx.report(cell);
                }

                if state == SweepState::Open {
                    let before = SlopeInterval::new(interval.start, slope(d as f64 + 0.5, s as f64 - 0.5));
                    log::trace!(
                        "{}: split at d={} s={} -> [{:.4}, {:.4}]",
                        octant.name,
                        d,
                        s,
                        before.start,
                        before.end
                    );
                    cast_octant(ctx, octant, d + 1, before);
                }
                state = SweepState::Blocked;
            }
        }
    }

    if state == SweepState::Open {
        cast_octant(ctx, octant, d + 1, interval);
    }
}
