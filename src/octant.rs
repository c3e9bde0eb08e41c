use crate::point::Point;

/// One of the 8 symmetric sectors around a source.
///
/// A cell inside an octant is addressed by `d`, the step along the primary
/// axis, and `s`, the sweep along the secondary axis (`0 <= s <= d`). The
/// descriptor maps that pair to an offset from the source:
///
/// * unswapped: `(x_sign * d, y_sign * s)`
/// * swapped:   `(y_sign * s, x_sign * d)`
///
/// Neighbouring octants share the axis row (`s == 0`) and the diagonal
/// (`s == d`); the two flags decide which octant of each pair reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Octant {
    pub name: &'static str,
    pub x_sign: i32,
    pub y_sign: i32,
    pub swap: bool,
    /// Whether cells on the axis row are reported by this octant
    pub report_axis: bool,
    /// Whether cells on the diagonal are reported by this octant
    pub owns_diagonal: bool,
}

// Names read as x sign, y sign, swap:
//
//          north (-y)
//     \  mmy | mpy  /
//  mmn \     |     / pmn
// ---------- @ ---------- east (+x)
//  mpn /     |     \ ppn
//     /  pmy | ppy  \
//          south (+y)
//
// The table is load-bearing: each axis ray and each diagonal ray must be
// owned by exactly one octant.
pub const PPN: Octant = Octant::new("ppn", 1, 1, false, true, true);
pub const PPY: Octant = Octant::new("ppy", 1, 1, true, true, false);
pub const PMN: Octant = Octant::new("pmn", 1, -1, false, false, true);
pub const PMY: Octant = Octant::new("pmy", 1, -1, true, false, false);
pub const MPN: Octant = Octant::new("mpn", -1, 1, false, true, true);
pub const MPY: Octant = Octant::new("mpy", -1, 1, true, true, false);
pub const MMN: Octant = Octant::new("mmn", -1, -1, false, false, true);
pub const MMY: Octant = Octant::new("mmy", -1, -1, true, false, false);

/// All octants in circle-cast order
pub const OCTANTS: [Octant; 8] = [PPN, PPY, PMN, PMY, MPN, MPY, MMN, MMY];

impl Octant {
    const fn new(
        name: &'static str,
        x_sign: i32,
        y_sign: i32,
        swap: bool,
        report_axis: bool,
        owns_diagonal: bool,
    ) -> Self {
        Octant {
            name,
            x_sign,
            y_sign,
            swap,
            report_axis,
            owns_diagonal,
        }
    }

    /// Offset from the source of the cell at primary step `d`, sweep `s`
    pub fn offset(&self, d: i32, s: i32) -> Point {
        if self.swap {
            Point::new(self.y_sign * s, self.x_sign * d)
        } else {
            Point::new(self.x_sign * d, self.y_sign * s)
        }
    }

    /// Absolute cell for `(d, s)` around `origin`
    pub fn to_world(&self, origin: Point, d: i32, s: i32) -> Point {
        origin + self.offset(d, s)
    }

    /// Whether the cell at sweep `s` is reported by this octant when visible
    pub fn reports(&self, s: i32) -> bool {
        self.report_axis || s > 0
    }
}
