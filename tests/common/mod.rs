#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use shadowfov::{Cast, Direction, Opacity, Point, Shape};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Fixture format under `test_data/`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FovTestData {
    #[serde(rename = "testName")]
    pub test_name: String,
    pub cast: Cast,
    /// Walls that block sight and are reported when seen
    pub walls: Vec<Point>,
    /// Walls that block sight and are never reported
    #[serde(rename = "hiddenWalls", default)]
    pub hidden_walls: Vec<Point>,
    #[serde(rename = "expectedVisible")]
    pub expected_visible: Vec<Point>,
}

/// Load a test from JSON file
pub fn load_test(path: &Path) -> Result<FovTestData, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    let test_data: FovTestData = serde_json::from_str(&contents)?;
    Ok(test_data)
}

/// Sparse opacity map; anything not listed is clear
#[derive(Debug, Clone, Default)]
pub struct WallMap {
    pub cells: HashMap<Point, Opacity>,
}

impl WallMap {
    pub fn new(walls: &[Point], hidden_walls: &[Point]) -> Self {
        let mut cells = HashMap::new();
        for &p in walls {
            cells.insert(p, Opacity::OpaqueReported);
        }
        for &p in hidden_walls {
            cells.insert(p, Opacity::Opaque);
        }
        WallMap { cells }
    }

    pub fn with_walls(walls: &[(i32, i32)]) -> Self {
        let walls: Vec<Point> = walls.iter().copied().map(Point::from).collect();
        Self::new(&walls, &[])
    }

    pub fn opacity(&self, p: Point) -> Opacity {
        self.cells.get(&p).copied().unwrap_or(Opacity::Clear)
    }

    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> Self {
        WallMap {
            cells: self.cells.iter().map(|(&p, &o)| (f(p), o)).collect(),
        }
    }
}

/// Every reported cell in report order, as (absolute, offset) pairs
pub fn run_cast(cast: &Cast, map: &WallMap) -> Vec<(Point, Point)> {
    let mut visits = Vec::new();
    cast.run(|cell, offset| visits.push((cell, offset)), |cell| map.opacity(cell));
    visits
}

/// Reported offsets, failing on any cell reported twice
pub fn offset_set(cast: &Cast, map: &WallMap) -> HashSet<Point> {
    let mut set = HashSet::new();
    for (_, offset) in run_cast(cast, map) {
        assert!(set.insert(offset), "{:?} reported twice by {:?}", offset, cast);
    }
    set
}

/// Offsets inside the circle of `radius`, origin excluded
pub fn disk(radius: u32) -> HashSet<Point> {
    let r = radius as i32;
    let mut set = HashSet::new();
    for x in -r..=r {
        for y in -r..=r {
            let p = Point::new(x, y);
            if p != Point::ORIGIN && p.within_radius(radius) {
                set.insert(p);
            }
        }
    }
    set
}

/// Mirror a direction left-right
pub fn mirror_direction_horizontal(direction: Direction) -> Direction {
    match direction {
        Direction::East => Direction::West,
        Direction::West => Direction::East,
        Direction::NorthEast => Direction::NorthWest,
        Direction::NorthWest => Direction::NorthEast,
        Direction::SouthEast => Direction::SouthWest,
        Direction::SouthWest => Direction::SouthEast,
        d => d,
    }
}

/// Mirror a direction top-bottom
pub fn mirror_direction_vertical(direction: Direction) -> Direction {
    match direction {
        Direction::North => Direction::South,
        Direction::South => Direction::North,
        Direction::NorthEast => Direction::SouthEast,
        Direction::SouthEast => Direction::NorthEast,
        Direction::NorthWest => Direction::SouthWest,
        Direction::SouthWest => Direction::NorthWest,
        d => d,
    }
}

/// Mirror a whole fixture through its origin
fn flip_test(test: &FovTestData, suffix: &str, flip_x: bool, flip_y: bool) -> FovTestData {
    let o = test.cast.origin;
    let flip = |p: Point| {
        Point::new(
            if flip_x { 2 * o.x - p.x } else { p.x },
            if flip_y { 2 * o.y - p.y } else { p.y },
        )
    };

    let mut cast = test.cast;
    if let Shape::Beam { direction, angle } = cast.shape {
        let mut direction = direction;
        if flip_x {
            direction = mirror_direction_horizontal(direction);
        }
        if flip_y {
            direction = mirror_direction_vertical(direction);
        }
        cast.shape = Shape::Beam { direction, angle };
    }

    FovTestData {
        test_name: format!("{}_{}", test.test_name, suffix),
        cast,
        walls: test.walls.iter().copied().map(flip).collect(),
        hidden_walls: test.hidden_walls.iter().copied().map(flip).collect(),
        expected_visible: test.expected_visible.iter().copied().map(flip).collect(),
    }
}

/// Flip test horizontally (mirror left-right)
pub fn flip_test_horizontal(test: &FovTestData) -> FovTestData {
    flip_test(test, "h_flip", true, false)
}

/// Flip test vertically (mirror top-bottom)
pub fn flip_test_vertical(test: &FovTestData) -> FovTestData {
    flip_test(test, "v_flip", false, true)
}

/// Flip test both horizontally and vertically
pub fn flip_test_both(test: &FovTestData) -> FovTestData {
    flip_test(test, "hv_flip", true, true)
}

/// Whether mirrored variants of this cast must mirror its result.
///
/// A beam whose edge lands exactly on a multiple of 90° has its edge ray
/// reported by whichever octant owns that axis or diagonal, which is not
/// mirror symmetric.
pub fn mirror_symmetric(cast: &Cast) -> bool {
    match cast.shape {
        Shape::Circle => true,
        Shape::Beam { angle, .. } => angle >= 360.0 || angle % 90.0 != 0.0,
    }
}

/// Run a single test variant
/// Returns (passed, missing, extra)
pub fn run_single_test(test_data: &FovTestData) -> (bool, Vec<Point>, Vec<Point>) {
    let map = WallMap::new(&test_data.walls, &test_data.hidden_walls);
    let visits = run_cast(&test_data.cast, &map);

    let actual: HashSet<Point> = visits.iter().map(|&(cell, _)| cell).collect();
    assert_eq!(actual.len(), visits.len(), "'{}' reported a cell twice", test_data.test_name);

    let expected: HashSet<Point> = test_data.expected_visible.iter().copied().collect();

    let mut missing: Vec<_> = expected.difference(&actual).copied().collect();
    let mut extra: Vec<_> = actual.difference(&expected).copied().collect();
    missing.sort();
    extra.sort();

    (missing.is_empty() && extra.is_empty(), missing, extra)
}

/// Run a test with all 4 variants (original, h_flip, v_flip, hv_flip) when
/// the cast is mirror symmetric, otherwise just the original.
/// Returns the first failing variant with its missing and extra cells.
pub fn run_test(test_data: &FovTestData) -> Result<(), (String, Vec<Point>, Vec<Point>)> {
    let mut variants = vec![("original", test_data.clone())];
    if mirror_symmetric(&test_data.cast) {
        variants.push(("h_flip", flip_test_horizontal(test_data)));
        variants.push(("v_flip", flip_test_vertical(test_data)));
        variants.push(("hv_flip", flip_test_both(test_data)));
    }

    for (variant_name, variant_test) in variants {
        let (passed, missing, extra) = run_single_test(&variant_test);
        if !passed {
            return Err((variant_name.to_string(), missing, extra));
        }
    }

    Ok(())
}

/// Parse a standard format test file.
///
/// The first line describes the cast, either `circle <radius>` or
/// `beam <radius> <direction> <angle>`. The picture below it uses:
/// - `@`: origin (always included in the cast)
/// - `.`: floor that is not visible
/// - `o`: floor that is visible
/// - `#`: wall that is not visible
/// - `X`: wall that is visible
/// - `+`: hidden wall, never reported
pub fn parse_standard_test(path: &Path) -> Result<FovTestData, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    let mut lines = contents.lines().filter(|line| !line.trim().is_empty());

    let header: Vec<&str> = lines.next().ok_or("empty test file")?.split_whitespace().collect();
    let radius: u32 = header.get(1).ok_or("missing radius")?.parse()?;
    let shape = match header[0] {
        "circle" => Shape::Circle,
        "beam" => {
            let direction = header.get(2).ok_or("missing direction")?;
            let direction: Direction = serde_json::from_value(serde_json::Value::String(direction.to_string()))?;
            let angle: f64 = header.get(3).ok_or("missing angle")?.parse()?;
            Shape::Beam { direction, angle }
        }
        other => return Err(format!("unknown cast kind '{}'", other).into()),
    };

    let mut origin = None;
    let mut walls = Vec::new();
    let mut hidden_walls = Vec::new();
    let mut expected_visible = Vec::new();

    for (y, line) in lines.enumerate() {
        for (x, ch) in line.chars().enumerate() {
            let p = Point::new(x as i32, y as i32);
            match ch {
                '@' => {
                    origin = Some(p);
                    expected_visible.push(p);
                }
                'o' => expected_visible.push(p),
                '#' => walls.push(p),
                'X' => {
                    walls.push(p);
                    expected_visible.push(p);
                }
                '+' => hidden_walls.push(p),
                '.' => {}
                _ => return Err(format!("unexpected character '{}' at ({}, {})", ch, x, y).into()),
            }
        }
    }

    let origin = origin.ok_or("No origin '@' found in test file")?;
    let test_name = path
        .file_stem()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    Ok(FovTestData {
        test_name,
        cast: Cast {
            origin,
            radius,
            include_origin: true,
            shape,
        },
        walls,
        hidden_walls,
        expected_visible,
    })
}
