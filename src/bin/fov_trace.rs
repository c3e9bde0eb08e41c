//! Runs one configured cast over a text map and prints the reported cells as JSON.
//!
//! Usage: `fov_trace [config.toml] [map.txt]`
//!
//! Map characters: `#` is a wall that is seen, `+` is a wall that is not,
//! anything else is open floor. Cells outside the map block sight.

use serde::Serialize;
use shadowfov::{Config, Opacity, Point};
use std::env;
use std::error::Error;
use std::fs;

#[derive(Serialize)]
struct Visit {
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
}

#[derive(Serialize)]
struct Trace {
    origin: Point,
    radius: u32,
    visible: Vec<Visit>,
}

struct TextMap {
    rows: Vec<Vec<u8>>,
}

impl TextMap {
    fn parse(text: &str) -> Self {
        TextMap {
            rows: text.lines().map(|line| line.as_bytes().to_vec()).collect(),
        }
    }

    fn opacity(&self, cell: Point) -> Opacity {
        if cell.x < 0 || cell.y < 0 {
            return Opacity::Opaque;
        }
        let tile = self
            .rows
            .get(cell.y as usize)
            .and_then(|row| row.get(cell.x as usize));
        match tile {
            None => Opacity::Opaque,
            Some(b'#') => Opacity::OpaqueReported,
            Some(b'+') => Opacity::Opaque,
            Some(_) => Opacity::Clear,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    use simplelog::LevelFilter::{Info, Off};
    simplelog::TermLogger::init(
        Info,
        simplelog::ConfigBuilder::new()
            .set_target_level(Off)
            .set_location_level(Off)
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default("config.toml"),
    };
    let map_path = args.get(2).cloned().unwrap_or_else(|| config.map.path.clone());
    let map = TextMap::parse(&fs::read_to_string(&map_path)?);
    log::info!("Loaded {} map rows from {}", map.rows.len(), map_path);

    let cast = config.cast();
    let mut visible = Vec::new();
    cast.run(
        |cell, offset| {
            visible.push(Visit {
                x: cell.x,
                y: cell.y,
                dx: offset.x,
                dy: offset.y,
            })
        },
        |cell| map.opacity(cell),
    );
    log::info!("{} cells visible", visible.len());

    let trace = Trace {
        origin: cast.origin,
        radius: cast.radius,
        visible,
    };
    println!("{}", serde_json::to_string_pretty(&trace)?);
    Ok(())
}
