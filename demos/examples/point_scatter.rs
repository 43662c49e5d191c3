// Copyright 2025 the Rankwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point scatter.
//!
//! Scatter random integer points over an area, index them in a 2D k-d tree, run one range
//! query against a fixed matching rectangle, and print the result as SVG: matched dots red,
//! the rest black, the matching rectangle translucent green.
//!
//! An optional TOML file overrides the defaults (any subset of keys):
//!
//! ```toml
//! area_width = 100
//! area_height = 100
//! dot_radius = 1.0
//! matching_area = { x = 25.0, y = 25.0, width = 50.0, height = 50.0 }
//! dots_amount = 300
//! seed = 7
//! ```
//!
//! Run:
//! - `cargo run -p rankwood_demos --example point_scatter > scatter.svg`
//! - `RUST_LOG=debug cargo run -p rankwood_demos --example point_scatter -- scatter.toml > scatter.svg`

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use kurbo::{Affine, Point, Rect, Vec2};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rankwood_kdtree::{KdTree, KdTreeError};
use rankwood_order::{NumericKey, point};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("failed to read config {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config: {0}")]
    ParseConfig(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    #[error(transparent)]
    Tree(#[from] KdTreeError),
    #[error("range search found {tree} positions but a linear scan found {scan}")]
    Mismatch { tree: usize, scan: usize },
    #[error("failed to render svg")]
    Render(#[from] std::fmt::Error),
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MatchingArea {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SimulationConfig {
    area_width: u32,
    area_height: u32,
    dot_radius: f64,
    matching_area: MatchingArea,
    dots_amount: usize,
    /// Fixed RNG seed; entropy is used when absent.
    seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            area_width: 100,
            area_height: 100,
            dot_radius: 1.0,
            matching_area: MatchingArea {
                x: 25.0,
                y: 25.0,
                width: 50.0,
                height: 50.0,
            },
            dots_amount: 300,
            seed: None,
        }
    }
}

impl SimulationConfig {
    fn load(path: Option<&Path>) -> Result<Self, DemoError> {
        let config: Self = match path {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|source| DemoError::ReadConfig {
                    path: path.to_owned(),
                    source,
                })?;
                toml::from_str(&text)?
            }
            None => Self::default(),
        };
        config.validate()?;
        debug!("simulation config: {config:?}");
        Ok(config)
    }

    fn validate(&self) -> Result<(), DemoError> {
        if self.area_width == 0 || self.area_height == 0 {
            return Err(DemoError::InvalidConfig("area must have a positive size"));
        }
        let m = self.matching_area;
        if !(m.width > 0.0 && m.height > 0.0) {
            return Err(DemoError::InvalidConfig("matching area must have a positive size"));
        }
        Ok(())
    }

    fn area(&self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.area_width), f64::from(self.area_height))
    }

    fn matching_area(&self) -> Rect {
        let m = self.matching_area;
        Rect::from_origin_size((m.x, m.y), (m.width, m.height))
    }
}

#[derive(Debug)]
struct Dot {
    x: u32,
    y: u32,
    matched: bool,
}

impl Dot {
    fn position(&self) -> Point {
        Point::new(f64::from(self.x), f64::from(self.y))
    }
}

/// Open-rectangle containment; points on an edge are outside, like the tree query.
fn strictly_inside(rect: Rect, p: Point) -> bool {
    rect.x0 < p.x && p.x < rect.x1 && rect.y0 < p.y && p.y < rect.y1
}

fn scatter(config: &SimulationConfig, rng: &mut impl Rng) -> Result<Vec<Dot>, DemoError> {
    let mut dots: Vec<Dot> = (0..config.dots_amount)
        .map(|_| Dot {
            x: rng.gen_range(0..config.area_width),
            y: rng.gen_range(0..config.area_height),
            matched: false,
        })
        .collect();

    let mut tree: KdTree<NumericKey, usize> = KdTree::new(2)?;
    for (i, dot) in dots.iter().enumerate() {
        let p = dot.position();
        // Coincident dots collapse onto one entry; the latest index wins.
        tree.insert(point(p.x, p.y), i)?;
    }

    let window = config.matching_area();
    let hits: Vec<usize> = tree
        .range_search_2d(&point(window.x0, window.y0), &point(window.x1, window.y1))?
        .into_iter()
        .copied()
        .collect();
    for &i in &hits {
        dots[i].matched = true;
    }

    let scan: BTreeSet<(u32, u32)> = dots
        .iter()
        .filter(|dot| strictly_inside(window, dot.position()))
        .map(|dot| (dot.x, dot.y))
        .collect();
    if scan.len() != hits.len() {
        return Err(DemoError::Mismatch {
            tree: hits.len(),
            scan: scan.len(),
        });
    }
    info!(
        "{} of {} dots ({} distinct positions) fall inside {window:?}",
        hits.len(),
        dots.len(),
        tree.len()
    );
    Ok(dots)
}

fn render_svg(config: &SimulationConfig, dots: &[Dot]) -> Result<String, DemoError> {
    let area = config.area();
    // SVG grows downwards; flip so y grows upwards like the simulation space.
    let to_view = Affine::translate(Vec2::new(0.0, area.height())) * Affine::FLIP_Y;

    let mut svg = String::new();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        area.x0,
        area.y0,
        area.width(),
        area.height()
    )?;
    for dot in dots {
        let c = to_view * dot.position();
        let fill = if dot.matched { "red" } else { "black" };
        writeln!(
            svg,
            r#"  <circle cx="{}" cy="{}" r="{}" fill="{fill}"/>"#,
            c.x, c.y, config.dot_radius
        )?;
    }
    let window = to_view.transform_rect_bbox(config.matching_area());
    writeln!(
        svg,
        r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="green" fill-opacity="0.3"/>"#,
        window.x0,
        window.y0,
        window.width(),
        window.height()
    )?;
    writeln!(svg, "</svg>")?;
    Ok(svg)
}

fn main() -> Result<(), DemoError> {
    env_logger::init();

    let config_path = env::args_os().nth(1).map(PathBuf::from);
    let config = SimulationConfig::load(config_path.as_deref())?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let dots = scatter(&config, &mut rng)?;
    print!("{}", render_svg(&config, &dots)?);
    Ok(())
}
