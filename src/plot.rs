//! Rendering of a tour as an SVG image.
//!
//! The solver never draws anything itself. A caller that has planar
//! coordinates for its locations turns the best tour into [`PlotPoint`]s
//! with [`route_points`] and hands them to an [`SvgRenderer`].

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{Result, ResultExt, SolverError};
use crate::tour::Tour;

/// One stop of a tour placed on the plane.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub location: usize,
    pub x: f64,
    pub y: f64,
}

/// Reads headerless `x,y` rows; row `i` holds the position of location `i`.
pub fn read_coordinates<R: Read>(reader: R) -> Result<Vec<(f64, f64)>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut coords = Vec::new();
    for (i, record) in csv_reader.records().enumerate() {
        let record = record?;
        if record.len() != 2 {
            return Err(SolverError::Other(format!(
                "Coordinate row {} has {} fields, expected 2",
                i,
                record.len()
            )));
        }
        let parse = |field: &str| {
            field
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    SolverError::Other(format!("Coordinate row {} holds {:?}", i, field))
                })
        };
        coords.push((parse(&record[0])?, parse(&record[1])?));
    }

    Ok(coords)
}

/// Reads coordinates from a CSV file. See [`read_coordinates`].
pub fn load_coordinates<P: AsRef<Path>>(path: P) -> Result<Vec<(f64, f64)>> {
    let path = path.as_ref();
    let file =
        File::open(path).context(format!("Failed to open coordinates {}", path.display()))?;
    let coords = read_coordinates(file)?;
    debug!(locations = coords.len(), "Loaded coordinates");
    Ok(coords)
}

/// Places every stop of `tour` (depot at both ends included) on the plane.
///
/// # Errors
///
/// Fails if a stop has no coordinate.
pub fn route_points(tour: &Tour, coords: &[(f64, f64)]) -> Result<Vec<PlotPoint>> {
    tour.stops()
        .iter()
        .map(|&location| {
            coords
                .get(location)
                .map(|&(x, y)| PlotPoint { location, x, y })
                .ok_or_else(|| {
                    SolverError::Other(format!(
                        "No coordinate for location {} ({} given)",
                        location,
                        coords.len()
                    ))
                })
        })
        .collect()
}

/// Draws a route as a polyline with each point labelled by its location.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub node_radius: f64,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        SvgRenderer {
            width: 800.0,
            height: 800.0,
            margin: 50.0,
            node_radius: 6.0,
        }
    }
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self, points: &[PlotPoint], title: &str) -> String {
        let mut svg = String::new();

        svg.push_str(&format!(
            r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">
<style>
    .node {{ fill: #3498db; stroke: #2c3e50; stroke-width: 2; }}
    .depot {{ fill: #e74c3c; stroke: #c0392b; stroke-width: 2; }}
    .route {{ stroke: #34495e; stroke-width: 2; fill: none; }}
    .label {{ font-family: Arial; font-size: 10px; fill: #2c3e50; }}
    .title {{ font-family: Arial; font-size: 14px; fill: #2c3e50; font-weight: bold; }}
</style>
<rect width="100%" height="100%" fill="#ecf0f1"/>
<text x="{}" y="25" class="title">{}</text>
"##,
            self.width,
            self.height,
            self.width,
            self.height,
            self.margin,
            escape(title)
        ));

        if points.is_empty() {
            svg.push_str("</svg>\n");
            return svg;
        }

        let (min_x, max_x, min_y, max_y) = bounds(points);
        let scale_x = (self.width - 2.0 * self.margin) / (max_x - min_x).max(1.0);
        let scale_y = (self.height - 2.0 * self.margin) / (max_y - min_y).max(1.0);
        let scale = scale_x.min(scale_y);

        // SVG y grows downwards
        let transform = |x: f64, y: f64| -> (f64, f64) {
            let tx = self.margin + (x - min_x) * scale;
            let ty = self.height - self.margin - (y - min_y) * scale;
            (tx, ty)
        };

        let polyline = points
            .iter()
            .map(|p| {
                let (x, y) = transform(p.x, p.y);
                format!("{:.2},{:.2}", x, y)
            })
            .collect::<Vec<_>>()
            .join(" ");
        svg.push_str(&format!(
            r#"<polyline points="{}" class="route"/>
"#,
            polyline
        ));

        let depot = points[0].location;
        for point in points {
            let (x, y) = transform(point.x, point.y);
            let class = if point.location == depot { "depot" } else { "node" };
            svg.push_str(&format!(
                r#"<circle cx="{:.2}" cy="{:.2}" r="{}" class="{}"/>
<text x="{:.2}" y="{:.2}" class="label" text-anchor="middle">{}</text>
"#,
                x,
                y,
                self.node_radius,
                class,
                x,
                y - self.node_radius - 3.0,
                point.location
            ));
        }

        svg.push_str("</svg>\n");
        svg
    }

    pub fn save<P: AsRef<Path>>(&self, svg: &str, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(svg.as_bytes())?;
        Ok(())
    }
}

fn bounds(points: &[PlotPoint]) -> (f64, f64, f64, f64) {
    points.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
        |(min_x, max_x, min_y, max_y), p| {
            (min_x.min(p.x), max_x.max(p.x), min_y.min(p.y), max_y.max(p.y))
        },
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
