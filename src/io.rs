use crate::Point;

use std::fs::File;
use std::io::{BufRead, BufReader, Error, ErrorKind, Result};
use std::path::Path;

/// Parses a line of whitespace separated coordinates into a point with index `index`.
pub fn parse_point(line: &str, index: usize) -> Result<Point> {
    let coordinates = line
        .split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|e| {
                Error::new(
                    ErrorKind::InvalidData,
                    format!("Invalid coordinate {:?}: {}", token, e),
                )
            })
        })
        .collect::<Result<Vec<f64>>>()?;

    Point::new(coordinates, index).map_err(|e| {
        Error::new(
            ErrorKind::InvalidData,
            format!("Invalid point {:?}: {}", line, e),
        )
    })
}

/// Reads one point per non-empty line. Each point is indexed by its position in the returned
/// `Vec`.
pub fn read_points<R: BufRead>(reader: R) -> Result<Vec<Point>> {
    let mut points = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        points.push(parse_point(&line, points.len())?);
    }

    Ok(points)
}

pub fn read_points_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Point>> {
    let file = BufReader::new(File::open(path)?);

    read_points(file)
}
