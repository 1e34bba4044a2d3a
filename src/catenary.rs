//! Hanging-chain tether between brush and pointer.
//!
//! The overlay draws the tether as a chain of fixed length (the lazy radius)
//! hanging between the two points under gravity (+y, canvas space). When the
//! points are at least a chain length apart the chain is taut and drawn as a
//! straight line.

#[cfg(test)]
#[path = "catenary_test.rs"]
mod catenary_test;

use crate::consts::CATENARY_SEGMENTS;
use crate::draw::Path;
use crate::geom::Point;

const MAX_ITERATIONS: usize = 100;
const TOLERANCE: f64 = 1e-9;
/// Below this horizontal span the chain is treated as hanging vertically.
const VERTICAL_SPAN: f64 = 1e-6;

/// Build the tether path from `p1` to `p2` for a chain of `length`.
#[must_use]
pub fn tether_path(p1: Point, p2: Point, length: f64) -> Path {
    let mut path = Path::new();
    path.move_to(p1);

    if p1.distance_to(p2) >= length {
        path.line_to(p2);
        return path;
    }

    let span = (p2.x - p1.x).abs();
    if span < VERTICAL_SPAN {
        // Both halves hang straight down to the lowest link.
        let bottom = Point::new(p1.x, (p1.y + p2.y + length) / 2.0);
        path.line_to(bottom);
        path.line_to(p2);
        return path;
    }

    for point in sample(p1, p2, length, CATENARY_SEGMENTS) {
        path.line_to(point);
    }
    path
}

/// Points along the slack chain, excluding `p1`, ending exactly at `p2`.
///
/// Works in y-up space where the curve is `Y = a·cosh((x − x0)/a) + c`.
fn sample(p1: Point, p2: Point, length: f64, segments: usize) -> Vec<Point> {
    let (left, right) = if p1.x <= p2.x { (p1, p2) } else { (p2, p1) };
    let h = right.x - left.x;
    let dy = -(right.y - left.y);
    let a = solve_parameter(h, dy, length);

    let x0 = (left.x + right.x) / 2.0 - a * (dy / (2.0 * a * (h / (2.0 * a)).sinh())).asinh();
    let c = -left.y - a * ((left.x - x0) / a).cosh();

    let steps = segments.max(1);
    let mut points: Vec<Point> = (1..steps)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 / steps as f64;
            let x = p1.x + (p2.x - p1.x) * t;
            let y_up = a * ((x - x0) / a).cosh() + c;
            Point::new(x, -y_up)
        })
        .collect();
    points.push(p2);
    points
}

/// Solve `2a·sinh(h / 2a) = sqrt(L² − dy²)` for the catenary parameter `a`.
///
/// The left side decreases monotonically in `a` toward `h`, so bisection on a
/// bracketing interval converges.
fn solve_parameter(h: f64, dy: f64, length: f64) -> f64 {
    let target = (length * length - dy * dy).max(0.0).sqrt();
    let f = |a: f64| 2.0 * a * (h / (2.0 * a)).sinh() - target;

    let mut low = h / 1000.0;
    let mut high = h.max(length);
    for _ in 0..MAX_ITERATIONS {
        // Keep sinh in range for very tight chains.
        if f(low).is_finite() {
            break;
        }
        low *= 2.0;
    }
    for _ in 0..MAX_ITERATIONS {
        if f(high) <= 0.0 {
            break;
        }
        high *= 2.0;
    }

    for _ in 0..MAX_ITERATIONS {
        let mid = (low + high) / 2.0;
        if f(mid) > 0.0 {
            low = mid;
        } else {
            high = mid;
        }
        if high - low < TOLERANCE {
            break;
        }
    }
    (low + high) / 2.0
}
