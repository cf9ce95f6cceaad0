use std::f64::consts::PI;
use std::fmt;

/// Degrees added to a raw `atan2` angle so that 0° points to 12 o'clock.
pub const NORTH_OFFSET_DEG: f64 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polar {
    pub radius: f64,
    /// Radians, counter-clockwise from the positive x-axis of the
    /// underlying coordinate space.
    pub angle: f64,
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

pub fn polar_to_cartesian(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

pub fn cartesian_to_polar(center: Point, point: Point) -> Polar {
    let (dx, dy) = (point.x - center.x, point.y - center.y);
    Polar {
        radius: dx.hypot(dy),
        angle: dy.atan2(dx),
    }
}

/// Reduces any angle to `[0, 360)`.
pub fn wrap_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Turns a raw `atan2` angle in degrees into one measured clockwise from
/// 12 o'clock (screen space is y-down).
pub fn clockwise_from_north(raw_degrees: f64) -> f64 {
    wrap_degrees(raw_degrees + NORTH_OFFSET_DEG + 360.0)
}

/// Angle of `point` around `center`, clockwise from 12 o'clock, in degrees.
pub fn pointer_angle(center: Point, point: Point) -> Option<f64> {
    if !center.is_finite() || !point.is_finite() {
        return None;
    }
    let polar = cartesian_to_polar(center, point);
    Some(clockwise_from_north(radians_to_degrees(polar.angle)))
}

/// Point on a circle for a clockwise-from-north angle in degrees.
pub fn point_at(center: Point, radius: f64, degrees: f64) -> Point {
    polar_to_cartesian(
        center,
        radius,
        degrees_to_radians(degrees - NORTH_OFFSET_DEG),
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub from_deg: f64,
    pub to_deg: f64,
    pub end: Point,
    pub large_arc: bool,
}

/// A clockwise circular arc: move to `start`, then follow `segments`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcPath {
    pub center: Point,
    pub radius: f64,
    pub start: Point,
    pub segments: Vec<ArcSegment>,
}

impl ArcPath {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn sweep(&self) -> f64 {
        self.segments.iter().map(|s| s.to_deg - s.from_deg).sum()
    }
}

/// Describes the clockwise arc from `start_deg` to `end_deg` (both measured
/// clockwise from 12 o'clock).
///
/// A sweep of zero or less yields an empty path. A full turn would start and
/// end on the same point, so it is split into two half circles.
pub fn describe_arc(
    center: Point,
    radius: f64,
    start_deg: f64,
    end_deg: f64,
) -> ArcPath {
    let sweep = end_deg - start_deg;
    let start = point_at(center, radius, start_deg);
    let segment = |from: f64, to: f64| ArcSegment {
        from_deg: from,
        to_deg: to,
        end: point_at(center, radius, to),
        large_arc: to - from > 180.0,
    };

    let segments = if sweep.is_nan() || sweep <= 0.0 {
        Vec::new()
    } else if sweep >= 360.0 {
        let half = start_deg + 180.0;
        vec![segment(start_deg, half), segment(half, start_deg + 360.0)]
    } else {
        vec![segment(start_deg, end_deg)]
    };

    ArcPath {
        center,
        radius,
        start,
        segments,
    }
}

impl fmt::Display for ArcPath {
    /// SVG path data.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M {} {}", self.start.x, self.start.y)?;
        for seg in &self.segments {
            write!(
                f,
                " A {r} {r} 0 {} 1 {} {}",
                u8::from(seg.large_arc),
                seg.end.x,
                seg.end.y,
                r = self.radius,
            )?;
        }
        Ok(())
    }
}
