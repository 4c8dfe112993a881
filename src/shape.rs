//! LED curve geometry
//!
//! A shape maps each logical point of the curve to normalized 2D coordinates,
//! typically within [-1, 1] on both axes.

/// Normalized position of one logical point
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Geometry of an LED curve
///
/// `n_points` is fixed for the lifetime of the shape. Coordinates are only
/// defined for `0..n_points()`.
pub trait Shape {
    /// Number of logical points along the curve
    fn n_points(&self) -> usize;

    /// Horizontal coordinate of point `i`
    fn x(&self, i: usize) -> f32;

    /// Vertical coordinate of point `i`
    fn y(&self, i: usize) -> f32;

    /// Smallest axis-aligned box holding every point, as `(min, max)`
    fn bounding_box(&self) -> (Point, Point) {
        let n = self.n_points();
        if n == 0 {
            return (Point::default(), Point::default());
        }
        let mut min = Point::new(self.x(0), self.y(0));
        let mut max = min;
        for i in 1..n {
            let (x, y) = (self.x(i), self.y(i));
            min.x = min.x.min(x);
            min.y = min.y.min(y);
            max.x = max.x.max(x);
            max.y = max.y.max(y);
        }
        (min, max)
    }
}

/// Shape backed by a table of measured points
///
/// Point order is the wiring order of the strip.
#[derive(Debug, Clone, Copy)]
pub struct PointShape<'a> {
    points: &'a [Point],
}

impl<'a> PointShape<'a> {
    pub const fn new(points: &'a [Point]) -> Self {
        Self { points }
    }
}

impl Shape for PointShape<'_> {
    fn n_points(&self) -> usize {
        self.points.len()
    }

    fn x(&self, i: usize) -> f32 {
        self.points[i].x
    }

    fn y(&self, i: usize) -> f32 {
        self.points[i].y
    }
}

/// Straight strip laid along the x axis from -1 to 1
#[derive(Debug, Clone, Copy)]
pub struct LinearShape {
    n_points: usize,
}

impl LinearShape {
    pub const fn new(n_points: usize) -> Self {
        Self { n_points }
    }
}

impl Shape for LinearShape {
    fn n_points(&self) -> usize {
        self.n_points
    }

    #[allow(clippy::cast_precision_loss)]
    fn x(&self, i: usize) -> f32 {
        if self.n_points <= 1 {
            return 0.0;
        }
        -1.0 + 2.0 * i as f32 / (self.n_points - 1) as f32
    }

    fn y(&self, _i: usize) -> f32 {
        0.0
    }
}
