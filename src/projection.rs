//! Projection of a shape onto a coarse 1D buffer
//!
//! A projection table assigns every logical point of a [`Shape`] to a bucket
//! of a smaller buffer (for example the flame heat buffer). Tables are built
//! once and read every frame.

use core::f32::consts::TAU;
use core::fmt;

use heapless::Vec;

use crate::random::Random8;
use crate::shape::{Point, Shape};

/// Reasons a projection table cannot be built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionError {
    /// Resolution must be at least 1
    ZeroResolution,
    /// Resolution is larger than the number of points in the shape
    ResolutionExceedsPoints { resolution: u8, n_points: usize },
    /// Shape has more points than the table can hold
    TooManyPoints { n_points: usize, capacity: usize },
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroResolution => write!(f, "projection resolution must be non-zero"),
            Self::ResolutionExceedsPoints {
                resolution,
                n_points,
            } => write!(
                f,
                "projection resolution {} exceeds the {} points of the shape",
                resolution, n_points
            ),
            Self::TooManyPoints { n_points, capacity } => write!(
                f,
                "shape has {} points but the projection holds at most {}",
                n_points, capacity
            ),
        }
    }
}

/// Per-point bucket table
///
/// `N` is the maximum number of logical points the table can hold.
#[derive(Debug, Clone)]
pub struct Projection<const N: usize> {
    table: Vec<u8, N>,
    resolution: u8,
}

impl<const N: usize> Projection<N> {
    /// Buckets grow with the distance to `center`
    ///
    /// The farthest point lands in the last bucket.
    pub fn radial<S: Shape>(
        shape: &S,
        resolution: u8,
        center: Point,
    ) -> Result<Self, ProjectionError> {
        let distance = |i: usize| {
            let dx = shape.x(i) - center.x;
            let dy = shape.y(i) - center.y;
            libm::sqrtf(dx * dx + dy * dy)
        };
        let max_distance = (0..shape.n_points()).map(distance).fold(0.0_f32, f32::max);

        Self::build(shape, resolution, |i| {
            scale_to_bucket(distance(i), 0.0, max_distance, resolution)
        })
    }

    /// Radial projection around a random center inside the shape's bounding box
    pub fn radial_random<S: Shape, R: Random8>(
        shape: &S,
        resolution: u8,
        rng: &mut R,
    ) -> Result<Self, ProjectionError> {
        let (min, max) = shape.bounding_box();
        let center = Point::new(
            min.x + (max.x - min.x) * rng.random_unit(),
            min.y + (max.y - min.y) * rng.random_unit(),
        );
        Self::radial(shape, resolution, center)
    }

    /// Buckets follow the position along `direction`
    ///
    /// The direction does not need to be normalized. A zero direction puts
    /// every point in the first bucket.
    pub fn parallel<S: Shape>(
        shape: &S,
        resolution: u8,
        direction: Point,
    ) -> Result<Self, ProjectionError> {
        let length = libm::sqrtf(direction.x * direction.x + direction.y * direction.y);
        let (dx, dy) = if length > 0.0 {
            (direction.x / length, direction.y / length)
        } else {
            (0.0, 0.0)
        };
        let along = |i: usize| shape.x(i) * dx + shape.y(i) * dy;

        let (lo, hi) = (0..shape.n_points())
            .map(along)
            .fold((f32::MAX, f32::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));

        Self::build(shape, resolution, |i| {
            scale_to_bucket(along(i), lo, hi, resolution)
        })
    }

    /// Parallel projection along a random direction
    pub fn parallel_random<S: Shape, R: Random8>(
        shape: &S,
        resolution: u8,
        rng: &mut R,
    ) -> Result<Self, ProjectionError> {
        let angle = rng.random_unit() * TAU;
        Self::parallel(
            shape,
            resolution,
            Point::new(libm::cosf(angle), libm::sinf(angle)),
        )
    }

    /// Buckets follow the point index
    ///
    /// Use when the wiring order already runs from the base of the flame to
    /// its tip.
    #[allow(clippy::cast_possible_truncation)]
    pub fn intrinsic<S: Shape>(shape: &S, resolution: u8) -> Result<Self, ProjectionError> {
        let n_points = shape.n_points();
        Self::build(shape, resolution, |i| {
            let bucket = i * usize::from(resolution) / n_points.max(1);
            bucket.min(usize::from(resolution) - 1) as u8
        })
    }

    fn build<S: Shape>(
        shape: &S,
        resolution: u8,
        bucket: impl Fn(usize) -> u8,
    ) -> Result<Self, ProjectionError> {
        let n_points = shape.n_points();
        if resolution == 0 {
            return Err(ProjectionError::ZeroResolution);
        }
        if n_points > N {
            return Err(ProjectionError::TooManyPoints {
                n_points,
                capacity: N,
            });
        }
        if usize::from(resolution) > n_points {
            return Err(ProjectionError::ResolutionExceedsPoints {
                resolution,
                n_points,
            });
        }

        let mut table = Vec::new();
        for i in 0..n_points {
            // Capacity was checked above
            let _ = table.push(bucket(i).min(resolution - 1));
        }
        Ok(Self { table, resolution })
    }

    /// Number of buckets
    pub const fn resolution(&self) -> u8 {
        self.resolution
    }

    /// Bucket of logical point `i`
    pub fn bucket(&self, i: usize) -> usize {
        usize::from(self.table[i])
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.table
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Map `value` from `[lo, hi]` to `0..resolution`, clipping at both ends
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_to_bucket(value: f32, lo: f32, hi: f32, resolution: u8) -> u8 {
    let span = hi - lo;
    if span <= 0.0 {
        return 0;
    }
    let last = f32::from(resolution - 1);
    let scaled = (value - lo) / span * last;
    (scaled.clamp(0.0, last) as u8).min(resolution - 1)
}
