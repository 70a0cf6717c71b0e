use nalgebra::Rotation2;

use crate::math::{Point3, Vector2};
use crate::shape::StairParams;

/// One of the four sampled curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveRange {
    /// Inner edge of the treads. Two points per sample.
    InnerTop,
    /// Outer edge of the treads. Two points per sample.
    OuterTop,
    /// Inner edge on the floor. One point per sample.
    InnerBottom,
    /// Outer edge on the floor. One point per sample.
    OuterBottom,
}

impl CurveRange {
    /// Top curves carry a lower and an upper point per sample.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, CurveRange::InnerTop | CurveRange::OuterTop)
    }

    fn points_per_sample(self) -> usize {
        if self.is_top() {
            2
        } else {
            1
        }
    }
}

/// Flat list of curve samples, partitioned into four contiguous ranges.
///
/// Layout for `n` steps: `InnerTop` (`2(n+1)` points), `OuterTop` (`2(n+1)`),
/// `InnerBottom` (`n+1`), `OuterBottom` (`n+1`). Within a top range, point
/// `2i` is sample `i` at its starting height and `2i + 1` is the same
/// horizontal position one step higher.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSamples {
    points: Vec<Point3>,
    num_steps: usize,
}

impl CurveSamples {
    /// All points in range order.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Number of steps the samples were taken for.
    #[must_use]
    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    /// Number of samples per curve (`num_steps + 1`).
    #[must_use]
    pub fn samples_per_curve(&self) -> usize {
        self.num_steps + 1
    }

    /// Number of points in `range`.
    #[must_use]
    pub fn range_len(&self, range: CurveRange) -> usize {
        range.points_per_sample() * self.samples_per_curve()
    }

    /// Index of the first point of `range` in [`Self::points`].
    #[must_use]
    pub fn range_start(&self, range: CurveRange) -> usize {
        let top = CurveRange::InnerTop.points_per_sample() * self.samples_per_curve();
        match range {
            CurveRange::InnerTop => 0,
            CurveRange::OuterTop => top,
            CurveRange::InnerBottom => 2 * top,
            CurveRange::OuterBottom => 2 * top + self.samples_per_curve(),
        }
    }

    /// The points of `range`.
    #[must_use]
    pub fn range(&self, range: CurveRange) -> &[Point3] {
        let start = self.range_start(range);
        &self.points[start..start + self.range_len(range)]
    }

    /// Point `offset` within `range`.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is not below [`Self::range_len`].
    #[must_use]
    pub fn at(&self, range: CurveRange, offset: usize) -> Point3 {
        self.range(range)[offset]
    }
}

/// Samples the four curves of a staircase.
///
/// Each curve rotates a radial offset about the vertical axis in equal
/// increments of `angle_of_curve / num_steps` degrees, giving `num_steps + 1`
/// samples. Top curves climb one `step_height` per sample (or jump straight
/// to the full height in torus mode). `add_to_first_step` lowers the first
/// top point and every bottom point.
pub struct SampleCurves<'a> {
    params: &'a StairParams,
}

impl<'a> SampleCurves<'a> {
    /// Creates a new `SampleCurves` operation.
    #[must_use]
    pub fn new(params: &'a StairParams) -> Self {
        Self { params }
    }

    /// Executes the sampling.
    #[must_use]
    pub fn execute(&self) -> CurveSamples {
        let n = self.params.num_steps().max(1);
        let mut points = Vec::with_capacity(6 * (n + 1));

        self.sample_top(self.params.inner_radius(), n, &mut points);
        self.sample_top(self.params.outer_radius(), n, &mut points);
        self.sample_bottom(self.params.inner_radius(), n, &mut points);
        self.sample_bottom(self.params.outer_radius(), n, &mut points);

        CurveSamples {
            points,
            num_steps: n,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn sample_top(&self, radius: f64, n: usize, points: &mut Vec<Point3>) {
        let step_height = self.params.step_height();
        let mut height = 0.0;
        for x in 0..=n {
            let adjustment = if x == 0 {
                self.params.add_to_first_step()
            } else {
                0.0
            };
            let h = self.horizontal(radius, x);
            points.push(Point3::new(h.x, height - adjustment, h.y));
            height = if self.params.build_torus() {
                step_height * n as f64
            } else {
                height + step_height
            };
            points.push(Point3::new(h.x, height, h.y));
        }
    }

    fn sample_bottom(&self, radius: f64, n: usize, points: &mut Vec<Point3>) {
        let floor = -self.params.add_to_first_step();
        for x in 0..=n {
            let h = self.horizontal(radius, x);
            points.push(Point3::new(h.x, floor, h.y));
        }
    }

    /// Horizontal position of sample `index`; `x` maps to world X, `y` to world Z.
    #[allow(clippy::cast_precision_loss)]
    fn horizontal(&self, radius: f64, index: usize) -> Vector2 {
        let angle = (self.params.angle_step() * index as f64).to_radians();
        Rotation2::new(angle) * Vector2::new(radius, 0.0)
    }
}
