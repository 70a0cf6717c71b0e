/// Shape parameters of a curved staircase.
///
/// Lengths are in metres, the curve angle in degrees. Every field has a getter
/// and a setter; the host regenerates the shape after changing any of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StairParams {
    inner_radius: f64,
    step_height: f64,
    step_width: f64,
    angle_of_curve: f64,
    num_steps: usize,
    add_to_first_step: f64,
    counter_clockwise: bool,
    fill_to_bottom: bool,
    build_torus: bool,
}

impl Default for StairParams {
    fn default() -> Self {
        Self {
            inner_radius: 1.0,
            step_height: 0.0625,
            step_width: 1.0,
            angle_of_curve: 90.0,
            num_steps: 4,
            add_to_first_step: 0.0,
            counter_clockwise: false,
            fill_to_bottom: true,
            build_torus: false,
        }
    }
}

impl StairParams {
    /// Creates the default four-step quarter turn.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Radius of the inner edge of the steps.
    #[must_use]
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    pub fn set_inner_radius(&mut self, inner_radius: f64) {
        self.inner_radius = inner_radius;
    }

    #[must_use]
    pub fn with_inner_radius(mut self, inner_radius: f64) -> Self {
        self.set_inner_radius(inner_radius);
        self
    }

    /// Rise of each step.
    #[must_use]
    pub fn step_height(&self) -> f64 {
        self.step_height
    }

    pub fn set_step_height(&mut self, step_height: f64) {
        self.step_height = step_height;
    }

    #[must_use]
    pub fn with_step_height(mut self, step_height: f64) -> Self {
        self.set_step_height(step_height);
        self
    }

    /// Radial width of each step.
    #[must_use]
    pub fn step_width(&self) -> f64 {
        self.step_width
    }

    pub fn set_step_width(&mut self, step_width: f64) {
        self.step_width = step_width;
    }

    #[must_use]
    pub fn with_step_width(mut self, step_width: f64) -> Self {
        self.set_step_width(step_width);
        self
    }

    /// Total sweep of the staircase in degrees. May be negative.
    #[must_use]
    pub fn angle_of_curve(&self) -> f64 {
        self.angle_of_curve
    }

    pub fn set_angle_of_curve(&mut self, angle_of_curve: f64) {
        self.angle_of_curve = angle_of_curve;
    }

    #[must_use]
    pub fn with_angle_of_curve(mut self, angle_of_curve: f64) -> Self {
        self.set_angle_of_curve(angle_of_curve);
        self
    }

    /// Number of steps, always at least 1.
    #[must_use]
    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    /// Sets the number of steps. Values below 1 are clamped to 1.
    pub fn set_num_steps(&mut self, num_steps: usize) {
        self.num_steps = num_steps.max(1);
    }

    #[must_use]
    pub fn with_num_steps(mut self, num_steps: usize) -> Self {
        self.set_num_steps(num_steps);
        self
    }

    /// Extra height below the first step. Lowers every bottom point.
    #[must_use]
    pub fn add_to_first_step(&self) -> f64 {
        self.add_to_first_step
    }

    pub fn set_add_to_first_step(&mut self, add_to_first_step: f64) {
        self.add_to_first_step = add_to_first_step;
    }

    #[must_use]
    pub fn with_add_to_first_step(mut self, add_to_first_step: f64) -> Self {
        self.set_add_to_first_step(add_to_first_step);
        self
    }

    /// Whether the staircase turns the other way.
    #[must_use]
    pub fn counter_clockwise(&self) -> bool {
        self.counter_clockwise
    }

    pub fn set_counter_clockwise(&mut self, counter_clockwise: bool) {
        self.counter_clockwise = counter_clockwise;
    }

    #[must_use]
    pub fn with_counter_clockwise(mut self, counter_clockwise: bool) -> Self {
        self.set_counter_clockwise(counter_clockwise);
        self
    }

    /// Whether every step reaches down to the floor.
    #[must_use]
    pub fn fill_to_bottom(&self) -> bool {
        self.fill_to_bottom
    }

    pub fn set_fill_to_bottom(&mut self, fill_to_bottom: bool) {
        self.fill_to_bottom = fill_to_bottom;
    }

    #[must_use]
    pub fn with_fill_to_bottom(mut self, fill_to_bottom: bool) -> Self {
        self.set_fill_to_bottom(fill_to_bottom);
        self
    }

    /// Whether all treads sit at the same height, forming a flat ring.
    #[must_use]
    pub fn build_torus(&self) -> bool {
        self.build_torus
    }

    pub fn set_build_torus(&mut self, build_torus: bool) {
        self.build_torus = build_torus;
    }

    #[must_use]
    pub fn with_build_torus(mut self, build_torus: bool) -> Self {
        self.set_build_torus(build_torus);
        self
    }

    /// Rotation between consecutive samples in degrees, negated when mirrored.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn angle_step(&self) -> f64 {
        let step = self.angle_of_curve / self.num_steps as f64;
        if self.counter_clockwise {
            -step
        } else {
            step
        }
    }

    /// Radius of the outer edge of the steps.
    #[must_use]
    pub fn outer_radius(&self) -> f64 {
        self.inner_radius + self.step_width
    }
}
