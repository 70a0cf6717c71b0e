use tracing::{instrument, trace};

use crate::brush::{Brush, BrushSettings, FaceRole};
use crate::error::{BrushError, Result};
use crate::geometry::UvProjection;
use crate::shape::StairParams;

use super::assemble::AssembleStep;
use super::finish::{flat_normal, reproject_uvs};
use super::query::Aabb;
use super::sample::SampleCurves;

/// Faces whose normal is recomputed after assembly, in processing order.
const NORMAL_FACES: [FaceRole; 6] = [
    FaceRole::Top,
    FaceRole::Front,
    FaceRole::Left,
    FaceRole::Right,
    FaceRole::Bottom,
    FaceRole::Back,
];

/// Faces whose UVs are recomputed after assembly. Side faces keep theirs.
const UV_FACES: [FaceRole; 2] = [FaceRole::Top, FaceRole::Bottom];

/// Rewrites a set of brushes into a curved staircase.
///
/// Brush `i` becomes step `i`. Brushes are edited in place, so any ids the
/// caller holds for them stay valid. The result depends only on the
/// parameters, never on the previous brush contents, except for the UVs
/// of the four side faces, which are left untouched.
pub struct Generate<'a, P: ?Sized> {
    params: &'a StairParams,
    settings: &'a BrushSettings,
    projection: &'a P,
}

impl<'a, P: UvProjection + ?Sized> Generate<'a, P> {
    /// Creates a new `Generate` operation.
    #[must_use]
    pub fn new(params: &'a StairParams, settings: &'a BrushSettings, projection: &'a P) -> Self {
        Self {
            params,
            settings,
            projection,
        }
    }

    /// Executes the generation and returns the union of the brush bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if `brushes.len()` differs from the step count.
    #[instrument(skip_all, fields(num_steps = self.params.num_steps()))]
    pub fn execute(&self, brushes: &mut [&mut Brush]) -> Result<Aabb> {
        let num_steps = self.params.num_steps();
        if brushes.len() != num_steps {
            return Err(BrushError::BrushCountMismatch {
                expected: num_steps,
                actual: brushes.len(),
            }
            .into());
        }

        let samples = SampleCurves::new(self.params).execute();
        let mut bounds = Aabb::empty();

        for (i, brush) in brushes.iter_mut().enumerate() {
            brush.apply_settings(self.settings);

            AssembleStep::new(&samples, self.params, i).execute(brush);

            for role in NORMAL_FACES {
                if !flat_normal(brush.polygon_mut(role)) {
                    trace!(step = i, ?role, "degenerate face");
                }
            }
            for role in UV_FACES {
                reproject_uvs(brush.polygon_mut(role), self.projection);
            }

            let brush_bounds = brush.bounds();
            trace!(step = i, min = ?brush_bounds.min, max = ?brush_bounds.max, "step generated");
            bounds.encapsulate(&brush_bounds);
        }

        Ok(bounds)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::brush::BrushMode;
    use crate::geometry::PlanarProjection;
    use crate::math::{Point3, Vector3};
    use crate::operations::query::IsValid;
    use crate::operations::sample::{CurveRange, SampleCurves};

    fn run(params: &StairParams) -> (Vec<Brush>, Aabb) {
        run_from(params, vec![Brush::unit_cube(); params.num_steps()])
    }

    fn run_from(params: &StairParams, mut brushes: Vec<Brush>) -> (Vec<Brush>, Aabb) {
        let settings = BrushSettings::default();
        let projection = PlanarProjection::default();
        let bounds = {
            let mut refs: Vec<&mut Brush> = brushes.iter_mut().collect();
            Generate::new(params, &settings, &projection)
                .execute(&mut refs)
                .unwrap()
        };
        (brushes, bounds)
    }

    fn brush_centroid(brush: &Brush) -> Point3 {
        let sum = brush
            .polygons()
            .iter()
            .fold(Vector3::zeros(), |acc, poly| acc + poly.centroid().coords);
        Point3::from(sum / 6.0)
    }

    #[test]
    fn stock_staircase_end_to_end() {
        let params = StairParams::new();
        let (brushes, bounds) = run(&params);
        assert_eq!(brushes.len(), 4);

        let samples = SampleCurves::new(&params).execute();
        let top = brushes[0].polygon(FaceRole::Top).positions();
        assert_eq!(top[2], samples.at(CurveRange::InnerTop, 1));
        assert_eq!(top[2], samples.points()[1]);

        assert_relative_eq!(bounds.size().y, 0.25, epsilon = 1e-12);
        assert_relative_eq!(bounds.min.y, 0.0);
        assert_relative_eq!(bounds.max.y, 0.25, epsilon = 1e-12);
        // Quarter turn from +X to +Z between radius 1 and 2.
        assert_relative_eq!(bounds.min.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(bounds.max.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(bounds.min.z, 0.0, epsilon = 1e-12);
        assert_relative_eq!(bounds.max.z, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn wrong_brush_count_is_rejected() {
        let params = StairParams::new();
        let settings = BrushSettings::default();
        let projection = PlanarProjection::default();
        let mut brushes = vec![Brush::unit_cube(); 3];
        let mut refs: Vec<&mut Brush> = brushes.iter_mut().collect();
        let result = Generate::new(&params, &settings, &projection).execute(&mut refs);
        assert!(matches!(
            result,
            Err(crate::error::StairError::Brush(BrushError::BrushCountMismatch {
                expected: 4,
                actual: 3
            }))
        ));
    }

    #[test]
    fn normals_point_out_of_every_brush() {
        for ccw in [false, true] {
            for fill in [false, true] {
                let params = StairParams::new()
                    .with_num_steps(6)
                    .with_angle_of_curve(180.0)
                    .with_add_to_first_step(0.2)
                    .with_counter_clockwise(ccw)
                    .with_fill_to_bottom(fill);
                let (brushes, _) = run(&params);
                for brush in &brushes {
                    let center = brush_centroid(brush);
                    for role in FaceRole::ALL {
                        let poly = brush.polygon(role);
                        let outward = poly.centroid() - center;
                        assert!(
                            poly.normal().dot(&outward) > 0.0,
                            "{role:?} faces inward (ccw={ccw}, fill={fill})"
                        );
                        assert_relative_eq!(poly.normal().norm(), 1.0, epsilon = 1e-12);
                    }
                }
            }
        }
    }

    #[test]
    fn generated_brushes_are_valid() {
        let params = StairParams::new().with_num_steps(12).with_angle_of_curve(360.0);
        let (brushes, _) = run(&params);
        for brush in &brushes {
            assert!(IsValid::new(brush).execute());
        }
    }

    #[test]
    fn settings_are_copied_to_every_brush() {
        let params = StairParams::new();
        let settings = BrushSettings {
            mode: BrushMode::Subtractive,
            visible: false,
            has_collision: false,
            no_csg: true,
        };
        let projection = PlanarProjection::default();
        let mut brushes = vec![Brush::unit_cube(); 4];
        let mut refs: Vec<&mut Brush> = brushes.iter_mut().collect();
        Generate::new(&params, &settings, &projection)
            .execute(&mut refs)
            .unwrap();
        for brush in &brushes {
            assert_eq!(brush.settings(), &settings);
        }
    }

    #[test]
    fn only_top_and_bottom_uvs_are_recomputed() {
        let params = StairParams::new();
        let (brushes, _) = run(&params);
        let cube = Brush::unit_cube();
        for brush in &brushes {
            for role in [FaceRole::Back, FaceRole::Left, FaceRole::Right, FaceRole::Front] {
                let uvs = brush.polygon(role).vertices().map(|v| v.uv);
                let original = cube.polygon(role).vertices().map(|v| v.uv);
                assert_eq!(uvs, original, "{role:?} UVs changed");
            }
            for role in [FaceRole::Top, FaceRole::Bottom] {
                let poly = brush.polygon(role);
                for v in poly.vertices() {
                    let expected = PlanarProjection::default().uv_for_position(poly, &v.position);
                    assert_eq!(v.uv, expected);
                }
            }
        }
    }

    #[test]
    fn regeneration_is_idempotent() {
        let params = StairParams::new().with_num_steps(5).with_build_torus(true);
        let (first, first_bounds) = run(&params);
        let (second, second_bounds) = run_from(&params, first.clone());
        assert_eq!(first, second);
        assert_eq!(first_bounds, second_bounds);
    }

    #[test]
    fn torus_treads_are_level() {
        let params = StairParams::new().with_num_steps(8).with_build_torus(true);
        let (brushes, bounds) = run(&params);
        for brush in &brushes {
            for pt in brush.polygon(FaceRole::Top).positions() {
                assert_relative_eq!(pt.y, 0.0625 * 8.0, epsilon = 1e-12);
            }
        }
        assert_relative_eq!(bounds.max.y, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn first_step_offset_lowers_the_whole_floor() {
        let params = StairParams::new().with_add_to_first_step(0.25);
        let (brushes, bounds) = run(&params);
        assert_relative_eq!(bounds.min.y, -0.25);
        for brush in &brushes {
            for pt in brush.polygon(FaceRole::Bottom).positions() {
                assert_relative_eq!(pt.y, -0.25);
            }
        }
        // The first tread keeps its height.
        let top = brushes[0].polygon(FaceRole::Top).positions();
        assert_relative_eq!(top[0].y, 0.0625);
    }

    /// Counts collapsed faces, checking each face's normal against its corners.
    fn zero_normal_faces(brushes: &[Brush]) -> usize {
        let mut collapsed = 0;
        for brush in brushes {
            for role in FaceRole::ALL {
                let poly = brush.polygon(role);
                match poly.plane() {
                    Ok(plane) => {
                        for v in poly.vertices() {
                            assert_eq!(v.normal, *plane.normal(), "{role:?}");
                        }
                    }
                    Err(_) => {
                        for v in poly.vertices() {
                            assert_eq!(v.normal, Vector3::zeros(), "{role:?}");
                        }
                        collapsed += 1;
                    }
                }
            }
        }
        collapsed
    }

    #[test]
    fn degenerate_input_collapses_faces_without_failing() {
        let cases = [
            ("zero step height", StairParams::new().with_step_height(0.0)),
            ("zero inner radius", StairParams::new().with_inner_radius(0.0)),
            ("zero angle", StairParams::new().with_angle_of_curve(0.0)),
            (
                "double wrap",
                StairParams::new().with_angle_of_curve(720.0).with_num_steps(16),
            ),
        ];
        for (name, base) in cases {
            for fill in [true, false] {
                let params = base.with_fill_to_bottom(fill);
                let (brushes, bounds) = run(&params);
                assert_eq!(brushes.len(), params.num_steps());
                assert!(!bounds.is_empty(), "{name}");

                let collapsed = zero_normal_faces(&brushes);
                if name == "double wrap" {
                    assert_eq!(collapsed, 0, "{name} (fill={fill})");
                } else {
                    assert!(collapsed > 0, "{name} (fill={fill})");
                }
                for brush in &brushes {
                    assert!(IsValid::new(brush).execute(), "{name} (fill={fill})");
                }
            }
        }
    }

    #[test]
    fn negative_angle_turns_normals_inward() {
        // Winding follows the mirroring flag only, so a negative sweep flips
        // every face whichever way the flag is set.
        for ccw in [false, true] {
            let params = StairParams::new()
                .with_angle_of_curve(-90.0)
                .with_counter_clockwise(ccw);
            let (brushes, _) = run(&params);
            for brush in &brushes {
                let center = brush_centroid(brush);
                for role in FaceRole::ALL {
                    let poly = brush.polygon(role);
                    let outward = poly.centroid() - center;
                    assert!(
                        poly.normal().dot(&outward) < 0.0,
                        "{role:?} faces outward (ccw={ccw})"
                    );
                }
            }
        }
    }
}
