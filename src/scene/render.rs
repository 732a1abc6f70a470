use crate::model::{Blob, Op, Pose, Segment, Tint};
use crate::scene::camera::{CameraState, SceneLayout};
use crate::scene::primitives::{ellipsoid, ground_grid};
use crate::scene::surface::{DrawSurface, Rgb};
use nalgebra_glm as glm;

const X_AXIS: [f32; 3] = [-1.0, 0.0, 0.0];
const Z_AXIS: [f32; 3] = [0.0, 0.0, -1.0];

/// Colors used while traversing the scene.
#[derive(Debug, Clone)]
pub struct Palette {
    pub body: Rgb,
    pub eyes: Rgb,
    pub mouth: Rgb,
    pub grid_minor: Rgb,
    pub grid_major: Rgb,
}

impl Palette {
    fn tint(&self, tint: Tint) -> Rgb {
        match tint {
            Tint::Body => self.body,
            Tint::Eyes => self.eyes,
            Tint::Mouth => self.mouth,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            body: [1.0, 0.0, 0.0],
            eyes: [0.0, 0.0, 1.0],
            mouth: [0.0, 0.0, 0.0],
            grid_minor: [0.0, 1.0, 0.0],
            grid_major: [0.0, 0.0, 0.0],
        }
    }
}

/// Draws one frame: camera, floor grid, then every figure of the troupe in `pose`.
///
/// The surface's matrix stack is left at the depth it had on entry.
pub fn render_scene<S: DrawSurface + ?Sized>(
    surface: &mut S,
    pose: &Pose,
    figure: &Segment,
    camera: &CameraState,
    layout: &SceneLayout,
    palette: &Palette,
) {
    surface.load_camera(camera);

    surface.push();
    surface.translate(glm::make_vec3(&layout.screen_offset));
    surface.rotate(pose.camera_back, glm::make_vec3(&X_AXIS));
    surface.rotate(pose.camera_spin, glm::make_vec3(&Z_AXIS));
    surface.rotate(pose.camera_tilt, glm::make_vec3(&X_AXIS));

    // the floor lives in camera-relative space, before any figure placement
    if layout.show_grid {
        ground_grid(surface, palette.grid_minor, palette.grid_major);
    }

    for offset in &layout.troupe {
        surface.push();
        surface.translate(glm::vec3(
            layout.model_offset[0] + offset[0],
            layout.model_offset[1] + offset[1],
            layout.model_offset[2],
        ));
        surface.translate(glm::vec3(0.0, 0.0, pose.jump));
        surface.rotate(pose.turn, glm::make_vec3(&Z_AXIS));
        draw_segment(surface, figure, pose, palette);
        surface.pop();
    }

    surface.pop();
}

/// Generic traversal of the figure tree: one push/pop pair per segment.
pub fn draw_segment<S: DrawSurface + ?Sized>(
    surface: &mut S,
    segment: &Segment,
    pose: &Pose,
    palette: &Palette,
) {
    surface.push();
    for op in &segment.ops {
        match op {
            Op::Translate(offset) => surface.translate(glm::make_vec3(offset)),
            Op::Rotate(angle, axis) => {
                surface.rotate(angle.resolve(pose), glm::make_vec3(&axis.vector()))
            }
            Op::Ellipsoid(blob) => draw_blob(surface, blob, palette),
            Op::Child(child) => draw_segment(surface, child, pose, palette),
        }
    }
    surface.pop();
}

fn draw_blob<S: DrawSurface + ?Sized>(surface: &mut S, blob: &Blob, palette: &Palette) {
    log::trace!("blob {}", blob.name);
    surface.set_color(palette.tint(blob.tint));
    surface.push();
    surface.translate(glm::make_vec3(&blob.offset));
    if let Some((degrees, axis)) = blob.tilt {
        surface.rotate(degrees, glm::make_vec3(&axis.vector()));
    }
    surface.scale(glm::make_vec3(&blob.radii));
    ellipsoid(surface);
    surface.pop();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::blobby_man;
    use crate::scene::primitives::CIRCLE_SEGMENTS;
    use crate::scene::surface::MatrixStack;

    /// Surface double that tracks stack depth and counts primitives.
    #[derive(Default)]
    struct CountingSurface {
        depth: i64,
        max_depth: i64,
        pushes: usize,
        pops: usize,
        polylines: usize,
        points: usize,
        labels: Vec<String>,
        cameras: usize,
        stack: MatrixStack,
        vertices: Vec<glm::Vec3>,
    }

    impl DrawSurface for CountingSurface {
        fn load_camera(&mut self, camera: &CameraState) {
            self.cameras += 1;
            self.stack.load(camera.view());
        }

        fn push(&mut self) {
            self.depth += 1;
            self.max_depth = self.max_depth.max(self.depth);
            self.pushes += 1;
            self.stack.push();
        }

        fn pop(&mut self) {
            self.depth -= 1;
            self.pops += 1;
            self.stack.pop();
        }

        fn translate(&mut self, offset: glm::Vec3) {
            self.stack.translate(&offset);
        }

        fn rotate(&mut self, degrees: f32, axis: glm::Vec3) {
            self.stack.rotate(degrees, &axis);
        }

        fn scale(&mut self, factors: glm::Vec3) {
            self.stack.scale(&factors);
        }

        fn set_color(&mut self, _color: Rgb) {}

        fn polyline(&mut self, points: &[glm::Vec3]) {
            self.polylines += 1;
            let stack = &self.stack;
            self.vertices
                .extend(points.iter().map(|p| stack.transform_point(p)));
        }

        fn point(&mut self, _at: glm::Vec3) {
            self.points += 1;
        }

        fn text(&mut self, _at: glm::Vec3, text: &str) {
            self.labels.push(text.to_string());
        }
    }

    fn render(pose: &Pose, layout: &SceneLayout) -> CountingSurface {
        let mut surface = CountingSurface::default();
        render_scene(
            &mut surface,
            pose,
            &blobby_man(),
            &CameraState::default(),
            layout,
            &Palette::default(),
        );
        surface
    }

    #[test]
    fn stack_is_balanced_for_any_pose() {
        let mut pose = Pose::initial();
        for step in 0..5 {
            let surface = render(&pose, &SceneLayout::default());
            assert_eq!(surface.depth, 0);
            assert_eq!(surface.pushes, surface.pops);
            assert!(surface.max_depth > 3);

            pose.right_elbow += 37.0 * step as f32;
            pose.torso_twist -= 11.0;
            pose.jump += 0.25;
        }
    }

    #[test]
    fn draws_every_blob_and_the_grid() {
        let figure = blobby_man();
        let surface = render(&Pose::initial(), &SceneLayout::default());

        // 10 grid lines + 1 ruler, 3 circles per blob
        assert_eq!(surface.polylines, 11 + 3 * figure.blob_count());
        assert_eq!(surface.points, 4);
        assert_eq!(surface.labels, [" X", " Y", " Z"]);
        assert_eq!(surface.cameras, 1);
    }

    #[test]
    fn hidden_grid_skips_floor_primitives() {
        let layout = SceneLayout {
            show_grid: false,
            ..SceneLayout::default()
        };
        let surface = render(&Pose::initial(), &layout);
        assert_eq!(surface.points, 0);
        assert!(surface.labels.is_empty());
        assert_eq!(surface.polylines, 3 * blobby_man().blob_count());
    }

    #[test]
    fn troupe_repeats_the_figure() {
        let layout = SceneLayout {
            troupe: vec![[-2.0, 0.0], [0.0, 0.0], [2.0, 0.0]],
            show_grid: false,
            ..SceneLayout::default()
        };
        let surface = render(&Pose::initial(), &layout);
        assert_eq!(surface.polylines, 3 * 3 * blobby_man().blob_count());
        assert_eq!(surface.depth, 0);
    }

    #[test]
    fn jump_lifts_every_vertex() {
        let layout = SceneLayout {
            show_grid: false,
            ..SceneLayout::default()
        };
        let mut pose = Pose::initial();
        pose.reset_to_rest();
        let grounded = render(&pose, &layout);
        pose.jump = 0.5;
        let lifted = render(&pose, &layout);

        assert_eq!(grounded.vertices.len(), lifted.vertices.len());
        assert_eq!(
            grounded.vertices.len(),
            blobby_man().blob_count() * 3 * (CIRCLE_SEGMENTS + 1)
        );
        let moved = grounded
            .vertices
            .iter()
            .zip(&lifted.vertices)
            .all(|(a, b)| glm::distance(a, b) > 0.49);
        assert!(moved);
    }
}
