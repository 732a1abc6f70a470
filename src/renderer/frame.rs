use crate::renderer::line_vertex::LineVertex;
use crate::scene::{CameraState, DrawSurface, MatrixStack, Rgb};
use nalgebra_glm as glm;

/// Text anchored at an eye-space position.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub position: glm::Vec3,
    pub text: String,
    pub color: Rgb,
}

/// Half width in eye-space units of the cross a point is drawn as,
/// a couple of pixels at the figure's distance.
const POINT_MARK: f32 = 0.025;

/// CPU side of a frame: traversal output with the model-view already applied.
///
/// Lines are stored as a line list (two vertices per segment) in eye space;
/// only the projection is left for the GPU.
pub struct FrameRecorder {
    stack: MatrixStack,
    camera: CameraState,
    color: Rgb,
    pub(crate) lines: Vec<LineVertex>,
    pub(crate) labels: Vec<Label>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self {
            stack: MatrixStack::new(),
            camera: CameraState::default(),
            color: [0.0, 0.0, 0.0],
            lines: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    fn vertex(&self, point: &glm::Vec3) -> LineVertex {
        self.eye_vertex(&self.stack.transform_point(point))
    }

    fn eye_vertex(&self, eye: &glm::Vec3) -> LineVertex {
        LineVertex {
            position: [eye.x, eye.y, eye.z],
            color: self.color,
        }
    }

    /// Projects an eye-space point to window pixels (origin top-left).
    /// Points outside the view volume give `None`.
    pub fn project(&self, position: &glm::Vec3, width: f32, height: f32) -> Option<[f32; 2]> {
        let clip = self.camera.projection(width / height)
            * glm::vec4(position.x, position.y, position.z, 1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.xyz() / clip.w;
        if ndc.x.abs() > 1.0 || ndc.y.abs() > 1.0 || !(0.0..=1.0).contains(&ndc.z) {
            return None;
        }
        Some([(ndc.x + 1.0) * 0.5 * width, (1.0 - ndc.y) * 0.5 * height])
    }
}

impl Default for FrameRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSurface for FrameRecorder {
    fn load_camera(&mut self, camera: &CameraState) {
        self.camera = camera.clone();
        self.stack.load(camera.view());
    }

    fn push(&mut self) {
        self.stack.push();
    }

    fn pop(&mut self) {
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

    fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    fn polyline(&mut self, points: &[glm::Vec3]) {
        for pair in points.windows(2) {
            let start = self.vertex(&pair[0]);
            let end = self.vertex(&pair[1]);
            self.lines.push(start);
            self.lines.push(end);
        }
    }

    // wgpu has no point size, so a point becomes a small screen-aligned cross
    fn point(&mut self, at: glm::Vec3) {
        let eye = self.stack.transform_point(&at);
        for arm in [glm::vec3(POINT_MARK, 0.0, 0.0), glm::vec3(0.0, POINT_MARK, 0.0)] {
            let start = self.eye_vertex(&(eye - arm));
            let end = self.eye_vertex(&(eye + arm));
            self.lines.push(start);
            self.lines.push(end);
        }
    }

    fn text(&mut self, at: glm::Vec3, text: &str) {
        self.labels.push(Label {
            position: self.stack.transform_point(&at),
            text: text.to_string(),
            color: self.color,
        });
    }
}
