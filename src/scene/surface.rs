use crate::scene::camera::CameraState;
use nalgebra_glm as glm;

pub type Rgb = [f32; 3];

/// Immediate-mode drawing target the scene is traversed into.
///
/// Mirrors a fixed-function pipeline: a model-view matrix stack, a current
/// color and line/point/text primitives positioned in the current frame.
pub trait DrawSurface {
    /// Sets projection and view; the model-view top becomes the view matrix.
    fn load_camera(&mut self, camera: &CameraState);
    fn push(&mut self);
    fn pop(&mut self);
    fn translate(&mut self, offset: glm::Vec3);
    /// Rotates by `degrees` about `axis` (not necessarily normalized).
    fn rotate(&mut self, degrees: f32, axis: glm::Vec3);
    fn scale(&mut self, factors: glm::Vec3);
    fn set_color(&mut self, color: Rgb);
    /// Connected line strip through `points`.
    fn polyline(&mut self, points: &[glm::Vec3]);
    fn point(&mut self, at: glm::Vec3);
    fn text(&mut self, at: glm::Vec3, text: &str);
}

/// Column-major 4x4 model-view stack.
#[derive(Debug, Clone)]
pub struct MatrixStack {
    stack: Vec<glm::Mat4>,
}

impl MatrixStack {
    pub fn new() -> Self {
        Self {
            stack: vec![glm::Mat4::identity()],
        }
    }

    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn top(&self) -> &glm::Mat4 {
        // never empty: pop refuses to remove the root
        &self.stack[self.stack.len() - 1]
    }

    fn top_mut(&mut self) -> &mut glm::Mat4 {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    /// Replaces the current top.
    pub fn load(&mut self, matrix: glm::Mat4) {
        *self.top_mut() = matrix;
    }

    pub fn push(&mut self) {
        let top = *self.top();
        self.stack.push(top);
    }

    /// Returns false (and leaves the root in place) on underflow.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            log::warn!("matrix stack underflow: pop without matching push");
            false
        }
    }

    pub fn translate(&mut self, offset: &glm::Vec3) {
        let top = self.top_mut();
        *top = glm::translate(top, offset);
    }

    pub fn rotate(&mut self, degrees: f32, axis: &glm::Vec3) {
        let top = self.top_mut();
        *top = glm::rotate(top, degrees.to_radians(), axis);
    }

    pub fn scale(&mut self, factors: &glm::Vec3) {
        let top = self.top_mut();
        *top = glm::scale(top, factors);
    }

    pub fn transform_point(&self, point: &glm::Vec3) -> glm::Vec3 {
        let p = self.top() * glm::vec4(point.x, point.y, point.z, 1.0);
        glm::vec3(p.x, p.y, p.z)
    }
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}
