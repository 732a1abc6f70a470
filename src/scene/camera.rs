use nalgebra_glm as glm;

/// Fixed pinhole camera the scene is viewed through.
#[derive(Debug, Clone)]
pub struct CameraState {
    /// Vertical field of view, degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub eye: [f32; 3],
    pub target: [f32; 3],
    pub up: [f32; 3],
}

impl CameraState {
    pub fn view(&self) -> glm::Mat4 {
        glm::look_at(
            &glm::make_vec3(&self.eye),
            &glm::make_vec3(&self.target),
            &glm::make_vec3(&self.up),
        )
    }

    /// Perspective projection with a [0, 1] depth range, as wgpu expects.
    pub fn projection(&self, aspect: f32) -> glm::Mat4 {
        glm::perspective_rh_zo(aspect, self.fov.to_radians(), self.near, self.far)
    }
}

impl Default for CameraState {
    fn default() -> Self {
        // eye at the origin looking down +Z with -Y up; the scene is pushed
        // into the near/far slab by the screen offset
        Self {
            fov: 45.0,
            near: 5.17,
            far: 10.7,
            eye: [0.0, 0.0, 0.0],
            target: [0.0, 0.0, 1.0],
            up: [0.0, -1.0, 0.0],
        }
    }
}

/// Placement of the scene in front of the camera and of the figures on the floor.
#[derive(Debug, Clone)]
pub struct SceneLayout {
    pub screen_offset: [f32; 3],
    pub model_offset: [f32; 3],
    /// Floor offsets (x, y) of each figure drawn; all share one pose.
    pub troupe: Vec<[f32; 2]>,
    pub show_grid: bool,
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self {
            screen_offset: [-0.1, 1.6, 7.9],
            model_offset: [0.0, 0.0, 1.75],
            troupe: vec![[0.0, 0.0]],
            show_grid: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn screen_offset_lands_inside_depth_range() {
        let camera = CameraState::default();
        let layout = SceneLayout::default();
        let clip = camera.projection(1.0)
            * camera.view()
            * glm::vec4(
                layout.screen_offset[0],
                layout.screen_offset[1],
                layout.screen_offset[2],
                1.0,
            );
        let depth = clip.z / clip.w;
        assert!(depth > 0.0 && depth < 1.0, "depth {depth}");
    }

    #[test]
    fn view_looks_down_positive_z() {
        let camera = CameraState::default();
        let eye_space = camera.view() * glm::vec4(0.0, 0.0, 5.0, 1.0);
        // right-handed eye space looks down -Z
        assert_relative_eq!(eye_space.z, -5.0, epsilon = 1e-5);
    }
}
