use crate::scene::surface::{DrawSurface, Rgb};
use nalgebra_glm as glm;

/// Segments per circle of the wireframe ellipsoid.
pub const CIRCLE_SEGMENTS: usize = 12;

/// Coordinate plane a circle lies in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plane {
    XY,
    XZ,
    YZ,
}

impl Plane {
    fn embed(self, center: &glm::Vec3, u: f32, v: f32) -> glm::Vec3 {
        match self {
            Plane::XY => glm::vec3(center.x + u, center.y + v, center.z),
            Plane::XZ => glm::vec3(center.x + u, center.y, center.z + v),
            Plane::YZ => glm::vec3(center.x, center.y + u, center.z + v),
        }
    }
}

/// Vertices of a circle of `radius` around `center`, `segments + 1` points
/// with the last one closing back onto the first.
///
/// The radius vector is advanced by a constant rotation, so sin/cos are only
/// evaluated once per circle.
pub fn circle_points(
    center: glm::Vec3,
    radius: f32,
    plane: Plane,
    segments: usize,
) -> Vec<glm::Vec3> {
    let step = (360.0 / segments as f32).to_radians();
    let (s, c) = step.sin_cos();

    let mut points = Vec::with_capacity(segments + 1);
    let (mut u, mut v) = (radius, 0.0_f32);
    points.push(plane.embed(&center, u, v));
    for _ in 0..segments {
        (u, v) = (u * c - v * s, u * s + v * c);
        points.push(plane.embed(&center, u, v));
    }
    points
}

/// Unit sphere drawn as three orthogonal circles; the current scale turns it
/// into an ellipsoid.
pub fn ellipsoid<S: DrawSurface + ?Sized>(surface: &mut S) {
    let origin = glm::Vec3::zeros();
    for plane in [Plane::XY, Plane::XZ, Plane::YZ] {
        surface.polyline(&circle_points(origin, 1.0, plane, CIRCLE_SEGMENTS));
    }
}

/// Floor reference: a 5x5 grid on the XY plane with emphasized center lines,
/// a marked vertical ruler and axis labels.
pub fn ground_grid<S: DrawSurface + ?Sized>(surface: &mut S, minor: Rgb, major: Rgb) {
    for i in -2..=2 {
        let p = i as f32;
        let half = if i == 0 {
            surface.set_color(major);
            2.5
        } else {
            surface.set_color(minor);
            2.0
        };
        surface.polyline(&[glm::vec3(-half, p, 0.0), glm::vec3(half, p, 0.0)]);
        surface.polyline(&[glm::vec3(p, -half, 0.0), glm::vec3(p, half, 0.0)]);
    }

    surface.set_color(major);
    surface.polyline(&[glm::vec3(0.0, 2.0, 0.0), glm::vec3(0.0, 2.0, 4.0)]);
    for k in 1..5 {
        surface.point(glm::vec3(0.0, 2.0, k as f32));
    }

    surface.text(glm::vec3(2.5, 0.0, 0.0), " X");
    surface.text(glm::vec3(0.0, 2.5, 0.0), " Y");
    surface.text(glm::vec3(0.0, 2.0, 4.0), " Z");
}
