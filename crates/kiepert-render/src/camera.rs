use kiepert_math::{DMat4, DQuat, Point3, Vector3};

/// Perspective camera looking at the surface from a fixed distance.
///
/// The view is `translate(0, 0, -distance) · tilt · rotation`, where
/// `rotation` is the trackball orientation driven by the external rotation
/// controller and `tilt` is a fixed presentation rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub rotation: DQuat,   // trackball orientation
    pub tilt_axis: Vector3,
    pub tilt_angle: f64,   // radians
    pub distance: f64,     // eye distance along +Z
    pub fov_y: f64,        // vertical FOV in radians
    pub aspect: f64,       // width/height
    pub near: f64,
    pub far: f64,
}

impl Camera {
    /// Trackball rotation alone; the model-view used for normals.
    pub fn rotation_matrix(&self) -> DMat4 {
        DMat4::from_quat(self.rotation)
    }

    /// World-to-camera transform (column-major, right-handed).
    pub fn view_matrix(&self) -> DMat4 {
        let translate = DMat4::from_translation(Vector3::new(0.0, 0.0, -self.distance));
        let tilt = DMat4::from_quat(DQuat::from_axis_angle(
            self.tilt_axis.normalize(),
            self.tilt_angle,
        ));
        translate * tilt * self.rotation_matrix()
    }

    /// Perspective projection with OpenGL-style NDC (-1 to 1 for Z).
    pub fn projection_matrix(&self) -> DMat4 {
        DMat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> DMat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Inverse-transpose of the trackball rotation.
    pub fn normal_matrix(&self) -> DMat4 {
        self.rotation_matrix().inverse().transpose()
    }

    /// Eye position in world space.
    pub fn eye(&self) -> Point3 {
        self.view_matrix().inverse().transform_point3(Point3::ZERO)
    }

    /// Rotate the trackball: `delta_x` about the screen Y axis, `delta_y`
    /// about the screen X axis (radians).
    pub fn orbit(&mut self, delta_x: f64, delta_y: f64) {
        let delta = DQuat::from_rotation_y(delta_x) * DQuat::from_rotation_x(delta_y);
        self.rotation = (delta * self.rotation).normalize();
    }

    /// Replace the trackball orientation, as reported by an external
    /// rotation controller.
    pub fn set_rotation(&mut self, rotation: DQuat) {
        self.rotation = rotation.normalize();
    }

    /// Update the aspect ratio from a viewport size; zero heights are ignored.
    pub fn set_aspect(&mut self, width: f64, height: f64) {
        if height > 0.0 && width > 0.0 {
            self.aspect = width / height;
        }
    }
}

impl Default for Camera {
    /// Square viewport, 45° FOV, depth range 6..14 around an eye 10 units away,
    /// tilted 0.7 rad about (0.707, 0.707, 0).
    fn default() -> Self {
        Self {
            rotation: DQuat::IDENTITY,
            tilt_axis: Vector3::new(0.707, 0.707, 0.0),
            tilt_angle: 0.7,
            distance: 10.0,
            fov_y: std::f64::consts::FRAC_PI_4,
            aspect: 1.0,
            near: 6.0,
            far: 14.0,
        }
    }
}
