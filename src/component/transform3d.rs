use glam::{Quat, Vec3};

#[derive(Clone, Copy, Debug)]
pub struct Transform3D {
    pub position: Vec3,
    pub rotation: Quat
}

impl Default for Transform3D {
    fn default() -> Transform3D {
        Transform3D {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY
        }
    }
}

impl Transform3D {
    pub fn with_position(self: &Self, new_position: Vec3) -> Transform3D {
        let mut result = *self;
        result.position = new_position;
        result
    }

    /// Rotate by `angle` radians about `axis` in this transform's own local space.
    /// The rotation is composed onto the current orientation.
    pub fn rotate_local(self: &mut Self, axis: Vec3, angle: f32) {
        self.rotation = self.rotation * Quat::from_axis_angle(axis, angle);
    }

    pub fn rotate_x(self: &mut Self, angle: f32) {
        self.rotate_local(Vec3::X, angle);
    }

    pub fn rotate_z(self: &mut Self, angle: f32) {
        self.rotate_local(Vec3::Z, angle);
    }
}
