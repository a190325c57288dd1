use crate::vec3::Vec3;

/// Roll axis.
pub const WORLD_FORWARD: Vec3<f32> = Vec3::<f32>::X;
/// Pitch axis.
pub const WORLD_RIGHT: Vec3<f32> = Vec3::<f32>::Y;
/// Yaw axis.
pub const WORLD_UP: Vec3<f32> = Vec3::<f32>::Z;

/// Below this length a vector part is treated as having no direction.
pub const DEGENERATE_EPSILON: f32 = 1e-6;

/// Distance of pitch from ±π/2, in radians, within which yaw and roll are
/// considered coupled.
pub const GIMBAL_LOCK_EPSILON: f32 = 2e-5;
