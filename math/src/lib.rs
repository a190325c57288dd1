//! Quaternion algebra for composing 3D rotations.
//!
//! All angles are in radians.

pub mod constants;
mod mat4;
mod quat;
#[cfg(feature = "random")]
pub mod random;
pub mod result;
pub mod scalar;
mod traits;
mod vec3;
mod vec4;
mod yaw_pitch_roll;

pub use mat4::Mat4;
pub use quat::{Components, Quat};
pub use result::{Error, Result};
pub use traits::{Identity, One, Zero};
pub use vec3::Vec3;
pub use vec4::Vec4;
pub use yaw_pitch_roll::YawPitchRoll;
