//! Yaw-pitch-roll (Z-Y-X Euler angle) encoding of rotations.
//!
//! A rotation is composed as `R = R_yaw * R_pitch * R_roll`: roll about the
//! forward axis (`+X`) is applied to a vector first, then pitch about the
//! right axis (`+Y`), then yaw about the up axis (`+Z`).

use std::f32::consts::FRAC_PI_2;

use tracing::trace;

use crate::constants::{GIMBAL_LOCK_EPSILON, WORLD_FORWARD, WORLD_RIGHT, WORLD_UP};
use crate::quat::Quat;
use crate::result::Result;
use crate::scalar::{angle_eq, wrap_angle};

/// Rotation angles in radians.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct YawPitchRoll {
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

impl YawPitchRoll {
    #[inline]
    pub const fn new(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self { yaw, pitch, roll }
    }
    /// Compares all three angles modulo a full turn.
    pub fn angle_eq(&self, other: &Self, epsilon: f32) -> bool {
        angle_eq(self.yaw, other.yaw, epsilon)
            && angle_eq(self.pitch, other.pitch, epsilon)
            && angle_eq(self.roll, other.roll, epsilon)
    }
    /// Whether pitch is close enough to ±π/2 that yaw and roll rotate about
    /// the same axis and cannot be told apart.
    pub fn is_near_gimbal_lock(&self) -> bool {
        FRAC_PI_2 - self.pitch.abs() <= GIMBAL_LOCK_EPSILON
    }
    pub fn to_quat(&self) -> Quat {
        Quat::from_yaw_pitch_roll(self.yaw, self.pitch, self.roll)
    }
}

impl From<(f32, f32, f32)> for YawPitchRoll {
    #[inline]
    fn from((yaw, pitch, roll): (f32, f32, f32)) -> Self {
        Self::new(yaw, pitch, roll)
    }
}

impl From<YawPitchRoll> for (f32, f32, f32) {
    #[inline]
    fn from(value: YawPitchRoll) -> Self {
        (value.yaw, value.pitch, value.roll)
    }
}

impl From<YawPitchRoll> for Quat {
    #[inline]
    fn from(value: YawPitchRoll) -> Self {
        value.to_quat()
    }
}

impl std::fmt::Display for YawPitchRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{yaw: {}, pitch: {}, roll: {}}}",
            self.yaw, self.pitch, self.roll
        )
    }
}

impl Quat {
    pub fn from_yaw_pitch_roll(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self::from_angle_axis(yaw, WORLD_UP)
            .mul(Self::from_angle_axis(pitch, WORLD_RIGHT))
            .mul(Self::from_angle_axis(roll, WORLD_FORWARD))
    }

    /// Decomposes the rotation into yaw, pitch and roll.
    ///
    /// Yaw and roll are returned in `(-π, π]`, pitch in `[-π/2, π/2]`.
    /// Encoding the result again gives back the same rotation. Within
    /// [`GIMBAL_LOCK_EPSILON`] of pitch ±π/2 yaw and roll turn about the same
    /// axis and only `yaw - roll` (or `yaw + roll`) is determined; roll is
    /// then reported as zero and the whole remaining turn as yaw. Fails only
    /// for the zero quaternion.
    pub fn to_yaw_pitch_roll(&self) -> Result<YawPitchRoll> {
        let (s, i, j, k) = self.normalized()?.into_tuple();

        // Half of yaw - roll and half of yaw + roll. Their radii depend on
        // pitch alone and vanish at pitch +π/2 and -π/2 respectively.
        let (dc, ds) = (s + j, k - i);
        let (sc, ss) = (s - j, k + i);
        let difference = ds.atan2(dc);
        let sum = ss.atan2(sc);

        let pitch = FRAC_PI_2 - 2.0 * sc.hypot(ss).atan2(dc.hypot(ds));

        if FRAC_PI_2 - pitch.abs() <= GIMBAL_LOCK_EPSILON {
            trace!(pitch, "gimbal lock, folding roll into yaw");

            let yaw = if pitch > 0.0 { difference } else { sum };

            return Ok(YawPitchRoll::new(wrap_angle(2.0 * yaw), pitch, 0.0));
        }

        Ok(YawPitchRoll::new(
            wrap_angle(sum + difference),
            pitch,
            wrap_angle(sum - difference),
        ))
    }
}
