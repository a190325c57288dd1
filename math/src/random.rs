//! Random value generators for rotations and their encodings.
//!
//! Every generator takes the random source by `&mut R` so they compose: the
//! unit generators draw from the bounded ones and then normalize, rejecting
//! samples that are too short to have a reliable direction.

use std::f32::consts::{FRAC_PI_2, PI};
use std::ops::RangeInclusive;

use rand::Rng;

use crate::quat::Quat;
use crate::vec3::Vec3;
use crate::yaw_pitch_roll::YawPitchRoll;

const MIN_SAMPLE_LENGTH: f32 = 1e-3;

/// A scalar drawn uniformly from `range`. Panics if the range is empty.
pub fn scalar_in<R: Rng + ?Sized>(rng: &mut R, range: RangeInclusive<f32>) -> f32 {
    rng.random_range(range)
}

/// An angle in `[-π, π]`.
pub fn angle<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    scalar_in(rng, -PI..=PI)
}

pub fn vec3_in<R: Rng + ?Sized>(rng: &mut R, range: RangeInclusive<f32>) -> Vec3<f32> {
    Vec3::new(
        scalar_in(rng, range.clone()),
        scalar_in(rng, range.clone()),
        scalar_in(rng, range),
    )
}

/// A direction distributed uniformly over the unit sphere.
pub fn unit_vec3<R: Rng + ?Sized>(rng: &mut R) -> Vec3<f32> {
    loop {
        let v = vec3_in(rng, -1.0..=1.0);

        // only samples inside the unit ball project uniformly
        if v.length_squared() > 1.0 {
            continue;
        }
        if let Some(v) = v.try_normalized(MIN_SAMPLE_LENGTH) {
            return v;
        }
    }
}

pub fn quat_in<R: Rng + ?Sized>(rng: &mut R, range: RangeInclusive<f32>) -> Quat {
    Quat::from_scalar_vector(scalar_in(rng, range.clone()), vec3_in(rng, range))
}

/// A rotation distributed uniformly over the unit 3-sphere of quaternions.
pub fn unit_quat<R: Rng + ?Sized>(rng: &mut R) -> Quat {
    loop {
        let q = quat_in(rng, -1.0..=1.0);
        let len = q.length();

        if len > 1.0 || len <= MIN_SAMPLE_LENGTH {
            continue;
        }
        if let Ok(q) = q.normalized() {
            return q;
        }
    }
}

/// Yaw and roll in `[-π, π]`, pitch kept at least `gimbal_margin` away from
/// ±π/2 so the triple decodes back uniquely.
///
/// Panics if `gimbal_margin` leaves no pitch range (`gimbal_margin > π/2`).
pub fn yaw_pitch_roll<R: Rng + ?Sized>(rng: &mut R, gimbal_margin: f32) -> YawPitchRoll {
    let max_pitch = FRAC_PI_2 - gimbal_margin;

    YawPitchRoll::new(
        angle(rng),
        scalar_in(rng, -max_pitch..=max_pitch),
        angle(rng),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generated_values_respect_their_ranges() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            let a = angle(&mut rng);
            assert!((-PI..=PI).contains(&a));

            let v = vec3_in(&mut rng, -2.0..=3.0);
            for c in v.into_arr() {
                assert!((-2.0..=3.0).contains(&c));
            }

            let ypr = yaw_pitch_roll(&mut rng, 0.1);
            assert!(ypr.pitch.abs() <= FRAC_PI_2 - 0.1);
            assert!(!ypr.is_near_gimbal_lock());
        }
    }

    #[test]
    fn unit_generators_produce_unit_values() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..1000 {
            assert_abs_diff_eq!(unit_vec3(&mut rng).length(), 1.0, epsilon = 1e-5);
            assert!(unit_quat(&mut rng).is_unit(1e-5));
        }
    }

    #[test]
    fn same_seed_same_values() {
        let mut a = StdRng::seed_from_u64(3);
        let mut b = StdRng::seed_from_u64(3);

        assert_eq!(unit_quat(&mut a), unit_quat(&mut b));
        assert_eq!(yaw_pitch_roll(&mut a, 0.2), yaw_pitch_roll(&mut b, 0.2));
    }

    #[test]
    fn generators_accept_unsized_sources() {
        let mut rng = StdRng::seed_from_u64(5);
        let dyn_rng: &mut dyn rand::RngCore = &mut rng;

        assert!(unit_vec3(dyn_rng).length() > 0.0);
    }
}
