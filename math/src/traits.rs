/// Additive identity of a value type.
pub trait Zero {
    const ZERO: Self;
}

/// Multiplicative identity of a scalar.
pub trait One {
    const ONE: Self;
}

/// The "do nothing" transform: identity matrix, identity rotation.
pub trait Identity {
    const IDENTITY: Self;
}

impl Zero for f32 {
    const ZERO: f32 = 0.0;
}

impl One for f32 {
    const ONE: f32 = 1.0;
}

#[cfg(test)]
mod tests {
    use super::{Identity, One, Zero};
    use crate::{Mat4, Quat, Vec3};

    #[test]
    fn identity_rotation_is_multiplicative_identity() {
        let q = Quat::new(0.5, -1.5, 2.0, 3.0);
        assert_eq!(Quat::IDENTITY.mul(q), q);
        assert_eq!(q.mul(Quat::IDENTITY), q);
    }

    #[test]
    fn identity_matrix_leaves_vectors_alone() {
        let v = Vec3::new(1.0, -2.0, 3.0);
        assert_eq!(Mat4::<f32>::IDENTITY.transform_vec3(v), v);
    }

    #[test]
    fn scalar_constants() {
        assert_eq!(f32::ZERO + f32::ONE, 1.0);
        assert_eq!(Vec3::<f32>::ZERO.length_squared(), 0.0);
    }
}
