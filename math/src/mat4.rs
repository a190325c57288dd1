use approx::{AbsDiffEq, RelativeEq};

use crate::traits::{Identity, One, Zero};
use crate::vec3::Vec3;
use crate::vec4::Vec4;

/// Column-major 4x4 matrix.
#[repr(transparent)]
#[derive(Clone, Copy, Debug)]
pub struct Mat4<T>([Vec4<T>; 4]);

impl<T> Mat4<T>
where
    T: Copy,
{
    #[inline]
    pub const fn from_rows(r0: Vec4<T>, r1: Vec4<T>, r2: Vec4<T>, r3: Vec4<T>) -> Self {
        Self([
            Vec4::new(r0.x(), r1.x(), r2.x(), r3.x()),
            Vec4::new(r0.y(), r1.y(), r2.y(), r3.y()),
            Vec4::new(r0.z(), r1.z(), r2.z(), r3.z()),
            Vec4::new(r0.w(), r1.w(), r2.w(), r3.w()),
        ])
    }
}

impl<T> Mat4<T> {
    #[inline]
    pub const fn from_cols(c0: Vec4<T>, c1: Vec4<T>, c2: Vec4<T>, c3: Vec4<T>) -> Self {
        Self([c0, c1, c2, c3])
    }
}

impl<T: One + Zero + Copy> Mat4<T> {
    pub const fn scaling(s: Vec3<T>) -> Self {
        Self::from_cols(
            Vec4::new(s.x(), T::ZERO, T::ZERO, T::ZERO),
            Vec4::new(T::ZERO, s.y(), T::ZERO, T::ZERO),
            Vec4::new(T::ZERO, T::ZERO, s.z(), T::ZERO),
            Vec4::new(T::ZERO, T::ZERO, T::ZERO, T::ONE),
        )
    }

    pub const fn translation(t: Vec3<T>) -> Self {
        Self::from_cols(
            Vec4::new(T::ONE, T::ZERO, T::ZERO, T::ZERO),
            Vec4::new(T::ZERO, T::ONE, T::ZERO, T::ZERO),
            Vec4::new(T::ZERO, T::ZERO, T::ONE, T::ZERO),
            Vec4::new(t.x(), t.y(), t.z(), T::ONE),
        )
    }
}

impl<T: Zero> Zero for Mat4<T> {
    const ZERO: Self = Self::from_cols(Vec4::ZERO, Vec4::ZERO, Vec4::ZERO, Vec4::ZERO);
}

impl<T: Zero + One> Identity for Mat4<T> {
    const IDENTITY: Self = Self::from_cols(
        Vec4::new(T::ONE, T::ZERO, T::ZERO, T::ZERO),
        Vec4::new(T::ZERO, T::ONE, T::ZERO, T::ZERO),
        Vec4::new(T::ZERO, T::ZERO, T::ONE, T::ZERO),
        Vec4::new(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    );
}

impl<T: Copy> Mat4<T> {
    #[inline]
    pub const fn r0(&self) -> Vec4<T> {
        Vec4::new(self.c0().x(), self.c1().x(), self.c2().x(), self.c3().x())
    }
    #[inline]
    pub const fn r1(&self) -> Vec4<T> {
        Vec4::new(self.c0().y(), self.c1().y(), self.c2().y(), self.c3().y())
    }
    #[inline]
    pub const fn r2(&self) -> Vec4<T> {
        Vec4::new(self.c0().z(), self.c1().z(), self.c2().z(), self.c3().z())
    }
    #[inline]
    pub const fn r3(&self) -> Vec4<T> {
        Vec4::new(self.c0().w(), self.c1().w(), self.c2().w(), self.c3().w())
    }
    #[inline]
    pub const fn c0(&self) -> Vec4<T> {
        self.0[0]
    }
    #[inline]
    pub const fn c1(&self) -> Vec4<T> {
        self.0[1]
    }
    #[inline]
    pub const fn c2(&self) -> Vec4<T> {
        self.0[2]
    }
    #[inline]
    pub const fn c3(&self) -> Vec4<T> {
        self.0[3]
    }
    #[inline]
    pub const fn transposed(&self) -> Self {
        Self::from_rows(self.c0(), self.c1(), self.c2(), self.c3())
    }
}

impl Mat4<f32> {
    pub const fn mul(&self, rhs: &Self) -> Mat4<f32> {
        Self::from_cols(
            self.transform_vec4(rhs.c0()),
            self.transform_vec4(rhs.c1()),
            self.transform_vec4(rhs.c2()),
            self.transform_vec4(rhs.c3()),
        )
    }
    /// Computes `M * v`.
    #[inline]
    pub const fn transform_vec4(&self, v: Vec4<f32>) -> Vec4<f32> {
        self.c0()
            .scaled(v.x())
            .add(&self.c1().scaled(v.y()))
            .add(&self.c2().scaled(v.z()))
            .add(&self.c3().scaled(v.w()))
    }
    /// Transforms a point (w = 1) and drops the resulting w. No perspective
    /// divide is performed, so this is meant for affine matrices.
    #[inline]
    pub const fn transform_vec3(&self, v: Vec3<f32>) -> Vec3<f32> {
        self.transform_vec4(Vec4::from_vec3(v, 1.0)).xyz()
    }
}

impl<T: std::fmt::Display + Copy> std::fmt::Display for Mat4<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        write!(f, "{}", self.c0())?;
        write!(f, "{}", self.c1())?;
        write!(f, "{}", self.c2())?;
        write!(f, "{}", self.c3())?;
        write!(f, "]")
    }
}

impl<T: PartialEq + Copy> PartialEq for Mat4<T> {
    fn eq(&self, other: &Self) -> bool {
        self.c0() == other.c0()
            && self.c1() == other.c1()
            && self.c2() == other.c2()
            && self.c3() == other.c3()
    }
}

impl AbsDiffEq for Mat4<f32> {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Mat4<f32> {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
