use approx::{AbsDiffEq, RelativeEq};

use crate::traits::Zero;
use crate::vec3::Vec3;

#[repr(transparent)]
#[derive(Clone, Copy, Debug)]
pub struct Vec4<T>(pub(crate) [T; 4]);

impl<T> Vec4<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self([x, y, z, w])
    }
}

impl<T> Vec4<T>
where
    T: Copy,
{
    #[inline]
    pub const fn from_vec3(v: Vec3<T>, w: T) -> Self {
        Self::new(v.x(), v.y(), v.z(), w)
    }
    #[inline]
    pub const fn x(&self) -> T {
        self.0[0]
    }
    #[inline]
    pub const fn y(&self) -> T {
        self.0[1]
    }
    #[inline]
    pub const fn z(&self) -> T {
        self.0[2]
    }
    #[inline]
    pub const fn w(&self) -> T {
        self.0[3]
    }
    #[inline]
    pub const fn xyz(&self) -> Vec3<T> {
        Vec3::new(self.x(), self.y(), self.z())
    }
}

impl<T: Zero> Zero for Vec4<T> {
    const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO);
}

impl Vec4<f32> {
    #[inline]
    pub const fn scaled(&self, s: f32) -> Self {
        Self::new(self.x() * s, self.y() * s, self.z() * s, self.w() * s)
    }
    #[inline]
    pub const fn add(&self, other: &Self) -> Self {
        Self::new(
            self.x() + other.x(),
            self.y() + other.y(),
            self.z() + other.z(),
            self.w() + other.w(),
        )
    }
}

impl<T: std::fmt::Display + Copy> std::fmt::Display for Vec4<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{x: {}, y: {}, z: {}, w: {}}}",
            self.x(),
            self.y(),
            self.z(),
            self.w()
        )
    }
}

impl<T: PartialEq + Copy> PartialEq for Vec4<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl AbsDiffEq for Vec4<f32> {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| f32::abs_diff_eq(a, b, epsilon))
    }
}

impl RelativeEq for Vec4<f32> {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| f32::relative_eq(a, b, epsilon, max_relative))
    }
}

#[cfg(test)]
mod tests {
    use super::Vec4;
    use crate::vec3::Vec3;

    #[test]
    fn scale_and_add() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);

        assert_eq!(a.scaled(2.0).add(&a), Vec4::new(3.0, 6.0, 9.0, 12.0));
    }

    #[test]
    fn vec3_embedding() {
        let v = Vec3::new(1.0, 2.0, 3.0);

        assert_eq!(Vec4::from_vec3(v, 1.0), Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(Vec4::from_vec3(v, 1.0).xyz(), v);
    }
}
