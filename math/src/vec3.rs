use approx::{AbsDiffEq, RelativeEq};

use crate::traits::Zero;

#[repr(transparent)]
#[derive(Clone, Copy, Debug)]
pub struct Vec3<T>(pub(crate) [T; 3]);

impl<T> Vec3<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self([x, y, z])
    }
}

impl<T: Zero> Zero for Vec3<T> {
    const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO);
}

impl<T: Copy> Vec3<T> {
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
    pub const fn into_arr(self) -> [T; 3] {
        self.0
    }
}

impl<T> Vec3<T> {
    #[inline]
    pub const fn x_mut(&mut self) -> &mut T {
        &mut self.0[0]
    }
    #[inline]
    pub const fn y_mut(&mut self) -> &mut T {
        &mut self.0[1]
    }
    #[inline]
    pub const fn z_mut(&mut self) -> &mut T {
        &mut self.0[2]
    }
}

impl Vec3<f32> {
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn length_squared(&self) -> f32 {
        self.dot(*self)
    }
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt() // NOTE: sqrt is not const
    }
    #[inline]
    pub const fn scaled(&self, s: f32) -> Self {
        Vec3::new(self.x() * s, self.y() * s, self.z() * s)
    }
    #[inline]
    pub const fn scale_assign(&mut self, s: f32) {
        *self = self.scaled(s)
    }
    #[inline]
    pub const fn negated(&self) -> Self {
        self.scaled(-1.0)
    }
    /// Returns the unit vector pointing the same way. The zero vector is
    /// returned unchanged.
    #[inline]
    pub fn normalized(self) -> Self {
        self.try_normalized(0.0).unwrap_or(self)
    }
    /// Returns the unit vector pointing the same way, or `None` if the length
    /// is not above `min_length`.
    pub fn try_normalized(self, min_length: f32) -> Option<Self> {
        let l = self.length();

        if l > min_length && l.is_finite() {
            Some(self.scaled(1.0 / l))
        } else {
            None
        }
    }
    #[inline]
    pub const fn add(&self, other: Self) -> Self {
        Self::new(
            self.x() + other.x(),
            self.y() + other.y(),
            self.z() + other.z(),
        )
    }
    #[inline]
    pub const fn add_assign(&mut self, other: Self) {
        *self.x_mut() += other.x();
        *self.y_mut() += other.y();
        *self.z_mut() += other.z();
    }
    #[inline]
    pub const fn sub(&self, other: Self) -> Self {
        Self::new(
            self.x() - other.x(),
            self.y() - other.y(),
            self.z() - other.z(),
        )
    }
    #[inline]
    pub const fn dot(&self, other: Self) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }
    #[inline]
    pub const fn cross(&self, other: Self) -> Self {
        Self::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }
}

impl std::ops::Neg for Vec3<f32> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl std::ops::Add for Vec3<f32> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Vec3::add(&self, rhs)
    }
}

impl std::ops::Sub for Vec3<f32> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Vec3::sub(&self, rhs)
    }
}

impl std::ops::Mul<f32> for Vec3<f32> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        self.scaled(rhs)
    }
}

impl<T: std::fmt::Display + Copy> std::fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{x: {}, y: {}, z: {}}}", self.x(), self.y(), self.z())
    }
}

impl<T: PartialEq + Copy> PartialEq for Vec3<T> {
    fn eq(&self, other: &Self) -> bool {
        self.x() == other.x() && self.y() == other.y() && self.z() == other.z()
    }
}

impl AbsDiffEq for Vec3<f32> {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        f32::abs_diff_eq(&self.x(), &other.x(), epsilon)
            && f32::abs_diff_eq(&self.y(), &other.y(), epsilon)
            && f32::abs_diff_eq(&self.z(), &other.z(), epsilon)
    }
}

impl RelativeEq for Vec3<f32> {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        f32::relative_eq(&self.x(), &other.x(), epsilon, max_relative)
            && f32::relative_eq(&self.y(), &other.y(), epsilon, max_relative)
            && f32::relative_eq(&self.z(), &other.z(), epsilon, max_relative)
    }
}
