use approx::{AbsDiffEq, RelativeEq};
use tracing::{debug, trace, warn};

use crate::constants::{DEGENERATE_EPSILON, WORLD_FORWARD, WORLD_RIGHT};
use crate::mat4::Mat4;
use crate::result::{Error, Result};
use crate::traits::{Identity, Zero};
use crate::vec3::Vec3;
use crate::vec4::Vec4;

/// A quaternion `s + i*î + j*ĵ + k*k̂`, stored as a scalar part and a vector
/// part.
///
/// Unit quaternions encode rotations. `q` and `-q` encode the same rotation,
/// so [`PartialEq`] and [`AbsDiffEq`] compare raw components while
/// [`Quat::rotation_eq`] treats the two signs as equal.
#[derive(Copy, Clone, Debug)]
pub struct Quat {
    s: f32,
    v: Vec3<f32>,
}

/// Named-field form of a quaternion's components.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Components {
    pub s: f32,
    pub i: f32,
    pub j: f32,
    pub k: f32,
}

impl Identity for Quat {
    const IDENTITY: Self = Self {
        s: 1.0,
        v: Vec3::ZERO,
    };
}

impl Zero for Quat {
    const ZERO: Self = Self {
        s: 0.0,
        v: Vec3::ZERO,
    };
}

impl Quat {
    #[inline]
    pub const fn new(s: f32, i: f32, j: f32, k: f32) -> Self {
        Self {
            s,
            v: Vec3::new(i, j, k),
        }
    }
    #[inline]
    pub const fn from_scalar_vector(s: f32, v: Vec3<f32>) -> Self {
        Self { s, v }
    }
    /// Embeds a real number (vector part zero).
    #[inline]
    pub const fn from_scalar(s: f32) -> Self {
        Self::from_scalar_vector(s, Vec3::ZERO)
    }
    /// Embeds a vector as a pure quaternion (scalar part zero).
    #[inline]
    pub const fn from_vector(v: Vec3<f32>) -> Self {
        Self::from_scalar_vector(0.0, v)
    }
    /// Components in `(s, i, j, k)` order.
    #[inline]
    pub const fn from_tuple((s, i, j, k): (f32, f32, f32, f32)) -> Self {
        Self::new(s, i, j, k)
    }
    /// Reads `(s, i, j, k)` from `(x, y, z, w)`.
    #[inline]
    pub const fn from_vec4(v: Vec4<f32>) -> Self {
        Self::new(v.x(), v.y(), v.z(), v.w())
    }
    /// Reads the GPU-style layout where `w` holds the scalar part.
    #[inline]
    pub const fn from_xyzw(v: Vec4<f32>) -> Self {
        Self::new(v.w(), v.x(), v.y(), v.z())
    }
    #[inline]
    pub const fn s(&self) -> f32 {
        self.s
    }
    #[inline]
    pub const fn i(&self) -> f32 {
        self.v.x()
    }
    #[inline]
    pub const fn j(&self) -> f32 {
        self.v.y()
    }
    #[inline]
    pub const fn k(&self) -> f32 {
        self.v.z()
    }
    #[inline]
    pub const fn scalar(&self) -> f32 {
        self.s
    }
    #[inline]
    pub const fn vector(&self) -> Vec3<f32> {
        self.v
    }
    #[inline]
    pub const fn with_s(self, s: f32) -> Self {
        Self::new(s, self.i(), self.j(), self.k())
    }
    #[inline]
    pub const fn with_i(self, i: f32) -> Self {
        Self::new(self.s, i, self.j(), self.k())
    }
    #[inline]
    pub const fn with_j(self, j: f32) -> Self {
        Self::new(self.s, self.i(), j, self.k())
    }
    #[inline]
    pub const fn with_k(self, k: f32) -> Self {
        Self::new(self.s, self.i(), self.j(), k)
    }
    #[inline]
    pub const fn with_scalar(self, s: f32) -> Self {
        Self::from_scalar_vector(s, self.v)
    }
    #[inline]
    pub const fn with_vector(self, v: Vec3<f32>) -> Self {
        Self::from_scalar_vector(self.s, v)
    }
    #[inline]
    pub const fn into_tuple(self) -> (f32, f32, f32, f32) {
        (self.s, self.i(), self.j(), self.k())
    }
    #[inline]
    pub const fn into_array(self) -> [f32; 4] {
        [self.s, self.i(), self.j(), self.k()]
    }
    #[inline]
    pub const fn into_components(self) -> Components {
        Components {
            s: self.s,
            i: self.i(),
            j: self.j(),
            k: self.k(),
        }
    }
    #[inline]
    pub const fn into_scalar_vector(self) -> (f32, Vec3<f32>) {
        (self.s, self.v)
    }
    /// The inverse of [`Quat::from_vec4`]: `s` lands in `x`.
    #[inline]
    pub const fn into_vec4(self) -> Vec4<f32> {
        Vec4::new(self.s, self.i(), self.j(), self.k())
    }
    #[inline]
    pub const fn into_xyzw(self) -> Vec4<f32> {
        Vec4::from_vec3(self.v, self.s)
    }

    #[inline]
    pub const fn negated(&self) -> Self {
        self.scaled(-1.0)
    }
    #[inline]
    pub const fn scaled(&self, f: f32) -> Self {
        Self {
            s: self.s * f,
            v: self.v.scaled(f),
        }
    }
    #[inline]
    pub const fn added(&self, rhs: &Self) -> Self {
        Self {
            s: self.s + rhs.s,
            v: self.v.add(rhs.v),
        }
    }
    #[inline]
    pub const fn subtracted(&self, rhs: &Self) -> Self {
        Self {
            s: self.s - rhs.s,
            v: self.v.sub(rhs.v),
        }
    }
    /// Four-dimensional dot product.
    #[inline]
    pub const fn dot(&self, rhs: &Self) -> f32 {
        self.s * rhs.s + self.v.dot(rhs.v)
    }
    #[inline]
    pub const fn conjugate(&self) -> Self {
        Self {
            s: self.s,
            v: self.v.negated(),
        }
    }
    #[inline]
    pub const fn length_squared(&self) -> f32 {
        self.dot(self)
    }
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt() // NOTE: sqrt is not const
    }
    pub fn is_unit(&self, epsilon: f32) -> bool {
        (self.length() - 1.0).abs() <= epsilon
    }
    /// Scales the quaternion to unit length.
    ///
    /// Fails with [`Error::ZeroLength`] if the length is zero, subnormal or not
    /// finite, since there is no direction to preserve.
    pub fn normalized(&self) -> Result<Self> {
        let len = self.length();

        if !len.is_normal() {
            debug!(quat = ?self, "cannot normalize quaternion");
            return Err(Error::ZeroLength);
        }

        Ok(Self::new(
            self.s / len,
            self.i() / len,
            self.j() / len,
            self.k() / len,
        ))
    }
    /// Returns `conjugate / length²`, the two-sided multiplicative inverse.
    pub fn inverse(&self) -> Result<Self> {
        let len_sq = self.length_squared();

        if !len_sq.is_normal() {
            debug!(quat = ?self, "cannot invert quaternion");
            return Err(Error::ZeroLength);
        }

        Ok(self.conjugate().scaled(1.0 / len_sq))
    }
    /// The Hamilton product `self * rhs`.
    #[inline]
    pub const fn mul(&self, rhs: Self) -> Self {
        let s = self.s * rhs.s - self.v.dot(rhs.v);
        let v = rhs
            .v
            .scaled(self.s)
            .add(self.v.scaled(rhs.s))
            .add(self.v.cross(rhs.v));

        Self { s, v }
    }
    #[inline]
    pub const fn mul_assign(&mut self, rhs: Self) {
        *self = self.mul(rhs);
    }
    /// Returns the representative of the rotation with a non-negative scalar
    /// part.
    pub const fn canonicalized(&self) -> Self {
        if self.s < 0.0 { self.negated() } else { *self }
    }
    /// Compares as rotations: `q` and `-q` are equal.
    pub fn rotation_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.abs_diff_eq(other, epsilon) || self.abs_diff_eq(&other.negated(), epsilon)
    }

    /// The rotation by `angle` radians about `axis`, following the right-hand
    /// rule.
    ///
    /// The axis does not have to be unit length, it is normalized first. A
    /// zero axis has no direction to rotate about and yields the identity.
    pub fn from_angle_axis(angle: f32, axis: Vec3<f32>) -> Self {
        let Some(axis) = axis.try_normalized(0.0) else {
            warn!(angle, "rotation axis has zero length, using the identity");
            return Self::IDENTITY;
        };

        let (sin, cos) = (angle * 0.5).sin_cos(); // NOTE: sin_cos is not const

        Self {
            s: cos,
            v: axis.scaled(sin),
        }
    }
    /// The rotation angle in `[0, 2π]`.
    ///
    /// Equal to `2 * acos(s)` for unit quaternions; computed from both parts
    /// so it stays accurate near zero and does not depend on the length.
    pub fn angle(&self) -> f32 {
        2.0 * self.v.length().atan2(self.s)
    }
    /// The unit rotation axis. When the vector part has (almost) no length
    /// the rotation angle is 0 or 2π, any axis is valid, and the world
    /// forward axis (`+X`) is returned.
    pub fn axis(&self) -> Vec3<f32> {
        self.v.try_normalized(DEGENERATE_EPSILON).unwrap_or_else(|| {
            trace!(quat = ?self, "rotation axis is undefined, falling back to forward");
            WORLD_FORWARD
        })
    }
    pub fn to_angle_axis(&self) -> (f32, Vec3<f32>) {
        (self.angle(), self.axis())
    }

    /// The shortest-arc rotation taking direction `from` onto direction `to`.
    ///
    /// Both inputs are normalized, so only their directions matter. Only when
    /// `from × to` is too short to give an axis are the directions treated as
    /// equal (identity) or opposite. For opposite directions every axis
    /// perpendicular to `from` is a valid answer; the half turn about
    /// `normalize(X × from)` is returned, or about `normalize(Y × from)` when
    /// `from` lies along `X`.
    pub fn from_to(from: Vec3<f32>, to: Vec3<f32>) -> Result<Self> {
        let from = direction(from)?;
        let to = direction(to)?;

        // rounding in the cross product can tilt it towards `from`
        let normal = from.cross(to);
        let normal = normal.sub(from.scaled(normal.dot(from)));

        let Some(axis) = normal.try_normalized(DEGENERATE_EPSILON) else {
            if from.dot(to) > 0.0 {
                return Ok(Self::IDENTITY);
            }

            trace!(%from, %to, "opposite directions, picking a perpendicular axis");

            let axis = WORLD_FORWARD
                .cross(from)
                .try_normalized(1e-3)
                .unwrap_or_else(|| WORLD_RIGHT.cross(from).normalized());

            return Ok(Self::from_vector(axis));
        };

        // cos and sin of the half angle, both well conditioned near 0 and π
        let cos = from.add(to).length() * 0.5;
        let sin = from.sub(to).length() * 0.5;

        Self::from_scalar_vector(cos, axis.scaled(sin)).normalized()
    }

    /// Rotates `v` by computing `q * v * q⁻¹`. Works for any non-zero
    /// quaternion since the length cancels out.
    pub fn rotate_vec(&self, v: Vec3<f32>) -> Result<Vec3<f32>> {
        let inv = self.inverse()?;

        Ok(self.mul(Self::from_vector(v)).mul(inv).v)
    }
    /// Shorthand for `q * v * conj(q)`, only a rotation when `q` is unit.
    pub const fn rotate_vec_unit(&self, v: Vec3<f32>) -> Vec3<f32> {
        self.mul(Self::from_vector(v)).mul(self.conjugate()).v
    }

    /// The homogeneous rotation matrix, agreeing with [`Quat::rotate_vec`]
    /// for every non-zero quaternion.
    pub fn to_mat4(&self) -> Result<Mat4<f32>> {
        let len_sq = self.length_squared();

        if !len_sq.is_normal() {
            debug!(quat = ?self, "cannot build rotation matrix");
            return Err(Error::ZeroLength);
        }

        let f = 2.0 / len_sq;
        let (w, x, y, z) = self.into_tuple();

        Ok(Mat4::from_rows(
            Vec4::new(
                1.0 - f * (y * y + z * z),
                f * (x * y - w * z),
                f * (x * z + w * y),
                0.0,
            ),
            Vec4::new(
                f * (x * y + w * z),
                1.0 - f * (x * x + z * z),
                f * (y * z - w * x),
                0.0,
            ),
            Vec4::new(
                f * (x * z - w * y),
                f * (y * z + w * x),
                1.0 - f * (x * x + y * y),
                0.0,
            ),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        ))
    }
}

fn direction(v: Vec3<f32>) -> Result<Vec3<f32>> {
    v.try_normalized(DEGENERATE_EPSILON)
        .ok_or(Error::ZeroLengthVector)
        .inspect_err(|e| debug!(%v, error = %e, "invalid direction"))
}

impl From<(f32, f32, f32, f32)> for Quat {
    #[inline]
    fn from(value: (f32, f32, f32, f32)) -> Self {
        Self::from_tuple(value)
    }
}

impl From<Quat> for (f32, f32, f32, f32) {
    #[inline]
    fn from(value: Quat) -> Self {
        value.into_tuple()
    }
}

impl From<[f32; 4]> for Quat {
    #[inline]
    fn from([s, i, j, k]: [f32; 4]) -> Self {
        Self::new(s, i, j, k)
    }
}

impl From<Quat> for [f32; 4] {
    #[inline]
    fn from(value: Quat) -> Self {
        value.into_array()
    }
}

impl From<Components> for Quat {
    #[inline]
    fn from(Components { s, i, j, k }: Components) -> Self {
        Self::new(s, i, j, k)
    }
}

impl From<Quat> for Components {
    #[inline]
    fn from(value: Quat) -> Self {
        value.into_components()
    }
}

impl From<(f32, Vec3<f32>)> for Quat {
    #[inline]
    fn from((s, v): (f32, Vec3<f32>)) -> Self {
        Self::from_scalar_vector(s, v)
    }
}

impl From<f32> for Quat {
    #[inline]
    fn from(value: f32) -> Self {
        Self::from_scalar(value)
    }
}

impl From<Vec3<f32>> for Quat {
    #[inline]
    fn from(value: Vec3<f32>) -> Self {
        Self::from_vector(value)
    }
}

impl std::ops::Mul for Quat {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Quat::mul(&self, rhs)
    }
}

impl std::ops::MulAssign for Quat {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        Quat::mul_assign(self, rhs);
    }
}

impl std::ops::Mul<f32> for Quat {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        self.scaled(rhs)
    }
}

impl std::ops::Mul<Quat> for f32 {
    type Output = Quat;
    #[inline]
    fn mul(self, rhs: Quat) -> Self::Output {
        rhs.scaled(self)
    }
}

impl std::ops::Neg for Quat {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl std::ops::Add for Quat {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.added(&rhs)
    }
}

impl std::ops::Sub for Quat {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtracted(&rhs)
    }
}

impl std::fmt::Display for Quat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{s: {}, i: {}, j: {}, k: {}}}",
            self.s,
            self.i(),
            self.j(),
            self.k()
        )
    }
}

impl PartialEq for Quat {
    fn eq(&self, other: &Self) -> bool {
        self.s == other.s && self.v == other.v
    }
}

impl AbsDiffEq for Quat {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        f32::abs_diff_eq(&self.s, &other.s, epsilon) && self.v.abs_diff_eq(&other.v, epsilon)
    }
}

impl RelativeEq for Quat {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        f32::relative_eq(&self.s, &other.s, epsilon, max_relative)
            && self.v.relative_eq(&other.v, epsilon, max_relative)
    }
}
