use derive_more::Deref;

/// A GLSL vector of `N` components of type `T`.
#[derive(Debug, Clone, Copy, PartialEq, Deref)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub [T; N]);

impl<T, const N: usize> Vector<T, N> {
    pub const fn new(components: [T; N]) -> Self {
        Self(components)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Creates a vector with every component set to `value`.
    pub fn splat(value: T) -> Self {
        Self([value; N])
    }
}

impl<const N: usize> Vector<bool, N> {
    /// GL has no boolean upload entry points, boolean vectors are sent as
    /// integer vectors of `0` and `1`.
    pub fn to_ivec(self) -> Vector<i32, N> {
        Vector(self.0.map(i32::from))
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(components: [T; N]) -> Self {
        Self(components)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(vector: Vector<T, N>) -> Self {
        vector.0
    }
}

pub type Vec2 = Vector<f32, 2>;
pub type Vec3 = Vector<f32, 3>;
pub type Vec4 = Vector<f32, 4>;

pub type DVec2 = Vector<f64, 2>;
pub type DVec3 = Vector<f64, 3>;
pub type DVec4 = Vector<f64, 4>;

pub type UVec2 = Vector<u32, 2>;
pub type UVec3 = Vector<u32, 3>;
pub type UVec4 = Vector<u32, 4>;

pub type IVec2 = Vector<i32, 2>;
pub type IVec3 = Vector<i32, 3>;
pub type IVec4 = Vector<i32, 4>;

pub type BVec2 = Vector<bool, 2>;
pub type BVec3 = Vector<bool, 3>;
pub type BVec4 = Vector<bool, 4>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splat() {
        assert_eq!(Vec3::splat(0.5), Vec3::new([0.5, 0.5, 0.5]));
        assert_eq!(UVec4::splat(7).as_slice(), &[7, 7, 7, 7]);
    }

    #[test]
    fn test_bool_to_int() {
        let v = BVec4::new([true, false, false, true]);
        assert_eq!(v.to_ivec(), IVec4::new([1, 0, 0, 1]));
    }

    #[test]
    fn test_indexing() {
        let v: DVec2 = [3.0, 4.0].into();
        assert_eq!(v[0], 3.0);
        assert_eq!(v[1], 4.0);
        assert_eq!(<[f64; 2]>::from(v), [3.0, 4.0]);
    }
}
