use derive_more::Deref;

/// A GLSL `matCxR`: `C` columns of `R` rows each, stored column after column
/// in the layout `glUniformMatrix*` expects with transposition disabled.
#[derive(Debug, Clone, Copy, PartialEq, Deref)]
#[repr(transparent)]
pub struct Matrix<T, const C: usize, const R: usize>(pub [[T; R]; C]);

impl<T, const C: usize, const R: usize> Matrix<T, C, R> {
    pub const fn from_columns(columns: [[T; R]; C]) -> Self {
        Self(columns)
    }

    /// All `C * R` elements, column-major.
    pub fn as_slice(&self) -> &[T] {
        self.0.as_flattened()
    }
}

impl<T: Copy, const C: usize, const R: usize> Matrix<T, C, R> {
    pub fn splat(value: T) -> Self {
        Self([[value; R]; C])
    }

    /// Builds a matrix from `C * R` column-major elements.
    /// Returns `None` when `values` has any other length.
    pub fn from_flat(values: &[T]) -> Option<Self> {
        if values.len() != C * R {
            return None;
        }

        Some(Self(std::array::from_fn(|c| {
            std::array::from_fn(|r| values[c * R + r])
        })))
    }
}

impl<const N: usize> Matrix<f32, N, N> {
    pub fn identity() -> Self {
        Self(std::array::from_fn(|c| {
            std::array::from_fn(|r| if c == r { 1. } else { 0. })
        }))
    }
}

impl<const N: usize> Matrix<f64, N, N> {
    pub fn identity() -> Self {
        Self(std::array::from_fn(|c| {
            std::array::from_fn(|r| if c == r { 1. } else { 0. })
        }))
    }
}

impl<T, const C: usize, const R: usize> From<[[T; R]; C]> for Matrix<T, C, R> {
    fn from(columns: [[T; R]; C]) -> Self {
        Self(columns)
    }
}

pub type Mat2x2 = Matrix<f32, 2, 2>;
pub type Mat2x3 = Matrix<f32, 2, 3>;
pub type Mat2x4 = Matrix<f32, 2, 4>;
pub type Mat3x2 = Matrix<f32, 3, 2>;
pub type Mat3x3 = Matrix<f32, 3, 3>;
pub type Mat3x4 = Matrix<f32, 3, 4>;
pub type Mat4x2 = Matrix<f32, 4, 2>;
pub type Mat4x3 = Matrix<f32, 4, 3>;
pub type Mat4x4 = Matrix<f32, 4, 4>;

pub type DMat2x2 = Matrix<f64, 2, 2>;
pub type DMat2x3 = Matrix<f64, 2, 3>;
pub type DMat2x4 = Matrix<f64, 2, 4>;
pub type DMat3x2 = Matrix<f64, 3, 2>;
pub type DMat3x3 = Matrix<f64, 3, 3>;
pub type DMat3x4 = Matrix<f64, 3, 4>;
pub type DMat4x2 = Matrix<f64, 4, 2>;
pub type DMat4x3 = Matrix<f64, 4, 3>;
pub type DMat4x4 = Matrix<f64, 4, 4>;

pub type Mat2 = Mat2x2;
pub type Mat3 = Mat3x3;
pub type Mat4 = Mat4x4;

pub type DMat2 = DMat2x2;
pub type DMat3 = DMat3x3;
pub type DMat4 = DMat4x4;
