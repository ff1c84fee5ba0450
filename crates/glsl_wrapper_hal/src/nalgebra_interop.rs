use nalgebra::{SMatrix, SVector, Scalar};

use crate::{Matrix, Vector};

impl<T: Scalar + Copy, const N: usize> From<SVector<T, N>> for Vector<T, N> {
    fn from(v: SVector<T, N>) -> Self {
        Self(std::array::from_fn(|i| v[i]))
    }
}

/// nalgebra stores matrices column-major as well, so the element order is kept.
impl<T: Scalar + Copy, const R: usize, const C: usize> From<SMatrix<T, R, C>> for Matrix<T, C, R> {
    fn from(m: SMatrix<T, R, C>) -> Self {
        Self(std::array::from_fn(|c| std::array::from_fn(|r| m[(r, c)])))
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::{Matrix2x3, Vector3};

    use crate::{Mat3x2, Vec3};

    #[test]
    fn test_vector() {
        let v: Vec3 = Vector3::<f32>::new(1., 2., 3.).into();
        assert_eq!(v.as_slice(), &[1., 2., 3.]);
    }

    #[test]
    fn test_matrix_keeps_column_major_order() {
        // 2 rows, 3 columns in nalgebra terms is a GLSL mat3x2.
        let m: Mat3x2 = Matrix2x3::<f32>::new(1., 2., 3., 4., 5., 6.).into();
        assert_eq!(m.as_slice(), &[1., 4., 2., 5., 3., 6.]);
    }
}
