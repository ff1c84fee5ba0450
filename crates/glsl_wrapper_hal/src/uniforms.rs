use crate::{Graphics, UniformLocation, UniformValue};

/// Matrices are always uploaded as stored, see [`crate::Matrix`].
const TRANSPOSE: bool = false;

/// Uploads `value` to the uniform at `location` of the program currently in use.
///
/// Does nothing when `location` is [`UniformLocation::NOT_FOUND`].
pub fn set_uniform<G, V>(gl: &G, location: UniformLocation, value: V)
where
    G: Graphics + ?Sized,
    V: Into<UniformValue>,
{
    let value = value.into();

    if !location.is_found() {
        log::debug!(
            "skipping {} uniform upload, location not found",
            value.glsl_type()
        );
        return;
    }

    upload(gl, location, &value);
}

/// Issues the one native upload call matching the shape of `value`.
/// The location is passed through without checking it.
pub fn upload<G: Graphics + ?Sized>(gl: &G, location: UniformLocation, value: &UniformValue) {
    match value {
        UniformValue::Float(x) => gl.uniform_1_f32(location, *x),
        UniformValue::Double(x) => gl.uniform_1_f64(location, *x),
        UniformValue::Uint(x) => gl.uniform_1_u32(location, *x),
        UniformValue::Int(x) => gl.uniform_1_i32(location, *x),
        UniformValue::Bool(x) => gl.uniform_1_i32(location, i32::from(*x)),

        UniformValue::Vec2(v) => gl.uniform_2_f32_slice(location, v.as_slice()),
        UniformValue::Vec3(v) => gl.uniform_3_f32_slice(location, v.as_slice()),
        UniformValue::Vec4(v) => gl.uniform_4_f32_slice(location, v.as_slice()),
        UniformValue::DVec2(v) => gl.uniform_2_f64_slice(location, v.as_slice()),
        UniformValue::DVec3(v) => gl.uniform_3_f64_slice(location, v.as_slice()),
        UniformValue::DVec4(v) => gl.uniform_4_f64_slice(location, v.as_slice()),
        UniformValue::UVec2(v) => gl.uniform_2_u32_slice(location, v.as_slice()),
        UniformValue::UVec3(v) => gl.uniform_3_u32_slice(location, v.as_slice()),
        UniformValue::UVec4(v) => gl.uniform_4_u32_slice(location, v.as_slice()),
        UniformValue::IVec2(v) => gl.uniform_2_i32_slice(location, v.as_slice()),
        UniformValue::IVec3(v) => gl.uniform_3_i32_slice(location, v.as_slice()),
        UniformValue::IVec4(v) => gl.uniform_4_i32_slice(location, v.as_slice()),
        UniformValue::BVec2(v) => gl.uniform_2_i32_slice(location, v.to_ivec().as_slice()),
        UniformValue::BVec3(v) => gl.uniform_3_i32_slice(location, v.to_ivec().as_slice()),
        UniformValue::BVec4(v) => gl.uniform_4_i32_slice(location, v.to_ivec().as_slice()),

        UniformValue::Mat2(m) => gl.uniform_matrix_2_f32_slice(location, TRANSPOSE, m.as_slice()),
        UniformValue::Mat2x3(m) => {
            gl.uniform_matrix_2x3_f32_slice(location, TRANSPOSE, m.as_slice())
        }
        UniformValue::Mat2x4(m) => {
            gl.uniform_matrix_2x4_f32_slice(location, TRANSPOSE, m.as_slice())
        }
        UniformValue::Mat3x2(m) => {
            gl.uniform_matrix_3x2_f32_slice(location, TRANSPOSE, m.as_slice())
        }
        UniformValue::Mat3(m) => gl.uniform_matrix_3_f32_slice(location, TRANSPOSE, m.as_slice()),
        UniformValue::Mat3x4(m) => {
            gl.uniform_matrix_3x4_f32_slice(location, TRANSPOSE, m.as_slice())
        }
        UniformValue::Mat4x2(m) => {
            gl.uniform_matrix_4x2_f32_slice(location, TRANSPOSE, m.as_slice())
        }
        UniformValue::Mat4x3(m) => {
            gl.uniform_matrix_4x3_f32_slice(location, TRANSPOSE, m.as_slice())
        }
        UniformValue::Mat4(m) => gl.uniform_matrix_4_f32_slice(location, TRANSPOSE, m.as_slice()),

        UniformValue::DMat2(m) => {
            gl.uniform_matrix_2_f64_slice(location, TRANSPOSE, m.as_slice())
        }
        UniformValue::DMat2x3(m) => {
            gl.uniform_matrix_2x3_f64_slice(location, TRANSPOSE, m.as_slice())
        }
        UniformValue::DMat2x4(m) => {
            gl.uniform_matrix_2x4_f64_slice(location, TRANSPOSE, m.as_slice())
        }
        UniformValue::DMat3x2(m) => {
            gl.uniform_matrix_3x2_f64_slice(location, TRANSPOSE, m.as_slice())
        }
        UniformValue::DMat3(m) => {
            gl.uniform_matrix_3_f64_slice(location, TRANSPOSE, m.as_slice())
        }
        UniformValue::DMat3x4(m) => {
            gl.uniform_matrix_3x4_f64_slice(location, TRANSPOSE, m.as_slice())
        }
        UniformValue::DMat4x2(m) => {
            gl.uniform_matrix_4x2_f64_slice(location, TRANSPOSE, m.as_slice())
        }
        UniformValue::DMat4x3(m) => {
            gl.uniform_matrix_4x3_f64_slice(location, TRANSPOSE, m.as_slice())
        }
        UniformValue::DMat4(m) => {
            gl.uniform_matrix_4_f64_slice(location, TRANSPOSE, m.as_slice())
        }
    }
}
