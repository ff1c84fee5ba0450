use derive_more::From;

use crate::{matrix::*, vector::*};

/// Every value that can be uploaded to a uniform.
///
/// The set is closed: a Rust type without a conversion into this enum can't be
/// passed to [`crate::uniforms::set_uniform`].
#[derive(Debug, Clone, Copy, PartialEq, From)]
pub enum UniformValue {
    Float(f32),
    Double(f64),
    Uint(u32),
    Int(i32),
    Bool(bool),

    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    DVec2(DVec2),
    DVec3(DVec3),
    DVec4(DVec4),
    UVec2(UVec2),
    UVec3(UVec3),
    UVec4(UVec4),
    IVec2(IVec2),
    IVec3(IVec3),
    IVec4(IVec4),
    BVec2(BVec2),
    BVec3(BVec3),
    BVec4(BVec4),

    Mat2(Mat2),
    Mat2x3(Mat2x3),
    Mat2x4(Mat2x4),
    Mat3x2(Mat3x2),
    Mat3(Mat3),
    Mat3x4(Mat3x4),
    Mat4x2(Mat4x2),
    Mat4x3(Mat4x3),
    Mat4(Mat4),

    DMat2(DMat2),
    DMat2x3(DMat2x3),
    DMat2x4(DMat2x4),
    DMat3x2(DMat3x2),
    DMat3(DMat3),
    DMat3x4(DMat3x4),
    DMat4x2(DMat4x2),
    DMat4x3(DMat4x3),
    DMat4(DMat4),
}

impl UniformValue {
    /// The GLSL type this value is uploaded as.
    pub fn glsl_type(&self) -> &'static str {
        match self {
            UniformValue::Float(_) => "float",
            UniformValue::Double(_) => "double",
            UniformValue::Uint(_) => "uint",
            UniformValue::Int(_) => "int",
            UniformValue::Bool(_) => "bool",
            UniformValue::Vec2(_) => "vec2",
            UniformValue::Vec3(_) => "vec3",
            UniformValue::Vec4(_) => "vec4",
            UniformValue::DVec2(_) => "dvec2",
            UniformValue::DVec3(_) => "dvec3",
            UniformValue::DVec4(_) => "dvec4",
            UniformValue::UVec2(_) => "uvec2",
            UniformValue::UVec3(_) => "uvec3",
            UniformValue::UVec4(_) => "uvec4",
            UniformValue::IVec2(_) => "ivec2",
            UniformValue::IVec3(_) => "ivec3",
            UniformValue::IVec4(_) => "ivec4",
            UniformValue::BVec2(_) => "bvec2",
            UniformValue::BVec3(_) => "bvec3",
            UniformValue::BVec4(_) => "bvec4",
            UniformValue::Mat2(_) => "mat2",
            UniformValue::Mat2x3(_) => "mat2x3",
            UniformValue::Mat2x4(_) => "mat2x4",
            UniformValue::Mat3x2(_) => "mat3x2",
            UniformValue::Mat3(_) => "mat3",
            UniformValue::Mat3x4(_) => "mat3x4",
            UniformValue::Mat4x2(_) => "mat4x2",
            UniformValue::Mat4x3(_) => "mat4x3",
            UniformValue::Mat4(_) => "mat4",
            UniformValue::DMat2(_) => "dmat2",
            UniformValue::DMat2x3(_) => "dmat2x3",
            UniformValue::DMat2x4(_) => "dmat2x4",
            UniformValue::DMat3x2(_) => "dmat3x2",
            UniformValue::DMat3(_) => "dmat3",
            UniformValue::DMat3x4(_) => "dmat3x4",
            UniformValue::DMat4x2(_) => "dmat4x2",
            UniformValue::DMat4x3(_) => "dmat4x3",
            UniformValue::DMat4(_) => "dmat4",
        }
    }
}
