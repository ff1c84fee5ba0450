use std::ffi::c_void;

use texture::TextureTarget;

pub use location::{AttribLocation, UniformLocation};
pub use matrix::*;
pub use value::UniformValue;
pub use vector::*;

pub mod location;
pub mod matrix;
pub mod shader;
pub mod texture;
pub mod uniforms;
pub mod value;
pub mod vector;

#[cfg(feature = "nalgebra")]
mod nalgebra_interop;

#[cfg(test)]
pub(crate) mod recording;

pub trait WindowBackend
where
    Self: 'static,
{
    /// Resolves a GL entry point by name in the context owned by the window.
    /// Returns a null pointer when the entry point is not exposed.
    fn get_proc_address(&self, symbol: &str) -> *const c_void;
}

impl<F> WindowBackend for F
where
    F: Fn(&str) -> *const c_void + 'static,
{
    fn get_proc_address(&self, symbol: &str) -> *const c_void {
        self(symbol)
    }
}

/// The native uniform upload and texture binding surface of a GL context.
///
/// There is one method per native entry point, so every value shape maps to
/// exactly one call. Vector and matrix methods take the flattened components;
/// the number of uploaded elements is `v.len()` divided by the shape size.
pub trait Graphics {
    fn uniform_1_f32(&self, location: UniformLocation, x: f32);
    fn uniform_1_f64(&self, location: UniformLocation, x: f64);
    fn uniform_1_u32(&self, location: UniformLocation, x: u32);
    fn uniform_1_i32(&self, location: UniformLocation, x: i32);

    fn uniform_2_f32_slice(&self, location: UniformLocation, v: &[f32]);
    fn uniform_3_f32_slice(&self, location: UniformLocation, v: &[f32]);
    fn uniform_4_f32_slice(&self, location: UniformLocation, v: &[f32]);
    fn uniform_2_f64_slice(&self, location: UniformLocation, v: &[f64]);
    fn uniform_3_f64_slice(&self, location: UniformLocation, v: &[f64]);
    fn uniform_4_f64_slice(&self, location: UniformLocation, v: &[f64]);
    fn uniform_2_u32_slice(&self, location: UniformLocation, v: &[u32]);
    fn uniform_3_u32_slice(&self, location: UniformLocation, v: &[u32]);
    fn uniform_4_u32_slice(&self, location: UniformLocation, v: &[u32]);
    fn uniform_2_i32_slice(&self, location: UniformLocation, v: &[i32]);
    fn uniform_3_i32_slice(&self, location: UniformLocation, v: &[i32]);
    fn uniform_4_i32_slice(&self, location: UniformLocation, v: &[i32]);

    fn uniform_matrix_2_f32_slice(&self, location: UniformLocation, transpose: bool, v: &[f32]);
    fn uniform_matrix_3_f32_slice(&self, location: UniformLocation, transpose: bool, v: &[f32]);
    fn uniform_matrix_4_f32_slice(&self, location: UniformLocation, transpose: bool, v: &[f32]);
    fn uniform_matrix_2x3_f32_slice(&self, location: UniformLocation, transpose: bool, v: &[f32]);
    fn uniform_matrix_2x4_f32_slice(&self, location: UniformLocation, transpose: bool, v: &[f32]);
    fn uniform_matrix_3x2_f32_slice(&self, location: UniformLocation, transpose: bool, v: &[f32]);
    fn uniform_matrix_3x4_f32_slice(&self, location: UniformLocation, transpose: bool, v: &[f32]);
    fn uniform_matrix_4x2_f32_slice(&self, location: UniformLocation, transpose: bool, v: &[f32]);
    fn uniform_matrix_4x3_f32_slice(&self, location: UniformLocation, transpose: bool, v: &[f32]);

    fn uniform_matrix_2_f64_slice(&self, location: UniformLocation, transpose: bool, v: &[f64]);
    fn uniform_matrix_3_f64_slice(&self, location: UniformLocation, transpose: bool, v: &[f64]);
    fn uniform_matrix_4_f64_slice(&self, location: UniformLocation, transpose: bool, v: &[f64]);
    fn uniform_matrix_2x3_f64_slice(&self, location: UniformLocation, transpose: bool, v: &[f64]);
    fn uniform_matrix_2x4_f64_slice(&self, location: UniformLocation, transpose: bool, v: &[f64]);
    fn uniform_matrix_3x2_f64_slice(&self, location: UniformLocation, transpose: bool, v: &[f64]);
    fn uniform_matrix_3x4_f64_slice(&self, location: UniformLocation, transpose: bool, v: &[f64]);
    fn uniform_matrix_4x2_f64_slice(&self, location: UniformLocation, transpose: bool, v: &[f64]);
    fn uniform_matrix_4x3_f64_slice(&self, location: UniformLocation, transpose: bool, v: &[f64]);

    /// Binds `texture` to `target` on the active texture unit.
    fn bind_texture(&self, target: TextureTarget, texture: u32);
}
