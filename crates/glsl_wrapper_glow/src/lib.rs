use std::{num::NonZeroU32, rc::Rc};

use derive_more::Deref;
use glow::HasContext;
use glsl_wrapper_hal::{
    texture::TextureTarget, AttribLocation, Graphics, UniformLocation, WindowBackend,
};
use smart_default::SmartDefault;

pub use constants::{texture_from_gl, FromGlConstant, GlConstant};
pub use context::GlContext;
pub use error::{Error, Result};
pub use extended::ExtendedFunctions;

mod constants;
mod context;
mod error;
mod extended;

#[derive(Deref)]
pub struct Gl<B: WindowBackend>(pub Rc<GlContext<B>>);

#[derive(SmartDefault, Clone, Debug)]
pub struct GlSettings {
    /// If true, double precision uniform entry points and non-square float
    /// matrix entry points are resolved when the context is created.
    ///
    /// GLES contexts don't expose them, and looking them up only produces
    /// warnings there.
    #[default(true)]
    pub load_extended_functions: bool,
}

impl<B: WindowBackend> Gl<B> {
    /// # Safety
    ///
    /// See [`GlContext::new`].
    pub unsafe fn new(backend: B) -> Self {
        Self::new_with_settings(backend, Default::default())
    }

    /// # Safety
    ///
    /// See [`GlContext::new`].
    pub unsafe fn new_with_settings(backend: B, settings: GlSettings) -> Self {
        Self(Rc::new(GlContext::new(backend, settings)))
    }

    /// Looks up a uniform of a linked program, [`UniformLocation::NOT_FOUND`]
    /// if the program has no active uniform called `name`.
    pub fn uniform_location(&self, program: glow::Program, name: &str) -> UniformLocation {
        let location = unsafe { self.gl.get_uniform_location(program, name) };
        location.map_or(UniformLocation::NOT_FOUND, |l| UniformLocation(l.0 as i32))
    }

    pub fn attrib_location(&self, program: glow::Program, name: &str) -> AttribLocation {
        let location = unsafe { self.gl.get_attrib_location(program, name) };
        location.map_or(AttribLocation::NOT_FOUND, |l| AttribLocation(l as i32))
    }

    pub fn use_program(&self, program: Option<glow::Program>) {
        unsafe { self.gl.use_program(program) };
    }
}

impl<B: WindowBackend> Clone for Gl<B> {
    fn clone(&self) -> Self {
        Gl(self.0.clone())
    }
}

fn native(location: UniformLocation) -> glow::NativeUniformLocation {
    glow::NativeUniformLocation(location.0 as u32)
}

impl<B: WindowBackend> Graphics for Gl<B> {
    fn uniform_1_f32(&self, location: UniformLocation, x: f32) {
        unsafe { self.gl.uniform_1_f32(Some(&native(location)), x) };
    }

    fn uniform_1_f64(&self, location: UniformLocation, x: f64) {
        self.extended.uniform_1_f64(location, x);
    }

    fn uniform_1_u32(&self, location: UniformLocation, x: u32) {
        unsafe { self.gl.uniform_1_u32(Some(&native(location)), x) };
    }

    fn uniform_1_i32(&self, location: UniformLocation, x: i32) {
        unsafe { self.gl.uniform_1_i32(Some(&native(location)), x) };
    }

    fn uniform_2_f32_slice(&self, location: UniformLocation, v: &[f32]) {
        unsafe { self.gl.uniform_2_f32_slice(Some(&native(location)), v) };
    }

    fn uniform_3_f32_slice(&self, location: UniformLocation, v: &[f32]) {
        unsafe { self.gl.uniform_3_f32_slice(Some(&native(location)), v) };
    }

    fn uniform_4_f32_slice(&self, location: UniformLocation, v: &[f32]) {
        unsafe { self.gl.uniform_4_f32_slice(Some(&native(location)), v) };
    }

    fn uniform_2_f64_slice(&self, location: UniformLocation, v: &[f64]) {
        self.extended.uniform_2_f64_slice(location, v);
    }

    fn uniform_3_f64_slice(&self, location: UniformLocation, v: &[f64]) {
        self.extended.uniform_3_f64_slice(location, v);
    }

    fn uniform_4_f64_slice(&self, location: UniformLocation, v: &[f64]) {
        self.extended.uniform_4_f64_slice(location, v);
    }

    fn uniform_2_u32_slice(&self, location: UniformLocation, v: &[u32]) {
        unsafe { self.gl.uniform_2_u32_slice(Some(&native(location)), v) };
    }

    fn uniform_3_u32_slice(&self, location: UniformLocation, v: &[u32]) {
        unsafe { self.gl.uniform_3_u32_slice(Some(&native(location)), v) };
    }

    fn uniform_4_u32_slice(&self, location: UniformLocation, v: &[u32]) {
        unsafe { self.gl.uniform_4_u32_slice(Some(&native(location)), v) };
    }

    fn uniform_2_i32_slice(&self, location: UniformLocation, v: &[i32]) {
        unsafe { self.gl.uniform_2_i32_slice(Some(&native(location)), v) };
    }

    fn uniform_3_i32_slice(&self, location: UniformLocation, v: &[i32]) {
        unsafe { self.gl.uniform_3_i32_slice(Some(&native(location)), v) };
    }

    fn uniform_4_i32_slice(&self, location: UniformLocation, v: &[i32]) {
        unsafe { self.gl.uniform_4_i32_slice(Some(&native(location)), v) };
    }

    fn uniform_matrix_2_f32_slice(&self, location: UniformLocation, transpose: bool, v: &[f32]) {
        let location = native(location);
        unsafe { self.gl.uniform_matrix_2_f32_slice(Some(&location), transpose, v) };
    }

    fn uniform_matrix_3_f32_slice(&self, location: UniformLocation, transpose: bool, v: &[f32]) {
        let location = native(location);
        unsafe { self.gl.uniform_matrix_3_f32_slice(Some(&location), transpose, v) };
    }

    fn uniform_matrix_4_f32_slice(&self, location: UniformLocation, transpose: bool, v: &[f32]) {
        let location = native(location);
        unsafe { self.gl.uniform_matrix_4_f32_slice(Some(&location), transpose, v) };
    }

    fn uniform_matrix_2x3_f32_slice(&self, location: UniformLocation, transpose: bool, v: &[f32]) {
        self.extended.uniform_matrix_2x3_f32_slice(location, transpose, v);
    }

    fn uniform_matrix_2x4_f32_slice(&self, location: UniformLocation, transpose: bool, v: &[f32]) {
        self.extended.uniform_matrix_2x4_f32_slice(location, transpose, v);
    }

    fn uniform_matrix_3x2_f32_slice(&self, location: UniformLocation, transpose: bool, v: &[f32]) {
        self.extended.uniform_matrix_3x2_f32_slice(location, transpose, v);
    }

    fn uniform_matrix_3x4_f32_slice(&self, location: UniformLocation, transpose: bool, v: &[f32]) {
        self.extended.uniform_matrix_3x4_f32_slice(location, transpose, v);
    }

    fn uniform_matrix_4x2_f32_slice(&self, location: UniformLocation, transpose: bool, v: &[f32]) {
        self.extended.uniform_matrix_4x2_f32_slice(location, transpose, v);
    }

    fn uniform_matrix_4x3_f32_slice(&self, location: UniformLocation, transpose: bool, v: &[f32]) {
        self.extended.uniform_matrix_4x3_f32_slice(location, transpose, v);
    }

    fn uniform_matrix_2_f64_slice(&self, location: UniformLocation, transpose: bool, v: &[f64]) {
        self.extended.uniform_matrix_2_f64_slice(location, transpose, v);
    }

    fn uniform_matrix_3_f64_slice(&self, location: UniformLocation, transpose: bool, v: &[f64]) {
        self.extended.uniform_matrix_3_f64_slice(location, transpose, v);
    }

    fn uniform_matrix_4_f64_slice(&self, location: UniformLocation, transpose: bool, v: &[f64]) {
        self.extended.uniform_matrix_4_f64_slice(location, transpose, v);
    }

    fn uniform_matrix_2x3_f64_slice(&self, location: UniformLocation, transpose: bool, v: &[f64]) {
        self.extended.uniform_matrix_2x3_f64_slice(location, transpose, v);
    }

    fn uniform_matrix_2x4_f64_slice(&self, location: UniformLocation, transpose: bool, v: &[f64]) {
        self.extended.uniform_matrix_2x4_f64_slice(location, transpose, v);
    }

    fn uniform_matrix_3x2_f64_slice(&self, location: UniformLocation, transpose: bool, v: &[f64]) {
        self.extended.uniform_matrix_3x2_f64_slice(location, transpose, v);
    }

    fn uniform_matrix_3x4_f64_slice(&self, location: UniformLocation, transpose: bool, v: &[f64]) {
        self.extended.uniform_matrix_3x4_f64_slice(location, transpose, v);
    }

    fn uniform_matrix_4x2_f64_slice(&self, location: UniformLocation, transpose: bool, v: &[f64]) {
        self.extended.uniform_matrix_4x2_f64_slice(location, transpose, v);
    }

    fn uniform_matrix_4x3_f64_slice(&self, location: UniformLocation, transpose: bool, v: &[f64]) {
        self.extended.uniform_matrix_4x3_f64_slice(location, transpose, v);
    }

    fn bind_texture(&self, target: TextureTarget, texture: u32) {
        let texture = NonZeroU32::new(texture).map(glow::NativeTexture);
        unsafe { self.gl.bind_texture(target.gl_const(), texture) };
    }
}
