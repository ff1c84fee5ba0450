//! Typed GLSL uniform uploads and texture binding for OpenGL.
//!
//! Values, the dispatcher and the shader contract live in [`glsl_wrapper_hal`];
//! [`gl`] implements the native surface on top of `glow`.

pub use glsl_wrapper_hal::*;

pub mod gl {
    pub use glsl_wrapper_glow::*;
}

pub mod prelude {
    pub use glsl_wrapper_hal::{
        shader::Shader,
        texture::{Texture, TextureTarget},
        uniforms::set_uniform,
        Graphics, UniformLocation, UniformValue,
    };
}
