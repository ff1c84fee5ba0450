use glsl_wrapper_hal::texture::{Texture, TextureTarget};
use strum::IntoEnumIterator;

use crate::{Error, Result};

pub trait GlConstant {
    fn gl_const(self) -> u32;
}

/// Reverse of [`GlConstant`] for raw enums handed over by other GL code.
pub trait FromGlConstant: Sized {
    fn from_gl(value: u32) -> Result<Self>;
}

impl GlConstant for TextureTarget {
    fn gl_const(self) -> u32 {
        match self {
            TextureTarget::D1 => glow::TEXTURE_1D,
            TextureTarget::D2 => glow::TEXTURE_2D,
            TextureTarget::D3 => glow::TEXTURE_3D,
            TextureTarget::D1Array => glow::TEXTURE_1D_ARRAY,
            TextureTarget::D2Array => glow::TEXTURE_2D_ARRAY,
            TextureTarget::Rectangle => glow::TEXTURE_RECTANGLE,
            TextureTarget::CubeMap => glow::TEXTURE_CUBE_MAP,
            TextureTarget::CubeMapArray => glow::TEXTURE_CUBE_MAP_ARRAY,
            TextureTarget::Buffer => glow::TEXTURE_BUFFER,
            TextureTarget::D2Multisample => glow::TEXTURE_2D_MULTISAMPLE,
            TextureTarget::D2MultisampleArray => glow::TEXTURE_2D_MULTISAMPLE_ARRAY,
        }
    }
}

impl FromGlConstant for TextureTarget {
    fn from_gl(value: u32) -> Result<Self> {
        TextureTarget::iter()
            .find(|target| target.gl_const() == value)
            .ok_or(Error::UnknownTextureTarget(value))
    }
}

/// Pairs a texture name with a raw `GL_TEXTURE_*` target.
pub fn texture_from_gl(target: u32, id: u32) -> Result<Texture> {
    Ok(Texture::new(TextureTarget::from_gl(target)?, id))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_targets_are_distinct() {
        let constants: HashSet<u32> = TextureTarget::iter().map(GlConstant::gl_const).collect();
        assert_eq!(constants.len(), TextureTarget::iter().count());
        assert!(!constants.contains(&0));
    }

    #[test]
    fn test_known_constants() {
        assert_eq!(TextureTarget::D2.gl_const(), 0x0DE1);
        assert_eq!(TextureTarget::CubeMap.gl_const(), 0x8513);
        assert_eq!(TextureTarget::D2MultisampleArray.gl_const(), 0x9102);
    }

    #[test]
    fn test_from_gl() {
        for target in TextureTarget::iter() {
            assert_eq!(TextureTarget::from_gl(target.gl_const()).unwrap(), target);
        }

        assert!(matches!(
            TextureTarget::from_gl(0),
            Err(Error::UnknownTextureTarget(0))
        ));
        assert!(matches!(
            TextureTarget::from_gl(glow::FRAMEBUFFER),
            Err(Error::UnknownTextureTarget(glow::FRAMEBUFFER))
        ));
    }

    #[test]
    fn test_texture_from_gl() {
        let texture = texture_from_gl(glow::TEXTURE_2D, 42).unwrap();
        assert_eq!(texture, Texture::new(TextureTarget::D2, 42));

        assert!(texture_from_gl(glow::RENDERBUFFER, 42).is_err());
    }
}
