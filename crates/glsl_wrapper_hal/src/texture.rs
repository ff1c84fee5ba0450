use derive_more::Constructor;
use strum::{EnumCount, EnumIter};

use crate::Graphics;

/// The dimensional and sampling category of a texture, which selects the
/// native bind target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum TextureTarget {
    D1,
    D2,
    D3,
    D1Array,
    D2Array,
    Rectangle,
    CubeMap,
    CubeMapArray,
    Buffer,
    D2Multisample,
    D2MultisampleArray,
}

/// A texture object owned by the GL context. The id only has meaning
/// together with the target it was created for.
#[derive(Constructor, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Texture {
    pub target: TextureTarget,
    pub id: u32,
}

impl Texture {
    pub fn bind<G: Graphics + ?Sized>(&self, gl: &G) {
        log::trace!("binding texture {} to {:?}", self.id, self.target);
        gl.bind_texture(self.target, self.id);
    }
}
