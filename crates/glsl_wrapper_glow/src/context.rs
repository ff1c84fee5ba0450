use glsl_wrapper_hal::WindowBackend;

use crate::{extended::ExtendedFunctions, GlSettings, Result};

pub struct GlContext<B: WindowBackend> {
    pub gl: glow::Context,
    pub backend: B,
    pub extended: ExtendedFunctions,
    pub settings: GlSettings,
}

impl<B: WindowBackend> GlContext<B> {
    /// # Safety
    ///
    /// The GL context owned by `backend` must be current on this thread, and
    /// stay current whenever the returned context is used.
    pub unsafe fn new(backend: B, settings: GlSettings) -> Self {
        let gl = glow::Context::from_loader_function(|s| backend.get_proc_address(s));

        let extended = match settings.load_extended_functions {
            true => ExtendedFunctions::load(|s| backend.get_proc_address(s)),
            false => ExtendedFunctions::default(),
        };

        Self {
            gl,
            backend,
            extended,
            settings,
        }
    }

    /// Checks that an entry point outside of `glow`'s surface, such as
    /// `glUniformMatrix4dv`, was resolved when the context was created.
    pub fn require_extended(&self, symbol: &'static str) -> Result<()> {
        self.extended.require(symbol)
    }
}
