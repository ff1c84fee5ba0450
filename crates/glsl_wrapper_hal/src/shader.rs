use crate::{uniforms, AttribLocation, Graphics, Mat4, UniformLocation, UniformValue};

/// Name of the model-view-projection uniform set by [`Shader::set_mvp`].
pub const MVP_UNIFORM_NAME: &str = "MVP";

/// A linked shader program.
///
/// Compiling, linking and reporting errors are left to the implementation;
/// uniform uploads go through [`uniforms::upload`] with the locations the
/// implementation resolves.
pub trait Shader {
    type Graphics: Graphics + ?Sized;
    type Error;

    fn graphics(&self) -> &Self::Graphics;

    /// Makes the program current and initializes its state.
    fn use_shader(&self);

    /// Pushes additional uniforms once the program is in use.
    fn pass_uniforms(&self) {}

    fn program_id(&self) -> u32;

    fn uniform_location(&self, name: &str) -> UniformLocation;
    fn attrib_location(&self, name: &str) -> AttribLocation;

    fn compile(&mut self) -> Result<(), Self::Error>;
    fn recompile(&mut self) -> Result<(), Self::Error>;

    /// Uploads `value` to the uniform called `name`.
    /// Names the program doesn't have are skipped.
    fn set_uniform<V: Into<UniformValue>>(&self, name: &str, value: V) {
        let location = self.uniform_location(name);
        if !location.is_found() {
            log::debug!(
                "uniform `{name}` is not active in program {}, skipping",
                self.program_id()
            );
            return;
        }

        uniforms::upload(self.graphics(), location, &value.into());
    }

    fn set_mvp(&self, matrix: Mat4) {
        self.set_uniform(MVP_UNIFORM_NAME, matrix);
    }
}
