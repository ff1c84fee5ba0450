#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0:#x} is not a texture target")]
    UnknownTextureTarget(u32),
    #[error("{0} is not exposed by the current GL context")]
    MissingFunction(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
