use image::ImageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdenticonError {
    #[error("digest is too short")]
    MalformedDigest,

    #[error("cell index {0} is outside the canvas")]
    IndexOutOfRange(usize),

    #[error("renderer failure")]
    RenderFailure(#[from] ImageError),
}
