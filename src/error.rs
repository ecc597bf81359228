use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no script named {0:?} is registered")]
    UnknownScript(String),

    #[error("a script named {0:?} is already registered")]
    DuplicateScript(String),

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("invalid color {0:?}, expected #rrggbb[aa] or r,g,b[,a]")]
    InvalidColor(String),

    #[error("recipe error: {0}")]
    Recipe(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("VOX error: {0}")]
    Vox(String),

    #[cfg(feature = "img")]
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
