pub mod bing;
pub mod desktop;
pub mod storage;

pub use bing::{BingClient, ImageInfo};
pub use desktop::WallpaperSetter;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image archive returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("Unexpected archive response: {0}")]
    MalformedResponse(String),
    #[error("Desktop environment error: {0}")]
    DesktopEnv(String),
}

pub type Result<T> = std::result::Result<T, Error>;
