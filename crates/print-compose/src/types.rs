use print_layout::LayoutError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

pub type Result<T> = std::result::Result<T, ComposeError>;
