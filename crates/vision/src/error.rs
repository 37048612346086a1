use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisionError {
    #[error("frame buffer holds {actual} bytes, expected {expected} for a {width}x{height}x3 image")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("{width}x{height} frame is too small to downsample to {percent}%")]
    FrameTooSmall { width: u32, height: u32, percent: u32 },
    #[error("scale percent must be within 1..=100, got {0}")]
    InvalidScale(u32),
    #[error("frame history capacity must be at least 1")]
    ZeroCapacity,
    #[error(transparent)]
    Image(#[from] image::ImageError),
}
