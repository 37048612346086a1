//! Frame preprocessing and history for vision-based agents.

use std::collections::VecDeque;
use std::path::Path;

use image::{GrayImage, RgbImage};

use crate::error::VisionError;
use crate::resample::{enlarge_area, resize_area, to_gray};

/// Processed frames are this percentage of the rendered size on each axis.
pub const SCALE_PERCENT: u32 = 10;

/// Number of frames kept in the history.
pub const HISTORY_LEN: usize = 2;

/// Byte order of the three color channels in a rendered frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ChannelOrder {
    /// Blue first, the OpenCV convention.
    #[default]
    Bgr,
    Rgb,
}

/// Wrap a raw `height x width x 3` byte buffer as an image.
///
/// # Errors
///
/// [`VisionError::BufferSize`] when the buffer length does not match the
/// dimensions.
pub fn frame_from_raw(width: u32, height: u32, bytes: Vec<u8>) -> Result<RgbImage, VisionError> {
    let expected = width as usize * height as usize * 3;
    let actual = bytes.len();
    RgbImage::from_raw(width, height, bytes).ok_or(VisionError::BufferSize {
        width,
        height,
        expected,
        actual,
    })
}

#[derive(Clone, Debug)]
pub struct FrameHandler {
    frames: VecDeque<GrayImage>,
    capacity: usize,
    scale_percent: u32,
    channel_order: ChannelOrder,
}

impl Default for FrameHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameHandler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            frames: VecDeque::with_capacity(HISTORY_LEN),
            capacity: HISTORY_LEN,
            scale_percent: SCALE_PERCENT,
            channel_order: ChannelOrder::default(),
        }
    }

    /// # Errors
    ///
    /// [`VisionError::ZeroCapacity`] for an empty history.
    pub fn with_capacity(mut self, capacity: usize) -> Result<Self, VisionError> {
        if capacity == 0 {
            return Err(VisionError::ZeroCapacity);
        }
        self.capacity = capacity;
        while self.frames.len() > capacity {
            self.frames.pop_front();
        }
        Ok(self)
    }

    /// # Errors
    ///
    /// [`VisionError::InvalidScale`] unless `percent` is within `1..=100`.
    pub fn with_scale_percent(mut self, percent: u32) -> Result<Self, VisionError> {
        if !(1..=100).contains(&percent) {
            return Err(VisionError::InvalidScale(percent));
        }
        self.scale_percent = percent;
        Ok(self)
    }

    #[must_use]
    pub fn with_channel_order(mut self, order: ChannelOrder) -> Self {
        self.channel_order = order;
        self
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn scale_percent(&self) -> u32 {
        self.scale_percent
    }

    /// Grayscale, then shrink each axis to `scale_percent` of its size
    /// (rounded down) by area averaging.
    ///
    /// # Errors
    ///
    /// [`VisionError::FrameTooSmall`] when either scaled axis would be empty.
    pub fn process_frame(&self, frame: &RgbImage) -> Result<GrayImage, VisionError> {
        let width = scale(frame.width(), self.scale_percent, 100);
        let height = scale(frame.height(), self.scale_percent, 100);
        if width == 0 || height == 0 {
            return Err(VisionError::FrameTooSmall {
                width: frame.width(),
                height: frame.height(),
                percent: self.scale_percent,
            });
        }
        let gray = to_gray(frame, self.channel_order);
        tracing::trace!(width, height, "processed frame");
        Ok(resize_area(&gray, width, height))
    }

    /// Blow a processed frame back up by the inverse scale factor, for display.
    ///
    /// Each pixel becomes a solid block; nothing is interpolated.
    #[must_use]
    pub fn make_back_big(&self, frame: &GrayImage) -> GrayImage {
        let width = scale(frame.width(), 100, self.scale_percent);
        let height = scale(frame.height(), 100, self.scale_percent);
        enlarge_area(frame, width, height)
    }

    /// Push a frame into the history.
    ///
    /// The first frame after a clear fills every slot, so the history is
    /// always full once anything has been added. Later frames evict the
    /// oldest.
    pub fn add_frame(&mut self, frame: GrayImage) {
        if self.frames.is_empty() {
            while self.frames.len() + 1 < self.capacity {
                self.frames.push_back(frame.clone());
            }
        }
        self.frames.push_back(frame);
        while self.frames.len() > self.capacity {
            self.frames.pop_front();
        }
    }

    pub fn clear_frame_list(&mut self) {
        self.frames.clear();
    }

    /// Frames from oldest to newest.
    pub fn frames(&self) -> impl Iterator<Item = &GrayImage> {
        self.frames.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&GrayImage> {
        self.frames.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Write a frame to disk; the format follows the file extension.
///
/// # Errors
///
/// [`VisionError::Image`] when encoding or writing fails.
pub fn save_frame(frame: &GrayImage, path: impl AsRef<Path>) -> Result<(), VisionError> {
    let path = path.as_ref();
    frame.save(path)?;
    tracing::debug!(path = %path.display(), "saved frame");
    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
fn scale(dim: u32, num: u32, den: u32) -> u32 {
    (u64::from(dim) * u64::from(num) / u64::from(den)) as u32
}
