#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Swingup Vision
//!
//! Turns rendered cart-pole frames into small grayscale images for a
//! vision-based agent, and keeps a short history of them.
//!
//! This crate never looks at physics state. It only transforms pixels handed
//! over by whatever renders the environment.

pub mod error;
pub mod frame_handler;
pub mod resample;

pub use error::VisionError;
pub use frame_handler::{
    frame_from_raw, save_frame, ChannelOrder, FrameHandler, HISTORY_LEN,
    SCALE_PERCENT,
};
