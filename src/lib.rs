//! Batchblast is a batch playblast capture and encode pipeline.
//!
//! The crate drives a live DCC host application through an ordered list of
//! viewport capture jobs and assembles the results into videos. The public
//! API is session-oriented:
//!
//! - Configure [`Job`] descriptors (camera, render layer, resolution, frame
//!   range, output naming, capture and encode flags)
//! - Run them with a [`BatchRunner`] over a [`HostSession`] handle
//! - Each captured image sequence is discovered, ordered and streamed into a
//!   [`VideoSink`] (MP4 via system `ffmpeg` by default)
//!
//! Jobs run strictly sequentially: all viewport and scene state behind the
//! host handle is one global mutable resource, so concurrent jobs would race
//! on it.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Sequential batch execution over a live host session.
pub mod batch;
/// Encoding sinks consuming captured frames in playback order.
pub mod encode;
/// Host application boundary and the scripted in-process double.
pub mod host;
/// Job descriptors, catalog tables and filename templates.
pub mod job;
/// Save/load of configured job lists.
pub mod persist;
/// Captured image sequence discovery and ordering.
pub mod sequence;

pub use crate::foundation::core::{FrameRange, Resolution};
pub use crate::foundation::error::{BlastError, BlastResult};

pub use crate::batch::{BatchOpts, BatchReport, BatchRunner, JobOutcome, JobReport};
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
pub use crate::encode::sink::{FrameImage, InMemorySink, SinkConfig, VideoSink};
pub use crate::host::{CaptureSpec, HostSession, ScriptedHost, TimeUnit};
pub use crate::job::model::{CaptureFormat, FrameRangeMode, Job, Quality};
pub use crate::persist::Document;
pub use crate::sequence::{FrameFile, FrameSequence};
