//! Encoding sinks.
//!
//! Sinks consume the frames of one captured sequence in playback order and
//! are driven by `BatchRunner` during the encode stage.

/// `ffmpeg`-based sink (MP4 output via system `ffmpeg`).
pub mod ffmpeg;
/// Generic video sink trait and built-in sinks.
pub mod sink;
