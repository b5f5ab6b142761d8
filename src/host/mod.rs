//! Host application boundary.
//!
//! Everything the batch needs from the live DCC session is expressed through
//! the [`HostSession`] trait, making the single-writer constraint explicit
//! and letting tests substitute a double.

mod scripted;

pub use scripted::{HostCall, ScriptedHost};

use crate::foundation::core::FrameRange;
use crate::foundation::error::BlastResult;
use crate::job::model::CaptureFormat;
use std::path::PathBuf;

/// Named host time unit with its fixed playback rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeUnit {
    /// 15 fps.
    Game,
    /// 24 fps.
    Film,
    /// 25 fps.
    Pal,
    /// 30 fps.
    Ntsc,
    /// 48 fps.
    Show,
    /// 50 fps.
    Palf,
    /// 60 fps.
    Ntscf,
}

impl TimeUnit {
    /// Resolve a host unit name (`"film"`, `"ntsc"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "game" => Some(Self::Game),
            "film" => Some(Self::Film),
            "pal" => Some(Self::Pal),
            "ntsc" => Some(Self::Ntsc),
            "show" => Some(Self::Show),
            "palf" => Some(Self::Palf),
            "ntscf" => Some(Self::Ntscf),
            _ => None,
        }
    }

    /// Host-facing unit name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Game => "game",
            Self::Film => "film",
            Self::Pal => "pal",
            Self::Ntsc => "ntsc",
            Self::Show => "show",
            Self::Palf => "palf",
            Self::Ntscf => "ntscf",
        }
    }

    /// Frames per second for this unit.
    pub fn fps(self) -> f64 {
        match self {
            Self::Game => 15.0,
            Self::Film => 24.0,
            Self::Pal => 25.0,
            Self::Ntsc => 30.0,
            Self::Show => 48.0,
            Self::Palf => 50.0,
            Self::Ntscf => 60.0,
        }
    }
}

/// Parameters for one synchronous host capture call.
#[derive(Clone, Debug, PartialEq)]
pub struct CaptureSpec {
    /// Inclusive frame span to capture.
    pub range: FrameRange,
    /// Absolute output stem; the host appends its own frame numbering and
    /// extension.
    pub output_stem: PathBuf,
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    /// Still-image sequence or host-muxed movie.
    pub format: CaptureFormat,
    /// Render without mapping the viewport on screen.
    pub offscreen: bool,
    /// Keep HUD ornaments visible in the captured frames.
    pub show_ornaments: bool,
}

/// Live host application session.
///
/// All scene and viewport state behind this trait is one global mutable
/// resource with no host-side locking. Hold `&mut` across a whole batch and
/// never interleave two pipelines over the same session.
pub trait HostSession {
    /// Stem of the currently open scene file.
    fn scene_name(&self) -> BlastResult<String>;

    /// Camera shown in the active viewport.
    fn active_camera(&self) -> BlastResult<String>;

    /// Point the active viewport at `camera`.
    fn set_active_camera(&mut self, camera: &str) -> BlastResult<()>;

    /// All camera transforms in the scene, in host order.
    fn all_cameras(&self) -> BlastResult<Vec<String>>;

    /// All render layers in the scene, in host order.
    fn render_layers(&self) -> BlastResult<Vec<String>>;

    /// Currently active render layer.
    fn active_render_layer(&self) -> BlastResult<String>;

    /// Switch the active render layer.
    fn set_active_render_layer(&mut self, layer: &str) -> BlastResult<()>;

    /// Live playback (time slider) range.
    fn playback_range(&self) -> BlastResult<FrameRange>;

    /// Scene frame rate, derived from the named time unit table.
    fn frame_rate(&self) -> BlastResult<f64>;

    /// Toggle overscan display on `camera`.
    fn set_overscan(&mut self, camera: &str, enabled: bool) -> BlastResult<()>;

    /// Synchronously capture `spec.range`, writing one image file per frame
    /// (still-image formats), numbered with `spec.output_stem` as prefix.
    fn capture(&mut self, spec: &CaptureSpec) -> BlastResult<()>;

    /// Project root directory. A file-dialog default for embedders; the batch
    /// runner never reads it.
    fn project_root(&self) -> BlastResult<PathBuf>;
}
