use crate::foundation::core::FrameRange;
use crate::foundation::error::{BlastError, BlastResult};
use crate::host::HostSession;
use crate::job::{catalog, template};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Frame-range selection mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameRangeMode {
    /// Resolve against the host's live playback range at render time. The
    /// stored start/end frames are advisory and may be stale.
    #[default]
    #[serde(rename = "Time Slider")]
    TimeSlider,
    /// Use the explicit start/end frames stored on the job.
    Custom,
}

/// Host capture output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureFormat {
    /// One still image per frame; the batch encodes the sequence afterwards.
    #[default]
    Image,
    /// The host muxes a movie container itself; nothing to assemble.
    Movie,
}

/// User-facing quality preset.
///
/// Each preset maps to a fixed encoder codec identifier; the mapping is part
/// of the read-only job catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quality {
    /// Maps to the `mp4v` codec.
    #[default]
    High,
    /// Maps to the `X264` codec.
    Medium,
}

impl Quality {
    /// Codec identifier from the fixed quality table.
    pub fn codec_id(self) -> &'static str {
        match self {
            Quality::High => "mp4v",
            Quality::Medium => "X264",
        }
    }
}

/// Everything needed to produce one capture, as a plain value.
///
/// A job never mutates host state by itself; the batch runner performs all
/// host interaction using the descriptor as parameters. Camera and render
/// layer are references into host state, resolved at render time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Stable identity, used for default naming only.
    pub id: u32,
    /// User-facing label, independent of `id`.
    pub name: String,
    /// Camera to capture through.
    pub camera: String,
    /// Render layer to activate for the capture.
    pub render_layer: String,
    /// How the captured frame span is resolved.
    pub frame_range_mode: FrameRangeMode,
    /// Explicit range start, used only in [`FrameRangeMode::Custom`].
    pub start_frame: i32,
    /// Explicit range end, used only in [`FrameRangeMode::Custom`].
    pub end_frame: i32,
    /// Resolution preset name from the catalog, or `"Custom"`.
    pub resolution: String,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Filename template; may contain `<Scene>`, `<Camera>` and `<Layer>`.
    pub filename_template: String,
    /// Directory the evaluated template is joined onto.
    pub output_dir: PathBuf,
    /// Resolved output stem (`output_dir` + evaluated template), recomputed
    /// whenever an evaluation input changes.
    pub output_path: PathBuf,
    /// Still-image sequence or host-muxed movie.
    pub format: CaptureFormat,
    /// Keep on-screen HUD ornaments visible in the capture.
    pub show_ornaments: bool,
    /// Render without mapping the viewport on screen.
    pub offscreen: bool,
    /// Show camera overscan border during the capture.
    pub overscan: bool,
    /// Quality preset selecting the encode codec.
    pub quality: Quality,
    /// Delete the captured source images once the video is finalized.
    pub delete_images: bool,
}

impl Job {
    /// Create a job with the panel defaults.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            name: format!("Playblast {id}"),
            camera: "persp".to_owned(),
            render_layer: "defaultRenderLayer".to_owned(),
            frame_range_mode: FrameRangeMode::TimeSlider,
            start_frame: 0,
            end_frame: 0,
            resolution: "HD_1080".to_owned(),
            width: 1920,
            height: 1080,
            filename_template: "<Scene>/<Scene>_<Camera>".to_owned(),
            output_dir: PathBuf::new(),
            output_path: PathBuf::new(),
            format: CaptureFormat::Image,
            show_ornaments: false,
            offscreen: false,
            overscan: false,
            quality: Quality::High,
            delete_images: false,
        }
    }

    /// Field-for-field value copy under a new identity.
    ///
    /// All fields are value types, so the clone shares no mutable state with
    /// the source.
    pub fn clone_with_id(&self, id: u32) -> Self {
        let mut job = self.clone();
        job.id = id;
        job
    }

    /// Select a catalog preset by name, adopting its dimensions.
    ///
    /// Selecting `"Custom"` keeps the current width/height.
    pub fn set_resolution_preset(&mut self, name: &str) -> BlastResult<()> {
        let preset = catalog::resolution_by_name(name)
            .ok_or_else(|| BlastError::config(format!("unknown resolution preset '{name}'")))?;
        self.resolution = preset.name.to_owned();
        if preset.name != catalog::CUSTOM_RESOLUTION {
            self.width = preset.width;
            self.height = preset.height;
        }
        Ok(())
    }

    /// Set explicit dimensions, auto-selecting the matching preset name.
    ///
    /// Dimensions that match no catalog entry select `"Custom"`.
    pub fn set_resolution_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.resolution = match catalog::resolution_by_size(width, height) {
            Some(preset) => preset.name.to_owned(),
            None => catalog::CUSTOM_RESOLUTION.to_owned(),
        };
    }

    /// Validate the descriptor invariants.
    ///
    /// Checks that the resolution name resolves in the catalog and agrees
    /// with the stored dimensions, that dimensions are non-zero, that a
    /// custom frame range is not inverted, and that the filename template is
    /// non-empty.
    pub fn validate(&self) -> BlastResult<()> {
        match catalog::resolution_by_name(&self.resolution) {
            None => {
                return Err(BlastError::config(format!(
                    "unknown resolution preset '{}'",
                    self.resolution
                )));
            }
            Some(preset) if preset.name != catalog::CUSTOM_RESOLUTION => {
                if preset.width != self.width || preset.height != self.height {
                    return Err(BlastError::config(format!(
                        "resolution '{}' expects {}x{}, job has {}x{}",
                        preset.name, preset.width, preset.height, self.width, self.height
                    )));
                }
            }
            Some(_) => {}
        }
        if self.width == 0 || self.height == 0 {
            return Err(BlastError::config("width/height must be non-zero"));
        }
        if self.frame_range_mode == FrameRangeMode::Custom && self.start_frame > self.end_frame {
            return Err(BlastError::config(format!(
                "custom frame range {}..{} is inverted",
                self.start_frame, self.end_frame
            )));
        }
        if self.filename_template.is_empty() {
            return Err(BlastError::config("filename template is empty"));
        }
        Ok(())
    }

    /// Resolve the frame span this job captures.
    ///
    /// Time-slider mode queries the host's live playback range; custom mode
    /// returns the stored bounds regardless of host state.
    pub fn resolved_frame_range(&self, host: &dyn HostSession) -> BlastResult<FrameRange> {
        match self.frame_range_mode {
            FrameRangeMode::TimeSlider => host.playback_range(),
            FrameRangeMode::Custom => FrameRange::new(self.start_frame, self.end_frame),
        }
    }

    /// Compute the output stem for `scene` without storing it.
    pub fn resolve_output_path(&self, scene: &str) -> PathBuf {
        let rel = template::evaluate(&self.filename_template, scene, &self.camera, &self.render_layer);
        self.output_dir.join(rel)
    }

    /// Recompute and store [`Job::output_path`] for `scene`.
    pub fn refresh_output_path(&mut self, scene: &str) {
        self.output_path = self.resolve_output_path(scene);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/job/model.rs"]
mod tests;
