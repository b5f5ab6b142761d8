use crate::foundation::core::FrameRange;
use crate::foundation::error::{BlastError, BlastResult};
use crate::host::{CaptureSpec, HostSession, TimeUnit};
use crate::job::model::CaptureFormat;
use anyhow::Context as _;
use image::{Rgb, RgbImage};
use std::path::PathBuf;

/// Recorded host state mutation, in call order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostCall {
    /// `set_active_camera`.
    SetCamera(String),
    /// `set_active_render_layer`.
    SetRenderLayer(String),
    /// `set_overscan`.
    SetOverscan {
        /// Target camera.
        camera: String,
        /// Requested overscan state.
        enabled: bool,
    },
}

/// Scriptable in-process [`HostSession`] double.
///
/// State mutations and capture invocations are recorded in call order, and
/// `capture` synthesizes a real numbered JPEG sequence so the discovery and
/// encode stages downstream operate on actual files.
#[derive(Debug)]
pub struct ScriptedHost {
    scene: String,
    cameras: Vec<String>,
    layers: Vec<String>,
    active_camera: String,
    active_layer: String,
    playback: FrameRange,
    unit: TimeUnit,
    project_root: PathBuf,
    pad_width: usize,
    calls: Vec<HostCall>,
    captures: Vec<CaptureSpec>,
}

impl ScriptedHost {
    /// Create a host with a default Maya-like scene setup.
    pub fn new(scene: impl Into<String>) -> Self {
        Self {
            scene: scene.into(),
            cameras: ["persp", "top", "front", "side"]
                .map(str::to_owned)
                .to_vec(),
            layers: vec!["defaultRenderLayer".to_owned()],
            active_camera: "persp".to_owned(),
            active_layer: "defaultRenderLayer".to_owned(),
            playback: FrameRange { start: 1, end: 24 },
            unit: TimeUnit::Film,
            project_root: PathBuf::from("."),
            pad_width: 4,
            calls: Vec::new(),
            captures: Vec::new(),
        }
    }

    /// Set the live playback range.
    pub fn with_playback_range(mut self, range: FrameRange) -> Self {
        self.playback = range;
        self
    }

    /// Set the scene time unit.
    pub fn with_time_unit(mut self, unit: TimeUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Set the zero-pad width of synthesized frame numbers (0 disables
    /// padding).
    pub fn with_pad_width(mut self, pad_width: usize) -> Self {
        self.pad_width = pad_width;
        self
    }

    /// Replace the scene camera list.
    pub fn with_cameras(mut self, cameras: Vec<String>) -> Self {
        self.cameras = cameras;
        self
    }

    /// Replace the scene render layer list.
    pub fn with_render_layers(mut self, layers: Vec<String>) -> Self {
        self.layers = layers;
        self
    }

    /// Set the project root directory.
    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = root.into();
        self
    }

    /// Recorded state mutations, in call order.
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Recorded capture invocations, in call order.
    pub fn captures(&self) -> &[CaptureSpec] {
        &self.captures
    }
}

impl HostSession for ScriptedHost {
    fn scene_name(&self) -> BlastResult<String> {
        Ok(self.scene.clone())
    }

    fn active_camera(&self) -> BlastResult<String> {
        Ok(self.active_camera.clone())
    }

    fn set_active_camera(&mut self, camera: &str) -> BlastResult<()> {
        if !self.cameras.iter().any(|c| c == camera) {
            return Err(BlastError::host(format!("camera '{camera}' not found")));
        }
        self.active_camera = camera.to_owned();
        self.calls.push(HostCall::SetCamera(camera.to_owned()));
        Ok(())
    }

    fn all_cameras(&self) -> BlastResult<Vec<String>> {
        Ok(self.cameras.clone())
    }

    fn render_layers(&self) -> BlastResult<Vec<String>> {
        Ok(self.layers.clone())
    }

    fn active_render_layer(&self) -> BlastResult<String> {
        Ok(self.active_layer.clone())
    }

    fn set_active_render_layer(&mut self, layer: &str) -> BlastResult<()> {
        if !self.layers.iter().any(|l| l == layer) {
            return Err(BlastError::host(format!("render layer '{layer}' not found")));
        }
        self.active_layer = layer.to_owned();
        self.calls.push(HostCall::SetRenderLayer(layer.to_owned()));
        Ok(())
    }

    fn playback_range(&self) -> BlastResult<FrameRange> {
        Ok(self.playback)
    }

    fn frame_rate(&self) -> BlastResult<f64> {
        Ok(self.unit.fps())
    }

    fn set_overscan(&mut self, camera: &str, enabled: bool) -> BlastResult<()> {
        if !self.cameras.iter().any(|c| c == camera) {
            return Err(BlastError::host(format!("camera '{camera}' not found")));
        }
        self.calls.push(HostCall::SetOverscan {
            camera: camera.to_owned(),
            enabled,
        });
        Ok(())
    }

    fn capture(&mut self, spec: &CaptureSpec) -> BlastResult<()> {
        self.captures.push(spec.clone());

        if let Some(parent) = spec.output_stem.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create capture directory '{}'", parent.display())
                })?;
            }
        }

        let stem = spec
            .output_stem
            .to_str()
            .ok_or_else(|| BlastError::host("capture output stem is not valid UTF-8"))?;

        match spec.format {
            CaptureFormat::Image => {
                for frame in spec.range.start..=spec.range.end {
                    let shade = frame.rem_euclid(256) as u8;
                    let img =
                        RgbImage::from_pixel(spec.width, spec.height, Rgb([shade, shade, 128]));
                    let path = format!("{stem}.{frame:0width$}.jpg", width = self.pad_width);
                    img.save(&path)
                        .with_context(|| format!("failed to write frame '{path}'"))?;
                }
            }
            CaptureFormat::Movie => {
                let path = format!("{stem}.mov");
                std::fs::write(&path, b"").with_context(|| format!("failed to write '{path}'"))?;
            }
        }
        Ok(())
    }

    fn project_root(&self) -> BlastResult<PathBuf> {
        Ok(self.project_root.clone())
    }
}
