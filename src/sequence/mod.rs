//! Captured image sequence discovery and ordering.

use crate::foundation::error::BlastResult;
use anyhow::Context as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Still-image extension the host writes and discovery matches.
pub const FRAME_EXTENSION: &str = "jpg";

/// One discovered frame file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameFile {
    /// File path as produced by the host.
    pub path: PathBuf,
    /// Frame number parsed from the filename suffix.
    pub frame: i64,
}

/// The ordered image sequence captured for one job.
#[derive(Clone, Debug, Default)]
pub struct FrameSequence {
    frames: Vec<FrameFile>,
}

impl FrameSequence {
    /// Scan `dir` for `<stem>.<digits>.jpg` files and order them by frame
    /// number.
    ///
    /// The numeric suffix is parsed and sorted numerically, so the ordering
    /// stays correct even when the host does not zero-pad its frame
    /// numbering (raw filename order would put frame 10 before frame 2).
    /// Files that do not match the `stem.<digits>` shape are not part of the
    /// sequence and are ignored.
    pub fn discover(dir: &Path, stem: &str) -> BlastResult<Self> {
        let entries = fs::read_dir(dir)
            .with_context(|| format!("failed to read capture directory '{}'", dir.display()))?;

        let mut frames = Vec::new();
        for entry in entries {
            let entry =
                entry.with_context(|| format!("failed to list '{}'", dir.display()))?;
            let path = entry.path();
            if let Some(frame) = parse_frame_number(&path, stem) {
                frames.push(FrameFile { path, frame });
            }
        }
        frames.sort_by(|a, b| a.frame.cmp(&b.frame).then_with(|| a.path.cmp(&b.path)));
        Ok(Self { frames })
    }

    /// Frames in playback order.
    pub fn frames(&self) -> &[FrameFile] {
        &self.frames
    }

    /// Number of discovered frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Return `true` when discovery matched no files.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Delete every source image in the sequence.
    pub fn delete_files(&self) -> BlastResult<()> {
        for frame in &self.frames {
            fs::remove_file(&frame.path)
                .with_context(|| format!("failed to delete frame '{}'", frame.path.display()))?;
        }
        Ok(())
    }
}

/// Parse the frame number out of `<stem>.<digits>.jpg`, rejecting everything
/// else (other extensions, other stems, non-numeric suffixes).
fn parse_frame_number(path: &Path, stem: &str) -> Option<i64> {
    if !path.is_file() {
        return None;
    }
    let ext = path.extension()?.to_str()?;
    if !ext.eq_ignore_ascii_case(FRAME_EXTENSION) {
        return None;
    }
    let file_stem = path.file_stem()?.to_str()?;
    let digits = file_stem.strip_prefix(stem)?.strip_prefix('.')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<i64>().ok()
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/discover.rs"]
mod tests;
