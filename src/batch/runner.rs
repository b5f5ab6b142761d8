use crate::encode::sink::{FrameImage, SinkConfig, VideoSink};
use crate::foundation::error::{BlastError, BlastResult};
use crate::host::{CaptureSpec, HostSession};
use crate::job::model::{CaptureFormat, Job};
use crate::sequence::FrameSequence;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Options controlling batch failure policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct BatchOpts {
    /// Record a failing job and continue with the next one instead of
    /// aborting the whole batch on the first mid-batch failure.
    pub isolate_failures: bool,
}

/// Terminal state of one job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JobOutcome {
    /// Frames were captured and encoded into `video`.
    Encoded {
        /// Output video path.
        video: PathBuf,
        /// Number of frames appended to the stream.
        frames: u64,
    },
    /// Movie-format capture finished; the host wrote the container itself.
    Captured,
    /// The job failed. Reported only when failures are isolated.
    Failed {
        /// Failure rendered for diagnostics.
        error: String,
    },
}

/// Per-job diagnostic record.
#[derive(Clone, Debug)]
pub struct JobReport {
    /// Job identity.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Wall-clock duration of state application, capture and encode.
    pub duration: Duration,
    /// Terminal state.
    pub outcome: JobOutcome,
}

/// Summary of one [`BatchRunner::run`].
#[derive(Clone, Debug, Default)]
pub struct BatchReport {
    /// Per-job reports, in execution order.
    pub jobs: Vec<JobReport>,
}

impl BatchReport {
    /// Number of jobs that failed.
    pub fn failed(&self) -> usize {
        self.jobs
            .iter()
            .filter(|j| matches!(j.outcome, JobOutcome::Failed { .. }))
            .count()
    }
}

/// Ordered batch executor over a live host session.
///
/// Jobs run strictly sequentially: every host mutation targets the one live
/// session, so concurrent jobs would race on shared viewport state. `run`
/// holds the session exclusively from the first host call to the last.
///
/// `open_sink` is invoked once per image-format job with the job's output
/// video path; callers embedding the pipeline decide the sink (system
/// `ffmpeg` in production, an in-memory double in tests).
pub struct BatchRunner<'a, H, F> {
    host: &'a mut H,
    open_sink: F,
    opts: BatchOpts,
}

impl<'a, H, F> BatchRunner<'a, H, F>
where
    H: HostSession,
    F: FnMut(&Path) -> BlastResult<Box<dyn VideoSink>>,
{
    /// Create a runner with default options.
    pub fn new(host: &'a mut H, open_sink: F) -> Self {
        Self {
            host,
            open_sink,
            opts: BatchOpts::default(),
        }
    }

    /// Replace the batch options.
    pub fn with_opts(mut self, opts: BatchOpts) -> Self {
        self.opts = opts;
        self
    }

    /// Execute `jobs` in list order.
    ///
    /// Configuration errors (empty list, invalid descriptor) refuse the whole
    /// batch before any host mutation and before the initial progress
    /// emission. `on_progress` receives 0 first, then the completion percent
    /// after each job.
    ///
    /// With default options the first mid-batch failure aborts the run and
    /// progress stops advancing; with [`BatchOpts::isolate_failures`] the
    /// failure lands in the job's [`JobOutcome`] and the batch continues.
    ///
    /// There is no cancellation mid-batch; a caller wanting one should check
    /// its own flag between jobs and simply not pass the remainder.
    pub fn run(
        &mut self,
        jobs: &[Job],
        mut on_progress: impl FnMut(u8),
    ) -> BlastResult<BatchReport> {
        if jobs.is_empty() {
            return Err(BlastError::config("batch contains no jobs"));
        }
        for job in jobs {
            if let Err(e) = job.validate() {
                return Err(BlastError::config(format!("job '{}': {e}", job.name)));
            }
        }

        on_progress(0);

        let total = jobs.len();
        let mut report = BatchReport::default();
        for (i, job) in jobs.iter().enumerate() {
            let started = Instant::now();
            tracing::info!(job = %job.name, "starting playblast");

            let outcome = match self.run_job(job) {
                Ok(outcome) => outcome,
                Err(e) if self.opts.isolate_failures => {
                    tracing::warn!(job = %job.name, error = %e, "job failed, continuing batch");
                    JobOutcome::Failed {
                        error: e.to_string(),
                    }
                }
                Err(e) => {
                    tracing::error!(job = %job.name, error = %e, "job failed, aborting batch");
                    return Err(e);
                }
            };

            let duration = started.elapsed();
            tracing::info!(
                job = %job.name,
                secs = %format_args!("{:.2}", duration.as_secs_f64()),
                "finished playblast"
            );
            report.jobs.push(JobReport {
                id: job.id,
                name: job.name.clone(),
                duration,
                outcome,
            });
            on_progress(progress_percent(i + 1, total));
        }

        Ok(report)
    }

    /// Stages (a)-(d) for one job: apply host state, capture, discover the
    /// sequence, encode, deferred source cleanup.
    fn run_job(&mut self, job: &Job) -> BlastResult<JobOutcome> {
        tracing::debug!(
            camera = %job.camera,
            layer = %job.render_layer,
            overscan = job.overscan,
            "applying host state"
        );
        self.host.set_active_camera(&job.camera)?;
        self.host.set_active_render_layer(&job.render_layer)?;
        self.host.set_overscan(&job.camera, job.overscan)?;

        let scene = self.host.scene_name()?;
        let range = job.resolved_frame_range(&*self.host)?;
        let stem_path = job.resolve_output_path(&scene);
        self.host.capture(&CaptureSpec {
            range,
            output_stem: stem_path.clone(),
            width: job.width,
            height: job.height,
            format: job.format,
            offscreen: job.offscreen,
            show_ornaments: job.show_ornaments,
        })?;

        if job.format == CaptureFormat::Movie {
            return Ok(JobOutcome::Captured);
        }

        let stem = stem_path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                BlastError::config(format!(
                    "output path '{}' has no filename stem",
                    stem_path.display()
                ))
            })?
            .to_owned();
        let dir = match stem_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let seq = FrameSequence::discover(&dir, &stem)?;
        if seq.is_empty() {
            return Err(BlastError::sequence(format!(
                "no captured frames matching '{stem}' in '{}'",
                dir.display()
            )));
        }

        let video_path = dir.join(format!("{stem}.mp4"));
        let fps = self.host.frame_rate()?;
        let mut sink = (self.open_sink)(&video_path)?;
        sink.begin(SinkConfig {
            width: job.width,
            height: job.height,
            fps,
            quality: job.quality,
        })?;
        let mut frames = 0u64;
        for frame in seq.frames() {
            let img = load_frame(&frame.path)?;
            sink.push_frame(&img)?;
            frames += 1;
        }
        sink.end()?;

        // Source cleanup only after the stream is finalized, so a mid-encode
        // failure never leaves a partially deleted sequence behind.
        if job.delete_images {
            seq.delete_files()?;
        }

        Ok(JobOutcome::Encoded {
            video: video_path,
            frames,
        })
    }
}

fn progress_percent(done: usize, total: usize) -> u8 {
    ((done as f64 / total as f64) * 100.0).round() as u8
}

fn load_frame(path: &Path) -> BlastResult<FrameImage> {
    let img = image::open(path)
        .map_err(|e| {
            BlastError::encode(format!("failed to decode frame '{}': {e}", path.display()))
        })?
        .to_rgb8();
    Ok(FrameImage {
        width: img.width(),
        height: img.height(),
        data: img.into_raw(),
    })
}
