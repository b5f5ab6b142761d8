use super::*;
use crate::foundation::core::FrameRange;
use crate::host::ScriptedHost;

#[test]
fn new_job_carries_the_panel_defaults() {
    let job = Job::new(3);
    assert_eq!(job.name, "Playblast 3");
    assert_eq!(job.camera, "persp");
    assert_eq!(job.render_layer, "defaultRenderLayer");
    assert_eq!(job.frame_range_mode, FrameRangeMode::TimeSlider);
    assert_eq!(job.resolution, "HD_1080");
    assert_eq!((job.width, job.height), (1920, 1080));
    assert_eq!(job.filename_template, "<Scene>/<Scene>_<Camera>");
    assert_eq!(job.format, CaptureFormat::Image);
    assert_eq!(job.quality, Quality::High);
    assert!(!job.delete_images);
    job.validate().unwrap();
}

#[test]
fn clone_with_id_differs_only_in_identity() {
    let mut job = Job::new(0);
    job.camera = "top".to_owned();
    job.set_resolution_size(1280, 720);

    let clone = job.clone_with_id(7);
    assert_eq!(clone.id, 7);

    let mut back = clone.clone();
    back.id = job.id;
    assert_eq!(back, job);
}

#[test]
fn mutating_a_clone_never_mutates_the_source() {
    let job = Job::new(0);
    let mut clone = job.clone_with_id(1);
    clone.camera = "side".to_owned();
    clone.filename_template = "<Layer>".to_owned();

    assert_eq!(job.camera, "persp");
    assert_eq!(job.filename_template, "<Scene>/<Scene>_<Camera>");
}

#[test]
fn set_resolution_size_auto_selects_the_matching_preset() {
    let mut job = Job::new(0);
    job.set_resolution_size(3840, 2160);
    assert_eq!(job.resolution, "HD_2160");
    job.validate().unwrap();
}

#[test]
fn unmatched_dimensions_fall_back_to_custom() {
    let mut job = Job::new(0);
    job.set_resolution_size(1000, 1000);
    assert_eq!(job.resolution, "Custom");
    assert_eq!((job.width, job.height), (1000, 1000));
    job.validate().unwrap();
}

#[test]
fn set_resolution_preset_adopts_the_preset_dimensions() {
    let mut job = Job::new(0);
    job.set_resolution_preset("HD_540").unwrap();
    assert_eq!((job.width, job.height), (960, 540));

    // Selecting Custom keeps the current dimensions.
    job.set_resolution_preset("Custom").unwrap();
    assert_eq!((job.width, job.height), (960, 540));

    assert!(job.set_resolution_preset("4K_DCI").is_err());
}

#[test]
fn validate_rejects_preset_dimension_mismatch() {
    let mut job = Job::new(0);
    job.width = 640;
    job.height = 480;
    // resolution still says HD_1080
    assert!(job.validate().is_err());
}

#[test]
fn validate_rejects_inverted_custom_range_and_empty_template() {
    let mut job = Job::new(0);
    job.frame_range_mode = FrameRangeMode::Custom;
    job.start_frame = 50;
    job.end_frame = 10;
    assert!(job.validate().is_err());

    let mut job = Job::new(0);
    job.filename_template = String::new();
    assert!(job.validate().is_err());
}

#[test]
fn custom_range_resolution_ignores_live_host_state() {
    let host = ScriptedHost::new("shotA").with_playback_range(FrameRange { start: 1, end: 100 });

    let mut job = Job::new(0);
    job.frame_range_mode = FrameRangeMode::Custom;
    job.start_frame = 10;
    job.end_frame = 50;

    assert_eq!(
        job.resolved_frame_range(&host).unwrap(),
        FrameRange { start: 10, end: 50 }
    );
}

#[test]
fn time_slider_resolution_queries_the_host() {
    let host = ScriptedHost::new("shotA").with_playback_range(FrameRange { start: 101, end: 150 });

    let job = Job::new(0);
    assert_eq!(
        job.resolved_frame_range(&host).unwrap(),
        FrameRange {
            start: 101,
            end: 150
        }
    );
}

#[test]
fn output_path_joins_directory_and_evaluated_template() {
    let mut job = Job::new(0);
    job.output_dir = std::path::PathBuf::from("/captures");
    job.camera = "cam1".to_owned();

    let path = job.resolve_output_path("shotA");
    assert_eq!(path, std::path::Path::new("/captures/shotA/shotA_cam1"));

    job.refresh_output_path("shotA");
    assert_eq!(job.output_path, path);
}
