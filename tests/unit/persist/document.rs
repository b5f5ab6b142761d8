use super::*;
use crate::job::model::{CaptureFormat, FrameRangeMode, Quality};
use std::sync::atomic::{AtomicUsize, Ordering};

fn sample_jobs() -> Vec<Job> {
    let mut a = Job::new(0);
    a.camera = "top".to_owned();
    a.frame_range_mode = FrameRangeMode::Custom;
    a.start_frame = 10;
    a.end_frame = 50;
    a.set_resolution_size(1000, 1000);
    a.output_dir = std::path::PathBuf::from("/captures");
    a.refresh_output_path("shotA");
    a.quality = Quality::Medium;
    a.delete_images = true;

    let mut b = a.clone_with_id(1);
    b.format = CaptureFormat::Movie;
    b.overscan = true;

    vec![a, b]
}

#[test]
fn json_round_trip_reproduces_equivalent_descriptors() {
    let doc = Document::new(sample_jobs());
    let json = doc.to_json().unwrap();
    let back = Document::from_json(&json).unwrap();
    assert_eq!(back, doc);

    // Resolved output path and flags survive the trip.
    assert_eq!(back.playblasts[0].output_path, doc.playblasts[0].output_path);
    assert!(back.playblasts[0].delete_images);
    assert_eq!(back.playblasts[0].resolution, "Custom");
}

#[test]
fn frame_range_mode_serializes_with_its_ui_name() {
    let doc = Document::new(vec![Job::new(0)]);
    let json = doc.to_json().unwrap();
    assert!(json.contains("\"Time Slider\""));
}

#[test]
fn unsupported_versions_are_rejected() {
    let doc = Document {
        version: "99".to_owned(),
        playblasts: Vec::new(),
    };
    let json = serde_json::to_string(&doc).unwrap();
    let err = Document::from_json(&json).unwrap_err();
    assert!(err.to_string().contains("version"));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = Document::from_json("{\"version\": 1").unwrap_err();
    assert!(matches!(err, BlastError::Serde(_)));
}

#[test]
fn save_and_load_round_trip_through_a_file() {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let path = std::env::temp_dir().join(format!(
        "batchblast_doc_{}_{}.json",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));

    let doc = Document::new(sample_jobs());
    doc.save(&path).unwrap();
    let back = Document::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(back, doc);
}
