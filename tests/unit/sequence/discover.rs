use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

fn scratch_dir(tag: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let dir = std::env::temp_dir().join(format!(
        "batchblast_seq_{tag}_{}_{}",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"x").unwrap();
}

#[test]
fn zero_padded_sequences_order_by_frame() {
    let dir = scratch_dir("padded");
    // Created out of order on purpose.
    for frame in [3, 1, 12, 2, 7, 4, 5, 6, 11, 8, 10, 9] {
        touch(&dir, &format!("shotA.{frame:04}.jpg"));
    }

    let seq = FrameSequence::discover(&dir, "shotA").unwrap();
    assert_eq!(seq.len(), 12);
    let frames: Vec<i64> = seq.frames().iter().map(|f| f.frame).collect();
    assert_eq!(frames, (1..=12).collect::<Vec<_>>());
}

#[test]
fn unpadded_sequences_still_order_numerically() {
    // Raw filename ordering would put 10, 11, 12 before 2; the parsed
    // numeric suffix keeps playback order correct.
    let dir = scratch_dir("unpadded");
    for frame in 1..=12 {
        touch(&dir, &format!("shotA.{frame}.jpg"));
    }

    let seq = FrameSequence::discover(&dir, "shotA").unwrap();
    let frames: Vec<i64> = seq.frames().iter().map(|f| f.frame).collect();
    assert_eq!(frames, (1..=12).collect::<Vec<_>>());
}

#[test]
fn only_exact_stem_numeric_jpgs_are_discovered() {
    let dir = scratch_dir("filter");
    touch(&dir, "shotA.0001.jpg");
    touch(&dir, "shotA.0002.JPG"); // extension match is case-insensitive
    touch(&dir, "shotAB.0001.jpg"); // different stem
    touch(&dir, "shotA.0001.png"); // different extension
    touch(&dir, "shotA.final.jpg"); // non-numeric suffix
    touch(&dir, "shotA.jpg"); // no frame number
    touch(&dir, "shotA.mp4");

    let seq = FrameSequence::discover(&dir, "shotA").unwrap();
    let frames: Vec<i64> = seq.frames().iter().map(|f| f.frame).collect();
    assert_eq!(frames, vec![1, 2]);
}

#[test]
fn empty_discovery_is_reported_as_empty() {
    let dir = scratch_dir("empty");
    let seq = FrameSequence::discover(&dir, "shotA").unwrap();
    assert!(seq.is_empty());
    assert_eq!(seq.len(), 0);
}

#[test]
fn missing_directory_is_an_error() {
    let dir = scratch_dir("gone").join("nope");
    assert!(FrameSequence::discover(&dir, "shotA").is_err());
}

#[test]
fn delete_files_removes_every_source_image() {
    let dir = scratch_dir("delete");
    for frame in 1..=5 {
        touch(&dir, &format!("shotA.{frame:04}.jpg"));
    }
    touch(&dir, "unrelated.txt");

    let seq = FrameSequence::discover(&dir, "shotA").unwrap();
    seq.delete_files().unwrap();

    let remaining: Vec<_> = fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(remaining, vec![std::ffi::OsString::from("unrelated.txt")]);
}
