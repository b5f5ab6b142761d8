use super::*;

#[test]
fn frame_range_new_validates_order() {
    let r = FrameRange::new(1, 10).unwrap();
    assert_eq!(r, FrameRange { start: 1, end: 10 });

    assert!(FrameRange::new(11, 10).is_err());
    // A single-frame range is legal.
    assert!(FrameRange::new(5, 5).is_ok());
}

#[test]
fn frame_range_len_is_inclusive() {
    assert_eq!(FrameRange { start: 1, end: 10 }.len_frames(), 10);
    assert_eq!(FrameRange { start: 5, end: 5 }.len_frames(), 1);
    assert_eq!(FrameRange { start: -10, end: -1 }.len_frames(), 10);
}

#[test]
fn frame_range_contains_both_ends() {
    let r = FrameRange { start: 1, end: 10 };
    assert!(r.contains(1));
    assert!(r.contains(10));
    assert!(!r.contains(0));
    assert!(!r.contains(11));
}

#[test]
fn resolution_size_pairs_dimensions() {
    let r = Resolution {
        name: "HD_720",
        width: 1280,
        height: 720,
    };
    assert_eq!(r.size(), (1280, 720));
}
