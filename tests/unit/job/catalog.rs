use super::*;

#[test]
fn resolution_by_name_finds_catalog_entries() {
    let hd = resolution_by_name("HD_1080").unwrap();
    assert_eq!((hd.width, hd.height), (1920, 1080));

    let custom = resolution_by_name(CUSTOM_RESOLUTION).unwrap();
    assert_eq!(custom.size(), (0, 0));

    assert!(resolution_by_name("HD_480").is_none());
}

#[test]
fn resolution_by_size_is_exact_match_only() {
    assert_eq!(resolution_by_size(1280, 720).unwrap().name, "HD_720");
    assert!(resolution_by_size(1000, 1000).is_none());
    assert!(resolution_by_size(1920, 1079).is_none());
}

#[test]
fn keyword_and_mode_tables_are_fixed() {
    assert_eq!(KEYWORDS, ["<Scene>", "<Camera>", "<Layer>"]);
    assert_eq!(FRAME_RANGE_MODES, ["Time Slider", "Custom"]);
}
