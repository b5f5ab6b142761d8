use crate::foundation::core::Resolution;

/// Preset name reserved for dimensions that match no catalog entry.
pub const CUSTOM_RESOLUTION: &str = "Custom";

/// Fixed resolution preset table, in UI order.
///
/// The trailing `Custom` entry is a 0x0 sentinel; real custom dimensions live
/// on the job itself.
pub const RESOLUTIONS: [Resolution; 5] = [
    Resolution {
        name: "HD_2160",
        width: 3840,
        height: 2160,
    },
    Resolution {
        name: "HD_1080",
        width: 1920,
        height: 1080,
    },
    Resolution {
        name: "HD_720",
        width: 1280,
        height: 720,
    },
    Resolution {
        name: "HD_540",
        width: 960,
        height: 540,
    },
    Resolution {
        name: CUSTOM_RESOLUTION,
        width: 0,
        height: 0,
    },
];

/// Scene-name placeholder keyword.
pub const KEYWORD_SCENE: &str = "<Scene>";
/// Camera-name placeholder keyword.
pub const KEYWORD_CAMERA: &str = "<Camera>";
/// Render-layer placeholder keyword.
pub const KEYWORD_LAYER: &str = "<Layer>";

/// Placeholder keywords recognized by filename templates, in UI order.
pub const KEYWORDS: [&str; 3] = [KEYWORD_SCENE, KEYWORD_CAMERA, KEYWORD_LAYER];

/// Frame-range mode names, in UI order.
pub const FRAME_RANGE_MODES: [&str; 2] = ["Time Slider", "Custom"];

/// Look up a resolution preset by catalog name.
pub fn resolution_by_name(name: &str) -> Option<&'static Resolution> {
    RESOLUTIONS.iter().find(|r| r.name == name)
}

/// Reverse lookup by exact dimension match.
///
/// Used to detect whether a width/height pair equals a known preset (so its
/// name can be auto-selected) or must fall back to [`CUSTOM_RESOLUTION`].
pub fn resolution_by_size(width: u32, height: u32) -> Option<&'static Resolution> {
    RESOLUTIONS
        .iter()
        .find(|r| r.width == width && r.height == height)
}

#[cfg(test)]
#[path = "../../tests/unit/job/catalog.rs"]
mod tests;
