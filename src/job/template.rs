use crate::job::catalog::{KEYWORD_CAMERA, KEYWORD_LAYER, KEYWORD_SCENE};

/// Substitute every recognized placeholder keyword in `template`.
///
/// `<Scene>`, `<Camera>` and `<Layer>` are replaced by the supplied literal
/// values; all other text, including unrecognized placeholder-like
/// substrings, is left verbatim. Running the result through `evaluate` again
/// with the same inputs is a no-op once no placeholders remain.
pub fn evaluate(template: &str, scene: &str, camera: &str, layer: &str) -> String {
    let mut out = template.to_owned();
    for (keyword, value) in [
        (KEYWORD_SCENE, scene),
        (KEYWORD_CAMERA, camera),
        (KEYWORD_LAYER, layer),
    ] {
        out = out.replace(keyword, value);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/job/template.rs"]
mod tests;
