use super::*;

#[test]
fn constructors_build_the_matching_variant() {
    assert!(matches!(BlastError::config("x"), BlastError::Config(_)));
    assert!(matches!(BlastError::host("x"), BlastError::Host(_)));
    assert!(matches!(BlastError::sequence("x"), BlastError::Sequence(_)));
    assert!(matches!(BlastError::encode("x"), BlastError::Encode(_)));
    assert!(matches!(BlastError::serde("x"), BlastError::Serde(_)));
}

#[test]
fn display_prefixes_the_category() {
    assert_eq!(
        BlastError::config("bad range").to_string(),
        "config error: bad range"
    );
    assert_eq!(
        BlastError::sequence("no frames").to_string(),
        "sequence error: no frames"
    );
}

#[test]
fn anyhow_errors_pass_through() {
    let e: BlastError = anyhow::anyhow!("disk gone").into();
    assert!(matches!(e, BlastError::Other(_)));
    assert_eq!(e.to_string(), "disk gone");
}
