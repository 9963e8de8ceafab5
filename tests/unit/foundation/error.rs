use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        VatError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        VatError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        VatError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        VatError::export_failed("x")
            .to_string()
            .contains("export failed:")
    );
    assert!(
        VatError::invalid_destination("x")
            .to_string()
            .contains("invalid destination:")
    );
    assert!(
        VatError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn size_errors_carry_diagnostics() {
    let err = VatError::TextureTooLarge {
        width: 8192,
        sampling_rate: 60.0,
        max_size: 4096,
    };
    let msg = err.to_string();
    assert!(msg.contains("60FPS"));
    assert!(msg.contains("4096"));
    assert!(err.is_size_limit());

    let err = VatError::VertexCountExceeded {
        vertex_count: 5000,
        height: 8192,
        max_size: 4096,
    };
    assert!(err.to_string().contains("5000"));
    assert!(err.is_size_limit());
    assert!(!VatError::evaluation("x").is_size_limit());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = VatError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
