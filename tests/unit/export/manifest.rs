use super::*;

fn sample() -> BakeManifest {
    BakeManifest::new(
        "VATTexture_walk",
        TextureDims::new(40, 300),
        300,
        0.66,
        60.0,
        false,
        Bounds {
            min: -0.25,
            max: 1.5,
        },
    )
}

#[test]
fn import_hints_follow_texture_size() {
    let m = sample();
    assert_eq!(m.max_texture_size, 512);
    assert_eq!(m.color_space, "linear");
    assert!(!m.mipmaps);
    assert_eq!(m.wrap, "repeat");
    assert_eq!(m.dims(), TextureDims::new(40, 300));
    assert_eq!(m.bounds().min, -0.25);
}

#[test]
fn json_keeps_decode_parameters() {
    let m = sample();
    let json = m.to_json().unwrap();
    assert!(json.contains("\"bounds_min\": -0.25"));
    assert!(json.contains("\"vertex_count\": 300"));
    assert_eq!(BakeManifest::from_json(&json).unwrap(), m);
}

#[test]
fn malformed_json_is_serde_error() {
    let err = BakeManifest::from_json("{\"name\": 3}").unwrap_err();
    assert!(matches!(err, VatError::Serde(_)));
}
