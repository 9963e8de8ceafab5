use super::*;

#[test]
fn oscillating_vertex_bounds() {
    let frames = vec![
        vec![Vec3::ZERO],
        vec![Vec3::new(1.0, 0.0, 0.0)],
        vec![Vec3::ZERO],
        vec![Vec3::new(-1.0, 0.0, 0.0)],
    ];
    let b = accumulate_bounds(&frames);
    assert_eq!(b, Bounds { min: -1.0, max: 1.0 });
    assert_eq!(b.span(), 2.0);
}

#[test]
fn bounds_are_scalar_across_axes_and_vertices() {
    let frames = vec![
        vec![Vec3::new(0.1, -3.0, 0.2), Vec3::new(0.0, 0.0, 7.5)],
        vec![Vec3::new(-0.5, 2.0, 1.0), Vec3::new(4.0, 0.0, 0.0)],
    ];
    let b = accumulate_bounds(&frames);
    assert_eq!(b.min, -3.0);
    assert_eq!(b.max, 7.5);

    for v in frames.iter().flatten() {
        for c in v.to_array() {
            assert!(b.min <= c && c <= b.max);
        }
    }
}

#[test]
fn empty_fold_is_degenerate() {
    let b = accumulate_bounds(&[]);
    assert_eq!(b.min, f32::INFINITY);
    assert_eq!(b.max, f32::NEG_INFINITY);
    assert!(!b.is_valid());
    assert!(matches!(
        b.require_valid(),
        Err(VatError::DegenerateBounds { .. })
    ));

    let b = accumulate_bounds(&[vec![], vec![]]);
    assert!(!b.is_valid());
}

#[test]
fn non_finite_components_are_skipped() {
    let frames = vec![vec![Vec3::new(f32::NAN, f32::INFINITY, 0.5)]];
    let b = accumulate_bounds(&frames);
    assert_eq!(b, Bounds { min: 0.5, max: 0.5 });
    assert!(b.is_flat());
}

#[test]
fn decode_inverts_normalization() {
    let b = Bounds { min: -2.0, max: 6.0 };
    assert_eq!(b.decode(0.0), -2.0);
    assert_eq!(b.decode(1.0), 6.0);
    assert_eq!(b.decode(0.5), 2.0);
}
