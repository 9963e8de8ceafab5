use super::*;
use crate::bake::bounds::accumulate_bounds;

fn quarter_wave_frames() -> Vec<Frame> {
    vec![
        vec![Vec3::ZERO],
        vec![Vec3::new(1.0, 0.0, 0.0)],
        vec![Vec3::ZERO],
        vec![Vec3::new(-1.0, 0.0, 0.0)],
    ]
}

#[test]
fn quarter_wave_x_channel() {
    let frames = quarter_wave_frames();
    let bounds = accumulate_bounds(&frames);
    let grid = encode(&frames, bounds, 4, 1).unwrap();

    let xs: Vec<u8> = (0..4).map(|x| grid.pixel(x, 0).unwrap()[0]).collect();
    assert_eq!(xs, vec![128, 255, 128, 0]);

    // y and z are zero offsets, which sit mid-range.
    for x in 0..4 {
        let px = grid.pixel(x, 0).unwrap();
        assert_eq!(px[1], 128);
        assert_eq!(px[2], 128);
        assert_eq!(px[3], OPAQUE_ALPHA);
    }
}

#[test]
fn encoding_is_idempotent() {
    let frames = vec![
        vec![Vec3::new(0.3, -0.2, 0.9), Vec3::new(-1.7, 0.0, 0.4)],
        vec![Vec3::new(0.1, 0.25, -0.6), Vec3::new(2.2, 1.1, -0.05)],
    ];
    let bounds = accumulate_bounds(&frames);
    let a = encode(&frames, bounds, 2, 2).unwrap();
    let b = encode(&frames, bounds, 2, 2).unwrap();
    assert_eq!(a, b);
}

#[test]
fn padded_rows_stay_zero() {
    let frames = quarter_wave_frames();
    let bounds = accumulate_bounds(&frames);
    let grid = encode(&frames, bounds, 4, 4).unwrap();
    for x in 0..4 {
        for y in 1..4 {
            assert_eq!(grid.pixel(x, y), Some(PADDING_RGBA));
        }
    }
    assert_eq!(grid.data.len(), 4 * 4 * 4);
}

#[test]
fn flat_bounds_use_mid_value() {
    let frames = vec![vec![Vec3::ZERO, Vec3::ZERO]; 3];
    let bounds = accumulate_bounds(&frames);
    assert!(bounds.is_flat());

    let grid = encode(&frames, bounds, 3, 2).unwrap();
    for x in 0..3 {
        for y in 0..2 {
            assert_eq!(grid.pixel(x, y), Some([128, 128, 128, 255]));
        }
    }
}

#[test]
fn degenerate_bounds_are_rejected() {
    let frames: Vec<Frame> = vec![vec![], vec![]];
    let err = encode(&frames, Bounds::EMPTY, 2, 1).unwrap_err();
    assert!(matches!(err, VatError::DegenerateBounds { .. }));
}

#[test]
fn frame_count_must_match_width() {
    let frames = quarter_wave_frames();
    let bounds = accumulate_bounds(&frames);
    assert!(matches!(
        encode(&frames, bounds, 8, 1),
        Err(VatError::Validation(_))
    ));
}

#[test]
fn frames_taller_than_grid_are_rejected() {
    let frames = vec![vec![Vec3::ZERO, Vec3::ONE]];
    let bounds = accumulate_bounds(&frames);
    assert!(matches!(
        encode(&frames, bounds, 1, 1),
        Err(VatError::Validation(_))
    ));
}

#[test]
fn values_outside_bounds_clamp() {
    let bounds = Bounds { min: -1.0, max: 1.0 };
    assert_eq!(
        encode_offset(Vec3::new(5.0, -5.0, 0.0), bounds),
        [255, 0, 128, 255]
    );
}

#[test]
fn pixel_accessors_and_row_flip() {
    let mut grid = PixelGrid::new(TextureDims::new(2, 3));
    grid.set_pixel(1, 0, [1, 2, 3, 4]);
    grid.set_pixel(9, 9, [9, 9, 9, 9]);
    assert_eq!(grid.pixel(1, 0), Some([1, 2, 3, 4]));
    assert_eq!(grid.pixel(2, 0), None);

    let flipped = grid.flipped_rows();
    assert_eq!(flipped.pixel(1, 2), Some([1, 2, 3, 4]));
    assert_eq!(flipped.pixel(1, 0), Some([0, 0, 0, 0]));
    assert_eq!(flipped.flipped_rows(), grid);
}
