use super::*;

#[test]
fn next_power_of_two_table() {
    let inputs = [0i64, 1, 2, 3, 4, 5, 8, 9, 4096, 4097];
    let expected = [0u64, 1, 2, 4, 4, 8, 8, 16, 4096, 8192];
    for (n, want) in inputs.into_iter().zip(expected) {
        assert_eq!(next_power_of_two(n), want, "n = {n}");
    }
}

#[test]
fn next_power_of_two_negative_is_zero() {
    assert_eq!(next_power_of_two(-1), 0);
    assert_eq!(next_power_of_two(-4096), 0);
    assert_eq!(next_power_of_two(i64::MIN), 0);
}

#[test]
fn inverse_lerp_maps_endpoints_and_clamps() {
    assert_eq!(inverse_lerp(-1.0, 1.0, -1.0), Some(0.0));
    assert_eq!(inverse_lerp(-1.0, 1.0, 1.0), Some(1.0));
    assert_eq!(inverse_lerp(-1.0, 1.0, 0.0), Some(0.5));
    assert_eq!(inverse_lerp(-1.0, 1.0, 3.0), Some(1.0));
    assert_eq!(inverse_lerp(-1.0, 1.0, -3.0), Some(0.0));
}

#[test]
fn inverse_lerp_empty_range_is_none() {
    assert_eq!(inverse_lerp(2.0, 2.0, 2.0), None);
}

#[test]
fn unorm_quantization_rounds_to_nearest() {
    assert_eq!(unorm_to_u8(0.0), 0);
    assert_eq!(unorm_to_u8(0.5), 128);
    assert_eq!(unorm_to_u8(1.0), 255);
    assert_eq!(unorm_to_u8(2.0), 255);
    assert_eq!(unorm_to_u8(-1.0), 0);
    assert_eq!(unorm_to_u8(f32::NAN), 0);
    for v in [0u8, 1, 127, 128, 254, 255] {
        assert_eq!(unorm_to_u8(u8_to_unorm(v)), v);
    }
}
