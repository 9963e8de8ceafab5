use super::*;
use crate::bake::testkit::{FnClip, OffsetBaker, Slider};

#[test]
fn sample_times_stop_short_of_duration() {
    let times: Vec<f64> = (0..4).map(|x| sample_time(x, 4, 1.0)).collect();
    assert_eq!(times, vec![0.0, 0.25, 0.5, 0.75]);
    assert_eq!(sample_time(0, 0, 1.0), 0.0);
}

#[test]
fn frames_are_offsets_from_rest_in_time_order() {
    let rest = vec![Vec3::new(10.0, 0.0, 0.0), Vec3::new(0.0, 5.0, 0.0)];
    let clip = FnClip::new(2.0, |t| {
        let t = t as f32;
        vec![Vec3::new(t, 0.0, 0.0), Vec3::new(0.0, 0.0, -t)]
    });
    let mut slider = Slider::new(2);
    let mut baker = OffsetBaker::new(rest.clone());

    let frames = sample_frames(&rest, &clip, &mut slider, &mut baker, 4).unwrap();

    assert_eq!(frames.len(), 4);
    assert_eq!(slider.sampled_at, vec![0.0, 0.5, 1.0, 1.5]);
    assert_eq!(frames[0], vec![Vec3::ZERO, Vec3::ZERO]);
    assert_eq!(
        frames[3],
        vec![Vec3::new(1.5, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.5)]
    );
}

#[test]
fn spec_quarter_wave_offsets() {
    let rest = vec![Vec3::new(0.0, 1.0, 0.0)];
    let clip = FnClip::quarter_wave();
    let mut slider = Slider::new(1);
    let mut baker = OffsetBaker::new(rest.clone());

    let frames = sample_frames(&rest, &clip, &mut slider, &mut baker, 4).unwrap();
    let xs: Vec<f32> = frames.iter().map(|f| f[0].x).collect();
    assert_eq!(xs, vec![0.0, 1.0, 0.0, -1.0]);
}

#[test]
fn evaluator_failure_is_evaluation_error() {
    let rest = vec![Vec3::ZERO];
    let mut clip = FnClip::quarter_wave();
    clip.fail_on_sample = Some(2);
    let mut slider = Slider::new(1);
    let mut baker = OffsetBaker::new(rest.clone());

    let err = sample_frames(&rest, &clip, &mut slider, &mut baker, 4).unwrap_err();
    assert!(matches!(err, VatError::Evaluation(_)), "{err}");
    assert!(err.to_string().contains("0.5000s"));
    assert_eq!(slider.sampled_at.len(), 2);
}

#[test]
fn missing_vertex_positions_fail() {
    let rest = vec![Vec3::ZERO, Vec3::ONE];
    let clip = FnClip::still(1.0, 2);
    let mut slider = Slider::new(2);
    let mut baker = OffsetBaker::new(rest.clone());
    baker.truncate_to = Some(1);

    let err = sample_frames(&rest, &clip, &mut slider, &mut baker, 2).unwrap_err();
    assert!(matches!(err, VatError::Evaluation(_)));
    assert!(err.to_string().contains("rest pose has 2"));
}
