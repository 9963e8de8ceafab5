use super::*;

#[test]
fn identity_is_identity_matrix() {
    assert_eq!(Transform::IDENTITY.to_mat4(), Mat4::IDENTITY);
    assert_eq!(Transform::default(), Transform::IDENTITY);
}

#[test]
fn to_mat4_applies_scale_then_rotation_then_translation() {
    let t = Transform {
        translation: Vec3::new(0.0, 0.0, 5.0),
        rotation: Quat::from_rotation_z(std::f32::consts::FRAC_PI_2),
        scale: Vec3::splat(2.0),
    };
    let p = t.to_mat4().transform_point3(Vec3::X);
    assert!(p.abs_diff_eq(Vec3::new(0.0, 2.0, 5.0), 1e-5), "{p}");
}

#[test]
fn lerp_midpoint() {
    let a = Transform::from_translation(Vec3::ZERO);
    let b = Transform {
        translation: Vec3::new(2.0, 0.0, 0.0),
        rotation: Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
        scale: Vec3::splat(3.0),
    };
    let m = Transform::lerp(&a, &b, 0.5);
    assert!(m.translation.abs_diff_eq(Vec3::new(1.0, 0.0, 0.0), 1e-6));
    assert!(m.scale.abs_diff_eq(Vec3::splat(2.0), 1e-6));
    let expected = Quat::from_rotation_y(std::f32::consts::FRAC_PI_4);
    assert!(m.rotation.abs_diff_eq(expected, 1e-5));
}

#[test]
fn json_fields_default_to_identity() {
    let t: Transform = serde_json::from_str(r#"{ "translation": [1.0, 2.0, 3.0] }"#).unwrap();
    assert_eq!(t.translation, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(t.rotation, Quat::IDENTITY);
    assert_eq!(t.scale, Vec3::ONE);
}
