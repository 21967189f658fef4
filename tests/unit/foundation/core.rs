use super::*;

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    let c = Canvas::new(1280, 880).unwrap();
    assert_eq!(c.rect(), Rect::new(0.0, 0.0, 1280.0, 880.0));
}

#[test]
fn paint_svg_values() {
    assert_eq!(Paint::None.as_svg(), "none");
    assert_eq!(Paint::color("#ffcccb").as_svg(), "#ffcccb");
    assert!(Paint::None.is_none());
    assert!(!Paint::color("yellow").is_none());
}

#[test]
fn transform_scales_before_translating() {
    let t = Transform2D::translate(60.0, 140.0).with_scale(1.6);
    let p = t.to_affine() * Point::new(-10.0, -10.0);
    assert!((p.x - 44.0).abs() < 1e-9);
    assert!((p.y - 124.0).abs() < 1e-9);
    assert!(!t.is_identity());
    assert!(Transform2D::default().is_identity());
}
