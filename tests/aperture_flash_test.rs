// Checks the geometric properties callers rely on when feeding flashed
// apertures into a polygon clipper
use aperture_geometry::{
    build_stroke, flash, tessellate_arc, tessellate_circle, Aperture, ApertureShape, Point, Polygon,
    Resolution, Winding,
};
use approx::assert_abs_diff_eq;
use std::f64::consts::PI;

fn point_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let len2 = abx * abx + aby * aby;
    if len2 < 1e-20 {
        return p.distance(a);
    }
    let t = (((p.x - a.x) * abx + (p.y - a.y) * aby) / len2).clamp(0.0, 1.0);
    p.distance(Point::new(a.x + t * abx, a.y + t * aby))
}

/// Hausdorff distance between the ideal circle and a closed tessellation of it.
/// Every vertex lies on the circle, so only circle-to-polygon distances matter.
fn circle_hausdorff(center: Point, radius: f64, outline: &Polygon) -> f64 {
    let ring = outline.closed();
    let pts = ring.points();
    let samples = 8192;
    let mut worst: f64 = 0.0;
    for i in 0..samples {
        let q = Point::polar(center, radius, i as f64 / samples as f64 * 2.0 * PI);
        let nearest = pts
            .windows(2)
            .map(|e| point_segment_distance(q, e[0], e[1]))
            .fold(f64::MAX, f64::min);
        worst = worst.max(nearest);
    }
    worst
}

#[test]
fn test_full_circle_point_count_and_radius() {
    let center = Point::new(12.0, -3.5);
    for segments in [3, 4, 5, 8, 17, 32, 100] {
        let res = Resolution::new(segments).unwrap();
        let circle = tessellate_arc(center, 2.0, 0.0, 360.0, res);
        let n = circle.len() as u32;
        assert!(n == segments || n == segments + 1, "{} points for {} segments", n, segments);
        for p in &circle {
            assert_abs_diff_eq!(p.distance(center), 1.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_full_circle_angular_step() {
    let res = Resolution::new(7).unwrap();
    let circle = tessellate_circle(Point::ORIGIN, 4.0, res);
    let angles: Vec<f64> = circle.iter().map(|p| p.y.atan2(p.x)).collect();
    for pair in angles.windows(2) {
        let step = (pair[1] - pair[0]).rem_euclid(2.0 * PI);
        assert_abs_diff_eq!(step, 2.0 * PI / 7.0, epsilon = 1e-12);
    }
}

#[test]
fn test_rectangle_ring_10_by_6() {
    let ring = Aperture::rectangular(10, 10.0, 6.0).flash(Resolution::default());
    let coords: Vec<(f64, f64)> = ring.iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(coords, vec![(5.0, 3.0), (-5.0, 3.0), (-5.0, -3.0), (5.0, -3.0), (5.0, 3.0)]);
    assert_eq!(ring.first(), ring.last());
}

#[test]
fn test_oblong_bounding_box() {
    let res = Resolution::default();
    let outline = Aperture::oblong(11, 10.0, 4.0).flash(res);
    assert_eq!(outline, build_stroke(Point::new(-3.0, 0.0), Point::new(3.0, 0.0), 4.0, res));

    let bounds = outline.bounds().unwrap();
    assert_abs_diff_eq!(bounds.min_x, -5.0, epsilon = 1e-12);
    assert_abs_diff_eq!(bounds.max_x, 5.0, epsilon = 1e-12);
    assert_abs_diff_eq!(bounds.min_y, -2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(bounds.max_y, 2.0, epsilon = 1e-12);
}

#[test]
fn test_vertical_oblong_bounding_box() {
    let outline = Aperture::oblong(12, 1.0, 6.0)
        .at(Point::new(10.0, 20.0))
        .flash(Resolution::default());
    let bounds = outline.bounds().unwrap();
    assert_abs_diff_eq!(bounds.min_x, 9.5, epsilon = 1e-12);
    assert_abs_diff_eq!(bounds.max_x, 10.5, epsilon = 1e-12);
    assert_abs_diff_eq!(bounds.min_y, 17.0, epsilon = 1e-12);
    assert_abs_diff_eq!(bounds.max_y, 23.0, epsilon = 1e-12);
}

#[test]
fn test_coincident_stroke_is_circle() {
    let p = Point::new(-1.0, 4.0);
    let d = 3.0;
    let outline = build_stroke(p, p, d, Resolution::new(128).unwrap());
    let ideal = PI * (d / 2.0) * (d / 2.0);
    assert_abs_diff_eq!(outline.area(), ideal, epsilon = ideal * 1e-3);
}

#[test]
fn test_flash_is_idempotent() {
    let res = Resolution::default();
    let center = Point::new(3.25, -7.5);
    for aperture in [
        Aperture::circular(10, 0.6),
        Aperture::oblong(11, 0.6, 1.8),
        Aperture::rectangular(12, 2.0, 1.0),
    ] {
        let first = aperture.flash_at(center, res);
        let second = aperture.flash_at(center, res);
        assert_eq!(first, second);
        let relocated = aperture.at(center);
        assert_eq!(relocated.flash(res), first);
        assert_eq!(relocated.flash(res), relocated.flash(res));
    }
}

#[test]
fn test_hausdorff_distance_decreases_with_resolution() {
    let center = Point::new(1.0, 2.0);
    let radius = 5.0;
    let mut previous = f64::MAX;
    for segments in [3, 4, 6, 8, 16, 32, 64, 128] {
        let res = Resolution::new(segments).unwrap();
        let distance = circle_hausdorff(center, radius, &tessellate_circle(center, 2.0 * radius, res));
        assert!(distance < previous, "{} segments: {} >= {}", segments, distance, previous);
        assert_abs_diff_eq!(distance, res.max_deviation(radius), epsilon = 1e-3 * radius);
        previous = distance;
    }
    assert!(previous < 2e-3);
}

#[test]
fn test_closure_conventions() {
    let res = Resolution::default();
    let rect = flash(&ApertureShape::Rectangular { width: 1.0, height: 2.0 }, Point::ORIGIN, res);
    assert!(rect.is_closed());

    // Arc based shapes get no extra closing vertex; a caller that needs an
    // exact closure asks for it
    let circle = flash(&ApertureShape::Circular { diameter: 1.0 }, Point::ORIGIN, res);
    assert_eq!(circle.len(), 33);
    let oblong = flash(&ApertureShape::Oblong { width: 3.0, height: 1.0 }, Point::ORIGIN, res);
    assert_eq!(oblong.len(), 38);
    assert!(oblong.closed().is_closed());
}

#[test]
fn test_all_outlines_counter_clockwise() {
    let res = Resolution::default();
    let shapes = [
        ApertureShape::Circular { diameter: 1.0 },
        ApertureShape::Oblong { width: 4.0, height: 1.0 },
        ApertureShape::Oblong { width: 1.0, height: 4.0 },
        ApertureShape::Rectangular { width: 2.0, height: 3.0 },
    ];
    for shape in &shapes {
        let outline = flash(shape, Point::new(-2.0, 5.0), res);
        assert_eq!(outline.winding(), Some(Winding::CounterClockwise), "{:?}", shape);
    }

    // Strokes in every direction keep the same orientation
    for i in 0..16 {
        let angle = i as f64 / 16.0 * 2.0 * PI;
        let end = Point::polar(Point::ORIGIN, 7.0, angle);
        let outline = build_stroke(Point::ORIGIN, end, 1.0, res);
        assert_eq!(outline.winding(), Some(Winding::CounterClockwise), "direction {}", angle);
        assert_abs_diff_eq!(outline.area(), 7.0 + PI * 0.25, epsilon = 0.01);
    }
}
