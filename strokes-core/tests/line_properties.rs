/// Property tests for the line primitive and the shapes built on it.
use proptest::prelude::*;
use std::collections::BTreeSet;
use strokes_core::shapes::{draw_circle, draw_triangle};
use strokes_core::{draw_line, Color, LineSegment, PixelLog, Point2};

fn point() -> impl Strategy<Value = Point2> {
    (-500i32..500, -500i32..500).prop_map(|(x, y)| Point2::new(x, y))
}

fn any_point() -> impl Strategy<Value = Point2> {
    (any::<i32>(), any::<i32>()).prop_map(|(x, y)| Point2::new(x, y))
}

fn pixel_set(a: Point2, b: Point2) -> BTreeSet<Point2> {
    LineSegment::new(a, b).pixels().collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn degenerate_line_writes_one_pixel(p in point()) {
        let mut log = PixelLog::new();
        draw_line(&mut log, p, p, Color::WHITE);
        prop_assert_eq!(log.points(), vec![p]);
    }

    #[test]
    fn line_is_connected_and_hits_both_ends(a in point(), b in point()) {
        let pixels: Vec<Point2> = LineSegment::new(a, b).pixels().collect();
        prop_assert_eq!(pixels.first(), Some(&a));
        prop_assert_eq!(pixels.last(), Some(&b));
        for pair in pixels.windows(2) {
            prop_assert!((pair[0].x - pair[1].x).abs() <= 1, "gap between {:?} and {:?}", pair[0], pair[1]);
            prop_assert!((pair[0].y - pair[1].y).abs() <= 1, "gap between {:?} and {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn line_has_one_pixel_per_major_step(a in point(), b in point()) {
        let steps = (b.x - a.x).abs().max((b.y - a.y).abs()) as usize;
        let pixels: Vec<Point2> = LineSegment::new(a, b).pixels().collect();
        prop_assert_eq!(pixels.len(), steps + 1);
    }

    #[test]
    fn line_starts_cleanly_anywhere_in_range(a in any_point(), b in any_point()) {
        let mut pixels = LineSegment::new(a, b).pixels();
        prop_assert_eq!(pixels.next(), Some(a));
        if a != b {
            let second = pixels.next().unwrap();
            prop_assert!((i64::from(second.x) - i64::from(a.x)).abs() <= 1);
            prop_assert!((i64::from(second.y) - i64::from(a.y)).abs() <= 1);
        }
    }

    #[test]
    fn line_direction_does_not_matter(a in point(), b in point()) {
        let reversed: BTreeSet<Point2> = LineSegment::new(a, b).reversed().pixels().collect();
        prop_assert_eq!(pixel_set(a, b), reversed);
    }

    #[test]
    fn triangle_is_union_of_edges(p1 in point(), p2 in point(), p3 in point()) {
        let mut log = PixelLog::new();
        draw_triangle(&mut log, p1, p2, p3, Color::GREEN);

        let mut expected = pixel_set(p1, p2);
        expected.extend(pixel_set(p2, p3));
        expected.extend(pixel_set(p3, p1));
        prop_assert_eq!(log.unique_points(), expected);
    }

    #[test]
    fn circle_stays_within_radius(center in point(), radius in 0i32..400) {
        let mut log = PixelLog::new();
        draw_circle(&mut log, center, radius, Color::BLUE);

        for p in log.unique_points() {
            let d = f64::from(p.x - center.x).hypot(f64::from(p.y - center.y));
            prop_assert!(d <= f64::from(radius) + 1.5, "{:?} lies {} from the centre", p, d);
        }
    }
}
