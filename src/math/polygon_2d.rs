use super::Point2;

/// Computes the signed area of an implicitly closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns `true` if `q` lies strictly to the left of the directed edge `a → b`.
#[must_use]
pub fn is_left(q: &Point2, a: &Point2, b: &Point2) -> bool {
    (a.x - q.x) * (b.y - q.y) - (b.x - q.x) * (a.y - q.y) > 0.0
}

/// Signed crossing count of a horizontal ray from `q` against the polygon
/// boundary. Upward crossings with `q` on the left count `+1`, downward
/// crossings with `q` on the right count `-1`.
#[must_use]
pub fn winding_number_2d(points: &[Point2], q: &Point2) -> i32 {
    let n = points.len();
    let mut counter = 0;
    for i in 0..n {
        let p1 = &points[i];
        let p2 = &points[(i + 1) % n];
        if p1.y <= q.y {
            if p2.y > q.y && is_left(q, p1, p2) {
                counter += 1;
            }
        } else if p2.y <= q.y && is_left(q, p2, p1) {
            counter -= 1;
        }
    }
    counter
}

/// Crossing-number containment test for an implicitly closed polygon.
///
/// Independent of the polygon's winding direction. Points exactly on the
/// boundary may be reported either way.
#[must_use]
pub fn point_in_polygon_2d(points: &[Point2], q: &Point2) -> bool {
    winding_number_2d(points, q) != 0
}
