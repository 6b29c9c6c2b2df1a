use super::Point2;

/// Computes the centroid of a vertex set as the arithmetic mean of the
/// coordinates (unweighted by edge length or area).
///
/// Returns the origin for an empty slice; callers that care should reject
/// empty input before asking for a centroid.
#[must_use]
pub fn centroid(points: &[Point2]) -> Point2 {
    if points.is_empty() {
        return Point2::origin();
    }
    let mut cx = 0.0;
    let mut cy = 0.0;
    for pt in points {
        cx += pt.x;
        cy += pt.y;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    Point2::new(cx / n, cy / n)
}
