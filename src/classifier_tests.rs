#[cfg(test)]
mod tests {
    use crate::classifier::{classify, LineCase};
    use crate::engine::parse_wkt;
    use crate::error::ZoneEditError;
    use geo_types::{LineString, MultiPolygon};

    fn region(wkt: &str) -> MultiPolygon<f64> {
        parse_wkt(wkt).unwrap().into_region().unwrap()
    }

    fn line(wkt: &str) -> LineString<f64> {
        parse_wkt(wkt).unwrap().into_line().unwrap()
    }

    const SQUARE: &str = "POLYGON((0 0,0 10,10 10,10 0,0 0))";

    #[test]
    fn test_not_enough_points() {
        let short = LineString::from(vec![(1.0, 1.0)]);
        assert_eq!(
            classify(&region(SQUARE), &short),
            Err(ZoneEditError::NotEnoughLinePoints(1))
        );
    }

    #[test]
    fn test_no_intersection() {
        let case = classify(&region(SQUARE), &line("LINESTRING(20 20,30 30)")).unwrap();
        assert_eq!(case, LineCase::NoIntersection);
    }

    #[test]
    fn test_crossing_corner() {
        let case = classify(
            &region("POLYGON((0 0,0 2,2 2,2 0,0 0))"),
            &line("LINESTRING(0 3,3 0)"),
        )
        .unwrap();
        assert_eq!(case, LineCase::Crossing);
    }

    #[test]
    fn test_spanning_inside_and_on_boundary() {
        let inside = classify(&region(SQUARE), &line("LINESTRING(2 2,8 8)")).unwrap();
        assert_eq!(inside, LineCase::Spanning);

        let outward = classify(&region(SQUARE), &line("LINESTRING(10 2,13 5,10 8)")).unwrap();
        assert_eq!(outward, LineCase::Spanning);
    }

    #[test]
    fn test_ring_line_is_spanning() {
        let case = classify(&region(SQUARE), &line("LINESTRING(5 5,15 5,15 15,5 5)")).unwrap();
        assert_eq!(case, LineCase::Spanning);
    }

    #[test]
    fn test_one_end_inside_is_invalid() {
        let case = classify(&region(SQUARE), &line("LINESTRING(5 5,15 5)")).unwrap();
        assert_eq!(case, LineCase::Invalid);
    }

    #[test]
    fn test_spanning_between_components() {
        let two = region("MULTIPOLYGON(((0 0,0 10,10 10,10 0,0 0)),((20 0,20 10,30 10,30 0,20 0)))");
        let case = classify(&two, &line("LINESTRING(5 5,25 5)")).unwrap();
        assert_eq!(case, LineCase::Spanning);
    }
}
