#[cfg(test)]
mod tests {
    use crate::cleaner::{
        build_polygon, close_ring, muff, muff_polygon, remove_concat_holes, remove_smaller_polygons,
    };
    use crate::engine::{buffer_line, parse_wkt};
    use geo::Area;
    use geo_types::{LineString, MultiPolygon, Polygon};

    fn region(wkt: &str) -> MultiPolygon<f64> {
        parse_wkt(wkt).unwrap().into_region().unwrap()
    }

    const DONUT: &str = "POLYGON((0 0,0 10,10 10,10 0,0 0),(2 2,2 4,4 4,4 2,2 2),(6 6,6 8,8 8,8 6,6 6))";

    #[test]
    fn test_muff_polygon_drops_all_holes() {
        let donut = region(DONUT).0.remove(0);
        assert_eq!(donut.interiors().len(), 2);

        let muffed = muff_polygon(&donut);
        assert!(muffed.interiors().is_empty());
        assert!((muffed.unsigned_area() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_muff_disjoint_components() {
        let two = region(
            "MULTIPOLYGON(((0 0,0 10,10 10,10 0,0 0),(2 2,2 4,4 4,4 2,2 2)),\
             ((20 0,20 10,30 10,30 0,20 0),(22 2,22 4,24 4,24 2,22 2)))",
        );
        let muffed = muff(&two);
        assert_eq!(muffed.0.len(), 2);
        assert!(muffed.0.iter().all(|p| p.interiors().is_empty()));
        assert!((muffed.unsigned_area() - 200.0).abs() < 1e-6);
    }

    #[test]
    fn test_muff_overlapping_components_merge() {
        let overlapping = region(
            "MULTIPOLYGON(((0 0,0 10,10 10,10 0,0 0)),((5 0,5 10,15 10,15 0,5 0)))",
        );
        let muffed = muff(&overlapping);
        assert_eq!(muffed.0.len(), 1);
        assert!((muffed.unsigned_area() - 150.0).abs() < 1e-6);
    }

    #[test]
    fn test_muff_fills_hole_enclosed_by_union() {
        // Two U-shapes whose union encloses the square (4 4,6 6)
        let rings = region(
            "MULTIPOLYGON(((0 0,10 0,10 4,4 4,4 6,10 6,10 10,0 10,0 0)),\
             ((5 3,12 3,12 7,5 7,5 6,6 6,6 4,5 4,5 3)))",
        );
        let muffed = muff(&rings);
        assert_eq!(muffed.0.len(), 1);
        assert!(muffed.0[0].interiors().is_empty());
    }

    #[test]
    fn test_remove_smaller_polygons_keeps_largest_piece() {
        let square = region("POLYGON((0 0,0 10,10 10,10 0,0 0))");
        let corridor = buffer_line(&LineString::from(vec![(8.0, -1.0), (8.0, 11.0)]), 0.1, 1);

        let kept = remove_smaller_polygons(&square, &corridor);
        assert_eq!(kept.0.len(), 1);
        let area = kept.unsigned_area();
        assert!(area > 78.5 && area < 79.1, "unexpected area {}", area);
    }

    #[test]
    fn test_remove_smaller_polygons_one_region_per_part() {
        let two = region("MULTIPOLYGON(((0 0,0 10,10 10,10 0,0 0)),((20 0,20 10,30 10,30 0,20 0)))");
        let corridor = buffer_line(&LineString::from(vec![(-1.0, 8.0), (31.0, 8.0)]), 0.1, 1);

        let kept = remove_smaller_polygons(&two, &corridor);
        assert_eq!(kept.0.len(), 2);
        for part in &kept.0 {
            let area = part.unsigned_area();
            assert!(area > 78.5 && area < 79.1, "unexpected area {}", area);
        }
    }

    #[test]
    fn test_build_polygon_closes_open_points() {
        let line = LineString::from(vec![(0.0, 0.0), (4.0, 0.0), (4.0, 3.0)]);
        let poly = build_polygon(&line, 3);
        let ring = &poly.exterior().0;
        assert_eq!(ring.len(), 4);
        assert_eq!(ring.first(), ring.last());
        assert!((poly.unsigned_area() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_close_ring_keeps_closed_sequence() {
        let line = LineString::from(vec![(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 0.0)]);
        assert_eq!(close_ring(&line, 4).0.len(), 4);
        // Taking a prefix reopens the sequence
        assert_eq!(close_ring(&line, 3).0.len(), 4);
    }

    #[test]
    fn test_remove_concat_holes_is_selective() {
        let donut: Polygon<f64> = region(DONUT).0.remove(0);
        let corridor = buffer_line(&LineString::from(vec![(1.0, 3.0), (5.0, 3.0)]), 0.1, 1);

        let cleaned = remove_concat_holes(donut, &corridor);
        assert_eq!(cleaned.interiors().len(), 1);
        assert_eq!(cleaned.interiors()[0].0[0].x, 6.0);
    }
}
