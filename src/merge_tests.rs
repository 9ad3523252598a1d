#[cfg(test)]
mod tests {
    use crate::editor::ZoneEditor;
    use crate::engine::{parse_wkt, Shape};
    use crate::merge::{merge_zone, split_and_hull_buff, to_geojson};
    use geo::Area;
    use geo_types::MultiPolygon;

    fn region(wkt: &str) -> MultiPolygon<f64> {
        parse_wkt(wkt).unwrap().into_region().unwrap()
    }

    #[test]
    fn test_hull_without_buffer_fills_concavity() {
        let l_shape = region("POLYGON((0 0,10 0,10 2,2 2,2 10,0 10,0 0))");
        let hull = split_and_hull_buff(&l_shape, None, 24);
        assert_eq!(hull.0.len(), 1);
        // Triangle-capped hull of the L: 100 minus the corner triangle beyond (10 2)-(2 10)
        assert!((hull.unsigned_area() - 68.0).abs() < 1e-6);
    }

    #[test]
    fn test_merge_joins_nearby_parts() {
        let parts = region(
            "MULTIPOLYGON(((0 0,0 1,1 1,1 0,0 0)),((1.004 0,1.004 1,2 1,2 0,1.004 0)))",
        );
        let merged = merge_zone(&ZoneEditor::new(), &parts, 0.0);
        assert_eq!(merged.0.len(), 1);
        assert!(merged.unsigned_area() > 2.0);
    }

    #[test]
    fn test_merge_keeps_distant_parts_apart() {
        let parts = region(
            "MULTIPOLYGON(((0 0,0 1,1 1,1 0,0 0)),((5 0,5 1,6 1,6 0,5 0)))",
        );
        let merged = merge_zone(&ZoneEditor::new(), &parts, 0.0);
        assert_eq!(merged.0.len(), 2);
    }

    #[test]
    fn test_geojson_output() {
        let square = region("POLYGON((0 0,0 1,1 1,1 0,0 0))");
        let json = to_geojson(Shape::from_region(square)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "Polygon");

        let empty = to_geojson(Shape::Empty).unwrap();
        let value: serde_json::Value = serde_json::from_str(&empty).unwrap();
        assert_eq!(value["type"], "MultiPolygon");
    }
}
