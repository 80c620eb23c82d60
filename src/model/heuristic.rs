use std::collections::BTreeMap;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two (lat, lon) pairs in degrees,
/// in kilometers.
pub fn haversine_km((lat1_deg, lon1_deg): (f64, f64), (lat2_deg, lon2_deg): (f64, f64)) -> f64 {
    let lat1 = lat1_deg.to_radians();
    let lat2 = lat2_deg.to_radians();
    let dlat_sin = ((lat2 - lat1) / 2.0).sin();
    let dlon_sin = ((lon2_deg - lon1_deg).to_radians() / 2.0).sin();
    let a = dlat_sin.powi(2) + lat1.cos() * lat2.cos() * dlon_sin.powi(2);
    let c = 2.0 * a.sqrt().asin();
    EARTH_RADIUS_KM * c
}

/// node code -> (lat, lon) in degrees
#[derive(Clone, Default)]
pub struct CoordinateTable {
    coordinates: BTreeMap<String, (f64, f64)>,
}

impl CoordinateTable {
    pub fn new() -> CoordinateTable {
        CoordinateTable { coordinates: BTreeMap::new() }
    }

    pub fn insert(&mut self, node: &str, lat: f64, lon: f64) {
        self.coordinates.insert(node.to_string(), (lat, lon));
    }

    pub fn get(&self, node: &str) -> Option<(f64, f64)> {
        self.coordinates.get(node).copied()
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }
}

/// Straight-line distance estimate used by the informed searches.
/// Edge weights are themselves great-circle distances between the edge
/// endpoints, so this estimate never exceeds the remaining route cost.
pub struct HaversineHeuristic {
    coordinates: CoordinateTable,
}

impl HaversineHeuristic {
    pub fn new(coordinates: CoordinateTable) -> HaversineHeuristic {
        HaversineHeuristic { coordinates }
    }

    /// Estimated distance in km between two nodes. Nodes without known
    /// coordinates estimate as 0, which keeps the search correct and
    /// merely uninformed.
    pub fn estimate(&self, a: &str, b: &str) -> f64 {
        match (self.coordinates.get(a), self.coordinates.get(b)) {
            (Some(from), Some(to)) => haversine_km(from, to),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haversine_zero_for_identical_points() {
        assert_eq!(haversine_km((12.5, -70.0), (12.5, -70.0)), 0.0);
    }

    #[test]
    fn haversine_quarter_circumference() {
        // pole to equator is a quarter of a great circle
        let d = haversine_km((90.0, 0.0), (0.0, 0.0));
        let expected = std::f64::consts::PI * 6371.0 / 2.0;
        assert!((d - expected).abs() < 0.5, "got {}", d);
    }

    #[test]
    fn haversine_is_symmetric() {
        let gru = (-23.4356, -46.4731);
        let hnd = (35.5494, 139.7798);
        let there = haversine_km(gru, hnd);
        let back = haversine_km(hnd, gru);
        assert!((there - back).abs() < 1e-9);
        // Sao Paulo to Tokyo is a little over 18500 km
        assert!(there > 18_000.0 && there < 19_000.0, "got {}", there);
    }

    #[test]
    fn estimate_falls_back_to_zero_without_coordinates() {
        let mut table = CoordinateTable::new();
        table.insert("GRU", -23.4356, -46.4731);
        let heuristic = HaversineHeuristic::new(table);
        assert_eq!(heuristic.estimate("GRU", "XXX"), 0.0);
        assert_eq!(heuristic.estimate("XXX", "GRU"), 0.0);
    }

    #[test]
    fn estimate_matches_raw_formula() {
        let mut table = CoordinateTable::new();
        table.insert("GRU", -23.4356, -46.4731);
        table.insert("GIG", -22.8100, -43.2506);
        let heuristic = HaversineHeuristic::new(table);
        let direct = haversine_km((-23.4356, -46.4731), (-22.8100, -43.2506));
        assert!((heuristic.estimate("GRU", "GIG") - direct).abs() < 1e-9);
    }
}
