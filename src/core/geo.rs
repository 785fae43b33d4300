use crate::domain::model::Coordinates;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance (haversine).
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// 顯示用：四捨五入到整數公里
pub fn format_distance(km: f64) -> String {
    format!("{} km", (km + 0.5).floor() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELHI: Coordinates = Coordinates {
        latitude: 28.6139,
        longitude: 77.2090,
    };
    const MUMBAI: Coordinates = Coordinates {
        latitude: 19.0760,
        longitude: 72.8777,
    };

    #[test]
    fn test_distance_to_self_is_zero() {
        assert_eq!(distance_km(DELHI, DELHI), 0.0);
        assert_eq!(distance_km(MUMBAI, MUMBAI), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            (DELHI, MUMBAI),
            (Coordinates::new(-33.86, 151.21), Coordinates::new(51.5, -0.12)),
            (Coordinates::new(0.0, 179.9), Coordinates::new(0.0, -179.9)),
        ];
        for (a, b) in pairs {
            let forward = distance_km(a, b);
            let backward = distance_km(b, a);
            assert!((forward - backward).abs() < 1e-9, "{} vs {}", forward, backward);
        }
    }

    #[test]
    fn test_delhi_mumbai_distance() {
        let km = distance_km(DELHI, MUMBAI);
        assert!((1140.0..1160.0).contains(&km), "got {}", km);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let km = distance_km(Coordinates::new(0.0, 0.0), Coordinates::new(1.0, 0.0));
        assert!((km - 111.195).abs() < 0.01, "got {}", km);
    }

    #[test]
    fn test_format_distance_rounds() {
        assert_eq!(format_distance(1148.49), "1148 km");
        assert_eq!(format_distance(1148.5), "1149 km");
        assert_eq!(format_distance(0.0), "0 km");
    }
}
