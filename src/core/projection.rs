//! Umrechnung zwischen geographischen Koordinaten (EPSG:4326) und
//! Web-Mercator (EPSG:3857).

use glam::DVec2;
use std::f64::consts::PI;

use super::Coordinate;

/// Äquatorradius der Web-Mercator-Sphäre in Metern.
pub const EARTH_RADIUS: f64 = 6_378_137.0;
/// Halbe Weltbreite in projizierten Einheiten.
pub const HALF_SIZE: f64 = PI * EARTH_RADIUS;
/// Breitengrad, bei dem Web-Mercator die Welt quadratisch abschneidet.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Projiziert Länge/Breite (Grad) nach Web-Mercator.
pub fn from_lon_lat(lon: f64, lat: f64) -> DVec2 {
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let x = EARTH_RADIUS * lon.to_radians();
    let y = EARTH_RADIUS * (PI / 4.0 + lat.to_radians() / 2.0).tan().ln();
    DVec2::new(x, y.clamp(-HALF_SIZE, HALF_SIZE))
}

/// Rechnet eine Web-Mercator-Position in Länge/Breite (Grad) zurück.
///
/// Rückgabe: `x` = Länge, `y` = Breite.
pub fn to_lon_lat(p: DVec2) -> DVec2 {
    let lon = (p.x / EARTH_RADIUS).to_degrees();
    let lat = (2.0 * (p.y / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees();
    DVec2::new(lon, lat)
}

/// Projiziert eine geographische Koordinate, Z bleibt unverändert.
pub fn project(c: Coordinate) -> Coordinate {
    let xy = from_lon_lat(c.x, c.y);
    Coordinate {
        x: xy.x,
        y: xy.y,
        z: c.z,
    }
}

/// Rechnet eine projizierte Koordinate zurück, Z bleibt unverändert.
pub fn unproject(c: Coordinate) -> Coordinate {
    let ll = to_lon_lat(c.xy());
    Coordinate {
        x: ll.x,
        y: ll.y,
        z: c.z,
    }
}

/// Grad nach Bogenmaß.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Maßstabsfaktor der Mercator-Projektion an einer projizierten Position.
///
/// Meter am Boden × Faktor = projizierte Einheiten.
pub fn scale_factor_at(p: DVec2) -> f64 {
    let lat = to_lon_lat(p).y.to_radians();
    1.0 / lat.cos().max(1e-9)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_origin_maps_to_origin() {
        let p = from_lon_lat(0.0, 0.0);
        assert_relative_eq!(p.x, 0.0);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_dateline_is_half_size() {
        let p = from_lon_lat(180.0, 0.0);
        assert_relative_eq!(p.x, HALF_SIZE, epsilon = 1e-6);
    }

    #[test]
    fn test_round_trip_osaka() {
        let p = from_lon_lat(135.5, 34.5);
        let back = to_lon_lat(p);
        assert_relative_eq!(back.x, 135.5, epsilon = 1e-9);
        assert_relative_eq!(back.y, 34.5, epsilon = 1e-9);
    }

    #[test]
    fn test_known_value() {
        // Referenzwert aus EPSG:3857
        let p = from_lon_lat(135.0, 35.0);
        assert_relative_eq!(p.x, 15_028_131.257_091_936, epsilon = 1e-3);
        assert_relative_eq!(p.y, 4_163_881.144_064_293, epsilon = 1e-3);
    }

    #[test]
    fn test_project_keeps_z() {
        let c = project(Coordinate::with_z(10.0, 20.0, 42.0));
        assert_eq!(c.z, Some(42.0));
        let c = unproject(c);
        assert_relative_eq!(c.x, 10.0, epsilon = 1e-9);
        assert_eq!(c.z, Some(42.0));
    }

    #[test]
    fn test_polar_latitude_is_clamped() {
        let p = from_lon_lat(0.0, 90.0);
        assert!(p.y.is_finite());
        assert_relative_eq!(p.y, HALF_SIZE, epsilon = 1e-3);
    }
}
