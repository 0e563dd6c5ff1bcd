//! Conversion between axial hex coordinates and Cartesian world positions.
//!
//! Tiles are laid out flat-topped: `x` grows with `q`, `z` with `r` and half of `q`.

use glam::DVec2;

use crate::types::AxialCoord;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// World-space center `(x, z)` of the hex at `(q, r)`.
pub fn axial_to_cartesian(q: i32, r: i32, hex_radius: f64) -> DVec2 {
    let q = f64::from(q);
    let r = f64::from(r);
    DVec2::new(1.5 * hex_radius * q, SQRT_3 * hex_radius * (r + q / 2.0))
}

/// Axial coordinate of the hex containing `(x, z)`.
///
/// Each component of the exact inverse is rounded on its own. This is not the
/// three-way cube rounding: close to a corner the implied `s` may be off by one
/// and a neighboring hex can be returned.
pub fn cartesian_to_axial(x: f64, z: f64, hex_radius: f64) -> AxialCoord {
    let q = (2.0 / 3.0 * x) / hex_radius;
    let r = (-1.0 / 3.0 * x + SQRT_3 / 3.0 * z) / hex_radius;
    AxialCoord::new(q.round() as i32, r.round() as i32)
}

/// Cube distance between two axial coordinates.
pub fn hex_distance(a: AxialCoord, b: AxialCoord) -> i32 {
    a.distance(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn origin_maps_to_origin() {
        assert_eq!(axial_to_cartesian(0, 0, 1.0), DVec2::ZERO);
        assert_eq!(cartesian_to_axial(0.0, 0.0, 1.0), AxialCoord::ORIGIN);
    }

    #[test]
    fn axial_to_cartesian_known_values() {
        let p = axial_to_cartesian(2, 0, 1.0);
        assert!((p.x - 3.0).abs() < 1e-12);
        assert!((p.y - SQRT_3).abs() < 1e-12);

        let p = axial_to_cartesian(0, 1, 2.0);
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 2.0 * SQRT_3).abs() < 1e-12);
    }

    #[test]
    fn rounding_is_per_component() {
        // Exact inverse is q = 0.4, r = 0.4, s = -0.8. Cube rounding would
        // pick (0, 1); rounding q and r separately keeps (0, 0).
        let hit = cartesian_to_axial(0.6, 0.6 * SQRT_3, 1.0);
        assert_eq!(hit, AxialCoord::new(0, 0));
    }

    #[test]
    fn hex_distance_matches_coord_method() {
        let a = AxialCoord::new(5, -3);
        let b = AxialCoord::new(-2, 4);
        assert_eq!(hex_distance(a, b), a.distance(b));
    }

    proptest! {
        #[test]
        fn round_trip_is_exact(
            q in -100_000i32..100_000,
            r in -100_000i32..100_000,
            hex_radius in 0.01f64..1_000.0,
        ) {
            let p = axial_to_cartesian(q, r, hex_radius);
            prop_assert_eq!(cartesian_to_axial(p.x, p.y, hex_radius), AxialCoord::new(q, r));
        }
    }
}
