//! Small vector helpers on top of `glam`.

use glam::Vec2;

/// Unit-length direction ("versor") of `v`.
///
/// A zero-length (or non-finite) input maps to the zero vector instead of
/// producing NaNs, so an idle object simply does not move.
pub fn versor(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}

/// Fold an unbounded coordinate into `[0, extent]` as a triangle wave of
/// period `2 * extent`.
///
/// Equivalent to bouncing a point between two parallel walls at `0` and
/// `extent` any number of times.
pub fn fold_into(value: f32, extent: f32) -> f32 {
    let period = 2.0 * extent;
    let wrapped = value.rem_euclid(period);

    if wrapped <= extent {
        wrapped
    } else {
        period - wrapped
    }
}

/// +1.0 or -1.0; zero counts as negative
pub fn heading(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else {
        -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_versor_has_unit_length() {
        let samples = [
            Vec2::new(3.0, 4.0),
            Vec2::new(-1.0, 0.5),
            Vec2::new(0.0, -250.0),
            Vec2::new(1e-3, 1e-3),
            Vec2::new(1.0, 1.07),
        ];
        for v in samples {
            let n = versor(v);
            assert!(
                (n.length() - 1.0).abs() < 1e-5,
                "versor({v:?}) should be unit length, got {}",
                n.length()
            );
        }
    }

    #[test]
    fn test_versor_of_zero_is_zero() {
        assert_eq!(versor(Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn test_fold_inside_range_is_identity() {
        assert_eq!(fold_into(0.0, 450.0), 0.0);
        assert_eq!(fold_into(400.0, 450.0), 400.0);
        assert_eq!(fold_into(450.0, 450.0), 450.0);
    }

    #[test]
    fn test_fold_reflects_past_the_walls() {
        // One bounce off the bottom wall
        assert!((fold_into(500.0, 450.0) - 400.0).abs() < 1e-4);
        // One bounce off the top wall
        assert!((fold_into(-100.0, 450.0) - 100.0).abs() < 1e-4);
        // Two bounces land back on the starting lane
        assert!((fold_into(1000.0, 450.0) - 100.0).abs() < 1e-4);
        assert!((fold_into(-1000.0, 450.0) - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_heading() {
        assert_eq!(heading(0.3), 1.0);
        assert_eq!(heading(-2.0), -1.0);
        assert_eq!(heading(0.0), -1.0);
    }
}
