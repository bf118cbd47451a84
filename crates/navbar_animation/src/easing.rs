//! Easing functions for animations

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    /// Quadratic deceleration, `1 - (1 - t)^2`
    Decelerate,
    /// Material "linear out, slow in" curve used for show/hide motion
    LinearOutSlowIn,
    EaseOut,
    EaseInOut,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::LinearOutSlowIn => cubic_bezier_ease(t, 0.0, 0.0, 0.2, 1.0),
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier_ease(t, *x1, *y1, *x2, *y2),
        }
    }
}

/// Cubic bezier easing through (0,0), (x1,y1), (x2,y2), (1,1).
///
/// Newton-Raphson on the x polynomial, bisection when the slope flattens.
fn cubic_bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let target = t as f64;
    let (x1, y1, x2, y2) = (x1 as f64, y1 as f64, x2 as f64, y2 as f64);

    let mut p = target;
    for _ in 0..8 {
        let err = bezier_sample(p, x1, x2) - target;
        if err.abs() < 1e-7 {
            return bezier_sample(p, y1, y2) as f32;
        }
        let slope = bezier_slope(p, x1, x2);
        if slope.abs() < 1e-7 {
            break;
        }
        p -= err / slope;
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    p = target;
    for _ in 0..20 {
        let x = bezier_sample(p, x1, x2);
        if (x - target).abs() < 1e-7 {
            break;
        }
        if x < target {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }

    bezier_sample(p, y1, y2) as f32
}

#[inline]
fn bezier_sample(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

#[inline]
fn bezier_slope(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    (3.0 * a * t + 2.0 * b) * t + c
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::Decelerate,
        Easing::LinearOutSlowIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ];

    #[test]
    fn test_endpoints_are_exact() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?}");
        }
    }

    #[test]
    fn test_decelerating_curves_lead_linear() {
        for easing in [Easing::Decelerate, Easing::LinearOutSlowIn, Easing::EaseOut] {
            assert!(easing.apply(0.3) > 0.3, "{easing:?}");
        }
        assert_eq!(Easing::Decelerate.apply(0.5), 0.75);
    }

    #[test]
    fn test_monotonic() {
        for easing in ALL {
            let mut last = 0.0;
            for step in 1..=20 {
                let value = easing.apply(step as f32 / 20.0);
                assert!(value + 1e-5 >= last, "{easing:?} at step {step}");
                last = value;
            }
        }
    }
}
