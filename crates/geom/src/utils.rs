use crate::scalar::{Float, Scalar};

#[inline]
pub fn min_max<S: Float>(a: S, b: S) -> (S, S) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Returns the smallest and largest of four values.
#[inline]
pub fn min_max4<S: Float>(a: S, b: S, c: S, d: S) -> (S, S) {
    let (min1, max1) = min_max(a, b);
    let (min2, max2) = min_max(c, d);

    (S::min(min1, min2), S::max(max1, max2))
}

/// The four cubic Bernstein weights at t, in order `[b0, b1, b2, b3]`.
///
/// `b0` weighs the start point, `b1` the first control point, `b2` the second
/// control point and `b3` the end point. The weights always sum to one.
#[inline]
pub fn cubic_bernstein_weights<S: Scalar>(t: S) -> [S; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    let one_t = S::ONE - t;
    let one_t2 = one_t * one_t;
    let one_t3 = one_t2 * one_t;

    [one_t3, S::THREE * t * one_t2, S::THREE * t2 * one_t, t3]
}

#[test]
fn bernstein_weights_sum_to_one() {
    for i in -10..=20 {
        let t = i as f32 / 10.0;
        let [b0, b1, b2, b3] = cubic_bernstein_weights(t);
        let sum = b0 + b1 + b2 + b3;
        assert!((sum - 1.0).abs() < 1e-4, "t = {t}, sum = {sum}");
    }
}

#[test]
fn bernstein_weights_at_midpoint() {
    assert_eq!(cubic_bernstein_weights(0.5f32), [0.125, 0.375, 0.375, 0.125]);
}

#[test]
fn bernstein_weights_at_endpoints() {
    assert_eq!(cubic_bernstein_weights(0.0f64), [1.0, 0.0, 0.0, 0.0]);
    assert_eq!(cubic_bernstein_weights(1.0f64), [0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn min_max_ordering() {
    assert_eq!(min_max(3.0f32, -1.0), (-1.0, 3.0));
    assert_eq!(min_max4(2.0f32, -4.0, 7.0, 0.5), (-4.0, 7.0));
}
