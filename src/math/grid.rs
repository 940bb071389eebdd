/// Uniformly spaced grid over [start, stop], both endpoints included.
/// Point i is start + i*(stop - start)/(n - 1); n must be >= 2 so the
/// step is defined.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    assert!(n >= 2, "linspace needs at least 2 points");
    let step = (stop - start) / ((n - 1) as f64);
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        out.push(start + (i as f64) * step);
    }
    // i*step can land an ulp away from the endpoint; pin it exactly.
    out[n - 1] = stop;
    out
}
