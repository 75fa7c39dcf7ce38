//! Classic fourth-order Runge–Kutta stepping.

use tidespin_core::OdeSystem;

/// Advances `y` in place by one RK4 step.
///
/// # Errors
///
/// Propagates any error from the derivative evaluations; `y` is unchanged on
/// error.
pub fn advance<S: OdeSystem>(
    system: &S,
    ctx: &S::Context,
    t: f64,
    dt: f64,
    y: &mut [f64],
) -> Result<(), S::Error> {
    let n = y.len();
    let half = 0.5 * dt;

    let mut k1 = vec![0.0; n];
    let mut k2 = vec![0.0; n];
    let mut k3 = vec![0.0; n];
    let mut k4 = vec![0.0; n];
    let mut stage = vec![0.0; n];

    system.derivatives(ctx, t, y, &mut k1)?;

    offset(&mut stage, y, &k1, half);
    system.derivatives(ctx, t + half, &stage, &mut k2)?;

    offset(&mut stage, y, &k2, half);
    system.derivatives(ctx, t + half, &stage, &mut k3)?;

    offset(&mut stage, y, &k3, dt);
    system.derivatives(ctx, t + dt, &stage, &mut k4)?;

    for i in 0..n {
        y[i] += dt / 6.0 * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]);
    }
    Ok(())
}

/// Writes `y + k * h` into `out`.
fn offset(out: &mut [f64], y: &[f64], k: &[f64], h: f64) {
    for ((o, yi), ki) in out.iter_mut().zip(y).zip(k) {
        *o = yi + ki * h;
    }
}
