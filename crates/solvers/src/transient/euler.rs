//! Forward Euler stepping:
//!
//! ```text
//! y_{n+1} = y_n + f(t_n, y_n) * dt
//! ```

use tidespin_core::OdeSystem;

/// Advances `y` in place by one forward Euler step.
///
/// # Errors
///
/// Propagates any error from the derivative evaluation; `y` is unchanged on
/// error.
pub fn advance<S: OdeSystem>(
    system: &S,
    ctx: &S::Context,
    t: f64,
    dt: f64,
    y: &mut [f64],
) -> Result<(), S::Error> {
    let mut y_dot = vec![0.0; y.len()];
    system.derivatives(ctx, t, y, &mut y_dot)?;

    for (yi, di) in y.iter_mut().zip(&y_dot) {
        *yi += di * dt;
    }
    Ok(())
}
