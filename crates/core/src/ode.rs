/// Defines an ODE that a stepper can advance alongside a host simulation.
///
/// The host owns the authoritative copy of the state between steps (for
/// example, inside its bodies). The ODE's own state buffer is authoritative
/// only while a step is in progress. A stepper therefore:
///
/// 1. calls [`pre_step`] to pull the state out of the context,
/// 2. calls [`derivatives`] as many times as its method needs,
/// 3. calls [`post_step`] to push the advanced state back.
///
/// The context is passed explicitly to every call; an `OdeSystem` never holds
/// a reference back into the simulation.
///
/// [`pre_step`]: OdeSystem::pre_step
/// [`derivatives`]: OdeSystem::derivatives
/// [`post_step`]: OdeSystem::post_step
pub trait OdeSystem {
    type Context;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fills `y_dot` with the time derivative of `y` at time `t`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be computed, including
    /// when `y` does not match the layout the system was built for.
    fn derivatives(
        &self,
        ctx: &Self::Context,
        t: f64,
        y: &[f64],
        y_dot: &mut [f64],
    ) -> Result<(), Self::Error>;

    /// Copies the authoritative state from the context into `y`.
    ///
    /// The default implementation leaves `y` unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the context no longer matches the layout.
    fn pre_step(&self, _ctx: &Self::Context, _y: &mut [f64]) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Copies the advanced state `y` back into the context.
    ///
    /// The default implementation leaves the context unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the context no longer matches the layout.
    fn post_step(&self, _ctx: &mut Self::Context, _y: &[f64]) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A registered ODE: a system plus its declared length and state buffer.
#[derive(Debug, Clone)]
pub struct Ode<S> {
    system: S,
    length: usize,
    y: Vec<f64>,
}

impl<S: OdeSystem> Ode<S> {
    /// Creates an ODE with a zeroed state buffer of `length` entries.
    pub fn new(system: S, length: usize) -> Self {
        Self {
            system,
            length,
            y: vec![0.0; length],
        }
    }

    /// Declared number of state entries.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn system(&self) -> &S {
        &self.system
    }

    #[must_use]
    pub fn state(&self) -> &[f64] {
        &self.y
    }

    pub fn state_mut(&mut self) -> &mut [f64] {
        &mut self.y
    }

    /// Splits the ODE into its system and a mutable view of its state.
    pub fn parts_mut(&mut self) -> (&S, &mut [f64]) {
        (&self.system, &mut self.y)
    }

    /// Pulls the authoritative state from the context into the buffer.
    ///
    /// # Errors
    ///
    /// Propagates the system's error.
    pub fn sync_pre(&mut self, ctx: &S::Context) -> Result<(), S::Error> {
        self.system.pre_step(ctx, &mut self.y)
    }

    /// Pushes the buffer back into the context.
    ///
    /// # Errors
    ///
    /// Propagates the system's error.
    pub fn sync_post(&self, ctx: &mut S::Context) -> Result<(), S::Error> {
        self.system.post_step(ctx, &self.y)
    }

    /// Evaluates the derivative of `y` at time `t` into `y_dot`.
    ///
    /// # Errors
    ///
    /// Propagates the system's error.
    pub fn derivatives(
        &self,
        ctx: &S::Context,
        t: f64,
        y: &[f64],
        y_dot: &mut [f64],
    ) -> Result<(), S::Error> {
        self.system.derivatives(ctx, t, y, y_dot)
    }
}
