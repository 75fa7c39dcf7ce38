use nalgebra::Vector3;

/// Optional structural parameters attached to a body.
///
/// Presence of a parameter toggles behavior:
///
/// - `k2` with `spin` makes the body a tidal source (its bulge exerts forces).
/// - `moi` with `spin` makes the body spin-tracked (its spin evolves).
/// - `sigma` enables the dissipative lag term; absence behaves like zero.
///
/// A body with none of these set is a point mass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Structure {
    /// Potential Love number of degree 2.
    pub k2: Option<f64>,

    /// Tidal dissipation parameter.
    pub sigma: Option<f64>,

    /// Scalar moment of inertia.
    pub moi: Option<f64>,

    /// Instantaneous angular velocity vector.
    pub spin: Option<Vector3<f64>>,
}

impl Structure {
    #[must_use]
    pub fn with_k2(mut self, k2: f64) -> Self {
        self.k2 = Some(k2);
        self
    }

    #[must_use]
    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = Some(sigma);
        self
    }

    #[must_use]
    pub fn with_moi(mut self, moi: f64) -> Self {
        self.moi = Some(moi);
        self
    }

    #[must_use]
    pub fn with_spin(mut self, sx: f64, sy: f64, sz: f64) -> Self {
        self.spin = Some(Vector3::new(sx, sy, sz));
        self
    }

    /// Returns `true` if the body raises a tidal bulge (`k2` and spin set).
    #[must_use]
    pub fn is_tidal_source(&self) -> bool {
        self.k2.is_some() && self.spin.is_some()
    }

    /// Returns `true` if the body's spin is evolved (`moi` and spin set).
    #[must_use]
    pub fn is_spin_tracked(&self) -> bool {
        self.moi.is_some() && self.spin.is_some()
    }

    /// Returns the dissipation parameter, treating absence as zero.
    #[must_use]
    pub fn sigma_or_zero(&self) -> f64 {
        self.sigma.unwrap_or(0.0)
    }
}
