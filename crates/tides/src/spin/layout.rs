use std::collections::HashMap;

use tidespin_core::{Body, BodyId, Simulation};

use crate::Error;

/// Stable mapping from spin-tracked bodies to state-vector slots.
///
/// Slot `k` occupies entries `3k..3k + 3` of the state vector. Slots follow
/// the body order at the time of the scan; afterwards they are keyed by
/// [`BodyId`], so the host may reorder bodies freely.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpinLayout {
    ids: Vec<BodyId>,
}

impl SpinLayout {
    /// Scans the real bodies of `sim` for those with `moi` and spin set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateBody`] if two real bodies share an id.
    pub fn scan(sim: &Simulation) -> Result<Self, Error> {
        let bodies = sim.real_bodies();
        index_by_id(bodies)?;

        let ids = bodies
            .iter()
            .filter(|b| b.structure.is_spin_tracked())
            .map(|b| b.id)
            .collect();
        Ok(Self { ids })
    }

    /// Number of tracked bodies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Length of the state vector this layout describes.
    #[must_use]
    pub fn state_len(&self) -> usize {
        3 * self.ids.len()
    }

    #[must_use]
    pub fn ids(&self) -> &[BodyId] {
        &self.ids
    }

    /// Returns the slot assigned to `id`.
    #[must_use]
    pub fn slot_of(&self, id: BodyId) -> Option<usize> {
        self.ids.iter().position(|&slot_id| slot_id == id)
    }

    /// Checks the layout against the current simulation and a state length,
    /// returning the body index of every slot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LayoutMismatch`] if the number of tracked bodies
    /// changed or does not fit `state_len`, [`Error::DuplicateBody`] if two
    /// real bodies share an id, and [`Error::UntrackedBody`] if a slot's body
    /// is missing or no longer tracked.
    pub fn resolve(&self, sim: &Simulation, state_len: usize) -> Result<Vec<usize>, Error> {
        let bodies = sim.real_bodies();
        let tracked = bodies
            .iter()
            .filter(|b| b.structure.is_spin_tracked())
            .count();

        if tracked != self.ids.len() || 3 * tracked != state_len {
            return Err(Error::LayoutMismatch { tracked, state_len });
        }

        let index = index_by_id(bodies)?;

        self.ids
            .iter()
            .map(|&id| match index.get(&id) {
                Some(&i) if bodies[i].structure.is_spin_tracked() => Ok(i),
                _ => Err(Error::UntrackedBody { id }),
            })
            .collect()
    }
}

/// Maps each body id to its index, rejecting ids that appear twice.
fn index_by_id(bodies: &[Body]) -> Result<HashMap<BodyId, usize>, Error> {
    let mut index = HashMap::with_capacity(bodies.len());
    for (i, body) in bodies.iter().enumerate() {
        if index.insert(body.id, i).is_some() {
            return Err(Error::DuplicateBody { id: body.id });
        }
    }
    Ok(index)
}
