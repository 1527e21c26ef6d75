//! Simulation registry and dispatcher
//!
//! The registry is built once at startup from the static catalog and never
//! mutated afterwards. Dispatching an id that is not in the table is a
//! silent no-op: nothing is rendered and nothing fails.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::catalog;
use crate::context::UnitContext;
use crate::equations_ui::Equation;

/// Stable 1-based identifier of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VisualizationId(pub u32);

impl VisualizationId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for VisualizationId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for VisualizationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One catalog entry: display metadata plus the routine that renders it
#[derive(Clone, Copy)]
pub struct Simulation {
    pub title: &'static str,
    pub equations: &'static [Equation],
    pub variables: &'static [(&'static str, &'static str)],
    pub run: fn(&mut UnitContext<'_>),
}

impl Simulation {
    /// Render the heading for `id` followed by the simulation body
    pub fn invoke(&self, id: VisualizationId, ctx: &mut UnitContext<'_>) {
        ctx.heading(&format!("Simulation {}: {}", id, self.title));
        (self.run)(ctx);
    }
}

impl fmt::Debug for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulation")
            .field("title", &self.title)
            .field("equations", &self.equations.len())
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("simulation ids start at 1, got 0")]
    ZeroId,
    #[error("simulation id {0} registered twice")]
    Duplicate(VisualizationId),
    #[error("simulation ids must be contiguous, {0} is missing")]
    Gap(VisualizationId),
}

/// Read-only id → simulation table
#[derive(Debug, Clone)]
pub struct Registry {
    entries: BTreeMap<VisualizationId, Simulation>,
}

impl Registry {
    /// The built-in catalog, numbered 1..=N in catalog order
    pub fn standard() -> Self {
        let entries = catalog::CATALOG
            .iter()
            .enumerate()
            .map(|(i, sim)| (VisualizationId(i as u32 + 1), *sim))
            .collect();
        Self { entries }
    }

    /// Build from explicit pairs. Ids must cover exactly `1..=N`.
    pub fn from_entries<I, K>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (K, Simulation)>,
        K: Into<VisualizationId>,
    {
        let mut map = BTreeMap::new();
        for (id, sim) in entries {
            let id = id.into();
            if id.0 == 0 {
                return Err(RegistryError::ZeroId);
            }
            if map.insert(id, sim).is_some() {
                return Err(RegistryError::Duplicate(id));
            }
        }

        // keys are sorted, so the first mismatch is the first gap
        for (expected, id) in (1u32..).zip(map.keys()) {
            if id.0 != expected {
                return Err(RegistryError::Gap(VisualizationId(expected)));
            }
        }

        Ok(Self { entries: map })
    }

    /// All valid ids in ascending order
    pub fn identifiers(&self) -> Vec<VisualizationId> {
        self.entries.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: impl Into<VisualizationId>) -> bool {
        self.entries.contains_key(&id.into())
    }

    pub fn get(&self, id: impl Into<VisualizationId>) -> Option<&Simulation> {
        self.entries.get(&id.into())
    }

    pub fn title(&self, id: impl Into<VisualizationId>) -> Option<&'static str> {
        self.get(id).map(|sim| sim.title)
    }

    /// Run the simulation bound to `id` once, or do nothing if none is
    pub fn dispatch(&self, id: impl Into<VisualizationId>, ctx: &mut UnitContext<'_>) {
        let id = id.into();
        match self.entries.get(&id) {
            Some(sim) => {
                log::debug!("Dispatching simulation {}: {}", id, sim.title);
                sim.invoke(id, ctx);
            }
            None => log::trace!("No simulation bound to id {}", id),
        }
    }
}
