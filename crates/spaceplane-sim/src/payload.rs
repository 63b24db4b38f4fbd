//! Payload class registry and the vessel's payload bay.
//!
//! The registry is global-ish class metadata owned by the host module: it
//! is built once with `initialize`, shared read-only with every engine
//! through `Arc`, and torn down explicitly with `terminate`.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// One payload class as defined by the host's payload catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadClass {
    pub name: String,
    pub mass_kg: f64,
}

#[derive(Debug, Default)]
pub struct PayloadRegistry {
    classes: BTreeMap<String, PayloadClass>,
}

impl PayloadRegistry {
    /// Builds the shared registry. Later duplicates replace earlier ones.
    pub fn initialize(classes: impl IntoIterator<Item = PayloadClass>) -> Arc<Self> {
        let classes: BTreeMap<String, PayloadClass> = classes
            .into_iter()
            .map(|class| (class.name.clone(), class))
            .collect();
        log::info!("Payload registry initialized with {} classes", classes.len());
        Arc::new(Self { classes })
    }

    /// Releases the registry. Returns false, leaving it alive, when engines
    /// still hold references.
    pub fn terminate(registry: Arc<Self>) -> bool {
        match Arc::try_unwrap(registry) {
            Ok(registry) => {
                log::info!("Payload registry terminated ({} classes)", registry.classes.len());
                true
            }
            Err(shared) => {
                log::warn!(
                    "Payload registry still referenced by {} owners; not terminated",
                    Arc::strong_count(&shared) - 1
                );
                false
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&PayloadClass> {
        self.classes.get(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Bay slots holding payload class names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayloadBay {
    slots: Vec<Option<String>>,
}

impl PayloadBay {
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: vec![None; slot_count],
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slot(&self, index: usize) -> Option<&str> {
        self.slots.get(index)?.as_deref()
    }

    /// Returns false if the slot does not exist.
    pub fn set_slot(&mut self, index: usize, class: Option<String>) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = class;
                true
            }
            None => false,
        }
    }

    /// Total mass of loaded payload. Classes the registry does not know
    /// weigh nothing.
    pub fn mass(&self, registry: Option<&PayloadRegistry>) -> f64 {
        let Some(registry) = registry else {
            return 0.0;
        };
        self.slots
            .iter()
            .flatten()
            .filter_map(|name| registry.get(name))
            .map(|class| class.mass_kg)
            .sum()
    }
}
