//! Test component factory: records the models it was asked to build.

use std::fmt;
use std::sync::Mutex;

use narrative_carousel_core::registry::{ComponentFactory, MountedComponent};

/// A mounted component that only knows its family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubComponent {
    /// Family name reported by `MountedComponent::family`.
    pub family: String,
}

impl MountedComponent for StubComponent {
    fn family(&self) -> &str {
        &self.family
    }
}

/// A factory that records every model and returns a `StubComponent`.
pub struct RecordingFactory<M> {
    family: String,
    constructed: Mutex<Vec<M>>,
}

impl<M> RecordingFactory<M> {
    /// Creates a factory for `family`.
    #[must_use]
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            constructed: Mutex::new(Vec::new()),
        }
    }
}

impl<M: Clone> RecordingFactory<M> {
    /// Returns a snapshot of all models passed to `construct`, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn constructed(&self) -> Vec<M> {
        self.constructed.lock().unwrap().clone()
    }
}

impl<M> fmt::Debug for RecordingFactory<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingFactory")
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}

impl<M: Send> ComponentFactory<M> for RecordingFactory<M> {
    fn construct(&self, model: M) -> Box<dyn MountedComponent> {
        self.constructed.lock().unwrap().push(model);
        Box::new(StubComponent {
            family: self.family.clone(),
        })
    }
}
