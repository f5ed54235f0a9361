//! Explicit host context handed to a carousel at construction.

use std::fmt;
use std::sync::Arc;

use narrative_carousel_core::clock::Clock;
use narrative_carousel_core::config::{HostConfig, ViewportCategory};
use narrative_carousel_core::detail::DetailPresenter;
use narrative_carousel_core::focus::FocusManager;
use narrative_carousel_core::notifier::Notifier;
use narrative_carousel_core::registry::ComponentRegistry;

use super::mode_switch::AlternateFamilyModel;

/// Registry of component families a carousel can hand off to.
pub type FamilyRegistry = ComponentRegistry<AlternateFamilyModel>;

/// Everything a carousel needs from its host.
#[derive(Clone)]
pub struct HostContext {
    /// Viewport category at construction time.
    pub viewport: ViewportCategory,
    /// Global host flags.
    pub config: HostConfig,
    /// Accessible focus capability.
    pub focus: Arc<dyn FocusManager>,
    /// Receiver of emitted events.
    pub notifier: Arc<dyn Notifier>,
    /// Popup capability.
    pub detail: Arc<dyn DetailPresenter>,
    /// Component families available for handoff.
    pub registry: Arc<FamilyRegistry>,
    /// Time source for event timestamps.
    pub clock: Arc<dyn Clock>,
}

impl fmt::Debug for HostContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostContext")
            .field("viewport", &self.viewport)
            .field("config", &self.config)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
