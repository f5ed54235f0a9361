//! Port implementations backed by `tracing`.
//!
//! A headless host has no document to focus or popups to open, so each port
//! records what it was asked to do as a structured log line.

use narrative_carousel::domain::mode_switch::AlternateFamilyModel;
use narrative_carousel_core::detail::{DetailContent, DetailPresenter};
use narrative_carousel_core::event::DomainEvent;
use narrative_carousel_core::focus::{FocusManager, FocusOptions, FocusTarget};
use narrative_carousel_core::notifier::Notifier;
use narrative_carousel_core::registry::{ComponentFactory, MountedComponent};
use tracing::info;

/// Logs focus requests.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingFocusManager;

impl FocusManager for TracingFocusManager {
    fn focus_first(&self, target: FocusTarget, options: FocusOptions) {
        info!(?target, defer = options.defer, "focus requested");
    }
}

/// Logs every published event with its payload.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn publish(&self, event: &dyn DomainEvent) {
        let metadata = event.metadata();
        info!(
            event_type = event.event_type(),
            event_id = %metadata.event_id,
            source_id = %metadata.source_id,
            sequence_number = metadata.sequence_number,
            correlation_id = %metadata.correlation_id,
            payload = %event.to_payload(),
            "event published"
        );
    }
}

/// Logs popup requests.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDetailPresenter;

impl DetailPresenter for TracingDetailPresenter {
    fn open_detail(&self, content: DetailContent) {
        info!(title = %content.title, "detail popup opened");
    }
}

/// A replacement component mounted by the replay driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayComponent {
    /// Family the component was constructed as.
    pub family: String,
    /// Model the component was constructed from.
    pub model: AlternateFamilyModel,
}

impl MountedComponent for ReplayComponent {
    fn family(&self) -> &str {
        &self.family
    }
}

/// Factory for one registered family; builds a `ReplayComponent`.
#[derive(Debug, Clone)]
pub struct ReplayFactory {
    family: String,
}

impl ReplayFactory {
    /// Creates a factory for `family`.
    #[must_use]
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
        }
    }
}

impl ComponentFactory<AlternateFamilyModel> for ReplayFactory {
    fn construct(&self, model: AlternateFamilyModel) -> Box<dyn MountedComponent> {
        info!(family = %self.family, slot_id = %model.slot_id, "component constructed");
        Box::new(ReplayComponent {
            family: self.family.clone(),
            model,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_factory_builds_component_of_its_family() {
        // Arrange
        let factory = ReplayFactory::new("hotgraphic");
        let model = AlternateFamilyModel {
            slot_id: "c-05".into(),
            component: "hotgraphic".into(),
            title: "Title".into(),
            body: "Body".into(),
            instruction: "Select a hotspot".into(),
            is_popup_open: false,
            items: Vec::new(),
        };

        // Act
        let component = factory.construct(model);

        // Assert
        assert_eq!(component.family(), "hotgraphic");
    }
}
