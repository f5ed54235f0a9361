//! Shared test fakes and utilities for the narrative carousel.

mod clock;
mod detail;
mod focus;
mod notifier;
mod registry;

pub use clock::FixedClock;
pub use detail::RecordingDetailPresenter;
pub use focus::RecordingFocusManager;
pub use notifier::{RecordedEvent, RecordingNotifier};
pub use registry::{RecordingFactory, StubComponent};
