//! Scripted replay: drives one carousel through a sequence of host inputs and
//! records the view model after each step.

use std::sync::Arc;

use narrative_carousel::application::command_handlers::{CommandOutcome, handle_command};
use narrative_carousel::application::query_handlers::{CarouselView, carousel_view};
use narrative_carousel::domain::carousel::NarrativeCarousel;
use narrative_carousel::domain::commands::{CarouselCommand, CarouselInput};
use narrative_carousel::domain::config::{NARRATIVE_FAMILY, NarrativeConfig};
use narrative_carousel::domain::context::{FamilyRegistry, HostContext};
use narrative_carousel_core::clock::SystemClock;
use narrative_carousel_core::config::{HostConfig, ViewportCategory};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::adapters::{
    ReplayFactory, TracingDetailPresenter, TracingFocusManager, TracingNotifier,
};
use crate::error::AppError;

/// Steps that only the driver understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ControlStep {
    /// Report the currently pending transition as finished.
    CompleteTransition,
}

/// One step of a replay script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptStep {
    /// A host input forwarded to the carousel.
    Input(CarouselInput),
    /// A driver control step.
    Control(ControlStep),
}

impl ScriptStep {
    fn step_type(&self) -> &'static str {
        match self {
            Self::Input(input) => input.input_type(),
            Self::Control(ControlStep::CompleteTransition) => "complete_transition",
        }
    }
}

/// A replay script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Viewport category at mount time.
    #[serde(default)]
    pub viewport: ViewportCategory,
    /// Global host flags.
    #[serde(default)]
    pub host: HostConfig,
    /// Component families registered for handoff.
    #[serde(default)]
    pub families: Vec<String>,
    /// Steps applied in order.
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

/// How a step ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepStatus {
    /// The carousel applied the input.
    Applied,
    /// The carousel ignored the input.
    Ignored,
    /// The carousel handed its slot to another family.
    HandedOff {
        /// Family of the replacement.
        family: String,
    },
    /// The carousel rejected the input and is unchanged.
    Rejected {
        /// Why the input was rejected.
        reason: String,
    },
}

/// Record of one applied step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    /// Zero-based step number.
    pub step: usize,
    /// Type name of the step.
    pub step_type: &'static str,
    /// How the step ended.
    pub status: StepStatus,
    /// View model after the step.
    pub view: CarouselView,
}

/// Full replay output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    /// The replayed carousel's identifier.
    pub carousel_id: Uuid,
    /// One record per executed step.
    pub steps: Vec<StepRecord>,
    /// Family that took over the slot, if the replay ended in a handoff.
    pub handed_off_to: Option<String>,
}

/// Builds the host context a replay runs against.
#[must_use]
pub fn replay_context(script: &Script) -> HostContext {
    let mut registry = FamilyRegistry::new();
    for family in &script.families {
        registry.register(family.clone(), Arc::new(ReplayFactory::new(family.clone())));
    }
    HostContext {
        viewport: script.viewport,
        config: script.host,
        focus: Arc::new(TracingFocusManager),
        notifier: Arc::new(TracingNotifier),
        detail: Arc::new(TracingDetailPresenter),
        registry: Arc::new(registry),
        clock: Arc::new(SystemClock),
    }
}

/// Mounts a carousel from `config` and applies every step of `script`.
///
/// Stops early when the carousel hands off, since nothing remains mounted to
/// receive further input.
///
/// # Errors
///
/// Returns `AppError::Config` if `config` belongs to another component family.
pub fn run_replay(config: NarrativeConfig, script: &Script) -> Result<ReplayReport, AppError> {
    if config.component != NARRATIVE_FAMILY {
        return Err(AppError::Config(format!(
            "component `{}` is `{}`, expected `{NARRATIVE_FAMILY}`",
            config.id, config.component
        )));
    }
    let carousel = NarrativeCarousel::new(Uuid::new_v4(), config, replay_context(script));
    Ok(replay_steps(carousel, &script.steps))
}

/// Applies `steps` to an already-mounted `carousel`.
#[must_use]
#[instrument(skip_all, fields(carousel_id = %carousel.id, steps = steps.len()))]
pub fn replay_steps(mut carousel: NarrativeCarousel, steps: &[ScriptStep]) -> ReplayReport {
    let mut report = ReplayReport {
        carousel_id: carousel.id,
        steps: Vec::with_capacity(steps.len()),
        handed_off_to: None,
    };

    for (step, script_step) in steps.iter().enumerate() {
        let status = apply_step(&mut carousel, *script_step);
        if let StepStatus::HandedOff { family } = &status {
            report.handed_off_to = Some(family.clone());
        }
        report.steps.push(StepRecord {
            step,
            step_type: script_step.step_type(),
            status,
            view: carousel_view(&carousel),
        });
        if report.handed_off_to.is_some() {
            info!(step, "replay stopped after handoff");
            break;
        }
    }

    report
}

fn apply_step(carousel: &mut NarrativeCarousel, step: ScriptStep) -> StepStatus {
    let input = match step {
        ScriptStep::Input(input) => input,
        ScriptStep::Control(ControlStep::CompleteTransition) => {
            match carousel.pending_transition() {
                Some(ticket) => CarouselInput::TransitionEnded { ticket },
                None => return StepStatus::Ignored,
            }
        }
    };

    match handle_command(carousel, &CarouselCommand::new(input)) {
        Ok(CommandOutcome::Applied) => StepStatus::Applied,
        Ok(CommandOutcome::Ignored) => StepStatus::Ignored,
        Ok(CommandOutcome::HandedOff(handoff)) => StepStatus::HandedOff {
            family: handoff.replacement.family().to_owned(),
        },
        Err(err) => {
            warn!(error = %err, "step rejected");
            StepStatus::Rejected {
                reason: err.to_string(),
            }
        }
    }
}
