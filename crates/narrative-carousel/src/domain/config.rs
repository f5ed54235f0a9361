//! Component configuration as authored by the host.
//!
//! Field names follow the host's component JSON (`_items`,
//! `_isResetOnRevisit`, `mobileInstruction`, ...).

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::carousel::CarouselSnapshot;

/// Family name of the carousel itself.
pub const NARRATIVE_FAMILY: &str = "narrative";

/// Family name of the large-screen alternate component.
pub const HOTGRAPHIC_FAMILY: &str = "hotgraphic";

/// How item state is cleared when the learner revisits the component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetPolicy {
    /// Clear item state and component completion.
    Hard,
    /// Clear item state, keep component completion.
    Soft,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawResetPolicy {
    Flag(bool),
    Named(String),
}

fn deserialize_reset_policy<'de, D>(deserializer: D) -> Result<Option<ResetPolicy>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawResetPolicy>::deserialize(deserializer)? {
        None | Some(RawResetPolicy::Flag(false)) => Ok(None),
        Some(RawResetPolicy::Flag(true)) => Ok(Some(ResetPolicy::Hard)),
        Some(RawResetPolicy::Named(name)) => match name.as_str() {
            "hard" => Ok(Some(ResetPolicy::Hard)),
            "soft" => Ok(Some(ResetPolicy::Soft)),
            other => Err(serde::de::Error::unknown_variant(other, &["hard", "soft"])),
        },
    }
}

#[allow(clippy::ref_option)]
fn serialize_reset_policy<S>(policy: &Option<ResetPolicy>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match policy {
        None => serializer.serialize_bool(false),
        Some(ResetPolicy::Hard) => serializer.serialize_str("hard"),
        Some(ResetPolicy::Soft) => serializer.serialize_str("soft"),
    }
}

/// What marks the whole component complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CompletionTrigger {
    /// Every item has been visited.
    #[default]
    #[serde(rename = "allItems")]
    AllItems,
    /// The component has scrolled into view.
    #[serde(rename = "inview")]
    InView,
}

/// One configured item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemConfig {
    /// Item title.
    #[serde(default)]
    pub title: String,
    /// Item body copy.
    #[serde(default)]
    pub body: String,
    /// Alternate body copy for small mode.
    #[serde(rename = "mobileBody", default, skip_serializing_if = "Option::is_none")]
    pub mobile_body: Option<String>,
    /// Persisted active flag.
    #[serde(rename = "_isActive", default)]
    pub is_active: bool,
    /// Persisted visited flag.
    #[serde(rename = "_isVisited", default)]
    pub is_visited: bool,
}

/// Configuration of one carousel component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeConfig {
    /// Slot identifier the component is mounted in.
    #[serde(rename = "_id", default)]
    pub id: String,
    /// Component family name.
    #[serde(rename = "_component", default = "default_family")]
    pub component: String,
    /// Outward-facing title.
    #[serde(default)]
    pub title: String,
    /// Outward-facing body copy.
    #[serde(default)]
    pub body: String,
    /// Primary instruction text.
    #[serde(default)]
    pub instruction: String,
    /// Instruction text for small mode.
    #[serde(rename = "mobileInstruction", default, skip_serializing_if = "Option::is_none")]
    pub mobile_instruction: Option<String>,
    /// Body copy of the alternate family this component was converted from.
    #[serde(rename = "originalBody", default, skip_serializing_if = "Option::is_none")]
    pub original_body: Option<String>,
    /// Instruction text of the alternate family this component was converted from.
    #[serde(rename = "originalInstruction", default, skip_serializing_if = "Option::is_none")]
    pub original_instruction: Option<String>,
    /// Whether this instance was converted from the alternate family.
    #[serde(rename = "_wasHotgraphic", default)]
    pub was_hotgraphic: bool,
    /// Reset applied on revisit.
    #[serde(
        rename = "_isResetOnRevisit",
        default,
        deserialize_with = "deserialize_reset_policy",
        serialize_with = "serialize_reset_policy"
    )]
    pub reset_on_revisit: Option<ResetPolicy>,
    /// Completion trigger.
    #[serde(rename = "_setCompletionOn", default)]
    pub set_completion_on: CompletionTrigger,
    /// Persisted component completion.
    #[serde(rename = "_isComplete", default)]
    pub is_complete: bool,
    /// Configured items.
    #[serde(rename = "_items", default)]
    pub items: Vec<ItemConfig>,
}

fn default_family() -> String {
    NARRATIVE_FAMILY.to_owned()
}

impl NarrativeConfig {
    /// Folds persisted state back into the configuration.
    ///
    /// Entries beyond the configured items are ignored.
    pub fn apply_snapshot(&mut self, snapshot: &CarouselSnapshot) {
        for (index, item) in self.items.iter_mut().enumerate() {
            item.is_active = snapshot.active_index == Some(index);
            item.is_visited = snapshot.visited.get(index).copied().unwrap_or(false);
        }
        self.is_complete = snapshot.is_complete;
    }
}
