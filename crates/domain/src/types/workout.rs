//! Workout and exercise reference data
//!
//! Field names follow the camelCase document layout written by the web
//! client so that drafts persisted by either side stay readable.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::MAX_SETS;
use crate::impl_domain_status_conversions;

/// Muscle group targeted by an exercise.
///
/// Wire values are the labels stored by the web client; anything unknown
/// collapses to [`MuscleGroup::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum MuscleGroup {
    #[serde(rename = "Peito")]
    Chest,
    #[serde(rename = "Costas")]
    Back,
    #[serde(rename = "Pernas")]
    Legs,
    #[serde(rename = "Ombros")]
    Shoulders,
    #[serde(rename = "Braços")]
    Arms,
    #[serde(rename = "Abdômen")]
    Core,
    #[serde(rename = "Cardio")]
    Cardio,
    #[default]
    #[serde(rename = "Geral", other)]
    Unknown,
}

impl_domain_status_conversions!(MuscleGroup {
    Chest => "chest",
    Back => "back",
    Legs => "legs",
    Shoulders => "shoulders",
    Arms => "arms",
    Core => "core",
    Cardio => "cardio",
    Unknown => "unknown",
});

/// Lifecycle status of a workout plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "UPPERCASE")]
pub enum WorkoutStatus {
    Draft,
    Active,
    Completed,
}

impl_domain_status_conversions!(WorkoutStatus {
    Draft => "draft",
    Active => "active",
    Completed => "completed",
});

/// A single exercise prescription inside a workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub sets: u32,
    /// Prescribed reps, free text ("10-12", "AMRAP").
    pub reps: String,
    #[serde(default)]
    pub muscle_group: MuscleGroup,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
    /// Advanced technique badge ("Drop Set", "Rest-Pause").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technique: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "ts-gen", ts(type = "Array<Exercise> | null"))]
    pub replacement_options: Option<Vec<Exercise>>,
}

impl Exercise {
    #[must_use]
    pub fn new(id: &str, name: &str, sets: u32, reps: &str, muscle_group: MuscleGroup) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            sets,
            reps: reps.to_string(),
            muscle_group,
            image: None,
            done: None,
            technique: None,
            equipment: None,
            replacement_options: None,
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: &str) -> Self {
        self.image = Some(image.to_string());
        self
    }

    #[must_use]
    pub fn with_technique(mut self, technique: &str) -> Self {
        self.technique = Some(technique.to_string());
        self
    }

    #[must_use]
    pub fn with_equipment(mut self, equipment: &str) -> Self {
        self.equipment = Some(equipment.to_string());
        self
    }

    #[must_use]
    pub fn with_replacements(mut self, options: Vec<Exercise>) -> Self {
        self.replacement_options = Some(options);
        self
    }

    /// Whether the exercise has been marked done.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done.unwrap_or(false)
    }

    /// Number of set slots, as a `usize` for indexing.
    /// Number of set slots, capped at [`MAX_SETS`].
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets.min(MAX_SETS) as usize
    }
}

/// Done/total counter over a workout's exercise flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
}

impl Progress {
    /// Fraction in `[0.0, 1.0]`; `0.0` for an empty workout.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.done as f64 / self.total as f64
        }
    }

    #[must_use]
    pub fn percent(&self) -> f64 {
        self.fraction() * 100.0
    }
}

/// A workout plan: ordered exercises plus display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub focal_muscles: String,
    /// Planned duration in minutes.
    #[serde(default)]
    pub duration: u32,
    pub exercises: Vec<Exercise>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_ai_generated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<WorkoutStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_count: Option<u32>,
}

impl Workout {
    /// Shape check applied to persisted drafts: a non-empty id and no
    /// exercise above [`MAX_SETS`]. The `exercises` array is enforced by
    /// deserialization itself.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.id.trim().is_empty() && self.exercises.iter().all(|e| e.sets <= MAX_SETS)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    #[must_use]
    pub fn exercise_position(&self, exercise_id: &str) -> Option<usize> {
        self.exercises.iter().position(|e| e.id == exercise_id)
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            done: self.exercises.iter().filter(|e| e.is_done()).count(),
            total: self.exercises.len(),
        }
    }
}
