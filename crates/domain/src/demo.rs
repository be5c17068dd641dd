//! Built-in demo workout
//!
//! Last-resort fallback when no launch payload, user workout or draft is
//! available.

use crate::constants::DEFAULT_HERO_IMAGE;
use crate::types::{Exercise, MuscleGroup, Workout};

pub const DEMO_WORKOUT_ID: &str = "demo-1";

/// Single source of truth for the demo workout.
#[must_use]
pub fn demo_workout() -> Workout {
    Workout {
        id: DEMO_WORKOUT_ID.to_string(),
        name: "TREINO A - Peito e Tríceps".to_string(),
        focal_muscles: "Peito e Tríceps".to_string(),
        duration: 45,
        exercises: vec![
            Exercise::new("ex-1", "Agachamento livre", 4, "10-12", MuscleGroup::Legs)
                .with_image(DEFAULT_HERO_IMAGE)
                .with_equipment("Barra"),
            Exercise::new("ex-2", "Supino reto", 4, "10-12", MuscleGroup::Chest)
                .with_image(DEFAULT_HERO_IMAGE)
                .with_technique("Ponto de Falha")
                .with_equipment("Barra")
                .with_replacements(vec![Exercise::new(
                    "ex-2b",
                    "Supino com halteres",
                    4,
                    "10-12",
                    MuscleGroup::Chest,
                )
                .with_equipment("Halteres")]),
            Exercise::new("ex-3", "Remada curvada", 3, "12", MuscleGroup::Back)
                .with_image(DEFAULT_HERO_IMAGE)
                .with_technique("Drop Set")
                .with_equipment("Halteres"),
        ],
        is_ai_generated: Some(true),
        status: None,
        completed_count: Some(0),
    }
}
