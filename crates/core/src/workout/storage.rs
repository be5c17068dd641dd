//! Draft document encoding shared by every storage adapter.

use sparta_domain::Workout;
use tracing::debug;

/// Decode a persisted draft. Returns `None` for unparsable JSON, a missing
/// `exercises` array, an empty id or an out-of-range set count.
#[must_use]
pub fn decode_draft(raw: &str) -> Option<Workout> {
    match serde_json::from_str::<Workout>(raw) {
        Ok(workout) if workout.is_well_formed() => Some(workout),
        Ok(_) => {
            debug!("Discarding malformed draft");
            None
        }
        Err(err) => {
            debug!(error = %err, "Discarding unparsable draft");
            None
        }
    }
}

/// Encode a workout as a draft document.
pub fn encode_draft(workout: &Workout) -> serde_json::Result<String> {
    serde_json::to_string(workout)
}

#[cfg(test)]
mod tests {
    use sparta_domain::demo_workout;

    use super::*;

    #[test]
    fn round_trip_keeps_id_and_exercise_count() {
        let workout = demo_workout();
        let raw = encode_draft(&workout).unwrap();
        let decoded = decode_draft(&raw).unwrap();
        assert_eq!(decoded.id, workout.id);
        assert_eq!(decoded.exercises.len(), workout.exercises.len());
    }

    #[test]
    fn rejects_garbage_and_malformed_documents() {
        assert!(decode_draft("").is_none());
        assert!(decode_draft("{not json").is_none());
        assert!(decode_draft("null").is_none());
        assert!(decode_draft(r#"{"id": "", "exercises": []}"#).is_none());
        assert!(decode_draft(r#"{"id": "w-1", "exercises": "none"}"#).is_none());
        assert!(decode_draft(r#"{"id": "w-1"}"#).is_none());
    }

    #[test]
    fn rejects_unbounded_set_count() {
        let raw = r#"{"id":"w","exercises":[{"id":"a","name":"A","sets":4294967295,"reps":"10"}]}"#;
        assert!(decode_draft(raw).is_none());
    }

    #[test]
    fn accepts_minimal_document() {
        let workout = decode_draft(r#"{"id": "w-1", "exercises": []}"#).unwrap();
        assert_eq!(workout.id, "w-1");
        assert!(workout.is_empty());
    }
}
