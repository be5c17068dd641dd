//! Per-set log for the active exercise.
//!
//! Cells are free text as typed by the user. Sanitization happens on every
//! edit so the stored text is always a parsable prefix.

use sparta_domain::utils::input::{
    format_weight, parse_reps, parse_weight, sanitize_reps, sanitize_weight,
};
use sparta_domain::{Exercise, LoggedSet, SetField, SetLogEntry};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetLog {
    entries: Vec<SetLogEntry>,
    done: Vec<bool>,
}

impl SetLog {
    /// Blank log sized to the exercise's set count.
    #[must_use]
    pub fn for_exercise(exercise: &Exercise) -> Self {
        let mut log = Self::default();
        log.reset(exercise);
        log
    }

    /// Replace the log with `exercise.sets` blank entries, none done.
    /// The count is capped at `MAX_SETS`.
    pub fn reset(&mut self, exercise: &Exercise) {
        let sets = exercise.set_count();
        self.entries = vec![SetLogEntry::default(); sets];
        self.done = vec![false; sets];
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[SetLogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn done_flags(&self) -> &[bool] {
        &self.done
    }

    #[must_use]
    pub fn done_count(&self) -> usize {
        self.done.iter().filter(|done| **done).count()
    }

    #[must_use]
    pub fn is_done(&self, index: usize) -> bool {
        self.done.get(index).copied().unwrap_or(false)
    }

    /// Sanitize and store `value`. Returns `false` for an out-of-range index.
    pub fn update_field(&mut self, index: usize, field: SetField, value: &str) -> bool {
        let Some(entry) = self.entries.get_mut(index) else {
            return false;
        };

        match field {
            SetField::Weight => entry.weight = sanitize_weight(value),
            SetField::Reps => entry.reps = sanitize_reps(value),
        }
        true
    }

    /// Flag the set as done. Marks are one-way; marking twice is harmless.
    /// Returns `false` for an out-of-range index.
    pub fn mark_done(&mut self, index: usize) -> bool {
        match self.done.get_mut(index) {
            Some(flag) => {
                *flag = true;
                true
            }
            None => false,
        }
    }

    /// Add `delta` to the weight cell, flooring at zero.
    pub fn step_weight(&mut self, index: usize, delta: f64) -> bool {
        let Some(entry) = self.entries.get_mut(index) else {
            return false;
        };

        let next = (parse_weight(&entry.weight) + delta).max(0.0);
        entry.weight = format_weight(next);
        true
    }

    /// Add `delta` to the reps cell, flooring at zero.
    pub fn step_reps(&mut self, index: usize, delta: i64) -> bool {
        let Some(entry) = self.entries.get_mut(index) else {
            return false;
        };

        let next = parse_reps(&entry.reps).saturating_add(delta).max(0);
        entry.reps = next.to_string();
        true
    }

    /// Snapshot of the log with cells parsed. Blank or unparsable cells are `None`.
    #[must_use]
    pub fn to_logged_sets(&self) -> Vec<LoggedSet> {
        self.entries
            .iter()
            .zip(&self.done)
            .map(|(entry, done)| LoggedSet {
                weight: entry.weight.parse::<f64>().ok().filter(|w| w.is_finite()),
                reps: entry.reps.parse::<u32>().ok(),
                done: *done,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use sparta_domain::constants::{REPS_STEP, WEIGHT_STEP};
    use sparta_domain::MuscleGroup;

    use super::*;

    fn exercise(sets: u32) -> Exercise {
        Exercise::new("ex-1", "Agachamento", sets, "10-12", MuscleGroup::Legs)
    }

    #[test]
    fn reset_sizes_entries_and_flags() {
        let mut log = SetLog::for_exercise(&exercise(4));
        assert_eq!(log.len(), 4);
        assert_eq!(log.done_flags(), &[false; 4]);
        assert!(log.entries().iter().all(SetLogEntry::is_blank));

        log.update_field(0, SetField::Weight, "40");
        log.mark_done(0);
        log.reset(&exercise(2));
        assert_eq!(log.len(), 2);
        assert_eq!(log.done_flags().len(), 2);
        assert_eq!(log.done_count(), 0);
        assert!(log.entries()[0].is_blank());
    }

    #[test]
    fn zero_sets_gives_empty_log() {
        let log = SetLog::for_exercise(&exercise(0));
        assert!(log.is_empty());
        assert!(log.to_logged_sets().is_empty());
    }

    #[test]
    fn update_field_sanitizes() {
        let mut log = SetLog::for_exercise(&exercise(2));
        assert!(log.update_field(0, SetField::Weight, "12,5kg"));
        assert!(log.update_field(1, SetField::Reps, "12a"));
        assert_eq!(log.entries()[0].weight, "12.5");
        assert_eq!(log.entries()[1].reps, "12");

        log.update_field(0, SetField::Weight, "1.2.5");
        assert_eq!(log.entries()[0].weight, "1.25");
    }

    #[test]
    fn out_of_range_is_noop() {
        let mut log = SetLog::for_exercise(&exercise(1));
        let before = log.clone();
        assert!(!log.update_field(5, SetField::Weight, "10"));
        assert!(!log.mark_done(5));
        assert!(!log.step_weight(5, WEIGHT_STEP));
        assert!(!log.step_reps(5, REPS_STEP));
        assert_eq!(log, before);
    }

    #[test]
    fn mark_done_is_idempotent() {
        let mut log = SetLog::for_exercise(&exercise(3));
        assert!(log.mark_done(1));
        assert!(log.mark_done(1));
        assert_eq!(log.done_flags(), &[false, true, false]);
        assert_eq!(log.done_count(), 1);
    }

    #[test]
    fn weight_stepper_formats_and_floors() {
        let mut log = SetLog::for_exercise(&exercise(1));
        log.step_weight(0, WEIGHT_STEP);
        assert_eq!(log.entries()[0].weight, "2.5");
        log.step_weight(0, WEIGHT_STEP);
        assert_eq!(log.entries()[0].weight, "5");

        log.update_field(0, SetField::Weight, "10");
        log.step_weight(0, WEIGHT_STEP);
        assert_eq!(log.entries()[0].weight, "12.5");

        log.update_field(0, SetField::Weight, "1");
        log.step_weight(0, -WEIGHT_STEP);
        assert_eq!(log.entries()[0].weight, "0");
    }

    #[test]
    fn reps_stepper_floors_at_zero() {
        let mut log = SetLog::for_exercise(&exercise(1));
        log.step_reps(0, -REPS_STEP);
        assert_eq!(log.entries()[0].reps, "0");
        log.step_reps(0, REPS_STEP);
        log.step_reps(0, REPS_STEP);
        assert_eq!(log.entries()[0].reps, "2");
    }

    #[test]
    fn logged_sets_parse_cells() {
        let mut log = SetLog::for_exercise(&exercise(2));
        log.update_field(0, SetField::Weight, "42.5");
        log.update_field(0, SetField::Reps, "10");
        log.mark_done(0);

        let sets = log.to_logged_sets();
        assert_eq!(sets[0], LoggedSet { weight: Some(42.5), reps: Some(10), done: true });
        assert_eq!(sets[1], LoggedSet { weight: None, reps: None, done: false });
    }
}
