//! Outbound "a creature appeared" alerts.

use crate::encounter::Encounter;
use log::info;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterNotice {
    pub title: String,
    pub body: String,
    /// Key of the encounter the notice points at
    pub encounter_key: i64,
}

impl EncounterNotice {
    pub fn for_encounter(encounter: &Encounter) -> Self {
        Self {
            title: "Creature Encounter!".to_string(),
            body: format!("A {} appeared! Tap to view.", encounter.creature.name),
            encounter_key: encounter.key(),
        }
    }
}

/// Told about every newly generated encounter.
pub trait EncounterNotifier {
    fn notify(&mut self, notice: &EncounterNotice);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl EncounterNotifier for NoopNotifier {
    fn notify(&mut self, _notice: &EncounterNotice) {}
}

/// Writes notices to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl EncounterNotifier for LogNotifier {
    fn notify(&mut self, notice: &EncounterNotice) {
        info!("{}: {}", notice.title, notice.body);
    }
}

/// Keeps every notice. Clones share the same list.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<EncounterNotice>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<EncounterNotice> {
        match self.notices.lock() {
            Ok(notices) => notices.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl EncounterNotifier for RecordingNotifier {
    fn notify(&mut self, notice: &EncounterNotice) {
        match self.notices.lock() {
            Ok(mut notices) => notices.push(notice.clone()),
            Err(poisoned) => poisoned.into_inner().push(notice.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creatures::{create_creature_at_level, template_by_id};
    use crate::encounter::Location;

    fn encounter() -> Encounter {
        let template = template_by_id("wind_dancer").unwrap();
        Encounter::new(create_creature_at_level(template, 2), Location::fallback(), 2, 99)
    }

    #[test]
    fn test_notice_text() {
        let notice = EncounterNotice::for_encounter(&encounter());
        assert_eq!(notice.body, "A Wind Dancer appeared! Tap to view.");
        assert_eq!(notice.encounter_key, 99);
    }

    #[test]
    fn test_recording_notifier_clones_share_notices() {
        let recorder = RecordingNotifier::new();
        let mut handle = recorder.clone();
        handle.notify(&EncounterNotice::for_encounter(&encounter()));
        assert_eq!(recorder.notices().len(), 1);
    }
}
