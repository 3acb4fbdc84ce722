//! Visit record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One consultation event linking a patient and a doctor.
///
/// `doctor_id` must equal the referenced patient's `doctor_id`; the store
/// enforces this when a visit is added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisitRecord {
    /// Visit ID
    pub id: String,
    /// Patient seen
    pub patient_id: String,
    /// Doctor who saw the patient
    pub doctor_id: String,
    /// Medication prescribed during the visit
    pub medicine_given: String,
    /// Diagnosis
    pub disease: String,
    /// When the visit was recorded
    pub added_at: DateTime<Utc>,
    /// Scheduled follow-up, if any
    pub next_visit: Option<DateTime<Utc>>,
}

impl VisitRecord {
    /// Create a new visit record with no follow-up scheduled.
    pub fn new(
        patient_id: String,
        doctor_id: String,
        disease: String,
        medicine_given: String,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            patient_id,
            doctor_id,
            medicine_given,
            disease,
            added_at: Utc::now(),
            next_visit: None,
        }
    }

    /// Whether the follow-up is still ahead of `now`.
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.next_visit.map_or(false, |next| next > now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_visit_has_no_follow_up() {
        let visit = VisitRecord::new(
            "pat-1".into(),
            "doc-1".into(),
            "Fever".into(),
            "Paracetamol 500mg".into(),
        );
        assert!(visit.next_visit.is_none());
        assert!(!visit.is_upcoming(Utc::now()));
    }

    #[test]
    fn test_is_upcoming_compares_against_now() {
        let now = Utc::now();
        let mut visit = VisitRecord::new(
            "pat-1".into(),
            "doc-1".into(),
            "Fever".into(),
            "Paracetamol 500mg".into(),
        );

        visit.next_visit = Some(now + Duration::days(7));
        assert!(visit.is_upcoming(now));

        visit.next_visit = Some(now - Duration::days(7));
        assert!(!visit.is_upcoming(now));
    }
}
