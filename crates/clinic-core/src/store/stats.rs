//! Dashboard statistics.
//!
//! Counter shapes for the cards each dashboard renders. All derived on
//! demand from the store; nothing is cached.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Store;
use crate::policy::FREE_PATIENT_LIMIT;

/// Counters for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminStats {
    pub total_doctors: usize,
    pub total_patients: usize,
    pub subscribed_doctors: usize,
}

/// Counters for a doctor's dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorStats {
    pub patient_count: usize,
    pub total_visits: usize,
    /// Free-tier slots left; `None` means unlimited (subscribed).
    pub remaining_slots: Option<usize>,
}

/// Counters for a patient's dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientStats {
    pub total_visits: usize,
    pub upcoming_visits: usize,
}

impl Store {
    /// System-wide counters for the admin view.
    pub fn admin_stats(&self) -> AdminStats {
        AdminStats {
            total_doctors: self.doctors().len(),
            total_patients: self.patients().len(),
            subscribed_doctors: self.doctors().iter().filter(|d| d.is_subscribed).count(),
        }
    }

    /// Counters for one doctor's view; `None` if the doctor is unknown.
    pub fn doctor_stats(&self, doctor_id: &str) -> Option<DoctorStats> {
        let doctor = self.doctor_by_id(doctor_id)?;
        let patient_count = self.patient_count_for(doctor_id);
        let total_visits = self
            .visits()
            .iter()
            .filter(|v| v.doctor_id == doctor_id)
            .count();
        let remaining_slots = if doctor.is_subscribed {
            None
        } else {
            Some(FREE_PATIENT_LIMIT.saturating_sub(patient_count))
        };
        Some(DoctorStats {
            patient_count,
            total_visits,
            remaining_slots,
        })
    }

    /// Counters for one patient's view; `None` if the patient is unknown.
    pub fn patient_stats(&self, patient_id: &str, now: DateTime<Utc>) -> Option<PatientStats> {
        self.patient_by_id(patient_id)?;
        let own_visits: Vec<_> = self
            .visits()
            .iter()
            .filter(|v| v.patient_id == patient_id)
            .collect();
        Some(PatientStats {
            total_visits: own_visits.len(),
            upcoming_visits: own_visits.iter().filter(|v| v.is_upcoming(now)).count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_admin_stats_over_seed() {
        let stats = Store::seeded().admin_stats();
        assert_eq!(stats.total_doctors, 3);
        assert_eq!(stats.total_patients, 3);
        assert_eq!(stats.subscribed_doctors, 2);
    }

    #[test]
    fn test_doctor_stats_free_tier_slots() {
        let store = Store::seeded();

        // doc-2 (free tier) owns one patient
        let stats = store.doctor_stats("doc-2").unwrap();
        assert_eq!(stats.patient_count, 1);
        assert_eq!(stats.total_visits, 1);
        assert_eq!(stats.remaining_slots, Some(2));

        // doc-1 is subscribed: unlimited
        let stats = store.doctor_stats("doc-1").unwrap();
        assert_eq!(stats.patient_count, 2);
        assert_eq!(stats.total_visits, 3);
        assert_eq!(stats.remaining_slots, None);
    }

    #[test]
    fn test_doctor_stats_unknown_id() {
        assert!(Store::seeded().doctor_stats("no-such-doctor").is_none());
    }

    #[test]
    fn test_patient_stats_upcoming_window() {
        let store = Store::seeded();

        // Before visit-1's follow-up both scheduled dates are ahead
        let early = chrono::Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap();
        let stats = store.patient_stats("pat-1", early).unwrap();
        assert_eq!(stats.total_visits, 2);
        assert_eq!(stats.upcoming_visits, 1);

        // Long after all follow-ups
        let late = chrono::Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let stats = store.patient_stats("pat-1", late).unwrap();
        assert_eq!(stats.upcoming_visits, 0);
    }
}
