//! Subscription-limit policy.

use crate::models::Doctor;

/// Patients a free-tier doctor may own at any one time.
pub const FREE_PATIENT_LIMIT: usize = 3;

/// Whether `doctor` may register one more patient.
///
/// Subscribed doctors are unlimited; free-tier doctors are capped at
/// [`FREE_PATIENT_LIMIT`]. Pure predicate with no side effects; callers
/// re-evaluate after every patient-count change.
pub fn can_add_patient(doctor: &Doctor, current_patient_count: usize) -> bool {
    doctor.is_subscribed || current_patient_count < FREE_PATIENT_LIMIT
}

/// Flip the subscription flag of the doctor matching `doctor_id`.
///
/// Unknown IDs are a silent no-op; applying the toggle twice restores
/// the original state.
pub fn toggle_subscription(doctors: &mut [Doctor], doctor_id: &str) {
    if let Some(doctor) = doctors.iter_mut().find(|d| d.id == doctor_id) {
        doctor.is_subscribed = !doctor.is_subscribed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn free_doctor(id: &str) -> Doctor {
        let mut doctor = Doctor::new(
            "Dr. Sarah Jones".into(),
            "dr.jones@hospital.com".into(),
            "+92-301-9876543".into(),
            "42101-9876543-2".into(),
        );
        doctor.id = id.into();
        doctor
    }

    #[test]
    fn test_free_tier_capped_at_limit() {
        let doctor = free_doctor("d1");
        assert!(can_add_patient(&doctor, 0));
        assert!(can_add_patient(&doctor, 2));
        assert!(!can_add_patient(&doctor, 3));
        assert!(!can_add_patient(&doctor, 10));
    }

    #[test]
    fn test_subscribed_is_unlimited() {
        let mut doctor = free_doctor("d1");
        doctor.is_subscribed = true;
        assert!(can_add_patient(&doctor, 0));
        assert!(can_add_patient(&doctor, 3));
        assert!(can_add_patient(&doctor, 1000));
    }

    #[test]
    fn test_toggle_flips_flag() {
        let mut doctors = vec![free_doctor("d1"), free_doctor("d2")];
        toggle_subscription(&mut doctors, "d1");
        assert!(doctors[0].is_subscribed);
        assert!(!doctors[1].is_subscribed);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut doctors = vec![free_doctor("d1")];
        toggle_subscription(&mut doctors, "d1");
        toggle_subscription(&mut doctors, "d1");
        assert!(!doctors[0].is_subscribed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut doctors = vec![free_doctor("d1")];
        let before = doctors.clone();
        toggle_subscription(&mut doctors, "no-such-doctor");
        assert_eq!(doctors, before);
    }
}
