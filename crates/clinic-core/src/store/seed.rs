//! Seed dataset for the mock deployment.
//!
//! Three doctors, three patients, four visit records. The dashboards run
//! against this set until a real backend exists; tests lean on the fixed
//! IDs and dates.

use chrono::{DateTime, TimeZone, Utc};

use super::Store;
use crate::models::{Doctor, Patient, VisitRecord};

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("static seed date")
}

impl Store {
    /// Store pre-populated with the mock dataset.
    pub fn seeded() -> Self {
        let doctors = vec![
            Doctor {
                id: "doc-1".into(),
                email: "dr.smith@hospital.com".into(),
                name: "Dr. John Smith".into(),
                is_subscribed: true,
                phone: "+92-300-1234567".into(),
                cnic: "42101-1234567-1".into(),
            },
            Doctor {
                id: "doc-2".into(),
                email: "dr.jones@hospital.com".into(),
                name: "Dr. Sarah Jones".into(),
                is_subscribed: false,
                phone: "+92-301-9876543".into(),
                cnic: "42101-9876543-2".into(),
            },
            Doctor {
                id: "doc-3".into(),
                email: "dr.ahmed@hospital.com".into(),
                name: "Dr. Ahmed Khan".into(),
                is_subscribed: true,
                phone: "+92-333-5555555".into(),
                cnic: "42101-5555555-3".into(),
            },
        ];

        let patients = vec![
            Patient {
                id: "pat-1".into(),
                name: "Alice Johnson".into(),
                email: "alice@email.com".into(),
                phone: "+92-321-1111111".into(),
                cnic: "42201-1111111-1".into(),
                doctor_id: "doc-1".into(),
                created_at: day(2024, 1, 15),
            },
            Patient {
                id: "pat-2".into(),
                name: "Bob Williams".into(),
                email: "bob@email.com".into(),
                phone: "+92-322-2222222".into(),
                cnic: "42201-2222222-2".into(),
                doctor_id: "doc-1".into(),
                created_at: day(2024, 2, 20),
            },
            Patient {
                id: "pat-3".into(),
                name: "Carol Davis".into(),
                email: "carol@email.com".into(),
                phone: "+92-323-3333333".into(),
                cnic: "42201-3333333-3".into(),
                doctor_id: "doc-2".into(),
                created_at: day(2024, 3, 10),
            },
        ];

        let visits = vec![
            VisitRecord {
                id: "visit-1".into(),
                patient_id: "pat-1".into(),
                doctor_id: "doc-1".into(),
                medicine_given: "Paracetamol 500mg".into(),
                disease: "Fever".into(),
                added_at: day(2024, 3, 1),
                next_visit: Some(day(2024, 3, 15)),
            },
            VisitRecord {
                id: "visit-2".into(),
                patient_id: "pat-1".into(),
                doctor_id: "doc-1".into(),
                medicine_given: "Ibuprofen 400mg".into(),
                disease: "Headache".into(),
                added_at: day(2024, 3, 20),
                next_visit: None,
            },
            VisitRecord {
                id: "visit-3".into(),
                patient_id: "pat-2".into(),
                doctor_id: "doc-1".into(),
                medicine_given: "Amoxicillin 500mg".into(),
                disease: "Bacterial Infection".into(),
                added_at: day(2024, 3, 5),
                next_visit: Some(day(2024, 3, 19)),
            },
            VisitRecord {
                id: "visit-4".into(),
                patient_id: "pat-3".into(),
                doctor_id: "doc-2".into(),
                medicine_given: "Cetirizine 10mg".into(),
                disease: "Allergies".into(),
                added_at: day(2024, 3, 12),
                next_visit: Some(day(2024, 4, 12)),
            },
        ];

        Self {
            doctors,
            patients,
            visits,
        }
    }
}
