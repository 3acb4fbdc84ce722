//! In-memory clinic state.
//!
//! The [`Store`] owns one session's snapshot of the doctor, patient, and
//! visit collections and is the only place they are mutated. The access
//! policy itself stays pure; the store wires it to the data and enforces
//! the referential, uniqueness, and subscription-limit invariants on
//! every write.

mod seed;
mod stats;

pub use stats::*;

use thiserror::Error;

use crate::models::{Doctor, Patient, User, UserRole, VisitRecord};
use crate::policy::{can_add_patient, text_filter, toggle_subscription, visible_for, Actor};

/// Store errors. Only mutations can fail; every read path is total.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Doctor not found: {0}")]
    DoctorNotFound(String),

    #[error("Patient not found: {0}")]
    PatientNotFound(String),

    #[error("Patient limit reached for doctor {0}: upgrade the subscription to add more")]
    PatientLimitReached(String),

    #[error("Duplicate patient {field}: {value}")]
    Duplicate { field: &'static str, value: String },

    #[error("Patient {patient_id} is not under doctor {doctor_id}")]
    NotUnderDoctor {
        patient_id: String,
        doctor_id: String,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Details captured by the add-patient form.
#[derive(Debug, Clone)]
pub struct NewPatient {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cnic: String,
}

/// Details captured by the add-visit form.
#[derive(Debug, Clone)]
pub struct NewVisit {
    pub disease: String,
    pub medicine_given: String,
    pub next_visit: Option<chrono::DateTime<chrono::Utc>>,
}

/// One session's in-memory data snapshot.
#[derive(Debug, Clone, Default)]
pub struct Store {
    doctors: Vec<Doctor>,
    patients: Vec<Patient>,
    visits: Vec<VisitRecord>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn visits(&self) -> &[VisitRecord] {
        &self.visits
    }

    /// Look up a doctor by ID.
    pub fn doctor_by_id(&self, doctor_id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == doctor_id)
    }

    /// Look up a doctor by login email.
    pub fn doctor_by_email(&self, email: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.email == email)
    }

    /// Look up a patient by ID.
    pub fn patient_by_id(&self, patient_id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == patient_id)
    }

    /// Look up a patient by login email.
    pub fn patient_by_email(&self, email: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.email == email)
    }

    /// Number of patients currently owned by `doctor_id`.
    pub fn patient_count_for(&self, doctor_id: &str) -> usize {
        self.patients
            .iter()
            .filter(|p| p.doctor_id == doctor_id)
            .count()
    }

    /// Resolve an authenticated user to an acting identity.
    ///
    /// Admins always resolve. Doctors and patients resolve by exact email
    /// lookup; a miss yields `None` and the caller renders an empty view
    /// instead of someone else's data.
    pub fn actor_for(&self, user: &User) -> Option<Actor> {
        match user.role {
            UserRole::Admin => Some(Actor::Admin),
            UserRole::Doctor => self.doctor_by_email(&user.email).map(|d| Actor::Doctor {
                doctor_id: d.id.clone(),
            }),
            UserRole::Patient => self.patient_by_email(&user.email).map(|p| Actor::Patient {
                patient_id: p.id.clone(),
            }),
        }
    }

    /// Register a doctor (signup path). Returns the stored record.
    pub fn add_doctor(&mut self, doctor: Doctor) -> &Doctor {
        self.doctors.push(doctor);
        &self.doctors[self.doctors.len() - 1]
    }

    /// Register a new patient under `doctor_id`.
    ///
    /// Fails if the doctor is unknown, the free-tier limit is reached, or
    /// the email, phone, or cnic collides with an existing patient.
    pub fn add_patient(&mut self, doctor_id: &str, new: NewPatient) -> StoreResult<Patient> {
        let doctor = self
            .doctor_by_id(doctor_id)
            .ok_or_else(|| StoreError::DoctorNotFound(doctor_id.into()))?;

        if !can_add_patient(doctor, self.patient_count_for(doctor_id)) {
            return Err(StoreError::PatientLimitReached(doctor_id.into()));
        }

        for existing in &self.patients {
            if existing.email == new.email {
                return Err(StoreError::Duplicate {
                    field: "email",
                    value: new.email,
                });
            }
            if existing.phone == new.phone {
                return Err(StoreError::Duplicate {
                    field: "phone",
                    value: new.phone,
                });
            }
            if existing.cnic == new.cnic {
                return Err(StoreError::Duplicate {
                    field: "cnic",
                    value: new.cnic,
                });
            }
        }

        let patient = Patient::new(new.name, new.email, new.phone, new.cnic, doctor_id.into());
        self.patients.push(patient.clone());
        Ok(patient)
    }

    /// Record a visit for `patient_id` by `doctor_id`.
    ///
    /// Fails if either party is unknown or the patient is owned by a
    /// different doctor.
    pub fn add_visit(
        &mut self,
        doctor_id: &str,
        patient_id: &str,
        new: NewVisit,
    ) -> StoreResult<VisitRecord> {
        if self.doctor_by_id(doctor_id).is_none() {
            return Err(StoreError::DoctorNotFound(doctor_id.into()));
        }
        let patient = self
            .patient_by_id(patient_id)
            .ok_or_else(|| StoreError::PatientNotFound(patient_id.into()))?;
        if patient.doctor_id != doctor_id {
            return Err(StoreError::NotUnderDoctor {
                patient_id: patient_id.into(),
                doctor_id: doctor_id.into(),
            });
        }

        let mut visit = VisitRecord::new(
            patient_id.into(),
            doctor_id.into(),
            new.disease,
            new.medicine_given,
        );
        visit.next_visit = new.next_visit;
        self.visits.push(visit.clone());
        Ok(visit)
    }

    /// Flip a doctor's subscription flag (admin action).
    ///
    /// Unknown IDs are a silent no-op, matching the policy function.
    pub fn toggle_subscription(&mut self, doctor_id: &str) {
        toggle_subscription(&mut self.doctors, doctor_id);
    }

    /// Patients visible to `actor`, in registration order.
    pub fn visible_patients(&self, actor: &Actor) -> Vec<&Patient> {
        visible_for(actor, &self.patients)
    }

    /// Visit records visible to `actor`, in insertion order.
    pub fn visible_visits(&self, actor: &Actor) -> Vec<&VisitRecord> {
        visible_for(actor, &self.visits)
    }

    /// Visible patients matching `query` on name, email, phone, or cnic.
    pub fn search_patients(&self, actor: &Actor, query: &str) -> Vec<&Patient> {
        text_filter(self.visible_patients(actor), query, Patient::search_fields)
    }

    /// Visible visits matching `query` on disease, medicine, patient
    /// name, or the visit dates (YYYY-MM-DD).
    pub fn search_visits(&self, actor: &Actor, query: &str) -> Vec<&VisitRecord> {
        text_filter(self.visible_visits(actor), query, |visit| {
            self.visit_search_fields(visit)
        })
    }

    /// Searchable columns of a visit row as the dashboard renders it.
    /// A dangling patient reference simply contributes no name.
    fn visit_search_fields(&self, visit: &VisitRecord) -> Vec<String> {
        let mut fields = vec![
            visit.disease.clone(),
            visit.medicine_given.clone(),
            visit.added_at.format("%Y-%m-%d").to_string(),
        ];
        if let Some(patient) = self.patient_by_id(&visit.patient_id) {
            fields.push(patient.name.clone());
        }
        if let Some(next) = visit.next_visit {
            fields.push(next.format("%Y-%m-%d").to_string());
        }
        fields
    }
}
