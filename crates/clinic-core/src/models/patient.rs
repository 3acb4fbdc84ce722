//! Patient model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A patient record, owned by exactly one doctor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Patient ID
    pub id: String,
    /// Full name
    pub name: String,
    /// Email (also the patient's login identity)
    pub email: String,
    /// Contact phone, expected unique across patients
    pub phone: String,
    /// National identity number, expected unique across patients
    pub cnic: String,
    /// Owning doctor's ID
    pub doctor_id: String,
    /// Registration timestamp
    pub created_at: DateTime<Utc>,
}

impl Patient {
    /// Create a new patient under the given doctor.
    pub fn new(
        name: String,
        email: String,
        phone: String,
        cnic: String,
        doctor_id: String,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            email,
            phone,
            cnic,
            doctor_id,
            created_at: Utc::now(),
        }
    }

    /// Fields the dashboard search box matches against.
    pub fn search_fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.cnic.clone(),
        ]
    }
}
