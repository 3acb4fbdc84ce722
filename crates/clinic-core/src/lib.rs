//! Clinic Core Library
//!
//! Role-scoped data policy for a patient-management dashboard.
//!
//! # Architecture
//!
//! ```text
//! Login (role inferred from email text)
//!        │
//!        ▼
//!     Session ─── User ───► Store::actor_for ───► Actor
//!                                                   │
//!                              ┌────────────────────┼────────────────────┐
//!                              │                    │                    │
//!                              ▼                    ▼                    ▼
//!                           Admin               Doctor(id)          Patient(id)
//!                        all records         own patients and      own record and
//!                                              own visits            own visits
//!                                                   │
//!                                                   ▼
//!                                      text_filter (search box)
//! ```
//!
//! # Core Principle
//!
//! **Visibility follows the resolved identity.** A failed identity lookup
//! yields an empty view, never a fallback to another person's records.
//!
//! # Modules
//!
//! - [`models`]: Domain types (User, Doctor, Patient, VisitRecord)
//! - [`policy`]: Visibility scoping, subscription limit, text filtering
//! - [`store`]: Session-owned in-memory state, mutations, dashboard stats
//! - [`session`]: Mock login/signup/logout

pub mod models;
pub mod policy;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use models::{Doctor, Patient, User, UserRole, VisitRecord};
pub use policy::{
    can_add_patient, text_filter, toggle_subscription, visible_for, Actor, Scoped,
    FREE_PATIENT_LIMIT,
};
pub use session::Session;
pub use store::{
    AdminStats, DoctorStats, NewPatient, NewVisit, PatientStats, Store, StoreError, StoreResult,
};
