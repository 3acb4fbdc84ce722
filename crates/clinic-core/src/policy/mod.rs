//! Role-scoped access policy.
//!
//! Pure functions over the in-memory record sets: which rows an actor
//! sees, whether a doctor may register another patient, and
//! search-as-you-type filtering. The surrounding store owns the state;
//! nothing in this module mutates except [`toggle_subscription`].

mod filter;
mod subscription;

pub use filter::*;
pub use subscription::*;

use crate::models::{Patient, VisitRecord};

/// The identity a view is computed for.
///
/// Doctor and patient actors carry the resolved record ID, so scoping
/// never re-derives identity from the login email. A failed identity
/// lookup produces no actor at all (see `Store::actor_for`) rather than
/// falling back to someone else's records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    /// Sees everything.
    Admin,
    /// Sees records owned by this doctor.
    Doctor { doctor_id: String },
    /// Sees this patient's own records only.
    Patient { patient_id: String },
}

/// Records that can be scoped to an actor.
pub trait Scoped {
    /// Whether this record appears in the actor's view.
    fn visible_to(&self, actor: &Actor) -> bool;
}

impl Scoped for Patient {
    fn visible_to(&self, actor: &Actor) -> bool {
        match actor {
            Actor::Admin => true,
            Actor::Doctor { doctor_id } => self.doctor_id == *doctor_id,
            Actor::Patient { patient_id } => self.id == *patient_id,
        }
    }
}

impl Scoped for VisitRecord {
    fn visible_to(&self, actor: &Actor) -> bool {
        match actor {
            Actor::Admin => true,
            Actor::Doctor { doctor_id } => self.doctor_id == *doctor_id,
            Actor::Patient { patient_id } => self.patient_id == *patient_id,
        }
    }
}

/// Subset of `records` visible to `actor`, in the original order.
pub fn visible_for<'a, T: Scoped>(actor: &Actor, records: &'a [T]) -> Vec<&'a T> {
    records.iter().filter(|r| r.visible_to(actor)).collect()
}
