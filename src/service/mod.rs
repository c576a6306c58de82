//! Business logic layer.
//!
//! Services sit between the Discord handler / schedulers and the data layer. They own the
//! submission queue, reconcile submissions with the wallet store, decide which giveaway
//! winners need the role, and build the wallet export.

pub mod drain;
pub mod export;
pub mod giveaway;
pub mod queue;
