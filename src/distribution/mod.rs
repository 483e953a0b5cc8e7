//! Token distribution
//!
//! A `Distributor` holds a pool of one CEP-18 token and, on each triggered
//! round, pays a fixed amount out to its recipients and its reward target
//! according to basis-point shares fixed at initialization.

pub mod distributor;
pub mod shares;
pub mod errors;
pub mod events;


pub use distributor::Distributor;
pub use shares::{Allocation, DistributionPlan, Recipient, BASIS_POINTS, MAX_RECIPIENTS};
pub use errors::DistributorError;
pub use events::*;
