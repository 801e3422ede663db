//! Domain models for the acquisition pipeline
//!
//! [`RepositoryCandidate`] is what the lister produces; [`AcquisitionResult`]
//! is what the cloner produces for each selected candidate.

mod acquisition;
mod candidate;

pub use acquisition::{AcquisitionResult, AcquisitionStatus, Outcome};
pub use candidate::RepositoryCandidate;
#[cfg(test)]
pub use candidate::NO_DESCRIPTION;
