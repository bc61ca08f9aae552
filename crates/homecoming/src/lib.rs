//! Scoring engine, archetype quiz, and feedback store behind the Homecoming site.
//!
//! The crate is split the same way the site is: [`scoring`] builds the base score from a
//! point allocation, [`bonus`] adds the social value line items and resolves the tier,
//! [`quiz`] classifies the 20-question archetype assessment, and [`feedback`] persists
//! community submissions behind an HTTP router.

pub mod bonus;
pub mod config;
pub mod error;
pub mod feedback;
pub mod quiz;
pub mod scoring;
pub mod telemetry;
