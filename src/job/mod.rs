//! Job descriptors and their fixed configuration catalogs.
//!
//! A [`model::Job`] is a plain value: it carries everything needed to produce
//! one capture and never mutates host state itself. All host interaction is
//! performed by the batch runner using the descriptor as parameters.

/// Process-wide read-only lookup tables.
pub mod catalog;
/// The job descriptor record.
pub mod model;
/// Filename placeholder substitution.
pub mod template;
