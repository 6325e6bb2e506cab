//! Sizing models.
//!
//! Each model exposes plain functions for direct use and, where it forms a
//! complete input-to-output calculation, a [`twine_core::Model`] adapter.

pub mod plumbing;
