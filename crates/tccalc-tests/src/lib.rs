//! Integration test crate for tccalc.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It drives tccalc-core directly and through the tccalc-app front end.

#[cfg(test)]
mod conversion;

#[cfg(test)]
mod arithmetic;
