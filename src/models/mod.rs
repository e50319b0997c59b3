//! Data models shared by the presenter and services

pub mod lookup;

pub use lookup::LookupOutcome;
