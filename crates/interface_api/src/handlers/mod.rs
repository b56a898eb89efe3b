//! Request handlers

pub mod address;
pub mod health;
pub mod person;
