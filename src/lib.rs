//! Touchline - Football Club Management Service Layer
//!
//! This crate implements the backend-facing services of a club management
//! application: phone-OTP and social-login authentication (mock strategies),
//! Stripe payment processing, and the club domain model.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
