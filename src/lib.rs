//! API for viewing and signing up for extracurricular activities at
//! Mergington High School.

pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod web;
