//! Main module for the string calculator functionality

pub mod delimiter;
pub mod engine;
