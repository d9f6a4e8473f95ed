//! kcal-tools Library
//!
//! Core functionality for the energy calculator console: TDEE estimation,
//! food-energy tracking, and kcal/kJ conversion.

pub mod build_info;
pub mod console;
pub mod energy;
pub mod models;
pub mod tools;
