//! Core building blocks: run parameters and the Stats/Trainer invokers
//! consumed by the high-level `api` module.
pub mod invoke;
pub mod params;
