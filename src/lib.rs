// lib.rs - Library exports for pool test harnesses

pub mod config;
pub mod bootstrap;
pub mod chain;
pub mod error;
pub mod math;
pub mod models;
