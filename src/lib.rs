//! workout-stats: distance, mean speed and calories for running, walking and
//! swimming sensor packages, with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
