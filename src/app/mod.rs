//! Application layer - usecases over the domain ports

pub mod usecases;
