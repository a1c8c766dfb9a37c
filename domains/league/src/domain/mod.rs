//! League domain layer: entities and persistence contract

pub mod entities;
