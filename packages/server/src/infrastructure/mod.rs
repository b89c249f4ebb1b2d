//! Infrastructure layer: concrete repositories and wire-format DTOs.

pub mod dto;
pub mod repository;
