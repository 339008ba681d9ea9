/// Application layer - Use cases and DTOs
///
/// This layer orchestrates domain services and coordinates with
/// infrastructure (dpkg, sbomnix, file system) through ports.
pub mod dto;
pub mod use_cases;
