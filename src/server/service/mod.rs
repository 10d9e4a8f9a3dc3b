//! Service layer for business logic.
//!
//! Services own the rules of each operation: existence checks, field validation and the
//! ordering of favorite checks. They coordinate the repositories of the data layer and
//! hand DTOs back to the controllers. Every check runs before the first write.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;

#[cfg(test)]
mod tests;
