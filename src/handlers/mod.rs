// handlers/mod.rs - HTTP handlers grouped by resource
//
// /v1/courses      → courses.rs
// /v1/instructors  → instructors.rs
// /, /health       → health.rs

pub mod courses;
pub mod health;
pub mod instructors;
