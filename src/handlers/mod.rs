// src/handlers/mod.rs
pub mod analyze;
pub mod chat;
pub mod system;
