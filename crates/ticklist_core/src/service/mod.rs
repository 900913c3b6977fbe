//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store transitions and slot persistence into use-case
//!   level APIs.
//! - Keep UI layers decoupled from storage details.

pub mod task_service;
