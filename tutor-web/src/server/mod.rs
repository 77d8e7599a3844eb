//! Server-side glue between the web layer and tutor-core

pub mod config;
pub mod tutor;
