//! Core types for Thought Partner: wire models, generation modes, the
//! insertion policy and the editor abstraction hosts implement.

pub mod api;
pub mod editor;
pub mod error;
pub mod insertion;
pub mod mode;
pub mod models;
pub mod settings;
