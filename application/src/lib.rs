pub mod commands;
pub mod events;
pub mod feedback_service;
pub mod host;
pub mod orchestrator;
pub mod result_display;
pub mod status;

#[cfg(test)]
pub(crate) mod testing;
