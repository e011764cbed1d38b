pub mod error;
pub mod orchestrator;
pub mod payload;
pub mod state;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;
