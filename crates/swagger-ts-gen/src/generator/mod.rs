pub(crate) mod documentation;
pub(crate) mod emitter;
pub(crate) mod metrics;
pub mod orchestrator;
pub(crate) mod schema;

#[cfg(test)]
mod tests;
