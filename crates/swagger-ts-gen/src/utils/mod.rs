pub mod refs;
pub mod spec;

pub(crate) use refs::Reference;
