mod emitter;
mod support;
