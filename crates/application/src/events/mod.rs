mod emitter;

pub use emitter::ProgressEmitter;
