mod cycle;
mod runtime;

pub use runtime::ProbeRuntime;
