mod errors;
mod install;
mod run;

pub use errors::{ExecutionError, ExecutionResult};
pub use install::{artifact_path, install};
pub use run::{run, Outcome};

#[cfg(test)]
mod tests;
