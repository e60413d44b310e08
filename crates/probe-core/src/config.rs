mod constants;
mod defaults;
mod env;
mod file;
mod load;
mod types;
mod util;

pub use types::ProbeConfig;
