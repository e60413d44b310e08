mod client;
mod errors;
mod origin;
mod retry;
mod types;

pub use client::Client;
pub use errors::{ClientError, ClientResult};
pub use origin::{validate_origin, OriginError};
pub use retry::RetryPolicy;
pub use types::{
    FetchedArtifact, PlatformTag, ResultToken, Session, PROTOCOL_VERSION, QUARANTINED_EXIT_CODE,
};
