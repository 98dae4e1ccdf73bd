mod config;
mod error;
mod statuses;
mod utils;

pub use config::{PracticumClientConfig, DEFAULT_ENDPOINT};
pub use error::PracticumError;
pub use statuses::PracticumClient;
pub use utils::{authorization_header, check_status, decode_body, statuses_url};
