pub mod allow_list;
pub mod fetch;
pub mod types;

pub use allow_list::is_url_allowed;
pub use fetch::fetch_text;
pub use types::{FetchFn, FetchResponse, NetworkConfig, NetworkError};
