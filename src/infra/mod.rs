pub mod http_client;
pub mod nominatim;
pub mod sleeper;
