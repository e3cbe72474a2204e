// Adapters katmanı: dış sistemler için somut gerçekleştirimler (http, dosya sistemi).

pub mod http;
pub mod status;
pub mod storage;

pub use http::HttpTransport;
pub use storage::LocalStorage;
