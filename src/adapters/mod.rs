// Adapters layer: concrete implementations for external systems (storage, http, browser).

pub mod browser;
pub mod chromium;
pub mod http;
pub mod storage;
