pub mod logging;
pub mod http_trace;
pub mod payload;
