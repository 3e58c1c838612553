//! In-process HTTP testing for Holocron routers.

mod app;

pub use app::{TestApp, TestRequest, TestResponse};
