//! 浏览器 API 封装模块
//!
//! 核心库只认识 trait（`HttpClient` / `KeyValueStorage` / `UploadFile`），
//! 这里提供它们在浏览器中的实现，以及基于 History API 的路由服务。

mod http;
pub mod router;
mod storage;

pub use http::{BrowserFile, BrowserHttpClient, ObjectUrl};
pub use storage::{BrowserStorage, session_store};
