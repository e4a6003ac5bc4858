//! LocalStorage 封装模块
//!
//! 会话以原始字符串写入（token 不做 JSON 包装），因此这里直接使用
//! `gloo_storage::LocalStorage::raw()` 拿到底层 `web_sys::Storage`。

use gloo_storage::{LocalStorage, Storage};
use kos_admin::error::{AdminError, AdminResult};
use kos_admin::session::{KeyValueStorage, SessionStore};

/// 浏览器 LocalStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> AdminResult<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| AdminError::storage(format!("Failed to write {}: {:?}", key, e)))
    }

    fn delete(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// 以 LocalStorage 为后端的会话存储
pub fn session_store() -> SessionStore<BrowserStorage> {
    SessionStore::new(BrowserStorage)
}
