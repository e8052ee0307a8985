//! LocalStorage 封装模块
//!
//! 对 `web_sys::Storage` 的轻量封装。会话快照以 JSON 字符串落盘，
//! 读取失败（无浏览器环境、键缺失、JSON 损坏）一律表现为 `None`。

use serde::Serialize;
use serde::de::DeserializeOwned;

/// 本地存储操作封装
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 读取字符串值，键不存在或出错时返回 `None`
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// 写入字符串值，返回操作是否成功
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    /// 删除键值对，返回操作是否成功
    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }

    /// 读取并反序列化 JSON 值，任何一步失败都返回 `None`
    pub fn get_json<T: DeserializeOwned>(key: &str) -> Option<T> {
        serde_json::from_str(&Self::get(key)?).ok()
    }

    /// 序列化并写入 JSON 值
    pub fn set_json<T: Serialize>(key: &str, value: &T) -> bool {
        match serde_json::to_string(value) {
            Ok(blob) => Self::set(key, &blob),
            Err(_) => false,
        }
    }
}
