//! # Pure Data Module / 纯数据模块 - Data Transfer Objects Only
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Define configuration data structures / 定义配置数据结构
//! - ✅ Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic or policies / 禁止任何业务逻辑或策略**
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No default value calculation / 禁止默认值计算**
//!
//! ## Iron Rule / 铁律
//!
//! > **This module contains data only, no policy, no validation.**
//! > **此模块只包含数据结构定义，禁止：任何业务逻辑或策略、验证逻辑、默认值计算。**

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Root under which actions stage temporary folders
    /// (may be empty - the wiring layer decides what empty means)
    /// 临时目录根路径（可能为空 - 由装配层决定空值的含义）
    pub temporary_root: PathBuf,

    /// Capacity of the main-thread job queue (0 is a fact, not an error)
    /// 主线程任务队列容量（0 是事实，不是错误）
    pub main_thread_queue_capacity: usize,

    /// Directory for rolling log files; empty disables file logging
    /// 日志目录；为空则不写文件日志
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// **Prohibited / 禁止**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    /// 此方法必须不包含任何验证或默认值逻辑。空字符串是合法的"事实"。
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            temporary_root: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("temporary_root"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            main_thread_queue_capacity: toml_value
                .get("runtime")
                .and_then(|r| r.get("main_thread_queue_capacity"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as usize,
            log_dir: PathBuf::from(
                toml_value
                    .get("logging")
                    .and_then(|l| l.get("log_dir"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig（所有字段为空/默认值）
    pub fn empty() -> Self {
        Self {
            temporary_root: PathBuf::new(),
            main_thread_queue_capacity: 0,
            log_dir: PathBuf::new(),
        }
    }

    /// Create AppConfig with system-default paths for production use
    /// 生产环境使用：创建具有系统默认路径的 AppConfig
    ///
    /// **Note**: The base directory is computed by the caller (e.g. from
    /// `std::env::temp_dir()`); this constructor only joins paths.
    /// 注意：基础目录由调用方计算；此构造函数只负责拼接路径。
    pub fn with_system_defaults(temp_dir: PathBuf) -> Self {
        Self {
            temporary_root: temp_dir.join("Shapeshifter"),
            main_thread_queue_capacity: 16,
            log_dir: PathBuf::new(),
        }
    }
}
