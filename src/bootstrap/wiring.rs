//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Create infra implementations (fs, archive, main-thread queue)
//!   创建 infra 层具体实现
//! - ✅ Create platform implementations (clipboard) / 创建 platform 层具体实现
//! - ✅ Assemble the control builder and the action registry
//!   组装控件构建器与动作注册表
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//!
//! ## Architecture Principle / 架构原则
//!
//! > **This is the only place allowed to depend on sh-infra + sh-platform + sh-app simultaneously.**
//! > **这是唯一允许同时依赖 sh-infra、sh-platform 和 sh-app 的地方。**

use std::path::Path;
use std::sync::Arc;

use sh_app::{
    ActionRegistry, ControlFactoryRegistry, CopyFilePathsAction, DataControlPackageFactory,
    ZipFilesAction,
};
use sh_core::action::Action;
use sh_core::config::AppConfig;
use sh_core::ports::{ClipboardInjectionPort, DataPackageFactoryPort};
use sh_infra::{FsFileManager, MainThreadDispatcher, MainThreadLoop, ZipArchiver};
use sh_platform::SystemClipboard;

const DEFAULT_QUEUE_CAPACITY: usize = 16;
const DEFAULT_TEMP_FOLDER: &str = "Shapeshifter";

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（基础设施初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Clipboard initialization failed: {0}")]
    ClipboardInit(String),

    #[error("Temporary folder initialization failed: {0}")]
    TemporaryRoot(String),
}

/// Assembled pipeline handed to the caller.
/// 组装完成、交给调用方的流水线。
pub struct Shapeshift {
    pub control_packages: DataControlPackageFactory,
    pub actions: ActionRegistry,
}

/// Pipeline plus the loop that must be run on the main thread.
/// 流水线以及必须在主线程上运行的循环。
pub struct Wired {
    pub app: Shapeshift,
    pub main_loop: MainThreadLoop,
}

/// Wire the pipeline against the system clipboard
/// 基于系统剪贴板装配流水线
pub fn wire_dependencies(config: &AppConfig) -> WiringResult<Wired> {
    let clipboard = Arc::new(
        SystemClipboard::new().map_err(|e| WiringError::ClipboardInit(e.to_string()))?,
    );
    wire_with(config, clipboard.clone(), clipboard)
}

/// Wire the pipeline against arbitrary clipboard adapters
/// 使用任意剪贴板适配器装配流水线
pub fn wire_with(
    config: &AppConfig,
    capture: Arc<dyn DataPackageFactoryPort>,
    injection: Arc<dyn ClipboardInjectionPort>,
) -> WiringResult<Wired> {
    // Step 1: Resolve empty config values
    // 步骤 1：替换配置中的空值
    let temporary_root = if config.temporary_root.as_os_str().is_empty() {
        std::env::temp_dir().join(DEFAULT_TEMP_FOLDER)
    } else {
        config.temporary_root.clone()
    };
    let capacity = match config.main_thread_queue_capacity {
        0 => DEFAULT_QUEUE_CAPACITY,
        n => n,
    };

    // Step 2: Create infrastructure layer implementations
    // 步骤 2：创建基础设施层实现
    ensure_dir(&temporary_root)?;
    let file_manager = Arc::new(FsFileManager::new(temporary_root));
    let archiver = Arc::new(ZipArchiver::new());
    let (invoker, main_loop) = MainThreadDispatcher::channel(capacity);

    // Step 3: Assemble use cases and actions
    // 步骤 3：组装用例与动作
    let control_packages = DataControlPackageFactory::new(
        capture,
        Arc::new(ControlFactoryRegistry::with_default_factories()),
        Arc::new(invoker),
    );
    let actions: Vec<Arc<dyn Action>> = vec![
        Arc::new(ZipFilesAction::new(file_manager, archiver, injection.clone())),
        Arc::new(CopyFilePathsAction::new(injection)),
    ];

    Ok(Wired {
        app: Shapeshift {
            control_packages,
            actions: ActionRegistry::new(actions),
        },
        main_loop,
    })
}

fn ensure_dir(path: &Path) -> WiringResult<()> {
    std::fs::create_dir_all(path).map_err(|e| {
        WiringError::TemporaryRoot(format!("Failed to create {}: {}", path.display(), e))
    })
}
