//! Trip Planner TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 存储与配置 (`backend/`)
//!
//! 事件列表的状态机（查看 / 编辑、保存中、抖动）全部在 trip-planner-core 中，
//! TUI 只负责把按键翻译成 board 的调用，并把 board 挂载的节点画出来。
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 文件日志
//!     config.load()           // 读取主题、默认排序、数据文件位置
//!     Runtime::new()          // 存储请求在 tokio 运行时上执行
//!     board.load(store)       // 加载参考数据和事件
//!     init_terminal()         // 初始化终端
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!     config.save()           // 记住最后使用的排序
//!
//! }
//!

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_utils;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use trip_planner_core::{DataStore, EventBoard};

use backend::{get_config_dir, ConfigService, JsonEventStore, LocalConfigService, StoreBridge};
use model::{App, TerminalSurface};
use util::{init_logging, init_terminal, restore_terminal};

/// 退出时等待进行中的存储请求的最长时间
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

fn main() -> Result<(), anyhow::Error> {
    // 1. 初始化日志
    let log_path = init_logging(&get_config_dir())?;
    tracing::info!("Starting Trip Planner TUI (log: {})", log_path.display());

    // 2. 读取配置
    let config_service = LocalConfigService::new();
    let mut config = config_service.load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {e:#}");
        backend::AppConfig::default()
    });
    view::theme::set_theme(config.theme);

    // 3. 加载数据
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let store = Arc::new(JsonEventStore::new(config.data_path()));
    let reference = runtime
        .block_on(store.reference())
        .with_context(|| format!("Failed to read {}", store.path().display()))?;

    let mut board =
        EventBoard::new(TerminalSurface::new(), reference).with_sort(config.default_sort);
    runtime
        .block_on(board.load(store.as_ref()))
        .context("Failed to load events")?;

    let mut bridge = StoreBridge::new(runtime.handle().clone(), store as Arc<dyn DataStore>);
    let mut app = App::new(board);

    // 4. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &mut bridge);

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 6. 让进行中的写入有机会完成
    runtime.shutdown_timeout(SHUTDOWN_TIMEOUT);

    // 7. 记住最后使用的排序
    config.default_sort = app.board.sort();
    if let Err(e) = config_service.save(&config) {
        tracing::warn!("Failed to save config: {e:#}");
    }

    tracing::info!("Trip Planner TUI exited");
    result
}
