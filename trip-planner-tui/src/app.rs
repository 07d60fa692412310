//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 50 ms 执行一次（取决于有无事件）。
//! 抖动动画需要持续重绘，所以轮询间隔比纯按键驱动的界面短。
//!
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询输入
//!         let msg = handle_event(event , &app);           // 翻译成消息
//!         update::update(&mut app , msg)                  // 更新状态
//!     }
//!     app.outbox → bridge.submit()                    // 发出存储请求
//!     bridge.try_recv() → AppMessage::StoreReply      // 取回存储结果
//!     surface.finished_shakes() → ShakeFinished       // 结束抖动动画
//! }
//!

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::backend::StoreBridge;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 轮询间隔
const TICK: Duration = Duration::from_millis(50);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, bridge: &mut StoreBridge) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 轮询事件
        if let Some(event) = event::poll_event(TICK)? {
            // 4. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 5. 更新状态
            update::update(app, msg);
        }

        // 6. 发出存储请求
        for change in app.outbox.drain(..) {
            tracing::debug!("Submitting {:?} of {}", change.action, change.origin);
            bridge.submit(change);
            app.in_flight += 1;
        }

        // 7. 取回存储结果
        while let Some(reply) = bridge.try_recv() {
            update::update(app, AppMessage::StoreReply(reply));
        }

        // 8. 结束的抖动动画
        for id in app.board.target_mut().finished_shakes(Instant::now()) {
            update::update(app, AppMessage::ShakeFinished(id));
        }
    }

    if app.in_flight > 0 {
        tracing::warn!("Exiting with {} store request(s) in flight", app.in_flight);
    }

    Ok(())
}
