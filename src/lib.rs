//! 投币器脉冲计数
//!
//! 消抖 → 脉冲累计 → 静默间隔判定结束 → 面额分类 → 上报
#![cfg_attr(not(test), no_std)]

// 启用 alloc（报文编码）
extern crate alloc;

#[macro_use]
mod fmt;

pub mod app;
pub mod coin;
pub mod config;
pub mod error;
pub mod event;
pub mod pulse;
pub mod report;
pub mod session;
pub mod simulator;
pub mod transport;

// 重新导出常用类型
pub use coin::{CoinTable, CoinType, PulseRange};
pub use config::{CoinConfig, EdgePolarity};
pub use error::{Error, Result};
pub use event::{CoinEvent, Event, EventSink};
pub use pulse::Debouncer;
pub use report::Report;
pub use session::{CoinTracker, SessionState};
