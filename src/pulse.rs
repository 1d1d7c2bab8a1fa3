// 边沿消抖与脉冲计数
//
// 计数与最近边沿时间戳是两个上下文之间唯一的共享状态：
// - 边沿上下文（中断）：`on_edge`，只做一次读-改-写，不阻塞、不分配
// - 轮询上下文：`count` / `reset` / `release`
// 所有访问都在临界区内完成（屏蔽中断），读到的计数总是完整值
use core::cell::Cell;
use crate::config::CoinConfig;
use embassy_sync::blocking_mutex::CriticalSectionMutex;
use embassy_time::{Duration, Instant};

/// 共享边沿状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeState {
    /// 自上次复位以来被接受的边沿数
    pub count: u32,
    /// 最近一次被接受的边沿时间
    pub last_edge: Instant,
}

impl EdgeState {
    const fn new(now: Instant) -> Self {
        Self {
            count: 0,
            last_edge: now,
        }
    }
}

/// 边沿消抖器
pub struct Debouncer {
    window: Duration,
    state: CriticalSectionMutex<Cell<EdgeState>>,
}

impl Debouncer {
    /// 创建消抖器（时间戳从 0 起算）
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            state: CriticalSectionMutex::new(Cell::new(EdgeState::new(Instant::from_ticks(0)))),
        }
    }

    /// 按配置的消抖窗口创建
    pub const fn from_config(config: &CoinConfig) -> Self {
        Self::new(config.debounce_window)
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// 处理一个原始边沿
    ///
    /// 距上次被接受的边沿不足消抖窗口时丢弃，返回是否被计数
    pub fn on_edge(&self, now: Instant) -> bool {
        self.state.lock(|state| {
            let mut current = state.get();

            if now.saturating_duration_since(current.last_edge) < self.window {
                return false;
            }

            current.last_edge = now;
            current.count = current.count.wrapping_add(1);
            state.set(current);
            true
        })
    }

    /// 读取当前脉冲计数
    pub fn count(&self) -> u32 {
        self.snapshot().count
    }

    /// 读取共享状态快照
    pub fn snapshot(&self) -> EdgeState {
        self.state.lock(|state| state.get())
    }

    /// 计数清零，最近边沿时间设为 `now`
    ///
    /// 只能在没有进行中的投币会话时调用，否则会丢掉尚未处理的脉冲
    pub fn reset(&self, now: Instant) {
        self.state.lock(|state| state.set(EdgeState::new(now)));
    }

    /// 会话结束后释放已上报的 `consumed` 个脉冲，返回剩余计数
    ///
    /// 最后一次轮询之后没有新脉冲时等同于 `reset(now)`；
    /// 若有脉冲恰好在此期间到达，则保留为下一枚硬币的计数，时间戳不动
    pub fn release(&self, consumed: u32, now: Instant) -> u32 {
        self.state.lock(|state| {
            let current = state.get();
            let leftover = current.count.saturating_sub(consumed);

            if leftover == 0 {
                state.set(EdgeState::new(now));
            } else {
                state.set(EdgeState {
                    count: leftover,
                    last_edge: current.last_edge,
                });
            }

            leftover
        })
    }
}
