// 投币会话状态机
//
// Idle ──计数变化──▶ Accumulating ──计数变化──▶ Accumulating
//                        │
//                        └──静默 ≥ coin_gap──▶ 分类、上报、复位──▶ Idle
use crate::config::CoinConfig;
use crate::event::CoinEvent;
use crate::pulse::Debouncer;
use embassy_time::Instant;

/// 会话状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionState {
    /// 空闲
    Idle,
    /// 正在累计脉冲
    Accumulating,
}

/// 进行中的投币会话
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CoinSession {
    pub in_progress: bool,
    /// 计数最近一次变化时的值（空闲时即基线）
    pub last_observed_count: u32,
    /// 最近一次观察到新脉冲的时间
    pub last_pulse_at: Instant,
}

impl CoinSession {
    const fn idle() -> Self {
        Self {
            in_progress: false,
            last_observed_count: 0,
            last_pulse_at: Instant::from_ticks(0),
        }
    }
}

/// 投币会话跟踪器
///
/// 由外部调度器按 `poll_interval` 周期调用 [`CoinTracker::tick`]
pub struct CoinTracker<'a> {
    pulses: &'a Debouncer,
    config: CoinConfig,
    session: CoinSession,
}

impl<'a> CoinTracker<'a> {
    /// 消抖器须由同一份配置创建（`Debouncer::from_config`）
    pub fn new(pulses: &'a Debouncer, config: CoinConfig) -> Self {
        debug_assert_eq!(pulses.window(), config.debounce_window);

        Self {
            pulses,
            config,
            session: CoinSession::idle(),
        }
    }

    pub fn state(&self) -> SessionState {
        if self.session.in_progress {
            SessionState::Accumulating
        } else {
            SessionState::Idle
        }
    }

    pub fn session(&self) -> &CoinSession {
        &self.session
    }

    pub fn config(&self) -> &CoinConfig {
        &self.config
    }

    /// 轮询一次
    ///
    /// 会话在本次轮询结束时返回分类后的投币事件，计数器已经复位
    pub fn tick(&mut self, now: Instant) -> Option<CoinEvent> {
        let pulses = self.pulses.count();

        if pulses != self.session.last_observed_count {
            if !self.session.in_progress {
                debug!("Coin started at {} ms", now.as_millis());
                self.session.in_progress = true;
            }

            trace!("Pulse count {}", pulses);
            self.session.last_observed_count = pulses;
            self.session.last_pulse_at = now;
            return None;
        }

        if !self.session.in_progress {
            return None;
        }

        if now.saturating_duration_since(self.session.last_pulse_at) < self.config.coin_gap {
            return None;
        }

        let event = CoinEvent::classify(self.session.last_observed_count, &self.config.table);

        // 只释放已上报的脉冲，最后一次轮询之后到达的脉冲留给下一枚硬币
        let leftover = self.pulses.release(event.pulses, now);
        if leftover > 0 {
            debug!("{} pulse(s) carried into next coin", leftover);
        }

        self.session = CoinSession::idle();
        Some(event)
    }
}
