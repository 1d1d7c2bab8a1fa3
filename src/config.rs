// 投币器配置
//
// 编译期或加载期常量，运行中不可修改
use crate::coin::CoinTable;
use crate::error::{Error, Result};
use embassy_time::Duration;

/// 消抖窗口（微秒）：间隔小于此值的边沿视为噪声
pub const DEBOUNCE_US: u64 = 2500;

/// 静默间隔（毫秒）：超过此时间无脉冲即判定一枚硬币结束
pub const COIN_GAP_MS: u64 = 240;

/// 轮询周期（毫秒）
pub const POLL_INTERVAL_MS: u64 = 5;

/// 触发边沿
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgePolarity {
    /// 下降沿（集电极开路、低有效输出，最常见）
    #[default]
    Falling,
    /// 上升沿（高有效输出）
    Rising,
}

/// 投币器配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinConfig {
    /// 消抖窗口
    pub debounce_window: Duration,
    /// 静默间隔
    pub coin_gap: Duration,
    /// 轮询周期
    pub poll_interval: Duration,
    /// 触发边沿
    pub polarity: EdgePolarity,
    /// 面额区间表
    pub table: CoinTable<'static>,
}

impl CoinConfig {
    pub const fn new() -> Self {
        Self {
            debounce_window: Duration::from_micros(DEBOUNCE_US),
            coin_gap: Duration::from_millis(COIN_GAP_MS),
            poll_interval: Duration::from_millis(POLL_INTERVAL_MS),
            polarity: EdgePolarity::Falling,
            table: CoinTable::PESO,
        }
    }

    pub const fn with_polarity(mut self, polarity: EdgePolarity) -> Self {
        self.polarity = polarity;
        self
    }

    pub const fn with_debounce_window(mut self, window: Duration) -> Self {
        self.debounce_window = window;
        self
    }

    pub const fn with_coin_gap(mut self, gap: Duration) -> Self {
        self.coin_gap = gap;
        self
    }

    pub const fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub const fn with_table(mut self, table: CoinTable<'static>) -> Self {
        self.table = table;
        self
    }

    /// 校验时间参数
    ///
    /// 静默间隔必须长于消抖窗口，轮询周期必须非零且短于静默间隔
    pub fn validate(&self) -> Result<()> {
        if self.poll_interval == Duration::from_ticks(0) {
            warn!("Poll interval must be non-zero");
            return Err(Error::InvalidParameter);
        }

        if self.coin_gap <= self.debounce_window {
            warn!(
                "Coin gap {} us not longer than debounce window {} us",
                self.coin_gap.as_micros(),
                self.debounce_window.as_micros()
            );
            return Err(Error::InvalidParameter);
        }

        if self.poll_interval >= self.coin_gap {
            warn!(
                "Poll interval {} ms not shorter than coin gap {} ms",
                self.poll_interval.as_millis(),
                self.coin_gap.as_millis()
            );
            return Err(Error::InvalidParameter);
        }

        Ok(())
    }
}

impl Default for CoinConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CoinConfig::default();

        assert_eq!(config.debounce_window.as_micros(), 2500);
        assert_eq!(config.coin_gap.as_millis(), 240);
        assert_eq!(config.poll_interval.as_millis(), 5);
        assert_eq!(config.polarity, EdgePolarity::Falling);
        assert_eq!(config.table, CoinTable::PESO);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn builders_override_fields() {
        let config = CoinConfig::new()
            .with_polarity(EdgePolarity::Rising)
            .with_coin_gap(Duration::from_millis(300))
            .with_poll_interval(Duration::from_millis(10));

        assert_eq!(config.polarity, EdgePolarity::Rising);
        assert_eq!(config.coin_gap.as_millis(), 300);
        assert_eq!(config.poll_interval.as_millis(), 10);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_inconsistent_timing() {
        let zero_poll = CoinConfig::new().with_poll_interval(Duration::from_ticks(0));
        let short_gap = CoinConfig::new().with_coin_gap(Duration::from_micros(2000));
        let slow_poll = CoinConfig::new().with_poll_interval(Duration::from_millis(240));

        assert_eq!(zero_poll.validate(), Err(Error::InvalidParameter));
        assert_eq!(short_gap.validate(), Err(Error::InvalidParameter));
        assert_eq!(slow_poll.validate(), Err(Error::InvalidParameter));
    }
}
