// 模拟投币器
//
// 生成一枚硬币的原始边沿时间戳，可选在每个脉冲后附加抖动边沿。
// 用于测试和没有接投币器时的演示模式
use crate::coin::CoinType;
use embassy_time::{Duration, Instant};

/// 投币器中速档的脉冲间隔
pub const PULSE_SPACING_MS: u64 = 50;

/// 抖动边沿相对脉冲的偏移
pub const BOUNCE_OFFSET_US: u64 = 300;

/// 每个脉冲后最多的抖动边沿数，最后一个抖动仍落在默认消抖窗口内
pub const MAX_BOUNCES: u8 = 8;

/// 边沿序列
#[derive(Debug, Clone)]
pub struct PulseTrain {
    next: Instant,
    spacing: Duration,
    remaining: u32,
    bounces: u8,
    pending_bounces: u8,
    last_pulse: Instant,
}

impl PulseTrain {
    /// `pulses` 个间隔为 `spacing` 的脉冲，第一个在 `start`
    pub fn new(start: Instant, pulses: u32, spacing: Duration) -> Self {
        Self {
            next: start,
            spacing,
            remaining: pulses,
            bounces: 0,
            pending_bounces: 0,
            last_pulse: start,
        }
    }

    /// 指定面额的典型脉冲数（1 / 7 / 13）
    pub fn for_coin(coin: CoinType, start: Instant) -> Self {
        Self::new(start, typical_pulses(coin), Duration::from_millis(PULSE_SPACING_MS))
    }

    /// 每个脉冲后附加 `bounces` 个抖动边沿，超过 [`MAX_BOUNCES`] 按上限处理
    pub fn with_bounces(mut self, bounces: u8) -> Self {
        self.bounces = bounces.min(MAX_BOUNCES);
        self
    }

    /// 最后一个真实脉冲的时间
    pub fn last_pulse_at(&self) -> Instant {
        let pulses = self.remaining.saturating_sub(1) as u64;
        self.next + Duration::from_ticks(self.spacing.as_ticks() * pulses)
    }
}

/// 各面额实测的典型脉冲数
pub const fn typical_pulses(coin: CoinType) -> u32 {
    match coin {
        CoinType::Unknown => 3,
        CoinType::OnePeso => 1,
        CoinType::TwoPeso => 7,
        CoinType::FivePeso => 13,
    }
}

impl Iterator for PulseTrain {
    type Item = Instant;

    fn next(&mut self) -> Option<Instant> {
        if self.pending_bounces > 0 {
            let n = (self.bounces - self.pending_bounces + 1) as u64;
            self.pending_bounces -= 1;
            return Some(self.last_pulse + Duration::from_micros(BOUNCE_OFFSET_US * n));
        }

        if self.remaining == 0 {
            return None;
        }

        let pulse = self.next;
        self.last_pulse = pulse;
        self.next = pulse + self.spacing;
        self.remaining -= 1;
        self.pending_bounces = self.bounces;
        Some(pulse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pulse::Debouncer;

    #[test]
    fn clean_train() {
        let edges: Vec<_> =
            PulseTrain::new(Instant::from_millis(10), 3, Duration::from_millis(50)).collect();

        assert_eq!(
            edges,
            [
                Instant::from_millis(10),
                Instant::from_millis(60),
                Instant::from_millis(110)
            ]
        );
    }

    #[test]
    fn last_pulse_is_known_up_front() {
        let train = PulseTrain::for_coin(CoinType::FivePeso, Instant::from_millis(0));

        assert_eq!(train.last_pulse_at(), Instant::from_millis(600));
        assert_eq!(train.last().unwrap(), Instant::from_millis(600));
    }

    #[test]
    fn bounces_follow_each_pulse() {
        let edges: Vec<_> = PulseTrain::new(Instant::from_millis(10), 2, Duration::from_millis(50))
            .with_bounces(2)
            .collect();

        assert_eq!(
            edges,
            [
                Instant::from_micros(10_000),
                Instant::from_micros(10_300),
                Instant::from_micros(10_600),
                Instant::from_micros(60_000),
                Instant::from_micros(60_300),
                Instant::from_micros(60_600),
            ]
        );
    }

    #[test]
    fn debouncer_filters_bounces() {
        let debouncer = Debouncer::new(Duration::from_micros(2500));

        let train = PulseTrain::for_coin(CoinType::TwoPeso, Instant::from_millis(100));
        for edge in train.with_bounces(3) {
            debouncer.on_edge(edge);
        }

        assert_eq!(debouncer.count(), typical_pulses(CoinType::TwoPeso));
    }

    #[test]
    fn bounce_count_is_capped() {
        let edges: Vec<_> = PulseTrain::new(Instant::from_millis(10), 2, Duration::from_millis(50))
            .with_bounces(u8::MAX)
            .collect();

        assert_eq!(edges.len(), 2 * (1 + MAX_BOUNCES as usize));
        assert!(edges.windows(2).all(|pair| pair[0] < pair[1]));

        let debouncer = Debouncer::new(Duration::from_micros(2500));
        for edge in edges {
            debouncer.on_edge(edge);
        }
        assert_eq!(debouncer.count(), 2);
    }
}
