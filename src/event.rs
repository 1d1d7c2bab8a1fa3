// 事件系统
//
// 所有系统事件都通过这个枚举传递
use crate::coin::{CoinTable, CoinType};
use crate::error::{Error, Result};
use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, RawMutex};
use embassy_sync::channel::{Channel, Sender};

/// 事件通道容量
pub const EVENT_CHANNEL_SIZE: usize = 8;

/// 事件通道（轮询任务 → 上报任务）
pub type EventChannel = Channel<CriticalSectionRawMutex, Event, EVENT_CHANNEL_SIZE>;

/// 一次完整投币的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CoinEvent {
    /// 本次会话累计的脉冲数
    pub pulses: u32,
    /// 分类结果
    pub coin: CoinType,
    /// 面值（1/2/5，无法识别为 0）
    pub value: u32,
    /// 面值是否大于 0
    pub valid: bool,
}

impl CoinEvent {
    /// 按区间表分类脉冲数
    pub fn classify(pulses: u32, table: &CoinTable<'_>) -> Self {
        let coin = table.classify(pulses);
        let value = coin.value();

        Self {
            pulses,
            coin,
            value,
            valid: value > 0,
        }
    }
}

/// 系统事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// 启动完成
    Ready,

    /// 投币事件
    CoinInserted(CoinEvent),
}

/// 事件接收端（上报链路）
pub trait EventSink {
    /// 非阻塞投递
    fn try_publish(&mut self, event: Event) -> Result<()>;
}

impl<M: RawMutex, const N: usize> EventSink for Sender<'_, M, Event, N> {
    fn try_publish(&mut self, event: Event) -> Result<()> {
        self.try_send(event).map_err(|_| Error::BufferFull)
    }
}

/// 上报投币事件（尽力而为）
///
/// 上报失败只记录日志，不影响会话复位
pub fn emit<S: EventSink>(sink: &mut S, coin: CoinEvent) {
    if coin.valid {
        info!(
            "Coin: {} ({} pulses, value {})",
            coin.coin.label(),
            coin.pulses,
            coin.value
        );
    } else {
        warn!("Unrecognised coin: {} pulses", coin.pulses);
    }

    if let Err(e) = sink.try_publish(Event::CoinInserted(coin)) {
        warn!("Coin event dropped: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_builds_record() {
        let event = CoinEvent::classify(13, &CoinTable::PESO);
        assert_eq!(
            event,
            CoinEvent {
                pulses: 13,
                coin: CoinType::FivePeso,
                value: 5,
                valid: true,
            }
        );

        let unknown = CoinEvent::classify(4, &CoinTable::PESO);
        assert_eq!(unknown.coin, CoinType::Unknown);
        assert_eq!(unknown.value, 0);
        assert!(!unknown.valid);
    }

    #[test]
    fn emit_forwards_to_channel() {
        let channel: Channel<CriticalSectionRawMutex, Event, 2> = Channel::new();
        let mut tx = channel.sender();

        emit(&mut tx, CoinEvent::classify(7, &CoinTable::PESO));

        assert_eq!(
            channel.try_receive().ok(),
            Some(Event::CoinInserted(CoinEvent::classify(7, &CoinTable::PESO)))
        );
    }

    #[test]
    fn emit_drops_when_channel_full() {
        let channel: Channel<CriticalSectionRawMutex, Event, 1> = Channel::new();
        let mut tx = channel.sender();

        emit(&mut tx, CoinEvent::classify(1, &CoinTable::PESO));
        emit(&mut tx, CoinEvent::classify(13, &CoinTable::PESO));

        assert_eq!(
            channel.try_receive().ok(),
            Some(Event::CoinInserted(CoinEvent::classify(1, &CoinTable::PESO)))
        );
        assert!(channel.try_receive().is_err());
    }

    #[test]
    fn sender_reports_full_channel() {
        let channel: Channel<CriticalSectionRawMutex, Event, 1> = Channel::new();
        let mut tx = channel.sender();

        assert_eq!(tx.try_publish(Event::Ready), Ok(()));
        assert_eq!(tx.try_publish(Event::Ready), Err(Error::BufferFull));
    }
}
