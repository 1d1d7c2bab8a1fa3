// 投币轮询任务
use coin_pulse::event::{self, EVENT_CHANNEL_SIZE, Event};
use coin_pulse::{CoinConfig, CoinTracker, Debouncer};
use defmt::info;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Instant, Ticker};

/// 投币轮询任务
///
/// 按轮询周期驱动会话状态机，完成的投币事件非阻塞地投递到事件队列
#[embassy_executor::task]
pub async fn coin_task(
    debouncer: &'static Debouncer,
    config: CoinConfig,
    mut event_tx: Sender<'static, CriticalSectionRawMutex, Event, EVENT_CHANNEL_SIZE>,
) -> ! {
    info!(
        "Coin task started (debounce {} us, gap {} ms, poll {} ms)",
        debouncer.window().as_micros(),
        config.coin_gap.as_millis(),
        config.poll_interval.as_millis()
    );

    let mut tracker = CoinTracker::new(debouncer, config);
    let mut ticker = Ticker::every(config.poll_interval);

    loop {
        ticker.next().await;

        if let Some(coin) = tracker.tick(Instant::now()) {
            event::emit(&mut event_tx, coin);
        }
    }
}
