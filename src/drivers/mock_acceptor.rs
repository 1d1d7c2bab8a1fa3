// 模拟投币器（没有接硬件时演示用）
use coin_pulse::simulator::PulseTrain;
use coin_pulse::{CoinType, Debouncer};
use defmt::info;
use embassy_time::{Duration, Instant, Timer};

/// 轮流投入的面额（含一枚无法识别的）
const COINS: [CoinType; 4] = [
    CoinType::OnePeso,
    CoinType::TwoPeso,
    CoinType::FivePeso,
    CoinType::Unknown,
];

/// 每个脉冲后附加的抖动边沿数
const BOUNCES: u8 = 2;

/// 模拟投币
///
/// 在真实硬件上，这会被替换为投币器信号线的 EXTI 中断（见 edge_task）
#[embassy_executor::task]
pub async fn mock_acceptor_task(debouncer: &'static Debouncer, interval_secs: u64) -> ! {
    let mut round = 0usize;

    loop {
        Timer::after(Duration::from_secs(interval_secs)).await;

        let coin = COINS[round % COINS.len()];
        round = round.wrapping_add(1);

        info!("Mock: {} inserted", coin.label());

        for edge in PulseTrain::for_coin(coin, Instant::now()).with_bounces(BOUNCES) {
            Timer::at(edge).await;
            debouncer.on_edge(Instant::now());
        }
    }
}
