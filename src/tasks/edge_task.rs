// 边沿任务（高优先级执行器，相当于中断上下文）
use coin_pulse::{Debouncer, EdgePolarity};
use defmt::info;
use embassy_stm32::exti::ExtiInput;
use embassy_time::Instant;

/// 边沿任务
///
/// 等待投币器信号线的边沿并交给消抖器；循环内不做 I/O
#[embassy_executor::task]
pub async fn edge_task(
    mut pin: ExtiInput<'static>,
    debouncer: &'static Debouncer,
    polarity: EdgePolarity,
) -> ! {
    info!("Edge task started ({:?} edge)", polarity);

    loop {
        match polarity {
            EdgePolarity::Falling => pin.wait_for_falling_edge().await,
            EdgePolarity::Rising => pin.wait_for_rising_edge().await,
        }

        debouncer.on_edge(Instant::now());
    }
}
