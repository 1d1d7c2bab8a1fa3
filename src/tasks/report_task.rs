// 上报任务
use crate::drivers::serial::SerialReporter;
use coin_pulse::app::route_event;
use coin_pulse::event::{EVENT_CHANNEL_SIZE, Event};
use defmt::{info, warn};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Receiver;

/// 上报任务
///
/// 从事件队列接收事件并路由到对应的处理器，结果写到串口
#[embassy_executor::task]
pub async fn report_task(
    event_rx: Receiver<'static, CriticalSectionRawMutex, Event, EVENT_CHANNEL_SIZE>,
    mut serial: SerialReporter,
) -> ! {
    info!("Report task started");

    loop {
        let event = event_rx.receive().await;

        // 串口故障不重试，也不回传给状态机
        if let Err(e) = route_event(event, &mut serial) {
            warn!("Event report failed: {:?}", e);
        }
    }
}
