// 事件路由器
use crate::app::handlers;
use crate::error::Result;
use crate::event::Event;
use crate::transport::LineWriter;

/// 路由事件到对应的处理器
pub fn route_event<W: LineWriter>(event: Event, out: &mut W) -> Result<()> {
    match event {
        Event::Ready => {
            debug!("Routing ready event");
            handlers::status::on_ready(out)
        }

        Event::CoinInserted(coin) => {
            debug!("Routing coin event: pulses={}, value={}", coin.pulses, coin.value);
            handlers::coin::on_coin_inserted(&coin, out)
        }
    }
}
