// 投币事件处理
use crate::error::Result;
use crate::event::CoinEvent;
use crate::report::{Report, encode_line};
use crate::transport::LineWriter;

/// 处理投币事件：编码为一行并写出
pub fn on_coin_inserted<W: LineWriter>(coin: &CoinEvent, out: &mut W) -> Result<()> {
    let line = encode_line(&Report::from(coin))?;

    trace!("  Encoded coin report: {} bytes", line.len());

    out.write_line(&line)
}
