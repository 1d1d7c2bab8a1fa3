// 状态事件处理
use crate::error::Result;
use crate::report::{Report, encode_line};
use crate::transport::LineWriter;

/// 启动完成：发送一次就绪报文（早于任何投币报文）
pub fn on_ready<W: LineWriter>(out: &mut W) -> Result<()> {
    info!("Handler: Ready");

    let line = encode_line(&Report::ready())?;
    out.write_line(&line)
}
