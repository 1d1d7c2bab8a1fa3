// 串口上报驱动
use coin_pulse::error::{Error, Result};
use coin_pulse::transport::LineWriter;
use embassy_stm32::mode::Blocking;
use embassy_stm32::usart::UartTx;

/// 串口上报（阻塞写，单行很短）
pub struct SerialReporter {
    tx: UartTx<'static, Blocking>,
}

impl SerialReporter {
    pub const fn new(tx: UartTx<'static, Blocking>) -> Self {
        Self { tx }
    }
}

impl LineWriter for SerialReporter {
    fn write_line(&mut self, line: &[u8]) -> Result<()> {
        self.tx.blocking_write(line).map_err(|_| Error::TransportError)?;
        self.tx.blocking_flush().map_err(|_| Error::TransportError)
    }
}
