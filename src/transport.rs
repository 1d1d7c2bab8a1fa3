// 上报传输层
//
// 只负责把编码好的一行写出去；串口驱动由固件提供
use crate::error::Result;
use alloc::vec::Vec;

/// 串口配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerialConfig {
    /// 波特率
    pub baud_rate: u32,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self { baud_rate: 115_200 }
    }
}

/// 行输出
pub trait LineWriter {
    /// 写出完整的一行（含换行符）
    fn write_line(&mut self, line: &[u8]) -> Result<()>;
}

/// 内存缓冲（主机侧采集）
impl LineWriter for Vec<u8> {
    fn write_line(&mut self, line: &[u8]) -> Result<()> {
        self.extend_from_slice(line);
        Ok(())
    }
}
