// 串口上报报文（每行一个 JSON 对象）
//
// {"type":"status","msg":"READY coin-pulse reader"}
// {"type":"coin","pulses":13,"value":5,"ok":true}
use crate::error::{Error, Result};
use crate::event::CoinEvent;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// 启动横幅
pub const READY_MESSAGE: &str = "READY coin-pulse reader";

/// 单行报文
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Report {
    /// 状态消息
    Status { msg: String },

    /// 投币结果
    Coin {
        pulses: u32,
        value: u32,
        // 旧固件不带 ok 字段，按有效处理
        #[serde(default = "default_ok")]
        ok: bool,
    },
}

fn default_ok() -> bool {
    true
}

impl Report {
    /// 启动就绪报文
    pub fn ready() -> Self {
        Report::Status {
            msg: READY_MESSAGE.to_string(),
        }
    }
}

impl From<&CoinEvent> for Report {
    fn from(event: &CoinEvent) -> Self {
        Report::Coin {
            pulses: event.pulses,
            value: event.value,
            ok: event.valid,
        }
    }
}

/// 编码为一行（紧凑 JSON + `\n`）
pub fn encode_line(report: &Report) -> Result<Vec<u8>> {
    let mut line = serde_json::to_vec(report).map_err(|_| Error::SerializeFailed)?;
    line.push(b'\n');
    Ok(line)
}

/// 解码一行
///
/// 非 JSON 行（例如调试输出）或未知类型返回 `InvalidFormat`
pub fn decode_line(line: &[u8]) -> Result<Report> {
    let line = line.trim_ascii();
    if line.is_empty() {
        return Err(Error::InvalidFormat);
    }

    serde_json::from_slice(line).map_err(|_| Error::InvalidFormat)
}
