// 错误定义
//
// 状态机本身没有错误路径，这里只覆盖配置与上报链路

/// 结果类型
pub type Result<T> = core::result::Result<T, Error>;

/// 错误类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// 无效参数（配置校验失败）
    InvalidParameter,
    /// 缓冲区满（事件通道已满，事件被丢弃）
    BufferFull,
    /// 序列化失败
    SerializeFailed,
    /// 报文格式无效
    InvalidFormat,
    /// 串口写入失败
    TransportError,
}
