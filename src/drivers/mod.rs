pub mod serial;

// 模拟驱动（用于演示）
pub mod mock_acceptor;
