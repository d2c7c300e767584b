use thiserror::Error;

/// 启动阶段的错误（Config、Setup）会终止进程；Transport 与 UpdateReceive 只记录日志，分发循环继续。
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Bot setup error: {0}")]
    Setup(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Update receive error: {0}")]
    UpdateReceive(String),
}

pub type Result<T> = std::result::Result<T, BotError>;
