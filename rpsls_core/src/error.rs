use thiserror::Error;

/// 手势相关的错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GestureError {
    /// 无法识别的手势文本 (合法值: rock, paper, scissors, lizard, spock)
    #[error("invalid gesture: {0:?} (expected one of rock, paper, scissors, lizard, spock)")]
    InvalidGesture(String),
}
