use crate::gesture::Gesture;
use serde::{Deserialize, Serialize};

/// 一轮结束后的摘要，供调用方展示或序列化输出
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub player1: PlayerReport,
    pub player2: PlayerReport,
    /// 赢家的名字，平局为 None
    pub winner: Option<String>,
    /// 决定胜负的规则，如 "Rock crushes Scissors"
    pub rule: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlayerReport {
    pub name: String,
    pub gesture: Option<Gesture>,
}

impl RoundReport {
    pub fn is_tie(&self) -> bool {
        self.winner.is_none()
    }
}
