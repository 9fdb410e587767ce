use crate::error::GestureError;
use crate::rules::find_rule;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 手势 (Gesture)
/// 玩家每轮可以出的五种手势之一。
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Gesture {
    Rock,     // 石头
    Paper,    // 布
    Scissors, // 剪刀
    Lizard,   // 蜥蜴
    Spock,    // 史波克
}

impl Gesture {
    /// 按声明顺序排列的全部手势
    pub const ALL: [Gesture; 5] = [
        Gesture::Rock,
        Gesture::Paper,
        Gesture::Scissors,
        Gesture::Lizard,
        Gesture::Spock,
    ];

    /// `self` 是否能赢 `other`。只查规则表，相同手势永远返回 false。
    pub fn beats(self, other: Gesture) -> bool {
        find_rule(self, other).is_some()
    }

    pub fn name(self) -> &'static str {
        match self {
            Gesture::Rock => "Rock",
            Gesture::Paper => "Paper",
            Gesture::Scissors => "Scissors",
            Gesture::Lizard => "Lizard",
            Gesture::Spock => "Spock",
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 从文本解析手势，忽略大小写和首尾空白。
/// 这是非法手势唯一可能进入系统的地方，在这里直接拒绝。
impl FromStr for Gesture {
    type Err = GestureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Gesture::ALL
            .into_iter()
            .find(|g| g.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| GestureError::InvalidGesture(s.to_string()))
    }
}
