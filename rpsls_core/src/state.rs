use crate::gesture::Gesture;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type PlayerId = Uuid;

/// 玩家在一局游戏中的座位
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    /// 对面的座位
    pub fn opponent(self) -> Seat {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    // None 表示还没出过手势，和 Rock 区分开
    gesture: Option<Gesture>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Player {
        Player {
            id: Uuid::new_v4(),
            name: name.into(),
            gesture: None,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 最近一次选择的手势，从未选择过则为 None
    pub fn gesture(&self) -> Option<Gesture> {
        self.gesture
    }

    /// 选择手势，覆盖之前的选择
    pub fn set_gesture(&mut self, gesture: Gesture) {
        self.gesture = Some(gesture);
    }

    pub fn clear_gesture(&mut self) {
        self.gesture = None;
    }
}
