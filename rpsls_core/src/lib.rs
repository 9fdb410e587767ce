//! # 石头剪刀布蜥蜴史波克 核心规则库
//!
//! 这个 `core` crate 包含了手势定义、胜负规则表、玩家状态以及
//! 判定一局胜负的逻辑。它不涉及任何输入输出，
//! 可以被命令行、测试或其他上层应用复用。

mod error;
mod gesture;
mod logic;
mod report;
mod rules;
mod state;

pub use error::*;

pub use gesture::*;

pub use logic::*;

pub use report::*;

pub use rules::*;

pub use state::*;
