use crate::gesture::Gesture;
use serde::Serialize;
use std::fmt;

/// 一条胜负规则：`beater` 赢 `beaten`
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct Rule {
    pub beater: Gesture,
    pub beaten: Gesture,
    /// 规则描述里的动词，如 "cuts"
    pub verb: &'static str,
}

impl Rule {
    const fn new(beater: Gesture, verb: &'static str, beaten: Gesture) -> Rule {
        Rule { beater, beaten, verb }
    }

    /// (赢家手势, 输家手势)
    pub fn pair(&self) -> (Gesture, Gesture) {
        (self.beater, self.beaten)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.beater, self.verb, self.beaten)
    }
}

/// 全部胜负规则，游戏规则的唯一来源。
/// 5 个手势两两组合共 10 对，每对恰好出现一次且方向唯一。
pub static RULES: [Rule; 10] = {
    use Gesture::*;
    [
        Rule::new(Scissors, "cuts", Paper),
        Rule::new(Paper, "covers", Rock),
        Rule::new(Rock, "crushes", Lizard),
        Rule::new(Lizard, "poisons", Spock),
        Rule::new(Spock, "smashes", Scissors),
        Rule::new(Scissors, "decapitates", Lizard),
        Rule::new(Lizard, "eats", Paper),
        Rule::new(Paper, "disproves", Spock),
        Rule::new(Spock, "vaporizes", Rock),
        Rule::new(Rock, "crushes", Scissors),
    ]
};

/// 查找 `beater` 赢 `beaten` 的规则，没有则返回 None
pub fn find_rule(beater: Gesture, beaten: Gesture) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.pair() == (beater, beaten))
}
