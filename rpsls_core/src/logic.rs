use crate::gesture::Gesture;
use crate::report::{PlayerReport, RoundReport};
use crate::rules::{Rule, find_rule};
use crate::state::{Player, Seat};
use tracing::debug;

/// 一局石头剪刀布蜥蜴史波克
///
/// 玩家由调用方创建，Game 只在对局期间持有他们，不会创建或销毁玩家。
/// 调用方通过 `player_mut` 设置手势，然后调用 `play` 判定胜负。
/// 每次 `play` 都会根据当时的手势重新计算，不会累积上一轮的结果。
/// 对局结束后用 `into_players` 把玩家原样交还，可以带到下一局。
#[derive(Debug, Clone)]
pub struct Game {
    player1: Player,
    player2: Player,
    // 最近一次 play 的结果，None 表示还没有玩过
    last_round: Option<Round>,
}

/// 某一次 play 时的快照
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Round {
    gestures: (Option<Gesture>, Option<Gesture>),
    decision: Option<(Seat, &'static Rule)>,
}

impl Game {
    pub fn new(player1: Player, player2: Player) -> Game {
        Game {
            player1,
            player2,
            last_round: None,
        }
    }

    pub fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::One => &self.player1,
            Seat::Two => &self.player2,
        }
    }

    pub fn player_mut(&mut self, seat: Seat) -> &mut Player {
        match seat {
            Seat::One => &mut self.player1,
            Seat::Two => &mut self.player2,
        }
    }

    pub fn player1(&self) -> &Player {
        &self.player1
    }

    pub fn player2(&self) -> &Player {
        &self.player2
    }

    /// 结束对局，把两名玩家交还给调用方 (玩家1, 玩家2)
    pub fn into_players(self) -> (Player, Player) {
        (self.player1, self.player2)
    }

    /// 根据两名玩家当前的手势判定胜负，覆盖上一轮的结果。
    ///
    /// 规则表里有 (玩家1手势, 玩家2手势) 则玩家1赢；
    /// 有 (玩家2手势, 玩家1手势) 则玩家2赢；
    /// 手势相同或有一方还没出手势则没有赢家。
    pub fn play(&mut self) -> Option<&Player> {
        self.evaluate();
        self.winner()
    }

    /// 同 `play`，但直接返回这一轮的摘要
    pub fn play_report(&mut self) -> RoundReport {
        let round = self.evaluate();
        self.build_report(round)
    }

    /// 最近一次 play 的赢家；平局或还没玩过时为 None
    pub fn winner(&self) -> Option<&Player> {
        self.winner_seat().map(|seat| self.player(seat))
    }

    pub fn winner_seat(&self) -> Option<Seat> {
        self.decision().map(|(seat, _)| seat)
    }

    pub fn winner_name(&self) -> Option<&str> {
        self.winner().map(Player::name)
    }

    /// 决定上一轮胜负的那条规则
    pub fn winning_rule(&self) -> Option<&'static Rule> {
        self.decision().map(|(_, rule)| rule)
    }

    /// 上一轮的摘要，还没玩过时为 None
    pub fn report(&self) -> Option<RoundReport> {
        self.last_round.map(|round| self.build_report(round))
    }

    fn evaluate(&mut self) -> Round {
        let gestures = (self.player1.gesture(), self.player2.gesture());
        let decision = decide(gestures.0, gestures.1);

        debug!(
            player1 = self.player1.name(),
            gesture1 = ?gestures.0,
            player2 = self.player2.name(),
            gesture2 = ?gestures.1,
            winner = ?decision.map(|(seat, _)| seat),
            "round played"
        );

        let round = Round { gestures, decision };
        self.last_round = Some(round);
        round
    }

    fn build_report(&self, round: Round) -> RoundReport {
        let winner = round.decision.map(|(seat, _)| self.player(seat).name().to_string());
        RoundReport {
            player1: PlayerReport {
                name: self.player1.name().to_string(),
                gesture: round.gestures.0,
            },
            player2: PlayerReport {
                name: self.player2.name().to_string(),
                gesture: round.gestures.1,
            },
            winner,
            rule: round.decision.map(|(_, rule)| rule.to_string()),
        }
    }

    fn decision(&self) -> Option<(Seat, &'static Rule)> {
        self.last_round.and_then(|round| round.decision)
    }
}

/// 纯函数：判定两个手势谁赢。
/// 规则表是非对称的，两个检查不可能同时成立。
fn decide(g1: Option<Gesture>, g2: Option<Gesture>) -> Option<(Seat, &'static Rule)> {
    let (g1, g2) = (g1?, g2?);
    let mut decision = None;
    if let Some(rule) = find_rule(g1, g2) {
        decision = Some((Seat::One, rule));
    }
    if let Some(rule) = find_rule(g2, g1) {
        decision = Some((Seat::Two, rule));
    }
    decision
}

// --- 单元测试 ---
