use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rpsls_core::{Game, Gesture, Player, RULES, RoundReport, Seat};

/// 石头剪刀布蜥蜴史波克 命令行
#[derive(Parser, Debug)]
#[command(name = "rpsls", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 进行一轮对局
    Play(PlayArgs),
    /// 列出全部胜负规则
    Rules,
}

#[derive(Args, Debug)]
struct PlayArgs {
    /// 玩家1的名字
    #[arg(long, default_value = "Player 1")]
    player1: String,
    /// 玩家1的手势 (rock, paper, scissors, lizard, spock)
    #[arg(long)]
    gesture1: Gesture,
    /// 玩家2的名字
    #[arg(long, default_value = "Player 2")]
    player2: String,
    /// 玩家2的手势
    #[arg(long)]
    gesture2: Gesture,
    /// 以 JSON 格式输出结果
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    // 默认只输出警告，可以用 RUST_LOG=debug 查看判定过程
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Play(args) => play(args),
        Command::Rules => {
            for rule in RULES.iter() {
                println!("{}", rule);
            }
            ExitCode::SUCCESS
        }
    }
}

fn play(args: PlayArgs) -> ExitCode {
    let mut game = Game::new(Player::new(args.player1), Player::new(args.player2));
    game.player_mut(Seat::One).set_gesture(args.gesture1);
    game.player_mut(Seat::Two).set_gesture(args.gesture2);

    let report = game.play_report();
    info!(winner = ?report.winner, "对局结束");

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(payload) => println!("{}", payload),
            Err(e) => {
                error!("序列化结果失败: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", render(&report));
    }
    ExitCode::SUCCESS
}

/// 把一轮结果渲染成一行文字
fn render(report: &RoundReport) -> String {
    match (&report.winner, &report.rule) {
        (Some(winner), Some(rule)) => format!("{} 获胜: {}", winner, rule),
        _ => {
            let gesture = report.player1.gesture.map(|g| g.to_string()).unwrap_or_default();
            format!(
                "平局: {} 和 {} 都出了 {}",
                report.player1.name, report.player2.name, gesture
            )
        }
    }
}
