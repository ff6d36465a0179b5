use color_eyre::eyre::eyre;
use env_logger::Env;
use football_core::utils::TimeEstimation;
use football_core::{
    AgentSkills, DEFAULT_AI_SEED, DEFAULT_MATCH_DURATION, EventKind, MatchConfig, MatchEvent,
    MatchOutcome, MatchPhase, MatchSimulation, Team, VectorExtensions,
};
use log::{debug, info, warn};
use std::env;
use std::fmt::Display;
use std::str::FromStr;

const FRAME_TIME: f32 = 1.0 / 60.0;
const DEFAULT_AI_SKILL: f32 = 70.0;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let duration = env_value("MATCH_DURATION", DEFAULT_MATCH_DURATION);
    let ai_skill = env_value("AI_SKILL", DEFAULT_AI_SKILL);
    let seed = env_value("MATCH_SEED", DEFAULT_AI_SEED);

    let config = MatchConfig::default()
        .with_duration(duration)
        .with_seed(seed);

    let mut simulation = MatchSimulation::new(
        config,
        AgentSkills::default(),
        AgentSkills::uniform(ai_skill),
    );

    register_listeners(&mut simulation);

    info!(
        "match started: {:.0}s, ai skill {:.0}, seed {}",
        config.duration, ai_skill, seed
    );

    let (outcome, estimated) = TimeEstimation::estimate(|| play(&mut simulation, config.duration));

    let outcome = outcome.ok_or_else(|| eyre!("match stopped before the final whistle"))?;

    info!(
        "final score {} ({}), simulated in {} ms",
        simulation.score(),
        outcome,
        estimated
    );

    Ok(())
}

fn env_value<T: FromStr + Display + Copy>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => match raw.parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!("{}={} is not valid, using {}", name, raw, default);
                default
            }
        },
        Err(_) => default,
    }
}

fn register_listeners(simulation: &mut MatchSimulation) {
    simulation.on(EventKind::GoalScored, |event: &MatchEvent| {
        if let MatchEvent::GoalScored(goal) = event {
            info!("{:.1}s goal for {}, {}", goal.time, goal.team, goal.score);
        }
        Ok(())
    });

    simulation.on(EventKind::MatchEnd, |event: &MatchEvent| {
        if let MatchEvent::MatchEnd(end) = event {
            info!("full time after {:.1}s: {} {}", end.duration, end.score, end.result);
        }
        Ok(())
    });

    simulation.on(EventKind::StateChange, |event: &MatchEvent| {
        if let MatchEvent::StateChange(change) = event {
            debug!("{:.1}s match is {}", change.time, change.phase);
        }
        Ok(())
    });

    simulation.on(EventKind::PossessionChanged, |event: &MatchEvent| {
        if let MatchEvent::PossessionChanged(possession) = event {
            debug!(
                "{:.1}s {} {} possession",
                possession.time,
                possession.team,
                if possession.gained { "gained" } else { "lost" }
            );
        }
        Ok(())
    });
}

/// Drives the human side with a simple script: run at the ball and knock it
/// toward the AI goal, shooting once in range.
fn play(simulation: &mut MatchSimulation, duration: f32) -> Option<MatchOutcome> {
    const SHOOTING_RANGE: f32 = 18.0;
    const SHOT_POWER: f32 = 22.0;
    const TOUCH_POWER: f32 = 7.0;
    const SPRINT_DISTANCE: f32 = 4.0;

    if !simulation.start() {
        return None;
    }

    let target_goal = simulation
        .geometry()
        .attacking_goal(Team::Player)
        .center();

    let max_frames = ((duration + 1.0) / FRAME_TIME).ceil() as usize;

    for _ in 0..max_frames {
        if simulation.phase() == MatchPhase::Ended {
            break;
        }

        let ball = simulation.ball().position;
        let player = simulation.player();
        let control_radius = player.physical.control_radius;

        let to_ball = (ball - player.position).horizontal();
        let distance = to_ball.norm();

        simulation.set_player_input(to_ball, distance > SPRINT_DISTANCE);

        if distance <= control_radius {
            let to_goal = (target_goal - ball).horizontal();
            let power = if to_goal.norm() < SHOOTING_RANGE {
                SHOT_POWER
            } else {
                TOUCH_POWER
            };

            simulation.queue_kick(to_goal, power);
        }

        simulation.update(FRAME_TIME);
    }

    simulation.outcome()
}
