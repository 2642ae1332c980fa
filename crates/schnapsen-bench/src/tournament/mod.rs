mod timed;

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::analytics::{AnalyticsCollector, AnalyticsError};
use crate::config::{AgentConfig, BenchmarkConfig, ResolvedOutputs};
use rand::{RngCore, SeedableRng, rngs::StdRng};
use schnapsen_bot::{Baseline, BotConfigError, BotKind, RdeepParams};
use schnapsen_core::{BotRef, GameError, GamePlayEngine};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{Level, event};

pub use timed::{DecisionMetrics, DecisionSummary, TimedBot};

/// Plays the configured match and writes its outputs.
pub struct TournamentRunner {
    config: BenchmarkConfig,
    outputs: ResolvedOutputs,
    agents: Vec<AgentBlueprint>,
    engine: GamePlayEngine,
    logging_enabled: bool,
}

/// Summary details returned after a run.
pub struct RunSummary {
    pub games_played: usize,
    pub rows_written: usize,
    pub jsonl_path: PathBuf,
    pub summary_path: PathBuf,
}

impl TournamentRunner {
    /// Build a runner from a validated configuration.
    pub fn new(config: BenchmarkConfig, outputs: ResolvedOutputs) -> Result<Self, RunnerError> {
        let agents = AgentBlueprint::from_configs(&config.agents)?;

        if agents.len() != 2 {
            return Err(RunnerError::SeatCount {
                found: agents.len(),
            });
        }

        Ok(Self {
            logging_enabled: config.logging.enable_structured,
            config,
            outputs,
            agents,
            engine: GamePlayEngine::new(),
        })
    }

    /// Execute the tournament, streaming JSONL rows to disk.
    pub fn run(&self) -> Result<RunSummary, RunnerError> {
        ensure_parent(self.outputs.jsonl.parent())?;
        ensure_parent(self.outputs.summary_md.parent())?;

        let mut writer = BufWriter::new(File::create(&self.outputs.jsonl)?);
        let mut rng = StdRng::seed_from_u64(self.config.games.seed.unwrap_or(0));
        let mut rows_written = 0usize;
        let mut analytics = AnalyticsCollector::new(&self.config)?;

        for game_index in 0..self.config.games.count {
            let game_seed = rng.next_u64();
            let leader_slot = game_index % 2;
            let outcome = self.play_game(game_index, game_seed, leader_slot)?;
            analytics.record_game(&outcome)?;
            self.write_row(&mut writer, &outcome)?;
            rows_written += 1;
        }

        writer.flush()?;

        let summary = analytics.finalize()?;
        summary.write_markdown(&self.outputs.summary_md)?;

        Ok(RunSummary {
            games_played: self.config.games.count,
            rows_written,
            jsonl_path: self.outputs.jsonl.clone(),
            summary_path: self.outputs.summary_md.clone(),
        })
    }

    fn play_game(
        &self,
        game_index: usize,
        game_seed: u64,
        leader_slot: usize,
    ) -> Result<GameOutcome, RunnerError> {
        let follower_slot = 1 - leader_slot;
        let mut rng = StdRng::seed_from_u64(game_seed);

        let leader = Rc::new(RefCell::new(TimedBot::new(
            self.agents[leader_slot].spawn(rng.next_u64())?,
        )));
        let follower = Rc::new(RefCell::new(TimedBot::new(
            self.agents[follower_slot].spawn(rng.next_u64())?,
        )));
        let leader_handle: BotRef = leader.clone();
        let follower_handle: BotRef = follower.clone();

        let result = self
            .engine
            .play_game(leader_handle.clone(), follower_handle, &mut rng)
            .map_err(|source| RunnerError::Game { game_index, source })?;

        let winner_slot = if Rc::ptr_eq(&result.winner, &leader_handle) {
            leader_slot
        } else {
            follower_slot
        };

        let mut decisions = [DecisionSummary::default(), DecisionSummary::default()];
        decisions[leader_slot] = leader.borrow().metrics().finalize();
        decisions[follower_slot] = follower.borrow().metrics().finalize();

        if self.logging_enabled {
            event!(
                target: "schnapsen_bench::game",
                Level::INFO,
                run_id = %self.config.run_id,
                game_index,
                game_seed,
                leader = %self.agents[leader_slot].name,
                winner = %self.agents[winner_slot].name,
                game_points = result.game_points,
                winner_points = result.score.direct_points,
                "game finished"
            );
        }

        Ok(GameOutcome {
            game_index,
            game_seed,
            leader_slot,
            winner_slot,
            game_points: result.game_points,
            winner_points: result.score.direct_points,
            decisions,
        })
    }

    fn write_row(
        &self,
        writer: &mut BufWriter<File>,
        outcome: &GameOutcome,
    ) -> Result<(), RunnerError> {
        let follower_slot = 1 - outcome.leader_slot;
        let row = GameLogRow {
            run_id: self.config.run_id.clone(),
            game_id: format!("G{:05}", outcome.game_index),
            game_index: outcome.game_index,
            game_seed: outcome.game_seed,
            leader: self.agents[outcome.leader_slot].name.clone(),
            follower: self.agents[follower_slot].name.clone(),
            winner: self.agents[outcome.winner_slot].name.clone(),
            game_points: outcome.game_points,
            winner_points: outcome.winner_points,
            leader_decisions: outcome.decisions[outcome.leader_slot].decisions,
            follower_decisions: outcome.decisions[follower_slot].decisions,
        };

        serde_json::to_writer(&mut *writer, &row)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

fn ensure_parent(path: Option<&Path>) -> Result<(), RunnerError> {
    if let Some(dir) = path.filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Result of one game, indexed by agent slot (configuration order).
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub game_index: usize,
    pub game_seed: u64,
    pub leader_slot: usize,
    pub winner_slot: usize,
    pub game_points: u32,
    pub winner_points: u32,
    pub decisions: [DecisionSummary; 2],
}

/// Timing stays out of the log rows so that equal seeds give equal files.
#[derive(Serialize)]
struct GameLogRow {
    run_id: String,
    game_id: String,
    game_index: usize,
    game_seed: u64,
    leader: String,
    follower: String,
    winner: String,
    game_points: u32,
    winner_points: u32,
    leader_decisions: u32,
    follower_decisions: u32,
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("{0}")]
    Agent(#[from] AgentError),
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("failed to serialize log row: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
    #[error("game {game_index} failed: {source}")]
    Game {
        game_index: usize,
        #[source]
        source: GameError,
    },
    #[error("configuration requires exactly 2 agents but found {found}")]
    SeatCount { found: usize },
    #[error("analytics error: {0}")]
    Analytics(#[from] AnalyticsError),
}

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("invalid parameters for agent '{name}': {message}")]
    InvalidParams { name: String, message: String },
    #[error("agent '{name}' rejected its configuration: {source}")]
    Config {
        name: String,
        #[source]
        source: BotConfigError,
    },
}

/// Parameter keys accepted under `agents[].params`. Missing keys keep the
/// environment-derived defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ParamOverrides {
    samples: Option<usize>,
    depth: Option<usize>,
    baseline: Option<Baseline>,
}

struct AgentBlueprint {
    name: String,
    kind: BotKind,
    params: RdeepParams,
}

impl AgentBlueprint {
    fn from_configs(configs: &[AgentConfig]) -> Result<Vec<Self>, AgentError> {
        configs.iter().map(Self::from_config).collect()
    }

    fn from_config(config: &AgentConfig) -> Result<Self, AgentError> {
        let params = parse_params(&config.name, &config.params)?;
        Ok(Self {
            name: config.name.clone(),
            kind: config.kind,
            params,
        })
    }

    fn spawn(&self, seed: u64) -> Result<BotRef, AgentError> {
        self.kind
            .build(self.params, seed)
            .map_err(|source| AgentError::Config {
                name: self.name.clone(),
                source,
            })
    }
}

fn parse_params(name: &str, params: &serde_yaml::Value) -> Result<RdeepParams, AgentError> {
    let overrides = if params.is_null() {
        ParamOverrides::default()
    } else {
        if !params.is_mapping() {
            return Err(AgentError::InvalidParams {
                name: name.to_string(),
                message: "expected mapping for agent params".to_string(),
            });
        }
        serde_yaml::from_value::<ParamOverrides>(params.clone()).map_err(|err| {
            AgentError::InvalidParams {
                name: name.to_string(),
                message: err.to_string(),
            }
        })?
    };

    let defaults = RdeepParams::from_env();
    RdeepParams {
        samples: overrides.samples.unwrap_or(defaults.samples),
        depth: overrides.depth.unwrap_or(defaults.depth),
        baseline: overrides.baseline.unwrap_or(defaults.baseline),
    }
    .validated()
    .map_err(|source| AgentError::Config {
        name: name.to_string(),
        source,
    })
}
