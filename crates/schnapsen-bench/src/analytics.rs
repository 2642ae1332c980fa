use std::fs;
use std::path::Path;

use schnapsen_bot::BotKind;
use serde::Serialize;
use statrs::distribution::{Binomial, DiscreteCDF};
use thiserror::Error;

use crate::config::BenchmarkConfig;
use crate::tournament::{DecisionSummary, GameOutcome};

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("baseline agent '{0}' not present in tournament results")]
    MissingBaseline(String),
    #[error("game {game_index} references agent slot {slot} outside the configuration")]
    UnknownAgent { game_index: usize, slot: usize },
    #[error("binomial test failed: {0}")]
    Statistics(String),
    #[error("{context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

pub struct AnalyticsCollector {
    baseline_slot: usize,
    alpha: f64,
    agents: Vec<AgentAccumulator>,
}

impl AnalyticsCollector {
    pub fn new(config: &BenchmarkConfig) -> Result<Self, AnalyticsError> {
        let baseline = config
            .metrics
            .baseline
            .clone()
            .ok_or_else(|| AnalyticsError::MissingBaseline("<unset>".into()))?;

        let baseline_slot = config
            .agents
            .iter()
            .position(|agent| agent.name == baseline)
            .ok_or(AnalyticsError::MissingBaseline(baseline))?;

        let agents = config
            .agents
            .iter()
            .map(|agent| AgentAccumulator::new(agent.name.clone(), agent.kind))
            .collect();

        Ok(Self {
            baseline_slot,
            alpha: config.metrics.alpha,
            agents,
        })
    }

    pub fn record_game(&mut self, outcome: &GameOutcome) -> Result<(), AnalyticsError> {
        for slot in [outcome.leader_slot, outcome.winner_slot] {
            if slot >= self.agents.len() {
                return Err(AnalyticsError::UnknownAgent {
                    game_index: outcome.game_index,
                    slot,
                });
            }
        }

        for (slot, acc) in self.agents.iter_mut().enumerate() {
            let won = slot == outcome.winner_slot;
            acc.record_game(
                slot == outcome.leader_slot,
                won,
                if won { outcome.game_points } else { 0 },
                &outcome.decisions[slot],
            );
        }
        Ok(())
    }

    pub fn finalize(self) -> Result<AnalyticsSummary, AnalyticsError> {
        let baseline = self.agents[self.baseline_slot].name.clone();
        let games = self.agents.first().map(|acc| acc.games).unwrap_or(0);

        let comparison = match self
            .agents
            .iter()
            .enumerate()
            .find(|(slot, _)| *slot != self.baseline_slot)
        {
            Some((_, candidate)) => {
                let p_value = binomial_p_value(candidate.wins, candidate.games)?;
                Some(ComparisonReport {
                    agent: candidate.name.clone(),
                    wins: candidate.wins,
                    games: candidate.games,
                    p_value,
                    significant: p_value < self.alpha,
                })
            }
            None => None,
        };

        let agents = self
            .agents
            .into_iter()
            .map(AgentAccumulator::into_report)
            .collect();

        Ok(AnalyticsSummary {
            baseline,
            games,
            alpha: self.alpha,
            agents,
            comparison,
        })
    }
}

/// One-sided exact test of `wins` out of `games` against a fair coin:
/// P(X >= wins) for X ~ Binomial(games, 0.5).
pub fn binomial_p_value(wins: u64, games: u64) -> Result<f64, AnalyticsError> {
    if wins == 0 || games == 0 {
        return Ok(1.0);
    }
    let dist =
        Binomial::new(0.5, games).map_err(|err| AnalyticsError::Statistics(err.to_string()))?;
    let p = 1.0 - dist.cdf(wins - 1);
    Ok(p.clamp(0.0, 1.0))
}

struct AgentAccumulator {
    name: String,
    kind: BotKind,
    games: u64,
    wins: u64,
    games_led: u64,
    wins_led: u64,
    game_points: u64,
    decisions: u64,
    total_ms: f64,
}

impl AgentAccumulator {
    fn new(name: String, kind: BotKind) -> Self {
        Self {
            name,
            kind,
            games: 0,
            wins: 0,
            games_led: 0,
            wins_led: 0,
            game_points: 0,
            decisions: 0,
            total_ms: 0.0,
        }
    }

    fn record_game(&mut self, led: bool, won: bool, points: u32, metrics: &DecisionSummary) {
        self.games += 1;
        if won {
            self.wins += 1;
        }
        if led {
            self.games_led += 1;
            if won {
                self.wins_led += 1;
            }
        }
        self.game_points += u64::from(points);
        self.decisions += u64::from(metrics.decisions);
        self.total_ms += metrics.total_ms;
    }

    fn into_report(self) -> AgentReport {
        let ratio = |num: f64, den: u64| if den == 0 { 0.0 } else { num / den as f64 };
        AgentReport {
            win_rate: ratio(self.wins as f64, self.games),
            win_rate_as_leader: ratio(self.wins_led as f64, self.games_led),
            avg_game_points: ratio(self.game_points as f64, self.games),
            avg_ms_per_decision: ratio(self.total_ms, self.decisions),
            name: self.name,
            kind: self.kind,
            games: self.games,
            wins: self.wins,
            game_points: self.game_points,
            decisions: self.decisions,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentReport {
    pub name: String,
    pub kind: BotKind,
    pub games: u64,
    pub wins: u64,
    pub win_rate: f64,
    pub win_rate_as_leader: f64,
    pub game_points: u64,
    /// Game points won per game played.
    pub avg_game_points: f64,
    pub decisions: u64,
    pub avg_ms_per_decision: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub agent: String,
    pub wins: u64,
    pub games: u64,
    pub p_value: f64,
    pub significant: bool,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsSummary {
    pub baseline: String,
    pub games: u64,
    pub alpha: f64,
    pub agents: Vec<AgentReport>,
    pub comparison: Option<ComparisonReport>,
}

impl AnalyticsSummary {
    pub fn to_markdown(&self) -> String {
        let mut rows = String::new();
        rows.push_str("# Tournament Summary\n\n");
        rows.push_str(&format!(
            "Games: {} | Baseline: {} | alpha = {}\n\n",
            self.games, self.baseline, self.alpha
        ));
        rows.push_str("| Agent | Kind | Games | Wins | Win % | Win % as leader | Avg game points | Avg ms/decision |\n");
        rows.push_str("|-------|------|-------|------|-------|-----------------|-----------------|-----------------|\n");

        for agent in &self.agents {
            rows.push_str(&format!(
                "| {name} | {kind} | {games} | {wins} | {win:.1}% | {led:.1}% | {points:.3} | {latency:.2} |\n",
                name = agent.name,
                kind = agent.kind,
                games = agent.games,
                wins = agent.wins,
                win = agent.win_rate * 100.0,
                led = agent.win_rate_as_leader * 100.0,
                points = agent.avg_game_points,
                latency = agent.avg_ms_per_decision,
            ));
        }

        if let Some(cmp) = &self.comparison {
            rows.push_str(&format!(
                "\nOne-sided binomial test (H0: p = 0.5) for {agent}: {wins}/{games} wins, p-value {pval:.4} ({verdict} at alpha = {alpha})\n",
                agent = cmp.agent,
                wins = cmp.wins,
                games = cmp.games,
                pval = cmp.p_value,
                verdict = if cmp.significant {
                    "significant"
                } else {
                    "not significant"
                },
                alpha = self.alpha,
            ));
        }

        rows
    }

    pub fn write_markdown(&self, path: impl AsRef<Path>) -> Result<(), AnalyticsError> {
        fs::write(path.as_ref(), self.to_markdown()).map_err(|e| AnalyticsError::Io {
            context: "writing summary markdown",
            source: e,
        })?;
        Ok(())
    }
}
