use std::time::{Duration, Instant};

use schnapsen_core::model::moves::{Move, PartialTrick, TrumpExchange};
use schnapsen_core::{Bot, BotRef, GameError, PlayerPerspective};

/// Wraps a seated bot and measures how long each decision takes.
pub struct TimedBot {
    inner: BotRef,
    name: String,
    metrics: DecisionMetrics,
}

impl TimedBot {
    pub fn new(inner: BotRef) -> Self {
        let name = inner.borrow().name().to_string();
        Self {
            inner,
            name,
            metrics: DecisionMetrics::default(),
        }
    }

    pub fn metrics(&self) -> DecisionMetrics {
        self.metrics
    }
}

impl Bot for TimedBot {
    fn get_move(
        &mut self,
        perspective: &PlayerPerspective<'_>,
        leader_move: Option<PartialTrick>,
    ) -> Result<Move, GameError> {
        let start = Instant::now();
        let chosen = self.inner.borrow_mut().get_move(perspective, leader_move);
        self.metrics.record(start.elapsed());
        chosen
    }

    fn notify_trump_exchange(&mut self, exchange: TrumpExchange) -> Result<(), GameError> {
        self.inner.borrow_mut().notify_trump_exchange(exchange)
    }

    fn notify_game_end(
        &mut self,
        won: bool,
        perspective: &PlayerPerspective<'_>,
    ) -> Result<(), GameError> {
        self.inner.borrow_mut().notify_game_end(won, perspective)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DecisionMetrics {
    total: Duration,
    decisions: u32,
}

impl DecisionMetrics {
    pub fn record(&mut self, duration: Duration) -> f64 {
        self.total += duration;
        self.decisions += 1;
        duration.as_secs_f64() * 1000.0
    }

    pub fn finalize(self) -> DecisionSummary {
        let avg_ms = if self.decisions == 0 {
            0.0
        } else {
            self.total.as_secs_f64() * 1000.0 / f64::from(self.decisions)
        };

        DecisionSummary {
            decisions: self.decisions,
            avg_ms_per_decision: avg_ms,
            total_ms: self.total.as_secs_f64() * 1000.0,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DecisionSummary {
    pub decisions: u32,
    pub avg_ms_per_decision: f64,
    pub total_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use schnapsen_bot::RandBot;
    use schnapsen_core::{GamePlayEngine, bot_ref};
    use rand::{SeedableRng, rngs::StdRng};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn metrics_average_over_decisions() {
        let mut metrics = DecisionMetrics::default();
        metrics.record(Duration::from_millis(4));
        metrics.record(Duration::from_millis(2));
        let summary = metrics.finalize();
        assert_eq!(summary.decisions, 2);
        assert!((summary.avg_ms_per_decision - 3.0).abs() < 1e-9);
        assert!((summary.total_ms - 6.0).abs() < 1e-9);
        assert_eq!(DecisionMetrics::default().finalize().avg_ms_per_decision, 0.0);
    }

    #[test]
    fn wrapper_counts_every_move_and_keeps_the_name() {
        let first = Rc::new(RefCell::new(TimedBot::new(bot_ref(RandBot::new(1)))));
        let second = Rc::new(RefCell::new(TimedBot::new(bot_ref(RandBot::new(2)))));
        assert_eq!(first.borrow().name(), "rand");

        let first_handle: BotRef = first.clone();
        let second_handle: BotRef = second.clone();
        let mut rng = StdRng::seed_from_u64(9);
        GamePlayEngine::new()
            .play_game(first_handle, second_handle, &mut rng)
            .unwrap();

        let a = first.borrow().metrics().finalize().decisions;
        let b = second.borrow().metrics().finalize().decisions;
        assert!(a > 0);
        assert!(b > 0);
        assert!(a.abs_diff(b) <= 2);
    }
}
