use std::fmt;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::*;
use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Active,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Feedback {
    Empty,
    Prompt,
    Result(f64),
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Empty => Ok(()),
            Feedback::Prompt => f.write_str(ROUND_PROMPT),
            Feedback::Result(similarity) => write!(f, "Your match is {similarity:.2}% accurate!"),
        }
    }
}

/// Porcentagem de semelhança entre duas cores: 100 para cores idênticas,
/// 0 para preto contra branco.
pub fn similarity(a: &Color, b: &Color) -> f64 {
    let diff = f64::from(a.manhattan(b));
    (1.0 - diff / f64::from(MAX_DIFF)) * 100.0
}

pub struct GameState {
    target: Color,
    current: Color,
    phase: Phase,
    feedback: Feedback,
    rng: StdRng,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            target: Color::BLACK,
            current: Color::BLACK,
            phase: Phase::Idle,
            feedback: Feedback::Empty,
            rng,
        }
    }

    pub fn target(&self) -> Color {
        self.target
    }

    pub fn current(&self) -> Color {
        self.current
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    pub fn start_new_round(&mut self) {
        self.target = Color::random(&mut self.rng);
        self.feedback = Feedback::Prompt;
        self.phase = Phase::Active;
        info!("New round, target {}", self.target);
    }

    pub fn set_current(&mut self, color: Color) {
        if self.current != color {
            debug!("Current color {}", color);
        }
        self.current = color;
    }

    pub fn score(&self) -> f64 {
        similarity(&self.target, &self.current)
    }

    /// Pontua a mistura atual sem encerrar a rodada.
    pub fn submit(&mut self) -> f64 {
        let score = self.score();
        self.feedback = Feedback::Result(score);
        info!("Submitted {} against {}: {score:.2}%", self.current, self.target);
        score
    }
}
