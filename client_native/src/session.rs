//! Screen flow plus the match it drives
//!
//! Owns everything between input mapping and drawing that does not need a
//! window: the `ScreenFlow`, the current `PongMatch` and the sound board.

use game_core::{
    Config, GameEvent, GameRng, PointerState, PongMatch, ScreenFlow, ScreenInput, ScreenState,
    TransitionResult,
};

use crate::audio::SoundBoard;

pub struct Session {
    config: Config,
    flow: ScreenFlow,
    game: Option<PongMatch>,
    sounds: SoundBoard,
    seed: Option<u64>,
}

impl Session {
    pub fn new(config: Config, sounds: SoundBoard) -> Self {
        Self {
            config,
            flow: ScreenFlow::new(),
            game: None,
            sounds,
            seed: None,
        }
    }

    /// Seed every match from `seed` instead of entropy
    #[cfg(test)]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn state(&self) -> ScreenState {
        self.flow.state()
    }

    pub fn game(&self) -> Option<&PongMatch> {
        self.game.as_ref()
    }

    #[cfg(test)]
    pub fn game_mut(&mut self) -> Option<&mut PongMatch> {
        self.game.as_mut()
    }

    pub fn is_terminated(&self) -> bool {
        self.flow.is_terminated()
    }

    /// Feed an input to the screen flow, starting or dropping the match
    /// as screens change
    pub fn apply(&mut self, input: ScreenInput) -> TransitionResult {
        let result = self.flow.transition(input);
        if !result.success {
            return result;
        }

        match result.to_state {
            ScreenState::Match => {
                let rng = match self.seed {
                    Some(seed) => GameRng::new(seed),
                    None => GameRng::from_entropy(),
                };
                self.game = Some(PongMatch::new(self.config.clone(), rng));
            }
            ScreenState::Menu => {
                self.game = None;
            }
            ScreenState::GameOverPrompt | ScreenState::Terminated => {}
        }

        result
    }

    /// Advance the match by one tick and play its sounds. A finished match
    /// moves the flow to the game-over prompt.
    pub fn tick(&mut self, pointer_y: f32) {
        if !self.flow.is_playing() {
            return;
        }

        let mut match_over = false;
        if let Some(game) = self.game.as_mut() {
            let events = game.tick(PointerState::new(pointer_y));
            self.sounds.play_events(events);
            match_over = events
                .iter()
                .any(|event| matches!(event, GameEvent::MatchOver { .. }));
        }

        if match_over {
            self.apply(ScreenInput::MatchOver);
        }
    }
}
