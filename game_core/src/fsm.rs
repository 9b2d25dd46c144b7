//! Screen State Machine
//!
//! Drives the menu, match and game-over screens. The transition table is a
//! pure function so it can be exercised without a window.

/// Screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Menu,
    Match,
    GameOverPrompt,
    Terminated,
}

/// Inputs that trigger screen transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenInput {
    StartClicked,
    QuitClicked,
    WindowClosed,
    MatchOver,
    Restart,
    Decline,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: ScreenState,
    pub to_state: ScreenState,
    pub input: ScreenInput,
}

/// Next screen for an input, or `None` when the pair has no transition
pub fn transition_for(state: ScreenState, input: ScreenInput) -> Option<ScreenState> {
    match (state, input) {
        // From Menu
        (ScreenState::Menu, ScreenInput::StartClicked) => Some(ScreenState::Match),
        (ScreenState::Menu, ScreenInput::QuitClicked) => Some(ScreenState::Terminated),
        (ScreenState::Menu, ScreenInput::WindowClosed) => Some(ScreenState::Terminated),

        // From Match
        (ScreenState::Match, ScreenInput::MatchOver) => Some(ScreenState::GameOverPrompt),
        (ScreenState::Match, ScreenInput::WindowClosed) => Some(ScreenState::Terminated),

        // From GameOverPrompt
        (ScreenState::GameOverPrompt, ScreenInput::Restart) => Some(ScreenState::Menu),
        (ScreenState::GameOverPrompt, ScreenInput::Decline) => Some(ScreenState::Terminated),
        (ScreenState::GameOverPrompt, ScreenInput::WindowClosed) => {
            Some(ScreenState::Terminated)
        }

        // Terminated is final; everything else is ignored
        _ => None,
    }
}

/// Pure transition: unknown pairs leave the state unchanged
pub fn next_state(state: ScreenState, input: ScreenInput) -> ScreenState {
    transition_for(state, input).unwrap_or(state)
}

/// Screen Finite State Machine
#[derive(Debug)]
pub struct ScreenFlow {
    state: ScreenState,
}

impl ScreenFlow {
    pub fn new() -> Self {
        Self {
            state: ScreenState::Menu,
        }
    }

    /// Get current state
    pub fn state(&self) -> ScreenState {
        self.state
    }

    /// Attempt a transition
    pub fn transition(&mut self, input: ScreenInput) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = transition_for(from_state, input) {
            self.state = next_state;
            tracing::info!(?from_state, to_state = ?next_state, ?input, "screen transition");
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                input,
            }
        } else {
            tracing::debug!(state = ?from_state, ?input, "input ignored");
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                input,
            }
        }
    }

    /// Check if currently playing a match
    pub fn is_playing(&self) -> bool {
        self.state == ScreenState::Match
    }

    /// Check if the application should exit
    pub fn is_terminated(&self) -> bool {
        self.state == ScreenState::Terminated
    }
}

impl Default for ScreenFlow {
    fn default() -> Self {
        Self::new()
    }
}
