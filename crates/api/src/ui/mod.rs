//! View-owned UI state
//!
//! Incidental presentation flags that the rendering collaborator displays
//! but the engine owns the transitions for: the loading splash, the
//! confetti lifecycle, and the navigation menu. The confetti lifecycle is
//! an explicit tagged state machine rather than nested timers, so the
//! whole reveal sequence is testable without any scheduling.

use serde::{Deserialize, Serialize};

use marquee_domain::constants::{CONFETTI_FADING_PIECES, CONFETTI_FULL_PIECES};

/// Confetti lifecycle phase
///
/// Only ever advances `Idle → Full → Fading → Off`; `Off` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfettiPhase {
    /// Not yet started (splash still showing)
    Idle,
    /// Full burst, pieces recycling
    Full,
    /// Light tail, pieces falling out
    Fading,
    /// Finished
    Off,
}

impl ConfettiPhase {
    /// The next phase in the reveal sequence
    pub fn advance(self) -> Self {
        match self {
            Self::Idle => Self::Full,
            Self::Full => Self::Fading,
            Self::Fading | Self::Off => Self::Off,
        }
    }

    /// Number of confetti pieces the renderer should draw
    pub fn piece_count(self) -> u32 {
        match self {
            Self::Idle | Self::Off => 0,
            Self::Full => CONFETTI_FULL_PIECES,
            Self::Fading => CONFETTI_FADING_PIECES,
        }
    }

    /// Whether fallen pieces respawn at the top
    pub fn recycles(self) -> bool {
        matches!(self, Self::Full)
    }

    /// Whether anything is on screen at all
    pub fn is_active(self) -> bool {
        self.piece_count() > 0
    }
}

/// View-owned flags for the event page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    loading: bool,
    menu_open: bool,
    confetti: ConfettiPhase,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    /// Fresh page state: splash showing, menu closed, confetti idle
    pub fn new() -> Self {
        Self { loading: true, menu_open: false, confetti: ConfettiPhase::Idle }
    }

    /// Step the reveal sequence
    ///
    /// The first step dismisses the splash and starts the confetti burst;
    /// later steps walk the confetti lifecycle to its end.
    pub fn advance_reveal(&mut self) {
        self.loading = false;
        self.confetti = self.confetti.advance();
    }

    /// Flip the navigation menu, returning the new state
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Close the navigation menu (any navigation command does this)
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Whether the loading splash is showing
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the navigation menu is open
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Current confetti phase
    pub fn confetti(&self) -> ConfettiPhase {
        self.confetti
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confetti_walks_the_reveal_sequence() {
        let mut phase = ConfettiPhase::Idle;
        let mut seen = vec![phase];
        for _ in 0..5 {
            phase = phase.advance();
            seen.push(phase);
        }
        assert_eq!(
            &seen[..4],
            &[ConfettiPhase::Idle, ConfettiPhase::Full, ConfettiPhase::Fading, ConfettiPhase::Off]
        );
        // Off is terminal
        assert_eq!(seen[4], ConfettiPhase::Off);
        assert_eq!(seen[5], ConfettiPhase::Off);
    }

    #[test]
    fn piece_counts_match_phases() {
        assert_eq!(ConfettiPhase::Idle.piece_count(), 0);
        assert_eq!(ConfettiPhase::Full.piece_count(), 200);
        assert_eq!(ConfettiPhase::Fading.piece_count(), 50);
        assert_eq!(ConfettiPhase::Off.piece_count(), 0);
    }

    #[test]
    fn only_the_full_phase_recycles() {
        assert!(ConfettiPhase::Full.recycles());
        assert!(!ConfettiPhase::Fading.recycles());
        assert!(!ConfettiPhase::Off.recycles());
    }

    #[test]
    fn fresh_state_shows_splash_only() {
        let state = UiState::new();
        assert!(state.is_loading());
        assert!(!state.is_menu_open());
        assert!(!state.confetti().is_active());
    }

    #[test]
    fn first_reveal_step_dismisses_splash_and_starts_confetti() {
        let mut state = UiState::new();
        state.advance_reveal();
        assert!(!state.is_loading());
        assert_eq!(state.confetti(), ConfettiPhase::Full);
    }

    #[test]
    fn full_reveal_sequence_ends_quiet() {
        let mut state = UiState::new();
        state.advance_reveal();
        state.advance_reveal();
        state.advance_reveal();
        assert!(!state.is_loading());
        assert_eq!(state.confetti(), ConfettiPhase::Off);
    }

    #[test]
    fn menu_toggles_and_closes() {
        let mut state = UiState::new();
        assert!(state.toggle_menu());
        assert!(!state.toggle_menu());
        state.toggle_menu();
        state.close_menu();
        assert!(!state.is_menu_open());
    }
}
