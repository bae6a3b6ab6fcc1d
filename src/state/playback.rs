//! Playback state for the single video element inside the video modal.
//!
//! The machine never touches the DOM. Every transition returns the
//! [`MediaCommand`]s the component has to run against the element and its
//! overlay timer, in order.

use crate::config::OVERLAY_HIDE_MS;
use crate::error::MediaError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackPhase {
    Closed,
    Ready,
    Playing,
    Errored,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaCommand {
    Pause,
    SeekToStart,
    Load(String),
    Play,
    SetMuted(bool),
    ArmOverlayHide { token: u64, delay_ms: u32 },
    CancelOverlayHide,
}

#[derive(Debug)]
pub struct PlaybackMachine {
    phase: PlaybackPhase,
    source: Option<String>,
    muted: bool,
    overlay: bool,
    error: Option<MediaError>,
    play_pending: bool,
    overlay_token: u64,
}

impl Default for PlaybackMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackMachine {
    pub fn new() -> Self {
        Self {
            phase: PlaybackPhase::Closed,
            source: None,
            muted: false,
            overlay: true,
            error: None,
            play_pending: false,
            overlay_token: 0,
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == PlaybackPhase::Playing
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn show_overlay(&self) -> bool {
        self.overlay
    }

    pub fn error(&self) -> Option<&MediaError> {
        self.error.as_ref()
    }

    pub fn open(&mut self, source: &str) -> Vec<MediaCommand> {
        let same_source = self.source.as_deref() == Some(source);
        if self.phase != PlaybackPhase::Closed && same_source {
            return Vec::new();
        }

        let mut commands = self.reset_to_ready();
        if !same_source {
            self.source = Some(source.to_string());
            commands.push(MediaCommand::Load(source.to_string()));
        }
        commands
    }

    pub fn close(&mut self) -> Vec<MediaCommand> {
        if self.phase == PlaybackPhase::Closed {
            return Vec::new();
        }
        self.phase = PlaybackPhase::Closed;
        self.play_pending = false;
        vec![MediaCommand::Pause, MediaCommand::CancelOverlayHide]
    }

    pub fn toggle_play(&mut self) -> Vec<MediaCommand> {
        match self.phase {
            PlaybackPhase::Closed => Vec::new(),
            PlaybackPhase::Playing => {
                self.phase = PlaybackPhase::Ready;
                self.overlay = true;
                self.error = None;
                vec![MediaCommand::Pause, MediaCommand::CancelOverlayHide]
            }
            PlaybackPhase::Ready | PlaybackPhase::Errored => {
                if self.play_pending {
                    return Vec::new();
                }
                self.play_pending = true;
                vec![MediaCommand::Play]
            }
        }
    }

    pub fn play_resolved(&mut self) -> Vec<MediaCommand> {
        if self.phase == PlaybackPhase::Closed {
            // the element kept playing after the modal went away
            return vec![MediaCommand::Pause];
        }
        if !self.play_pending {
            return Vec::new();
        }

        self.play_pending = false;
        self.phase = PlaybackPhase::Playing;
        self.overlay = true;
        self.error = None;
        self.overlay_token += 1;
        vec![MediaCommand::ArmOverlayHide {
            token: self.overlay_token,
            delay_ms: OVERLAY_HIDE_MS,
        }]
    }

    pub fn play_rejected(&mut self, detail: impl Into<String>) -> Vec<MediaCommand> {
        if self.phase == PlaybackPhase::Closed || !self.play_pending {
            return Vec::new();
        }

        self.play_pending = false;
        self.phase = PlaybackPhase::Errored;
        self.overlay = true;
        self.error = Some(MediaError::PlaybackRejected {
            detail: detail.into(),
        });
        vec![MediaCommand::CancelOverlayHide]
    }

    pub fn load_failed(&mut self, detail: impl Into<String>) -> Vec<MediaCommand> {
        if self.phase == PlaybackPhase::Closed {
            return Vec::new();
        }

        self.play_pending = false;
        self.phase = PlaybackPhase::Errored;
        self.overlay = true;
        self.error = Some(MediaError::LoadFailed {
            detail: detail.into(),
        });
        vec![MediaCommand::CancelOverlayHide]
    }

    pub fn ended(&mut self) -> Vec<MediaCommand> {
        if self.phase != PlaybackPhase::Playing {
            return Vec::new();
        }
        self.phase = PlaybackPhase::Ready;
        self.overlay = true;
        vec![MediaCommand::CancelOverlayHide]
    }

    pub fn toggle_mute(&mut self) -> Vec<MediaCommand> {
        self.muted = !self.muted;
        vec![MediaCommand::SetMuted(self.muted)]
    }

    /// Returns whether the overlay changed. Tokens from cancelled or
    /// superseded timers are ignored.
    pub fn overlay_timer_fired(&mut self, token: u64) -> bool {
        if self.phase != PlaybackPhase::Playing || token != self.overlay_token || !self.overlay {
            return false;
        }
        self.overlay = false;
        true
    }

    /// Pointer activity over the player while playing brings the overlay
    /// back and restarts the hide countdown.
    pub fn activity(&mut self) -> Vec<MediaCommand> {
        if self.phase != PlaybackPhase::Playing {
            return Vec::new();
        }
        self.overlay = true;
        self.overlay_token += 1;
        vec![MediaCommand::ArmOverlayHide {
            token: self.overlay_token,
            delay_ms: OVERLAY_HIDE_MS,
        }]
    }

    fn reset_to_ready(&mut self) -> Vec<MediaCommand> {
        self.phase = PlaybackPhase::Ready;
        self.play_pending = false;
        self.overlay = true;
        self.error = None;
        vec![
            MediaCommand::Pause,
            MediaCommand::SeekToStart,
            MediaCommand::CancelOverlayHide,
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::utils::timer::manual::ManualScheduler;
    use crate::utils::timer::TimerSlot;

    const WEST: &str = "https://videos.example/west.mp4";
    const EAST: &str = "https://videos.example/east.mp4";

    /// Runs the machine's timer commands against a virtual clock and feeds
    /// fired tokens back, the way the component does.
    struct Player {
        machine: PlaybackMachine,
        clock: ManualScheduler,
        overlay_timer: TimerSlot<ManualScheduler>,
        fired: Rc<RefCell<Vec<u64>>>,
        element: Vec<MediaCommand>,
    }

    impl Player {
        fn new() -> Self {
            let clock = ManualScheduler::new();
            Self {
                machine: PlaybackMachine::new(),
                overlay_timer: TimerSlot::new(clock.clone()),
                clock,
                fired: Rc::new(RefCell::new(Vec::new())),
                element: Vec::new(),
            }
        }

        fn run(&mut self, commands: Vec<MediaCommand>) {
            for command in commands {
                match command {
                    MediaCommand::ArmOverlayHide { token, delay_ms } => {
                        let fired = self.fired.clone();
                        self.overlay_timer
                            .arm(delay_ms, move || fired.borrow_mut().push(token));
                    }
                    MediaCommand::CancelOverlayHide => self.overlay_timer.cancel(),
                    other => self.element.push(other),
                }
            }
        }

        fn advance(&mut self, ms: u64) {
            self.clock.advance(ms);
            let tokens: Vec<u64> = self.fired.borrow_mut().drain(..).collect();
            for token in tokens {
                self.machine.overlay_timer_fired(token);
            }
        }

        fn open(&mut self, src: &str) {
            let commands = self.machine.open(src);
            self.run(commands);
        }

        fn toggle(&mut self) {
            let commands = self.machine.toggle_play();
            self.run(commands);
        }

        fn resolve(&mut self) {
            let commands = self.machine.play_resolved();
            self.run(commands);
        }

        fn reject(&mut self) {
            let commands = self.machine.play_rejected("NotAllowedError");
            self.run(commands);
        }
    }

    #[test]
    fn opening_resets_and_loads() {
        let mut machine = PlaybackMachine::new();
        let commands = machine.open(WEST);
        assert_eq!(
            commands,
            vec![
                MediaCommand::Pause,
                MediaCommand::SeekToStart,
                MediaCommand::CancelOverlayHide,
                MediaCommand::Load(WEST.to_string()),
            ]
        );
        assert_eq!(machine.phase(), PlaybackPhase::Ready);
        assert!(machine.show_overlay());
        assert!(machine.error().is_none());
    }

    #[test]
    fn reopening_same_source_while_open_is_a_noop() {
        let mut player = Player::new();
        player.open(WEST);
        player.toggle();
        player.resolve();
        player.element.clear();

        player.open(WEST);

        assert!(player.element.is_empty());
        assert_eq!(player.machine.phase(), PlaybackPhase::Playing);
    }

    #[test]
    fn switching_source_while_open_resets_and_reloads() {
        let mut player = Player::new();
        player.open(WEST);
        player.toggle();
        player.resolve();
        player.element.clear();

        player.open(EAST);

        assert_eq!(player.machine.phase(), PlaybackPhase::Ready);
        assert!(player.machine.show_overlay());
        assert_eq!(
            player.element,
            vec![
                MediaCommand::Pause,
                MediaCommand::SeekToStart,
                MediaCommand::Load(EAST.to_string()),
            ]
        );
        assert_eq!(player.clock.pending(), 0);
    }

    #[test]
    fn reopening_after_close_resets_without_reload() {
        let mut machine = PlaybackMachine::new();
        machine.open(WEST);
        machine.close();

        let commands = machine.open(WEST);

        assert!(!commands.contains(&MediaCommand::Load(WEST.to_string())));
        assert!(commands.contains(&MediaCommand::SeekToStart));
        assert_eq!(machine.phase(), PlaybackPhase::Ready);
    }

    #[test]
    fn overlay_hides_after_three_seconds_of_play() {
        let mut player = Player::new();
        player.open(WEST);
        player.toggle();
        assert_eq!(player.element.last(), Some(&MediaCommand::Play));
        player.resolve();

        assert!(player.machine.is_playing());
        player.advance(2_999);
        assert!(player.machine.show_overlay());
        player.advance(1);
        assert!(!player.machine.show_overlay());
    }

    #[test]
    fn play_pause_round_trip_leaves_no_hide_timer() {
        let mut player = Player::new();
        player.open(WEST);
        player.toggle();
        player.resolve();
        player.advance(1_000);
        player.toggle();

        assert_eq!(player.machine.phase(), PlaybackPhase::Ready);
        assert!(player.machine.show_overlay());
        assert_eq!(player.clock.pending(), 0);

        player.advance(10_000);
        assert!(player.machine.show_overlay());
    }

    #[test]
    fn stale_hide_token_is_ignored() {
        let mut machine = PlaybackMachine::new();
        machine.open(WEST);
        machine.toggle_play();
        machine.play_resolved();
        machine.toggle_play();
        machine.toggle_play();
        machine.play_resolved();

        assert!(!machine.overlay_timer_fired(1));
        assert!(machine.show_overlay());
        assert!(machine.overlay_timer_fired(2));
    }

    #[test]
    fn rejection_then_retry_recovers() {
        let mut player = Player::new();
        player.open(WEST);
        player.toggle();
        player.reject();

        assert_eq!(player.machine.phase(), PlaybackPhase::Errored);
        assert!(player.machine.show_overlay());
        let message = player.machine.error().map(|e| e.to_string()).unwrap_or_default();
        assert_eq!(message, "Failed to play video. Please try again.");
        assert_eq!(player.machine.error().unwrap().detail(), "NotAllowedError");

        player.toggle();
        player.resolve();

        assert_eq!(player.machine.phase(), PlaybackPhase::Playing);
        assert!(player.machine.error().is_none());
    }

    #[test]
    fn toggles_while_play_is_pending_are_ignored() {
        let mut machine = PlaybackMachine::new();
        machine.open(WEST);
        assert_eq!(machine.toggle_play(), vec![MediaCommand::Play]);
        assert!(machine.toggle_play().is_empty());
        assert_eq!(machine.phase(), PlaybackPhase::Ready);
    }

    #[test]
    fn natural_end_returns_to_ready_with_overlay() {
        let mut player = Player::new();
        player.open(WEST);
        player.toggle();
        player.resolve();
        player.advance(3_000);
        assert!(!player.machine.show_overlay());

        let commands = player.machine.ended();
        player.run(commands);

        assert_eq!(player.machine.phase(), PlaybackPhase::Ready);
        assert!(player.machine.show_overlay());
        assert_eq!(player.clock.pending(), 0);
    }

    #[test]
    fn load_failure_wins_over_pending_play() {
        let mut machine = PlaybackMachine::new();
        machine.open(WEST);
        machine.toggle_play();
        machine.load_failed("MEDIA_ERR_SRC_NOT_SUPPORTED");

        assert_eq!(machine.phase(), PlaybackPhase::Errored);
        assert_eq!(
            machine.error().map(ToString::to_string).as_deref(),
            Some("Video failed to load. Please check the URL.")
        );
        assert!(machine.play_resolved().is_empty());
        assert_eq!(machine.phase(), PlaybackPhase::Errored);
    }

    #[test]
    fn mute_is_orthogonal_to_playback() {
        let mut machine = PlaybackMachine::new();
        machine.open(WEST);
        assert_eq!(machine.toggle_mute(), vec![MediaCommand::SetMuted(true)]);
        machine.toggle_play();
        machine.play_resolved();
        assert_eq!(machine.toggle_mute(), vec![MediaCommand::SetMuted(false)]);
        assert!(machine.is_playing());
    }

    #[test]
    fn close_pauses_and_cancels_timer() {
        let mut player = Player::new();
        player.open(WEST);
        player.toggle();
        player.resolve();
        player.element.clear();

        let commands = player.machine.close();
        player.run(commands);

        assert_eq!(player.machine.phase(), PlaybackPhase::Closed);
        assert_eq!(player.element, vec![MediaCommand::Pause]);
        assert_eq!(player.clock.pending(), 0);
        assert!(player.machine.close().is_empty());
    }

    #[test]
    fn late_resolution_after_close_pauses_element() {
        let mut machine = PlaybackMachine::new();
        machine.open(WEST);
        machine.toggle_play();
        machine.close();

        assert_eq!(machine.play_resolved(), vec![MediaCommand::Pause]);
        assert_eq!(machine.phase(), PlaybackPhase::Closed);
    }

    #[test]
    fn activity_while_playing_restarts_countdown() {
        let mut player = Player::new();
        player.open(WEST);
        player.toggle();
        player.resolve();
        player.advance(3_000);
        assert!(!player.machine.show_overlay());

        let commands = player.machine.activity();
        player.run(commands);
        assert!(player.machine.show_overlay());
        player.advance(3_000);
        assert!(!player.machine.show_overlay());
    }

    #[test]
    fn continuous_activity_keeps_overlay_visible() {
        let mut player = Player::new();
        player.open(WEST);
        player.toggle();
        player.resolve();

        for _ in 0..30 {
            player.advance(100);
            let commands = player.machine.activity();
            player.run(commands);
            assert!(player.machine.show_overlay());
        }
        assert_eq!(player.clock.pending(), 1);

        player.advance(2_999);
        assert!(player.machine.show_overlay());
        player.advance(1);
        assert!(!player.machine.show_overlay());
    }
}
