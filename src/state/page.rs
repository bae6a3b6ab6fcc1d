use crate::config::{MarkerConfig, PageConfig};

/// Content of the open video modal.
#[derive(Clone, Debug, PartialEq)]
pub struct ModalState {
    pub title: String,
    pub description: String,
    pub video_src: String,
    pub spokesperson: String,
}

impl From<&MarkerConfig> for ModalState {
    fn from(marker: &MarkerConfig) -> Self {
        Self {
            title: format!("{} Spokesperson", marker.region),
            description: marker.description.clone(),
            video_src: marker.video_src.clone(),
            spokesperson: marker.spokesperson.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ActiveModal {
    #[default]
    None,
    Video(ModalState),
    Form,
}

#[derive(Debug, Default)]
pub struct PageState {
    active: ActiveModal,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &ActiveModal {
        &self.active
    }

    /// Opens the video modal for the marker at `index`, replacing whatever
    /// modal was open. Returns `false` for an unknown index.
    pub fn select_marker(&mut self, config: &PageConfig, index: usize) -> bool {
        match config.markers.get(index) {
            Some(marker) => {
                self.active = ActiveModal::Video(ModalState::from(marker));
                true
            }
            None => false,
        }
    }

    pub fn open_form(&mut self) {
        self.active = ActiveModal::Form;
    }

    /// Returns whether a modal was open.
    pub fn close(&mut self) -> bool {
        !matches!(std::mem::take(&mut self.active), ActiveModal::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::playback::{MediaCommand, PlaybackMachine, PlaybackPhase};

    #[test]
    fn west_coast_marker_opens_video_then_close_pauses_it() {
        let config = PageConfig::default();
        let mut page = PageState::new();
        let mut player = PlaybackMachine::new();

        assert!(page.select_marker(&config, 0));
        let modal = match page.active() {
            ActiveModal::Video(modal) => modal.clone(),
            other => panic!("expected video modal, got {:?}", other),
        };
        assert_eq!(modal.title, "West Coast Spokesperson");
        assert_eq!(
            modal.video_src,
            "https://videos.pexels.com/video-files/6548176/6548176-sd_640_360_24fps.mp4"
        );
        assert_eq!(modal.spokesperson, "Emma Thompson");

        player.open(&modal.video_src);
        player.toggle_play();
        player.play_resolved();
        assert!(player.is_playing());

        let commands = player.close();
        assert!(page.close());

        assert_eq!(page.active(), &ActiveModal::None);
        assert!(commands.contains(&MediaCommand::Pause));
        assert_eq!(player.phase(), PlaybackPhase::Closed);
    }

    #[test]
    fn only_one_modal_is_ever_open() {
        let config = PageConfig::default();
        let mut page = PageState::new();

        page.open_form();
        assert_eq!(page.active(), &ActiveModal::Form);

        page.select_marker(&config, 2);
        assert!(matches!(
            page.active(),
            ActiveModal::Video(m) if m.title == "East Coast Spokesperson"
        ));

        page.open_form();
        assert_eq!(page.active(), &ActiveModal::Form);
    }

    #[test]
    fn unknown_marker_leaves_state_alone() {
        let config = PageConfig::default();
        let mut page = PageState::new();
        page.open_form();

        assert!(!page.select_marker(&config, 7));
        assert_eq!(page.active(), &ActiveModal::Form);
    }

    #[test]
    fn closing_without_modal_reports_nothing() {
        let mut page = PageState::new();
        assert!(!page.close());
    }
}
