use log::{debug, error};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::components::modal_shell::ModalShell;
use crate::state::playback::{MediaCommand, PlaybackMachine};
use crate::utils::timer::TimerSlot;

#[derive(Properties, PartialEq)]
pub struct VideoModalProps {
    pub title: AttrValue,
    pub description: AttrValue,
    pub spokesperson: AttrValue,
    pub video_src: AttrValue,
    pub on_close: Callback<()>,
}

pub enum Msg {
    TogglePlay,
    PlayResolved,
    PlayRejected(String),
    ToggleMute,
    Ended,
    LoadFailed(String),
    Activity,
    HideOverlay(u64),
    Close,
}

pub struct VideoModal {
    playback: PlaybackMachine,
    video: NodeRef,
    overlay_timer: TimerSlot,
}

impl VideoModal {
    fn element(&self) -> Option<HtmlVideoElement> {
        self.video.cast::<HtmlVideoElement>()
    }

    fn log_error(&self) {
        if let Some(err) = self.playback.error() {
            error!("{} ({})", err, err.detail());
        }
    }

    /// Applies machine output to the element and the overlay timer. Element
    /// commands issued before the element is mounted are dropped; a freshly
    /// mounted element already starts paused at the new source.
    fn run(&mut self, ctx: &Context<Self>, commands: Vec<MediaCommand>) {
        for command in commands {
            match command {
                MediaCommand::ArmOverlayHide { token, delay_ms } => {
                    let link = ctx.link().clone();
                    self.overlay_timer
                        .arm(delay_ms, move || link.send_message(Msg::HideOverlay(token)));
                }
                MediaCommand::CancelOverlayHide => self.overlay_timer.cancel(),
                MediaCommand::Play => match self.element() {
                    Some(video) => match video.play() {
                        Ok(promise) => ctx.link().send_future(async move {
                            match JsFuture::from(promise).await {
                                Ok(_) => Msg::PlayResolved,
                                Err(e) => Msg::PlayRejected(format!("{:?}", e)),
                            }
                        }),
                        Err(e) => ctx.link().send_message(Msg::PlayRejected(format!("{:?}", e))),
                    },
                    None => ctx
                        .link()
                        .send_message(Msg::PlayRejected("video element not mounted".to_string())),
                },
                MediaCommand::Pause => {
                    if let Some(video) = self.element() {
                        if let Err(e) = video.pause() {
                            error!("Failed to pause video: {:?}", e);
                        }
                    }
                }
                MediaCommand::SeekToStart => {
                    if let Some(video) = self.element() {
                        video.set_current_time(0.0);
                    }
                }
                // the view's `src` binding is the only writer; changing it
                // starts the fetch on the next render
                MediaCommand::Load(src) => debug!("Loading video: {}", src),
                MediaCommand::SetMuted(muted) => {
                    if let Some(video) = self.element() {
                        video.set_muted(muted);
                    }
                }
            }
        }
    }
}

impl Component for VideoModal {
    type Message = Msg;
    type Properties = VideoModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut modal = Self {
            playback: PlaybackMachine::new(),
            video: NodeRef::default(),
            overlay_timer: TimerSlot::default(),
        };
        let commands = modal.playback.open(&ctx.props().video_src);
        modal.run(ctx, commands);
        modal
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let commands = self.playback.open(&ctx.props().video_src);
        self.run(ctx, commands);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let commands = match msg {
            Msg::TogglePlay => self.playback.toggle_play(),
            Msg::PlayResolved => self.playback.play_resolved(),
            Msg::PlayRejected(detail) => {
                let commands = self.playback.play_rejected(detail);
                self.log_error();
                commands
            }
            Msg::ToggleMute => self.playback.toggle_mute(),
            Msg::Ended => self.playback.ended(),
            Msg::LoadFailed(detail) => {
                let commands = self.playback.load_failed(detail);
                self.log_error();
                commands
            }
            Msg::Activity => {
                let was_visible = self.playback.show_overlay();
                let commands = self.playback.activity();
                self.run(ctx, commands);
                return !was_visible;
            }
            Msg::HideOverlay(token) => return self.playback.overlay_timer_fired(token),
            Msg::Close => {
                let commands = self.playback.close();
                self.run(ctx, commands);
                ctx.props().on_close.emit(());
                return false;
            }
        };
        self.run(ctx, commands);
        true
    }

    fn destroy(&mut self, ctx: &Context<Self>) {
        let commands = self.playback.close();
        self.run(ctx, commands);
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let toggle = link.callback(|_: MouseEvent| Msg::TogglePlay);

        let on_error = link.callback(|e: Event| {
            let detail = e
                .target_dyn_into::<HtmlVideoElement>()
                .and_then(|video| video.error())
                .map(|err| format!("media error code {}", err.code()))
                .unwrap_or_else(|| "unknown media error".to_string());
            Msg::LoadFailed(detail)
        });

        html! {
            <ModalShell title={props.title.clone()} on_close={link.callback(|_| Msg::Close)}>
                <div class="video-body">
                    <div class="video-frame" onmousemove={link.callback(|_: MouseEvent| Msg::Activity)}>
                        <video
                            ref={self.video.clone()}
                            src={props.video_src.clone()}
                            class="video-element"
                            onclick={toggle.clone()}
                            onended={link.callback(|_: Event| Msg::Ended)}
                            onerror={on_error}
                            playsinline=true
                            preload="auto"
                        >
                            {"Your browser does not support the video tag or the source is invalid."}
                        </video>

                        if self.playback.show_overlay() {
                            <div class="video-overlay">
                                <button class="video-toggle" onclick={toggle}>
                                    { if self.playback.is_playing() { "❚❚" } else { "▶" } }
                                </button>
                                <div class="video-caption">
                                    <div class="video-caption-title">{ format!("Video playing: {}", props.title) }</div>
                                    <div>{ format!("Spokesperson: {}", props.spokesperson) }</div>
                                </div>
                            </div>
                        }

                        <div class="video-controls">
                            <button class="video-mute" onclick={link.callback(|_: MouseEvent| Msg::ToggleMute)}>
                                { if self.playback.is_muted() { "🔇" } else { "🔊" } }
                            </button>
                        </div>
                    </div>
                    <div class="video-description">
                        <p>{ props.description.clone() }</p>
                        if let Some(err) = self.playback.error() {
                            <p class="video-error">{ err.to_string() }</p>
                        }
                    </div>
                </div>
                <style>
                    {r#"
                    .video-body {
                        position: relative;
                        padding: 1.75rem;
                    }
                    .video-frame {
                        position: relative;
                        background: #f3f4f6;
                        border-radius: 12px;
                        padding: 1rem;
                    }
                    .video-element {
                        width: 100%;
                        aspect-ratio: 16 / 9;
                        border-radius: 12px;
                        background: #d1d5db;
                    }
                    .video-overlay {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        align-items: center;
                        justify-content: center;
                        pointer-events: none;
                    }
                    .video-toggle {
                        pointer-events: auto;
                        height: 4rem;
                        width: 4rem;
                        border-radius: 9999px;
                        border: none;
                        background: rgba(13, 148, 136, 0.9);
                        color: #fff;
                        font-size: 1.5rem;
                        cursor: pointer;
                        transition: background 0.2s;
                    }
                    .video-toggle:hover {
                        background: #0f766e;
                    }
                    .video-caption {
                        color: rgba(255, 255, 255, 0.9);
                        font-size: 0.875rem;
                        text-align: center;
                    }
                    .video-caption-title {
                        color: #000;
                        font-size: 15px;
                        font-weight: 600;
                    }
                    .video-controls {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        padding: 1rem;
                        display: flex;
                        align-items: center;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.5), transparent);
                    }
                    .video-mute {
                        background: none;
                        border: none;
                        color: #fff;
                        cursor: pointer;
                    }
                    .video-description {
                        padding-top: 0.5rem;
                        color: #374151;
                        text-align: center;
                    }
                    .video-error {
                        color: #ef4444;
                        margin-top: 0.5rem;
                    }
                    "#}
                </style>
            </ModalShell>
        }
    }
}
