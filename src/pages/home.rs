use log::{debug, info, warn};
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::form_modal::FormModal;
use crate::components::marker::Marker;
use crate::components::video_modal::VideoModal;
use crate::config::{FooterStyle, PageConfig};
use crate::state::page::{ActiveModal, PageState};
use crate::utils::debounce::Debouncer;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub config: PageConfig,
}

pub enum Msg {
    MarkerClicked(usize),
    OpenMarker(usize),
    OpenForm,
    CloseModal,
}

/// The whole page: markers, call to action and whichever modal is open.
pub struct Home {
    page: PageState,
    marker_click: Debouncer<usize>,
}

fn click_debouncer(ctx: &Context<Home>) -> Debouncer<usize> {
    let link = ctx.link().clone();
    Debouncer::new(ctx.props().config.click_debounce_ms, move |index| {
        link.send_message(Msg::OpenMarker(index))
    })
}

impl Component for Home {
    type Message = Msg;
    type Properties = HomeProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            page: PageState::new(),
            marker_click: click_debouncer(ctx),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().config.click_debounce_ms != old_props.config.click_debounce_ms {
            self.marker_click = click_debouncer(ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::MarkerClicked(index) => {
                self.marker_click.call(index);
                false
            }
            Msg::OpenMarker(index) => {
                let opened = self.page.select_marker(&ctx.props().config, index);
                if opened {
                    info!("Opening spokesperson video for marker {}", index);
                } else {
                    warn!("No marker configured at index {}", index);
                }
                opened
            }
            Msg::OpenForm => {
                debug!("Opening question form");
                self.page.open_form();
                true
            }
            Msg::CloseModal => self.page.close(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config = &ctx.props().config;
        let link = ctx.link();
        let on_select = link.callback(Msg::MarkerClicked);
        let on_ask = link.callback(|_| Msg::OpenForm);
        let on_close = link.callback(|_| Msg::CloseModal);

        let modal = match self.page.active() {
            ActiveModal::None => html! {},
            ActiveModal::Video(modal) => html! {
                <VideoModal
                    title={modal.title.clone()}
                    description={modal.description.clone()}
                    spokesperson={modal.spokesperson.clone()}
                    video_src={modal.video_src.clone()}
                    on_close={on_close}
                />
            },
            ActiveModal::Form => html! { <FormModal on_close={on_close} /> },
        };

        html! {
            <div
                class="home-page"
                style={format!("background-image: url({}); background-size: cover;", config.background_image)}
            >
                <div class="home-heading">
                    <h1>{ &config.heading }</h1>
                </div>
                <div class="marker-area">
                    { for config.markers.iter().enumerate().map(|(index, marker)| html! {
                        <Marker
                            key={marker.region.clone()}
                            index={index}
                            config={marker.clone()}
                            hover_debounce_ms={config.hover_debounce_ms}
                            on_select={on_select.clone()}
                        />
                    }) }
                    <div class="home-prompt">
                        <h2>{"Click On a spokesperson to hear their message"}</h2>
                        <p>{"Discover perspectives from across Canada"}</p>
                    </div>
                    if config.footer == FooterStyle::Inline {
                        <Footer on_ask={on_ask.clone()} />
                    }
                </div>
                if config.footer == FooterStyle::Standalone {
                    <Footer on_ask={on_ask} standalone=true />
                }
                { modal }
                <style>
                    {r#"
                    .home-page {
                        overflow: hidden;
                        min-height: 100vh;
                        font-family: sans-serif;
                    }
                    .home-heading {
                        display: flex;
                        justify-content: center;
                        padding-top: 0.75rem;
                        text-align: center;
                    }
                    .home-heading h1 {
                        padding-top: 1rem;
                        font-size: 1.875rem;
                        font-weight: 600;
                        color: #fff;
                    }
                    .marker-area {
                        position: relative;
                        display: flex;
                        gap: 30px;
                        align-items: center;
                        justify-content: center;
                        height: 100vh;
                        color: #e5e7eb;
                    }
                    .marker {
                        position: absolute;
                        text-align: center;
                    }
                    .marker-ball {
                        position: relative;
                        height: 80px;
                        width: 80px;
                        border-radius: 9999px;
                        cursor: pointer;
                        transition: transform 0.2s;
                    }
                    .marker-dot {
                        position: absolute;
                        top: 0;
                        right: 1.5rem;
                        height: 40px;
                        width: 40px;
                        border-radius: 9999px;
                        background: rgba(229, 231, 235, 0.8);
                    }
                    .home-prompt {
                        position: absolute;
                        bottom: 500px;
                        color: #000;
                        text-align: center;
                    }
                    .home-prompt h2 {
                        font-size: 1.25rem;
                        font-weight: 600;
                    }
                    .home-prompt p {
                        font-size: 15px;
                        font-style: italic;
                    }
                    .call-to-action {
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        align-items: center;
                        justify-content: center;
                        height: 10em;
                        color: #e5e7eb;
                        text-align: center;
                    }
                    .call-to-action.inline {
                        position: absolute;
                        bottom: 5rem;
                    }
                    .call-to-action h1 {
                        font-size: 1.875rem;
                        font-weight: 600;
                    }
                    .call-to-action p {
                        font-size: 15px;
                        font-weight: 600;
                        color: rgba(229, 231, 235, 0.9);
                    }
                    .ask-button {
                        padding: 0.75rem 1rem;
                        border: none;
                        border-radius: 9999px;
                        background: rgba(229, 231, 235, 0.18);
                        color: inherit;
                        cursor: pointer;
                    }
                    "#}
                </style>
            </div>
        }
    }
}
