use yew::prelude::*;

use crate::config::MarkerConfig;
use crate::state::hover::MarkerHover;
use crate::utils::debounce::Debouncer;

#[derive(Properties, PartialEq)]
pub struct MarkerProps {
    pub index: usize,
    pub config: MarkerConfig,
    pub hover_debounce_ms: u32,
    pub on_select: Callback<usize>,
}

pub enum Msg {
    PointerMove,
    PointerLeave,
    Settle,
}

pub struct Marker {
    hover: MarkerHover,
    settle: Debouncer<()>,
}

fn settle_debouncer(ctx: &Context<Marker>) -> Debouncer<()> {
    let link = ctx.link().clone();
    Debouncer::new(ctx.props().hover_debounce_ms, move |_| link.send_message(Msg::Settle))
}

impl Component for Marker {
    type Message = Msg;
    type Properties = MarkerProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            hover: MarkerHover::new(ctx.props().config.hover_offset),
            settle: settle_debouncer(ctx),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.hover_debounce_ms != old_props.hover_debounce_ms {
            self.settle = settle_debouncer(ctx);
        }
        self.hover.set_delta(props.config.hover_offset);
        true
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::PointerMove => {
                self.settle.call(());
                false
            }
            Msg::Settle => self.hover.settle(),
            Msg::PointerLeave => {
                self.settle.cancel();
                self.hover.leave()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let onclick = {
            let on_select = props.on_select.clone();
            let index = props.index;
            Callback::from(move |_: MouseEvent| on_select.emit(index))
        };

        html! {
            <div class="marker" style={props.config.anchor.clone()}>
                <div
                    class="marker-ball"
                    style={format!("background: {}; {}", props.config.color, self.hover.transform())}
                    onmousemove={link.callback(|_: MouseEvent| Msg::PointerMove)}
                    onmouseleave={link.callback(|_: MouseEvent| Msg::PointerLeave)}
                    {onclick}
                >
                    <div class="marker-dot"></div>
                </div>
                <p>{ &props.config.region }</p>
            </div>
        }
    }
}
