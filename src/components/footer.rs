use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_ask: Callback<()>,
    /// Rendered as a page footer instead of floating over the markers.
    #[prop_or_default]
    pub standalone: bool,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let on_ask = {
        let on_ask = props.on_ask.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_ask.emit(());
        })
    };

    html! {
        <div class={classes!("call-to-action", if props.standalone { "standalone" } else { "inline" })}>
            <h1>{"Ready to join conversation"}</h1>
            <p>{"Have your voice heard and connect with our spokesperson"}</p>
            <button class="ask-button" onclick={on_ask}>{"Ask Your Question"}</button>
        </div>
    }
}
