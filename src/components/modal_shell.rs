use web_sys::{Event, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

#[derive(Properties, PartialEq)]
pub struct ModalShellProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub wide: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Backdrop, header and close control shared by both modals. The owner only
/// mounts it while the modal is open, so the window listeners below live
/// exactly as long as the modal does.
#[function_component(ModalShell)]
pub fn modal_shell(props: &ModalShellProps) -> Html {
    let content = use_node_ref();

    {
        let on_close = props.on_close.clone();
        use_click_away(content.clone(), move |_: Event| {
            on_close.emit(());
        });
    }

    {
        let on_close = props.on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if is_dismiss_key(&e.key()) {
                on_close.emit(());
            }
        });
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    html! {
        <div class="modal-backdrop">
            <div ref={content} class={classes!("modal-panel", props.wide.then(|| "wide"))}>
                <div class="modal-header">
                    <h3>{ props.title.clone() }</h3>
                    <button class="modal-close" onclick={close} aria-label="Close">{"✕"}</button>
                </div>
                { for props.children.iter() }
            </div>
            <style>
                {r#"
                .modal-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.7);
                    backdrop-filter: blur(4px);
                }
                .modal-panel {
                    width: 100%;
                    max-width: 42rem;
                    margin: 0 1rem;
                    background: #fff;
                    border-radius: 8px;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    overflow: hidden;
                }
                .modal-panel.wide {
                    max-width: 48rem;
                    border-top: 7px solid #115e59;
                }
                .modal-header {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1rem;
                }
                .modal-header h3 {
                    margin: 0;
                    font-size: 22px;
                    font-weight: 600;
                    color: #0f766e;
                }
                .modal-close {
                    background: none;
                    border: none;
                    font-size: 20px;
                    color: #6b7280;
                    cursor: pointer;
                }
                .modal-close:hover {
                    color: #374151;
                }
                "#}
            </style>
        </div>
    }
}
