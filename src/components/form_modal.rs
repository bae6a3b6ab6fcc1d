use yew::prelude::*;

use crate::components::modal_shell::ModalShell;
use crate::components::question_form::QuestionForm;
use crate::submission::SinkHandle;

#[derive(Properties, PartialEq)]
pub struct FormModalProps {
    pub on_close: Callback<()>,
    #[prop_or_else(SinkHandle::simulated)]
    pub sink: SinkHandle,
}

#[function_component(FormModal)]
pub fn form_modal(props: &FormModalProps) -> Html {
    html! {
        <ModalShell title="Ask Your Question" wide=true on_close={props.on_close.clone()}>
            <div style="padding: 1.75rem;">
                <QuestionForm on_close={props.on_close.clone()} sink={props.sink.clone()} />
            </div>
        </ModalShell>
    }
}
