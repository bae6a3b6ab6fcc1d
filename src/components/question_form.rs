use log::info;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::REGION_OPTIONS;
use crate::error::SubmitError;
use crate::state::form::{
    Field, FieldUpdate, FormEffect, FormPhase, QuestionForm as FormMachine, SubmissionStatus,
};
use crate::submission::SinkHandle;
use crate::utils::timer::TimerSlot;

#[derive(Properties, PartialEq)]
pub struct QuestionFormProps {
    pub on_close: Callback<()>,
    #[prop_or_else(SinkHandle::simulated)]
    pub sink: SinkHandle,
}

pub enum Msg {
    Update(FieldUpdate),
    Submit,
    Submitted(Result<(), SubmitError>),
    Close,
}

pub struct QuestionForm {
    form: FormMachine,
    close_timer: TimerSlot,
}

impl QuestionForm {
    fn field_error(&self, field: Field) -> Html {
        match self.form.error(field) {
            Some(message) => html! {
                <p class="field-error">{"⚠ "}{ message }</p>
            },
            None => html! {},
        }
    }

    fn input_class(&self, field: Field) -> Classes {
        classes!("form-input", self.form.error(field).is_some().then(|| "invalid"))
    }
}

impl Component for QuestionForm {
    type Message = Msg;
    type Properties = QuestionFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: FormMachine::new(),
            close_timer: TimerSlot::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Update(update) => {
                self.form.update(update);
                true
            }
            Msg::Submit => match self.form.submit() {
                Some(submission) => {
                    let sink = ctx.props().sink.clone();
                    ctx.link()
                        .send_future(async move { Msg::Submitted(sink.submit(submission).await) });
                    true
                }
                None => true,
            },
            Msg::Submitted(result) => {
                if let Err(e) = &result {
                    info!("Question submission failed: {}", e);
                }
                if let Some(FormEffect::ScheduleClose { delay_ms }) = self.form.finish(result) {
                    let link = ctx.link().clone();
                    self.close_timer.arm(delay_ms, move || link.send_message(Msg::Close));
                }
                true
            }
            Msg::Close => {
                ctx.props().on_close.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let values = self.form.values();
        let phase = self.form.phase();
        let submitting = phase == FormPhase::Submitting;

        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="question-form">
                <h2>{"Submit Your Question"}</h2>
                <form {onsubmit} novalidate=true>
                    <div class="form-row">
                        <label for={Field::Name.as_str()}>{"Name"}</label>
                        <input
                            type="text"
                            id={Field::Name.as_str()}
                            name={Field::Name.as_str()}
                            class={self.input_class(Field::Name)}
                            placeholder="Enter your name"
                            value={values.name.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                Msg::Update(FieldUpdate::Name(input.value()))
                            })}
                        />
                        { self.field_error(Field::Name) }
                    </div>
                    <div class="form-row">
                        <label for={Field::Email.as_str()}>{"Email"}</label>
                        <input
                            type="email"
                            id={Field::Email.as_str()}
                            name={Field::Email.as_str()}
                            class={self.input_class(Field::Email)}
                            placeholder="Enter your email"
                            value={values.email.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                Msg::Update(FieldUpdate::Email(input.value()))
                            })}
                        />
                        { self.field_error(Field::Email) }
                    </div>
                    <div class="form-row">
                        <label for={Field::Region.as_str()}>{"Region"}</label>
                        <select
                            id={Field::Region.as_str()}
                            name={Field::Region.as_str()}
                            class={self.input_class(Field::Region)}
                            onchange={link.callback(|e: Event| {
                                let select: HtmlSelectElement = e.target_unchecked_into();
                                Msg::Update(FieldUpdate::Region(select.value()))
                            })}
                        >
                            <option value="" disabled=true selected={values.region.is_empty()}>{"Select a region"}</option>
                            { for REGION_OPTIONS.iter().map(|region| html! {
                                <option value={*region} selected={values.region == *region}>{ *region }</option>
                            }) }
                        </select>
                        { self.field_error(Field::Region) }
                    </div>
                    <div class="form-row">
                        <label for={Field::Question.as_str()}>{"Your Question"}</label>
                        <textarea
                            id={Field::Question.as_str()}
                            name={Field::Question.as_str()}
                            rows="5"
                            class={self.input_class(Field::Question)}
                            placeholder="Type your question here..."
                            value={values.question.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let input: HtmlTextAreaElement = e.target_unchecked_into();
                                Msg::Update(FieldUpdate::Question(input.value()))
                            })}
                        />
                        { self.field_error(Field::Question) }
                    </div>
                    <div class="form-check">
                        <input
                            type="checkbox"
                            id={Field::Subscribed.as_str()}
                            name={Field::Subscribed.as_str()}
                            checked={values.subscribed}
                            onchange={link.callback(|e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                Msg::Update(FieldUpdate::Subscribed(input.checked()))
                            })}
                        />
                        <label for={Field::Subscribed.as_str()}>
                            {"I am over 16 and wish to subscribe to the newsletter"}
                        </label>
                    </div>
                    { self.field_error(Field::Subscribed) }
                    <button type="submit" class="form-submit" disabled={phase != FormPhase::Editing}>
                        { if submitting { "Submitting..." } else { "Submit" } }
                    </button>
                </form>
                {
                    match self.form.status() {
                        Some(SubmissionStatus::Success(message)) => html! {
                            <p class="form-status success">{"✓ "}{ message }</p>
                        },
                        Some(SubmissionStatus::Failure(message)) => html! {
                            <p class="form-status failure">{ message }</p>
                        },
                        None => html! {},
                    }
                }
                <style>
                    {r#"
                    .question-form {
                        max-width: 32rem;
                        margin: 0 auto;
                        padding: 1.5rem;
                        font-family: sans-serif;
                    }
                    .question-form h2 {
                        font-size: 1.875rem;
                        font-weight: 700;
                        color: #115e59;
                        text-align: center;
                        margin-bottom: 1.5rem;
                    }
                    .question-form form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .form-row label {
                        display: block;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #1f2937;
                    }
                    .form-input {
                        margin-top: 0.5rem;
                        display: block;
                        width: 100%;
                        box-sizing: border-box;
                        border: 1px solid #d1d5db;
                        border-radius: 8px;
                        padding: 0.75rem 1rem;
                        color: #1f2937;
                    }
                    .form-input:focus {
                        outline: none;
                        border-color: #14b8a6;
                        box-shadow: 0 0 0 2px rgba(20, 184, 166, 0.5);
                    }
                    .form-input.invalid {
                        border-color: #f87171;
                    }
                    .form-check {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        font-size: 0.875rem;
                        color: #1f2937;
                    }
                    .field-error {
                        color: #ef4444;
                        font-size: 0.75rem;
                        margin-top: 0.5rem;
                    }
                    .form-submit {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        border: none;
                        border-radius: 8px;
                        color: #fff;
                        background: linear-gradient(to right, #0d9488, #0f766e);
                        cursor: pointer;
                    }
                    .form-submit:disabled {
                        opacity: 0.6;
                        cursor: not-allowed;
                    }
                    .form-status {
                        margin-top: 1.5rem;
                        text-align: center;
                        font-size: 0.875rem;
                    }
                    .form-status.success {
                        color: #16a34a;
                    }
                    .form-status.failure {
                        color: #dc2626;
                    }
                    "#}
                </style>
            </div>
        }
    }
}
