use std::rc::Rc;

use futures::future::{self, LocalBoxFuture};
use log::debug;

use crate::error::SubmitError;
use crate::state::form::QuestionSubmission;

/// Where submitted questions go. The form only sees the result.
pub trait QuestionSink {
    fn submit(&self, submission: QuestionSubmission) -> LocalBoxFuture<'static, Result<(), SubmitError>>;
}

/// Accepts every question without sending it anywhere.
#[derive(Debug, Default)]
pub struct SimulatedSink;

impl QuestionSink for SimulatedSink {
    fn submit(&self, submission: QuestionSubmission) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let result = match serde_json::to_string(&submission) {
            Ok(payload) => {
                debug!("Simulated question submission: {}", payload);
                Ok(())
            }
            Err(e) => Err(SubmitError::Rejected(e.to_string())),
        };
        Box::pin(future::ready(result))
    }
}

/// Shared sink handle usable as a component property.
#[derive(Clone)]
pub struct SinkHandle(pub Rc<dyn QuestionSink>);

impl SinkHandle {
    pub fn simulated() -> Self {
        Self(Rc::new(SimulatedSink))
    }

    pub fn submit(&self, submission: QuestionSubmission) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        self.0.submit(submission)
    }
}

impl PartialEq for SinkHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    struct RejectingSink;

    impl QuestionSink for RejectingSink {
        fn submit(&self, _: QuestionSubmission) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
            Box::pin(future::ready(Err(SubmitError::Rejected("spam".to_string()))))
        }
    }

    fn sample() -> QuestionSubmission {
        QuestionSubmission {
            name: "Ann".to_string(),
            email: "a@b.com".to_string(),
            question: "Hi".to_string(),
            region: "West Coast".to_string(),
            newsletter: true,
        }
    }

    #[test]
    fn simulated_sink_always_accepts() {
        let sink = SinkHandle::simulated();
        assert_eq!(block_on(sink.submit(sample())), Ok(()));
    }

    #[test]
    fn injected_sink_result_reaches_the_form() {
        use crate::state::form::{FieldUpdate, FormPhase, QuestionForm, SubmissionStatus};

        let sink = SinkHandle(Rc::new(RejectingSink));
        let mut form = QuestionForm::new();
        form.update(FieldUpdate::Name("Ann".to_string()));
        form.update(FieldUpdate::Email("a@b.com".to_string()));
        form.update(FieldUpdate::Question("Hi".to_string()));
        form.update(FieldUpdate::Region("East Coast".to_string()));
        form.update(FieldUpdate::Subscribed(true));

        let payload = form.submit().unwrap();
        let result = block_on(sink.submit(payload));
        form.finish(result);

        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(
            form.status(),
            Some(&SubmissionStatus::Failure("Submission was rejected: spam".to_string()))
        );
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = SinkHandle::simulated();
        let b = SinkHandle::simulated();
        assert!(a == a.clone());
        assert!(a != b);
    }
}
