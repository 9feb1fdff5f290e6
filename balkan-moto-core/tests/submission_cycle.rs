use std::cell::RefCell;

use balkan_moto_core::{
    ContactForm, Delay, FormTimings, MembershipForm, SimulatedSink, SubmitError, SubmitIntent,
    SubmitPhase, SubmitSink, Submission, run_submission,
};
use futures::executor::block_on;

/// Resolves immediately and remembers what it was asked to wait for.
#[derive(Default)]
struct RecordingDelay {
    waits: RefCell<Vec<u32>>,
}

impl Delay for RecordingDelay {
    async fn wait(&self, ms: u32) {
        self.waits.borrow_mut().push(ms);
    }
}

#[derive(Default)]
struct CollectingSink {
    intents: RefCell<Vec<SubmitIntent>>,
}

impl SubmitSink for CollectingSink {
    fn deliver(&self, intent: &SubmitIntent) {
        self.intents.borrow_mut().push(intent.clone());
    }
}

fn contact() -> ContactForm {
    ContactForm {
        name: "Jelena".into(),
        email: "jelena@example.com".into(),
        phone: "+381 64 000 0000".into(),
        message: "Do you ship stickers to Skopje?".into(),
    }
}

#[test]
fn contact_form_cycles_back_to_a_clean_idle() {
    let timings = FormTimings::default();
    let delay = RecordingDelay::default();
    let sink = CollectingSink::default();
    let mut submission = Submission::new(contact());
    let mut phases = Vec::new();

    block_on(run_submission(&mut submission, &delay, &sink, timings, |s| {
        phases.push(s.phase());
    }))
    .unwrap();

    assert_eq!(
        phases,
        [
            SubmitPhase::Submitting,
            SubmitPhase::Submitted,
            SubmitPhase::Idle
        ]
    );
    assert_eq!(*delay.waits.borrow(), [1000, 4000]);
    assert_eq!(submission.fields(), &ContactForm::default());
    let intents = sink.intents.borrow();
    assert_eq!(intents.len(), 1);
    assert_eq!(intents[0].form, "contact");
    assert_eq!(intents[0].payload["email"], "jelena@example.com");
}

#[test]
fn fields_stay_filled_until_the_reset() {
    let delay = RecordingDelay::default();
    let mut submission = Submission::new(contact());
    let mut snapshots = Vec::new();

    block_on(run_submission(
        &mut submission,
        &delay,
        &SimulatedSink,
        FormTimings::default(),
        |s| snapshots.push(s.fields().name.clone()),
    ))
    .unwrap();

    assert_eq!(snapshots, ["Jelena", "Jelena", ""]);
}

#[test]
fn incomplete_membership_form_never_starts() {
    let delay = RecordingDelay::default();
    let sink = CollectingSink::default();
    let mut submission = Submission::new(MembershipForm {
        name: "Petar".into(),
        email: "petar@example.com".into(),
        bike_model: "   ".into(),
    });
    let mut calls = 0;

    let result = block_on(run_submission(
        &mut submission,
        &delay,
        &sink,
        FormTimings::default(),
        |_| calls += 1,
    ));

    assert!(matches!(result, Err(SubmitError::MissingFields(f)) if f == ["bike_model"]));
    assert_eq!(calls, 0);
    assert!(delay.waits.borrow().is_empty());
    assert!(sink.intents.borrow().is_empty());
    assert_eq!(submission.phase(), SubmitPhase::Idle);
    assert_eq!(submission.fields().name, "Petar");
}

#[test]
fn malformed_email_is_rejected_before_anything_is_sent() {
    let delay = RecordingDelay::default();
    let sink = CollectingSink::default();
    let mut submission = Submission::new(ContactForm {
        email: "jelena.example.com".into(),
        ..contact()
    });

    let result = block_on(run_submission(
        &mut submission,
        &delay,
        &sink,
        FormTimings::default(),
        |_| {},
    ));

    assert!(matches!(result, Err(SubmitError::InvalidEmail(e)) if e == "jelena.example.com"));
    assert!(sink.intents.borrow().is_empty());
    assert!(delay.waits.borrow().is_empty());
    assert_eq!(submission.phase(), SubmitPhase::Idle);
    assert_eq!(submission.fields().message, contact().message);
}

#[test]
fn custom_timings_are_honoured() {
    let delay = RecordingDelay::default();
    let timings = FormTimings {
        submit_delay_ms: 250,
        display_ms: 10,
    };
    let mut submission = Submission::new(contact());
    block_on(run_submission(
        &mut submission,
        &delay,
        &SimulatedSink,
        timings,
        |_| {},
    ))
    .unwrap();
    assert_eq!(*delay.waits.borrow(), [250, 10]);
}
