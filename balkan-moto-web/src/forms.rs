//! Browser side of the simulated submit cycle: a `setTimeout` delay and a
//! hook that keeps a [`Submission`] in component state.
use balkan_moto_core::{FormFields, FormTimings, SubmitError, SubmitPhase, Submission};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
use balkan_moto_core::{Delay, SimulatedSink, run_submission};

/// Timer backed by `setTimeout`.
#[cfg(target_arch = "wasm32")]
pub struct BrowserDelay;

#[cfg(target_arch = "wasm32")]
impl Delay for BrowserDelay {
    async fn wait(&self, ms: u32) {
        if let Err(err) = crate::dom::sleep_ms(ms).await {
            log::warn!("form timer failed: {}", crate::dom::js_error_message(&err));
        }
    }
}

/// Form state handle returned by [`use_submission`].
#[derive(Clone, PartialEq)]
pub struct SubmissionHandle<F: 'static> {
    state: UseStateHandle<Submission<F>>,
    error: UseStateHandle<Option<String>>,
    timings: FormTimings,
}

impl<F> SubmissionHandle<F>
where
    F: FormFields + Clone + PartialEq + 'static,
{
    #[must_use]
    pub fn fields(&self) -> &F {
        self.state.fields()
    }

    #[must_use]
    pub fn phase(&self) -> SubmitPhase {
        self.state.phase()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Callback writing an input's value into the field chosen by `apply`.
    #[must_use]
    pub fn on_edit(&self, apply: fn(&mut F, String)) -> Callback<String> {
        let state = self.state.clone();
        Callback::from(move |value: String| {
            let mut next = (*state).clone();
            if next.edit(|fields| apply(fields, value)) {
                state.set(next);
            }
        })
    }

    /// Callback starting the submit cycle.
    #[must_use]
    pub fn on_submit(&self) -> Callback<()> {
        let state = self.state.clone();
        let error = self.error.clone();
        let timings = self.timings;
        Callback::from(move |()| {
            let mut probe = (*state).clone();
            match probe.begin() {
                Ok(_) => {
                    error.set(None);
                    spawn_cycle((*state).clone(), state.clone(), timings);
                }
                Err(err) => error.set(Some(describe(&err))),
            }
        })
    }
}

#[cfg(target_arch = "wasm32")]
fn spawn_cycle<F>(
    mut submission: Submission<F>,
    state: UseStateHandle<Submission<F>>,
    timings: FormTimings,
) where
    F: FormFields + Clone + 'static,
{
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = run_submission(
            &mut submission,
            &BrowserDelay,
            &SimulatedSink,
            timings,
            |s| state.set(s.clone()),
        )
        .await;
        if let Err(err) = outcome {
            log::warn!("submission rejected: {err}");
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_cycle<F>(
    _submission: Submission<F>,
    _state: UseStateHandle<Submission<F>>,
    timings: FormTimings,
) where
    F: FormFields + Clone + 'static,
{
    log::debug!("submit cycle ({timings:?}) only runs in the browser");
}

/// Current value of the `<input>` or `<textarea>` that fired `e`.
#[must_use]
pub fn event_value(e: &InputEvent) -> Option<String> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
        return Some(input.value());
    }
    target
        .dyn_ref::<web_sys::HtmlTextAreaElement>()
        .map(web_sys::HtmlTextAreaElement::value)
}

/// User-facing text for a rejected submit.
#[must_use]
pub fn describe(err: &SubmitError) -> String {
    match err {
        SubmitError::MissingFields(fields) => {
            let names: Vec<String> = fields
                .iter()
                .map(|f| crate::i18n::t(&format!("forms.{f}")))
                .collect();
            let joined = names.join(", ");
            let mut args = std::collections::BTreeMap::new();
            args.insert("fields", joined.as_str());
            crate::i18n::tr("forms.missing", Some(&args))
        }
        SubmitError::InvalidEmail(_) => crate::i18n::t("forms.invalid_email"),
        SubmitError::NotIdle(_) => crate::i18n::t("forms.busy"),
        SubmitError::Encode(inner) => inner.to_string(),
    }
}

#[hook]
pub fn use_submission<F>(timings: FormTimings) -> SubmissionHandle<F>
where
    F: FormFields + Clone + Default + PartialEq + 'static,
{
    SubmissionHandle {
        state: use_state(|| Submission::new(F::default())),
        error: use_state(|| None::<String>),
        timings,
    }
}
