use crate::app::validator::rules::email::Email;
use crate::app::validator::rules::required::Required;
use crate::app::validator::rules::str_min_chars_count::StrMinCharsCount;
use crate::{
    Alert, AlertVariant, Config, DraftService, Field, FieldKind, FormSurface, ScheduledTask,
    SchedulerService, SubmissionResult, TranslatorService, Transport,
};
use std::sync::Arc;

/// Owns the validate -> submit -> report lifecycle of a bound form surface,
/// plus draft persistence for every surface it initializes.
pub struct FormService {
    config: Arc<Config>,
    translator_service: Arc<TranslatorService>,
    draft_service: Arc<DraftService>,
    scheduler_service: Arc<SchedulerService>,
    transport: Arc<dyn Transport>,
}

impl FormService {
    pub fn new(
        config: Arc<Config>,
        translator_service: Arc<TranslatorService>,
        draft_service: Arc<DraftService>,
        scheduler_service: Arc<SchedulerService>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            config,
            translator_service,
            draft_service,
            scheduler_service,
            transport,
        }
    }

    pub fn is_honeypot(&self, field: &Field) -> bool {
        field.name == self.config.form.honeypot_field
    }

    /// Controller binding. A missing surface leaves the controller inert:
    /// nothing to listen on, no error raised.
    pub fn bind<'a>(
        &self,
        forms: &'a mut [FormSurface],
        id: &str,
    ) -> Option<&'a mut FormSurface> {
        let form = forms.iter_mut().find(|form| form.id == id);
        if form.is_none() {
            log::debug!("FormService::bind - no surface {id}, staying inert");
        }
        form
    }

    /// Restores a stored draft into the surface and shows the transient
    /// restore notice.
    pub fn init(&self, lang: &str, form: &mut FormSurface) {
        match self.draft_service.restore(form) {
            Ok(true) => {
                form.restore_notice = Some(Alert::from_variant(
                    &self.translator_service,
                    lang,
                    &AlertVariant::DraftRestored,
                ));
                self.scheduler_service.schedule(
                    ScheduledTask::RemoveRestoreNotice {
                        form_id: form.id.clone(),
                    },
                    self.config.form.restore_notice_ms,
                );
            }
            Ok(false) => {}
            Err(e) => log::error!("FormService::init - {e}"),
        }
    }

    /// Input event: the value change clears any annotation and persists a
    /// draft of the whole form.
    pub fn handle_input(&self, form: &mut FormSurface, name: &str, value: &str) {
        let Some(field) = form.field_mut(name) else {
            return;
        };
        field.value = match field.max_length {
            Some(max) if value.chars().count() > max => value.chars().take(max).collect(),
            _ => value.to_string(),
        };
        field.clear_errors();
        if let Err(e) = self.draft_service.save(form) {
            log::error!("FormService::handle_input - {e}");
        }
    }

    /// Blur event: validate one field and annotate it. The honeypot field
    /// is never validated.
    pub fn handle_blur(&self, lang: &str, form: &mut FormSurface, name: &str) {
        let honeypot = self.config.form.honeypot_field.clone();
        let Some(field) = form.field_mut(name) else {
            return;
        };
        if field.name == honeypot {
            return;
        }
        let errors = self.field_errors(lang, field);
        field.set_errors(errors);
    }

    fn field_errors(&self, lang: &str, field: &Field) -> Vec<String> {
        let translator_service = self.translator_service.as_ref();
        let value = field.trimmed();
        let mut errors: Vec<String> = Vec::new();
        if field.required {
            errors.append(&mut Required::validate(
                translator_service,
                lang,
                value,
                &field.name,
            ));
        }
        if !value.is_empty() {
            if field.kind == FieldKind::Email {
                errors.append(&mut Email::validate(
                    translator_service,
                    lang,
                    value,
                    &field.name,
                ));
            }
            if field.kind == FieldKind::Multiline {
                errors.append(&mut StrMinCharsCount::validate(
                    translator_service,
                    lang,
                    value,
                    self.config.form.message_min_chars,
                    &field.name,
                ));
            }
        }
        errors
    }

    /// The submit lifecycle. Every path ends in a rendered status; nothing
    /// here navigates anywhere.
    pub fn submit(&self, lang: &str, form: &mut FormSurface) -> SubmissionResult {
        let translator_service = self.translator_service.as_ref();
        let honeypot = self.config.form.honeypot_field.clone();

        // 1. Validate everything, annotating each field.
        let mut is_valid = true;
        for i in 0..form.fields.len() {
            if form.fields[i].name == honeypot {
                continue;
            }
            let errors = self.field_errors(lang, &form.fields[i]);
            form.fields[i].set_errors(errors);
            if form.fields[i].invalid {
                is_valid = false;
            }
        }
        if !is_valid {
            let alert = Alert::from_variant(translator_service, lang, &AlertVariant::SubmitInvalid);
            let message = alert.content.clone();
            self.render_status(form, alert, false);
            return SubmissionResult::Failure(message);
        }

        // 2. A filled honeypot means a bot: fabricate success, skip the
        // transport. What a bot sees must match a genuine success.
        let honeypot_value = form
            .field(&honeypot)
            .map(|field| field.value.clone())
            .unwrap_or_default();
        if !honeypot_value.is_empty() {
            log::info!("FormService::submit - honeypot tripped on {}", form.id);
            let alert = Alert::from_variant(translator_service, lang, &AlertVariant::SubmitSuccess);
            let message = alert.content.clone();
            self.render_status(form, alert, true);
            return SubmissionResult::Success(message);
        }

        // 3. Disabled for the whole call: no re-entrant submission.
        form.submit.disabled = true;
        let record = form.record(&honeypot);
        let result = match self.transport.send(&record) {
            Ok(()) => {
                let alert =
                    Alert::from_variant(translator_service, lang, &AlertVariant::SubmitSuccess);
                let message = alert.content.clone();
                self.render_status(form, alert, true);
                form.reset_values();
                // Grace delay: a draft write racing the reset lands before
                // the deletion runs.
                self.scheduler_service.schedule(
                    ScheduledTask::DeleteDraft {
                        key: self.draft_service.draft_key(&form.id),
                    },
                    self.config.form.draft_delete_delay_ms,
                );
                SubmissionResult::Success(message)
            }
            Err(e) => {
                log::error!("FormService::submit - {e}");
                let alert =
                    Alert::from_variant(translator_service, lang, &AlertVariant::SubmitFail);
                let message = alert.content.clone();
                self.render_status(form, alert, false);
                SubmissionResult::Failure(message)
            }
        };
        form.submit.disabled = false;
        result
    }

    // Every render cancels a pending auto-hide so a stale success timer
    // cannot hide a later failure.
    fn render_status(&self, form: &mut FormSurface, alert: Alert, auto_hide: bool) {
        if let Some(handle) = form.status.hide_handle.take() {
            self.scheduler_service.cancel(handle);
        }
        form.status.show(alert);
        if auto_hide {
            let handle = self.scheduler_service.schedule(
                ScheduledTask::HideStatus {
                    form_id: form.id.clone(),
                },
                self.config.form.status_hide_ms,
            );
            form.status.hide_handle = Some(handle);
        }
    }

    /// Applies a due scheduler task to the page.
    pub fn run_task(&self, forms: &mut [FormSurface], task: &ScheduledTask) {
        match task {
            ScheduledTask::HideStatus { form_id } => {
                if let Some(form) = forms.iter_mut().find(|form| form.id == *form_id) {
                    form.status.hide();
                }
            }
            ScheduledTask::RemoveRestoreNotice { form_id } => {
                if let Some(form) = forms.iter_mut().find(|form| form.id == *form_id) {
                    form.restore_notice = None;
                }
            }
            ScheduledTask::DeleteDraft { key } => {
                if let Err(e) = self.draft_service.delete(key) {
                    log::error!("FormService::run_task - {e}");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        make_config, KeyValueAdapter, KeyValueService, MemoryKeyValueAdapter, SubmitControl,
        TransportError,
    };
    use serde_json::{Map, Value};
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct RecordingTransport {
        calls: Mutex<Vec<Map<String, Value>>>,
        fail: Mutex<bool>,
    }

    impl RecordingTransport {
        fn new(fail: bool) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail: Mutex::new(fail),
            }
        }

        fn set_fail(&self, fail: bool) {
            *self.fail.lock().unwrap() = fail;
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        fn last_record(&self) -> Map<String, Value> {
            self.calls.lock().unwrap().last().unwrap().clone()
        }
    }

    impl Transport for RecordingTransport {
        fn send(&self, record: &Map<String, Value>) -> Result<(), TransportError> {
            self.calls.lock().unwrap().push(record.clone());
            if *self.fail.lock().unwrap() {
                Err(TransportError::SendFail)
            } else {
                Ok(())
            }
        }
    }

    struct Harness {
        form_service: FormService,
        scheduler_service: Arc<SchedulerService>,
        key_value_service: Arc<KeyValueService>,
        transport: Arc<RecordingTransport>,
    }

    fn make_harness(fail: bool) -> Harness {
        let config = Arc::new(make_config());
        // An empty catalog falls back to translation keys, which the
        // assertions below rely on.
        let translator_service = Arc::new(TranslatorService::new(config.clone(), HashMap::new()));
        let adapter: Arc<dyn KeyValueAdapter> = Arc::new(MemoryKeyValueAdapter::new());
        let key_value_service = Arc::new(KeyValueService::new(adapter));
        let draft_service = Arc::new(DraftService::new(config.clone(), key_value_service.clone()));
        let scheduler_service = Arc::new(SchedulerService::new());
        let transport = Arc::new(RecordingTransport::new(fail));
        let form_service = FormService::new(
            config,
            translator_service,
            draft_service,
            scheduler_service.clone(),
            transport.clone(),
        );
        Harness {
            form_service,
            scheduler_service,
            key_value_service,
            transport,
        }
    }

    fn contact_page() -> Vec<FormSurface> {
        vec![FormSurface::new(
            "contact",
            vec![
                Field::new("name", FieldKind::Text).required(),
                Field::new("email", FieldKind::Email).required(),
                Field::new("message", FieldKind::Multiline).required(),
                Field::new("website", FieldKind::Hidden),
            ],
            SubmitControl::new("Send Message", "Sending..."),
        )]
    }

    fn fill_valid(h: &Harness, form: &mut FormSurface) {
        h.form_service.handle_input(form, "name", "Ada");
        h.form_service.handle_input(form, "email", "ada@example.com");
        h.form_service
            .handle_input(form, "message", "Hello, I would like to talk.");
    }

    fn run_due(h: &Harness, page: &mut Vec<FormSurface>, delta_ms: u64) {
        for task in h.scheduler_service.advance(delta_ms) {
            h.form_service.run_task(page, &task);
        }
    }

    #[test]
    fn blur_annotates_and_input_clears() {
        let h = make_harness(false);
        let mut page = contact_page();

        h.form_service.handle_blur("en", &mut page[0], "name");
        let field = page[0].field("name").unwrap();
        assert_eq!(true, field.invalid);
        assert_eq!(vec!["validation.required".to_string()], field.errors);

        // Re-validation replaces, never stacks.
        h.form_service.handle_blur("en", &mut page[0], "name");
        assert_eq!(1, page[0].field("name").unwrap().errors.len());

        h.form_service.handle_input(&mut page[0], "name", "Ada");
        let field = page[0].field("name").unwrap();
        assert_eq!(false, field.invalid);
        assert_eq!(0, field.errors.len());
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let h = make_harness(false);
        let mut page = contact_page();
        h.form_service.handle_input(&mut page[0], "name", "   ");
        h.form_service.handle_blur("en", &mut page[0], "name");
        assert_eq!(true, page[0].field("name").unwrap().invalid);
    }

    #[test]
    fn honeypot_blur_is_skipped() {
        let h = make_harness(false);
        let mut page = contact_page();
        h.form_service
            .handle_input(&mut page[0], "website", "http://spam.example");
        h.form_service.handle_blur("en", &mut page[0], "website");
        assert_eq!(false, page[0].field("website").unwrap().invalid);
    }

    #[test]
    fn invalid_submit_never_reaches_the_transport() {
        let h = make_harness(false);
        let mut page = contact_page();

        let result = h.form_service.submit("en", &mut page[0]);
        assert_eq!(false, result.is_success());
        assert_eq!(0, h.transport.call_count());
        assert_eq!(true, page[0].field("name").unwrap().invalid);
        assert_eq!(true, page[0].field("email").unwrap().invalid);
        assert_eq!(true, page[0].field("message").unwrap().invalid);

        let alert = page[0].status.alert.as_ref().unwrap();
        assert_eq!("error", alert.style);
        assert_eq!("form.status.invalid", alert.content);
    }

    #[test]
    fn honeypot_submit_fakes_success_without_transport() {
        let h = make_harness(false);
        let mut page = contact_page();
        fill_valid(&h, &mut page[0]);
        h.form_service
            .handle_input(&mut page[0], "website", "http://spam.example");

        let result = h.form_service.submit("en", &mut page[0]);
        assert_eq!(true, result.is_success());
        assert_eq!(0, h.transport.call_count());

        let alert = page[0].status.alert.as_ref().unwrap();
        assert_eq!("success", alert.style);
        assert_eq!("form.status.success", alert.content);
        // Unlike a genuine success the fields are left as they are.
        assert_eq!("Ada", page[0].field("name").unwrap().value);
    }

    #[test]
    fn valid_submit_sends_record_and_cleans_up() {
        let h = make_harness(false);
        let mut page = contact_page();
        fill_valid(&h, &mut page[0]);
        assert_eq!(
            true,
            h.key_value_service.get("form_contact").unwrap().is_some()
        );

        let result = h.form_service.submit("en", &mut page[0]);
        assert_eq!(true, result.is_success());
        assert_eq!(1, h.transport.call_count());

        let record = h.transport.last_record();
        assert_eq!(Some(&Value::String("Ada".to_string())), record.get("name"));
        assert_eq!(
            Some(&Value::String("ada@example.com".to_string())),
            record.get("email")
        );
        assert_eq!(true, record.contains_key("message"));
        assert_eq!(false, record.contains_key("website"));

        assert_eq!("", page[0].field("name").unwrap().value);
        assert_eq!(false, page[0].submit.disabled);
        assert_eq!("form.status.success", page[0].status.alert.as_ref().unwrap().content);

        // The draft survives until the grace delay runs out.
        assert_eq!(
            true,
            h.key_value_service.get("form_contact").unwrap().is_some()
        );
        run_due(&h, &mut page, 1000);
        assert_eq!(None, h.key_value_service.get("form_contact").unwrap());
    }

    #[test]
    fn transport_failure_preserves_the_form() {
        let h = make_harness(true);
        let mut page = contact_page();
        fill_valid(&h, &mut page[0]);

        let result = h.form_service.submit("en", &mut page[0]);
        assert_eq!(false, result.is_success());
        assert_eq!(1, h.transport.call_count());
        assert_eq!("Ada", page[0].field("name").unwrap().value);
        assert_eq!(false, page[0].submit.disabled);

        let alert = page[0].status.alert.as_ref().unwrap();
        assert_eq!("error", alert.style);
        assert_eq!("form.status.fail", alert.content);

        // No draft deletion was scheduled, the draft stays for the retry.
        run_due(&h, &mut page, 60_000);
        assert_eq!(
            true,
            h.key_value_service.get("form_contact").unwrap().is_some()
        );
    }

    #[test]
    fn success_status_auto_hides() {
        let h = make_harness(false);
        let mut page = contact_page();
        fill_valid(&h, &mut page[0]);
        h.form_service.submit("en", &mut page[0]);
        assert_eq!(true, page[0].status.is_visible());

        run_due(&h, &mut page, 5000);
        assert_eq!(false, page[0].status.is_visible());
    }

    #[test]
    fn failure_status_outlives_a_stale_success_timer() {
        let h = make_harness(false);
        let mut page = contact_page();
        fill_valid(&h, &mut page[0]);
        h.form_service.submit("en", &mut page[0]);

        // Second attempt fails before the first auto-hide fires.
        h.transport.set_fail(true);
        fill_valid(&h, &mut page[0]);
        h.form_service.submit("en", &mut page[0]);

        run_due(&h, &mut page, 60_000);
        let alert = page[0].status.alert.as_ref().unwrap();
        assert_eq!("form.status.fail", alert.content);
    }

    #[test]
    fn init_restores_draft_and_notice() {
        let h = make_harness(false);
        let mut page = contact_page();
        h.form_service.handle_input(&mut page[0], "name", "Ada");

        // Simulated reload: fresh surfaces against the same store.
        let mut reloaded = contact_page();
        h.form_service.init("en", &mut reloaded[0]);
        assert_eq!("Ada", reloaded[0].field("name").unwrap().value);
        let notice = reloaded[0].restore_notice.as_ref().unwrap();
        assert_eq!("form.restore.notice", notice.content);

        run_due(&h, &mut reloaded, 3000);
        assert_eq!(true, reloaded[0].restore_notice.is_none());
    }

    #[test]
    fn malformed_draft_is_silently_ignored() {
        let h = make_harness(false);
        h.key_value_service
            .set("form_contact", "{\"name\": [1, 2")
            .unwrap();

        let mut page = contact_page();
        h.form_service.init("en", &mut page[0]);
        assert_eq!("", page[0].field("name").unwrap().value);
        assert_eq!(true, page[0].restore_notice.is_none());
    }

    #[test]
    fn bind_missing_surface_is_inert() {
        let h = make_harness(false);
        let mut page = contact_page();
        assert_eq!(true, h.form_service.bind(&mut page, "newsletter").is_none());
        assert_eq!(true, h.form_service.bind(&mut page, "contact").is_some());
    }

    #[test]
    fn input_truncates_to_max_length() {
        let h = make_harness(false);
        let mut page = vec![FormSurface::new(
            "contact",
            vec![Field::new("message", FieldKind::Multiline).max_length(5)],
            SubmitControl::new("Send", "Sending..."),
        )];
        h.form_service
            .handle_input(&mut page[0], "message", "abcdefgh");
        assert_eq!("abcde", page[0].field("message").unwrap().value);
    }
}
