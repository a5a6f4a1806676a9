use dotenv::dotenv;
use formport::{
    Config, DraftService, Field, FieldKind, FormService, FormSurface, HttpTransport,
    KVKeyValueAdapter, KeyValueAdapter, KeyValueService, MemoryKeyValueAdapter, RandomService,
    SchedulerService, SubmitControl, Transport, TranslatorService,
};
use std::io::{self, BufRead, Write};
use std::sync::Arc;

// Terminal rendition of the contact form: reads one input event per field,
// validates on blur, submits over HTTP and drives the deferred work.
fn main() {
    dotenv().ok();
    env_logger::init();

    let config = Arc::new(Config::new_from_env());
    let translator_service = Arc::new(
        TranslatorService::new_from_files(config.clone())
            .expect("Fail init TranslatorService::new_from_files"),
    );
    let adapter: Arc<dyn KeyValueAdapter> = match KVKeyValueAdapter::new(&config.db.kv.storage) {
        Ok(adapter) => Arc::new(adapter),
        Err(e) => {
            log::error!("main - {e}, falling back to the in-memory store");
            Arc::new(MemoryKeyValueAdapter::new())
        }
    };
    let key_value_service = Arc::new(KeyValueService::new(adapter));
    let draft_service = Arc::new(DraftService::new(config.clone(), key_value_service));
    let scheduler_service = Arc::new(SchedulerService::new());
    let transport: Arc<dyn Transport> = Arc::new(
        HttpTransport::new(&config.transport.endpoint).expect("Fail init HttpTransport::new"),
    );
    let form_service = FormService::new(
        config.clone(),
        translator_service,
        draft_service,
        scheduler_service.clone(),
        transport,
    );

    let lang = config.app.locale.clone();
    let mut page = vec![contact_form(&config)];

    for form in page.iter_mut() {
        form_service.init(&lang, form);
        if let Some(notice) = &form.restore_notice {
            println!("[{}] {}", notice.style, notice.content);
        }
    }

    let id = config.form.bind_id.clone();
    if form_service.bind(&mut page, &id).is_none() {
        println!("No form surface {id}, nothing to do.");
        return;
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let field_names: Vec<String> = page[0]
        .fields
        .iter()
        .filter(|field| field.kind != FieldKind::Hidden)
        .map(|field| field.name.clone())
        .collect();

    for name in &field_names {
        let current = page[0]
            .field(name)
            .map(|field| field.value.clone())
            .unwrap_or_default();
        print!("{name} [{current}]: ");
        io::stdout().flush().ok();

        let Some(Ok(line)) = lines.next() else {
            break;
        };
        if !line.is_empty() {
            form_service.handle_input(&mut page[0], name, &line);
        }
        form_service.handle_blur(&lang, &mut page[0], name);

        if let Some(field) = page[0].field(name) {
            for error in &field.errors {
                println!("  ! {error}");
            }
            if let Some(counter) = field.char_counter() {
                println!("  ({counter})");
            }
        }
    }

    let result = form_service.submit(&lang, &mut page[0]);
    if let Some(alert) = &page[0].status.alert {
        println!("[{}] {}", alert.style, alert.content);
    }

    // Let the deferred work run: draft cleanup and the status auto-hide.
    let delay = config
        .form
        .status_hide_ms
        .max(config.form.draft_delete_delay_ms);
    for task in scheduler_service.advance(delay) {
        form_service.run_task(&mut page, &task);
    }

    std::process::exit(if result.is_success() { 0 } else { 1 });
}

fn contact_form(config: &Config) -> FormSurface {
    let id = if config.form.bind_id.is_empty() {
        RandomService::new().form_id(9)
    } else {
        config.form.bind_id.clone()
    };
    FormSurface::new(
        &id,
        vec![
            Field::new("name", FieldKind::Text).required(),
            Field::new("email", FieldKind::Email).required(),
            Field::new("subject", FieldKind::Text),
            Field::new("message", FieldKind::Multiline)
                .required()
                .max_length(1000),
            Field::new(&config.form.honeypot_field, FieldKind::Hidden),
        ],
        SubmitControl::new("Send Message", "Sending..."),
    )
}
