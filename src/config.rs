use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub form: FormConfig,
    pub transport: TransportConfig,
    pub translator: TranslatorConfig,
    pub db: DbConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub locale: String,
    pub fallback_locale: String,
}

#[derive(Debug, Clone)]
pub struct FormConfig {
    pub bind_id: String,
    pub honeypot_field: String,
    pub draft_key_prefix: String,
    pub message_min_chars: usize,
    pub status_hide_ms: u64,
    pub restore_notice_ms: u64,
    pub draft_delete_delay_ms: u64,
}

#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub endpoint: String,
}

#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    pub translates_folder: String,
}

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub kv: KvDbConfig,
}

#[derive(Debug, Clone)]
pub struct KvDbConfig {
    pub storage: String,
}

impl Config {
    pub fn new_from_env() -> Self {
        Self {
            app: AppConfig {
                locale: env::var("APP_LOCALE")
                    .unwrap_or("en".to_string())
                    .trim()
                    .to_string(),
                fallback_locale: env::var("APP_FALLBACK_LOCALE")
                    .unwrap_or("en".to_string())
                    .trim()
                    .to_string(),
            },
            form: FormConfig {
                bind_id: env::var("FORM_BIND_ID")
                    .unwrap_or("contact".to_string())
                    .trim()
                    .to_string(),
                honeypot_field: env::var("FORM_HONEYPOT_FIELD")
                    .unwrap_or("website".to_string())
                    .trim()
                    .to_string(),
                draft_key_prefix: env::var("FORM_DRAFT_KEY_PREFIX")
                    .unwrap_or("form_".to_string())
                    .trim()
                    .to_string(),
                message_min_chars: env_usize("FORM_MESSAGE_MIN_CHARS", 10),
                status_hide_ms: env_u64("FORM_STATUS_HIDE_MS", 5000),
                restore_notice_ms: env_u64("FORM_RESTORE_NOTICE_MS", 3000),
                draft_delete_delay_ms: env_u64("FORM_DRAFT_DELETE_DELAY_MS", 1000),
            },
            transport: TransportConfig {
                endpoint: env::var("TRANSPORT_ENDPOINT")
                    .unwrap_or("https://formspree.io/f/xlgrpgve".to_string())
                    .trim()
                    .to_string(),
            },
            translator: TranslatorConfig {
                translates_folder: env::var("TRANSLATOR_TRANSLATES_FOLDER")
                    .unwrap_or("resources/lang".to_string())
                    .trim()
                    .to_string(),
            },
            db: DbConfig {
                kv: KvDbConfig {
                    storage: env::var("KV_STORAGE")
                        .unwrap_or("./storage/kv_db".to_string())
                        .trim()
                        .to_string(),
                },
            },
        }
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

pub fn make_config() -> Config {
    dotenv::dotenv().ok();
    Config::new_from_env()
}
