use crate::helpers::collect_json_files_from_dir;
use crate::Config;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::{fs, io};

/// Message catalog keyed by language, loaded from flattened locale JSON
/// files. Unknown keys fall back to the fallback locale and finally to the
/// key itself.
#[derive(Debug, Clone)]
pub struct TranslatorService {
    config: Arc<Config>,
    pub translates: HashMap<String, HashMap<String, String>>,
}

impl TranslatorService {
    pub fn new(config: Arc<Config>, translates: HashMap<String, HashMap<String, String>>) -> Self {
        Self { config, translates }
    }

    pub fn new_from_files(config: Arc<Config>) -> Result<Self, io::Error> {
        let mut translates: HashMap<String, HashMap<String, String>> = HashMap::new();

        let folder = config.translator.translates_folder.clone();
        let paths = collect_json_files_from_dir(Path::new(&folder)).map_err(|e| {
            log::error!("TranslatorService::new_from_files - {e}");
            e
        })?;

        for path in paths {
            // The file stem is the language: resources/lang/en.json -> "en".
            let lang = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("en")
                .to_string();

            let content = fs::read_to_string(&path).map_err(|e| {
                log::error!("TranslatorService::new_from_files - {e}");
                e
            })?;
            let flat = flatten_json::flatten_from_str(&content).map_err(|e| {
                log::error!("TranslatorService::new_from_files - {e}");
                io::Error::new(io::ErrorKind::InvalidData, e.to_string())
            })?;
            let flatten_keys: serde_json::Value = serde_json::from_str(&flat).map_err(|e| {
                log::error!("TranslatorService::new_from_files - {e}");
                io::Error::new(io::ErrorKind::InvalidData, e.to_string())
            })?;

            let mut map: HashMap<String, String> = HashMap::new();
            if let Some(object) = flatten_keys.as_object() {
                for (key, value) in object.iter() {
                    if let Some(value) = value.as_str() {
                        map.insert(key.to_string(), value.to_string());
                    }
                }
            }
            translates.insert(lang, map);
        }

        Ok(Self::new(config, translates))
    }

    pub fn get(&self, lang: &str, key: &str) -> Option<&String> {
        self.translates.get(lang).and_then(|map| map.get(key))
    }

    pub fn translate(&self, lang: &str, key: &str) -> String {
        if let Some(value) = self.get(lang, key) {
            return value.to_string();
        }
        let fallback = &self.config.app.fallback_locale;
        if fallback != lang {
            if let Some(value) = self.get(fallback, key) {
                return value.to_string();
            }
        }
        key.to_string()
    }

    pub fn variables(&self, lang: &str, key: &str, vars: &HashMap<&str, &str>) -> String {
        let mut value = self.translate(lang, key);
        for (name, variable) in vars {
            let pattern = format!("{{{{{}}}}}", name);
            value = value.replace(&pattern, variable);
            let spaced = format!("{{{{ {} }}}}", name);
            value = value.replace(&spaced, variable);
        }
        value
    }
}
