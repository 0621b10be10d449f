// SPDX-License-Identifier: MPL-2.0
//! Fluent bundle loading and message lookup.

use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("current_locale", &self.current_locale)
            .field("available_locales", &self.available_locales)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                log::warn!("Skipping translation file with invalid locale: {filename}");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((partial, errors)) => {
                    log::warn!("{filename}: {} Fluent syntax error(s)", errors.len());
                    partial
                }
            };

            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                log::warn!("{filename}: {} duplicate Fluent message(s)", errors.len());
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE.parse().unwrap_or_default();
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);
        log::debug!("Using locale {current_locale}");

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [
        cli_lang,
        config.general.language.clone(),
        sys_locale::get_locale(),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(|lang| lang.parse::<LanguageIdentifier>().ok())
        .find(|lang| available.contains(lang))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn resolve_locale_prefers_cli() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let lang = resolve_locale(Some("fr".to_string()), &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_uses_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_skips_unavailable_cli_lang() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(Some("de".to_string()), &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn embedded_bundles_include_english_and_french() {
        let i18n = I18n::default();
        assert!(i18n.available_locales.contains(&"en-US".parse().unwrap()));
        assert!(i18n.available_locales.contains(&"fr".parse().unwrap()));
    }

    #[test]
    fn tr_returns_translation_for_known_key() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(i18n.tr("button-select-photos"), "Select photos");
    }

    #[test]
    fn tr_reports_missing_key() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn tr_with_args_interpolates() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(
            i18n.tr_with_args("slot-file-name", &[("name", "a.png")]),
            "Loaded: a.png"
        );
    }

    #[test]
    fn unknown_cli_locale_falls_back_to_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let i18n = I18n::new(Some("de".to_string()), &config);
        assert_eq!(i18n.current_locale().to_string(), "fr");
    }
}
