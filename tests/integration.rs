// SPDX-License-Identifier: MPL-2.0
use pricing_panel::config::{self, CheckoutConfig, Config, GeneralConfig, PricingConfig};
use pricing_panel::i18n::I18n;
use pricing_panel::ui::pricing_panel::{Event, Message, Presentation, State};
use pricing_panel::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut settings = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::Dark,
        },
        ..Config::default()
    };
    config::save_to_path(&settings, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    settings.general.language = Some("fr".to_string());
    config::save_to_path(&settings, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "fr");
}

#[test]
fn cli_language_beats_config() {
    let settings = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("en".to_string()), &settings);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn settings_seed_the_panel() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let settings = Config {
        checkout: CheckoutConfig {
            endpoint: Some("https://staging.example.com/Prod".to_string()),
            timeout_secs: Some(5),
        },
        pricing: PricingConfig {
            initial_capital: Some("12 345".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&settings, &dir.path().join(config::CONFIG_FILE))
        .expect("Failed to save config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let state = State::new(loaded.initial_capital());
    let quote = state.quote().expect("seeded capital is valid");
    assert_eq!(quote.tier().value(), 12);
    assert_eq!(loaded.checkout_endpoint(), "https://staging.example.com/Prod");
}

#[test]
fn full_panel_flow_in_french() {
    let i18n = I18n::new(Some("fr-FR".to_string()), &Config::default());
    let mut state = State::new(config::DEFAULT_INITIAL_CAPITAL);

    state.update(Message::CapitalChanged("25 000 €".to_string()));
    state.update(Message::ToggleRiskPanel);
    state.update(Message::RiskAcknowledged(true));
    state.update(Message::RiskChanged(75));
    state.update(Message::TermsToggled(true));

    let presentation = Presentation::from_state(&state, &i18n);
    let details = presentation.details.clone().expect("valid capital");
    assert_eq!(details.capital_range, "25 000 € \u{2013} 25 999 €");
    assert_eq!(details.monthly_fee, "499,90 € /mois");
    assert_eq!(details.risk.badge, "Extrême");
    assert!(presentation.cta_enabled);

    let Event::CheckoutRequested(request) = state.update(Message::CtaPressed) else {
        panic!("enabled CTA must request a checkout");
    };
    assert_eq!(request.tier, 25);
    assert_eq!(request.balance, 25_000);
    assert_eq!(request.risk_level, 75);
    assert_eq!(
        Presentation::from_state(&state, &i18n).cta_label,
        "Nous vous redirigeons..."
    );
}

#[test]
fn unsupported_language_falls_back_to_english_text() {
    let i18n = I18n::new(Some("de".to_string()), &Config::default());
    // Host locale may be French; both packs define the key.
    let label = i18n.tr("capital-label");
    assert_eq!(label, "Capital (EUR)");
}
