use std::fs;

use farm_advisory_toolbox::i18n::{self, keys, Language, Translator};
use farm_advisory_toolbox::navigation::Screen;

#[test]
fn unknown_code_resolves_to_english_bundle() {
    let fallback = i18n::resolve("en");
    assert!(std::ptr::eq(i18n::resolve("fr"), fallback));
    assert!(std::ptr::eq(i18n::resolve(""), fallback));
    assert_eq!(i18n::resolve("fr").get(keys::APP_TITLE), fallback.get(keys::APP_TITLE));
}

#[test]
fn region_codes_pick_base_language() {
    assert_eq!(i18n::resolve("hi-IN").language(), Language::Hi);
    assert_eq!(i18n::resolve("gu_IN.UTF-8").language(), Language::Gu);
}

#[test]
fn all_bundles_cover_english_keys() {
    for lang in Language::ALL {
        let bundle = i18n::resolve(lang.as_code());
        assert!(
            i18n::missing_keys(bundle).is_empty(),
            "{} missing {:?}",
            lang.as_code(),
            i18n::missing_keys(bundle)
        );
        assert_eq!(bundle.len(), i18n::fallback_bundle().len());
    }
}

#[test]
fn every_feature_has_title_and_description() {
    for lang in Language::ALL {
        let bundle = i18n::resolve(lang.as_code());
        let features = bundle.features();
        for screen in Screen::FEATURES {
            let text = features
                .get(screen.id())
                .unwrap_or_else(|| panic!("{} lacks {}", lang.as_code(), screen.id()));
            assert!(!text.title.is_empty());
            assert!(!text.description.is_empty());
        }
    }
}

#[test]
fn feedback_submap_strips_prefix() {
    let feedback = i18n::resolve("hi").feedback();
    for key in ["title", "subtitle", "rating_label", "submit", "category.bug"] {
        assert!(feedback.contains_key(key), "missing feedback.{key}");
    }
    assert!(feedback.keys().all(|k| !k.starts_with("feedback.")));
}

#[test]
fn translator_returns_key_when_absent_everywhere() {
    let tr = Translator::new("gu");
    assert_eq!(tr.t("no.such.key"), "no.such.key");
    assert_ne!(tr.t(keys::APP_TITLE), keys::APP_TITLE);
}

#[test]
fn language_pack_overrides_single_keys() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("hi.toml"),
        "[calc]\ntitle = \"खाद गणक\"\n",
    )
    .expect("write pack");
    let pack = dir.path().to_str().expect("utf-8 path");

    let tr = Translator::new_with_pack("hi-IN", Some(pack));
    assert_eq!(tr.t(keys::CALC_TITLE), "खाद गणक");
    // 덮어쓰지 않은 키는 내장 힌디어를 쓴다.
    assert_eq!(tr.t(keys::CALC_BUTTON), i18n::resolve("hi").get(keys::CALC_BUTTON).expect("key"));

    let plain = Translator::new_with_pack("gu", Some(pack));
    assert_eq!(plain.t(keys::CALC_TITLE), i18n::resolve("gu").get(keys::CALC_TITLE).expect("key"));
}

#[test]
fn templates_fill_placeholders() {
    let tr = Translator::new("en");
    assert_eq!(tr.fill(keys::GREETING_NAMED, &[("name", "Ramesh")]), "Good Morning, Ramesh!");
    assert_eq!(
        Translator::new("hi").fill(keys::CALENDAR_WEEK, &[("week", "6")]),
        "सप्ताह 6"
    );
}
