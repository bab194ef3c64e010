use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use sys_locale::get_locale;

mod catalog;

/// 번역이 없을 때 사용하는 기준 언어.
pub const FALLBACK_LANGUAGE: &str = "en";

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const APP_TITLE: &str = "app.title";
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const NAV_BACK: &str = "nav.back";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const MENU_EXIT: &str = "menu.exit";
    pub const COMING_SOON: &str = "screen.coming_soon";

    pub const ONBOARDING_TITLE: &str = "onboarding.title";
    pub const ONBOARDING_SUBTITLE: &str = "onboarding.subtitle";
    pub const ONBOARDING_CONTINUE: &str = "onboarding.continue";

    pub const GREETING_NAMED: &str = "greeting.named";
    pub const GREETING_GENERIC: &str = "greeting.generic";
    pub const GREETING_SUBTITLE: &str = "greeting.subtitle";
    pub const HEADING_TOOLS: &str = "heading.tools";
    pub const HEADING_QUICK_STATS: &str = "heading.quick_stats";
    pub const HEADING_RECENT_ACTIVITY: &str = "heading.recent_activity";
    pub const ALERT_WEATHER_TITLE: &str = "alert.weather.title";
    pub const ALERT_WEATHER_BODY: &str = "alert.weather.body";
    pub const ALERT_ACTIVE: &str = "alert.active";
    pub const STATS_SCANS: &str = "stats.scans";
    pub const STATS_AVG_PRICE: &str = "stats.avg_price";
    pub const STATS_ACCURACY: &str = "stats.accuracy";
    pub const RECENT_SOIL: &str = "recent.soil_scan";
    pub const RECENT_FERTILIZER: &str = "recent.fertilizer_plan";
    pub const RECENT_MARKET: &str = "recent.market_check";
    pub const LOCATION_UNKNOWN: &str = "dashboard.location_unknown";

    pub const CALC_TITLE: &str = "calc.title";
    pub const CALC_CROP: &str = "calc.crop";
    pub const CALC_CROP_PLACEHOLDER: &str = "calc.crop_placeholder";
    pub const CALC_AREA: &str = "calc.area";
    pub const CALC_AREA_PLACEHOLDER: &str = "calc.area_placeholder";
    pub const CALC_SOIL: &str = "calc.soil";
    pub const CALC_SOIL_PLACEHOLDER: &str = "calc.soil_placeholder";
    pub const CALC_BUTTON: &str = "calc.button";
    pub const CALC_RESULT_HEADING: &str = "calc.result_heading";
    pub const CALC_NITROGEN: &str = "calc.nitrogen";
    pub const CALC_PHOSPHORUS: &str = "calc.phosphorus";
    pub const CALC_POTASSIUM: &str = "calc.potassium";
    pub const CALC_PENDING: &str = "calc.pending";

    pub const CALENDAR_TITLE: &str = "calendar.title";
    pub const CALENDAR_SEASON: &str = "calendar.season";
    pub const CALENDAR_DURATION: &str = "calendar.duration";
    pub const CALENDAR_WEEK: &str = "calendar.week";

    pub const FEEDBACK_TITLE: &str = "feedback.title";
    pub const FEEDBACK_SUBTITLE: &str = "feedback.subtitle";
    pub const FEEDBACK_RATING_LABEL: &str = "feedback.rating_label";
    pub const FEEDBACK_CATEGORY_LABEL: &str = "feedback.category_label";
    pub const FEEDBACK_EMAIL_LABEL: &str = "feedback.email_label";
    pub const FEEDBACK_MESSAGE_LABEL: &str = "feedback.message_label";
    pub const FEEDBACK_PLACEHOLDER: &str = "feedback.placeholder";
    pub const FEEDBACK_QUICK_LABEL: &str = "feedback.quick_label";
    pub const FEEDBACK_SUBMIT: &str = "feedback.submit";
    pub const FEEDBACK_SUBMITTED: &str = "feedback.submitted";
    pub const FEEDBACK_THANK_YOU: &str = "feedback.thank_you";
    pub const FEEDBACK_ERROR_EMPTY: &str = "feedback.error.empty_message";
    pub const FEEDBACK_ERROR_EMAIL: &str = "feedback.error.invalid_email";

    pub const SETTINGS_TITLE: &str = "settings.title";
    pub const SETTINGS_LANGUAGE: &str = "settings.language";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_TOGGLE: &str = "settings.toggle";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

/// 내장 카탈로그가 지원하는 언어. 선언 순서가 언어 전환 순서다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    En,
    Hi,
    Gu,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Hi, Language::Gu];

    /// 언어 코드를 해석한다. `en-US`, `hi_IN` 처럼 지역 접미사가 붙어도 기본 언어로 본다.
    pub fn from_code(code: &str) -> Option<Self> {
        let lower = code.trim().to_lowercase();
        let base = lower.split(['-', '_', '.']).next().unwrap_or_default();
        match base {
            "en" => Some(Language::En),
            "hi" => Some(Language::Hi),
            "gu" => Some(Language::Gu),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Gu => "gu",
        }
    }

    /// 언어 선택 화면에 표시하는 자국어 이름.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिन्दी",
            Language::Gu => "ગુજરાતી",
        }
    }
}

/// 현재 언어 다음 차례의 지원 언어. 알 수 없는 코드는 기준 언어로 간주한다.
pub fn next_language(current: &str) -> Language {
    let current = Language::from_code(current).unwrap_or(Language::En);
    let idx = Language::ALL.iter().position(|l| *l == current).unwrap_or(0);
    Language::ALL[(idx + 1) % Language::ALL.len()]
}

/// 기능 타일에 표시하는 제목/설명.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureText<'a> {
    pub title: &'a str,
    pub description: &'a str,
}

/// 한 언어의 표시 문자열 묶음. 키는 `feature.soil.title` 처럼 점으로 구분한다.
#[derive(Debug, PartialEq, Eq)]
pub struct LocalizationBundle {
    language: Language,
    strings: BTreeMap<&'static str, &'static str>,
}

impl LocalizationBundle {
    fn from_table(language: Language, table: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            language,
            strings: table.iter().copied().collect(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn code(&self) -> &'static str {
        self.language.as_code()
    }

    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.strings.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.strings.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.strings.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// 기능 식별자(네비게이션과 동일)로 제목/설명을 찾는다. 둘 중 하나라도 없으면 None.
    pub fn feature(&self, feature_id: &str) -> Option<FeatureText<'static>> {
        let title = self.get(&format!("feature.{feature_id}.title"))?;
        let description = self.get(&format!("feature.{feature_id}.description"))?;
        Some(FeatureText { title, description })
    }

    /// `feature.` 하위 맵. 키는 기능 식별자.
    pub fn features(&self) -> BTreeMap<&'static str, FeatureText<'static>> {
        let mut out = BTreeMap::new();
        for key in self.strings.keys().copied() {
            if let Some(id) = key
                .strip_prefix("feature.")
                .and_then(|rest| rest.strip_suffix(".title"))
            {
                if let Some(text) = self.feature(id) {
                    out.insert(id, text);
                }
            }
        }
        out
    }

    /// `feedback.` 하위 맵. 키에서 접두사를 뗀다 (`title`, `category.bug` 등).
    pub fn feedback(&self) -> BTreeMap<&'static str, &'static str> {
        self.strings
            .iter()
            .map(|(k, v)| (*k, *v))
            .filter_map(|(k, v)| k.strip_prefix("feedback.").map(|rest| (rest, v)))
            .collect()
    }
}

fn catalog() -> &'static [LocalizationBundle] {
    static CATALOG: OnceLock<Vec<LocalizationBundle>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        Language::ALL
            .iter()
            .map(|lang| LocalizationBundle::from_table(*lang, catalog::table(*lang)))
            .collect()
    })
}

fn bundle_for(language: Language) -> &'static LocalizationBundle {
    let all = catalog();
    all.iter()
        .find(|b| b.language == language)
        .unwrap_or(&all[0])
}

/// 기준 언어(영어) 묶음.
pub fn fallback_bundle() -> &'static LocalizationBundle {
    bundle_for(Language::En)
}

/// 언어 코드에 해당하는 묶음을 돌려준다. 알 수 없는 코드는 기준 언어 묶음으로 대체하며 실패하지 않는다.
pub fn resolve(language_code: &str) -> &'static LocalizationBundle {
    match Language::from_code(language_code) {
        Some(lang) => bundle_for(lang),
        None => {
            tracing::debug!(code = language_code, "unknown language code, using fallback bundle");
            fallback_bundle()
        }
    }
}

/// 기준 언어 묶음에는 있지만 주어진 묶음에는 없는 키 목록.
pub fn missing_keys(bundle: &LocalizationBundle) -> Vec<&'static str> {
    fallback_bundle()
        .keys()
        .filter(|k| !bundle.contains(k))
        .collect()
}

/// 런타임 문자열 조회기. 언어팩 덮어쓰기 → 선택 언어 → 기준 언어 → 키 순서로 찾는다.
#[derive(Debug, Clone)]
pub struct Translator {
    bundle: &'static LocalizationBundle,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    pub fn new(lang_code: &str) -> Self {
        Self {
            bundle: resolve(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        if let Some(map) = &overrides {
            tracing::info!(lang = lang_code, entries = map.len(), "language pack loaded");
        }
        Self {
            bundle: resolve(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.bundle.language()
    }

    pub fn language_code(&self) -> &'static str {
        self.bundle.code()
    }

    pub fn bundle(&self) -> &'static LocalizationBundle {
        self.bundle
    }

    /// 키를 조회한다. 덮어쓰기/선택 언어/기준 언어 어디에도 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key).map(String::as_str))
            .or_else(|| self.bundle.get(key))
            .or_else(|| fallback_bundle().get(key))
    }

    /// 번역을 가져온다. 어디에도 없으면 키 자체를 돌려준다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.lookup(key).unwrap_or(key)
    }

    /// `{name}` 형태의 자리표시자를 채운다.
    pub fn fill(&self, key: &str, vars: &[(&str, &str)]) -> String {
        fill_template(self.t(key), vars)
    }

    pub fn feature<'a>(&'a self, feature_id: &'a str) -> FeatureText<'a> {
        let title_key = format!("feature.{feature_id}.title");
        let desc_key = format!("feature.{feature_id}.description");
        FeatureText {
            title: self.lookup(&title_key).unwrap_or(feature_id),
            description: self.lookup(&desc_key).unwrap_or_default(),
        }
    }
}

pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in vars {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    Language::from_code(code).map(|l| l.as_code().to_string())
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_lang) {
        return Some(code);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_lang(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 플랫 맵 또는 중첩 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., hi-in)
    let lang = lang.trim().to_lowercase();
    if let Some(map) = try_load(&lang) {
        return Some(map);
    }
    // 2) base code (e.g., hi)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = match toml::from_str(src) {
        Ok(v) => v,
        Err(err) => {
            tracing::warn!(%err, "language pack parse failed");
            return None;
        }
    };
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}
