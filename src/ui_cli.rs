use std::fmt::Write as _;
use std::io::{self, Write};

use crate::agronomy::crop_calendar::CropCalendar;
use crate::agronomy::{crop_db, fertilizer, Calculation, SoilType};
use crate::app::AppError;
use crate::dashboard::DashboardView;
use crate::feedback::{FeedbackCategory, FeedbackForm, QUICK_FEEDBACK_KEYS};
use crate::i18n::{keys, Language, LocalizationBundle, Translator};
use crate::navigation::{NavigationState, Screen};

/// 대시보드에서의 선택.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardChoice {
    Open(Screen),
    Exit,
}

/// 설정 화면에서의 선택.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsChoice {
    /// None이면 다음 언어로 전환
    ChangeLanguage(Option<String>),
    Back,
}

/// 언어 선택 화면. 종료를 고르면 None.
pub fn onboarding(tr: &Translator) -> Result<Option<String>, AppError> {
    println!("\n=== {} ===", tr.t(keys::APP_TITLE));
    println!("{}", tr.t(keys::ONBOARDING_TITLE));
    println!("{}", tr.t(keys::ONBOARDING_SUBTITLE));
    for (i, lang) in Language::ALL.iter().enumerate() {
        println!("{}) {} [{}]", i + 1, lang.native_name(), lang.as_code());
    }
    println!("0) {}", tr.t(keys::MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        let sel = sel.trim();
        if sel == "0" {
            return Ok(None);
        }
        if let Some(lang) = pick_language(sel) {
            return Ok(Some(lang.as_code().to_string()));
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

fn pick_language(sel: &str) -> Option<Language> {
    match sel.parse::<usize>() {
        Ok(n) if (1..=Language::ALL.len()).contains(&n) => Some(Language::ALL[n - 1]),
        Ok(_) => None,
        Err(_) => Language::from_code(sel),
    }
}

/// 대시보드를 표시하고 선택값을 반환한다.
pub fn dashboard(tr: &Translator, state: &NavigationState) -> Result<DashboardChoice, AppError> {
    let view = DashboardView::build(state, tr);
    print!("{}", render_dashboard(&view));
    println!(
        "s) {}  n) {}  0) {}",
        tr.feature(Screen::Settings.id()).title,
        tr.feature(Screen::Notifications.id()).title,
        tr.t(keys::MENU_EXIT)
    );
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "0" => return Ok(DashboardChoice::Exit),
            "s" | "S" => return Ok(DashboardChoice::Open(Screen::Settings)),
            "n" | "N" => return Ok(DashboardChoice::Open(Screen::Notifications)),
            other => {
                if let Some(tile) = other
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| view.tiles.get(i))
                {
                    return Ok(DashboardChoice::Open(tile.screen));
                }
                println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
            }
        }
    }
}

pub fn render_dashboard(view: &DashboardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n[{}]", view.location);
    let _ = writeln!(out, "{}", view.greeting);
    let _ = writeln!(out, "{}", view.subtitle);
    let _ = writeln!(out, "! {}: {}", view.alert_title, view.alert_body);
    let _ = writeln!(out, "\n-- {} --", view.tools_heading);
    for (i, tile) in view.tiles.iter().enumerate() {
        let _ = writeln!(out, "{}) {} - {}", i + 1, tile.title, tile.description);
    }
    let _ = writeln!(out, "\n-- {} --", view.stats_heading);
    let stats: Vec<String> = view
        .stats
        .iter()
        .map(|s| format!("{} {}", s.value, s.label))
        .collect();
    let _ = writeln!(out, "{}", stats.join(" | "));
    let _ = writeln!(out, "\n-- {} --", view.recent_heading);
    for item in &view.recent {
        let _ = writeln!(out, "* {item}");
    }
    out
}

/// 비료 계산기 화면을 처리한다.
pub fn handle_fertilizer(tr: &Translator) -> Result<(), AppError> {
    println!("\n-- {} --", tr.t(keys::CALC_TITLE));
    let crops = crop_db::crops();
    println!("{}:", tr.t(keys::CALC_CROP));
    for (i, crop) in crops.iter().enumerate() {
        println!("{}) {}", i + 1, tr.t(&format!("crop.{}", crop.code)));
    }
    let sel = read_line(&format!("{}: ", tr.t(keys::CALC_CROP_PLACEHOLDER)))?;
    let crop = match sel.trim().parse::<usize>() {
        Ok(n) if (1..=crops.len()).contains(&n) => crops[n - 1].code.to_string(),
        _ => sel.trim().to_string(),
    };
    let area = read_line(&format!("{}: ", tr.t(keys::CALC_AREA_PLACEHOLDER)))?;
    println!("{}:", tr.t(keys::CALC_SOIL));
    for (i, soil) in SoilType::ALL.iter().enumerate() {
        println!("{}) {}", i + 1, tr.t(soil.label_key()));
    }
    let sel = read_line(&format!("{}: ", tr.t(keys::CALC_SOIL_PLACEHOLDER)))?;
    let soil = match sel.trim().parse::<usize>() {
        Ok(n) if (1..=SoilType::ALL.len()).contains(&n) => SoilType::ALL[n - 1].as_code().to_string(),
        _ => sel.trim().to_string(),
    };
    let outcome = fertilizer::calculate_from_text(&crop, &area, &soil);
    print!("{}", render_calculation(tr, &outcome));
    Ok(())
}

pub fn render_calculation(tr: &Translator, outcome: &Calculation) -> String {
    let mut out = String::new();
    match outcome.result() {
        None => {
            let _ = writeln!(out, "{}", tr.t(keys::CALC_PENDING));
        }
        Some(res) => {
            let _ = writeln!(out, "{}", tr.t(keys::CALC_RESULT_HEADING));
            let _ = writeln!(out, "{}: {} kg", tr.t(keys::CALC_NITROGEN), res.nitrogen_kg);
            let _ = writeln!(out, "{}: {} kg", tr.t(keys::CALC_PHOSPHORUS), res.phosphorus_kg);
            let _ = writeln!(out, "{}: {} kg", tr.t(keys::CALC_POTASSIUM), res.potassium_kg);
            let _ = writeln!(out, "Urea: {} kg", res.urea_kg);
            let _ = writeln!(out, "DAP: {} kg", res.dap_kg);
            let _ = writeln!(out, "MOP: {} kg", res.mop_kg);
        }
    }
    out
}

/// 재배 일정 화면을 처리한다.
pub fn handle_calendar(tr: &Translator, cal: &CropCalendar) -> Result<(), AppError> {
    print!("{}", render_calendar(tr, cal));
    read_line(&format!("({}) ", tr.t(keys::NAV_BACK)))?;
    Ok(())
}

pub fn render_calendar(tr: &Translator, cal: &CropCalendar) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n-- {} --", tr.t(keys::CALENDAR_TITLE));
    let _ = writeln!(
        out,
        "{} | {}: {} | {}",
        tr.t(&format!("crop.{}", cal.crop)),
        tr.t(keys::CALENDAR_SEASON),
        tr.t(cal.season_key),
        tr.fill(keys::CALENDAR_DURATION, &[("days", cal.duration)])
    );
    for activity in cal.activities {
        let week = activity.week.to_string();
        let _ = writeln!(
            out,
            "  {:<16} {}",
            tr.fill(keys::CALENDAR_WEEK, &[("week", &week)]),
            tr.t(activity.label_key)
        );
    }
    out
}

/// 피드백 양식을 처리한다.
pub fn handle_feedback(tr: &Translator) -> Result<(), AppError> {
    let mut form = FeedbackForm::default();
    println!("\n-- {} --", tr.t(keys::FEEDBACK_TITLE));
    println!("{}", tr.t(keys::FEEDBACK_SUBTITLE));
    let stars = read_line(&format!("{} (1-5): ", tr.t(keys::FEEDBACK_RATING_LABEL)))?;
    if let Ok(n) = stars.trim().parse::<u8>() {
        form.set_rating(n);
    }
    println!("{}:", tr.t(keys::FEEDBACK_CATEGORY_LABEL));
    for (i, cat) in FeedbackCategory::ALL.iter().enumerate() {
        println!("{}) {}", i + 1, tr.t(cat.label_key()));
    }
    let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
    if let Some(cat) = sel
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| FeedbackCategory::ALL.get(i))
    {
        form.category = *cat;
    }
    form.email = read_line(&format!("{}: ", tr.t(keys::FEEDBACK_EMAIL_LABEL)))?;
    println!("{}", tr.t(keys::FEEDBACK_QUICK_LABEL));
    for (i, key) in QUICK_FEEDBACK_KEYS.iter().enumerate() {
        println!("  q{}) {}", i + 1, tr.t(key));
    }
    println!("{}", tr.t(keys::FEEDBACK_PLACEHOLDER));
    loop {
        let line = read_line(&format!("{}: ", tr.t(keys::FEEDBACK_MESSAGE_LABEL)))?;
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        match line
            .strip_prefix('q')
            .and_then(|n| n.parse::<usize>().ok())
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| QUICK_FEEDBACK_KEYS.get(i))
        {
            Some(key) => form.append_quick_feedback(tr.t(key)),
            None => form.append_quick_feedback(line),
        }
    }
    match form.submit() {
        Ok(_) => {
            println!("{}", tr.t(keys::FEEDBACK_SUBMITTED));
            println!("{}", tr.t(keys::FEEDBACK_THANK_YOU));
        }
        Err(err) => println!("{}: {}", tr.t(keys::ERROR_PREFIX), tr.t(err.message_key())),
    }
    Ok(())
}

/// 설정 화면.
pub fn handle_settings(tr: &Translator, state: &NavigationState) -> Result<SettingsChoice, AppError> {
    println!("\n-- {} --", tr.t(keys::SETTINGS_TITLE));
    let current = Language::from_code(&state.language)
        .map(|l| l.native_name())
        .unwrap_or(state.language.as_str());
    println!("{}", tr.fill(keys::SETTINGS_CURRENT_LANGUAGE, &[("language", current)]));
    println!("t) {}", tr.t(keys::SETTINGS_TOGGLE));
    for (i, lang) in Language::ALL.iter().enumerate() {
        println!("{}) {}", i + 1, lang.native_name());
    }
    println!("0) {}", tr.t(keys::NAV_BACK));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "0" | "" => return Ok(SettingsChoice::Back),
            "t" | "T" => return Ok(SettingsChoice::ChangeLanguage(None)),
            other => match pick_language(other) {
                Some(lang) => {
                    return Ok(SettingsChoice::ChangeLanguage(Some(lang.as_code().to_string())))
                }
                None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
            },
        }
    }
}

/// 아직 계산 로직이 없는 기능 화면.
pub fn coming_soon(tr: &Translator, screen: Screen) -> Result<(), AppError> {
    let text = tr.feature(screen.id());
    println!("\n-- {} --", text.title);
    println!("{}", text.description);
    println!("{}", tr.t(keys::COMING_SOON));
    read_line(&format!("({}) ", tr.t(keys::NAV_BACK)))?;
    Ok(())
}

pub fn render_bundle(bundle: &LocalizationBundle) -> String {
    let mut out = String::new();
    for key in bundle.keys() {
        let _ = writeln!(out, "{key} = {:?}", bundle.get(key).unwrap_or_default());
    }
    out
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    let n = io::stdin().read_line(&mut buf)?;
    if n == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agronomy::crop_calendar::calendar_for;

    #[test]
    fn language_pick_by_number_or_code() {
        assert_eq!(pick_language("2"), Some(Language::Hi));
        assert_eq!(pick_language("gu"), Some(Language::Gu));
        assert_eq!(pick_language("4"), None);
        assert_eq!(pick_language("0"), None);
    }

    #[test]
    fn computed_result_lists_all_products() {
        let tr = Translator::new("en");
        let text = render_calculation(&tr, &fertilizer::calculate_from_text("wheat", "2", "clay"));
        assert!(text.contains("Nitrogen (N): 240 kg"));
        assert!(text.contains("Urea: 522 kg"));
        assert!(text.contains("DAP: 261 kg"));
        assert!(text.contains("MOP: 133 kg"));
    }

    #[test]
    fn pending_result_shows_hint() {
        let tr = Translator::new("gu");
        let text = render_calculation(&tr, &Calculation::Pending);
        assert_eq!(text.trim(), tr.t(keys::CALC_PENDING));
    }

    #[test]
    fn calendar_is_localized() {
        let tr = Translator::new("hi");
        let text = render_calendar(&tr, calendar_for("wheat"));
        assert!(text.contains("रबी"));
        assert!(text.contains("120-150 दिन"));
        assert!(text.contains("सप्ताह 18"));
        assert!(text.contains("कटाई"));
    }
}
