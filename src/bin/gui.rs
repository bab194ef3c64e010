#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점. 화면 상태는 `Navigator`가 소유한다.

use clap::Parser;
use eframe::{egui, App, Frame};
use farm_advisory_toolbox::{
    agronomy::{crop_calendar, crop_db, fertilizer, Calculation, SoilType, DEFAULT_CROP},
    config,
    dashboard::DashboardView,
    feedback::{FeedbackCategory, FeedbackForm, MAX_RATING, QUICK_FEEDBACK_KEYS},
    i18n::{self, keys, Language, Translator},
    logging,
    navigation::{Event, Navigator, Screen},
};
use std::{fs, path::Path};

#[derive(Parser, Debug)]
#[command(name = "farm_advisory_toolbox", version, about = "Farm advisory desktop GUI")]
struct GuiArgs {
    /// 언어 코드 (auto/en/hi/gu)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
}

fn main() -> Result<(), eframe::Error> {
    let args = GuiArgs::parse();
    let app_cfg = config::load_or_default().unwrap_or_default();
    logging::init(&app_cfg.log_level);
    let config_lang = (app_cfg.language != "auto").then_some(app_cfg.language.clone());
    let language = i18n::resolve_language(&args.lang, config_lang.as_deref());
    let title = i18n::resolve(&language)
        .get(keys::APP_TITLE)
        .unwrap_or("Farm Advisory Toolbox")
        .to_string();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(480.0, 820.0)),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                tracing::warn!("font setup: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone(), &language))
        }),
    )
}

struct GuiApp {
    config: config::Config,
    tr: Translator,
    nav: Navigator,
    onboarding_choice: Language,
    // 비료 계산기
    calc_crop: String,
    calc_area: String,
    calc_soil: String,
    calc_outcome: Calculation,
    // 재배 일정
    calendar_crop: String,
    // 피드백
    feedback: FeedbackForm,
    feedback_status: Option<String>,
    settings_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config, language: &str) -> Self {
        let tr = Translator::new_with_pack(language, config.language_pack_dir.as_deref());
        tracing::info!(language = tr.language_code(), "GUI language resolved");
        let nav = Navigator::new(language, config.active_profile());
        Self {
            onboarding_choice: tr.language(),
            config,
            tr,
            nav,
            calc_crop: String::new(),
            calc_area: String::new(),
            calc_soil: String::new(),
            calc_outcome: Calculation::Pending,
            calendar_crop: DEFAULT_CROP.into(),
            feedback: FeedbackForm::default(),
            feedback_status: None,
            settings_status: None,
        }
    }

    /// 이벤트를 상태 기계에 넘기고, 언어가 바뀌었으면 번역기를 다시 만든다.
    fn dispatch(&mut self, event: Event) {
        let before = self.nav.state().language.clone();
        let leaving = self.nav.state().screen;
        self.nav.dispatch(event);
        if self.nav.state().language != before {
            self.tr = Translator::new_with_pack(
                &self.nav.state().language,
                self.config.language_pack_dir.as_deref(),
            );
        }
        if leaving == Screen::FertilizerCalculator && self.nav.state().screen != leaving {
            self.calc_outcome = Calculation::Pending;
        }
    }

    fn ui_onboarding(&mut self, ui: &mut egui::Ui) -> Option<Event> {
        let tr = self.tr.clone();
        let mut event = None;
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading(tr.t(keys::APP_TITLE));
            ui.add_space(16.0);
            ui.label(egui::RichText::new(tr.t(keys::ONBOARDING_TITLE)).strong());
            ui.label(tr.t(keys::ONBOARDING_SUBTITLE));
            ui.add_space(12.0);
            for lang in Language::ALL {
                let button = egui::Button::new(lang.native_name())
                    .selected(self.onboarding_choice == lang)
                    .min_size(egui::vec2(220.0, 36.0));
                if ui.add(button).clicked() {
                    self.onboarding_choice = lang;
                }
                ui.add_space(4.0);
            }
            ui.add_space(12.0);
            if ui.button(tr.t(keys::ONBOARDING_CONTINUE)).clicked() {
                event = Some(Event::CompleteOnboarding {
                    language: self.onboarding_choice.as_code().to_string(),
                });
            }
        });
        event
    }

    fn ui_dashboard(&mut self, ui: &mut egui::Ui) -> Option<Event> {
        let view = DashboardView::build(self.nav.state(), &self.tr);
        let mut target = None;
        ui.horizontal(|ui| {
            ui.label(format!("📍 {}", view.location));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🔔").clicked() {
                    target = Some(Screen::Notifications);
                }
                if ui.button("⚙").clicked() {
                    target = Some(Screen::Settings);
                }
            });
        });
        ui.heading(view.greeting.as_str());
        ui.label(view.subtitle.as_str());
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(egui::Color32::from_rgb(214, 140, 0), view.alert_title.as_str());
                ui.label(view.alert_body.as_str());
            });
        });
        ui.add_space(12.0);
        ui.label(egui::RichText::new(view.tools_heading.as_str()).strong());
        egui::Grid::new("feature_grid")
            .num_columns(2)
            .spacing(egui::vec2(8.0, 8.0))
            .show(ui, |ui| {
                for (i, tile) in view.tiles.iter().enumerate() {
                    let text = format!("{}\n{}", tile.title, tile.description);
                    let button = egui::Button::new(text).min_size(egui::vec2(200.0, 56.0));
                    if ui.add(button).clicked() {
                        target = Some(tile.screen);
                    }
                    if i % 2 == 1 {
                        ui.end_row();
                    }
                }
            });
        ui.add_space(12.0);
        ui.label(egui::RichText::new(view.stats_heading.as_str()).strong());
        ui.horizontal(|ui| {
            for stat in &view.stats {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading(stat.value);
                        ui.small(stat.label.as_str());
                    });
                });
            }
        });
        ui.add_space(12.0);
        ui.label(egui::RichText::new(view.recent_heading.as_str()).strong());
        for item in &view.recent {
            ui.label(format!("• {item}"));
        }
        target.map(|screen| Event::Navigate {
            feature_id: screen.id().to_string(),
        })
    }

    fn ui_fertilizer(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        ui.heading(tr.t(keys::CALC_TITLE));
        ui.add_space(8.0);
        let crop_label = if self.calc_crop.is_empty() {
            tr.t(keys::CALC_CROP_PLACEHOLDER).to_string()
        } else {
            tr.t(&format!("crop.{}", self.calc_crop)).to_string()
        };
        ui.label(tr.t(keys::CALC_CROP));
        egui::ComboBox::from_id_source("calc_crop")
            .selected_text(crop_label)
            .show_ui(ui, |ui| {
                for crop in crop_db::crops() {
                    ui.selectable_value(
                        &mut self.calc_crop,
                        crop.code.to_string(),
                        tr.t(&format!("crop.{}", crop.code)),
                    );
                }
            });
        ui.label(tr.t(keys::CALC_AREA));
        ui.add(egui::TextEdit::singleline(&mut self.calc_area).hint_text(tr.t(keys::CALC_AREA_PLACEHOLDER)));
        let soil_label = SoilType::from_code(&self.calc_soil)
            .map(|s| tr.t(s.label_key()).to_string())
            .unwrap_or_else(|| tr.t(keys::CALC_SOIL_PLACEHOLDER).to_string());
        ui.label(tr.t(keys::CALC_SOIL));
        egui::ComboBox::from_id_source("calc_soil")
            .selected_text(soil_label)
            .show_ui(ui, |ui| {
                for soil in SoilType::ALL {
                    ui.selectable_value(&mut self.calc_soil, soil.as_code().to_string(), tr.t(soil.label_key()));
                }
            });
        ui.add_space(8.0);
        if ui.button(tr.t(keys::CALC_BUTTON)).clicked() {
            self.calc_outcome = fertilizer::calculate_from_text(&self.calc_crop, &self.calc_area, &self.calc_soil);
        }
        ui.add_space(8.0);
        match self.calc_outcome.result() {
            None => {
                ui.weak(tr.t(keys::CALC_PENDING));
            }
            Some(res) => {
                ui.label(egui::RichText::new(tr.t(keys::CALC_RESULT_HEADING)).strong());
                egui::Grid::new("calc_result").num_columns(2).striped(true).show(ui, |ui| {
                    for (label, kg) in [
                        (tr.t(keys::CALC_NITROGEN), res.nitrogen_kg),
                        (tr.t(keys::CALC_PHOSPHORUS), res.phosphorus_kg),
                        (tr.t(keys::CALC_POTASSIUM), res.potassium_kg),
                        ("Urea", res.urea_kg),
                        ("DAP", res.dap_kg),
                        ("MOP", res.mop_kg),
                    ] {
                        ui.label(label);
                        ui.label(format!("{kg} kg"));
                        ui.end_row();
                    }
                });
            }
        }
    }

    fn ui_calendar(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        ui.heading(tr.t(keys::CALENDAR_TITLE));
        egui::ComboBox::from_id_source("calendar_crop")
            .selected_text(tr.t(&format!("crop.{}", self.calendar_crop)))
            .show_ui(ui, |ui| {
                for cal in crop_calendar::calendars() {
                    ui.selectable_value(
                        &mut self.calendar_crop,
                        cal.crop.to_string(),
                        tr.t(&format!("crop.{}", cal.crop)),
                    );
                }
            });
        let cal = crop_calendar::calendar_for(&self.calendar_crop);
        ui.horizontal(|ui| {
            ui.label(format!("{}: {}", tr.t(keys::CALENDAR_SEASON), tr.t(cal.season_key)));
            ui.separator();
            ui.label(tr.fill(keys::CALENDAR_DURATION, &[("days", cal.duration)]));
        });
        ui.add_space(8.0);
        for activity in cal.activities {
            let week = activity.week.to_string();
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(tr.fill(keys::CALENDAR_WEEK, &[("week", &week)])).strong());
                ui.label(tr.t(activity.label_key));
            });
        }
    }

    fn ui_feedback(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        ui.vertical_centered(|ui| {
            ui.heading(tr.t(keys::FEEDBACK_TITLE));
            ui.label(tr.t(keys::FEEDBACK_SUBTITLE));
        });
        ui.add_space(8.0);
        ui.label(tr.t(keys::FEEDBACK_RATING_LABEL));
        ui.horizontal(|ui| {
            for star in 1..=MAX_RATING {
                let glyph = if star <= self.feedback.rating { "★" } else { "☆" };
                if ui.button(egui::RichText::new(glyph).size(24.0)).clicked() {
                    self.feedback.set_rating(star);
                }
            }
        });
        ui.label(tr.t(keys::FEEDBACK_CATEGORY_LABEL));
        egui::ComboBox::from_id_source("feedback_category")
            .selected_text(tr.t(self.feedback.category.label_key()))
            .show_ui(ui, |ui| {
                for cat in FeedbackCategory::ALL {
                    ui.selectable_value(&mut self.feedback.category, cat, tr.t(cat.label_key()));
                }
            });
        ui.label(tr.t(keys::FEEDBACK_EMAIL_LABEL));
        ui.add(egui::TextEdit::singleline(&mut self.feedback.email).hint_text("your@email.com"));
        ui.label(tr.t(keys::FEEDBACK_MESSAGE_LABEL));
        ui.add(
            egui::TextEdit::multiline(&mut self.feedback.message)
                .desired_rows(4)
                .hint_text(tr.t(keys::FEEDBACK_PLACEHOLDER)),
        );
        let submit = ui.add_enabled(self.feedback.can_submit(), egui::Button::new(tr.t(keys::FEEDBACK_SUBMIT)));
        if submit.clicked() {
            self.feedback_status = Some(match self.feedback.submit() {
                Ok(_) => format!("{} {}", tr.t(keys::FEEDBACK_SUBMITTED), tr.t(keys::FEEDBACK_THANK_YOU)),
                Err(err) => tr.t(err.message_key()).to_string(),
            });
        }
        if let Some(msg) = &self.feedback_status {
            ui.label(msg.as_str());
        }
        ui.separator();
        ui.label(tr.t(keys::FEEDBACK_QUICK_LABEL));
        egui::Grid::new("quick_feedback").num_columns(2).show(ui, |ui| {
            for (i, key) in QUICK_FEEDBACK_KEYS.iter().enumerate() {
                if ui.small_button(tr.t(key)).clicked() {
                    self.feedback.append_quick_feedback(tr.t(key));
                }
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });
    }

    fn ui_settings(&mut self, ui: &mut egui::Ui) -> Option<Event> {
        let tr = self.tr.clone();
        let mut event = None;
        ui.heading(tr.t(keys::SETTINGS_TITLE));
        ui.label(tr.t(keys::SETTINGS_LANGUAGE));
        let current = self.nav.state().language.clone();
        for lang in Language::ALL {
            let selected = Language::from_code(&current) == Some(lang);
            if ui.selectable_label(selected, lang.native_name()).clicked() && !selected {
                event = Some(Event::ChangeLanguage {
                    language_code: Some(lang.as_code().to_string()),
                });
            }
        }
        if ui.button(tr.t(keys::SETTINGS_TOGGLE)).clicked() {
            event = Some(Event::ChangeLanguage { language_code: None });
        }
        if let Some(msg) = &self.settings_status {
            ui.label(msg.as_str());
        }
        event
    }

    fn ui_coming_soon(&self, ui: &mut egui::Ui, screen: Screen) {
        let text = self.tr.feature(screen.id());
        ui.heading(text.title);
        ui.label(text.description);
        ui.add_space(12.0);
        ui.weak(self.tr.t(keys::COMING_SOON));
    }

    fn save_language(&mut self) {
        self.config.language = self.nav.state().language.clone();
        self.settings_status = Some(match self.config.save() {
            Ok(()) => self.tr.t(keys::SETTINGS_SAVED).to_string(),
            Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let screen = self.nav.state().screen;
        let mut event = None;

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if screen.is_feature() && ui.button(format!("← {}", self.tr.t(keys::NAV_BACK))).clicked() {
                    event = Some(Event::Back);
                }
                ui.heading(self.tr.t(keys::APP_TITLE));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match screen {
                    Screen::Onboarding => event = self.ui_onboarding(ui).or(event.take()),
                    Screen::Dashboard => event = self.ui_dashboard(ui).or(event.take()),
                    Screen::FertilizerCalculator => self.ui_fertilizer(ui),
                    Screen::Calendar => self.ui_calendar(ui),
                    Screen::Feedback => self.ui_feedback(ui),
                    Screen::Settings => event = self.ui_settings(ui).or(event.take()),
                    other => self.ui_coming_soon(ui, other),
                });
        });

        if let Some(event) = event {
            let language_change = matches!(event, Event::ChangeLanguage { .. });
            self.dispatch(event);
            if language_change {
                self.save_language();
            }
        }
    }
}

fn apply_font_fallbacks(ctx: &egui::Context, faces: Vec<(String, Vec<u8>)>) {
    let mut fonts = egui::FontDefinitions::default();
    for (name, bytes) in faces {
        fonts
            .font_data
            .insert(name.clone(), egui::FontData::from_owned(bytes));
        for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
            fonts.families.entry(family).or_default().push(name.clone());
        }
    }
    ctx.set_fonts(fonts);
}

/// 데바나가리/구자라트 문자를 표시하기 위해 폴백 폰트를 찾는다.
/// 1) assets/fonts/ 의 Noto 폰트
/// 2) Windows 시스템 폰트(Nirmala UI)
/// 3) 리눅스 배포판 기본 Noto 경로
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<std::path::PathBuf> = [
        "assets/fonts/NotoSansDevanagari-Regular.ttf",
        "assets/fonts/NotoSansGujarati-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSansDevanagari-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSansGujarati-Regular.ttf",
        "/usr/share/fonts/noto/NotoSansDevanagari-Regular.ttf",
        "/usr/share/fonts/noto/NotoSansGujarati-Regular.ttf",
    ]
    .iter()
    .map(|p| Path::new(p).to_path_buf())
    .collect();
    if let Some(windir) = std::env::var_os("WINDIR") {
        candidates.insert(0, Path::new(&windir).join("Fonts").join("Nirmala.ttf"));
    }
    let mut faces = Vec::new();
    for path in candidates.iter().filter(|p| p.exists()) {
        let bytes = fs::read(path).map_err(|e| format!("Failed to read font ({}): {e}", path.display()))?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("fallback_{}", faces.len()));
        faces.push((name, bytes));
    }
    if faces.is_empty() {
        return Err("No Devanagari/Gujarati font found; Indic text may not render.".into());
    }
    apply_font_fallbacks(ctx, faces);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn onboarding_choice_follows_language() {
        let app = GuiApp::new(config::Config::default(), "gu");
        assert_eq!(app.onboarding_choice, Language::Gu);
        assert_eq!(app.nav.state().screen, Screen::Onboarding);
    }

    #[test]
    fn language_change_rebuilds_translator() {
        let mut app = GuiApp::new(config::Config::default(), "en");
        app.dispatch(Event::CompleteOnboarding { language: "en".into() });
        app.dispatch(Event::ChangeLanguage {
            language_code: Some("hi".into()),
        });
        assert_eq!(app.tr.language_code(), "hi");
    }

    #[test]
    fn leaving_calculator_clears_result() {
        let mut app = GuiApp::new(config::Config::default(), "en");
        app.dispatch(Event::CompleteOnboarding { language: "en".into() });
        app.dispatch(Event::Navigate {
            feature_id: "fertilizer-calculator".into(),
        });
        app.calc_outcome = fertilizer::calculate_from_text("rice", "1.5", "clay");
        assert!(!app.calc_outcome.is_pending());
        app.dispatch(Event::Back);
        assert!(app.calc_outcome.is_pending());
        assert_eq!(app.nav.state().screen, Screen::Dashboard);
    }
}
