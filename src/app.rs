use std::path::Path;

use crate::agronomy::{crop_calendar, InvalidInputError, DEFAULT_CROP};
use crate::config::{self, Config, ConfigError};
use crate::i18n::{self, Translator};
use crate::navigation::{Event, Navigator, Screen};
use crate::ui_cli::{self, DashboardChoice, SettingsChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// 비료 계산 입력 오류
    #[error("invalid calculator input: {0}")]
    Input(#[from] InvalidInputError),
    /// 표준 입력이 닫힘 (EOF)
    #[error("input stream closed")]
    InputClosed,
}

/// 세션 언어/언어팩에 맞는 번역기를 만든다.
pub fn translator_for(config: &Config, language: &str) -> Translator {
    Translator::new_with_pack(language, config.language_pack_dir.as_deref())
}

/// CLI 애플리케이션의 메인 루프를 실행한다. 화면 전환은 모두 `Navigator`를 거친다.
pub fn run(config: &mut Config, config_path: &Path, language: &str) -> Result<(), AppError> {
    let mut nav = Navigator::new(language, config.active_profile());
    let mut tr = translator_for(config, &nav.state().language);
    loop {
        if tr.language_code() != i18n::resolve(&nav.state().language).code() {
            tr = translator_for(config, &nav.state().language);
        }
        let screen = nav.state().screen;
        match screen {
            Screen::Onboarding => match ui_cli::onboarding(&tr)? {
                Some(language) => {
                    nav.dispatch(Event::CompleteOnboarding { language });
                }
                None => break,
            },
            Screen::Dashboard => match ui_cli::dashboard(&tr, nav.state())? {
                DashboardChoice::Open(target) => {
                    nav.dispatch(Event::Navigate {
                        feature_id: target.id().to_string(),
                    });
                }
                DashboardChoice::Exit => break,
            },
            Screen::Settings => match ui_cli::handle_settings(&tr, nav.state())? {
                SettingsChoice::ChangeLanguage(code) => {
                    nav.dispatch(Event::ChangeLanguage {
                        language_code: code,
                    });
                    config.language = nav.state().language.clone();
                    config::save_to(config, config_path)?;
                }
                SettingsChoice::Back => {
                    nav.dispatch(Event::Back);
                }
            },
            Screen::FertilizerCalculator => {
                ui_cli::handle_fertilizer(&tr)?;
                nav.dispatch(Event::Back);
            }
            Screen::Calendar => {
                ui_cli::handle_calendar(&tr, crop_calendar::calendar_for(DEFAULT_CROP))?;
                nav.dispatch(Event::Back);
            }
            Screen::Feedback => {
                ui_cli::handle_feedback(&tr)?;
                nav.dispatch(Event::Back);
            }
            other => {
                ui_cli::coming_soon(&tr, other)?;
                nav.dispatch(Event::Back);
            }
        }
    }
    if nav.state().screen != Screen::Onboarding {
        config.language = nav.state().language.clone();
    }
    config::save_to(config, config_path)?;
    println!("{}", tr.t(i18n::keys::APP_EXIT));
    Ok(())
}
