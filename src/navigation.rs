//! 화면 전환 상태 기계. 현재 화면과 세션 문맥(언어, 사용자 프로필)을 단일 소유자가 관리한다.

use serde::{Deserialize, Serialize};

use crate::i18n;

/// 화면 식별자(닫힌 집합).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Onboarding,
    Dashboard,
    Soil,
    Pest,
    Advisor,
    Weather,
    Market,
    History,
    Settings,
    Notifications,
    Feedback,
    Calendar,
    FertilizerCalculator,
}

impl Screen {
    /// 대시보드에서 이동 가능한 기능 화면 전체.
    pub const FEATURES: [Screen; 11] = [
        Screen::Soil,
        Screen::Pest,
        Screen::Advisor,
        Screen::Weather,
        Screen::Market,
        Screen::History,
        Screen::Settings,
        Screen::Notifications,
        Screen::Feedback,
        Screen::Calendar,
        Screen::FertilizerCalculator,
    ];

    /// 대시보드 기능 타일 순서. 설정/알림은 상단 버튼으로 노출한다.
    pub const FEATURE_GRID: [Screen; 9] = [
        Screen::Soil,
        Screen::Pest,
        Screen::Advisor,
        Screen::Weather,
        Screen::Market,
        Screen::History,
        Screen::Calendar,
        Screen::FertilizerCalculator,
        Screen::Feedback,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Screen::Onboarding => "onboarding",
            Screen::Dashboard => "dashboard",
            Screen::Soil => "soil",
            Screen::Pest => "pest",
            Screen::Advisor => "advisor",
            Screen::Weather => "weather",
            Screen::Market => "market",
            Screen::History => "history",
            Screen::Settings => "settings",
            Screen::Notifications => "notifications",
            Screen::Feedback => "feedback",
            Screen::Calendar => "calendar",
            Screen::FertilizerCalculator => "fertilizer-calculator",
        }
    }

    /// 기능 식별자를 화면으로 바꾼다. onboarding/dashboard는 기능이 아니므로 None.
    pub fn from_feature_id(id: &str) -> Option<Self> {
        let id = id.trim();
        Screen::FEATURES.into_iter().find(|s| s.id() == id)
    }

    pub fn is_feature(&self) -> bool {
        !matches!(self, Screen::Onboarding | Screen::Dashboard)
    }
}

/// 인사말에 쓰는 사용자 정보.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub location: String,
}

/// 화면 렌더링에 필요한 현재 상태.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub screen: Screen,
    pub language: String,
    pub profile: Option<UserProfile>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            screen: Screen::Onboarding,
            language: i18n::FALLBACK_LANGUAGE.to_string(),
            profile: None,
        }
    }
}

/// 상태 기계에 넣는 사용자 동작.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    CompleteOnboarding { language: String },
    Navigate { feature_id: String },
    Back,
    /// None이면 지원 언어 목록에서 다음 언어로 넘어간다.
    ChangeLanguage { language_code: Option<String> },
}

impl NavigationState {
    /// 이벤트를 적용한다. 상태가 바뀌었으면 true, 무시된 전환이면 false.
    pub fn apply(&mut self, event: Event) -> bool {
        match event {
            Event::CompleteOnboarding { language } => {
                if self.screen != Screen::Onboarding {
                    return false;
                }
                self.language = language;
                self.screen = Screen::Dashboard;
                true
            }
            Event::Navigate { feature_id } => {
                if self.screen != Screen::Dashboard {
                    return false;
                }
                match Screen::from_feature_id(&feature_id) {
                    Some(screen) => {
                        self.screen = screen;
                        true
                    }
                    None => false,
                }
            }
            Event::Back => {
                if !self.screen.is_feature() {
                    return false;
                }
                // 이전 화면 스택 없이 항상 대시보드로 돌아간다.
                self.screen = Screen::Dashboard;
                true
            }
            Event::ChangeLanguage { language_code } => {
                let next = match language_code {
                    Some(code) => code,
                    None => i18n::next_language(&self.language).as_code().to_string(),
                };
                if next == self.language {
                    return false;
                }
                self.language = next;
                true
            }
        }
    }
}

/// 네비게이션 상태의 유일한 쓰기 주체. 렌더러는 `state()`로 읽기만 한다.
#[derive(Debug, Default)]
pub struct Navigator {
    state: NavigationState,
}

impl Navigator {
    pub fn new(language: impl Into<String>, profile: Option<UserProfile>) -> Self {
        Self {
            state: NavigationState {
                screen: Screen::Onboarding,
                language: language.into(),
                profile,
            },
        }
    }

    /// 이미 온보딩을 마친 세션을 대시보드에서 시작한다.
    pub fn resume(language: impl Into<String>, profile: Option<UserProfile>) -> Self {
        let mut nav = Self::new(language, profile);
        nav.state.screen = Screen::Dashboard;
        nav
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn dispatch(&mut self, event: Event) -> &NavigationState {
        let from = self.state.screen;
        let summary = format!("{event:?}");
        if self.state.apply(event) {
            tracing::debug!(
                from = from.id(),
                to = self.state.screen.id(),
                language = %self.state.language,
                event = %summary,
                "navigation transition"
            );
        } else {
            tracing::debug!(screen = from.id(), event = %summary, "navigation event ignored");
        }
        &self.state
    }

    /// 세션 프로필을 바꾼다. 화면은 그대로 둔다.
    pub fn set_profile(&mut self, profile: Option<UserProfile>) {
        self.state.profile = profile;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_dashboard() -> Navigator {
        let mut nav = Navigator::default();
        nav.dispatch(Event::CompleteOnboarding {
            language: "hi".into(),
        });
        nav
    }

    #[test]
    fn starts_in_onboarding() {
        let nav = Navigator::default();
        assert_eq!(nav.state().screen, Screen::Onboarding);
        assert_eq!(nav.state().language, "en");
        assert!(nav.state().profile.is_none());
    }

    #[test]
    fn onboarding_records_language() {
        let nav = on_dashboard();
        assert_eq!(nav.state().screen, Screen::Dashboard);
        assert_eq!(nav.state().language, "hi");
    }

    #[test]
    fn onboarding_twice_is_ignored() {
        let mut nav = on_dashboard();
        nav.dispatch(Event::CompleteOnboarding {
            language: "gu".into(),
        });
        assert_eq!(nav.state().language, "hi");
        assert_eq!(nav.state().screen, Screen::Dashboard);
    }

    #[test]
    fn every_feature_id_is_reachable() {
        for screen in Screen::FEATURES {
            let mut nav = on_dashboard();
            nav.dispatch(Event::Navigate {
                feature_id: screen.id().into(),
            });
            assert_eq!(nav.state().screen, screen);
        }
    }

    #[test]
    fn unknown_feature_is_noop() {
        let mut nav = on_dashboard();
        let before = nav.state().clone();
        nav.dispatch(Event::Navigate {
            feature_id: "irrigation".into(),
        });
        assert_eq!(nav.state(), &before);
        nav.dispatch(Event::Navigate {
            feature_id: "dashboard".into(),
        });
        assert_eq!(nav.state(), &before);
    }

    #[test]
    fn navigate_only_from_dashboard() {
        let mut nav = on_dashboard();
        nav.dispatch(Event::Navigate {
            feature_id: "weather".into(),
        });
        nav.dispatch(Event::Navigate {
            feature_id: "market".into(),
        });
        assert_eq!(nav.state().screen, Screen::Weather);
    }

    #[test]
    fn back_is_ignored_on_onboarding_and_dashboard() {
        let mut nav = Navigator::default();
        nav.dispatch(Event::Back);
        assert_eq!(nav.state().screen, Screen::Onboarding);
        let mut nav = on_dashboard();
        nav.dispatch(Event::Back);
        assert_eq!(nav.state().screen, Screen::Dashboard);
    }

    #[test]
    fn language_toggle_cycles_catalog() {
        let mut nav = Navigator::resume("en", None);
        nav.dispatch(Event::ChangeLanguage { language_code: None });
        assert_eq!(nav.state().language, "hi");
        nav.dispatch(Event::ChangeLanguage { language_code: None });
        assert_eq!(nav.state().language, "gu");
        nav.dispatch(Event::ChangeLanguage { language_code: None });
        assert_eq!(nav.state().language, "en");
    }

    #[test]
    fn explicit_language_keeps_screen() {
        let mut nav = on_dashboard();
        nav.dispatch(Event::Navigate {
            feature_id: "settings".into(),
        });
        nav.dispatch(Event::ChangeLanguage {
            language_code: Some("gu".into()),
        });
        assert_eq!(nav.state().screen, Screen::Settings);
        assert_eq!(nav.state().language, "gu");
    }
}
