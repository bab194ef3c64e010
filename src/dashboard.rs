//! 대시보드 화면 구성 데이터. CLI와 GUI가 같은 값을 그린다.

use crate::i18n::{keys, Translator};
use crate::navigation::{NavigationState, Screen};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureTile {
    pub screen: Screen,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickStat {
    pub value: &'static str,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub greeting: String,
    pub subtitle: String,
    pub location: String,
    pub alert_title: String,
    pub alert_body: String,
    pub tools_heading: String,
    pub tiles: Vec<FeatureTile>,
    pub stats_heading: String,
    pub stats: Vec<QuickStat>,
    pub recent_heading: String,
    pub recent: Vec<String>,
}

// 샘플 지표. 실제 기록 저장은 하지 않는다.
const STATS: [(&str, &str); 3] = [
    ("23", keys::STATS_SCANS),
    ("₹45", keys::STATS_AVG_PRICE),
    ("85%", keys::STATS_ACCURACY),
];

const RECENT: [&str; 3] = [keys::RECENT_SOIL, keys::RECENT_FERTILIZER, keys::RECENT_MARKET];

impl DashboardView {
    pub fn build(state: &NavigationState, tr: &Translator) -> Self {
        let named = state.profile.as_ref().filter(|p| !p.name.trim().is_empty());
        let greeting = match named {
            Some(p) => tr.fill(keys::GREETING_NAMED, &[("name", p.name.trim())]),
            None => tr.t(keys::GREETING_GENERIC).to_string(),
        };
        let location = state
            .profile
            .as_ref()
            .map(|p| p.location.trim())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| tr.t(keys::LOCATION_UNKNOWN))
            .to_string();
        let tiles = Screen::FEATURE_GRID
            .iter()
            .map(|screen| {
                let text = tr.feature(screen.id());
                FeatureTile {
                    screen: *screen,
                    title: text.title.to_string(),
                    description: text.description.to_string(),
                }
            })
            .collect();
        Self {
            greeting,
            subtitle: tr.t(keys::GREETING_SUBTITLE).to_string(),
            location,
            alert_title: tr.t(keys::ALERT_WEATHER_TITLE).to_string(),
            alert_body: tr.t(keys::ALERT_WEATHER_BODY).to_string(),
            tools_heading: tr.t(keys::HEADING_TOOLS).to_string(),
            tiles,
            stats_heading: tr.t(keys::HEADING_QUICK_STATS).to_string(),
            stats: STATS
                .iter()
                .map(|&(value, key)| QuickStat {
                    value,
                    label: tr.t(key).to_string(),
                })
                .collect(),
            recent_heading: tr.t(keys::HEADING_RECENT_ACTIVITY).to_string(),
            recent: RECENT.iter().map(|k| tr.t(k).to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{Navigator, UserProfile};

    #[test]
    fn greets_profile_by_name() {
        let nav = Navigator::resume(
            "en",
            Some(UserProfile {
                name: "Ramesh".into(),
                location: "Rajkot, Gujarat".into(),
            }),
        );
        let view = DashboardView::build(nav.state(), &Translator::new("en"));
        assert_eq!(view.greeting, "Good Morning, Ramesh!");
        assert_eq!(view.location, "Rajkot, Gujarat");
        assert_eq!(view.tiles.len(), Screen::FEATURE_GRID.len());
        assert_eq!(view.tiles[0].title, "Soil Scan");
    }

    #[test]
    fn generic_greeting_without_profile() {
        let nav = Navigator::resume("hi", None);
        let view = DashboardView::build(nav.state(), &Translator::new("hi"));
        assert_eq!(view.greeting, "सुप्रभात!");
        assert_eq!(view.location, "स्थान सेट नहीं है");
        assert!(view.tiles.iter().all(|t| !t.title.is_empty() && !t.description.is_empty()));
    }
}
