use farm_advisory_toolbox::navigation::{Event, Navigator, Screen, UserProfile};

fn profile() -> UserProfile {
    UserProfile {
        name: "Ramesh".into(),
        location: "Anand, Gujarat".into(),
    }
}

fn navigate(nav: &mut Navigator, feature_id: &str) {
    nav.dispatch(Event::Navigate {
        feature_id: feature_id.into(),
    });
}

#[test]
fn onboarding_then_soil_and_back_keeps_context() {
    let mut nav = Navigator::new("en", Some(profile()));
    nav.dispatch(Event::CompleteOnboarding {
        language: "gu".into(),
    });
    assert_eq!(nav.state().screen, Screen::Dashboard);

    navigate(&mut nav, "soil");
    assert_eq!(nav.state().screen, Screen::Soil);
    nav.dispatch(Event::Back);

    let state = nav.state();
    assert_eq!(state.screen, Screen::Dashboard);
    assert_eq!(state.language, "gu");
    assert_eq!(state.profile, Some(profile()));
}

#[test]
fn every_feature_id_is_reachable_from_dashboard() {
    for screen in Screen::FEATURES {
        let mut nav = Navigator::resume("en", None);
        navigate(&mut nav, screen.id());
        assert_eq!(nav.state().screen, screen, "feature id {}", screen.id());
        nav.dispatch(Event::Back);
        assert_eq!(nav.state().screen, Screen::Dashboard);
    }
}

#[test]
fn unknown_feature_keeps_dashboard() {
    let mut nav = Navigator::resume("hi", None);
    navigate(&mut nav, "irrigation");
    navigate(&mut nav, "dashboard");
    navigate(&mut nav, "onboarding");
    assert_eq!(nav.state().screen, Screen::Dashboard);
    assert_eq!(nav.state().language, "hi");
}

#[test]
fn language_toggle_cycles_through_supported_languages() {
    let mut nav = Navigator::resume("en", None);
    let mut seen = Vec::new();
    for _ in 0..3 {
        nav.dispatch(Event::ChangeLanguage { language_code: None });
        seen.push(nav.state().language.clone());
    }
    assert_eq!(seen, ["hi", "gu", "en"]);
    assert_eq!(nav.state().screen, Screen::Dashboard);
}

#[test]
fn language_change_from_settings_survives_back() {
    let mut nav = Navigator::resume("en", Some(profile()));
    navigate(&mut nav, "settings");
    nav.dispatch(Event::ChangeLanguage {
        language_code: Some("hi".into()),
    });
    assert_eq!(nav.state().screen, Screen::Settings);
    nav.dispatch(Event::Back);
    assert_eq!(nav.state().screen, Screen::Dashboard);
    assert_eq!(nav.state().language, "hi");
}

#[test]
fn back_outside_features_is_ignored() {
    let mut nav = Navigator::default();
    nav.dispatch(Event::Back);
    assert_eq!(nav.state().screen, Screen::Onboarding);
    nav.dispatch(Event::CompleteOnboarding {
        language: "en".into(),
    });
    nav.dispatch(Event::Back);
    assert_eq!(nav.state().screen, Screen::Dashboard);
}
