//! 작물별 재배 일정(파종~수확) 데이터.

use super::crop_db::DEFAULT_CROP;

/// 재배 일정 중 한 작업.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarActivity {
    /// 파종 준비 시작을 1주차로 본 주차
    pub week: u32,
    /// 번역 키 (`calendar.activity.*`)
    pub label_key: &'static str,
}

#[derive(Debug)]
pub struct CropCalendar {
    pub crop: &'static str,
    /// 번역 키 (`calendar.season.*`)
    pub season_key: &'static str,
    pub duration: &'static str,
    /// 주차 오름차순
    pub activities: &'static [CalendarActivity],
}

impl CropCalendar {
    /// 해당 주차에 진행 중인(가장 최근에 시작한) 작업을 돌려준다.
    pub fn activity_for_week(&self, week: u32) -> Option<&CalendarActivity> {
        self.activities.iter().take_while(|a| a.week <= week).last()
    }

    /// 주어진 주차 이후에 오는 첫 작업.
    pub fn next_activity(&self, week: u32) -> Option<&CalendarActivity> {
        self.activities.iter().find(|a| a.week > week)
    }
}

pub fn calendars() -> &'static [CropCalendar] {
    CALENDARS
}

/// 작물 코드로 일정을 찾는다. 없는 작물은 기본 작물 일정을 보여준다.
pub fn calendar_for(crop: &str) -> &'static CropCalendar {
    let crop = crop.trim();
    CALENDARS
        .iter()
        .find(|c| c.crop.eq_ignore_ascii_case(crop))
        .or_else(|| CALENDARS.iter().find(|c| c.crop == DEFAULT_CROP))
        .unwrap_or(&CALENDARS[0])
}

const fn act(week: u32, label_key: &'static str) -> CalendarActivity {
    CalendarActivity { week, label_key }
}

const CALENDARS: &[CropCalendar] = &[CropCalendar {
    crop: "wheat",
    season_key: "calendar.season.rabi",
    duration: "120-150",
    activities: &[
        act(1, "calendar.activity.soil_preparation"),
        act(2, "calendar.activity.sowing"),
        act(6, "calendar.activity.first_irrigation"),
        act(12, "calendar.activity.fertilizer_application"),
        act(18, "calendar.activity.harvest"),
    ],
}];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_lookup_by_week() {
        let cal = calendar_for("wheat");
        assert!(cal.activity_for_week(0).is_none());
        assert_eq!(cal.activity_for_week(1).map(|a| a.week), Some(1));
        assert_eq!(cal.activity_for_week(5).map(|a| a.week), Some(2));
        assert_eq!(cal.activity_for_week(12).map(|a| a.week), Some(12));
        assert_eq!(cal.activity_for_week(40).map(|a| a.week), Some(18));
        assert_eq!(cal.next_activity(6).map(|a| a.week), Some(12));
        assert!(cal.next_activity(18).is_none());
    }

    #[test]
    fn unknown_crop_uses_default_calendar() {
        assert_eq!(calendar_for("barley").crop, "wheat");
    }

    #[test]
    fn activities_are_sorted() {
        for cal in calendars() {
            assert!(cal.activities.windows(2).all(|w| w[0].week < w[1].week), "{}", cal.crop);
        }
    }
}
