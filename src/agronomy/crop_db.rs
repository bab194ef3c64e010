//! 작물별 단위 면적당 양분 요구량 테이블을 제공한다.
//! 값은 참고용 권장 시비량이며 토양 검정 결과로 보정해야 한다.

/// 카탈로그에 없는 작물 코드가 들어왔을 때 대신 사용하는 작물.
pub const DEFAULT_CROP: &str = "wheat";

/// 작물 한 종의 양분 요구량 [kg/ha].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropProfile {
    pub code: &'static str,
    pub name: &'static str,
    /// 질소(N) 요구량 [kg/ha]
    pub nitrogen_kg_per_ha: f64,
    /// 인(P) 요구량 [kg/ha]
    pub phosphorus_kg_per_ha: f64,
    /// 칼륨(K) 요구량 [kg/ha]
    pub potassium_kg_per_ha: f64,
}

impl CropProfile {
    pub const fn new(code: &'static str, name: &'static str, n: f64, p: f64, k: f64) -> Self {
        Self {
            code,
            name,
            nitrogen_kg_per_ha: n,
            phosphorus_kg_per_ha: p,
            potassium_kg_per_ha: k,
        }
    }
}

pub fn crops() -> &'static [CropProfile] {
    CROPS
}

pub fn find_crop(code: &str) -> Option<&'static CropProfile> {
    let code = code.trim();
    CROPS
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code) || c.name.eq_ignore_ascii_case(code))
}

/// 기본 작물 프로파일. 카탈로그가 상수이므로 항상 존재한다.
pub fn default_crop() -> &'static CropProfile {
    &CROPS[0]
}

/// 작물 코드를 조회하고 없으면 기본 작물(wheat)로 대체한다.
pub fn profile_or_default(code: &str) -> &'static CropProfile {
    match find_crop(code) {
        Some(profile) => profile,
        None => {
            tracing::debug!(crop = code, fallback = DEFAULT_CROP, "unknown crop, using default profile");
            default_crop()
        }
    }
}

// 첫 항목은 DEFAULT_CROP 이어야 한다.
const CROPS: &[CropProfile] = &[
    CropProfile::new("wheat", "Wheat", 120.0, 60.0, 40.0),
    CropProfile::new("rice", "Rice", 100.0, 50.0, 60.0),
    CropProfile::new("maize", "Maize", 150.0, 75.0, 50.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_crop_is_first_entry() {
        assert_eq!(default_crop().code, DEFAULT_CROP);
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        let maize = find_crop("  Maize ").expect("maize");
        assert_eq!(maize.nitrogen_kg_per_ha, 150.0);
        assert_eq!(maize.phosphorus_kg_per_ha, 75.0);
        assert_eq!(maize.potassium_kg_per_ha, 50.0);
    }

    #[test]
    fn unknown_crop_falls_back_to_wheat() {
        assert!(find_crop("sorghum").is_none());
        assert_eq!(profile_or_default("sorghum").code, "wheat");
        assert_eq!(profile_or_default("").code, "wheat");
    }
}
