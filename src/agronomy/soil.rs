use serde::{Deserialize, Serialize};

/// 시비량 계산 화면에서 선택받는 토양 분류.
///
/// 현재 계산식은 토양 분류를 사용하지 않고 요청에 기록만 한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Clay,
    Loamy,
    Sandy,
}

impl SoilType {
    pub const ALL: [SoilType; 3] = [SoilType::Clay, SoilType::Loamy, SoilType::Sandy];

    /// 코드 문자열을 해석한다. 대소문자와 앞뒤 공백은 무시한다.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "clay" => Some(SoilType::Clay),
            "loamy" | "loam" => Some(SoilType::Loamy),
            "sandy" | "sand" => Some(SoilType::Sandy),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            SoilType::Clay => "clay",
            SoilType::Loamy => "loamy",
            SoilType::Sandy => "sandy",
        }
    }

    /// 번역 키 (`soil.clay` 등).
    pub fn label_key(&self) -> &'static str {
        match self {
            SoilType::Clay => "soil.clay",
            SoilType::Loamy => "soil.loamy",
            SoilType::Sandy => "soil.sandy",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for soil in SoilType::ALL {
            assert_eq!(SoilType::from_code(soil.as_code()), Some(soil));
        }
        assert_eq!(SoilType::from_code(" LOAMY "), Some(SoilType::Loamy));
        assert_eq!(SoilType::from_code("silt"), None);
        assert_eq!(SoilType::from_code(""), None);
    }
}
