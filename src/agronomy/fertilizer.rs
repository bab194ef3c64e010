//! 작물·면적으로부터 양분(N, P, K) 요구량과 상용 비료(Urea, DAP, MOP) 투입량을 계산한다.

use serde::Serialize;

use super::crop_db::{self, CropProfile};
use super::soil::SoilType;

/// 양분을 공급하는 상용 비료(캐리어)를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Carrier {
    /// 요소, 질소 46%
    Urea,
    /// 인산이암모늄, 인 46%
    Dap,
    /// 염화칼륨, 칼륨 60%
    Mop,
}

impl Carrier {
    pub const ALL: [Carrier; 3] = [Carrier::Urea, Carrier::Dap, Carrier::Mop];

    /// 제품 질량 대비 보증 양분 함량(0~1].
    pub const fn nutrient_fraction(&self) -> f64 {
        match self {
            Carrier::Urea => 0.46,
            Carrier::Dap => 0.46,
            Carrier::Mop => 0.60,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Carrier::Urea => "Urea",
            Carrier::Dap => "DAP",
            Carrier::Mop => "MOP",
        }
    }

    /// 양분 질량[kg]을 제품 질량[kg]으로 환산한다. 반올림 전 값.
    pub fn product_mass_kg(&self, nutrient_kg: f64) -> f64 {
        nutrient_kg / self.nutrient_fraction()
    }
}

/// 시비량 계산 요청.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRequest {
    pub crop: String,
    /// 재배 면적 [ha]
    pub area_ha: f64,
    /// 기록용. 계산식에는 반영하지 않는다.
    pub soil: SoilType,
}

/// 계산 결과. 모든 질량은 kg 단위로 가장 가까운 정수로 반올림한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalculationResult {
    pub nitrogen_kg: i64,
    pub phosphorus_kg: i64,
    pub potassium_kg: i64,
    pub urea_kg: i64,
    pub dap_kg: i64,
    pub mop_kg: i64,
}

/// 텍스트 입력 기반 계산의 상태. 입력이 덜 채워졌으면 `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calculation {
    Pending,
    Computed(CalculationResult),
}

impl Calculation {
    pub fn result(&self) -> Option<&CalculationResult> {
        match self {
            Calculation::Pending => None,
            Calculation::Computed(result) => Some(result),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Calculation::Pending)
    }
}

/// 입력 검증 실패 사유.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInputError {
    #[error("crop type is missing")]
    MissingCrop,
    #[error("field area is missing")]
    MissingArea,
    #[error("field area is not a finite number: {0}")]
    MalformedArea(String),
    #[error("soil type is missing")]
    MissingSoil,
    #[error("unsupported soil type: {0}")]
    UnknownSoil(String),
}

/// 요청을 계산한다. 알 수 없는 작물은 기본 작물(wheat)로 대체하며 실패하지 않는다.
///
/// 면적이 0 이하이면 0 또는 음수 질량이 나온다. 범위 제한은 입력 화면의 몫이다.
pub fn calculate(request: &CalculationRequest) -> CalculationResult {
    let profile = crop_db::profile_or_default(&request.crop);
    let result = compute(profile, request.area_ha);
    tracing::debug!(
        crop = profile.code,
        area_ha = request.area_ha,
        soil = request.soil.as_code(),
        ?result,
        "fertilizer recommendation computed"
    );
    result
}

fn compute(profile: &CropProfile, area_ha: f64) -> CalculationResult {
    let nitrogen = round_kg(profile.nitrogen_kg_per_ha * area_ha);
    let phosphorus = round_kg(profile.phosphorus_kg_per_ha * area_ha);
    let potassium = round_kg(profile.potassium_kg_per_ha * area_ha);
    CalculationResult {
        nitrogen_kg: nitrogen,
        phosphorus_kg: phosphorus,
        potassium_kg: potassium,
        urea_kg: round_kg(Carrier::Urea.product_mass_kg(nitrogen as f64)),
        dap_kg: round_kg(Carrier::Dap.product_mass_kg(phosphorus as f64)),
        mop_kg: round_kg(Carrier::Mop.product_mass_kg(potassium as f64)),
    }
}

/// 0.5는 0에서 멀어지는 방향으로 반올림한다.
fn round_kg(value: f64) -> i64 {
    value.round() as i64
}

/// 화면 입력(문자열)을 검증해 요청을 만든다.
pub fn parse_request(
    crop: &str,
    area_text: &str,
    soil: &str,
) -> Result<CalculationRequest, InvalidInputError> {
    let crop = crop.trim();
    if crop.is_empty() {
        return Err(InvalidInputError::MissingCrop);
    }
    let area_text = area_text.trim();
    if area_text.is_empty() {
        return Err(InvalidInputError::MissingArea);
    }
    let area_ha = area_text
        .parse::<f64>()
        .ok()
        .filter(|a| a.is_finite())
        .ok_or_else(|| InvalidInputError::MalformedArea(area_text.to_string()))?;
    if soil.trim().is_empty() {
        return Err(InvalidInputError::MissingSoil);
    }
    let soil =
        SoilType::from_code(soil).ok_or_else(|| InvalidInputError::UnknownSoil(soil.trim().to_string()))?;
    Ok(CalculationRequest {
        crop: crop.to_string(),
        area_ha,
        soil,
    })
}

/// 검증 실패 사유까지 필요한 호출자를 위한 엄격한 버전.
pub fn try_calculate_from_text(
    crop: &str,
    area_text: &str,
    soil: &str,
) -> Result<CalculationResult, InvalidInputError> {
    let request = parse_request(crop, area_text, soil)?;
    Ok(calculate(&request))
}

/// 입력이 모두 채워져 있으면 계산하고, 아니면 `Pending`을 돌려준다.
pub fn calculate_from_text(crop: &str, area_text: &str, soil: &str) -> Calculation {
    match try_calculate_from_text(crop, area_text, soil) {
        Ok(result) => Calculation::Computed(result),
        Err(reason) => {
            tracing::debug!(%reason, "fertilizer input incomplete");
            Calculation::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(crop: &str, area_ha: f64) -> CalculationRequest {
        CalculationRequest {
            crop: crop.into(),
            area_ha,
            soil: SoilType::Loamy,
        }
    }

    #[test]
    fn fractions_are_within_unit_interval() {
        for c in Carrier::ALL {
            let f = c.nutrient_fraction();
            assert!(f > 0.0 && f <= 1.0, "{} fraction {f}", c.name());
        }
    }

    #[test]
    fn maize_one_hectare() {
        let res = calculate(&request("maize", 1.0));
        assert_eq!(res.nitrogen_kg, 150);
        assert_eq!(res.phosphorus_kg, 75);
        assert_eq!(res.potassium_kg, 50);
        assert_eq!(res.urea_kg, 326);
        assert_eq!(res.dap_kg, 163);
        assert_eq!(res.mop_kg, 83);
    }

    #[test]
    fn ties_round_away_from_zero() {
        // 40 kg/ha * 1/16 ha = 2.5 kg
        let res = calculate(&request("wheat", 0.0625));
        assert_eq!(res.potassium_kg, 3);
        let res = calculate(&request("wheat", -0.0625));
        assert_eq!(res.potassium_kg, -3);
    }

    #[test]
    fn zero_and_negative_area_do_not_panic() {
        let zero = calculate(&request("rice", 0.0));
        assert_eq!(zero.nitrogen_kg, 0);
        assert_eq!(zero.mop_kg, 0);
        let neg = calculate(&request("rice", -1.0));
        assert_eq!(neg.nitrogen_kg, -100);
        assert_eq!(neg.urea_kg, -217);
    }

    #[test]
    fn parse_request_reports_reason() {
        assert_eq!(parse_request("", "1", "clay"), Err(InvalidInputError::MissingCrop));
        assert_eq!(parse_request("rice", "  ", "clay"), Err(InvalidInputError::MissingArea));
        assert_eq!(
            parse_request("rice", "NaN", "clay"),
            Err(InvalidInputError::MalformedArea("NaN".into()))
        );
        assert_eq!(parse_request("rice", "1", ""), Err(InvalidInputError::MissingSoil));
        assert_eq!(
            parse_request("rice", "1", "peat"),
            Err(InvalidInputError::UnknownSoil("peat".into()))
        );
        let ok = parse_request(" rice ", " 2.5 ", "Sandy").expect("valid request");
        assert_eq!(ok.crop, "rice");
        assert_eq!(ok.area_ha, 2.5);
        assert_eq!(ok.soil, SoilType::Sandy);
    }
}
