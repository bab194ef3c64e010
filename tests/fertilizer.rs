use farm_advisory_toolbox::agronomy::{
    calculate, calculate_from_text, crop_db, try_calculate_from_text, Calculation,
    CalculationRequest, CalculationResult, InvalidInputError, SoilType,
};

fn computed(crop: &str, area: &str, soil: &str) -> CalculationResult {
    match calculate_from_text(crop, area, soil) {
        Calculation::Computed(res) => res,
        Calculation::Pending => panic!("expected a result for {crop}/{area}/{soil}"),
    }
}

#[test]
fn wheat_two_hectares() {
    let res = computed("wheat", "2", "loamy");
    assert_eq!(
        res,
        CalculationResult {
            nitrogen_kg: 240,
            phosphorus_kg: 120,
            potassium_kg: 80,
            urea_kg: 522,
            dap_kg: 261,
            mop_kg: 133,
        }
    );
}

#[test]
fn rice_one_and_a_half_hectares() {
    let res = computed("rice", "1.5", "clay");
    assert_eq!((res.nitrogen_kg, res.phosphorus_kg, res.potassium_kg), (150, 75, 90));
    assert_eq!((res.urea_kg, res.dap_kg, res.mop_kg), (326, 163, 150));
}

#[test]
fn unknown_crop_uses_wheat_table() {
    assert_eq!(computed("banana", "2", "sandy"), computed("wheat", "2", "sandy"));
}

#[test]
fn soil_does_not_change_amounts() {
    let clay = computed("maize", "3", "clay");
    for soil in SoilType::ALL {
        assert_eq!(computed("maize", "3", soil.as_code()), clay);
    }
}

#[test]
fn incomplete_or_malformed_input_stays_pending() {
    assert!(calculate_from_text("wheat", "", "loamy").is_pending());
    assert!(calculate_from_text("wheat", "abc", "loamy").is_pending());
    assert!(calculate_from_text("", "2", "loamy").is_pending());
    assert!(calculate_from_text("wheat", "2", "").is_pending());
    assert!(calculate_from_text("wheat", "inf", "loamy").is_pending());
}

#[test]
fn strict_variant_reports_reason() {
    assert_eq!(
        try_calculate_from_text("wheat", "abc", "loamy"),
        Err(InvalidInputError::MalformedArea("abc".into()))
    );
    assert_eq!(
        try_calculate_from_text("wheat", "1", "peat"),
        Err(InvalidInputError::UnknownSoil("peat".into()))
    );
}

#[test]
fn zero_area_yields_zero_everywhere() {
    let res = computed("rice", "0", "loamy");
    assert_eq!(
        [res.nitrogen_kg, res.phosphorus_kg, res.potassium_kg, res.urea_kg, res.dap_kg, res.mop_kg],
        [0; 6]
    );
}

#[test]
fn carriers_follow_rounded_nutrients() {
    let areas = [0.25, 0.5, 1.0, 1.5, 2.0, 3.3, 7.0, 12.5];
    for crop in crop_db::crops() {
        for area_ha in areas {
            let res = calculate(&CalculationRequest {
                crop: crop.code.into(),
                area_ha,
                soil: SoilType::Loamy,
            });
            assert_eq!(res.nitrogen_kg, (crop.nitrogen_kg_per_ha * area_ha).round() as i64);
            assert_eq!(res.phosphorus_kg, (crop.phosphorus_kg_per_ha * area_ha).round() as i64);
            assert_eq!(res.potassium_kg, (crop.potassium_kg_per_ha * area_ha).round() as i64);
            assert_eq!(res.urea_kg, (res.nitrogen_kg as f64 / 0.46).round() as i64);
            assert_eq!(res.dap_kg, (res.phosphorus_kg as f64 / 0.46).round() as i64);
            assert_eq!(res.mop_kg, (res.potassium_kg as f64 / 0.60).round() as i64);
        }
    }
}

#[test]
fn amounts_grow_with_area() {
    let small = computed("maize", "1", "loamy");
    let large = computed("maize", "2", "loamy");
    assert!(large.nitrogen_kg > small.nitrogen_kg);
    assert!(large.urea_kg > small.urea_kg);
    assert!(large.mop_kg > small.mop_kg);
}
