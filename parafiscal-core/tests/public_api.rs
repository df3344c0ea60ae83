//! End-to-end checks of the public calculation API and its JSON shape.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use serde_json::json;

use parafiscal_core::{
    IncomeTaxBracket, ParafiscalCalculator, ParafiscalError, ParafiscalRates, RiskLevels,
    SalaryInput, SalaryPeriod, compute,
};

fn reference_rates() -> ParafiscalRates {
    ParafiscalRates::new(
        dec!(0.125),
        dec!(0.16),
        RiskLevels::new([(1, dec!(0.00522)), (2, dec!(0.01044))]).unwrap(),
        vec![IncomeTaxBracket::new(dec!(0), dec!(0))],
    )
}

#[test]
fn reference_scenario_serializes_with_original_field_names() {
    let rates = reference_rates();

    let output = compute(dec!(1000), dec!(4000), 1, &rates).expect("valid scenario");

    assert_eq!(
        serde_json::to_value(output).unwrap(),
        json!({
            "incomeCalculation": {
                "annual": { "salaryInFx": 12000.0, "salaryInLocal": 48000000.0 },
                "monthly": { "salaryInFx": 1000.0, "salaryInLocal": 4000000.0 }
            },
            "parafiscals": {
                "ibc": 4000000.0,
                "healthTax": 500000.0,
                "retirementSavingsTax": 640000.0,
                "professionalRisksTax": 20880.0,
                "socialSecurityTotal": 1160880.0,
                "suggestedMonthlyIncomeTax": 0.0,
                "parafiscalsTotal": 1160880.0
            },
            "netIncome": 2839120.0
        })
    );
}

#[test]
fn calculator_is_reusable_across_inputs() {
    let rates = reference_rates();
    let calculator = ParafiscalCalculator::new(&rates).expect("valid rates");

    let level_one = calculator
        .calculate(&SalaryInput::monthly(dec!(1000), dec!(4000), 1))
        .unwrap();
    let level_two = calculator
        .calculate(&SalaryInput::monthly(dec!(1000), dec!(4000), 2))
        .unwrap();

    assert_eq!(level_one.parafiscals().professional_risks_tax(), dec!(20880));
    assert_eq!(level_two.parafiscals().professional_risks_tax(), dec!(41760));
    assert_eq!(level_one, compute(dec!(1000), dec!(4000), 1, &rates).unwrap());
}

#[test]
fn boundary_inputs_fail_without_partial_results() {
    let rates = reference_rates();

    assert!(matches!(
        compute(dec!(0), dec!(4000), 1, &rates),
        Err(ParafiscalError::InvalidInput { field: "salary_in_fx", .. })
    ));
    assert_eq!(
        compute(dec!(1000), dec!(4000), 99, &rates),
        Err(ParafiscalError::UnknownRiskLevel(99))
    );
}

#[test]
fn float_inputs_feed_the_calculator() {
    let rates = reference_rates();
    let calculator = ParafiscalCalculator::new(&rates).unwrap();

    let input = SalaryInput::from_f64(1000.0, 4000.0, 1, SalaryPeriod::Monthly).unwrap();
    let output = calculator.calculate(&input).unwrap();

    assert_eq!(output.net_income(), dec!(2839120));
    assert!(SalaryInput::from_f64(f64::NAN, 4000.0, 1, SalaryPeriod::Monthly).is_err());
}
