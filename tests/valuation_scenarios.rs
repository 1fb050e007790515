use approx::assert_relative_eq;

use biz_valuation::app::pipeline::{run_valuation, valuate};
use biz_valuation::domain::{
    Benchmarks, DcfInput, FinancialInput, Locale, MethodId, RateSource, Trace, ValuationRequest,
};
use biz_valuation::io::parse_request;
use biz_valuation::report::format_result;

fn request(method: MethodId, financials: FinancialInput) -> ValuationRequest {
    ValuationRequest {
        company_name: "Acme Trading".to_string(),
        country_code: "SA".to_string(),
        sector_id: "retail".to_string(),
        method,
        currency_code: "SAR".to_string(),
        financials,
    }
}

fn dcf(years: u32, fcf: &[f64], rate: f64, growth: f64) -> FinancialInput {
    FinancialInput {
        dcf: Some(DcfInput {
            projection_years: Some(years),
            projected_fcf: fcf.iter().copied().map(Some).collect(),
            discount_rate: Some(rate),
            terminal_growth_rate: Some(growth),
        }),
        ..FinancialInput::default()
    }
}

#[test]
fn book_value_is_assets_minus_liabilities() {
    let req = request(
        MethodId::Book,
        FinancialInput {
            total_assets: Some(2_000_000.0),
            total_liabilities: Some(500_000.0),
            ..FinancialInput::default()
        },
    );
    let result = valuate(&req).unwrap();
    assert_eq!(result.estimated_value, 1_500_000.0);
    assert!(!result.trace.floor().applied);
}

#[test]
fn negative_book_value_is_floored() {
    let req = request(
        MethodId::Book,
        FinancialInput {
            total_assets: Some(100_000.0),
            total_liabilities: Some(400_000.0),
            ..FinancialInput::default()
        },
    );
    let result = valuate(&req).unwrap();
    assert_eq!(result.estimated_value, 1_000.0);
    assert!(result.trace.floor().applied);
}

#[test]
fn tiny_cash_flows_hit_the_dcf_floor() {
    let result = valuate(&request(MethodId::Dcf, dcf(1, &[1.0], 50.0, 40.0))).unwrap();
    assert_eq!(result.estimated_value, 50_000.0);
    assert!(result.trace.floor().applied);

    let used = result.dcf_inputs_used.unwrap();
    assert_eq!(used.projection_years, Some(1));
    assert_eq!(used.discount_rate, Some(50.0));
}

#[test]
fn gordon_growth_terminal_value_is_exact() {
    let result = valuate(&request(MethodId::Dcf, dcf(2, &[100_000.0, 110_000.0], 10.0, 2.0))).unwrap();
    let Trace::Dcf(t) = &result.trace else {
        panic!("expected a DCF trace");
    };
    assert_relative_eq!(t.terminal_value, 110_000.0 * 1.02 / 0.08, max_relative = 1e-12);
    assert_relative_eq!(t.pv_terminal_value, t.terminal_value / 1.21, max_relative = 1e-12);
    let pv_sum = 100_000.0 / 1.1 + 110_000.0 / 1.21;
    assert_relative_eq!(t.discounted_ev, (pv_sum + t.pv_terminal_value) * 0.8, max_relative = 1e-12);
    assert_eq!(result.estimated_value, t.final_value);
}

#[test]
fn sector_growth_benchmark_replaces_terminal_growth() {
    let mut financials = dcf(1, &[100_000.0], 12.0, 2.0);
    financials.benchmarks = Benchmarks {
        sector_growth_rate: Some(4.0),
        ..Benchmarks::default()
    };
    let result = valuate(&request(MethodId::Dcf, financials)).unwrap();
    let Trace::Dcf(t) = &result.trace else {
        panic!("expected a DCF trace");
    };
    assert_eq!(t.terminal_growth_source, RateSource::SectorGrowthOverride);
    assert_relative_eq!(t.terminal_value, 100_000.0 * 1.04 / 0.08, max_relative = 1e-12);
    assert!(result.explanation.en.contains("User-supplied sector growth rate"));
    assert_eq!(
        result.benchmarks_used.and_then(|b| b.sector_growth_rate),
        Some(4.0)
    );
}

#[test]
fn comps_with_user_ev_ebitda_multiple() {
    let req = request(
        MethodId::Comps,
        FinancialInput {
            ebitda: Some(250_000.0),
            benchmarks: Benchmarks {
                industry_ev_ebitda_multiple: Some(6.0),
                ..Benchmarks::default()
            },
            ..FinancialInput::default()
        },
    );
    let result = valuate(&req).unwrap();
    assert_eq!(result.estimated_value, 1_500_000.0);
    assert!(result.explanation.en.contains("EV/EBITDA multiple of"));
}

#[test]
fn multiples_default_to_point_eight_times_revenue() {
    let req = request(
        MethodId::Multiples,
        FinancialInput {
            revenue: Some(1_000_000.0),
            ..FinancialInput::default()
        },
    );
    assert_eq!(valuate(&req).unwrap().estimated_value, 800_000.0);
}

#[test]
fn same_request_gives_identical_results() {
    let req = request(MethodId::Dcf, dcf(3, &[90_000.0, 95_000.0, 99_000.0], 11.0, 2.5));
    assert_eq!(valuate(&req).unwrap(), valuate(&req).unwrap());
}

#[test]
fn figures_do_not_depend_on_display_language() {
    let req = request(MethodId::Dcf, dcf(2, &[70_000.0, 80_000.0], 9.0, 3.0));
    let en = run_valuation(req.clone(), Locale::En).unwrap();
    let ar = run_valuation(req, Locale::Ar).unwrap();
    assert_eq!(en.result, ar.result);
}

#[test]
fn arabic_output_uses_arabic_digits() {
    let req = request(MethodId::Dcf, dcf(2, &[70_000.0, 80_000.0], 9.0, 3.0));
    let result = valuate(&req).unwrap();
    assert!(!result.explanation.ar.chars().any(|c| c.is_ascii_digit()));
    assert!(!result.summary.ar.chars().any(|c| c.is_ascii_digit()));

    let report = format_result(&req, &result, Locale::Ar, Some(30));
    assert!(report.contains("٧٠٬٠٠٠"));
    assert!(!report.contains("70,000"));
}

#[test]
fn invalid_requests_are_rejected_before_computing() {
    let mut req = request(MethodId::Book, FinancialInput::default());
    req.financials.total_assets = Some(1_000.0);
    let err = run_valuation(req, Locale::En).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn request_json_round_trips_through_the_pipeline() {
    let json = r#"{
        "companyName": "Acme",
        "country": "AE",
        "sector": "technology",
        "valuationMethod": "book",
        "currency": "AED",
        "financials": { "totalAssets": 900000, "totalLiabilities": 100000 }
    }"#;
    let req = parse_request(json.as_bytes()).unwrap();
    let result = valuate(&req).unwrap();
    assert_eq!(result.estimated_value, 800_000.0);
    assert_eq!(result.currency_code, "AED");
}
