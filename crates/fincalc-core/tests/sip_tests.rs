use fincalc_core::investments::sip::{calculate_sip, sip_yearly_breakdown, SipInput, SipYear};
use fincalc_core::DomainViolation;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn sip(monthly: Decimal, rate: Decimal, years: u32) -> SipInput {
    SipInput {
        monthly_investment: monthly,
        annual_return_percent: rate,
        years,
    }
}

#[test]
fn test_sip_reference_value() {
    let out = calculate_sip(&sip(dec!(10000), dec!(12), 10)).unwrap().result;
    assert_eq!(out.total_investment, dec!(1200000));
    assert!((out.future_value - dec!(2323390.76)).abs() < dec!(0.01));
    assert!((out.total_returns - dec!(1123390.76)).abs() < dec!(0.01));
}

#[test]
fn test_sip_breakdown_grows_every_year() {
    let rows: Vec<SipYear> = sip_yearly_breakdown(&sip(dec!(5000), dec!(11), 15))
        .unwrap()
        .collect();
    assert_eq!(rows.len(), 15);
    for pair in rows.windows(2) {
        assert_eq!(pair[1].year, pair[0].year + 1);
        assert!(pair[1].total_value > pair[0].total_value);
        assert!(pair[1].returns > pair[0].returns);
        assert_eq!(pair[1].investment - pair[0].investment, dec!(60000));
    }
}

#[test]
fn test_sip_breakdown_rows_reconcile() {
    for row in sip_yearly_breakdown(&sip(dec!(2500), dec!(9.5), 8)).unwrap() {
        assert_eq!(row.total_value, row.investment + row.returns);
    }
}

#[test]
fn test_sip_breakdown_can_be_walked_twice() {
    let breakdown = sip_yearly_breakdown(&sip(dec!(1000), dec!(10), 5)).unwrap();
    let totals: Vec<Decimal> = breakdown.clone().map(|r| r.total_value).collect();
    let again: Vec<Decimal> = breakdown.map(|r| r.total_value).collect();
    assert_eq!(totals, again);
}

#[test]
fn test_sip_matches_month_by_month_simulation() {
    let out = calculate_sip(&sip(dec!(1000), dec!(12), 2)).unwrap().result;
    let mut balance = Decimal::ZERO;
    for _ in 0..24 {
        balance = (balance + dec!(1000)) * dec!(1.01);
    }
    assert!((out.future_value - balance).abs() < dec!(0.000001));
}

#[test]
fn test_sip_zero_years_rejected() {
    let err = calculate_sip(&sip(dec!(1000), dec!(12), 0)).unwrap_err();
    assert_eq!(err.violation(), Some(DomainViolation::PeriodMustBePositive));
}
