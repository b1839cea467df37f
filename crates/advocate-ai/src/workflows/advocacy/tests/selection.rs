use super::common::*;
use crate::workflows::advocacy::EligibilityCriteria;

#[test]
fn standard_criteria_match_program_thresholds() {
    let criteria = EligibilityCriteria::default();
    assert_eq!(criteria.minimum_nps, 8.0);
    assert_eq!(criteria.minimum_tenure_months, 6.0);
    assert_eq!(criteria.minimum_expansion, 0.0);
    assert_eq!(criteria.minimum_support_sentiment, 0.7);
}

#[test]
fn each_failed_gate_excludes_regardless_of_score() {
    let mut low_nps = customer("C-400");
    low_nps.nps_score = Some(7.0);
    let mut new_customer = customer("C-401");
    new_customer.months_as_customer = Some(5.0);
    let mut contracting = customer("C-402");
    contracting.current_arr = Some(40_000.0);
    let mut unhappy = customer("C-403");
    unhappy.support_tickets_resolved = Some(2.0);
    let mut unknown_tenure = customer("C-404");
    unknown_tenure.months_as_customer = None;

    let scored: Vec<_> = [low_nps, new_customer, contracting, unhappy, unknown_tenure]
        .into_iter()
        .map(|record| scored_with_score(record, 100.0))
        .collect();

    let shortlist = pipeline().shortlist(&scored, 50);

    assert!(shortlist.is_empty(), "got {shortlist:?}");
}

#[test]
fn boundary_values_are_eligible() {
    let mut record = customer("C-410");
    record.nps_score = Some(8.0);
    record.months_as_customer = Some(6.0);
    record.current_arr = Some(50_000.0);
    record.initial_arr = Some(50_000.0);
    record.support_tickets_resolved = Some(7.0);
    record.support_tickets_total = Some(9.0);

    let shortlist = pipeline().shortlist(&[scored_with_score(record, 10.0)], 50);

    assert_eq!(shortlist.len(), 1);
}

#[test]
fn shortlist_orders_by_descending_score() {
    let scored = vec![
        scored_with_score(customer("C-420"), 40.0),
        scored_with_score(customer("C-421"), 95.5),
        scored_with_score(customer("C-422"), 71.0),
    ];

    let shortlist = pipeline().shortlist(&scored, 50);

    let ids: Vec<&str> = shortlist
        .iter()
        .map(|record| record.customer.customer_id.as_str())
        .collect();
    assert_eq!(ids, vec!["C-421", "C-422", "C-420"]);
}

#[test]
fn ties_break_on_customer_id() {
    let scored = vec![
        scored_with_score(customer("C-432"), 80.0),
        scored_with_score(customer("C-430"), 80.0),
        scored_with_score(customer("C-431"), 80.0),
        scored_with_score(customer("C-433"), 90.0),
    ];

    let shortlist = pipeline().shortlist(&scored, 3);

    let ids: Vec<&str> = shortlist
        .iter()
        .map(|record| record.customer.customer_id.as_str())
        .collect();
    assert_eq!(ids, vec!["C-433", "C-430", "C-431"]);
}

#[test]
fn returns_all_eligible_when_fewer_than_top_n() {
    let mut ineligible = customer("C-441");
    ineligible.nps_score = Some(3.0);
    let scored = vec![
        scored_with_score(customer("C-440"), 20.0),
        scored_with_score(ineligible, 99.0),
    ];

    let shortlist = pipeline().shortlist(&scored, 50);

    assert_eq!(shortlist.len(), 1);
    assert_eq!(shortlist[0].customer.customer_id, "C-440");
}

#[test]
fn gates_read_imputed_values() {
    let mut blank_nps = customer("C-450");
    blank_nps.nps_score = None;
    let batch = vec![customer("C-451"), customer("C-452"), blank_nps];

    let scored = pipeline().score(&batch);
    let shortlist = pipeline().shortlist(&scored, 50);

    assert_eq!(scored[2].features.nps_score, 9.0);
    assert_eq!(shortlist.len(), 3);
}
