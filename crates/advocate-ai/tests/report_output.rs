use advocate_ai::workflows::advocacy::{
    render_batch_summary, render_top_candidates, write_recommendations_csv, AdvocacyPipeline,
    BatchSummary, CustomerDataLoader, ScoringConfig, CONSOLE_CANDIDATE_LIMIT, DEFAULT_TOP_N,
    RECOMMENDATION_COLUMNS,
};

const SAMPLE_CONFIG: &str = include_str!("../../../config/scoring-parameters.json");
const SAMPLE_DATA: &str = include_str!("../../../data/sample-customer-data.csv");

fn sample_run() -> advocate_ai::workflows::advocacy::AdvocacyRun {
    let config = ScoringConfig::from_json_str(SAMPLE_CONFIG).expect("sample config parses");
    let records =
        CustomerDataLoader::from_reader(SAMPLE_DATA.as_bytes()).expect("sample data parses");
    AdvocacyPipeline::new(config).run(&records, DEFAULT_TOP_N)
}

#[test]
fn csv_output_has_header_and_one_row_per_recommendation() {
    let run = sample_run();
    let mut buffer = Vec::new();

    write_recommendations_csv(&mut buffer, &run.recommendations).expect("csv written");

    let output = String::from_utf8(buffer).expect("utf8 output");
    let mut lines = output.lines();
    assert_eq!(
        lines.next(),
        Some("customer_id,company_name,contact_name,advocacy_score,outreach_priority,recommended_approach,expected_value,talking_points")
    );
    assert_eq!(lines.count(), run.recommendations.len());

    let mut reader = csv::Reader::from_reader(output.as_bytes());
    let first = reader
        .records()
        .next()
        .expect("first row")
        .expect("valid row");
    assert_eq!(&first[0], "CUST-005");
    assert_eq!(&first[3], "100.0");
    assert_eq!(&first[4], "Immediate – Executive Outreach");
    assert_eq!(&first[5], "Executive dinner or strategic session");
    assert!(first[7].starts_with("Recognition as top 10% customer success story; "));
}

#[test]
fn empty_recommendations_write_only_the_header() {
    let mut buffer = Vec::new();

    write_recommendations_csv(&mut buffer, &[]).expect("csv written");

    let output = String::from_utf8(buffer).expect("utf8 output");
    assert_eq!(output, format!("{}\n", RECOMMENDATION_COLUMNS.join(",")));
}

#[test]
fn console_rendering_lists_top_candidates() {
    let run = sample_run();

    let rendered = render_top_candidates(&run.recommendations, CONSOLE_CANDIDATE_LIMIT);

    let mut lines = rendered.lines();
    assert_eq!(lines.next(), Some("Top Advocacy Candidates:"));
    assert_eq!(
        lines.next(),
        Some("- Keystone Financial: Score 100.0 (Immediate – Executive Outreach)")
    );
    assert_eq!(rendered.lines().count(), 11);
}

#[test]
fn batch_summary_reports_processed_and_average() {
    let summary = BatchSummary {
        processed: 4,
        average_score: 61.972,
        eligible: 2,
        shortlisted: 2,
    };

    assert_eq!(
        render_batch_summary(&summary),
        "Processed 4 customer records\nAverage advocacy score: 62.0"
    );
}
