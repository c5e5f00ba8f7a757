//! End-to-end: load a dataset from disk or HTTP, then select regions.

use chrono_tz::America::New_York;
use human_pulse::drivers::SelectionKind;
use human_pulse::{DataSource, Emotion, Pulse, PulseError};
use reqwest::Client;
use std::io::Write;
use std::path::PathBuf;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sentiment_results.json")
}

fn fixture_bytes() -> Vec<u8> {
    std::fs::read(fixture_path()).unwrap()
}

async fn loaded() -> Pulse {
    Pulse::load(&Client::new(), &DataSource::File(fixture_path()), New_York).await
}

#[tokio::test]
async fn narratives_from_fixture() {
    let pulse = loaded().await;
    assert!(pulse.is_ready());

    let avg = *pulse.session().unwrap().averages();
    assert_eq!(avg.anxiety, 50.0);
    assert_eq!(avg.hope, 40.0);
    assert_eq!(avg.stress, 31.0);

    assert_eq!(
        pulse.select("Ohio").unwrap().narrative,
        "Anxiety SPIKED 12 points in the last 6 hours. 22 pts more anxious than national average. \"layoffs\" searches are extremely high."
    );
    assert_eq!(
        pulse.select("Utah").unwrap().narrative,
        "Emotional levels stable. 10 pts calmer than national average."
    );
    assert_eq!(
        pulse.select("Maine").unwrap().narrative,
        "Anxiety dropped 8 points - cooling down. 12 pts calmer than national average."
    );
}

#[tokio::test]
async fn report_details_for_ohio() {
    let pulse = loaded().await;
    let report = pulse.select("Ohio").unwrap();

    assert_eq!(report.velocity.indicator(), "↑ Rising (+12 pts, +20%)");
    assert_eq!(report.comparison.anxiety_delta, 22.0);
    assert_eq!(report.comparison.hope_delta, -10.0);
    assert_eq!(report.trending.len(), 3);
    assert_eq!(report.trending[2].name, "taxes");
    assert_eq!(
        report.observation.unwrap().text(),
        "Last updated: 10/18/2025, 8:06:19 AM\nData collected over 6.0 hours"
    );
}

#[tokio::test]
async fn breakdowns_match_and_fall_back() {
    let pulse = loaded().await;
    let session = pulse.session().unwrap();

    let anxiety = session.breakdown("Ohio", Emotion::Anxiety, 5).unwrap();
    assert_eq!(anxiety.kind, SelectionKind::Matched);
    let names: Vec<&str> = anxiety.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["layoffs", "inflation"]);
    assert_eq!(anxiety.entries[1].intensity, "🟡 Medium");

    let maine = session.breakdown("Maine", Emotion::Anxiety, 5).unwrap();
    assert_eq!(maine.kind, SelectionKind::Fallback);
    assert_eq!(maine.entries[0].name, "taxes");

    let utah = session.breakdown("Utah", Emotion::Hope, 5).unwrap();
    assert_eq!(utah.kind, SelectionKind::Unavailable);
}

#[tokio::test]
async fn unknown_region_is_a_no_op() {
    let pulse = loaded().await;
    assert!(matches!(pulse.select("Atlantis"), Err(PulseError::MissingRegion(_))));
}

#[tokio::test]
async fn loads_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sentiment_results.json"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(fixture_bytes()))
        .mount(&server)
        .await;

    let source = DataSource::parse(&format!("{}/sentiment_results.json", server.uri()));
    assert!(matches!(source, DataSource::Http(_)));

    let pulse = Pulse::load(&Client::new(), &source, New_York).await;
    assert_eq!(pulse.session().unwrap().region_names().count(), 3);
}

#[tokio::test]
async fn http_error_leaves_pulse_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let source = DataSource::parse(&format!("{}/sentiment_results.json", server.uri()));
    let pulse = Pulse::load(&Client::new(), &source, New_York).await;

    assert!(matches!(pulse, Pulse::Failed(PulseError::DatasetLoad { .. })));
    assert!(matches!(pulse.select("Ohio"), Err(PulseError::NotLoaded(_))));
}

#[tokio::test]
async fn empty_dataset_fails_to_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{ "state_data": {}, "last_updated": null }"#).unwrap();

    let pulse = Pulse::load(&Client::new(), &DataSource::File(file.path().to_path_buf()), New_York).await;
    assert!(matches!(pulse, Pulse::Failed(PulseError::EmptyDataset)));
}

#[tokio::test]
async fn reload_recovers_and_detects_change() {
    let client = Client::new();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{ broken").unwrap();
    let source = DataSource::File(file.path().to_path_buf());

    let mut pulse = Pulse::load(&client, &source, New_York).await;
    assert!(!pulse.is_ready());

    std::fs::write(file.path(), fixture_bytes()).unwrap();
    assert!(pulse.reload(&client, &source, New_York).await.unwrap());
    assert!(pulse.is_ready());

    // same bytes again: averages kept
    assert!(!pulse.reload(&client, &source, New_York).await.unwrap());

    // a failed reload keeps the previous session
    std::fs::write(file.path(), b"nope").unwrap();
    assert!(pulse.reload(&client, &source, New_York).await.is_err());
    assert!(pulse.select("Ohio").is_ok());
}
