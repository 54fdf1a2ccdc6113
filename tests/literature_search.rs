use anyhow::Result;
use mockito::Matcher;
use qualiscout::config::LiteratureSettings;
use qualiscout::literature::{LiteratureSource, RetrievalWarningReason};
use qualiscout::CrossrefClient;
use serde_json::json;

fn settings_for(server: &mockito::ServerGuard) -> LiteratureSettings {
    LiteratureSettings {
        endpoint: format!("{}/works", server.url()),
        timeout_secs: 5,
        ..Default::default()
    }
}

#[test]
fn works_are_normalized_in_service_order() -> Result<()> {
    let mut server = mockito::Server::new();
    let body = json!({
        "message": {
            "items": [
                {
                    "title": ["Water treatment in rural areas"],
                    "DOI": "10.1000/one",
                    "published-print": {"date-parts": [[2021, 3]]},
                },
                {
                    "title": ["Decentralized sanitation"],
                    "DOI": "10.1000/two",
                    "issued": {"date-parts": [[2019]]},
                },
                {
                    "title": ["Undated survey"],
                    "DOI": "10.1000/three",
                },
            ]
        }
    });
    let mock = server
        .mock("GET", "/works")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "water treatment".into()),
            Matcher::UrlEncoded("rows".into(), "5".into()),
            Matcher::UrlEncoded("sort".into(), "relevance".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create();

    let client = CrossrefClient::new(&settings_for(&server))?;
    let outcome = client.search("water treatment", 5);

    mock.assert();
    assert!(outcome.warning.is_none());
    assert_eq!(outcome.records.len(), 3);
    let years: Vec<_> = outcome.records.iter().map(|r| r.year).collect();
    assert_eq!(years, vec![Some(2021), Some(2019), None]);
    assert_eq!(
        outcome.records[0].link.as_deref(),
        Some("https://doi.org/10.1000/one")
    );
    // Service order is preserved; the retriever must not re-sort.
    assert_eq!(outcome.records[1].title, "Decentralized sanitation");
    Ok(())
}

#[test]
fn empty_query_short_circuits_without_a_network_call() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/works").expect(0).create();

    let client = CrossrefClient::new(&settings_for(&server))?;
    let outcome = client.search("   ", 10);

    mock.assert();
    assert!(outcome.records.is_empty());
    assert!(outcome.warning.is_none());
    Ok(())
}

#[test]
fn malformed_body_degrades_to_empty_with_warning() -> Result<()> {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/works")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("this is not json")
        .create();

    let client = CrossrefClient::new(&settings_for(&server))?;
    let outcome = client.search("water", 5);

    assert!(outcome.records.is_empty());
    let warning = outcome.warning.expect("expected a warning");
    assert_eq!(warning.reason, RetrievalWarningReason::MalformedBody);
    Ok(())
}

#[test]
fn server_error_degrades_to_empty_with_warning() -> Result<()> {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/works")
        .match_query(Matcher::Any)
        .with_status(503)
        .create();

    let client = CrossrefClient::new(&settings_for(&server))?;
    let outcome = client.search("water", 5);

    assert!(outcome.records.is_empty());
    let warning = outcome.warning.expect("expected a warning");
    assert_eq!(warning.reason, RetrievalWarningReason::BadStatus);
    Ok(())
}

#[test]
fn unreachable_endpoint_degrades_to_empty_with_warning() -> Result<()> {
    let settings = LiteratureSettings {
        endpoint: "http://127.0.0.1:9/works".to_string(),
        timeout_secs: 1,
        ..Default::default()
    };
    let client = CrossrefClient::new(&settings)?;
    let outcome = client.search("water", 5);

    assert!(outcome.records.is_empty());
    let warning = outcome.warning.expect("expected a warning");
    assert_eq!(warning.reason, RetrievalWarningReason::RequestFailed);
    Ok(())
}

#[test]
fn body_without_items_is_zero_results_not_a_warning() -> Result<()> {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/works")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({"message": {}}).to_string())
        .create();

    let client = CrossrefClient::new(&settings_for(&server))?;
    let outcome = client.search("water", 5);

    assert!(outcome.records.is_empty());
    assert!(outcome.warning.is_none());
    Ok(())
}
