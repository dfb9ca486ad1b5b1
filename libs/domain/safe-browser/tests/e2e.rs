// [libs/domain/safe-browser/tests/e2e.rs]
//! Escenario de extremo a extremo (spec.md §8, escenario 5), usando un
//! sobre de fixture sintético en lugar del protobuf real del servicio
//! (ver `tests/fixtures/batch_get.json` y DESIGN.md).

use std::sync::Arc;

use aegis_infra_remote_api::{FixtureSafeBrowsingApi, SafeBrowsingApi};
use aegis_safe_browser::{with_api_client, SafeBrowser};

fn fixture_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/batch_get.json")
}

#[tokio::test]
async fn end_to_end_check_urls_matches_the_documented_scenario() {
    let api: Arc<dyn SafeBrowsingApi> =
        Arc::new(FixtureSafeBrowsingApi::load(fixture_path()).expect("fixture must load"));

    let browser = SafeBrowser::new([with_api_client(api)])
        .await
        .expect("construction with a working fixture must succeed");

    let urls = vec![
        "https://testsafebrowsing.appspot.com/s/phishing.html".to_string(),
        "https://example.com".to_string(),
        "https://sub.testsafebrowsing.appspot.com/s/phishing.html".to_string(),
        "https://sub.testsafebrowsing.appspot.com/s/".to_string(),
    ];

    let results = browser.check_urls(&urls).expect("check_urls must succeed");

    assert!(!results[0].safe, "exact phishing page must be flagged unsafe");
    assert!(results[1].safe, "unrelated domain must be safe");
    assert!(!results[2].safe, "phishing page under a subdomain must be flagged unsafe");
    assert!(results[3].safe, "a safe sibling path must remain safe");
}

#[tokio::test]
async fn concurrent_check_urls_observe_a_consistent_snapshot_during_refresh() {
    let api: Arc<dyn SafeBrowsingApi> =
        Arc::new(FixtureSafeBrowsingApi::load(fixture_path()).expect("fixture must load"));

    let browser = Arc::new(
        SafeBrowser::new([with_api_client(api)])
            .await
            .expect("construction with a working fixture must succeed"),
    );

    let mut handles = Vec::new();
    for _ in 0..100 {
        let browser = Arc::clone(&browser);
        handles.push(tokio::spawn(async move {
            browser
                .check_urls(&["https://testsafebrowsing.appspot.com/s/phishing.html".to_string()])
                .expect("check_urls must never panic under concurrent access")
        }));
    }

    for handle in handles {
        let results = handle.await.expect("task must not panic");
        assert!(!results[0].safe);
    }
}
