//! Integration tests for a full directory session.

#[path = "../support/mod.rs"]
mod support;

use std::sync::Arc;
use std::time::Duration;

use support::fixtures::date;
use volunteer_directory::{
    ActiveFilter, BufferNotifier, Directory, DirectoryConfig, FileStorage, InMemoryStorage,
    LoadState, Notice, StaticCatalogSource,
};

fn sample_records() -> Vec<volunteer_directory::Opportunity> {
    StaticCatalogSource::sample().unwrap().records().to_vec()
}

#[tokio::test(start_paused = true)]
async fn start_loads_bookmarks_and_catalog() {
    support::init_tracing();
    let storage = InMemoryStorage::new();
    storage
        .insert_raw("bookmarkedOpportunities", r#"["2","5"]"#)
        .unwrap();

    let config = DirectoryConfig {
        failure_probability: 0.0,
        ..DirectoryConfig::default()
    };
    let source = StaticCatalogSource::from_config(sample_records(), &config);
    let mut directory = Directory::from_config(storage, source, &config);

    let started = tokio::time::Instant::now();
    directory.start().await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(1000));

    assert_eq!(directory.bookmark_count(), 2);
    assert!(matches!(directory.load_state(), LoadState::Loaded(c) if c.len() == 8));

    directory.criteria_mut().set_show_bookmarks_only(true);
    let ids: Vec<&str> = directory.visible().iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "5"]);
}

#[tokio::test(start_paused = true)]
async fn failed_load_can_be_retried() {
    let notifier = Arc::new(BufferNotifier::new());
    let failing = StaticCatalogSource::new(sample_records())
        .with_delay(Duration::from_millis(1000))
        .with_failure_probability(1.0);
    let mut directory =
        Directory::new(InMemoryStorage::new(), failing).with_notifier(notifier.clone());

    let err = directory.start().await.unwrap_err();
    assert!(err.is_transient());
    assert!(directory.visible().is_empty());
    assert!(matches!(directory.load_state(), LoadState::Failed(_)));
    assert!(matches!(
        notifier.notices().as_slice(),
        [Notice::CatalogLoadFailed { .. }]
    ));

    // Bookmarks still work while the catalog is unavailable.
    let change = directory.toggle_bookmark("1");
    assert!(change.persisted);
    assert!(directory.is_bookmarked("1"));
}

#[tokio::test]
async fn seeded_failures_eventually_succeed_on_retry() {
    let source = StaticCatalogSource::new(sample_records())
        .with_failure_probability(0.5)
        .with_seed(7);
    let mut directory = Directory::new(InMemoryStorage::new(), source);

    let mut attempts = 0;
    while directory.reload().await.is_err() {
        attempts += 1;
        assert!(attempts < 64, "retries never succeeded");
    }
    assert_eq!(directory.visible().len(), 8);
}

#[tokio::test]
async fn session_filters_and_summary() {
    let mut directory = Directory::new(
        InMemoryStorage::new(),
        StaticCatalogSource::new(sample_records()),
    );
    directory.start().await.unwrap();

    directory.criteria_mut().set_cause("Environment", true);
    directory.criteria_mut().set_cause("Hunger", true);
    directory.criteria_mut().set_commitment_level("One-time", true);
    directory.criteria_mut().set_start(Some(date(2024, 6, 12)));
    directory.criteria_mut().set_end(Some(date(2024, 6, 22)));

    let ids: Vec<&str> = directory.visible().iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "5"]);

    directory.set_search("TREE");
    let ids: Vec<&str> = directory.visible().iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["5"]);

    assert_eq!(
        directory.active_filters(),
        vec![
            ActiveFilter::Cause("Environment".into()),
            ActiveFilter::Cause("Hunger".into()),
            ActiveFilter::Commitment("One-time".into()),
            ActiveFilter::Search("TREE".into()),
        ]
    );

    directory.clear_filters();
    assert_eq!(directory.visible().len(), 8);
    assert!(directory.active_filters().is_empty());
}

#[tokio::test]
async fn unsaved_removal_is_not_announced() {
    let notifier = Arc::new(BufferNotifier::new());
    let storage = InMemoryStorage::with_quota(4);
    storage
        .insert_raw("bookmarkedOpportunities", r#"["2"]"#)
        .unwrap();
    let mut directory = Directory::new(storage, StaticCatalogSource::new(sample_records()))
        .with_notifier(notifier.clone());
    directory.start().await.unwrap();
    assert!(directory.is_bookmarked("2"));
    notifier.drain();

    let change = directory.toggle_bookmark("2");
    assert!(!change.persisted);
    assert!(!directory.is_bookmarked("2"));
    assert!(matches!(
        notifier.notices().as_slice(),
        [Notice::BookmarksSaveFailed { .. }]
    ));
}

#[tokio::test]
async fn details_lookup() {
    let mut directory = Directory::new(
        InMemoryStorage::new(),
        StaticCatalogSource::new(sample_records()),
    );
    assert!(directory.opportunity("4").is_none());

    directory.start().await.unwrap();
    let opp = directory.opportunity("4").unwrap();
    assert_eq!(opp.organization, "Golden Years Network");
    assert_eq!(opp.image_url_or("/placeholder.svg"), "/placeholder.svg");
}

#[tokio::test]
async fn bookmarks_persist_between_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    {
        let mut directory = Directory::new(
            FileStorage::new(&path),
            StaticCatalogSource::new(sample_records()),
        );
        directory.start().await.unwrap();
        directory.toggle_bookmark("6");
        directory.toggle_bookmark("8");
    }

    let mut directory = Directory::new(
        FileStorage::new(&path),
        StaticCatalogSource::new(sample_records()),
    );
    directory.start().await.unwrap();
    directory.criteria_mut().set_show_bookmarks_only(true);

    let titles: Vec<&str> = directory
        .visible()
        .iter()
        .map(|o| o.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec!["Animal Shelter Dog Walker", "Community Garden Workday"]
    );
}

#[cfg(feature = "emitter")]
#[tokio::test]
async fn emitter_notifier_receives_bookmark_events() {
    use std::sync::Mutex;
    use volunteer_directory::EmitterNotifier;

    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&received);

    let notifier = Arc::new(EmitterNotifier::new());
    notifier.on_notice("bookmarkAdded", move |notice| {
        sink.lock().unwrap().push(notice);
    });

    let mut directory = Directory::new(
        InMemoryStorage::new(),
        StaticCatalogSource::new(sample_records()),
    )
    .with_notifier(notifier.clone());
    directory.start().await.unwrap();
    directory.toggle_bookmark("7");

    // EventEmitter is async, give it time
    std::thread::sleep(Duration::from_millis(50));
    assert_eq!(
        *received.lock().unwrap(),
        vec![Notice::BookmarkAdded {
            id: "7".into(),
            title: "Coding Club Mentor".into()
        }]
    );
}
