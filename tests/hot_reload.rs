//! Config watcher integration test.

use std::fs;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use logkeeper::{ConfigWatcher, LevelFilter, Registry};

#[test]
fn test_watcher_reapplies_on_change() {
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("loggers.json");
    fs::write(&cfg_path, r#"{"loggers":{"svc":{"level":"info"}}}"#).unwrap();

    let registry = Arc::new(Registry::new());
    registry.init(&cfg_path).unwrap();

    let logger = registry.get("svc");
    assert_eq!(logger.level(), LevelFilter::INFO);

    let _watcher = ConfigWatcher::new(&cfg_path, registry.clone())
        .run()
        .unwrap();

    // Give the watcher time to arm before touching the file.
    thread::sleep(Duration::from_millis(250));
    fs::write(&cfg_path, r#"{"loggers":{"svc":{"level":"error"}}}"#).unwrap();

    let deadline = Instant::now() + Duration::from_secs(5);
    while logger.level() != LevelFilter::ERROR && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(50));
    }

    // The pre-reload handle observes the new level without re-fetching.
    assert_eq!(logger.level(), LevelFilter::ERROR);
}
