use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use vcfeed::{FeedError, HyperparameterStore, Hyperparameters};

fn tmp_path(name: &str) -> PathBuf {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("{name}_{unique}.json"))
}

#[test]
fn defaults_match_canonical_values() {
    let store = HyperparameterStore::new();
    let record = store.get();
    assert_eq!(record.lr, 2e-3);
    assert_eq!(record.alpha, 1.0);
    assert_eq!(record.beta, 1e-4);
    assert_eq!(record.max_step, 5);
    assert_eq!(record.max_grad_norm, 2.0);
    assert_eq!(record.batch_size, 32);
    assert_eq!(record.iterations, 100_000);
}

#[test]
fn dump_then_load_round_trips() {
    let src = tmp_path("hps_src");
    fs::write(
        &src,
        r#"{"lr":0.01,"alpha":0.5,"beta":0.001,"max_step":3,"max_grad_norm":1.0,"batch_size":8,"iterations":500}"#,
    )
    .unwrap();
    let mut store = HyperparameterStore::new();
    store.load(&src).unwrap();

    let dst = tmp_path("hps_dst");
    store.dump(&dst).unwrap();
    let mut reloaded = HyperparameterStore::new();
    reloaded.load(&dst).unwrap();

    assert_eq!(store.get(), reloaded.get());
    let _ = fs::remove_file(src);
    let _ = fs::remove_file(dst);
}

#[test]
fn load_rejects_missing_field() {
    let path = tmp_path("hps_missing");
    fs::write(
        &path,
        r#"{"lr":0.01,"alpha":1.0,"beta":0.0001,"max_step":5,"max_grad_norm":2.0,"batch_size":32}"#,
    )
    .unwrap();
    let mut store = HyperparameterStore::new();
    let err = store.load(&path).unwrap_err();
    assert!(matches!(err, FeedError::Hps(_)));
    assert!(err.to_string().contains("iterations"));
    // A failed load must not clobber the current record.
    assert_eq!(store.get(), &Hyperparameters::default());
    let _ = fs::remove_file(path);
}

#[test]
fn load_rejects_unknown_field() {
    let path = tmp_path("hps_unknown");
    fs::write(
        &path,
        r#"{"lr":0.01,"alpha":1.0,"beta":0.0001,"max_step":5,"max_grad_norm":2.0,"batch_size":32,"iterations":100,"momentum":0.9}"#,
    )
    .unwrap();
    let mut store = HyperparameterStore::new();
    let err = store.load(&path).unwrap_err();
    assert!(matches!(err, FeedError::Hps(_)));
    assert!(err.to_string().contains("momentum"));
    let _ = fs::remove_file(path);
}

#[test]
fn load_missing_file_is_an_error() {
    let mut store = HyperparameterStore::new();
    assert!(store.load(tmp_path("hps_nonexistent")).is_err());
}

#[test]
fn dump_preserves_declaration_order() {
    let path = tmp_path("hps_order");
    HyperparameterStore::new().dump(&path).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    let keys = [
        "\"lr\"",
        "\"alpha\"",
        "\"beta\"",
        "\"max_step\"",
        "\"max_grad_norm\"",
        "\"batch_size\"",
        "\"iterations\"",
    ];
    let positions: Vec<usize> = keys.iter().map(|k| text.find(k).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    let _ = fs::remove_file(path);
}
