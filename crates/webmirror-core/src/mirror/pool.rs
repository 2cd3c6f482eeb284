//! Bounded worker pool for asset fetches.
//!
//! Workers pull URLs off a shared queue until it is empty, so at most
//! `max_concurrent` transfers are in flight at once. With a budget of one
//! (or a single asset) the queue machinery is skipped entirely.

use std::collections::VecDeque;
use std::path::Path;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use url::Url;

use crate::fetch::FetchOptions;

/// Fetches and saves every asset, returning `(saved, failed)` counts.
///
/// The list is already deduplicated; each URL is fetched exactly once in
/// either mode. Failures are logged by the per-resource save and only
/// counted here.
pub(super) fn fetch_all(
    assets: Vec<Url>,
    options: &FetchOptions,
    output_root: &Path,
    max_concurrent: usize,
) -> (usize, usize) {
    let count = assets.len();
    if count == 0 {
        return (0, 0);
    }

    if max_concurrent <= 1 || count == 1 {
        let mut saved = 0;
        for url in &assets {
            if super::save_resource(url, options, output_root) {
                saved += 1;
            }
        }
        return (saved, count - saved);
    }

    let work: Arc<Mutex<VecDeque<Url>>> = Arc::new(Mutex::new(assets.into_iter().collect()));
    let (tx, rx) = mpsc::channel();
    let num_workers = max_concurrent.min(count);
    let mut handles = Vec::with_capacity(num_workers);
    for _ in 0..num_workers {
        let work = Arc::clone(&work);
        let tx = tx.clone();
        let options = options.clone();
        let output_root = output_root.to_path_buf();
        handles.push(std::thread::spawn(move || loop {
            let url = match work.lock().unwrap().pop_front() {
                Some(u) => u,
                None => break,
            };
            let saved = super::save_resource(&url, &options, &output_root);
            let _ = tx.send(saved);
        }));
    }
    drop(tx);

    let mut saved = 0;
    for _ in 0..count {
        if rx.recv().expect("worker result") {
            saved += 1;
        }
    }
    for h in handles {
        h.join().unwrap_or_else(|e| panic!("worker panicked: {:?}", e));
    }
    (saved, count - saved)
}
