//! Session-unique id generation for nodes and edges.

use std::sync::atomic::{AtomicU64, Ordering};

use once_cell::sync::Lazy;
use rand::Rng;
use rand::distributions::Alphanumeric;

/// Random tag drawn once per process, so ids from different sessions do not
/// collide when snapshots are merged or replayed.
static SESSION_TAG: Lazy<String> = Lazy::new(|| {
  rand::thread_rng()
    .sample_iter(&Alphanumeric)
    .take(5)
    .map(|b| (b as char).to_ascii_lowercase())
    .collect()
});

static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Returns a fresh id like `llm-x3kf9-7`: prefix, session tag, then a
/// monotonically increasing counter. Unique for the life of the process;
/// no cryptographic unpredictability claimed or needed.
pub fn make_id(prefix: &str) -> String {
  let n = COUNTER.fetch_add(1, Ordering::Relaxed);
  format!("{}-{}-{}", prefix, *SESSION_TAG, n)
}
