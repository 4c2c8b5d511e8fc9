//! Trace events emitted by eager and failing operators (requires the `tracing` feature).

use std::io;
use std::sync::{Arc, Mutex};

use standout_sequence::{Dir, KeyPolicy, Sequence};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::SubscriberInitExt;

// ============================================================================
// Test helpers
// ============================================================================

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut bytes) = self.0.lock() {
            bytes.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` under a trace-level subscriber and returns what it logged.
fn capture(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    {
        let _guard = subscriber.set_default();
        f();
    }
    captured.text()
}

// ============================================================================
// Events
// ============================================================================

#[test]
fn index_out_of_range_is_traced() {
    let logs = capture(|| {
        assert!(Sequence::new(vec![1, 2, 3]).get(5).is_err());
    });
    assert!(logs.contains("index out of range"), "{}", logs);
    assert!(logs.contains("index=5"), "{}", logs);
    assert!(logs.contains("count=3"), "{}", logs);
}

#[test]
fn duplicate_key_is_traced() {
    let logs = capture(|| {
        let result =
            Sequence::new(vec![3, 2, 3]).to_map_with(|x| *x, |x| x, KeyPolicy::Unique);
        assert!(result.is_err());
    });
    assert!(logs.contains("duplicate key rejected"), "{}", logs);
    assert!(logs.contains("key=3"), "{}", logs);
}

#[test]
fn eager_operators_are_traced() {
    let logs = capture(|| {
        let ordered = Sequence::new(vec![2, 1, 3]).order(Dir::Desc);
        assert_eq!(ordered, [3, 2, 1]);
        let groups = Sequence::new(vec![1, 2, 3]).group_by(|x| x % 2);
        assert_eq!(groups.len(), 2);
        let visited = Sequence::new(vec![1, 2]).foreach(|_| {});
        assert_eq!(visited.count(), 2);
    });
    assert!(logs.contains("sequence ordered"), "{}", logs);
    assert!(logs.contains("dir=desc"), "{}", logs);
    assert!(logs.contains("sequence grouped"), "{}", logs);
    assert!(logs.contains("foreach completed"), "{}", logs);
}

#[test]
fn lazy_operators_stay_quiet() {
    let logs = capture(|| {
        let kept = Sequence::new(vec![1, 2, 3]).filter(|x| *x > 1).take(1).to_vec();
        assert_eq!(kept, vec![2]);
    });
    assert!(logs.is_empty(), "{}", logs);
}
