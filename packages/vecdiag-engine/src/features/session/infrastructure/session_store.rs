//! Session store: concurrent map of per-session state
//!
//! Each session sits behind its own mutex. The map shard guard is released
//! before that mutex is taken, so sessions never block each other and
//! appends to one session are serialized.

use super::error::{Result, SessionError};
use crate::features::session::domain::{FailedAttempt, Session, TransformRecord};
use crate::shared::models::VectorizationAnalysis;
use dashmap::DashMap;
use parking_lot::Mutex;
use std::sync::Arc;

/// Keyed store of compilation sessions
#[derive(Default)]
pub struct SessionStore {
    sessions: DashMap<String, Arc<Mutex<Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Insert a fresh session, replacing any session with the same id
    pub fn create(&self, id: &str) {
        let replaced = self
            .sessions
            .insert(id.to_string(), Arc::new(Mutex::new(Session::new(id))));

        if replaced.is_some() {
            tracing::debug!(session = id, "session reset");
        } else {
            tracing::debug!(session = id, "session created");
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sessions.contains_key(id)
    }

    pub fn remove(&self, id: &str) -> bool {
        self.sessions.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Session ids, sorted
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.sessions.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        ids
    }

    /// Drop every session
    pub fn clear(&self) {
        self.sessions.clear();
    }

    /// Append an analysis to a session's history
    ///
    /// Returns `false` (and records nothing) when the session does not exist.
    pub fn append_history(&self, id: &str, analysis: Arc<VectorizationAnalysis>) -> bool {
        match self.handle(id) {
            Some(session) => {
                session.lock().history.push(analysis);
                true
            }
            None => false,
        }
    }

    pub fn record_success(&self, id: &str, record: TransformRecord) -> Result<()> {
        self.with_session(id, |session| session.successful_transforms.push(record))
    }

    pub fn record_failure(&self, id: &str, attempt: FailedAttempt) -> Result<()> {
        self.with_session(id, |session| session.failed_attempts.push(attempt))
    }

    /// Store arbitrary pattern data under `key`, replacing a previous value
    pub fn learn_pattern(
        &self,
        id: &str,
        key: impl Into<String>,
        data: serde_json::Value,
    ) -> Result<()> {
        self.with_session(id, |session| {
            session.learned_patterns.insert(key.into(), data);
        })
    }

    /// Snapshot of a session's successful transforms
    pub fn successful_transforms(&self, id: &str) -> Option<Vec<TransformRecord>> {
        self.handle(id)
            .map(|session| session.lock().successful_transforms.clone())
    }

    /// Snapshot of a session's history
    pub fn history(&self, id: &str) -> Option<Vec<Arc<VectorizationAnalysis>>> {
        self.handle(id).map(|session| session.lock().history.clone())
    }

    /// Snapshot of the whole session
    pub fn snapshot(&self, id: &str) -> Option<Session> {
        self.handle(id).map(|session| session.lock().clone())
    }

    /// Run `f` under the session's lock
    pub fn with_session<R>(&self, id: &str, f: impl FnOnce(&mut Session) -> R) -> Result<R> {
        let session = self
            .handle(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;
        let mut guard = session.lock();
        Ok(f(&mut guard))
    }

    /// Clone the session handle out of the map, releasing the shard guard
    fn handle(&self, id: &str) -> Option<Arc<Mutex<Session>>> {
        self.sessions.get(id).map(|entry| Arc::clone(entry.value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::dependency::DependencyType;
    use crate::features::diagnostics::CompilationStatus;
    use crate::features::suggestion::SuggestionKind;
    use std::thread;

    fn analysis(code: &str) -> Arc<VectorizationAnalysis> {
        Arc::new(VectorizationAnalysis::new(
            CompilationStatus::VectorizationFailed,
            code,
        ))
    }

    #[test]
    fn test_create_overwrites_without_merge() {
        let store = SessionStore::new();
        store.create("s1");
        assert!(store.append_history("s1", analysis("a")));
        assert_eq!(store.history("s1").unwrap().len(), 1);

        store.create("s1");
        assert_eq!(store.history("s1").unwrap().len(), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_append_to_unknown_session_is_noop() {
        let store = SessionStore::new();
        assert!(!store.append_history("ghost", analysis("a")));
        assert!(store.is_empty());
        assert!(store.history("ghost").is_none());
    }

    #[test]
    fn test_record_on_unknown_session_errors() {
        let store = SessionStore::new();
        let record =
            TransformRecord::new(DependencyType::LoopCarried, "a", SuggestionKind::LoopSplitting, "");

        let err = store.record_success("ghost", record).unwrap_err();
        assert!(matches!(err, SessionError::NotFound(ref id) if id == "ghost"));
    }

    #[test]
    fn test_records_and_patterns() {
        let store = SessionStore::new();
        store.create("s1");

        store
            .record_success(
                "s1",
                TransformRecord::new(
                    DependencyType::LoopCarried,
                    "a",
                    SuggestionKind::LoopSplitting,
                    "split",
                ),
            )
            .unwrap();
        store
            .record_failure(
                "s1",
                FailedAttempt::new("a", SuggestionKind::VectorWidth, "#pragma omp simd", "wrong results"),
            )
            .unwrap();
        store
            .learn_pattern("s1", "a:mirror", serde_json::json!({"split_at": "N/4"}))
            .unwrap();

        let session = store.snapshot("s1").unwrap();
        assert_eq!(session.successful_transforms.len(), 1);
        assert_eq!(session.failed_attempts.len(), 1);
        assert_eq!(session.learned_patterns["a:mirror"]["split_at"], "N/4");
        assert_eq!(store.successful_transforms("s1").unwrap()[0].code, "split");
    }

    #[test]
    fn test_remove_and_clear() {
        let store = SessionStore::new();
        store.create("b");
        store.create("a");
        assert_eq!(store.ids(), vec!["a".to_string(), "b".to_string()]);

        assert!(store.remove("a"));
        assert!(!store.remove("a"));
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_concurrent_appends_same_session() {
        let store = Arc::new(SessionStore::new());
        store.create("shared");
        store.create("other");

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for n in 0..50 {
                        let id = if n % 2 == 0 { "shared" } else { "other" };
                        assert!(store.append_history(id, analysis(&format!("{t}-{n}"))));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.history("shared").unwrap().len(), 200);
        assert_eq!(store.history("other").unwrap().len(), 200);
    }

    #[test]
    fn test_per_thread_order_preserved() {
        let store = Arc::new(SessionStore::new());
        store.create("log");

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for n in 0..25 {
                        store.append_history("log", analysis(&format!("{t}:{n}")));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let history = store.history("log").unwrap();
        for t in 0..4 {
            let seq: Vec<usize> = history
                .iter()
                .filter_map(|a| {
                    let (thread, n) = a.original_code.split_once(':')?;
                    (thread == t.to_string()).then(|| n.parse().ok()).flatten()
                })
                .collect();
            assert_eq!(seq, (0..25).collect::<Vec<_>>());
        }
    }
}
