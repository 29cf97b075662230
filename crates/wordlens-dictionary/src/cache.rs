use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::OnceCell;
use tokio::time::Instant;

pub type CacheKey = (&'static str, String);

type Slot<V> = Arc<OnceCell<(V, Instant)>>;

/// Memoizing request cache keyed by `(namespace, key)`.
///
/// Concurrent requests for the same key share one fetch. A resolved value
/// is served until `ttl` has passed since it resolved. Failed fetches are
/// not stored, the next request runs the fetch again.
pub struct RequestCache<V> {
    ttl: Duration,
    slots: Mutex<HashMap<CacheKey, Slot<V>>>,
}

impl<V> RequestCache<V>
where
    V: Clone + Send + Sync,
{
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slots: Mutex::new(HashMap::new()),
        }
    }

    pub async fn get_or_fetch<E, F, Fut>(
        &self,
        namespace: &'static str,
        key: &str,
        fetch: F,
    ) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let slot = self.slot(namespace, key);

        if let Some((value, _)) = slot.get() {
            tracing::debug!("[CACHE] Hit ({}, {})", namespace, key);
            return Ok(value.clone());
        }

        let result = slot
            .get_or_try_init(|| async move {
                tracing::debug!("[CACHE] Fetching ({}, {})", namespace, key);
                fetch().await.map(|value| (value, Instant::now()))
            })
            .await;

        match result {
            Ok((value, _)) => Ok(value.clone()),
            Err(e) => {
                self.discard_failed(namespace, key, &slot);
                Err(e)
            }
        }
    }

    /// Remove a slot whose fetch failed. A slot that was replaced, filled,
    /// or still has other waiters is left alone; the last waiter to fail
    /// removes it.
    fn discard_failed(&self, namespace: &'static str, key: &str, slot: &Slot<V>) {
        let mut slots = self.lock();
        let cache_key = (namespace, key.to_string());

        // Clones are only handed out under the lock: one for the map, one here
        let unresolved = slots.get(&cache_key).is_some_and(|current| {
            Arc::ptr_eq(current, slot) && !current.initialized() && Arc::strong_count(current) == 2
        });
        if unresolved {
            tracing::debug!("[CACHE] Dropping failed ({}, {})", namespace, key);
            slots.remove(&cache_key);
        }
    }

    /// Drop a key so the next request fetches again
    pub fn invalidate(&self, namespace: &'static str, key: &str) {
        self.lock().remove(&(namespace, key.to_string()));
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, namespace: &'static str, key: &str) -> Slot<V> {
        let mut slots = self.lock();

        // Pending slots never expire, their waiters still need them.
        // Failed fetches remove their own slot.
        let ttl = self.ttl;
        slots.retain(|_, slot| {
            slot.get()
                .is_none_or(|(_, resolved_at)| resolved_at.elapsed() < ttl)
        });

        slots
            .entry((namespace, key.to_string()))
            .or_insert_with(|| Arc::new(OnceCell::new()))
            .clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<CacheKey, Slot<V>>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    async fn counted(calls: &AtomicUsize, value: u32) -> Result<u32, String> {
        calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(50)).await;
        Ok(value)
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_requests_share_one_fetch() {
        let cache = RequestCache::new(Duration::from_secs(300));
        let calls = AtomicUsize::new(0);

        let (a, b) = tokio::join!(
            cache.get_or_fetch("dict", "hello", || counted(&calls, 1)),
            cache.get_or_fetch("dict", "hello", || counted(&calls, 2)),
        );

        assert_eq!(a, Ok(1));
        assert_eq!(b, Ok(1));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_keys_are_independent() {
        let cache = RequestCache::new(Duration::from_secs(300));
        let calls = AtomicUsize::new(0);

        let a = cache.get_or_fetch("dict", "hello", || counted(&calls, 1)).await;
        let b = cache.get_or_fetch("dict", "world", || counted(&calls, 2)).await;
        let c = cache.get_or_fetch("dict", "hello", || counted(&calls, 3)).await;

        assert_eq!((a, b, c), (Ok(1), Ok(2), Ok(1)));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failures_are_not_cached() {
        let cache: RequestCache<u32> = RequestCache::new(Duration::from_secs(300));

        let first = cache
            .get_or_fetch("dict", "zelda", || async { Err::<u32, _>("offline") })
            .await;
        let second = cache
            .get_or_fetch("dict", "zelda", || async { Ok::<_, &str>(7) })
            .await;

        assert_eq!(first, Err("offline"));
        assert_eq!(second, Ok(7));
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_values_are_refetched() {
        let cache = RequestCache::new(Duration::from_secs(300));
        let calls = AtomicUsize::new(0);

        cache.get_or_fetch("dict", "wild", || counted(&calls, 1)).await.unwrap();
        tokio::time::sleep(Duration::from_secs(299)).await;
        let cached = cache.get_or_fetch("dict", "wild", || counted(&calls, 2)).await;
        tokio::time::sleep(Duration::from_secs(2)).await;
        let fresh = cache.get_or_fetch("dict", "wild", || counted(&calls, 3)).await;

        assert_eq!(cached, Ok(1));
        assert_eq!(fresh, Ok(3));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_invalidate() {
        let cache = RequestCache::new(Duration::from_secs(300));

        cache.get_or_fetch("dict", "hyrule", || async { Ok::<_, ()>(1) }).await.unwrap();
        cache.invalidate("dict", "hyrule");
        assert!(cache.is_empty());

        let value = cache.get_or_fetch("dict", "hyrule", || async { Ok::<_, ()>(2) }).await;
        assert_eq!(value, Ok(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_keys_do_not_accumulate() {
        let cache: RequestCache<u32> = RequestCache::new(Duration::from_secs(1));

        for i in 0..1000 {
            let key = format!("typo{i}");
            let result = cache
                .get_or_fetch("dict", &key, || async { Err::<u32, _>("not found") })
                .await;
            assert_eq!(result, Err("not found"));
        }
        assert!(cache.is_empty());

        tokio::time::sleep(Duration::from_secs(3600)).await;
        let value = cache.get_or_fetch("dict", "hyrule", || async { Ok::<_, &str>(5) }).await;

        assert_eq!(value, Ok(5));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_waiter_after_failure_still_resolves() {
        let cache: RequestCache<u32> = RequestCache::new(Duration::from_secs(300));

        let failing = || async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            Err::<u32, &str>("offline")
        };
        let (a, b) = tokio::join!(
            cache.get_or_fetch("dict", "zelda", failing),
            cache.get_or_fetch("dict", "zelda", || async { Ok::<_, &str>(9) }),
        );

        assert_eq!(a, Err("offline"));
        assert_eq!(b, Ok(9));
        // The second caller was still waiting and filled the slot
        assert_eq!(cache.len(), 1);
        let cached = cache.get_or_fetch("dict", "zelda", || async { Ok::<_, &str>(10) }).await;
        assert_eq!(cached, Ok(9));
    }
}
