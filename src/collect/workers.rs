//! Worker pool collection.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use super::WorkerSource;
use crate::error::EngineResult;
use crate::models::Worker;

/// Collects the eligible worker pool in uniformly random order.
///
/// An empty pool is not an error; it leaves every bin unassigned downstream.
pub async fn collect_workers<R: Rng + Send>(
    source: &dyn WorkerSource,
    rng: &mut R,
) -> EngineResult<Vec<Worker>> {
    let mut workers = source.eligible_workers().await?;
    workers.shuffle(rng);
    debug!(workers = workers.len(), "collected worker pool");
    Ok(workers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn store(n: usize) -> MemoryStore {
        (0..n).fold(MemoryStore::new(), |s, i| {
            s.with_worker(format!("w{i}"), [format!("acc{i}")])
        })
    }

    #[tokio::test]
    async fn test_collect_keeps_every_worker() {
        let mut rng = SmallRng::seed_from_u64(7);
        let workers = collect_workers(&store(10), &mut rng).await.unwrap();
        let mut ids: Vec<String> = workers.iter().map(|w| w.id.clone()).collect();
        ids.sort();
        let mut expected: Vec<String> = (0..10).map(|i| format!("w{i}")).collect();
        expected.sort();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn test_collect_same_seed_same_order() {
        let s = store(8);
        let a = collect_workers(&s, &mut SmallRng::seed_from_u64(42)).await.unwrap();
        let b = collect_workers(&s, &mut SmallRng::seed_from_u64(42)).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_collect_carries_disqualifications() {
        let mut rng = SmallRng::seed_from_u64(1);
        let workers = collect_workers(&store(1), &mut rng).await.unwrap();
        assert!(workers[0].disqualified_ids.contains("acc0"));
    }

    #[tokio::test]
    async fn test_collect_empty_pool() {
        let mut rng = SmallRng::seed_from_u64(1);
        let workers = collect_workers(&store(0), &mut rng).await.unwrap();
        assert!(workers.is_empty());
    }
}
