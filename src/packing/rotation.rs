//! Replica rotation.

use crate::error::{EngineError, EngineResult};

/// Produces `redundancy` copies of `base`, copy `i` rotated right by `i`.
///
/// Rotating right moves the last element to the front, so for
/// `[a, b, c, d]` and redundancy 3 the copies are `[a, b, c, d]`,
/// `[d, a, b, c]`, `[c, d, a, b]`. Lined up column by column, no column
/// repeats an element as long as `redundancy <= base.len()`.
///
/// # Errors
/// `Validation` if `redundancy` is zero.
pub fn rotate_replicas<T: Clone>(base: &[T], redundancy: usize) -> EngineResult<Vec<Vec<T>>> {
    if redundancy == 0 {
        return Err(EngineError::Validation(
            "redundancy factor must be at least 1".into(),
        ));
    }

    Ok((0..redundancy)
        .map(|i| {
            let mut copy = base.to_vec();
            let len = copy.len();
            if len > 0 {
                copy.rotate_right(i % len);
            }
            copy
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_distinctness() {
        let replicas = rotate_replicas(&['a', 'b', 'c', 'd'], 3).unwrap();
        assert_eq!(
            replicas,
            vec![
                vec!['a', 'b', 'c', 'd'],
                vec!['d', 'a', 'b', 'c'],
                vec!['c', 'd', 'a', 'b'],
            ]
        );
    }

    #[test]
    fn test_columns_never_repeat() {
        let base: Vec<u32> = (0..6).collect();
        let replicas = rotate_replicas(&base, 4).unwrap();
        for col in 0..base.len() {
            let mut column: Vec<u32> = replicas.iter().map(|r| r[col]).collect();
            column.sort_unstable();
            column.dedup();
            assert_eq!(column.len(), 4);
        }
    }

    #[test]
    fn test_single_replica_is_identity() {
        let replicas = rotate_replicas(&[1, 2, 3], 1).unwrap();
        assert_eq!(replicas, vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_rotation_wraps_past_length() {
        let replicas = rotate_replicas(&[1, 2], 3).unwrap();
        assert_eq!(replicas, vec![vec![1, 2], vec![2, 1], vec![1, 2]]);
    }

    #[test]
    fn test_rotation_by_each_offset() {
        let base = ["a", "b", "c", "d", "e"];
        let replicas = rotate_replicas(&base, 5).unwrap();
        for (i, replica) in replicas.iter().enumerate() {
            let mut expected = base.to_vec();
            expected.rotate_right(i);
            assert_eq!(replica, &expected);
            assert_eq!(replica[i], "a");
        }
    }

    #[test]
    fn test_empty_base() {
        let replicas = rotate_replicas::<u8>(&[], 2).unwrap();
        assert_eq!(replicas, vec![Vec::<u8>::new(), Vec::new()]);
    }

    #[test]
    fn test_zero_redundancy_rejected() {
        assert!(matches!(
            rotate_replicas(&[1, 2, 3], 0),
            Err(EngineError::Validation(_))
        ));
    }
}
