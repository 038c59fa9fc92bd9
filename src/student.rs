//! Student records with shared score buffers.
//!
//! A [`Student`] owns nothing but a shared handle to an immutable score
//! buffer. Cloning a record shares the buffer; it never copies the
//! samples. This lets external holders keep a buffer alive independently
//! of any roster the record sits in, and makes identity comparison
//! (two records backed by the same allocation) a pointer check.

use std::sync::Arc;

/// An immutable record holding a shared buffer of scores.
///
/// The buffer length is carried by the `Arc<[f32]>` fat pointer, so a
/// record can never claim more scores than its buffer holds. A record
/// with zero scores is valid; see [`Student::empty`].
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use roster::Student;
///
/// let student = Student::new(Arc::from(vec![100.0, 50.0, 30.0]));
/// assert_eq!(student.score_count(), 3);
/// assert_eq!(student.mean_score(), Some(60.0));
/// ```
#[derive(Debug, Clone)]
pub struct Student {
    scores: Arc<[f32]>,
}

impl Student {
    /// Creates a record over the given score buffer.
    ///
    /// No validation is performed; an empty buffer is accepted.
    #[inline]
    pub fn new(scores: Arc<[f32]>) -> Self {
        Self { scores }
    }

    /// Creates a record with no scores.
    #[inline]
    pub fn empty() -> Self {
        let scores: Arc<[f32]> = Arc::new([]);
        Self { scores }
    }

    /// Returns the number of scores in the buffer.
    #[inline]
    pub fn score_count(&self) -> usize {
        self.scores.len()
    }

    /// Returns a read-only view of the scores.
    #[inline]
    pub fn scores(&self) -> &[f32] {
        &self.scores
    }

    /// Returns the shared buffer handle.
    ///
    /// Clone it to keep the buffer alive past this record, or compare
    /// handles with [`Arc::ptr_eq`] for identity checks.
    #[inline]
    pub fn buffer(&self) -> &Arc<[f32]> {
        &self.scores
    }

    /// Returns `true` if both records are backed by the same buffer
    /// allocation.
    ///
    /// This is identity, not value equality: two records with equal
    /// scores in separate allocations are not the same record.
    #[inline]
    pub fn shares_buffer(&self, other: &Student) -> bool {
        Arc::ptr_eq(&self.scores, &other.scores)
    }

    /// Computes the mean of all scores.
    ///
    /// Returns `None` for a record with no scores; the mean of an empty
    /// sample set is undefined and this crate signals absence instead of
    /// producing NaN.
    pub fn mean_score(&self) -> Option<f32> {
        if self.scores.is_empty() {
            return None;
        }
        let sum: f32 = self.scores.iter().sum();
        Some(sum / self.scores.len() as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_known_scores() {
        let student = Student::new(Arc::from(vec![100.0, 50.0, 30.0]));
        let mean = student.mean_score().unwrap();
        assert!((mean - 60.0).abs() < 1e-5);
    }

    #[test]
    fn mean_of_empty_is_none() {
        let student = Student::empty();
        assert_eq!(student.score_count(), 0);
        assert!(student.scores().is_empty());
        assert_eq!(student.mean_score(), None);
    }

    #[test]
    fn mean_of_single_score() {
        let student = Student::new(Arc::from(vec![42.5]));
        assert_eq!(student.mean_score(), Some(42.5));
    }

    #[test]
    fn clone_shares_buffer() {
        let student = Student::new(Arc::from(vec![1.0, 2.0]));
        let copy = student.clone();

        assert!(student.shares_buffer(&copy));
        assert_eq!(copy.scores(), &[1.0, 2.0]);
    }

    #[test]
    fn equal_scores_in_separate_buffers_are_not_identical() {
        let a = Student::new(Arc::from(vec![1.0, 2.0]));
        let b = Student::new(Arc::from(vec![1.0, 2.0]));

        assert_eq!(a.scores(), b.scores());
        assert!(!a.shares_buffer(&b));
    }

    #[test]
    fn two_records_over_one_buffer() {
        let buffer: Arc<[f32]> = Arc::from(vec![10.0, 20.0, 30.0]);
        let a = Student::new(buffer.clone());
        let b = Student::new(buffer);

        assert!(a.shares_buffer(&b));
        assert_eq!(a.mean_score(), b.mean_score());
    }
}
