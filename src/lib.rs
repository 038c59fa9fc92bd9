//! Slab-backed student roster with positional insertion and forward
//! cursors.
//!
//! This crate keeps a singly-linked list of student records without a
//! pointer-chained allocation per node. The key insight: separate the
//! chain from the storage.
//!
//! ```text
//! Box/Rc chain   - one allocation per node, recursive teardown risk,
//!                  aliasing rules fight every iterator
//! Slab + indices - nodes in one growable arena, links are integers,
//!                  teardown is a flat loop, borrows stay checkable
//! ```
//!
//! Score buffers are shared (`Arc<[f32]>`): records, rosters, and
//! external holders can reference one buffer without copying samples,
//! and linear search can match records by buffer identity.
//!
//! # Quick Start
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use roster::{Roster, ScoreSampler};
//!
//! let mut sampler = ScoreSampler::new(SmallRng::seed_from_u64(7));
//! let mut roster = Roster::new();
//!
//! for _ in 0..10 {
//!     roster.push_front(sampler.sample_student());
//! }
//! assert_eq!(roster.len(), 10);
//!
//! // Forward traversal, most recent insertion first.
//! for student in &roster {
//!     let mean = student.mean_score().expect("sampled students have scores");
//!     assert!((0.0..=100.0).contains(&mean));
//! }
//!
//! // Positional access walks the chain; out of range is None, not a panic.
//! assert!(roster.get(9).is_some());
//! assert!(roster.get(10).is_none());
//! ```
//!
//! # Operations
//!
//! | Operation | Cost | Out-of-range behavior |
//! |-----------|------|-----------------------|
//! | [`Roster::push_front`] | O(1) | n/a |
//! | [`Roster::insert`] | O(index) | clamps to the tail |
//! | [`Roster::pop_front`] | O(1) | `None` on empty |
//! | [`Roster::get`] | O(index) | `None` |
//! | [`Roster::get_by_key`] | O(1) | `None` |
//! | [`Roster::iter`] / [`Roster::cursor_front`] | O(1) to create | exhausted on empty |
//!
//! # Threading
//!
//! A [`Roster`] is a single-threaded structure; callers that share one
//! across threads must serialize access externally. Records and their
//! buffers are independently shareable.

#![warn(missing_docs)]

pub mod list;
pub mod scores;
pub mod student;

pub use list::{Cursor, Iter, Roster};
pub use scores::{
    ScoreSampler, MAX_SCORES, MIN_SCORES, SCORE_CEIL, SCORE_FLOOR, SCORE_MEAN, SCORE_STD_DEV,
};
pub use student::Student;
