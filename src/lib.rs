//! Indexed Binary Heaps
//!
//! This crate provides array-backed binary min-heap priority queues, with
//! the centerpiece being a heap augmented by a position index that supports
//! removal of *arbitrary* values in O(log n) — an operation ordinary binary
//! heaps only offer through a linear scan.
//!
//! # Features
//!
//! - **Indexed Binary Heap**: contiguous min-heap plus a value-to-positions
//!   hash index; O(1) `contains`, O(log n) `remove` of any stored value,
//!   explicit grow/shrink capacity policy
//! - **Simple Binary Heap**: the classic array heap without an index, for
//!   when membership queries and arbitrary removal are not needed
//!
//! Both types store totally-ordered values directly (the value is its own
//! priority), permit duplicates, and share the [`MinHeap`] trait; the
//! indexed heap additionally implements [`IndexedHeap`].
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::indexed_binary::IndexedBinaryHeap;
//! use indexed_heaps::{IndexedHeap, MinHeap};
//!
//! let mut heap = IndexedBinaryHeap::from_vec(vec![5, 4, 3, 2, 3, 6, 7]);
//! assert_eq!(heap.peek(), Ok(&2));
//!
//! // Delete a value buried somewhere in the middle of the heap.
//! assert_eq!(heap.remove(&6), Ok(6));
//! assert!(!heap.contains(&6));
//!
//! assert_eq!(heap.into_sorted_vec(), vec![2, 3, 3, 4, 5, 7]);
//! ```

pub mod indexed_binary;
pub mod simple_binary;
pub mod traits;

// Re-export the traits and error type for convenience
pub use traits::{HeapError, IndexedHeap, MinHeap};
