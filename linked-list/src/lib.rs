//! A singly linked list of integers with insert-at-front, insert-at-back and
//! print.

mod linked_list;

pub use crate::linked_list::{Iter, LinkedList};
