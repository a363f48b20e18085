use core::fmt;
use std::io::{self, Write};

use tracing::trace;

struct Node {
    value: i32,
    next: Option<Box<Node>>,
}

impl Node {
    fn new(value: i32, next: Option<Box<Node>>) -> Box<Self> {
        Box::new(Self { value, next })
    }
}

/// A singly linked list of integers, head-first in insertion order.
///
/// The list owns its head node and every node owns its successor.
pub struct LinkedList {
    head: Option<Box<Node>>,
}

impl LinkedList {
    pub const fn new() -> Self {
        Self { head: None }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of nodes reachable from the head.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Make `value` the new head. Never walks the list.
    pub fn insert_at_front(&mut self, value: i32) {
        self.head = Some(Node::new(value, self.head.take()));
        trace!(value, "insert at front");
    }

    /// Link `value` after the current last node.
    pub fn insert_at_back(&mut self, value: i32) {
        let mut walked = 0usize;
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
            walked += 1;
        }
        *cursor = Some(Node::new(value, None));
        trace!(value, walked, "insert at back");
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            cur: self.head.as_deref(),
        }
    }

    /// Write each value followed by a space, then a line terminator.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)
    }

    pub fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)?;
        out.flush()
    }
}

impl Default for LinkedList {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LinkedList {
    // Unlink one node at a time; the derived drop would recurse per node.
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl fmt::Display for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{} ", value)?;
        }
        Ok(())
    }
}

impl fmt::Debug for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a> {
    cur: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        self.cur.map(|node| {
            self.cur = node.next.as_deref();
            node.value
        })
    }
}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
