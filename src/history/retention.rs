// Bounded FIFO over the most recent commands
//
// History files can hold hundreds of thousands of lines, so eviction has to
// be O(1), not a whole-vector shift per insert.

use std::collections::VecDeque;

/// Keeps the most recent N commands while a history file is scanned.
///
/// A negative limit means unbounded; zero retains nothing.
pub struct RetentionBuffer {
    limit: Option<usize>,
    buf: VecDeque<String>,
}

impl RetentionBuffer {
    pub fn new(limit: i64) -> Self {
        let limit = usize::try_from(limit).ok();
        let buf = match limit {
            // Cap the preallocation, a huge limit shouldn't reserve gigabytes
            Some(n) => VecDeque::with_capacity(n.min(4096)),
            None => VecDeque::new(),
        };
        Self { limit, buf }
    }

    /// Append a command, evicting the oldest one if over capacity.
    pub fn push(&mut self, cmd: String) {
        if self.limit == Some(0) {
            return;
        }
        self.buf.push_back(cmd);
        if let Some(limit) = self.limit {
            if self.buf.len() > limit {
                self.buf.pop_front();
            }
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the buffer, oldest first.
    pub fn into_vec(self) -> Vec<String> {
        self.buf.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(buf: &mut RetentionBuffer, n: usize) {
        for i in 0..n {
            buf.push(format!("cmd{}", i));
        }
    }

    #[test]
    fn test_keeps_most_recent() {
        let mut buf = RetentionBuffer::new(5);
        fill(&mut buf, 10);
        assert_eq!(
            buf.into_vec(),
            vec!["cmd5", "cmd6", "cmd7", "cmd8", "cmd9"]
        );
    }

    #[test]
    fn test_under_capacity_keeps_all() {
        let mut buf = RetentionBuffer::new(5);
        fill(&mut buf, 3);
        assert_eq!(buf.into_vec(), vec!["cmd0", "cmd1", "cmd2"]);
    }

    #[test]
    fn test_unbounded() {
        let mut buf = RetentionBuffer::new(-1);
        fill(&mut buf, 10_000);
        assert_eq!(buf.len(), 10_000);
    }

    #[test]
    fn test_zero_limit_retains_nothing() {
        let mut buf = RetentionBuffer::new(0);
        fill(&mut buf, 10);
        assert!(buf.is_empty());
        assert!(buf.into_vec().is_empty());
    }

    #[test]
    fn test_preserves_order() {
        let mut buf = RetentionBuffer::new(3);
        for cmd in ["a", "b", "c", "d"] {
            buf.push(cmd.to_string());
        }
        assert_eq!(buf.into_vec(), vec!["b", "c", "d"]);
    }
}
