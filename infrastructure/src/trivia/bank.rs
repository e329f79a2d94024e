//! Per-difficulty buffer of fetched questions

use kingdom_domain::{Difficulty, Question};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Thread-safe FIFO of questions for each difficulty
///
/// A batch from the API usually holds more questions than one turn needs;
/// the leftovers are served to later turns. Each queue holds at most
/// `capacity` questions; extras are dropped.
pub struct QuestionBank {
    capacity: usize,
    queues: Mutex<HashMap<Difficulty, VecDeque<Question>>>,
}

impl QuestionBank {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            queues: Mutex::new(HashMap::new()),
        }
    }

    /// Take the oldest question of `difficulty`
    pub fn take(&self, difficulty: Difficulty) -> Option<Question> {
        let mut queues = self.queues.lock().ok()?;
        queues.get_mut(&difficulty)?.pop_front()
    }

    /// Store questions, returning how many were kept
    pub fn stock(&self, questions: impl IntoIterator<Item = Question>) -> usize {
        let Ok(mut queues) = self.queues.lock() else {
            return 0;
        };
        let mut kept = 0;
        for question in questions {
            let queue = queues.entry(question.difficulty()).or_default();
            if queue.len() < self.capacity
                && !queue.iter().any(|q| q.text() == question.text())
            {
                queue.push_back(question);
                kept += 1;
            }
        }
        kept
    }

    pub fn len(&self, difficulty: Difficulty) -> usize {
        self.queues
            .lock()
            .ok()
            .and_then(|q| q.get(&difficulty).map(VecDeque::len))
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.queues
            .lock()
            .map(|q| q.values().all(VecDeque::is_empty))
            .unwrap_or(true)
    }
}
