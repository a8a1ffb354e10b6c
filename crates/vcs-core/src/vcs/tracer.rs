use once_cell::sync::Lazy;
use std::collections::VecDeque;
use std::sync::Mutex;

pub mod macros;

pub static TRACER: Lazy<Mutex<Tracer>> = Lazy::new(|| Mutex::new(Tracer::new(100_000)));

/// Bounded history of bank transitions, filled by `trace_bank!`
pub struct Tracer {
    history: VecDeque<String>,
    capacity: usize,
}

impl Tracer {
    pub fn new(capacity: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(capacity.min(4096)),
            capacity,
        }
    }

    pub fn write(&mut self, msg: String) {
        if self.history.len() == self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(msg);
    }

    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    pub fn print(&self) {
        for (i, line) in self.history.iter().enumerate() {
            println!("{:05}: {}", i, line);
        }
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}
