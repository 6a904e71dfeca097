use std::collections::VecDeque;

use crate::log;

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: log::Repository> log::Service for Service<R> {
    fn get_log_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.repository.read_entries()
    }

    fn add_log_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        self.repository.write_entry(entry)
    }

    fn clear_log_entries(&self) -> Result<(), log::Error> {
        self.repository.clear_entries()
    }
}
