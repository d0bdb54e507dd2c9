#![cfg(test)]

use crate::error::Result;
use crate::github::client::RepositorySource;
use crate::github::types::*;
use std::collections::VecDeque;
use std::sync::Mutex;

pub fn make_record(name: &str, owner: &str) -> Record {
    Record {
        name: name.to_string(),
        owner: owner.to_string(),
        permission: Some(ViewerPermission::Admin),
        default_branch: Some("main".to_string()),
        is_private: false,
    }
}

pub fn make_page(
    names: &[&str],
    end_cursor: Option<&str>,
    has_next_page: bool,
    cost: u64,
    remaining: u64,
) -> Page {
    Page {
        records: names.iter().map(|n| make_record(n, "octo")).collect(),
        end_cursor: end_cursor.map(str::to_string),
        has_next_page,
        total_count: names.len() as u64,
        rate_limit: RateLimit { cost, remaining },
    }
}

/// Replays scripted pages in order and remembers every query it was sent.
pub struct FakeSource {
    responses: Mutex<VecDeque<Result<Page>>>,
    queries: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn new(responses: Vec<Result<Page>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

impl RepositorySource for FakeSource {
    async fn fetch_page(&self, query: &str) -> Result<Page> {
        self.queries.lock().unwrap().push(query.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted page for call {}", self.calls()))
    }
}
