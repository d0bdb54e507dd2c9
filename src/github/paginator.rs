use crate::config::{Affiliation, Config};
use crate::error::{GhReposError, Result};
use crate::github::client::RepositorySource;
use crate::github::query::build_query;
use crate::github::types::{RateLimitUsage, Record};
use tracing::{debug, info, warn};

/// Everything gathered by one run of the pagination loop.
#[derive(Debug, Default)]
pub struct Collected {
    pub records: Vec<Record>,
    pub usage: RateLimitUsage,
    pub total_count: u64,
}

/// Walks the viewer's repositories page by page. Pages are strictly
/// sequential; each request carries the previous page's end cursor.
/// Transport failures end the loop and nothing gathered so far is returned.
pub struct Paginator<S> {
    source: S,
    page_size: u8,
    affiliations: Vec<Affiliation>,
}

impl<S: RepositorySource> Paginator<S> {
    pub fn new(source: S, config: &Config) -> Self {
        Self {
            source,
            page_size: config.page_size(),
            affiliations: config.resolved_affiliations(),
        }
    }

    pub async fn fetch_all(&self) -> Result<Collected> {
        let mut collected = Collected::default();
        let mut cursor: Option<String> = None;
        let mut page_no = 0usize;

        loop {
            let query = build_query(cursor.as_deref(), self.page_size, &self.affiliations);
            let page = self.source.fetch_page(&query).await?;
            page_no += 1;

            debug!(
                page = page_no,
                records = page.records.len(),
                cost = page.rate_limit.cost,
                remaining = page.rate_limit.remaining,
                has_next_page = page.has_next_page,
                "fetched repository page"
            );

            collected.usage.record(page.rate_limit);
            collected.total_count = page.total_count;
            collected.records.extend(page.records);

            if !page.has_next_page {
                break;
            }
            match page.end_cursor {
                Some(next) => cursor = Some(next),
                None => {
                    return Err(GhReposError::Transport(
                        "server reported another page without an end cursor".to_string(),
                    ))
                }
            }
        }

        info!(
            pages = page_no,
            records = collected.records.len(),
            total_count = collected.total_count,
            "pagination finished"
        );
        if collected.records.len() as u64 != collected.total_count {
            warn!(
                fetched = collected.records.len(),
                reported = collected.total_count,
                "fetched record count differs from reported totalCount"
            );
        }

        Ok(collected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn three_pages() -> FakeSource {
        FakeSource::new(vec![
            Ok(make_page(&["r1", "r2"], Some("c1"), true, 1, 4999)),
            Ok(make_page(&["r3"], Some("c2"), true, 1, 4998)),
            Ok(make_page(&["r4", "r5"], Some("c3"), false, 2, 4996)),
        ])
    }

    #[tokio::test]
    async fn follows_cursors_until_last_page() {
        let source = three_pages();
        let collected = Paginator::new(&source, &Config::default())
            .fetch_all()
            .await
            .unwrap();

        let queries = source.queries();
        assert_eq!(source.calls(), 3);
        assert!(!queries[0].contains("after:"));
        assert!(queries[1].contains(r#"after: "c1""#));
        assert!(queries[2].contains(r#"after: "c2""#));

        let names: Vec<_> = collected.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["r1", "r2", "r3", "r4", "r5"]);
    }

    #[tokio::test]
    async fn sums_cost_and_keeps_last_remaining() {
        let source = three_pages();
        let collected = Paginator::new(&source, &Config::default())
            .fetch_all()
            .await
            .unwrap();

        assert_eq!(collected.usage.cost, 4);
        assert_eq!(collected.usage.remaining, 4996);
    }

    #[tokio::test]
    async fn single_page_issues_one_call() {
        let source = FakeSource::new(vec![Ok(make_page(&["only"], None, false, 1, 10))]);
        let collected = Paginator::new(&source, &Config::default())
            .fetch_all()
            .await
            .unwrap();

        assert_eq!(source.calls(), 1);
        assert_eq!(collected.records.len(), 1);
    }

    #[tokio::test]
    async fn transport_failure_stops_the_loop() {
        let source = FakeSource::new(vec![
            Ok(make_page(&["r1"], Some("c1"), true, 1, 10)),
            Err(GhReposError::Transport("connection reset".to_string())),
            Ok(make_page(&["never"], None, false, 1, 8)),
        ]);
        let err = Paginator::new(&source, &Config::default())
            .fetch_all()
            .await
            .unwrap_err();

        assert!(matches!(err, GhReposError::Transport(_)));
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn next_page_without_cursor_is_an_error() {
        let source = FakeSource::new(vec![Ok(make_page(&["r1"], None, true, 1, 10))]);
        let err = Paginator::new(&source, &Config::default())
            .fetch_all()
            .await
            .unwrap_err();

        assert!(matches!(err, GhReposError::Transport(_)));
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn page_size_from_config_reaches_query() {
        let source = FakeSource::new(vec![Ok(make_page(&[], None, false, 1, 10))]);
        let config = Config {
            page_size: 25,
            ..Config::default()
        };
        Paginator::new(&source, &config).fetch_all().await.unwrap();

        assert!(source.queries()[0].contains("first: 25"));
    }
}
