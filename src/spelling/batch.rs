//! Checking many queries in parallel while keeping their input order.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use crate::config::SpellConfig;
use crate::error::{Result, SpellError};
use crate::spelling::dictionary::{CheckOptions, CheckResult, Dictionary};

/// A query paired with its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryReport {
    /// The query as given.
    pub query: String,
    /// Whether it is correct, and the suggestions otherwise.
    #[serde(flatten)]
    pub result: CheckResult,
}

/// Runs independent checks on a dedicated thread pool.
///
/// The dictionary is only read, so no locking is involved.
pub struct BatchChecker<'a> {
    dictionary: &'a Dictionary,
    options: CheckOptions,
    pool: ThreadPool,
}

impl<'a> BatchChecker<'a> {
    /// Create a checker with `threads` workers.
    pub fn new(dictionary: &'a Dictionary, options: CheckOptions, threads: usize) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("spellcheck-{i}"))
            .build()
            .map_err(|e| SpellError::other(format!("Failed to create thread pool: {e}")))?;

        Ok(BatchChecker {
            dictionary,
            options,
            pool,
        })
    }

    /// Create a checker from configuration.
    pub fn from_config(dictionary: &'a Dictionary, config: &SpellConfig) -> Result<Self> {
        config.validate()?;
        let options = CheckOptions::from_config(config)?;
        Self::new(dictionary, options, config.effective_threads())
    }

    /// The limits applied to every query.
    pub fn options(&self) -> &CheckOptions {
        &self.options
    }

    /// Check every query; reports come back in input order.
    pub fn check_all<S>(&self, queries: &[S]) -> Vec<QueryReport>
    where
        S: AsRef<str> + Sync,
    {
        self.pool.install(|| {
            queries
                .par_iter()
                .map(|query| {
                    let query = query.as_ref();
                    QueryReport {
                        query: query.to_string(),
                        result: self.dictionary.check_with(query, &self.options),
                    }
                })
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_keep_input_order() {
        let dictionary = Dictionary::build(["hello", "word", "world", "word"]);
        let options = CheckOptions::new(2, 1, 3).unwrap();
        let checker = BatchChecker::new(&dictionary, options, 4).unwrap();

        let queries = vec!["hell", "word", "worldddd", "worldd"];
        let reports = checker.check_all(&queries);

        let order: Vec<&str> = reports.iter().map(|r| r.query.as_str()).collect();
        assert_eq!(order, queries);
        assert_eq!(
            reports[0].result,
            CheckResult::Misspelled(vec!["hello".to_string()])
        );
        assert_eq!(reports[1].result, CheckResult::Correct);
        assert_eq!(reports[2].result, CheckResult::Misspelled(vec![]));
        assert_eq!(
            reports[3].result,
            CheckResult::Misspelled(vec!["word".to_string()])
        );
    }

    #[test]
    fn test_matches_sequential_checks() {
        let dictionary = Dictionary::build(["word", "work", "world", "word", "work", "work"]);
        let config = SpellConfig {
            threads: Some(2),
            ..Default::default()
        };
        let checker = BatchChecker::from_config(&dictionary, &config).unwrap();

        let queries: Vec<String> = ["owrd", "wrk", "worl", "xyz"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        for report in checker.check_all(&queries) {
            assert_eq!(report.result, dictionary.check(&report.query, 2, 3));
        }
    }

    #[test]
    fn test_report_json() {
        let report = QueryReport {
            query: "hell".to_string(),
            result: CheckResult::Misspelled(vec!["hello".to_string()]),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"query":"hell","status":"misspelled","suggestions":["hello"]}"#
        );
    }
}
