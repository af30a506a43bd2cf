//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SpellArgs};
use crate::error::Result;
use crate::spelling::batch::QueryReport;
use crate::spelling::dictionary::CheckResult;

/// Corpus statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorpusStats {
    pub corpus: String,
    pub distinct_words: usize,
    pub total_words: u64,
    pub trie_nodes: usize,
}

/// Write one check report in the selected format.
pub fn write_report<W: Write>(out: &mut W, report: &QueryReport, args: &SpellArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            writeln!(out, "{}", format_report_human(report))?;
        }
        OutputFormat::Json => write_json(out, report, args)?,
    }
    Ok(())
}

/// Write corpus statistics in the selected format.
pub fn write_stats<W: Write>(out: &mut W, stats: &CorpusStats, args: &SpellArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                writeln!(out, "Corpus: {}", stats.corpus)?;
            }
            writeln!(out, "Distinct words: {}", stats.distinct_words)?;
            writeln!(out, "Total words: {}", stats.total_words)?;
            writeln!(out, "Trie nodes: {}", stats.trie_nodes)?;
        }
        OutputFormat::Json => write_json(out, stats, args)?,
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T, args: &SpellArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}

/// `✅ word`, or `❌ word | s1 s2` with the bar only when there are suggestions.
pub fn format_report_human(report: &QueryReport) -> String {
    match &report.result {
        CheckResult::Correct => format!("✅ {}", report.query),
        CheckResult::Misspelled(suggestions) if suggestions.is_empty() => {
            format!("❌ {}", report.query)
        }
        CheckResult::Misspelled(suggestions) => {
            format!("❌ {} | {}", report.query, suggestions.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn report(query: &str, result: CheckResult) -> QueryReport {
        QueryReport {
            query: query.to_string(),
            result,
        }
    }

    #[test]
    fn test_format_report_human() {
        assert_eq!(
            format_report_human(&report("word", CheckResult::Correct)),
            "✅ word"
        );
        assert_eq!(
            format_report_human(&report("he", CheckResult::Misspelled(vec![]))),
            "❌ he"
        );
        assert_eq!(
            format_report_human(&report(
                "worldd",
                CheckResult::Misspelled(vec!["word".to_string(), "world".to_string()])
            )),
            "❌ worldd | word world"
        );
    }

    #[test]
    fn test_write_report_json() {
        let args =
            SpellArgs::try_parse_from(["spellcorrect", "-f", "json", "check", "-c", "c.txt"])
                .unwrap();
        let mut out = Vec::new();
        write_report(&mut out, &report("word", CheckResult::Correct), &args).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"query\":\"word\",\"status\":\"correct\"}\n"
        );
    }

    #[test]
    fn test_write_stats_human() {
        let args = SpellArgs::try_parse_from(["spellcorrect", "-q", "stats", "-c", "c.txt"])
            .unwrap();
        let stats = CorpusStats {
            corpus: "c.txt".to_string(),
            distinct_words: 3,
            total_words: 6,
            trie_nodes: 8,
        };
        let mut out = Vec::new();
        write_stats(&mut out, &stats, &args).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Distinct words: 3\nTotal words: 6\nTrie nodes: 8\n"
        );
    }
}
