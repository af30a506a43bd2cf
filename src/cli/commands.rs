//! Command implementations for the spellcorrect CLI.

use std::io::{self, BufRead, IsTerminal, Write};

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::SpellConfig;
use crate::error::Result;
use crate::spelling::batch::{BatchChecker, QueryReport};
use crate::spelling::corpus::load_dictionary;
use crate::spelling::dictionary::{CheckOptions, Dictionary};
use crate::spelling::search::{LogTrace, NoTrace, SearchTrace};

/// Execute a CLI command.
pub fn execute_command(args: SpellArgs) -> Result<()> {
    match &args.command {
        Command::Check(check_args) => check_words(check_args.clone(), &args),
        Command::Stats(corpus_args) => show_stats(corpus_args.clone(), &args),
        Command::Dump(corpus_args) => dump_trie(corpus_args.clone(), &args),
    }
}

/// Load the configuration file, if any, and apply command-line overrides.
fn load_config(args: &CorpusArgs) -> Result<SpellConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading configuration from: {}", path.display());
            SpellConfig::load_from_file(path)?
        }
        None => SpellConfig::default(),
    };
    if let Some(format) = args.corpus_format {
        config.corpus_format = format.into();
    }
    Ok(config)
}

fn load_corpus(args: &CorpusArgs, config: &SpellConfig) -> Result<Dictionary> {
    info!("Reading corpus: {}", args.corpus.display());
    load_dictionary(&args.corpus, config.corpus_format)
}

/// Check words given on the command line or read from stdin.
fn check_words(args: CheckArgs, cli_args: &SpellArgs) -> Result<()> {
    let mut config = load_config(&args.corpus)?;
    if args.threads.is_some() {
        config.threads = args.threads;
    }
    config.validate()?;

    let options = CheckOptions::from_signed(
        args.max_edits.unwrap_or(config.max_edits as i64),
        args.max_suggestions.unwrap_or(config.max_suggestions as i64),
        config.max_edit_ceiling,
    )?;
    let dictionary = load_corpus(&args.corpus, &config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.trace {
        // Tracing is sequential so the step log of each query stays together.
        let queries = if args.words.is_empty() {
            read_queries(io::stdin().lock())?
        } else {
            args.words
        };
        return write_checks(
            &mut out,
            &dictionary,
            &options,
            queries.into_iter().map(Ok),
            &mut LogTrace,
            cli_args,
        );
    }

    let stdin = io::stdin();
    if args.words.is_empty() && stdin.is_terminal() {
        // Interactive: answer each line as soon as it is entered.
        return write_checks(
            &mut out,
            &dictionary,
            &options,
            stdin.lock().lines(),
            &mut NoTrace,
            cli_args,
        );
    }

    let queries = if args.words.is_empty() {
        read_queries(stdin.lock())?
    } else {
        args.words
    };
    debug!(
        "Checking {} queries with max_edits={} max_suggestions={}",
        queries.len(),
        options.max_edits(),
        options.max_suggestions()
    );

    let checker = BatchChecker::new(&dictionary, options, config.effective_threads())?;
    for report in checker.check_all(&queries) {
        write_report(&mut out, &report, cli_args)?;
    }

    Ok(())
}

/// Check queries one at a time, writing each report as soon as it is ready.
///
/// Blank queries are skipped.
fn write_checks<W, I>(
    out: &mut W,
    dictionary: &Dictionary,
    options: &CheckOptions,
    queries: I,
    trace: &mut dyn SearchTrace,
    cli_args: &SpellArgs,
) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = io::Result<String>>,
{
    for line in queries {
        let line = line?;
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        let result = dictionary.check_traced(
            query,
            options.max_edits(),
            options.max_suggestions(),
            trace,
        );
        let report = QueryReport {
            query: query.to_string(),
            result,
        };
        write_report(out, &report, cli_args)?;
        out.flush()?;
    }
    Ok(())
}

/// Show corpus statistics.
fn show_stats(args: CorpusArgs, cli_args: &SpellArgs) -> Result<()> {
    let config = load_config(&args)?;
    let dictionary = load_corpus(&args, &config)?;
    let store = dictionary.store();

    let stats = CorpusStats {
        corpus: args.corpus.to_string_lossy().to_string(),
        distinct_words: store.word_count(),
        total_words: store.total_frequency(),
        trie_nodes: store.node_count(),
    };

    write_stats(&mut io::stdout().lock(), &stats, cli_args)
}

/// Print the prefix tree outline.
fn dump_trie(args: CorpusArgs, _cli_args: &SpellArgs) -> Result<()> {
    let config = load_config(&args)?;
    let dictionary = load_corpus(&args, &config)?;

    let mut out = io::stdout().lock();
    out.write_all(dictionary.store().render().as_bytes())?;
    Ok(())
}

/// One query per non-blank line, trimmed.
fn read_queries<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut queries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let query = line.trim();
        if !query.is_empty() {
            queries.push(query.to_string());
        }
    }
    Ok(queries)
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::error::SpellError;
    use crate::spelling::corpus::CorpusFormat;

    #[test]
    fn test_read_queries_skips_blank_lines() {
        let queries = read_queries(Cursor::new("hell\n\n  worldd \n")).unwrap();
        assert_eq!(queries, vec!["hell", "worldd"]);
    }

    #[test]
    fn test_load_config_override() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "max_edits": 1, "corpus_format": "text" }}"#).unwrap();
        file.flush().unwrap();

        let args = CorpusArgs {
            corpus: "corpus.txt".into(),
            corpus_format: Some(CorpusFormatArg::Lines),
            config: Some(file.path().to_path_buf()),
        };
        let config = load_config(&args).unwrap();

        assert_eq!(config.max_edits, 1);
        assert_eq!(config.corpus_format, CorpusFormat::Lines);
    }

    fn cli(format: &str) -> SpellArgs {
        SpellArgs::try_parse_from(["spellcorrect", "-f", format, "check", "-c", "corpus.txt"])
            .unwrap()
    }

    #[test]
    fn test_traced_checks_from_stdin_lines() {
        let dictionary = Dictionary::build(["hello", "word", "world", "word"]);
        let options = CheckOptions::new(2, 2, 3).unwrap();
        let queries = read_queries(Cursor::new("hell\n\nword\n he \nworldd\n")).unwrap();

        let mut out = Vec::new();
        write_checks(
            &mut out,
            &dictionary,
            &options,
            queries.into_iter().map(Ok),
            &mut LogTrace,
            &cli("human"),
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "❌ hell | hello\n✅ word\n❌ he\n❌ worldd | word world\n"
        );
    }

    #[test]
    fn test_line_by_line_checks() {
        let dictionary = Dictionary::build(["hello", "word", "world", "word"]);
        let options = CheckOptions::new(1, 3, 3).unwrap();

        let mut out = Vec::new();
        write_checks(
            &mut out,
            &dictionary,
            &options,
            Cursor::new("  \nwrld\nhello\n").lines(),
            &mut NoTrace,
            &cli("json"),
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            concat!(
                "{\"query\":\"wrld\",\"status\":\"misspelled\",\"suggestions\":[\"world\"]}\n",
                "{\"query\":\"hello\",\"status\":\"correct\"}\n"
            )
        );
    }

    #[test]
    fn test_closure_trace_sees_each_query() {
        let dictionary = Dictionary::build(["hello", "word"]);
        let options = CheckOptions::new(1, 1, 3).unwrap();

        let mut starts = Vec::new();
        let mut sink = |step: &crate::spelling::search::TraceStep<'_>| {
            if step.kind == crate::spelling::search::EditKind::Start {
                starts.push(step.remaining.iter().collect::<String>());
            }
        };
        let mut out = Vec::new();
        write_checks(
            &mut out,
            &dictionary,
            &options,
            ["helo", "word", "wrd"].map(|q| Ok(q.to_string())),
            &mut sink,
            &cli("human"),
        )
        .unwrap();

        // Known words never reach the search.
        assert_eq!(starts, vec!["helo", "wrd"]);
    }

    #[test]
    fn test_negative_limits_are_rejected() {
        let mut corpus = NamedTempFile::new().unwrap();
        writeln!(corpus, "hello").unwrap();
        corpus.flush().unwrap();

        let path = corpus.path().to_string_lossy().to_string();
        let args = SpellArgs::try_parse_from([
            "spellcorrect",
            "check",
            "-c",
            path.as_str(),
            "--max-edits",
            "-2",
            "hello",
        ])
        .unwrap();

        let result = execute_command(args);
        assert!(matches!(result, Err(SpellError::InvalidArgument(_))));
    }
}
