//! # Contributors Report
//!
//! Turns the aggregated contributor records into a deterministic text
//! report: sort with the configured key, then stream header, one line per
//! contributor and footer into an output sink.

pub mod escape;

use std::io::Write;

use tracing::debug;

use crate::error::Result;
use crate::repository::GitRepo;
use crate::types::{Contributor, ReportConfig, SortKey};
use crate::walk::ContributorsWalkAction;

use escape::{escape_html, escape_markdown};

/// Order contributor records by the given key.
///
/// Returns a new sequence; the input is not mutated. The sort is stable and
/// deterministic: equal-count and equal-date groups are ordered by display
/// name ascending, not by arrival order.
pub fn sort_contributors(contributors: &[Contributor], key: SortKey) -> Vec<Contributor> {
    let mut sorted = contributors.to_vec();
    match key {
        SortKey::Count => sorted.sort_by(|a, b| {
            b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name))
        }),
        SortKey::Date => sorted.sort_by(|a, b| {
            a.first_commit_date
                .cmp(&b.first_commit_date)
                .then_with(|| a.name.cmp(&b.name))
        }),
        SortKey::Name => sorted.sort_by(|a, b| a.name.cmp(&b.name)),
    }
    sorted
}

/// Expand literal `\n` sequences in configured header/footer text.
fn unescape_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}

/// Render sorted contributor records into `sink`.
///
/// The header is emitted verbatim followed by a blank separator line when
/// non-empty; each record becomes one line of prefix + escaped name +
/// exactly one of " (email)" or " (count)"; the footer is emitted verbatim
/// when non-empty. Escaping applies only to names and emails.
pub fn render_contributors(
    contributors: &[Contributor],
    config: &ReportConfig,
    sink: &mut dyn Write,
) -> Result<()> {
    let header = unescape_newlines(&config.header);
    if !header.is_empty() {
        writeln!(sink, "{}", header.trim_end_matches('\n'))?;
        writeln!(sink)?;
    }

    for contributor in contributors {
        let mut name = contributor.name.clone();
        let mut email = contributor.email.clone();
        if config.escape_html {
            name = escape_html(&name);
            email = escape_html(&email);
        }
        if config.escape_markdown {
            name = escape_markdown(&name);
            email = escape_markdown(&email);
        }

        // Email and count are mutually exclusive; email wins when both are
        // requested.
        if config.show_email {
            writeln!(sink, "{}{} ({})", config.contributor_prefix, name, email)?;
        } else if config.show_counts {
            writeln!(sink, "{}{} ({})", config.contributor_prefix, name, contributor.count)?;
        } else {
            writeln!(sink, "{}{}", config.contributor_prefix, name)?;
        }
    }

    let footer = unescape_newlines(&config.footer);
    if !footer.is_empty() {
        writeln!(sink, "{}", footer.trim_end_matches('\n'))?;
    }

    Ok(())
}

/// Generate the full contributors report for a repository.
///
/// Runs one synchronous pass: walk the first-parent history aggregating
/// contributors, sort with the normalized key, then render. The traversal
/// completes before the first byte is written, so a repository fault never
/// produces partial output.
pub fn generate_contributors_report(
    repo: &GitRepo,
    config: &ReportConfig,
    sink: &mut dyn Write,
) -> Result<()> {
    let key = SortKey::parse(config.sort.as_deref());

    let mut action = ContributorsWalkAction::new();
    repo.walk_commits(&mut action)?;

    let contributors = action.into_contributors();
    debug!("aggregated {} contributors, sorting by {}", contributors.len(), key.as_str());

    let sorted = sort_contributors(&contributors, key);
    render_contributors(&sorted, config, sink)
}

/// Convenience wrapper collecting the report into lines.
pub fn contributors_report_lines(repo: &GitRepo, config: &ReportConfig) -> Result<Vec<String>> {
    let mut buffer = Vec::new();
    generate_contributors_report(repo, config, &mut buffer)?;
    let text = String::from_utf8_lossy(&buffer);
    Ok(text.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset};
    use pretty_assertions::assert_eq;

    fn contributor(name: &str, email: &str, count: usize, secs: i64) -> Contributor {
        Contributor {
            name: name.to_string(),
            email: email.to_string(),
            count,
            first_commit_date: DateTime::from_timestamp(secs, 0)
                .unwrap()
                .with_timezone(&FixedOffset::east_opt(0).unwrap()),
        }
    }

    /// The contributor set from the upstream scenario: three commits by
    /// Sebastian, two by Joe, one each by John and the two escape probes.
    fn sample_contributors() -> Vec<Contributor> {
        vec![
            contributor("Sebastian Staudt", "koraktor@gmail.com", 3, 1),
            contributor("John Doe", "john.doe@example.com", 1, 2),
            contributor("Joe Average", "joe.average@example.com", 2, 3),
            contributor("Markdown [Breaker]", "markdown.breaker@example.com", 1, 7),
            contributor("HTML <Breaker>", "html.breaker@example.com", 1, 8),
        ]
    }

    fn config() -> ReportConfig {
        ReportConfig {
            header: "Contributors\\n============".to_string(),
            footer: "Footer".to_string(),
            contributor_prefix: " * ".to_string(),
            show_counts: true,
            show_email: false,
            escape_html: false,
            escape_markdown: false,
            sort: Some("count".to_string()),
        }
    }

    fn render_lines(contributors: &[Contributor], config: &ReportConfig) -> Vec<String> {
        let key = SortKey::parse(config.sort.as_deref());
        let sorted = sort_contributors(contributors, key);
        let mut buffer = Vec::new();
        render_contributors(&sorted, config, &mut buffer).unwrap();
        String::from_utf8(buffer)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_sort_by_count() {
        let lines = render_lines(&sample_contributors(), &config());
        assert_eq!(
            lines,
            vec![
                "Contributors",
                "============",
                "",
                " * Sebastian Staudt (3)",
                " * Joe Average (2)",
                " * HTML <Breaker> (1)",
                " * John Doe (1)",
                " * Markdown [Breaker] (1)",
                "Footer",
            ]
        );
    }

    #[test]
    fn test_sort_by_date() {
        let mut config = config();
        config.sort = Some("date".to_string());
        let lines = render_lines(&sample_contributors(), &config);
        assert_eq!(
            lines,
            vec![
                "Contributors",
                "============",
                "",
                " * Sebastian Staudt (3)",
                " * John Doe (1)",
                " * Joe Average (2)",
                " * Markdown [Breaker] (1)",
                " * HTML <Breaker> (1)",
                "Footer",
            ]
        );
    }

    #[test]
    fn test_sort_by_name() {
        let mut config = config();
        config.sort = Some("name".to_string());
        let lines = render_lines(&sample_contributors(), &config);
        assert_eq!(
            lines,
            vec![
                "Contributors",
                "============",
                "",
                " * HTML <Breaker> (1)",
                " * Joe Average (2)",
                " * John Doe (1)",
                " * Markdown [Breaker] (1)",
                " * Sebastian Staudt (3)",
                "Footer",
            ]
        );
    }

    #[test]
    fn test_customized_rendering_shows_email_over_count() {
        let mut config = config();
        config.header = "Authors\\n-------".to_string();
        config.contributor_prefix = "- ".to_string();
        config.show_counts = false;
        config.show_email = true;
        let lines = render_lines(&sample_contributors(), &config);
        assert_eq!(
            lines,
            vec![
                "Authors",
                "-------",
                "",
                "- Sebastian Staudt (koraktor@gmail.com)",
                "- Joe Average (joe.average@example.com)",
                "- HTML <Breaker> (html.breaker@example.com)",
                "- John Doe (john.doe@example.com)",
                "- Markdown [Breaker] (markdown.breaker@example.com)",
                "Footer",
            ]
        );
    }

    #[test]
    fn test_email_takes_precedence_when_both_requested() {
        let mut config = config();
        config.show_counts = true;
        config.show_email = true;
        let lines = render_lines(&sample_contributors(), &config);
        assert!(lines.contains(&" * Sebastian Staudt (koraktor@gmail.com)".to_string()));
        assert!(!lines.iter().any(|line| line.ends_with("(3)")));
    }

    #[test]
    fn test_escape_html_only_touches_angle_brackets() {
        let mut config = config();
        config.escape_html = true;
        let lines = render_lines(&sample_contributors(), &config);
        assert!(lines.contains(&" * HTML &lt;Breaker&gt; (1)".to_string()));
        assert!(lines.contains(&" * Markdown [Breaker] (1)".to_string()));
    }

    #[test]
    fn test_escape_markdown_only_touches_brackets() {
        let mut config = config();
        config.escape_markdown = true;
        let lines = render_lines(&sample_contributors(), &config);
        assert!(lines.contains(&" * Markdown \\[Breaker\\] (1)".to_string()));
        assert!(lines.contains(&" * HTML <Breaker> (1)".to_string()));
    }

    #[test]
    fn test_escape_html_and_markdown_together() {
        let mut config = config();
        config.escape_html = true;
        config.escape_markdown = true;
        let lines = render_lines(&sample_contributors(), &config);
        assert!(lines.contains(&" * Markdown \\[Breaker\\] (1)".to_string()));
        assert!(lines.contains(&" * HTML &lt;Breaker&gt; (1)".to_string()));
    }

    #[test]
    fn test_empty_header_and_footer_are_suppressed() {
        let mut config = config();
        config.header = String::new();
        config.footer = String::new();
        let lines = render_lines(&sample_contributors()[..1].to_vec(), &config);
        assert_eq!(lines, vec![" * Sebastian Staudt (3)"]);
    }

    #[test]
    fn test_sorting_is_a_permutation() {
        let contributors = sample_contributors();
        let mut by_count = render_lines(&contributors, &config());
        let mut config_name = config();
        config_name.sort = Some("name".to_string());
        let mut by_name = render_lines(&contributors, &config_name);
        by_count.sort();
        by_name.sort();
        assert_eq!(by_count, by_name);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let contributors = sample_contributors();
        let before = contributors.clone();
        let _ = sort_contributors(&contributors, SortKey::Name);
        assert_eq!(contributors, before);
    }
}
