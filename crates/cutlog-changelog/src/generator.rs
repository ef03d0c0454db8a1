//! Changelog generation

use cutlog_core::config::Config;
use cutlog_core::{ReleaseTag, RunSummary};
use tracing::{debug, info, instrument};

use crate::formatter::{ChangelogFormatter, MarkdownFormatter};
use crate::merge::EntryMerger;
use crate::parser::{CommitParser, ConventionalParser};
use crate::splice::DocumentSplicer;
use crate::transform::DescriptionTransformer;
use crate::types::ReleaseSection;

/// A generated release section and what went into it
#[derive(Debug, Clone)]
pub struct GeneratedRelease {
    /// The release section
    pub section: ReleaseSection,
    /// Counts reported to the user
    pub summary: RunSummary,
}

/// Changelog generator.
///
/// Runs commit subjects through classification, rewriting and merging, and
/// splices the rendered section into a changelog document. Pure: all input
/// is passed in, nothing is read from git or disk here.
pub struct ChangelogGenerator {
    parser: Box<dyn CommitParser>,
    transformer: DescriptionTransformer,
    formatter: Box<dyn ChangelogFormatter>,
    splicer: DocumentSplicer,
    config: Config,
}

impl ChangelogGenerator {
    /// Create a new generator with default parser and formatter
    pub fn new(config: Config) -> Self {
        Self {
            parser: Box::new(ConventionalParser::new()),
            transformer: DescriptionTransformer::new(&config.changelog),
            formatter: Box::new(MarkdownFormatter::new()),
            splicer: DocumentSplicer::new(&config.changelog),
            config,
        }
    }

    /// Use a custom parser
    pub fn with_parser<P: CommitParser + 'static>(mut self, parser: P) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Drop empty subjects and merge commits
    pub fn filter_subjects<'a>(&self, subjects: &'a [String]) -> Vec<&'a str> {
        subjects
            .iter()
            .map(String::as_str)
            .filter(|s| !s.is_empty() && !self.config.git.is_merge_subject(s))
            .collect()
    }

    /// Build the release section for a tag from raw commit subjects
    #[instrument(skip(self, subjects), fields(tag = %tag, subject_count = subjects.len()))]
    pub fn generate(&self, tag: &ReleaseTag, date: &str, subjects: &[String]) -> GeneratedRelease {
        let commits = self.filter_subjects(subjects);
        info!(tag = %tag, commit_count = commits.len(), "generating release section");

        let mut merger = EntryMerger::new(&self.config.changelog);
        for subject in &commits {
            let classified = self.parser.classify(subject);
            let transformed = self.transformer.transform(&classified.description);
            match transformed.into_entry(classified.category) {
                Some(entry) => {
                    merger.push(entry);
                }
                None => debug!(subject, "commit discarded"),
            }
        }

        let mut section = ReleaseSection::new(&tag.label, date);
        for (category, lines) in merger.finish() {
            section.set_lines(category, lines);
        }

        let summary = RunSummary {
            commits: commits.len(),
            categories: section.category_count(),
        };
        debug!(categories = summary.categories, "release section built");

        GeneratedRelease { section, summary }
    }

    /// Format a release section to string
    pub fn format(&self, section: &ReleaseSection) -> String {
        self.formatter.format(section)
    }

    /// Splice a release section into an existing changelog document
    pub fn update_document(&self, document: &str, section: &ReleaseSection) -> String {
        self.splicer.splice(document, &self.format(section))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, ClassifiedCommit};

    fn subjects(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn generate(list: &[&str]) -> GeneratedRelease {
        ChangelogGenerator::new(Config::default()).generate(
            &ReleaseTag::new("1.1.0"),
            "2024-05-01",
            &subjects(list),
        )
    }

    #[test]
    fn test_generate_changelog() {
        let release = generate(&[
            "feat: add dark mode support",
            "fix: handle empty config file",
            "Tidy up",
        ]);

        assert_eq!(release.section.label, "v1.1.0");
        assert_eq!(release.section.lines(Category::Added), ["Add dark mode support".to_string()]);
        assert_eq!(
            release.section.lines(Category::Fixed),
            ["Handle empty config file".to_string()]
        );
        assert_eq!(release.section.lines(Category::Other), ["Tidy up".to_string()]);
        assert_eq!(release.summary, RunSummary { commits: 3, categories: 3 });
    }

    #[test]
    fn test_duplicate_fixes_recorded_once() {
        let release = generate(&["fix: fix crash on startup", "fix: Fix crash on startup."]);
        assert_eq!(release.section.lines(Category::Fixed), ["Fix crash on startup".to_string()]);
        assert_eq!(release.summary.commits, 2);
    }

    #[test]
    fn test_merges_and_empty_subjects_filtered() {
        let release = generate(&["", "Merge pull request #4 from x/y", "merge main", ""]);
        assert!(release.section.is_empty());
        assert_eq!(release.summary, RunSummary { commits: 0, categories: 0 });

        let generator = ChangelogGenerator::new(Config::default());
        assert_eq!(generator.format(&release.section), "## [v1.1.0] - 2024-05-01");
    }

    #[test]
    fn test_discarded_commits_still_counted() {
        let release = generate(&["init", "chore: bump: version 2"]);
        assert!(release.section.is_empty());
        assert_eq!(release.summary.commits, 2);
    }

    #[test]
    fn test_dependency_bumps_grouped_per_category() {
        let release = generate(&[
            "chore(deps): bump a from 1.0.0 to 1.1.0",
            "chore(deps): bump b from 1.0.0 to 1.1.0",
            "chore(deps): bump c from 1.0.0 to 1.1.0",
            "chore(deps): bump d from 1.0.0 to 1.1.0",
            "build(deps): bump e from 2.0.0 to 2.1.0",
        ]);

        assert_eq!(
            release.section.lines(Category::Miscellaneous),
            ["Update dependencies (`a`, `b`, `c`, `d`)".to_string()]
        );
        assert_eq!(
            release.section.lines(Category::Build),
            ["Update `e` to `2.1.0`".to_string()]
        );
    }

    #[test]
    fn test_update_document() {
        let generator = ChangelogGenerator::new(Config::default());
        let release = generator.generate(
            &ReleaseTag::new("v1.1.0"),
            "2024-05-01",
            &subjects(&["fix: handle unicode paths"]),
        );
        let tail = "## [v1.0.0] - 2023-01-01\n\n- First release\n";
        let document = format!("# Changelog\n\n## [Unreleased]\n\n- old placeholder\n\n{}", tail);

        let updated = generator.update_document(&document, &release.section);

        assert_eq!(
            updated,
            format!(
                "# Changelog\n\n## [Unreleased]\n\n- (Add new changes here)\n\n\
                 ## [v1.1.0] - 2024-05-01\n\n### Fixed\n\n- Handle unicode paths\n\n\n{}",
                tail
            )
        );
    }

    #[test]
    fn test_custom_parser() {
        struct EverythingFixed;
        impl CommitParser for EverythingFixed {
            fn classify(&self, subject: &str) -> ClassifiedCommit {
                ClassifiedCommit {
                    category: Category::Fixed,
                    commit_type: None,
                    description: subject.to_string(),
                }
            }
        }

        let generator = ChangelogGenerator::new(Config::default()).with_parser(EverythingFixed);
        let release = generator.generate(
            &ReleaseTag::new("1.0.1"),
            "2024-05-01",
            &subjects(&["feat: new thing"]),
        );
        assert_eq!(release.section.lines(Category::Fixed), ["Feat: new thing".to_string()]);
    }
}
