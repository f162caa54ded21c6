//! Test helpers for writing plan command datasets.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub(super) const RECIPIENTS: &str = "child;latitude;longitude;wish;naughty\n\
                                     1;89,5;0;1;0\n\
                                     2;89;10;1;0\n\
                                     3;88;-20;1;1\n\
                                     4;88,5;5;2;0\n";
pub(super) const ARTICLES: &str = "article;weight;volume\n\
                                   0;0,5;0,5\n\
                                   1;2;1\n\
                                   2;50;1\n";
pub(super) const SLEIGH_SPECS: &str = "meta data;value\n\
                                       maximum weight;10\n\
                                       maximum volume;10\n\
                                       speed (km/h);1000\n\
                                       time per stop (min);1\n";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent directory");
    }
    std::fs::write(path, contents).expect("write test file");
}

/// Input files in a temporary directory; removed on drop.
pub(super) struct Dataset {
    _dir: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) recipients: Utf8PathBuf,
    pub(super) articles: Utf8PathBuf,
    pub(super) sleigh_specs: Utf8PathBuf,
    pub(super) output: Utf8PathBuf,
}

impl Dataset {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let recipients = root.join("sample_input.csv");
        let articles = root.join("articles.csv");
        let sleigh_specs = root.join("sleigh_specs.csv");
        write_utf8(&recipients, RECIPIENTS.as_bytes());
        write_utf8(&articles, ARTICLES.as_bytes());
        write_utf8(&sleigh_specs, SLEIGH_SPECS.as_bytes());
        Self {
            output: root.join("output/route.csv"),
            _dir: dir,
            root,
            recipients,
            articles,
            sleigh_specs,
        }
    }

    /// Arguments naming every file of the dataset explicitly.
    pub(super) fn args(&self) -> super::PlanArgs {
        super::PlanArgs {
            recipients: Some(self.recipients.clone()),
            articles: Some(self.articles.clone()),
            sleigh_specs: Some(self.sleigh_specs.clone()),
            output: Some(self.output.clone()),
            ..super::PlanArgs::default()
        }
    }
}
