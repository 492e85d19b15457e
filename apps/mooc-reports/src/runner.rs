//! Batch run over every configured mapping
//!
//! A failing record is logged and counted; it never stops the run.

use report_core::{Composer, CourseMapping, ProposalBuilder, Settings};
use std::path::{Path, PathBuf};
use tracing::{error, info};

#[derive(Debug, Default)]
pub struct RunSummary {
    /// Reports written, in input order
    pub generated: Vec<PathBuf>,
    /// Course code and error message of each failed record
    pub failures: Vec<(String, String)>,
    pub proposal: Option<PathBuf>,
}

impl RunSummary {
    pub fn has_errors(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn tally(&self) -> String {
        format!(
            "COMPLETED: {} reports generated, {} errors",
            self.generated.len(),
            self.failures.len()
        )
    }
}

pub fn run(
    settings: &Settings,
    mappings: &[CourseMapping],
    output_dir: &Path,
    with_proposal: bool,
) -> RunSummary {
    let composer = Composer::new(settings.clone());
    let mut summary = RunSummary::default();

    info!(
        "Generating {} reports into {}",
        mappings.len(),
        output_dir.display()
    );
    for (index, mapping) in mappings.iter().enumerate() {
        info!(
            "[{}/{}] Generating: {} - {}",
            index + 1,
            mappings.len(),
            mapping.code,
            mapping.name
        );
        match composer.compose(mapping, output_dir) {
            Ok(path) => {
                info!(
                    "  Created: {}",
                    path.file_name()
                        .map(|name| name.to_string_lossy())
                        .unwrap_or_default()
                );
                summary.generated.push(path);
            }
            Err(e) => {
                error!(code = %mapping.code, "Report failed: {}", e);
                summary.failures.push((mapping.code.clone(), e.to_string()));
            }
        }
    }

    if with_proposal {
        match ProposalBuilder::new(settings.clone()).build(mappings, output_dir) {
            Ok(path) => {
                info!("Proposal created: {}", path.display());
                summary.proposal = Some(path);
            }
            Err(e) => error!("Proposal failed: {}", e),
        }
    }

    info!("{}", summary.tally());
    summary
}
