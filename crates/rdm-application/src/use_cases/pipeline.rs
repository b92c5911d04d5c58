//! Documentation Pipeline Use Case
//!
//! One batch run: parse every source, flatten the module trees, keep the
//! root modules, drop duplicate names and write one page per documented
//! module. The first error aborts the run; pages already written stay.

use crate::domain_services::{
    CollectedModule, DocumentWriter, LibraryNameResolver, ModuleCollector, ModuleDeduplicator,
    RootModuleFilter,
};
use rdm_domain::error::Result;
use rdm_domain::ports::ModuleTreeParser;
use rdm_domain::{FullName, OutputDocument, ParsedCorpus};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Counters of one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineReport {
    /// Source files parsed
    pub files_parsed: usize,
    /// Modules reached while flattening, duplicates included
    pub modules_collected: usize,
    /// Distinct root modules
    pub roots_kept: usize,
    /// Pages written
    pub documents_written: usize,
    /// Root modules without documentation
    pub skipped_undocumented: usize,
    /// Paths of the written pages, in write order
    pub documents: Vec<PathBuf>,
}

/// A root module the pipeline would document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedModule {
    /// Full name of the module
    pub full_name: FullName,
    /// Library unit of the first file declaring it
    pub library: String,
    /// First file declaring it
    pub source: PathBuf,
    /// Whether a page would be written
    pub documented: bool,
}

/// Parser, stages and writer of one configured pipeline
pub struct DocumentationPipeline {
    parser: Arc<dyn ModuleTreeParser>,
    resolver: LibraryNameResolver,
    filter: RootModuleFilter,
    writer: DocumentWriter,
}

impl DocumentationPipeline {
    /// Create a pipeline from its collaborators
    pub fn new(
        parser: Arc<dyn ModuleTreeParser>,
        resolver: LibraryNameResolver,
        filter: RootModuleFilter,
        writer: DocumentWriter,
    ) -> Self {
        Self {
            parser,
            resolver,
            filter,
            writer,
        }
    }

    /// Generate the pages of every root module in `sources` under `category`
    pub fn run(&self, category: &str, sources: &[PathBuf]) -> Result<PipelineReport> {
        let corpus = self.parse(sources)?;
        let collected = ModuleCollector::new(&corpus.store).collect_all(&corpus.contexts);
        let modules_collected = collected.len();
        let roots = self.select_roots(collected);

        let mut report = PipelineReport {
            files_parsed: corpus.contexts.len(),
            modules_collected,
            roots_kept: roots.len(),
            ..PipelineReport::default()
        };

        for root in roots {
            match self.writer.write(category, root.module, Some(root.source))? {
                Some(OutputDocument { path, .. }) => {
                    report.documents_written += 1;
                    report.documents.push(path);
                }
                None => report.skipped_undocumented += 1,
            }
        }

        info!(
            category,
            files = report.files_parsed,
            written = report.documents_written,
            skipped = report.skipped_undocumented,
            "Documentation run finished"
        );
        Ok(report)
    }

    /// Root modules of `sources` without writing anything
    pub fn plan(&self, sources: &[PathBuf]) -> Result<Vec<PlannedModule>> {
        let corpus = self.parse(sources)?;
        let collected = ModuleCollector::new(&corpus.store).collect_all(&corpus.contexts);

        self.select_roots(collected)
            .into_iter()
            .map(|root| {
                Ok(PlannedModule {
                    full_name: root.module.full_name.clone(),
                    library: self.resolver.resolve(root.source)?,
                    source: root.source.to_path_buf(),
                    documented: root.module.is_documented(),
                })
            })
            .collect()
    }

    fn parse(&self, sources: &[PathBuf]) -> Result<ParsedCorpus> {
        let corpus = self.parser.parse_files(sources)?;
        for context in &corpus.contexts {
            let library = self.resolver.resolve(&context.source)?;
            info!(
                library = %library,
                source = %context.source.display(),
                modules = context.modules.len(),
                "Parsed library"
            );
        }
        Ok(corpus)
    }

    fn select_roots<'a>(&self, collected: Vec<CollectedModule<'a>>) -> Vec<CollectedModule<'a>> {
        ModuleDeduplicator::dedup(
            collected
                .into_iter()
                .filter(|collected| self.filter.is_root(collected.module)),
        )
    }
}

impl std::fmt::Debug for DocumentationPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentationPipeline")
            .field("parser", &self.parser.provider_name())
            .field("resolver", &self.resolver)
            .field("filter", &self.filter)
            .field("writer", &self.writer)
            .finish()
    }
}
