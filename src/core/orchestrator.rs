use crate::core::interact::Interactions;
use crate::core::page::Page;
use crate::core::render;
use crate::domain::ports::DataSource;
use crate::utils::error::Result;

/// Body substituted for the whole page when the pipeline fails.
pub const ERROR_NOTICE: &str = r#"<div style="text-align: center; padding: 50px;">Error loading website data. Please check data.json file.</div>"#;

/// One-shot pipeline state. `Loading` only transitions once, to either
/// terminal state; there is no retry or recovery path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Rendered,
    Failed,
}

/// Drives the load-and-render pipeline over a page it exclusively owns:
/// fetch the record once, run every section renderer, install the
/// interaction bindings. Every failure along the way is caught exactly
/// here; the recovery is total, replacing the entire body with one notice.
pub struct SiteEngine<D: DataSource> {
    source: D,
    page: Page,
    phase: Phase,
    interactions: Option<Interactions>,
}

impl<D: DataSource> SiteEngine<D> {
    pub fn new(source: D, page: Page) -> Self {
        Self {
            source,
            page,
            phase: Phase::Loading,
            interactions: None,
        }
    }

    pub async fn run(&mut self) -> Phase {
        // Both outcomes are terminal; a second call must not re-drive the
        // pipeline or resurrect a failed page.
        if self.phase != Phase::Loading {
            return self.phase;
        }
        match self.render_pipeline().await {
            Ok(interactions) => {
                tracing::info!("Page rendered");
                self.interactions = Some(interactions);
                self.phase = Phase::Rendered;
            }
            Err(e) => {
                tracing::error!("Error loading data: {}", e);
                self.page.replace_body(ERROR_NOTICE);
                self.phase = Phase::Failed;
            }
        }
        self.phase
    }

    async fn render_pipeline(&mut self) -> Result<Interactions> {
        tracing::debug!("Fetching portfolio data");
        let data = self.source.fetch().await?;

        tracing::debug!("Rendering sections for {}", data.name);
        render::render_all(&mut self.page, &data)?;

        Interactions::install(&self.page)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    /// `Some` once the pipeline has rendered; handlers stay live for the
    /// rest of the page session.
    pub fn interactions(&self) -> Option<&Interactions> {
        self.interactions.as_ref()
    }

    pub fn into_page(self) -> Page {
        self.page
    }
}
