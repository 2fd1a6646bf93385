use std::sync::Arc;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use crate::http::Fetch;
use crate::listing;
use crate::parser;
use crate::pdf::PageText;
use crate::record::DocumentRecord;

pub const DEFAULT_CONCURRENCY: usize = 4;

/// Discovers briefs on a listing page and extracts a record per brief.
pub struct CollectionScraper<F, P> {
    fetcher: Arc<F>,
    pdf: Arc<P>,
    concurrency: usize,
    progress: bool,
}

impl<F, P> CollectionScraper<F, P>
where
    F: Fetch + 'static,
    P: PageText + 'static,
{
    pub fn new(fetcher: F, pdf: P) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            pdf: Arc::new(pdf),
            concurrency: DEFAULT_CONCURRENCY,
            progress: false,
        }
    }

    /// Max documents in flight. `1` processes strictly one after another.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub async fn discover_document_urls(&self, listing_url: &str) -> Vec<String> {
        listing::discover_document_urls(self.fetcher.as_ref(), listing_url).await
    }

    /// Discover, apply `limit`, parse, and keep identified records.
    pub async fn scrape_reports(
        &self,
        listing_url: &str,
        limit: Option<usize>,
    ) -> Vec<DocumentRecord> {
        let mut urls = self.discover_document_urls(listing_url).await;
        if let Some(limit) = limit {
            urls.truncate(limit);
        }
        self.scrape_urls(urls).await
    }

    /// Parse each URL and drop records without an identifier, keeping input order.
    pub async fn scrape_urls(&self, urls: Vec<String>) -> Vec<DocumentRecord> {
        let total = urls.len();
        let parsed = self.parse_documents(urls).await;
        let processed = parsed.len();

        let kept: Vec<DocumentRecord> = parsed
            .into_iter()
            .filter(|r| {
                if r.identifier.is_none() {
                    debug!("Dropping {}: no identifier", r.source_url());
                }
                r.identifier.is_some()
            })
            .collect();

        info!(
            "Parsed {} documents ({} processed, {} identified)",
            total,
            processed,
            kept.len()
        );
        kept
    }

    /// Fetch and parse concurrently; results come back in input order.
    ///
    /// A task that dies (panic) leaves a gap rather than failing the batch.
    async fn parse_documents(&self, urls: Vec<String>) -> Vec<DocumentRecord> {
        let total = urls.len();
        if total == 0 {
            return Vec::new();
        }

        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let pb = self.progress_bar(total);

        // Workers send (index, record); main loop slots them back into order
        let (tx, mut rx) = tokio::sync::mpsc::channel::<(usize, DocumentRecord)>(self.concurrency * 2);

        for (idx, url) in urls.into_iter().enumerate() {
            let fetcher = Arc::clone(&self.fetcher);
            let pdf = Arc::clone(&self.pdf);
            let sem = Arc::clone(&semaphore);
            let tx = tx.clone();

            tokio::spawn(async move {
                let Ok(_permit) = sem.acquire().await else {
                    return;
                };
                let record = process_document(fetcher.as_ref(), pdf.as_ref(), &url).await;
                let _ = tx.send((idx, record)).await;
            });
        }

        // Drop our copy of tx so rx closes when all spawned tasks finish
        drop(tx);

        let mut slots: Vec<Option<DocumentRecord>> = vec![None; total];
        while let Some((idx, record)) = rx.recv().await {
            debug!("{}", record.summary());
            slots[idx] = Some(record);
            pb.inc(1);
        }
        pb.finish_and_clear();

        let missing = slots.iter().filter(|s| s.is_none()).count();
        if missing > 0 {
            warn!("{} document task(s) ended without a result", missing);
        }

        slots.into_iter().flatten().collect()
    }

    fn progress_bar(&self, total: usize) -> ProgressBar {
        if !self.progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")
        {
            pb.set_style(style.progress_chars("=> "));
        }
        pb
    }
}

/// Fetch one document and parse it. Fetch failures leave only URL-derived fields.
pub async fn process_document<F, P>(fetcher: &F, pdf: &P, url: &str) -> DocumentRecord
where
    F: Fetch,
    P: PageText + ?Sized,
{
    info!("Processing: {}", url);
    let content = match fetcher.fetch(url).await {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            warn!("Error fetching PDF from {}: {}", url, e);
            None
        }
    };
    parser::parse(url, content.as_deref(), pdf)
}
