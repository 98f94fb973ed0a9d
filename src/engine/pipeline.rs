use std::sync::mpsc;
use std::time::Instant;

use crate::element::ElementTable;
use crate::net::fetch::{ElementSource, FetchError};

/// Error during the dataset load.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to load periodic table data. {0}")]
    Fetch(#[from] FetchError),
    #[error("Periodic table data is not a JSON array of elements: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Loader stopped before delivering a result")]
    Interrupted,
}

/// The load pipeline: Fetch → Decode → Validate.
pub fn load_table(source: &dyn ElementSource) -> Result<ElementTable, LoadError> {
    let start = Instant::now();
    log::info!("Loading element data from {}", source.describe());

    let body = source.fetch()?;
    let table = ElementTable::from_json(&body)?;

    if table.is_empty() {
        log::warn!("Element data from {} contains no usable records", source.describe());
    }
    log::info!(
        "Loaded {} elements ({} rejected) in {:.1} ms",
        table.len(),
        table.rejected(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(table)
}

/// Run [`load_table`] on a worker thread.
///
/// The result arrives on the returned channel; `notify` runs right after it
/// is sent (the UI uses it to request a repaint).
pub fn spawn_load<F>(
    source: Box<dyn ElementSource + Send>,
    notify: F,
) -> mpsc::Receiver<Result<ElementTable, LoadError>>
where
    F: FnOnce() + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let result = load_table(source.as_ref());
        if let Err(ref e) = result {
            log::error!("{}", e);
        }
        let _ = tx.send(result);
        notify();
    });
    rx
}
