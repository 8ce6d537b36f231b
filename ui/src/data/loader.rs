use dioxus::logger::tracing::{debug, info};

use crate::core::catalog::Catalog;
use crate::core::level::Level;
use crate::data::documents::{parse_level, parse_results, LevelDocument, ResultsDocument};
use crate::data::{DataLayout, DocumentSource, LoadError};

/// Fetch the four level documents and the results document concurrently and
/// merge them. Any failed fetch or parse fails the whole load.
pub async fn load_catalog<S: DocumentSource>(
    source: &S,
    layout: &DataLayout,
) -> Result<Catalog, LoadError> {
    let [p1, p2, p3, p4] = Level::ALL.map(|level| layout.level_path(level));
    let results_path = layout.results_path();

    info!("loading catalog from {}", layout.data_dir);

    let (l1, l2, l3, l4, results) = futures::try_join!(
        fetch_level(source, &p1),
        fetch_level(source, &p2),
        fetch_level(source, &p3),
        fetch_level(source, &p4),
        fetch_results(source, &results_path),
    )?;

    let mut builder = Catalog::builder();
    for (level, doc) in Level::ALL.into_iter().zip([&l1, &l2, &l3, &l4]) {
        debug!("{level}: {} visualizations", doc.visualizations.len());
        builder.add_level(level, doc);
    }
    builder.add_results(&results);
    let catalog = builder.build();

    info!(
        "catalog ready: {} visualizations, {} annotated",
        catalog.len(),
        catalog.annotated_count()
    );
    Ok(catalog)
}

async fn fetch_level<S: DocumentSource>(source: &S, path: &str) -> Result<LevelDocument, LoadError> {
    let bytes = source.fetch(path).await?;
    parse_level(path, &bytes)
}

async fn fetch_results<S: DocumentSource>(
    source: &S,
    path: &str,
) -> Result<ResultsDocument, LoadError> {
    let bytes = source.fetch(path).await?;
    parse_results(path, &bytes)
}
