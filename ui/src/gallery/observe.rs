//! Reads element geometry through `MountedData` and turns it into
//! visibility samples for the pure logic in `core::visibility`.

use std::rc::Rc;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::visibility::{intersection_ratio, Span, VisibilitySample};

pub(crate) struct Measurement<K> {
    /// Vertical scroll offset of the observing container.
    pub scroll_top: f64,
    pub samples: Vec<VisibilitySample<K>>,
}

async fn vertical_span(node: &MountedData) -> Option<Span> {
    match node.get_client_rect().await {
        Ok(rect) => Some(Span::new(rect.min_y(), rect.max_y())),
        Err(err) => {
            debug!("client rect unavailable: {err:?}");
            None
        }
    }
}

/// Measure every target against `root`'s box. Targets that cannot be
/// measured are left out; `None` when the root itself cannot be.
pub(crate) async fn measure<K: Copy>(
    root: &MountedData,
    targets: &[(K, Rc<MountedData>)],
) -> Option<Measurement<K>> {
    let viewport = vertical_span(root).await?;
    let scroll_top = root
        .get_scroll_offset()
        .await
        .map(|offset| offset.y)
        .unwrap_or_default();

    let mut samples = Vec::with_capacity(targets.len());
    for (key, node) in targets {
        if let Some(span) = vertical_span(node).await {
            samples.push(VisibilitySample::new(*key, intersection_ratio(viewport, span)));
        }
    }

    Some(Measurement {
        scroll_top,
        samples,
    })
}

/// Insert or replace the mounted node registered for `key`, keeping the
/// list ordered by key.
pub(crate) fn register<K: Copy + Ord>(
    nodes: &mut Vec<(K, Rc<MountedData>)>,
    key: K,
    node: Rc<MountedData>,
) {
    nodes.retain(|(existing, _)| *existing != key);
    nodes.push((key, node));
    nodes.sort_by_key(|(k, _)| *k);
}
