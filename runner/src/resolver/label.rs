use crate::browser::{Page, PageElement};
use crate::resolver::context::RowContext;
use crate::resolver::fill::fill_element;
use crate::resolver::outcome::{Miss, Outcome, Resolution, SkipReason};
use crate::resolver::ResolverSettings;
use crate::utils::{manhattan_distance, matches_all_keywords, BoundingBox, Point};

/// First visible label-like element whose text holds every keyword.
async fn find_label<P: Page>(
    page: &P,
    settings: &ResolverSettings,
    keywords: &[String],
) -> Option<(usize, BoundingBox)> {
    let labels = match page.query_all(&settings.label_query).await {
        Ok(labels) => labels,
        Err(e) => {
            tracing::debug!("label query failed: {}", e);
            return None;
        }
    };

    for (i, label) in labels.iter().enumerate() {
        let bb = match label.bounding_box().await {
            Ok(Some(bb)) => bb,
            _ => continue,
        };
        let text = match label.inner_text(settings.text_timeout).await {
            Ok(text) => text,
            Err(_) => continue,
        };
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        // First match wins, no ranking between candidates.
        if matches_all_keywords(text, keywords) {
            tracing::debug!("🏷️ label #{} '{}' matches {:?}", i, text, keywords);
            return Some((i, bb));
        }
    }

    None
}

/// Nearest unused, visible, enabled input to `anchor`, with the skip trail.
///
/// Ties keep the earliest element in document order.
async fn nearest_input<E: PageElement>(
    inputs: &[E],
    anchor: Point,
    ctx: &RowContext,
) -> (Option<usize>, Vec<(usize, SkipReason)>) {
    let mut skipped = Vec::new();
    let mut best: Option<(usize, f64)> = None;

    for (j, input) in inputs.iter().enumerate() {
        if ctx.is_used(j) {
            skipped.push((j, SkipReason::Used));
            continue;
        }
        let bb = match input.bounding_box().await {
            Ok(Some(bb)) => bb,
            _ => {
                skipped.push((j, SkipReason::NotVisible));
                continue;
            }
        };
        // A failed disabled check counts as enabled.
        if let Ok(true) = input.is_disabled().await {
            skipped.push((j, SkipReason::Disabled));
            continue;
        }

        let d = manhattan_distance(bb.center(), anchor);
        if best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some((j, d));
        }
    }

    (best.map(|(j, _)| j), skipped)
}

/// Fills the input nearest to the first label matching `keywords`.
///
/// Labels and inputs are queried fresh on every call; nothing is carried over
/// from earlier fields or rows except the ordinals recorded in `ctx`.
pub async fn resolve_by_label<P: Page>(
    page: &P,
    settings: &ResolverSettings,
    keywords: &[String],
    value: &str,
    ctx: &mut RowContext,
) -> Resolution {
    let (label_idx, label_box) = match find_label(page, settings, keywords).await {
        Some(found) => found,
        None => return Resolution::miss(Miss::NoLabelMatch),
    };

    let inputs = match page.query_all(&settings.input_query).await {
        Ok(inputs) => inputs,
        Err(e) => {
            tracing::debug!("input query failed: {}", e);
            let mut resolution = Resolution::miss(Miss::NoEligibleInput);
            resolution.label = Some(label_idx);
            return resolution;
        }
    };

    let (winner, skipped) = nearest_input(&inputs, label_box.center(), ctx).await;
    let mut resolution = Resolution {
        outcome: Outcome::NotFound(Miss::NoEligibleInput),
        label: Some(label_idx),
        skipped,
    };

    let Some(index) = winner else {
        return resolution;
    };

    match fill_element(&inputs[index], value).await {
        Ok(method) => {
            ctx.mark_used(index);
            tracing::debug!("✅ row {}: {:?} -> input #{} ({:?})", ctx.row_number(), keywords, index, method);
            resolution.outcome = Outcome::Filled { index, method };
        }
        Err(e) => {
            tracing::debug!("input #{} could not be filled: {}", index, e);
            resolution.outcome = Outcome::NotFound(Miss::FillFailed);
        }
    }

    resolution
}
