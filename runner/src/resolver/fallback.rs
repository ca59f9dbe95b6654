use crate::browser::{Page, PageElement};
use crate::resolver::context::RowContext;
use crate::resolver::fill::fill_element;
use crate::resolver::outcome::{Miss, Outcome, Resolution, SkipReason};
use crate::resolver::ResolverSettings;

/// Fills the first unused, visible, empty input in document order.
///
/// Last resort for a field whose label could not be found. A value that cannot
/// be read counts as non-empty.
pub async fn resolve_fallback<P: Page>(
    page: &P,
    settings: &ResolverSettings,
    value: &str,
    ctx: &mut RowContext,
) -> Resolution {
    let inputs = match page.query_all(&settings.input_query).await {
        Ok(inputs) => inputs,
        Err(e) => {
            tracing::debug!("input query failed: {}", e);
            return Resolution::miss(Miss::NoEligibleInput);
        }
    };

    let mut skipped = Vec::new();

    for (j, input) in inputs.iter().enumerate() {
        if ctx.is_used(j) {
            skipped.push((j, SkipReason::Used));
            continue;
        }
        if !matches!(input.bounding_box().await, Ok(Some(_))) {
            skipped.push((j, SkipReason::NotVisible));
            continue;
        }
        match input.input_value(settings.value_timeout).await {
            Ok(current) if current.trim().is_empty() => {}
            Ok(_) => {
                skipped.push((j, SkipReason::NotEmpty));
                continue;
            }
            Err(_) => {
                skipped.push((j, SkipReason::ReadFailed));
                continue;
            }
        }

        match fill_element(input, value).await {
            Ok(method) => {
                ctx.mark_used(j);
                tracing::debug!("↪️ row {}: fallback -> input #{} ({:?})", ctx.row_number(), j, method);
                return Resolution {
                    outcome: Outcome::Filled { index: j, method },
                    label: None,
                    skipped,
                };
            }
            Err(e) => {
                tracing::debug!("fallback input #{} refused value: {}", j, e);
                skipped.push((j, SkipReason::FillFailed));
            }
        }
    }

    Resolution {
        outcome: Outcome::NotFound(Miss::NoEligibleInput),
        label: None,
        skipped,
    }
}
