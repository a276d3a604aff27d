// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The run orchestrator: one request, one order, one pass over its
//! lines.

use crate::error::{ApiError, translate_gateway_error};
use crate::request_response::{RunMode, RunRequest, RunSummary, ShortageInfo};
use stock_alloc::{AllocationOutcome, ReferenceData, UsageTracker, allocate};
use stock_alloc_domain::{Order, OrderLine, Reference, StockLocation};
use stock_alloc_gateway::{LinePatch, ListStore};
use tracing::info;

/// Status written to a committed line and its preparation field.
const LINE_PREPARED: &str = "Préparé";
/// Status written to the order once a commit run completes.
const ORDER_RECEIVED: &str = "Réceptionné";
/// Summary label for a run with every line covered.
const RUN_COMPLETE: &str = "Validé";
/// Summary label for a run with at least one shortage.
const RUN_COMPLETE_WITH_SHORTAGES: &str = "Validé (Rupture SdF)";

/// Runs allocation for one order.
///
/// Reference data is loaded once, before the first line; every line is
/// judged against that same snapshot, with a fresh [`UsageTracker`]
/// preventing two lines from claiming the same stock. Lines are
/// processed sequentially in the order the store returns them.
///
/// A shortage is not an error: the run continues with the remaining
/// lines and the summary reports every uncovered line. In
/// [`RunMode::Commit`], covered lines are patched to their prepared
/// status and the order's own status is advanced once the pass
/// completes; [`RunMode::Verify`] writes nothing.
///
/// # Errors
///
/// Returns an [`ApiError`] when the order does not exist or a store
/// read or write fails.
pub async fn run_allocation(
    store: &dyn ListStore,
    request: &RunRequest,
    mode: RunMode,
) -> Result<RunSummary, ApiError> {
    let order: Order = store
        .get_order(&request.order_id)
        .await
        .map_err(|err| translate_gateway_error(&err))?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Commande"),
            message: format!("no order with id {}", request.order_id),
        })?;

    let lines: Vec<OrderLine> = store
        .list_order_lines(&request.order_id)
        .await
        .map_err(|err| translate_gateway_error(&err))?;
    info!(
        order_id = %order.id,
        line_count = lines.len(),
        primary_site = %order.primary_site,
        "Order resolved"
    );

    let references: Vec<Reference> = distinct_references(&lines);

    let products = store
        .list_products()
        .await
        .map_err(|err| translate_gateway_error(&err))?;
    let inventory = store
        .list_inventory()
        .await
        .map_err(|err| translate_gateway_error(&err))?;
    let arrivals = store
        .list_arrivals()
        .await
        .map_err(|err| translate_gateway_error(&err))?;
    let reservations = store
        .list_reservations(&references)
        .await
        .map_err(|err| translate_gateway_error(&err))?;
    let data: ReferenceData = ReferenceData::new(products, inventory, arrivals, reservations);

    let mut tracker: UsageTracker = UsageTracker::new();
    let mut shortages: Vec<ShortageInfo> = Vec::new();

    for line in &lines {
        match allocate(line, &order, &data, &mut tracker) {
            AllocationOutcome::Allocated { source, location } => {
                info!(
                    reference = %line.reference,
                    quantity = line.quantity,
                    source = %source,
                    "Line covered"
                );
                if mode == RunMode::Commit {
                    let patch: LinePatch = commit_patch(request, location.as_ref());
                    store
                        .update_line_fields(&line.id, &patch)
                        .await
                        .map_err(|err| translate_gateway_error(&err))?;
                }
            }
            AllocationOutcome::Shortage { reason } => {
                info!(
                    reference = %line.reference,
                    quantity = line.quantity,
                    reason = %reason,
                    "Line in shortage"
                );
                shortages.push(ShortageInfo {
                    reference: line.reference.value().to_string(),
                    reason: reason.as_str().to_string(),
                });
            }
        }
    }

    if mode == RunMode::Commit {
        store
            .update_order_status(&order.item_id, ORDER_RECEIVED)
            .await
            .map_err(|err| translate_gateway_error(&err))?;
    }

    let status: &str = if shortages.is_empty() {
        RUN_COMPLETE
    } else {
        RUN_COMPLETE_WITH_SHORTAGES
    };
    Ok(RunSummary {
        order_id: order.id,
        status: status.to_string(),
        shortages,
        line_count: lines.len(),
    })
}

/// The distinct references of the order's lines, in first-seen order.
fn distinct_references(lines: &[OrderLine]) -> Vec<Reference> {
    let mut references: Vec<Reference> = Vec::new();
    for line in lines {
        if !references.contains(&line.reference) {
            references.push(line.reference.clone());
        }
    }
    references
}

/// Builds the field patch for a covered line. The receiving context
/// from the request wins; the allocated stock location fills whatever
/// the request leaves unset.
fn commit_patch(request: &RunRequest, location: Option<&StockLocation>) -> LinePatch {
    LinePatch {
        status: Some(String::from(LINE_PREPARED)),
        prep_status: Some(String::from(LINE_PREPARED)),
        prep_site: request
            .receiving_site
            .clone()
            .or_else(|| location.map(|at| at.site.value().to_string())),
        prep_building: request
            .receiving_building
            .clone()
            .or_else(|| location.and_then(|at| at.building.clone())),
        prep_slot: request
            .receiving_slot
            .clone()
            .or_else(|| location.and_then(|at| at.slot.clone())),
    }
}
