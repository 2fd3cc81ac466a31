//! The estimate calculation.
//!
//! `compute_cost` is a total function: it performs no I/O, never fails,
//! and clamps invalid quantities instead of rejecting them. Monetary
//! amounts are displayed in whole rubles; rounding is half-away-from-zero
//! and is applied independently per displayed amount at output time, so
//! the total derives from the fractional subtotal rather than from a sum
//! of pre-rounded parts.

use crate::pricing::models::{CostBreakdown, JobSpec, LineItem, LineItemKind, PriceTable};

/// Compute the cost breakdown for one job against one price table.
pub fn compute_cost(table: &PriceTable, spec: &JobSpec) -> CostBreakdown {
    let area = clamp_quantity(spec.area);
    let base_rate = table.base.rate(spec.area_type, spec.material);
    let coeff = table.coefficients.factor(spec.complexity);
    let base_cost = area * base_rate * coeff;

    let mut items = vec![line(LineItemKind::Base, base_cost)];
    let mut subtotal = base_cost;

    if spec.demolition {
        let cost = area * table.extras.demolition_per_m2;
        subtotal += cost;
        items.push(line(LineItemKind::Demolition, cost));
    }
    if spec.prep {
        let cost = area * table.extras.prep_per_m2;
        subtotal += cost;
        items.push(line(LineItemKind::Prep, cost));
    }
    if spec.adhesive {
        let cost = area * table.extras.adhesive_per_m2;
        subtotal += cost;
        items.push(line(LineItemKind::Adhesive, cost));
    }
    if spec.grout {
        let cost = area * table.extras.grout_per_m2;
        subtotal += cost;
        items.push(line(LineItemKind::Grout, cost));
    }
    if spec.waterproofing {
        // Independent-area mode when an override is given, else linked to the tiled area.
        let quantity = spec.waterproofing_area.map(clamp_quantity).unwrap_or(area);
        let cost = quantity * table.extras.waterproofing_per_m2;
        subtotal += cost;
        items.push(line(LineItemKind::Waterproofing, cost));
    }

    // Linear-meter items are quantity-driven; zero quantity means omitted.
    let miter_lm = clamp_quantity(spec.miter_lm);
    if miter_lm > 0.0 {
        let cost = miter_lm * table.extras.miter_per_lm;
        subtotal += cost;
        items.push(line(LineItemKind::Miter, cost));
    }
    let silicone_lm = clamp_quantity(spec.silicone_lm);
    if silicone_lm > 0.0 {
        let cost = silicone_lm * table.extras.silicone_per_lm;
        subtotal += cost;
        items.push(line(LineItemKind::Silicone, cost));
    }

    let discount = if spec.turnkey {
        (subtotal * table.extras.package_discount_pct / 100.0).round()
    } else {
        0.0
    };

    CostBreakdown {
        items,
        subtotal: to_whole(subtotal),
        discount: discount as i64,
        total: to_whole((subtotal - discount).max(0.0)),
    }
}

fn line(kind: LineItemKind, raw: f64) -> LineItem {
    LineItem {
        kind,
        amount: to_whole(raw),
    }
}

/// Negative or non-finite user input counts as zero.
fn clamp_quantity(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn to_whole(value: f64) -> i64 {
    value.round() as i64
}
