use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    quantity::energy::KilowattHours,
    tariff::{quote::Quote, schedule::RateSchedule},
};

fn band_label(lower_bound: KilowattHours, upper_bound: Option<KilowattHours>) -> String {
    match upper_bound {
        Some(upper_bound) => format!("{:.0}–{:.0} kWh", lower_bound.0, upper_bound.0),
        None => format!("{:.0}+ kWh", lower_bound.0),
    }
}

#[must_use]
pub fn build_schedule_table(schedule: &RateSchedule) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Tier", "Band", "Rate"]);
    let mut lower_bound = KilowattHours::ZERO;
    for (index, tier) in schedule.tiers().iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(band_label(lower_bound, tier.upper_bound)),
            Cell::new(format!("{:.0} {}/kWh", tier.rate.0, schedule.cost_unit()))
                .set_alignment(CellAlignment::Right),
        ]);
        if let Some(upper_bound) = tier.upper_bound {
            lower_bound = upper_bound;
        }
    }
    table.add_row(vec![
        Cell::new(""),
        Cell::new("VAT").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}%", schedule.vat_rate() * 100.0))
            .set_alignment(CellAlignment::Right),
    ]);
    table
}

#[must_use]
pub fn build_quote_table(quote: &Quote, cost_unit: &str) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Band", "Rate", "Billable", "Cost"]);
    for share in &quote.shares {
        let is_billed = share.billable > KilowattHours::ZERO;
        let mut row = vec![
            Cell::new(band_label(share.lower_bound, share.upper_bound)),
            Cell::new(format!("{:.0} {cost_unit}/kWh", share.rate.0))
                .set_alignment(CellAlignment::Right),
            Cell::new(share.billable).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1} {cost_unit}", share.cost.0))
                .set_alignment(CellAlignment::Right)
                .fg(if is_billed { Color::Reset } else { Color::DarkGrey }),
        ];
        if !is_billed {
            row = row.into_iter().map(|cell| cell.add_attribute(Attribute::Dim)).collect();
        }
        table.add_row(row);
    }
    table.add_row(vec![
        Cell::new("Base").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(quote.usage).set_alignment(CellAlignment::Right),
        Cell::new(format!("{} {cost_unit}", quote.base))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("With VAT").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
        Cell::new(format!("{} {cost_unit}", quote.with_tax))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
    ]);
    table
}
