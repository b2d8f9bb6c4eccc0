use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ColumnConstraint, Table, Width};

use palgen_model::RoleMap;

/// Print the role map as a table: one row per binding, in binding order.
pub fn print_role_table(roles: &RoleMap) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Role"), header_cell("Step")]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
        column.set_constraint(ColumnConstraint::Absolute(Width::Fixed(6)));
    }
    for binding in roles {
        table.add_row(vec![
            Cell::new(&binding.name),
            Cell::new(binding.step.get()),
        ]);
    }
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS);
}
