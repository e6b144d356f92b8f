use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use parsha_settings::TextSourcesConfig;

/// Table of text sources: one row per source, marking the main one.
///
/// The main source gets its own row when it has no details entry.
pub fn sources_table(config: &TextSourcesConfig) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Source").add_attribute(Attribute::Bold),
        Cell::new("Main").add_attribute(Attribute::Bold),
        Cell::new("In details").add_attribute(Attribute::Bold),
    ]);

    if !config.enabled_in_details.contains_key(&config.main) {
        table.add_row(vec![
            Cell::new(config.main.as_str()),
            Cell::new("*").set_alignment(CellAlignment::Center),
            Cell::new("-").set_alignment(CellAlignment::Center),
        ]);
    }
    for (source, enabled) in &config.enabled_in_details {
        let main = if *source == config.main { "*" } else { "" };
        let shown = if *enabled { "yes" } else { "no" };
        table.add_row(vec![
            Cell::new(source.as_str()),
            Cell::new(main).set_alignment(CellAlignment::Center),
            Cell::new(shown).set_alignment(CellAlignment::Center),
        ]);
    }
    table
}
