use comfy_table::presets::UTF8_FULL;
use std::fmt;

/// Header and rows as display strings. Cells may span several lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub head: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(head: Vec<String>) -> Self {
        Self {
            head,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn to_grid(&self) -> comfy_table::Table {
        let mut grid = comfy_table::Table::new();
        grid.load_preset(UTF8_FULL).set_header(self.head.clone());
        for row in &self.rows {
            grid.add_row(row.clone());
        }
        grid
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.to_grid())
    }
}
