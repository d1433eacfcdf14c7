//! Minimal aligned-column table rendering for card listings.

/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Specifies the header and alignment of a single column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub alignment: Alignment,
}

/// Left-aligned column.
pub fn left(header: impl Into<String>) -> TableColumn {
    TableColumn {
        header: header.into(),
        alignment: Alignment::Left,
    }
}

/// Right-aligned column, for numeric cells.
pub fn right(header: impl Into<String>) -> TableColumn {
    TableColumn {
        header: header.into(),
        alignment: Alignment::Right,
    }
}

/// Represents a table with column metadata and rows of plain-text cells.
pub struct Table {
    columns: Vec<TableColumn>,
    rows: Vec<Vec<String>>,
}

const COLUMN_GAP: usize = 3;

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Computes the content width for each column from its header and cells.
    fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = column.header.chars().count();
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(cell.chars().count());
                    }
                }
                width
            })
            .collect()
    }

    fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let text = row.get(idx).map(|s| s.as_str()).unwrap_or("");
                let pad = widths[idx].saturating_sub(text.chars().count());
                match column.alignment {
                    Alignment::Left => format!("{}{}", text, " ".repeat(pad)),
                    Alignment::Right => format!("{}{}", " ".repeat(pad), text),
                }
            })
            .collect();

        cells.join(&" ".repeat(COLUMN_GAP)).trim_end().to_string()
    }

    /// Renders the table with a header row and a separator rule.
    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();

        let mut out = self.render_row(&headers, &widths);
        out.push('\n');
        let rule_width: usize =
            widths.iter().sum::<usize>() + COLUMN_GAP * widths.len().saturating_sub(1);
        out.push_str(&"-".repeat(rule_width));

        for row in &self.rows {
            out.push('\n');
            out.push_str(&self.render_row(row, &widths));
        }

        out
    }
}
