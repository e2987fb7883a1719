/// Minimal aligned text-table renderer for command output.

/// Gap between adjacent columns.
const COLUMN_GAP: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// One column definition: display header plus cell alignment.
///
/// Headers are display labels only and are allowed to repeat; columns are
/// identified by position.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Column {
            header: header.to_string(),
            align: Align::Left,
        }
    }

    pub fn right(header: &str) -> Self {
        Column {
            header: header.to_string(),
            align: Align::Right,
        }
    }
}

/// A row-oriented table rendered with per-column widths.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Table {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append one row. Cell count must match the column count.
    pub fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of each column: the widest of its header and all of its cells.
    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.header.len()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.len());
            }
        }
        widths
    }

    fn format_cell(cell: &str, align: Align, width: usize) -> String {
        match align {
            Align::Left => format!("{:<width$}", cell),
            Align::Right => format!("{:>width$}", cell),
        }
    }

    /// Render header, underline and rows. Every line ends with a newline;
    /// trailing padding is trimmed.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut output = String::new();

        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, &w)| Self::format_cell(&col.header, col.align, w))
            .collect();
        output.push_str(header.join(COLUMN_GAP).trim_end());
        output.push('\n');

        let underline: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        output.push_str(&underline.join(COLUMN_GAP));
        output.push('\n');

        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .zip(self.columns.iter().zip(&widths))
                .map(|(cell, (col, &w))| Self::format_cell(cell, col.align, w))
                .collect();
            output.push_str(cells.join(COLUMN_GAP).trim_end());
            output.push('\n');
        }

        output
    }
}
