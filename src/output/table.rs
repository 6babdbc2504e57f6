//! Plain-text tables.

/// Column-aligned list with an upper-case header row.
#[derive(Debug, Default)]
pub struct ListTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ListTable {
    pub fn new(header: &[&str]) -> Self {
        Self {
            header: header.iter().map(|h| h.to_uppercase()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn append(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.header.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(len),
                    None => widths.push(len),
                }
            }
        }

        let mut out = String::new();
        for row in std::iter::once(&self.header).chain(self.rows.iter()) {
            let mut line = String::new();
            for (i, cell) in row.iter().enumerate() {
                let width = widths.get(i).copied().unwrap_or_default();
                line.push_str(&format!("{:<width$}   ", cell, width = width));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

/// Two-column key/value listing for a single object.
#[derive(Debug, Default)]
pub struct DetailsTable {
    rows: Vec<(String, String)>,
}

impl DetailsTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_bulk<K, V>(&mut self, rows: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.rows
            .extend(rows.into_iter().map(|(k, v)| (k.into(), v.into())));
    }

    pub fn render(&self) -> String {
        let width = self
            .rows
            .iter()
            .map(|(k, _)| k.chars().count())
            .max()
            .unwrap_or_default();

        let mut out = String::new();
        for (key, value) in &self.rows {
            let line = format!("  {:<width$}   {}", key, value, width = width);
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}
