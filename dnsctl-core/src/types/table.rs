//! 表格类型定义

use serde::Serialize;

/// 列对齐方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Presentation-neutral tabular result returned by the services.
///
/// Every row has exactly one cell per header; [`Table::add_row`] pads or truncates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub align: Vec<Alignment>,
}

impl Table {
    /// 创建空表格，所有列左对齐
    #[must_use]
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(ToString::to_string).collect(),
            rows: Vec::new(),
            align: vec![Alignment::default(); headers.len()],
        }
    }

    /// 设置指定列的对齐方式（列名不存在时忽略）
    #[must_use]
    pub fn with_align(mut self, header: &str, align: Alignment) -> Self {
        if let Some(index) = self.headers.iter().position(|h| h == header) {
            self.align[index] = align;
        }
        self
    }

    pub fn add_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Rows as JSON objects keyed by header.
    #[must_use]
    pub fn to_json_rows(&self) -> Vec<serde_json::Map<String, serde_json::Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .zip(row)
                    .map(|(h, cell)| (h.clone(), serde_json::Value::String(cell.clone())))
                    .collect()
            })
            .collect()
    }
}
