//! Logical field resolution against export headers.
//!
//! Each logical field has an ordered alias list. For the first alias that any
//! header contains (case-insensitive substring), the first such header in
//! list order wins. A field with no match falls back to its first alias as a
//! label and reads as empty for every record.

use std::fmt;

use serde::Serialize;

use crate::dataset::Record;

/// Columns the engine needs from an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalField {
    Id,
    Date,
    Order,
    Creator,
    SkuName,
    Qty,
    SkuId,
}

impl LogicalField {
    pub const ALL: [LogicalField; 7] = [
        LogicalField::Id,
        LogicalField::Date,
        LogicalField::Order,
        LogicalField::Creator,
        LogicalField::SkuName,
        LogicalField::Qty,
        LogicalField::SkuId,
    ];

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            LogicalField::Id => "id",
            LogicalField::Date => "date",
            LogicalField::Order => "order",
            LogicalField::Creator => "creator",
            LogicalField::SkuName => "sku_name",
            LogicalField::Qty => "qty",
            LogicalField::SkuId => "sku_id",
        }
    }

    /// Header aliases in priority order.
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            LogicalField::Id => &["内容ID", "Content ID", "video_id"],
            LogicalField::Date => &["日期", "Date", "created_time"],
            LogicalField::Order => &["订单", "Order ID", "order_id"],
            LogicalField::Creator => &["达人", "username", "Handle"],
            LogicalField::SkuName => &["商品名称", "Product Name", "title"],
            LogicalField::Qty => &["件数", "Quantity", "Sold", "销量"],
            LogicalField::SkuId => &["Seller Sku", "SKU ID"],
        }
    }

    /// Label used when no header matches.
    pub const fn fallback(self) -> &'static str {
        self.aliases()[0]
    }
}

impl fmt::Display for LogicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logical field bound to a header (or to its fallback label).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedColumn {
    pub field: LogicalField,
    /// Matched header text, or the fallback label when unresolved.
    pub header: String,
    #[serde(skip)]
    pub index: Option<usize>,
    /// Alias that matched.
    pub alias: Option<&'static str>,
}

impl ResolvedColumn {
    fn unresolved(field: LogicalField) -> Self {
        Self {
            field,
            header: field.fallback().to_string(),
            index: None,
            alias: None,
        }
    }

    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.index.is_some()
    }

    /// The record's value for this column; empty when unresolved.
    #[inline]
    pub fn value<'r>(&self, record: &'r Record) -> &'r str {
        match self.index {
            Some(index) => record.get(index),
            None => "",
        }
    }
}

/// Resolved keys for every logical field. Recompute when headers change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldKeys {
    pub id: ResolvedColumn,
    pub date: ResolvedColumn,
    pub order: ResolvedColumn,
    pub creator: ResolvedColumn,
    pub sku_name: ResolvedColumn,
    pub qty: ResolvedColumn,
    pub sku_id: ResolvedColumn,
}

impl FieldKeys {
    pub fn get(&self, field: LogicalField) -> &ResolvedColumn {
        match field {
            LogicalField::Id => &self.id,
            LogicalField::Date => &self.date,
            LogicalField::Order => &self.order,
            LogicalField::Creator => &self.creator,
            LogicalField::SkuName => &self.sku_name,
            LogicalField::Qty => &self.qty,
            LogicalField::SkuId => &self.sku_id,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedColumn> {
        LogicalField::ALL.into_iter().map(|field| self.get(field))
    }

    /// Fields that fell back to their default label.
    pub fn unresolved(&self) -> Vec<LogicalField> {
        self.iter()
            .filter(|column| !column.is_resolved())
            .map(|column| column.field)
            .collect()
    }
}

/// Resolve every logical field against `headers`, logging each outcome.
pub fn resolve_fields(headers: &[String]) -> FieldKeys {
    let keys = match_fields(headers);
    for column in keys.iter() {
        match column.index {
            Some(index) => tracing::debug!(field = %column.field, header = %column.header, index, "resolved column"),
            None => tracing::warn!(
                field = %column.field,
                fallback = %column.header,
                "no header matches; values read as empty"
            ),
        }
    }
    keys
}

/// [`resolve_fields`] without logging; used when merging files.
pub fn match_fields(headers: &[String]) -> FieldKeys {
    let lowered: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();
    let resolve = |field| resolve_column(field, headers, &lowered);
    FieldKeys {
        id: resolve(LogicalField::Id),
        date: resolve(LogicalField::Date),
        order: resolve(LogicalField::Order),
        creator: resolve(LogicalField::Creator),
        sku_name: resolve(LogicalField::SkuName),
        qty: resolve(LogicalField::Qty),
        sku_id: resolve(LogicalField::SkuId),
    }
}

fn resolve_column(field: LogicalField, headers: &[String], lowered: &[String]) -> ResolvedColumn {
    for alias in field.aliases() {
        let needle = alias.to_lowercase();
        if let Some(index) = lowered.iter().position(|header| header.contains(&needle)) {
            return ResolvedColumn {
                field,
                header: headers[index].clone(),
                index: Some(index),
                alias: Some(alias),
            };
        }
    }
    ResolvedColumn::unresolved(field)
}
