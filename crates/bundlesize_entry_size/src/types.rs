use bundlesize_core::SizeInfo;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrySize {
    pub id: String,
    #[serde(flatten)]
    pub size: SizeInfo,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeReport {
    /// Entries matching the report prefix, in manifest order
    pub entries: Vec<EntrySize>,
    /// Number of chunks with a cached size once every entry was measured
    pub sized_chunks: usize,
    #[serde(skip)]
    pub entries_measured: usize,
}
