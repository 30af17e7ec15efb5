use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier of a catalog product. Ids are assigned by the dataset and are
/// stable across sessions.
pub type ProductId = u32;

/// A single sellable piece from the catalog.
///
/// Products are loaded once from the embedded dataset and never change during
/// a session; the cart stores copies of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    /// Display name. May contain diacritics ("São Jorge", "Iansã").
    pub name: String,

    /// Height in centimeters, kept as text ("30", "20/25").
    pub size: String,

    /// Unit price in BRL. Serialized as a string so the decimal value stays
    /// exact.
    pub price: Decimal,

    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
