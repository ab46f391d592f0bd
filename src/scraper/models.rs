use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// ld_searchpage_results
//  └── itemListElement[]
//       └── item
//            ├── name
//            └── offers
//                 ├── price
//                 └── availableAtOrFrom
//                      ├── address
//                      │    └── addressLocality
//                      └── geo
//                           ├── latitude
//                           └── longitude

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResults {
    #[serde(deserialize_with = "lenient_list")]
    pub item_list_element: Vec<ListElement>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListElement {
    #[serde(deserialize_with = "lenient")]
    pub item: RawListing,
}

/// One listing exactly as the seller entered it. Every field may be missing.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawListing {
    #[serde(deserialize_with = "text_or_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub offers: Offers,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Offers {
    // Seen as "12500", 12500, "$12,500" or missing.
    pub price: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub available_at_or_from: Place,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Place {
    #[serde(deserialize_with = "lenient")]
    pub address: Address,
    #[serde(deserialize_with = "lenient")]
    pub geo: Geo,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    #[serde(deserialize_with = "text_or_none")]
    pub address_locality: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Geo {
    pub latitude: Option<Value>,
    pub longitude: Option<Value>,
}

impl RawListing {
    pub fn price(&self) -> Option<&Value> {
        self.offers.price.as_ref()
    }

    pub fn locality(&self) -> Option<&str> {
        self.offers
            .available_at_or_from
            .address
            .address_locality
            .as_deref()
    }

    pub fn latitude(&self) -> Option<&Value> {
        self.offers.available_at_or_from.geo.latitude.as_ref()
    }

    pub fn longitude(&self) -> Option<&Value> {
        self.offers.available_at_or_from.geo.longitude.as_ref()
    }
}

// Sellers' records are messy: `"offers": null`, `"item": "sold"`, a name
// typed as a number. A field with the wrong shape degrades to its default
// instead of failing the whole results block.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

// Entries that are not list items still count as (empty) listings.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let entries = match Value::deserialize(deserializer)? {
        Value::Array(entries) => entries,
        _ => return Ok(Vec::new()),
    };

    Ok(entries
        .into_iter()
        .map(|entry| serde_json::from_value(entry).unwrap_or_default())
        .collect())
}

fn text_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}
