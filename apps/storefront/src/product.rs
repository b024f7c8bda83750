use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Product as it arrives in the listing envelope.
///
/// `rate` may be a number, a string or absent, and any text field may be
/// missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub category: String,

    #[serde(rename = "type", default)]
    pub product_type: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<Value>,

    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl CatalogProduct {
    /// Numeric price; missing or non-numeric rates read as 0.
    ///
    /// A string rate reads its leading number, so `"1250 PKR"` is 1250 and
    /// `"1,250"` is 1.
    pub fn price(&self) -> f64 {
        let parsed = match &self.rate {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => parse_leading_number(s),
            _ => None,
        };
        parsed.filter(|p| p.is_finite()).unwrap_or(0.0)
    }

    /// Route of the product detail page
    pub fn detail_route(&self) -> String {
        format!("/product/{}", self.id)
    }
}

/// Longest decimal literal at the start of `s`, after leading whitespace:
/// sign, digits with an optional fraction, then an optional exponent.
fn parse_leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - end - 1;
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_end = digits_from(end + 1 + sign);
        if exp_end > end + 1 + sign {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// Listing filter sent as `?category=&type=`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingQuery {
    pub category: Option<String>,
    pub product_type: Option<String>,
}

impl ListingQuery {
    pub fn by_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            product_type: None,
        }
    }

    pub fn with_type(mut self, product_type: impl Into<String>) -> Self {
        self.product_type = Some(product_type.into());
        self
    }

    /// Query pairs, skipping empty values
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        [("category", &self.category), ("type", &self.product_type)]
            .into_iter()
            .filter_map(|(key, value)| {
                value
                    .as_deref()
                    .filter(|v| !v.is_empty())
                    .map(|v| (key, v))
            })
            .collect()
    }
}
