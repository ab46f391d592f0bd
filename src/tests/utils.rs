use serde_json::{json, Value};

/// One `itemListElement` entry the way the search page lays it out.
pub fn list_item(name: &str, price: Value, locality: &str, lat: f64, lon: f64) -> Value {
    json!({
        "@type": "ListItem",
        "item": {
            "@type": "Product",
            "name": name,
            "offers": {
                "@type": "Offer",
                "price": price,
                "priceCurrency": "USD",
                "availableAtOrFrom": {
                    "@type": "Place",
                    "address": {
                        "@type": "PostalAddress",
                        "addressLocality": locality,
                        "addressRegion": "NC"
                    },
                    "geo": {
                        "@type": "GeoCoordinates",
                        "latitude": lat,
                        "longitude": lon
                    }
                }
            }
        }
    })
}

/// A search results page carrying `items` in its JSON-LD block.
pub fn search_page(items: Vec<Value>) -> String {
    let data = json!({
        "@context": "https://schema.org",
        "@type": "ItemList",
        "itemListElement": items,
    });
    page_with_script(&format!(
        r#"<script type="application/ld+json" id="ld_searchpage_results">{data}</script>"#
    ))
}

pub fn page_with_script(script: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<title>raleigh cars &amp; trucks - by owner - craigslist</title>
<script type="application/ld+json" id="ld_breadcrumb_data">{{"@type":"BreadcrumbList"}}</script>
{script}
</head>
<body><div class="cl-search-results"></div></body>
</html>"#
    )
}
