//! List-response summarization
//!
//! List and search operations for the heavier entities return a trimmed
//! projection by default so an LLM client does not pay for full records it
//! will immediately discard. The per-entity detail tools remain the way to
//! fetch complete objects; a `fields` argument selects custom columns and
//! the literal value `all` bypasses summarization entirely.

use serde_json::{json, Map, Value};

/// Default projection per entity type
const SUMMARY_FIELDS: &[(&str, &[&str])] = &[
    (
        "candidates",
        &["id", "first_name", "last_name", "email", "status", "created_date"],
    ),
    (
        "jobs",
        &["id", "title", "status", "department", "location", "created_date"],
    ),
    (
        "companies",
        &["id", "name", "website", "city", "state", "phone"],
    ),
    (
        "contacts",
        &["id", "first_name", "last_name", "email", "title", "company_id"],
    ),
    (
        "activities",
        &["id", "type", "subject", "date", "created_by"],
    ),
];

fn default_fields(entity: &str) -> &'static [&'static str] {
    SUMMARY_FIELDS
        .iter()
        .find(|(name, _)| *name == entity)
        .map(|(_, fields)| *fields)
        .unwrap_or(&[])
}

/// Transform a raw API list response into a summarized version.
///
/// `fields` is a comma-separated list of field names to keep, or `None` for
/// the default projection of the entity type. The `id` field is always
/// carried when present. The upstream API returns items either under
/// `_embedded.<entity>`, as a bare array, or keyed by the entity name.
pub fn summarize_list_response(raw: &Value, entity: &str, fields: Option<&str>) -> Value {
    if raw.is_null() {
        return json!({
            "error": "No response from API",
            "items": [],
            "total": 0,
        });
    }

    let selected: Vec<String> = match fields {
        Some(list) => list
            .split(',')
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .collect(),
        None => default_fields(entity).iter().map(|f| f.to_string()).collect(),
    };

    let items: Vec<Value> = if let Some(embedded) = raw.get("_embedded").and_then(|e| e.get(entity))
    {
        embedded.as_array().cloned().unwrap_or_default()
    } else if let Some(list) = raw.as_array() {
        list.clone()
    } else if let Some(keyed) = raw.get(entity).and_then(|v| v.as_array()) {
        keyed.clone()
    } else {
        Vec::new()
    };

    let items: Vec<Value> = if selected.is_empty() {
        items
    } else {
        items
            .into_iter()
            .map(|item| match item.as_object() {
                Some(obj) => {
                    let mut summary = Map::new();
                    for field in &selected {
                        if let Some(value) = obj.get(field) {
                            summary.insert(field.clone(), value.clone());
                        }
                    }
                    if let Some(id) = obj.get("id") {
                        summary.entry("id".to_string()).or_insert_with(|| id.clone());
                    }
                    Value::Object(summary)
                }
                None => item,
            })
            .collect()
    };

    let count = items.len();
    let total = raw
        .get("total")
        .or_else(|| raw.get("total_count"))
        .and_then(|v| v.as_u64())
        .unwrap_or(count as u64);
    let page = raw.get("page").and_then(|v| v.as_u64());
    let per_page = raw.get("per_page").and_then(|v| v.as_u64());

    let mut result = Map::new();
    result.insert(entity.to_string(), Value::Array(items));
    result.insert("count".to_string(), json!(count));
    result.insert("total".to_string(), json!(total));
    result.insert("page".to_string(), page.map_or(Value::Null, |p| json!(p)));
    result.insert(
        "per_page".to_string(),
        per_page.map_or(Value::Null, |p| json!(p)),
    );

    let effective_page = page.unwrap_or(1).max(1);
    let effective_per_page = per_page.unwrap_or(25).max(1);
    if total > effective_page * effective_per_page {
        let singular = entity.strip_suffix('s').unwrap_or(entity);
        result.insert("has_more".to_string(), json!(true));
        result.insert("next_page".to_string(), json!(effective_page + 1));
        result.insert(
            "hint".to_string(),
            json!(format!(
                "Showing {count} of {total} {entity}. Use page={} to fetch more. \
                 Use get_{singular}(id) for full details.",
                effective_page + 1
            )),
        );
    } else {
        result.insert("has_more".to_string(), json!(false));
    }

    Value::Object(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded_companies(total: u64, page: u64, per_page: u64) -> Value {
        json!({
            "_embedded": {
                "companies": [
                    {"id": 1, "name": "Acme", "website": "acme.test", "city": "SF",
                     "state": "CA", "phone": "555", "internal_notes": "drop me"},
                    {"id": 2, "name": "Globex", "city": "NY"},
                ]
            },
            "total": total,
            "page": page,
            "per_page": per_page,
        })
    }

    #[test]
    fn summarizes_embedded_response_with_default_fields() {
        let out = summarize_list_response(&embedded_companies(2, 1, 25), "companies", None);
        let items = out["companies"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["name"], "Acme");
        assert!(items[0].get("internal_notes").is_none());
        assert_eq!(out["count"], 2);
        assert_eq!(out["has_more"], false);
    }

    #[test]
    fn custom_fields_still_carry_id() {
        let out =
            summarize_list_response(&embedded_companies(2, 1, 25), "companies", Some("name"));
        let items = out["companies"].as_array().unwrap();
        assert_eq!(items[0]["id"], 1);
        assert_eq!(items[0]["name"], "Acme");
        assert!(items[0].get("city").is_none());
    }

    #[test]
    fn pagination_hint_points_at_next_page() {
        let out = summarize_list_response(&embedded_companies(50, 1, 10), "companies", None);
        assert_eq!(out["has_more"], true);
        assert_eq!(out["next_page"], 2);
        let hint = out["hint"].as_str().unwrap();
        assert!(hint.contains("page=2"));
        assert!(hint.contains("get_company(id)"));
    }

    #[test]
    fn handles_bare_list_and_null_responses() {
        let raw = json!([{"id": 7, "first_name": "Ada"}]);
        let out = summarize_list_response(&raw, "contacts", None);
        assert_eq!(out["contacts"][0]["id"], 7);
        assert_eq!(out["total"], 1);

        let out = summarize_list_response(&Value::Null, "contacts", None);
        assert_eq!(out["total"], 0);
        assert_eq!(out["items"], json!([]));
    }
}
