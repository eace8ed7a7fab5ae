use dioxus::prelude::*;
use futures::StreamExt;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::app::components::{Button, ButtonVariant, Card, EmptyState, ErrorMessage, LoadingText};
use crate::shared::services::AdminService;

const PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryParams {
    current_page: u32,
    page_size: u32,
}

#[derive(Debug, Clone, Serialize)]
struct RuleParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    desc: Option<String>,
}

/// Write operations triggered from the table
#[derive(Debug, Clone, PartialEq)]
enum RuleAction {
    Create { desc: String },
    Update { key: String, desc: String },
    Remove { key: String },
}

type Row = Map<String, Value>;

/// Rows of a list response: either `{ "list": [...] }` or a bare array.
/// Non-object entries are dropped.
fn rows_from_response(body: &Value) -> Vec<Row> {
    let list = match body {
        Value::Array(items) => items,
        Value::Object(fields) => match fields.get("list") {
            Some(Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };
    list.iter()
        .filter_map(|item| item.as_object().cloned())
        .collect()
}

/// Column names in first-seen order across all rows
fn columns_of(rows: &[Row]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for row in rows {
        for name in row.keys() {
            if !columns.contains(name) {
                columns.push(name.clone());
            }
        }
    }
    columns
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Identifier sent back for update/remove: `key`, else `id`
fn row_key(row: &Row) -> Option<String> {
    ["key", "id"]
        .iter()
        .find_map(|field| row.get(*field))
        .map(|value| cell_text(Some(value)))
        .filter(|key| !key.is_empty())
}

#[component]
pub fn TableList() -> Element {
    let service = use_context::<AdminService>();
    let mut description = use_signal(String::new);
    let mut action_error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let mut rules = use_resource({
        let service = service.clone();
        move || {
            let service = service.clone();
            async move {
                service
                    .query(&QueryParams {
                        current_page: 1,
                        page_size: PAGE_SIZE,
                    })
                    .await
                    .map_err(|e| e.to_string())
            }
        }
    });

    let actions = use_coroutine(move |mut rx: UnboundedReceiver<RuleAction>| {
        let service = service.clone();
        async move {
            while let Some(action) = rx.next().await {
                busy.set(true);
                let result = match &action {
                    RuleAction::Create { desc } => {
                        service
                            .create(&RuleParams { key: None, desc: Some(desc.clone()) })
                            .await
                    }
                    RuleAction::Update { key, desc } => {
                        service
                            .update(&RuleParams {
                                key: Some(key.clone()),
                                desc: Some(desc.clone()),
                            })
                            .await
                    }
                    RuleAction::Remove { key } => {
                        service
                            .remove(&RuleParams { key: Some(key.clone()), desc: None })
                            .await
                    }
                };
                busy.set(false);

                match result {
                    Ok(_) => {
                        action_error.set(None);
                        rules.restart();
                    }
                    Err(e) => {
                        tracing::warn!("Rule action {:?} failed: {}", action, e);
                        action_error.set(Some(e.to_string()));
                    }
                }
            }
        }
    });

    let body = match &*rules.read() {
        None => rsx! {
            LoadingText { message: "Loading rules...".to_string() }
        },
        Some(Err(e)) => rsx! {
            ErrorMessage { message: format!("Failed to load rules: {}", e) }
        },
        Some(Ok(response)) => {
            let rows = rows_from_response(response);
            let columns = columns_of(&rows);
            if rows.is_empty() {
                rsx! {
                    EmptyState { message: "No rules yet".to_string() }
                }
            } else {
                rsx! {
                    table { class: "c-table",
                        thead {
                            tr {
                                for column in columns.iter() {
                                    th { key: "{column}", "{column}" }
                                }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for (index, row) in rows.into_iter().enumerate() {
                                tr { key: "{index}",
                                    for column in columns.iter() {
                                        td { key: "{column}", {cell_text(row.get(column))} }
                                    }
                                    td { class: "c-table__actions",
                                        if let Some(key) = row_key(&row) {
                                            Button {
                                                variant: Some(ButtonVariant::Link),
                                                disabled: Some(busy() || description().trim().is_empty()),
                                                onclick: {
                                                    let key = key.clone();
                                                    move |_| actions.send(RuleAction::Update {
                                                        key: key.clone(),
                                                        desc: description().trim().to_string(),
                                                    })
                                                },
                                                "Update"
                                            }
                                            Button {
                                                variant: Some(ButtonVariant::Danger),
                                                disabled: Some(busy()),
                                                onclick: move |_| actions.send(RuleAction::Remove { key: key.clone() }),
                                                "Remove"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "c-page c-page--table-list",
            header { class: "c-page__header",
                h1 { class: "c-page__title", "Table List" }
            }
            Card {
                div { class: "c-table-list__toolbar",
                    input {
                        class: "c-input",
                        r#type: "text",
                        placeholder: "Rule description",
                        value: description(),
                        oninput: move |evt| description.set(evt.value()),
                    }
                    Button {
                        variant: Some(ButtonVariant::Primary),
                        loading: Some(busy()),
                        disabled: Some(description().trim().is_empty()),
                        onclick: move |_| {
                            let desc = description().trim().to_string();
                            actions.send(RuleAction::Create { desc });
                            description.set(String::new());
                        },
                        "New"
                    }
                    Button {
                        disabled: Some(busy()),
                        onclick: move |_| rules.restart(),
                        "Refresh"
                    }
                }
                if let Some(error) = action_error() {
                    ErrorMessage { message: error }
                }
                {body}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rows_from_list_envelope() {
        let body = json!({
            "list": [{ "key": 1, "desc": "first" }, "skipped", { "key": 2, "owner": "Ops" }],
            "pagination": { "total": 2 }
        });
        let rows = rows_from_response(&body);
        assert_eq!(rows.len(), 2);
        assert_eq!(columns_of(&rows), vec!["desc", "key", "owner"]);
    }

    #[test]
    fn test_rows_from_bare_array_and_other_shapes() {
        assert_eq!(rows_from_response(&json!([{ "id": "a" }])).len(), 1);
        assert!(rows_from_response(&json!({ "data": [] })).is_empty());
        assert!(rows_from_response(&Value::Null).is_empty());
    }

    #[test]
    fn test_row_key_prefers_key_then_id() {
        let row = json!({ "key": 7, "id": "x" });
        assert_eq!(row_key(row.as_object().unwrap()).as_deref(), Some("7"));

        let row = json!({ "id": "x" });
        assert_eq!(row_key(row.as_object().unwrap()).as_deref(), Some("x"));

        let row = json!({ "desc": "no id" });
        assert_eq!(row_key(row.as_object().unwrap()), None);
    }

    #[test]
    fn test_params_serialize_without_empty_fields() {
        let params = RuleParams { key: Some("3".to_string()), desc: None };
        assert_eq!(serde_json::to_value(&params).unwrap(), json!({ "key": "3" }));

        let query = QueryParams { current_page: 1, page_size: PAGE_SIZE };
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({ "currentPage": 1, "pageSize": 10 })
        );
    }
}
