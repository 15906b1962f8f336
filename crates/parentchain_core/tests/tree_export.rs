use parentchain_core::{Document, HtmlTags};

#[test]
fn document_serializes_with_tagged_children() {
    let document = Document::new()
        .body()
        .div()
        .attr("style", "bold")
        .text("hi")
        .up()
        .up();
    let body_id = document.elements()[0].id();

    let json = serde_json::to_value(&document).unwrap();

    let body = &json["elements"][0];
    assert_eq!(body["id"], body_id.to_string());
    assert_eq!(body["name"], "body");
    assert_eq!(body["attributes"], serde_json::json!({}));

    let div = &body["children"][0];
    assert_eq!(div["kind"], "element");
    assert_eq!(div["name"], "div");
    assert_eq!(div["attributes"]["style"], "bold");
    assert_eq!(div["children"][0]["kind"], "text");
    assert_eq!(div["children"][0]["value"], "hi");

    let decoded: Document = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, document);
}

#[test]
fn missing_attributes_and_children_default_to_empty() {
    let value = serde_json::json!({
        "elements": [
            { "id": "11111111-2222-4333-8444-555555555555", "name": "br" }
        ]
    });

    let document: Document = serde_json::from_value(value).unwrap();
    assert_eq!(document.render(), "<br/>");
}
