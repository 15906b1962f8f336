use parentchain_core::{Document, HtmlTags, TagNode};

#[test]
fn repeated_attribute_renders_once_with_last_value() {
    let element = TagNode::detached("div")
        .attr("a", "1")
        .attr("a", "2")
        .into_element();

    assert_eq!(element.render(), "<div a=\"2\"/>");
    assert_eq!(element.attributes().len(), 1);
}

#[test]
fn childless_node_renders_self_closing_with_attributes() {
    let element = TagNode::detached("img")
        .attr("src", "logo.png")
        .attr("alt", "logo")
        .into_element();

    assert_eq!(element.render(), "<img alt=\"logo\" src=\"logo.png\"/>");
}

#[test]
fn empty_text_still_counts_as_a_child() {
    let element = TagNode::detached("span").text("").into_element();
    assert_eq!(element.render(), "<span></span>");
}

#[test]
fn values_are_not_escaped() {
    let element = TagNode::detached("a")
        .attr("href", "/q?x=1&y=2")
        .text("<b>")
        .into_element();

    assert_eq!(element.render(), "<a href=\"/q?x=1&y=2\"><b></a>");
}

#[test]
fn display_and_write_to_match_render() {
    let document = Document::new()
        .body()
        .p()
        .text("streamed")
        .up()
        .img()
        .attr("src", "x.png")
        .up()
        .up();

    let mut buffer = Vec::new();
    document.write_to(&mut buffer).unwrap();

    let rendered = document.render();
    assert_eq!(String::from_utf8(buffer).unwrap(), rendered);
    assert_eq!(document.to_string(), rendered);
    assert_eq!(
        rendered,
        "<body><p>streamed</p><img src=\"x.png\"/></body>"
    );
}

#[test]
fn multiple_top_level_elements_render_in_order() {
    let document = Document::new()
        .head()
        .up()
        .body()
        .up()
        .child("footer")
        .text("end")
        .up();

    assert_eq!(document.render(), "<head/><body/><footer>end</footer>");
}
