use tagwrap::{Attributes, Error, Replacement, Safe, Tags};

#[test]
fn test_render_with_attribute() {
    let mut tags = Tags::new();
    let a = tags.add_tag("a");
    let mut attributes = Attributes::new();
    attributes.insert("href".to_string(), "http://x/".into());
    let rendered = tags.render(a, &["text".into()], &attributes).unwrap();
    assert_eq!(rendered.as_str(), r#"<a href="http://x/">text</a>"#);
}

#[test]
fn test_render_multiple_children_in_order() {
    let mut tags = Tags::new();
    let p = tags.add_tag("p");
    let rendered = tags
        .render(
            p,
            &["one ".into(), Safe::new("<b>two</b>").into(), " three".into()],
            &Attributes::new(),
        )
        .unwrap();
    assert_eq!(rendered.as_str(), "<p>one <b>two</b> three</p>");
}

#[test]
fn test_render_attributes_in_insertion_order() {
    let mut tags = Tags::new();
    let input = tags.add_tag("input");
    let mut attributes = Attributes::new();
    attributes.insert("type".to_string(), "text".into());
    attributes.insert("name".to_string(), "q".into());
    attributes.insert("value".to_string(), "".into());
    let rendered = tags.render(input, &[], &attributes).unwrap();
    assert_eq!(
        rendered.as_str(),
        r#"<input type="text" name="q" value="">"#
    );
}

#[test]
fn test_self_closing_without_ending_slash() {
    let mut tags = Tags::new();
    let img = tags.add_tag("img");
    let mut attributes = Attributes::new();
    attributes.insert("src".to_string(), "http://x/png".into());
    let rendered = tags.render(img, &[], &attributes).unwrap();
    assert_eq!(rendered.as_str(), r#"<img src="http://x/png">"#);
}

#[test]
fn test_self_closing_with_ending_slash() {
    let mut tags = Tags::new();
    let img = tags.add_tag("img");
    tags.policy_mut(img).ending_slash = true;
    let mut attributes = Attributes::new();
    attributes.insert("src".to_string(), "http://x/png".into());
    let rendered = tags.render(img, &[], &attributes).unwrap();
    assert_eq!(rendered.as_str(), r#"<img src="http://x/png" />"#);
}

#[test]
fn test_empty_children_means_no_closing_tag() {
    let mut tags = Tags::new();
    let br = tags.add_tag("br");
    let rendered = tags.render(br, &[], &Attributes::new()).unwrap();
    assert_eq!(rendered.as_str(), "<br>");
}

#[test]
fn test_nested_render_does_not_double_escape() {
    let mut tags = Tags::new();
    let td = tags.add_tag("td");
    let tr = tags.add_tag("tr");
    let cell = tags
        .render(td, &["a & b".into()], &Attributes::new())
        .unwrap();
    let row = tags.render(tr, &[cell.into()], &Attributes::new()).unwrap();
    assert_eq!(row.as_str(), "<tr><td>a &amp; b</td></tr>");
}

#[test]
fn test_nested_dangerous_render_is_neutralized() {
    let mut tags = Tags::new();
    let a = tags.add_tag("a");
    let img = tags.add_tag("img");
    let mut img_attributes = Attributes::new();
    img_attributes.insert("src".to_string(), "javascript:alert('x')".into());
    let inner = tags.render(img, &[], &img_attributes).unwrap();
    assert_eq!(inner.as_str(), "(removed)");

    let mut a_attributes = Attributes::new();
    a_attributes.insert("href".to_string(), "http://h/".into());
    let outer = tags.render(a, &[inner.into()], &a_attributes).unwrap();
    assert_eq!(outer.as_str(), r#"<a href="http://h/">(removed)</a>"#);
}

#[test]
fn test_rendered_tag_is_itself_filtered() {
    // the composed-markup pass applies to the tag being rendered too
    let mut tags = Tags::new();
    let rendered = tags
        .wrap("script", &["alert(1)".into()], &Attributes::new())
        .unwrap();
    assert_eq!(rendered.as_str(), "(removed)alert(1)(removed)");
}

#[test]
fn test_safe_mode_off_renders_unfiltered() {
    let mut tags = Tags::new();
    let script = tags.add_tag("script");
    tags.policy_mut(script).safe_mode = false;
    let rendered = tags
        .render(script, &["alert(1)".into()], &Attributes::new())
        .unwrap();
    assert_eq!(rendered.as_str(), "<script>alert(1)</script>");
}

#[test]
fn test_safe_child_in_whitelisted_render() {
    let mut tags = Tags::new();
    let div = tags.add_tag("div");
    tags.policy_mut(div).whitelist = ["div", "span", "b", "i", "strong"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let child = Safe::new("<span>fine</span><script>bad</script>");
    let rendered = tags.render(div, &[child.into()], &Attributes::new()).unwrap();
    assert_eq!(
        rendered.as_str(),
        "<div><span>fine</span>(removed)bad(removed)</div>"
    );
}

#[test]
fn test_entities_replacement_keeps_construct_visible() {
    let mut tags = Tags::new();
    let div = tags.add_tag("div");
    tags.policy_mut(div).replacement = Replacement::Entities;
    let child = Safe::new("<script>x</script>");
    let rendered = tags.render(div, &[child.into()], &Attributes::new()).unwrap();
    assert_eq!(
        rendered.as_str(),
        "<div>&lt;script&gt;x&lt;/script&gt;</div>"
    );
}

#[test]
fn test_entities_replacement_in_plain_child_is_double_escaped() {
    // a plain child is escaped after filtering, so the entity-escaped
    // construct is escaped once more and displays as its literal entities
    let mut tags = Tags::new();
    let div = tags.add_tag("div");
    tags.policy_mut(div).replacement = Replacement::Entities;
    let rendered = tags
        .render(div, &["<script>x</script>".into()], &Attributes::new())
        .unwrap();
    assert_eq!(
        rendered.as_str(),
        "<div>&amp;lt;script&amp;gt;x&amp;lt;/script&amp;gt;</div>"
    );
}

#[test]
fn test_safe_attribute_value_is_verbatim() {
    let mut tags = Tags::new();
    let a = tags.add_tag("a");
    let mut attributes = Attributes::new();
    attributes.insert("href".to_string(), Safe::new("?a=1&amp;b=2").into());
    let rendered = tags.render(a, &["x".into()], &attributes).unwrap();
    assert_eq!(rendered.as_str(), r#"<a href="?a=1&amp;b=2">x</a>"#);
}

#[test]
fn test_tagname_override() {
    let mut tags = Tags::new();
    let widget = tags.add_tag("mywidget");
    tags.policy_mut(widget).tagname = "my-widget".to_string();
    let rendered = tags.render(widget, &["x".into()], &Attributes::new()).unwrap();
    assert_eq!(rendered.as_str(), "<my-widget>x</my-widget>");
}

#[test]
fn test_identifier_case_is_preserved() {
    let mut tags = Tags::new();
    let rendered = tags.wrap("DIV", &["x".into()], &Attributes::new()).unwrap();
    assert_eq!(rendered.as_str(), "<DIV>x</DIV>");
}

#[test]
fn test_log_rejects_never_alters_output() {
    let mut tags = Tags::new();
    let div = tags.add_tag("div");
    let child = Safe::new("<script>x</script>");
    let quiet = tags
        .render(div, &[child.clone().into()], &Attributes::new())
        .unwrap();
    tags.policy_mut(div).log_rejects = true;
    let logged = tags.render(div, &[child.into()], &Attributes::new()).unwrap();
    assert_eq!(logged, quiet);
    assert_eq!(logged.as_str(), "<div>(removed)x(removed)</div>");
}

#[test]
fn test_invalid_tag_name() {
    let mut tags = Tags::new();
    let div = tags.add_tag("div");
    tags.policy_mut(div).tagname = "not a name".to_string();
    let error = tags.render(div, &[], &Attributes::new()).unwrap_err();
    assert!(matches!(error, Error::InvalidTagName(_)));
}

#[test]
fn test_invalid_attribute_name() {
    let mut tags = Tags::new();
    let div = tags.add_tag("div");
    let mut attributes = Attributes::new();
    attributes.insert("a b".to_string(), "x".into());
    let error = tags.render(div, &[], &attributes).unwrap_err();
    assert!(matches!(error, Error::InvalidAttribute(name) if name == "a b"));
}
