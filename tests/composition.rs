use genlaravel_core::compose::ITEM_KEY;
use genlaravel_core::prelude::*;
use serde_json::json;

fn registry() -> ComponentRegistry {
    ComponentRegistry::new()
        .with(ComponentDefinition::new("Navbar", |p| {
            format!("<nav>{}</nav>", p["brand"].as_str().unwrap_or_default())
        }).with_default("brand", "Portfolio"))
        .with(
            ComponentDefinition::named("Timeline")
                .with_default("accent", "indigo")
                .with_default("title", "Untitled"),
        )
        .with(ComponentDefinition::named("Footer").with_default("year", 2024))
}

fn timeline_page() -> PageSpec {
    PageSpec::new()
        .with(ComponentReference::new("Navbar"))
        .with(ComponentReference::new("Timeline").repeat([
            json!({"title": "a"}),
            json!({"title": "b"}),
            json!({"title": "c"}),
        ]))
        .with(ComponentReference::new("Footer"))
}

#[test]
fn timeline_page_expands_in_order() {
    let nodes = compose(&timeline_page(), &registry()).unwrap();
    let shape: Vec<(&str, Option<&str>, LayoutHint)> = nodes
        .iter()
        .map(|n| (n.name(), n.param("title").and_then(|v| v.as_str()), n.layout_hint()))
        .collect();
    assert_eq!(
        shape,
        vec![
            ("Navbar", None, LayoutHint::None),
            ("Timeline", Some("a"), LayoutHint::Left),
            ("Timeline", Some("b"), LayoutHint::Right),
            ("Timeline", Some("c"), LayoutHint::Left),
            ("Footer", None, LayoutHint::None),
        ]
    );
}

#[test]
fn layout_hints_alternate_by_index() {
    for n in 0..7usize {
        let items: Vec<_> = (0..n).map(|i| json!({ "i": i })).collect();
        let page = PageSpec::new().with(ComponentReference::new("Timeline").repeat(items));
        let nodes = compose(&page, &registry()).unwrap();
        assert_eq!(nodes.len(), n);
        for (i, node) in nodes.iter().enumerate() {
            let expected = if i % 2 == 0 { LayoutHint::Left } else { LayoutHint::Right };
            assert_eq!(node.layout_hint(), expected);
            assert_eq!(node.param("i"), Some(&json!(i)));
        }
    }
}

#[test]
fn merge_order_is_defaults_then_reference_then_item() {
    let page = PageSpec::new().with(
        ComponentReference::new("Timeline")
            .param("accent", "rose")
            .param("title", "from reference")
            .repeat([json!({"title": "from item"}), json!({"year": 2020})]),
    );
    let nodes = compose(&page, &registry()).unwrap();

    let first = nodes[0].resolved_params();
    assert_eq!(first["accent"], json!("rose"));
    assert_eq!(first["title"], json!("from item"));
    assert!(!first.contains_key("repeat"));

    let second = nodes[1].resolved_params();
    assert_eq!(second["title"], json!("from reference"));
    assert_eq!(second["year"], json!(2020));
}

#[test]
fn merge_is_shallow() {
    let reg = ComponentRegistry::new().with(
        ComponentDefinition::named("Hero").with_default("cta", json!({"label": "Go", "href": "#"})),
    );
    let page = PageSpec::new().with(ComponentReference::new("Hero").param("cta", json!({"label": "Hire me"})));
    let nodes = compose(&page, &reg).unwrap();
    assert_eq!(nodes[0].param("cta"), Some(&json!({"label": "Hire me"})));
}

#[test]
fn plain_reference_gets_defaults_and_no_hint() {
    let page = PageSpec::new().with(ComponentReference::new("Navbar").param("sticky", true));
    let nodes = compose(&page, &registry()).unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].layout_hint(), LayoutHint::None);
    assert_eq!(nodes[0].param("brand"), Some(&json!("Portfolio")));
    assert_eq!(nodes[0].param("sticky"), Some(&json!(true)));
    assert_eq!(nodes[0].render(), "<nav>Portfolio</nav>");
}

#[test]
fn unknown_component_fails_whole_page() {
    let page = PageSpec::new()
        .with(ComponentReference::new("Navbar"))
        .with(ComponentReference::new("Timeline").repeat([json!({})]))
        .with(ComponentReference::new("ContactForm"))
        .with(ComponentReference::new("Missing"));
    let err = compose(&page, &registry()).unwrap_err();
    assert_eq!(
        err,
        PagekitError::UnknownComponent {
            name: "ContactForm".to_string(),
            index: 2
        }
    );
    assert_eq!(err.to_string(), "unknown component `ContactForm` at page position 2");
}

#[test]
fn lookup_is_case_sensitive() {
    let page = PageSpec::new().with(ComponentReference::new("navbar"));
    assert!(matches!(
        compose(&page, &registry()),
        Err(PagekitError::UnknownComponent { index: 0, .. })
    ));
}

#[test]
fn compose_is_deterministic() {
    let reg = registry();
    let page = timeline_page();
    assert_eq!(compose(&page, &reg).unwrap(), compose(&page, &reg).unwrap());
}

#[test]
fn default_repeat_does_not_expand_plain_reference() {
    let reg = ComponentRegistry::new().with(
        ComponentDefinition::named("Gallery")
            .with_default("repeat", json!([{"x": 1}, {"x": 2}]))
            .with_default("columns", 3),
    );
    let nodes = compose(&PageSpec::new().with(ComponentReference::new("Gallery")), &reg).unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].layout_hint(), LayoutHint::None);
    assert_eq!(nodes[0].param("repeat"), None);
    assert_eq!(nodes[0].param("columns"), Some(&json!(3)));

    // 引用自身声明的 repeat 仍按条目展开
    let page = PageSpec::new().with(ComponentReference::new("Gallery").repeat([json!({"x": 9})]));
    let nodes = compose(&page, &reg).unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].layout_hint(), LayoutHint::Left);
    assert_eq!(nodes[0].param("x"), Some(&json!(9)));
}

#[test]
fn empty_repeat_yields_no_nodes() {
    let page = PageSpec::new()
        .with(ComponentReference::new("Timeline").repeat(Vec::<serde_json::Value>::new()))
        .with(ComponentReference::new("Footer"));
    let nodes = compose(&page, &registry()).unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].name(), "Footer");
}

#[test]
fn non_array_repeat_is_plain_param() {
    let page = PageSpec::new().with(ComponentReference::new("Timeline").param("repeat", 3));
    let nodes = compose(&page, &registry()).unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].layout_hint(), LayoutHint::None);
    assert_eq!(nodes[0].param("repeat"), Some(&json!(3)));
}

#[test]
fn scalar_items_are_merged_under_item_key() {
    let page = PageSpec::new().with(ComponentReference::new("Timeline").repeat(["2019", "2021"]));
    let nodes = compose(&page, &registry()).unwrap();
    assert_eq!(nodes[0].param(ITEM_KEY), Some(&json!("2019")));
    assert_eq!(nodes[1].param(ITEM_KEY), Some(&json!("2021")));
    assert_eq!(nodes[1].param("accent"), Some(&json!("indigo")));
}

#[test]
fn empty_page_composes_to_nothing() {
    assert!(compose(&PageSpec::new(), &registry()).unwrap().is_empty());
}

#[test]
fn page_spec_loads_from_json() {
    let page = PageSpec::from_json(
        r#"{"components":[
            {"component":"Navbar"},
            {"component":"Timeline","params":{"repeat":[{"title":"a"},{"title":"b"}]}},
            {"component":"Footer","params":{"year":2025}}
        ]}"#,
    )
    .unwrap();
    let nodes = compose(&page, &registry()).unwrap();
    assert_eq!(nodes.len(), 4);
    assert_eq!(nodes[3].param("year"), Some(&json!(2025)));
}

#[test]
fn registry_overrides_and_lists_names() {
    let mut reg = registry();
    reg.register(ComponentDefinition::named("Footer").with_default("year", 2030));
    assert_eq!(reg.len(), 3);
    assert_eq!(reg.names(), vec!["Footer", "Navbar", "Timeline"]);
    let nodes = compose(&PageSpec::new().with(ComponentReference::new("Footer")), &reg).unwrap();
    assert_eq!(nodes[0].param("year"), Some(&json!(2030)));
}

#[test]
fn compose_from_many_threads() {
    let reg = std::sync::Arc::new(registry());
    let page = std::sync::Arc::new(timeline_page());
    let expected = compose(&page, &reg).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let reg = reg.clone();
            let page = page.clone();
            std::thread::spawn(move || compose(&page, &reg).unwrap())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}
