//! 示例：解析配置后组合一个带左右交替时间线的作品集页面，并交给渲染函数输出。
use genlaravel_core::config::{Environment, Protocol};
use genlaravel_core::prelude::*;
use serde_json::json;

fn timeline_item(p: &Params) -> String {
    let side = if p.get("side").and_then(|v| v.as_str()) == Some("right") {
        "md:flex-row-reverse"
    } else {
        "md:flex-row"
    };
    format!(
        "<div class=\"flex {side}\"><h3>{}</h3><p>{}</p></div>",
        p["title"].as_str().unwrap_or_default(),
        p["year"]
    )
}

fn main() -> anyhow::Result<()> {
    genlaravel_core::telemetry::init_with_level(tracing::Level::DEBUG);

    let registry = ComponentRegistry::new()
        .with(
            ComponentDefinition::new("Navbar", |p| {
                format!("<nav>{}</nav>", p["brand"].as_str().unwrap_or_default())
            })
            .with_default("brand", "Portfolio"),
        )
        .with(ComponentDefinition::new("Timeline", timeline_item).with_default("year", "-"))
        .with(ComponentDefinition::new("Footer", |_| "<footer>&copy;</footer>".to_string()));

    let site = Site::new(Environment::new("localhost", Protocol::Http), registry);

    let page = PageSpec::from_json(
        r#"{"components":[
            {"component":"Navbar","params":{"brand":"Ana Lima"}},
            {"component":"Timeline","params":{"repeat":[
                {"title":"Junior developer","year":2019},
                {"title":"Backend engineer","year":2021},
                {"title":"Tech lead","year":2024}
            ]}},
            {"component":"Footer"}
        ]}"#,
    )?;

    let composed = site.compose(&page)?;
    for node in &composed.nodes {
        // 布局由位置决定，这里把 hint 转成渲染函数理解的参数
        let mut params = node.resolved_params().clone();
        match node.layout_hint() {
            LayoutHint::Left => {
                params.insert("side".into(), json!("left"));
            }
            LayoutHint::Right => {
                params.insert("side".into(), json!("right"));
            }
            LayoutHint::None => {}
        }
        println!("{}", node.component().render(&params));
    }
    println!("ws: {}", composed.config.unified_websocket_url());
    Ok(())
}
