use maud::{html, Markup, DOCTYPE};

pub fn base_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " - Ismism" }

                style {
                    r#"
                    body { font-family: system-ui, sans-serif; margin: 0; background: #f7f5f0; color: #222; }
                    main { max-width: 1200px; margin: 0 auto; padding: 2rem 1rem; }
                    .timeline-track { position: relative; height: 14rem; overflow: hidden;
                        border-bottom: 2px solid #444; margin: 2rem 0; }
                    .timeline-marker { position: absolute; bottom: 0; transform: translateX(-50%);
                        text-align: center; white-space: nowrap; }
                    .timeline-marker .dot { display: block; width: 12px; height: 12px; margin: 0 auto;
                        border-radius: 50%; background: #b3261e; }
                    .movement-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); gap: 1.5rem; }
                    .movement-card { background: #fff; border-radius: 8px; padding: 1rem;
                        box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
                    .movement-card:hover { transform: translateY(-4px); box-shadow: 0 10px 20px rgba(0,0,0,0.1); }
                    .tag { display: inline-block; background: #eee; border-radius: 4px;
                        padding: 0 0.4rem; margin: 0 0.25rem 0.25rem 0; font-size: 0.8rem; }
                    "#
                }
            }
            body {
                (nav_bar())

                main {
                    (content)
                }

                (footer())
            }
        }
    }
}

fn nav_bar() -> Markup {
    html! {
        nav style="background: #fff; box-shadow: 0 1px 2px rgba(0,0,0,0.08);" {
            div style="max-width: 1200px; margin: 0 auto; padding: 1rem; display: flex; justify-content: space-between;" {
                a href="/" style="font-weight: bold; font-size: 1.25rem; color: inherit; text-decoration: none;" {
                    "Ismism"
                }

                div style="display: flex; gap: 1rem;" {
                    a href="/" { "Timeline" }
                    a href="/movements" { "Movements" }
                }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer style="text-align: center; color: #666; font-size: 0.85rem; padding: 2rem 0;" {
            "Ismism - a timeline of art movements"
        }
    }
}
