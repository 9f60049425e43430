use minijinja::Environment;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::{
    errors::AppResult,
    models::{
        domain::{ContentType, Difficulty},
        dto::response::PageView,
    },
};

const PAGE_TEMPLATE_NAME: &str = "index.html";

static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.add_template(PAGE_TEMPLATE_NAME, include_str!("../../templates/index.html"))
        .expect("index.html is a valid template");
    env
});

#[derive(Serialize)]
struct SelectOption {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

#[derive(Serialize)]
struct PageContext<'a> {
    view: &'a PageView,
    difficulties: Vec<SelectOption>,
    content_types: Vec<SelectOption>,
}

fn difficulty_label(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Beginner => "Beginner",
        Difficulty::Intermediate => "Intermediate",
        Difficulty::Advanced => "Advanced",
    }
}

fn content_type_label(content_type: ContentType) -> &'static str {
    match content_type {
        ContentType::Notes => "Study Notes",
        ContentType::Quiz => "Quiz",
        ContentType::Both => "Notes + Quiz",
    }
}

pub fn render_page(view: &PageView) -> AppResult<String> {
    let context = PageContext {
        view,
        difficulties: Difficulty::ALL
            .into_iter()
            .map(|d| SelectOption {
                value: d.as_str(),
                label: difficulty_label(d),
                selected: d == view.difficulty,
            })
            .collect(),
        content_types: ContentType::ALL
            .into_iter()
            .map(|c| SelectOption {
                value: c.as_str(),
                label: content_type_label(c),
                selected: c == view.content_type,
            })
            .collect(),
    };

    let html = TEMPLATES.get_template(PAGE_TEMPLATE_NAME)?.render(&context)?;
    Ok(html)
}
