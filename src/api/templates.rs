use crate::models::messages::{Message, MessageView};
use minijinja::{Environment, context};

pub const INDEX_TEMPLATE: &str = "index.html";

/// Templates are compiled into the binary. `.html` names are auto-escaped.
pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template(INDEX_TEMPLATE, include_str!("../../templates/index.html"))?;
    Ok(env)
}

pub fn render_index(
    env: &Environment<'_>,
    messages: &[Message],
) -> Result<String, minijinja::Error> {
    let messages: Vec<MessageView<'_>> = messages.iter().map(MessageView::from).collect();
    env.get_template(INDEX_TEMPLATE)?.render(context! { messages })
}
