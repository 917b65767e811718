//! Snippet pages: home listing, single snippet, create form.

use maud::{html, Markup};

use super::layout::{csrf_field, field_error, page};
use crate::adapters::http::extract::TemplateData;
use crate::domain::forms::Form;
use crate::domain::snippet::{ExpiryPeriod, Snippet};

pub fn home(data: &TemplateData, snippets: &[Snippet]) -> Markup {
    page(
        "Home",
        data,
        html! {
            h2 { "Latest Snippets" }
            @if snippets.is_empty() {
                p { "There's nothing to see here... yet!" }
            } @else {
                table {
                    tr {
                        th { "Title" }
                        th { "Created" }
                        th { "ID" }
                    }
                    @for snippet in snippets {
                        tr {
                            td { a href={ "/snippet/" (snippet.id) } { (snippet.title) } }
                            td { (snippet.created.human_date()) }
                            td { "#" (snippet.id) }
                        }
                    }
                }
            }
        },
    )
}

pub fn show(data: &TemplateData, snippet: &Snippet) -> Markup {
    page(
        &format!("Snippet #{}", snippet.id),
        data,
        html! {
            div.snippet {
                div.metadata {
                    strong { (snippet.title) }
                    span { "#" (snippet.id) }
                }
                pre { code { (snippet.content) } }
                div.metadata {
                    time { "Created: " (snippet.created.human_date()) }
                    time { "Expires: " (snippet.expires.human_date()) }
                }
            }
        },
    )
}

pub fn create(data: &TemplateData, form: &Form) -> Markup {
    let selected = form.get("expires");
    page(
        "Create a New Snippet",
        data,
        html! {
            form action="/snippet/create" method="POST" {
                (csrf_field(data))
                div {
                    label { "Title:" }
                    (field_error(form, "title"))
                    input type="text" name="title" value=(form.get("title"));
                }
                div {
                    label { "Content:" }
                    (field_error(form, "content"))
                    textarea name="content" { (form.get("content")) }
                }
                div {
                    label { "Delete in:" }
                    (field_error(form, "expires"))
                    @for period in ExpiryPeriod::ALL {
                        @let value = period.to_string();
                        input type="radio" name="expires" value=(value) checked[selected == value];
                        " " (period.label()) " "
                    }
                }
                div {
                    input type="submit" value="Publish snippet";
                }
            }
        },
    )
}
