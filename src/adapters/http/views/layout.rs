//! Base page layout and shared form fragments.

use maud::{html, Markup, DOCTYPE};

use crate::adapters::http::extract::TemplateData;
use crate::adapters::http::middleware::CSRF_FIELD;
use crate::domain::forms::Form;

/// Wraps page content in the site chrome: navigation, flash and footer.
pub fn page(title: &str, data: &TemplateData, main: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) " - Snippetbox" }
                link rel="stylesheet" href="/static/css/main.css";
                link rel="shortcut icon" href="/static/img/favicon.ico" type="image/x-icon";
                link rel="stylesheet" href="https://fonts.googleapis.com/css?family=Ubuntu+Mono:400,700";
            }
            body {
                header {
                    h1 { a href="/" { "Snippetbox" } }
                }
                (nav(data))
                main {
                    @if let Some(flash) = &data.flash {
                        div.flash { (flash) }
                    }
                    (main)
                }
                footer { "Powered by Rust in " (data.current_year) }
                script src="/static/js/main.js" type="text/javascript" {}
            }
        }
    }
}

fn nav(data: &TemplateData) -> Markup {
    html! {
        nav {
            div {
                a href="/" { "Home" }
                @if data.is_authenticated() {
                    a href="/snippet/create" { "Create snippet" }
                }
            }
            div {
                @if data.is_authenticated() {
                    form action="/user/logout" method="POST" {
                        (csrf_field(data))
                        button { "Logout" }
                    }
                } @else {
                    a href="/user/signup" { "Signup" }
                    a href="/user/login" { "Login" }
                }
            }
        }
    }
}

/// Hidden input echoing the session's CSRF token.
pub fn csrf_field(data: &TemplateData) -> Markup {
    html! {
        input type="hidden" name=(CSRF_FIELD) value=(data.csrf_token);
    }
}

/// The first error recorded for a field, if any.
pub fn field_error(form: &Form, field: &str) -> Markup {
    let message = form.errors().get(field);
    html! {
        @if !message.is_empty() {
            label.error { (message) }
        }
    }
}
