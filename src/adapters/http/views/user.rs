//! Account pages: signup and login forms.

use maud::{html, Markup};

use super::layout::{csrf_field, field_error, page};
use crate::adapters::http::extract::TemplateData;
use crate::domain::forms::{Form, GENERIC_FIELD};

pub fn signup(data: &TemplateData, form: &Form) -> Markup {
    page(
        "Signup",
        data,
        html! {
            form action="/user/signup" method="POST" novalidate {
                (csrf_field(data))
                div {
                    label { "Name:" }
                    (field_error(form, "name"))
                    input type="text" name="name" value=(form.get("name"));
                }
                div {
                    label { "Email:" }
                    (field_error(form, "email"))
                    input type="email" name="email" value=(form.get("email"));
                }
                div {
                    label { "Password:" }
                    (field_error(form, "password"))
                    input type="password" name="password";
                }
                div {
                    input type="submit" value="Signup";
                }
            }
        },
    )
}

pub fn login(data: &TemplateData, form: &Form) -> Markup {
    let generic = form.errors().get(GENERIC_FIELD);
    page(
        "Login",
        data,
        html! {
            form action="/user/login" method="POST" novalidate {
                (csrf_field(data))
                @if !generic.is_empty() {
                    div.error { (generic) }
                }
                div {
                    label { "Email:" }
                    (field_error(form, "email"))
                    input type="email" name="email" value=(form.get("email"));
                }
                div {
                    label { "Password:" }
                    (field_error(form, "password"))
                    input type="password" name="password";
                }
                div {
                    input type="submit" value="Login";
                }
            }
        },
    )
}
