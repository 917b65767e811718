//! Form validation.
//!
//! A [`Form`] is built per request from the submitted [`FormValues`], run
//! through zero or more checks, then consumed by an application handler.

mod errors;
mod form;
mod values;

pub use errors::{FormErrors, GENERIC_FIELD};
pub use form::{Form, EMAIL_RX, MSG_BLANK, MSG_INVALID, NO_NUL_RX};
pub use values::FormValues;
