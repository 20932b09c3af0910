use axum::{
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::SignedCookieJar;
use tracing::info;

use crate::errors::AppError;
use crate::flash::{push_notices, take_notices, Notice};
use crate::forms::{validate_contact, ContactForm};
use crate::render::{self, pages::ContactView};

/// GET /contact/
/// Drains any pending notice left by a prior submission redirect.
pub async fn form(jar: SignedCookieJar) -> Result<(SignedCookieJar, Html<String>), AppError> {
    let (jar, notices) = take_notices(jar);
    let blank = ContactForm::default();
    Ok((jar, render::page(&ContactView { form: &blank }, &notices)))
}

/// POST /contact/
///
/// Invalid submissions re-render the form with inline error notices and the
/// trimmed values echoed back. Valid submissions are logged, acknowledged
/// through the flash cookie and answered with a redirect so a refresh does
/// not resubmit.
pub async fn submit(
    jar: SignedCookieJar,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    match validate_contact(&form) {
        Ok(submission) => {
            info!(name = %submission.name, email = %submission.email, "contact form submission received");
            // TODO: deliver the submission (email or CRM) once an outbound channel exists
            let notice = Notice::success(format!(
                "Thank you for your message, {}! I will get back to you soon.",
                submission.name
            ));
            let jar = push_notices(jar, &[notice]);
            Ok((jar, Redirect::to("/contact/")).into_response())
        }
        Err(errors) => {
            let echo = form.trimmed();
            let notices: Vec<Notice> = errors.into_iter().map(Notice::error).collect();
            Ok(render::page(&ContactView { form: &echo }, &notices).into_response())
        }
    }
}
