//! Contact section and form

use super::escape;
use crate::core::contact::{ContactFormData, FormField, ValidationErrors};
use crate::core::content::{CONTACT_BLURB, CONTACT_EYEBROW, CONTACT_HEADING, CONTACT_INFO, OFFICE_HOURS};

/// Banner above the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormNotice<'a> {
    None,
    /// Shown after the redirect that follows a delivered submission
    Sent,
    Failed(&'a str),
}

/// What the form shows: entered values, their errors, and a notice
#[derive(Debug, Clone, Copy)]
pub struct ContactFormView<'a> {
    pub data: &'a ContactFormData,
    pub errors: &'a ValidationErrors,
    pub notice: FormNotice<'a>,
}

impl<'a> ContactFormView<'a> {
    pub fn new(data: &'a ContactFormData, errors: &'a ValidationErrors) -> Self {
        Self {
            data,
            errors,
            notice: FormNotice::None,
        }
    }

    pub fn with_notice(mut self, notice: FormNotice<'a>) -> Self {
        self.notice = notice;
        self
    }
}

pub fn contact_section(form: &ContactFormView<'_>) -> String {
    let info: String = CONTACT_INFO
        .iter()
        .map(|info| {
            format!(
                r#"<li class="contact-info"><h4>{}</h4><a href="{}">{}</a></li>"#,
                escape(info.title),
                escape(info.link),
                escape(info.content)
            )
        })
        .collect();

    let hours: String = OFFICE_HOURS
        .iter()
        .map(|line| format!("<li>{}</li>", escape(line)))
        .collect();

    format!(
        r#"<section id="contact" class="contact">
<p class="eyebrow">{eyebrow}</p>
<h2>{heading}</h2>
<p>{blurb}</p>
<div class="contact-grid">
<div><ul class="contact-info-list">{info}</ul><h4>Office Hours</h4><ul class="office-hours">{hours}</ul></div>
{form}
</div>
</section>"#,
        eyebrow = escape(CONTACT_EYEBROW),
        heading = escape(CONTACT_HEADING),
        blurb = escape(CONTACT_BLURB),
        info = info,
        hours = hours,
        form = contact_form(form),
    )
}

fn contact_form(form: &ContactFormView<'_>) -> String {
    let notice = match form.notice {
        FormNotice::None => String::new(),
        FormNotice::Sent => {
            r#"<p class="notice success" role="status">Thank you! Your message has been sent. We'll get back to you soon.</p>"#
                .to_string()
        }
        FormNotice::Failed(reason) => format!(
            r#"<p class="notice error" role="alert">Your message could not be sent: {}. Please try again.</p>"#,
            escape(reason)
        ),
    };

    let fields: String = FormField::ALL.into_iter().map(|field| form_field(form, field)).collect();

    format!(
        r#"<form class="contact-form" method="post" action="/contact" novalidate>
{notice}{fields}<button type="submit">Send Message</button>
</form>"#
    )
}

fn form_field(form: &ContactFormView<'_>, field: FormField) -> String {
    let name = field.name();
    let value = escape(form.data.get(field));
    let error = form.errors.get(&field);
    let label = match field {
        FormField::Phone => "Phone (optional)".to_string(),
        _ => field.label().to_string(),
    };
    let invalid = if error.is_some() { r#" aria-invalid="true""# } else { "" };

    let input = match field {
        FormField::Message => {
            format!(r#"<textarea id="{name}" name="{name}" rows="5"{invalid}>{value}</textarea>"#)
        }
        _ => {
            let kind = match field {
                FormField::Email => "email",
                FormField::Phone => "tel",
                _ => "text",
            };
            format!(r#"<input id="{name}" name="{name}" type="{kind}" value="{value}"{invalid}>"#)
        }
    };

    let message = error
        .map(|e| format!(r#"<p class="field-error">{}</p>"#, escape(&e.to_string())))
        .unwrap_or_default();

    format!(
        r#"<div class="field"><label for="{name}">{label}</label>{input}{message}</div>
"#
    )
}
