use std::{error::Error, fmt};

pub const MISSING_FIELDS_TEXT: &str = "Please complete name, email and message.";
pub const SENDING_TEXT: &str = "Opening your email client to send enquiry...";

pub const ERROR_COLOR: &str = "#d9534f";
pub const INFO_COLOR: &str = "#0b66b2";

// the contact form's four fields, exactly as typed
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactError {
    // name, email or message is empty or only whitespace
    MissingFields,
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactError::MissingFields => write!(f, "{MISSING_FIELDS_TEXT}"),
        }
    }
}

impl Error for ContactError {}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl ContactForm {
    // only presence is checked; the email address is not parsed
    pub fn validate(&self) -> Result<Enquiry<'_>, ContactError> {
        if is_blank(&self.name) || is_blank(&self.email) || is_blank(&self.message) {
            return Err(ContactError::MissingFields);
        }
        Ok(Enquiry { form: self })
    }

    pub fn clear(&mut self) {
        *self = ContactForm::default();
    }
}

// a validated form, ready to be turned into a mailto link
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Enquiry<'a> {
    form: &'a ContactForm,
}

impl<'a> Enquiry<'a> {
    // only an empty company is left out; whitespace is kept as typed
    pub fn company(&self) -> Option<&'a str> {
        if self.form.company.is_empty() {
            None
        } else {
            Some(self.form.company.as_str())
        }
    }

    pub fn subject(&self, sender: &str) -> String {
        let from = self.company().unwrap_or(self.form.name.as_str());
        format!("Enquiry from {sender} — {from}")
    }

    pub fn body(&self) -> String {
        let form = self.form;

        let mut body = format!("Name: {}\n", form.name);
        if let Some(company) = self.company() {
            body.push_str(&format!("Company: {company}\n"));
        }
        body.push_str(&format!("Email: {}\n\n", form.email));
        body.push_str(&format!("Message:\n{}", form.message));
        body
    }

    pub fn mailto(&self, recipient: &str, sender: &str) -> String {
        format!(
            "mailto:{recipient}?subject={}&body={}",
            urlencoding::encode(&self.subject(sender)),
            urlencoding::encode(&self.body()),
        )
    }
}

// the line under the form
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Invalid(ContactError),
    Sending,
}

impl FormStatus {
    pub fn text(&self) -> String {
        match self {
            FormStatus::Idle => String::new(),
            FormStatus::Invalid(err) => err.to_string(),
            FormStatus::Sending => String::from(SENDING_TEXT),
        }
    }

    pub fn color(&self) -> Option<&'static str> {
        match self {
            FormStatus::Idle => None,
            FormStatus::Invalid(_) => Some(ERROR_COLOR),
            FormStatus::Sending => Some(INFO_COLOR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENDER: &str = "Banbhar Enterprises website";
    const RECIPIENT: &str = "sales@banbhar.com";

    fn filled() -> ContactForm {
        ContactForm {
            name: String::from("Asha Rao"),
            email: String::from("asha@example.com"),
            company: String::from("Rao Traders & Co"),
            message: String::from("Need 40 units?\nPlease quote."),
        }
    }

    fn decode_param(url: &str, key: &str) -> String {
        let query = url.split_once('?').map(|(_, q)| q).unwrap();
        let raw = query
            .split('&')
            .find_map(|pair| pair.strip_prefix(&format!("{key}=")))
            .unwrap();
        urlencoding::decode(raw).unwrap().into_owned()
    }

    #[test]
    fn blank_required_fields_are_rejected() {
        for field in ["name", "email", "message"] {
            for value in ["", "   ", "\n\t"] {
                let mut form = filled();
                match field {
                    "name" => form.name = value.to_owned(),
                    "email" => form.email = value.to_owned(),
                    _ => form.message = value.to_owned(),
                }

                let err = form.validate().unwrap_err();
                assert_eq!(err, ContactError::MissingFields);
                assert_eq!(FormStatus::Invalid(err).text(), MISSING_FIELDS_TEXT);
            }
        }
    }

    #[test]
    fn company_is_optional() {
        let mut form = filled();
        form.company.clear();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn body_lists_fields_in_order() {
        let form = filled();
        let enquiry = form.validate().unwrap();

        assert_eq!(
            enquiry.body(),
            "Name: Asha Rao\nCompany: Rao Traders & Co\nEmail: asha@example.com\n\nMessage:\nNeed 40 units?\nPlease quote."
        );
    }

    #[test]
    fn blank_company_omits_line_and_subject_uses_name() {
        let mut form = filled();
        form.company = String::new();
        let enquiry = form.validate().unwrap();

        assert_eq!(
            enquiry.body(),
            "Name: Asha Rao\nEmail: asha@example.com\n\nMessage:\nNeed 40 units?\nPlease quote."
        );
        assert_eq!(
            enquiry.subject(SENDER),
            "Enquiry from Banbhar Enterprises website — Asha Rao"
        );
    }

    #[test]
    fn whitespace_company_is_kept() {
        let mut form = filled();
        form.company = String::from("  ");
        let enquiry = form.validate().unwrap();

        assert_eq!(
            enquiry.body(),
            "Name: Asha Rao\nCompany:   \nEmail: asha@example.com\n\nMessage:\nNeed 40 units?\nPlease quote."
        );
        assert_eq!(
            enquiry.subject(SENDER),
            "Enquiry from Banbhar Enterprises website —   "
        );
    }

    #[test]
    fn mailto_body_omits_empty_company() {
        let mut form = filled();
        form.company.clear();
        let url = form.validate().unwrap().mailto(RECIPIENT, SENDER);

        assert_eq!(
            decode_param(&url, "body"),
            "Name: Asha Rao\nEmail: asha@example.com\n\nMessage:\nNeed 40 units?\nPlease quote."
        );
        assert_eq!(
            decode_param(&url, "subject"),
            "Enquiry from Banbhar Enterprises website — Asha Rao"
        );
    }

    #[test]
    fn mailto_round_trips_through_decoding() {
        let form = filled();
        let url = form.validate().unwrap().mailto(RECIPIENT, SENDER);

        assert!(url.starts_with("mailto:sales@banbhar.com?subject="));
        assert_eq!(
            decode_param(&url, "subject"),
            "Enquiry from Banbhar Enterprises website — Rao Traders & Co"
        );
        assert_eq!(decode_param(&url, "body"), form.validate().unwrap().body());
    }

    #[test]
    fn mailto_parameters_are_escaped() {
        let form = filled();
        let url = form.validate().unwrap().mailto(RECIPIENT, SENDER);
        let query = url.split_once('?').unwrap().1;

        // the only separators left are the ones between parameters
        assert_eq!(query.matches('&').count(), 1);
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
        assert!(query.contains("%0A"));
    }

    #[test]
    fn clear_resets_every_field() {
        let mut form = filled();
        form.clear();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn status_colors() {
        assert_eq!(FormStatus::Idle.color(), None);
        assert_eq!(FormStatus::Idle.text(), "");
        assert_eq!(
            FormStatus::Invalid(ContactError::MissingFields).color(),
            Some(ERROR_COLOR)
        );
        assert_eq!(FormStatus::Sending.color(), Some(INFO_COLOR));
        assert_eq!(FormStatus::Sending.text(), SENDING_TEXT);
    }
}
