use crate::enums::age_check::AgeCheck;
use crate::errors::validation_error::ValidationError;
use crate::validate;
use crate::wire::service::Ident;
use chrono::NaiveDate;

/// Identity data for the ident check service, embedded into a
/// [`Service`](crate::models::service::Service) option holder.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentCheck {
    /// Surname of the receiver. 1 to 255 characters.
    pub surname: String,
    /// Given name of the receiver. 1 to 255 characters.
    pub given_name: String,
    /// Date of birth of the receiver.
    pub date_of_birth: Option<NaiveDate>,
    /// Minimum age the receiver has to prove.
    pub minimum_age: Option<AgeCheck>,
}

impl IdentCheck {
    pub fn new(surname: String, given_name: String) -> Self {
        Self {
            surname,
            given_name,
            date_of_birth: None,
            minimum_age: None,
        }
    }

    /// Builds the `Ident` node carried inside the `IdentCheck` service.
    pub fn to_wire(&self) -> Result<Ident, ValidationError> {
        validate::check_text("surname", &self.surname, 255)?;
        validate::check_text("givenName", &self.given_name, 255)?;

        Ok(Ident {
            surname: self.surname.clone(),
            given_name: self.given_name.clone(),
            date_of_birth: self
                .date_of_birth
                .map(|date| date.format("%Y-%m-%d").to_string()),
            minimum_age: self.minimum_age.map(|age| age.code().to_string()),
        })
    }
}
