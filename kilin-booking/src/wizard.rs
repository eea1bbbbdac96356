use serde::{Deserialize, Serialize};
use std::fmt;

use crate::form::BookingForm;
use crate::models::BookingFormValues;
use crate::validation::{
    require_contact, require_payment, require_schedule, DatePolicy, ValidationError,
};

/// Steps of the booking wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WizardStep {
    Schedule,
    ContactDetails,
    PaymentAndAddons,
    Confirm,
}

impl WizardStep {
    /// 1-based position, as shown in the progress indicator.
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Schedule => 1,
            WizardStep::ContactDetails => 2,
            WizardStep::PaymentAndAddons => 3,
            WizardStep::Confirm => 4,
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WizardStep::Schedule => "SCHEDULE",
            WizardStep::ContactDetails => "CONTACT_DETAILS",
            WizardStep::PaymentAndAddons => "PAYMENT_AND_ADDONS",
            WizardStep::Confirm => "CONFIRM",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("Invalid transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Booking can only be submitted from the confirm step, currently at {0}")]
    NotReady(WizardStep),
}

/// Step after `step`, if the values filled in so far allow leaving it.
pub fn next_step(
    step: WizardStep,
    values: &BookingFormValues,
    dates: &DatePolicy,
) -> Result<WizardStep, WizardError> {
    match step {
        WizardStep::Schedule => {
            require_schedule(values)?;
            if let Some(date) = values.date {
                dates.check(date)?;
            }
            Ok(WizardStep::ContactDetails)
        }
        WizardStep::ContactDetails => {
            require_contact(values)?;
            Ok(WizardStep::PaymentAndAddons)
        }
        WizardStep::PaymentAndAddons => {
            require_payment(values)?;
            Ok(WizardStep::Confirm)
        }
        WizardStep::Confirm => Err(WizardError::InvalidTransition {
            from: step.to_string(),
            to: "NEXT".to_string(),
        }),
    }
}

pub fn previous_step(step: WizardStep) -> Result<WizardStep, WizardError> {
    match step {
        WizardStep::Schedule => Err(WizardError::InvalidTransition {
            from: step.to_string(),
            to: "PREVIOUS".to_string(),
        }),
        WizardStep::ContactDetails => Ok(WizardStep::Schedule),
        WizardStep::PaymentAndAddons => Ok(WizardStep::ContactDetails),
        WizardStep::Confirm => Ok(WizardStep::PaymentAndAddons),
    }
}

/// Current step plus the form being filled in. A failed transition leaves
/// the step unchanged.
#[derive(Debug, Clone)]
pub struct BookingWizard {
    step: WizardStep,
    form: BookingForm,
    dates: DatePolicy,
}

impl BookingWizard {
    pub fn new(form: BookingForm, dates: DatePolicy) -> Self {
        Self { step: WizardStep::Schedule, form, dates }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut BookingForm {
        &mut self.form
    }

    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        self.step = next_step(self.step, self.form.values(), &self.dates)?;
        Ok(self.step)
    }

    pub fn back(&mut self) -> Result<WizardStep, WizardError> {
        self.step = previous_step(self.step)?;
        Ok(self.step)
    }

    /// The form to hand to submission; only available on the confirm step.
    pub fn submission(&self) -> Result<&BookingForm, WizardError> {
        match self.step {
            WizardStep::Confirm => Ok(&self.form),
            step => Err(WizardError::NotReady(step)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FormField;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn wizard() -> BookingWizard {
        BookingWizard::new(
            BookingForm::new(BookingFormValues::default(), 18_000),
            DatePolicy::new(today(), Some(30)),
        )
    }

    #[test]
    fn test_starts_at_schedule() {
        let wizard = wizard();
        assert_eq!(wizard.step(), WizardStep::Schedule);
        assert_eq!(wizard.step().number(), 1);
    }

    #[test]
    fn test_missing_location_blocks_advance() {
        let mut wizard = wizard();
        {
            let values = wizard.form_mut().values_mut();
            values.date = Some(today());
            values.time_slot = "10:00".to_string();
        }

        let err = wizard.advance().unwrap_err();
        assert_eq!(
            err,
            WizardError::Validation(ValidationError::MissingFields(vec![FormField::Location]))
        );
        assert_eq!(wizard.step(), WizardStep::Schedule);

        wizard.form_mut().values_mut().location = "dar-mbezi".to_string();
        assert_eq!(wizard.advance().unwrap(), WizardStep::ContactDetails);
    }

    #[test]
    fn test_date_window_checked_on_schedule() {
        let mut wizard = wizard();
        {
            let values = wizard.form_mut().values_mut();
            values.date = Some(today() + chrono::Duration::days(45));
            values.time_slot = "10:00".to_string();
            values.location = "arusha".to_string();
        }
        assert!(matches!(
            wizard.advance(),
            Err(WizardError::Validation(ValidationError::DateTooFar { .. }))
        ));
        assert_eq!(wizard.step(), WizardStep::Schedule);
    }

    #[test]
    fn test_full_walk_and_back() {
        let mut wizard = wizard();
        {
            let values = wizard.form_mut().values_mut();
            values.date = Some(today());
            values.time_slot = "10:00".to_string();
            values.location = "arusha".to_string();
        }
        assert_eq!(wizard.advance().unwrap(), WizardStep::ContactDetails);

        let err = wizard.advance().unwrap_err();
        assert_eq!(
            err,
            WizardError::Validation(ValidationError::MissingFields(vec![
                FormField::ContactName,
                FormField::ContactPhone,
            ]))
        );

        {
            let values = wizard.form_mut().values_mut();
            values.contact_name = "Neema".to_string();
            values.contact_phone = "0755123456".to_string();
        }
        assert_eq!(wizard.advance().unwrap(), WizardStep::PaymentAndAddons);
        assert!(matches!(wizard.submission(), Err(WizardError::NotReady(WizardStep::PaymentAndAddons))));

        wizard.form_mut().values_mut().payment_method = "tigo-pesa".to_string();
        wizard.form_mut().toggle_add_on("uv-protection");
        assert_eq!(wizard.advance().unwrap(), WizardStep::Confirm);
        assert!(wizard.submission().unwrap().is_selected("uv-protection"));

        assert!(matches!(wizard.advance(), Err(WizardError::InvalidTransition { .. })));
        assert_eq!(wizard.step(), WizardStep::Confirm);

        assert_eq!(wizard.back().unwrap(), WizardStep::PaymentAndAddons);
        assert_eq!(wizard.back().unwrap(), WizardStep::ContactDetails);
        assert_eq!(wizard.back().unwrap(), WizardStep::Schedule);
        assert!(matches!(wizard.back(), Err(WizardError::InvalidTransition { .. })));
        assert_eq!(wizard.form().values().contact_name, "Neema");
    }

    #[test]
    fn test_pure_transitions() {
        let values = BookingFormValues::with_defaults(today());
        let dates = DatePolicy::new(today(), None);
        assert_eq!(next_step(WizardStep::Schedule, &values, &dates), Ok(WizardStep::ContactDetails));
        assert_eq!(
            next_step(WizardStep::PaymentAndAddons, &values, &dates),
            Ok(WizardStep::Confirm)
        );
        assert_eq!(previous_step(WizardStep::Confirm), Ok(WizardStep::PaymentAndAddons));
    }
}
