use validator::{Validate, ValidationErrors};

pub fn validate<T: Validate>(val: &T) -> Result<(), ValidationErrors> {
    val.validate()
}

pub fn first_message(errors: &ValidationErrors) -> Option<String> {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(_, errs)| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
}
