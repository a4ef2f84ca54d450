use soroban_sdk::String;

use crate::ContractError;

/// Free-text clinical fields mirror the 500-byte cap of the original
/// length-limited string columns.
const MAX_TEXT_LEN: u32 = 500;

/// Status and urgency tags are short labels; their values are deliberately
/// unconstrained beyond length.
const MAX_TAG_LEN: u32 = 50;

const MAX_INSTITUTION_LEN: u32 = 100;
const MAX_CREDENTIALS_LEN: u32 = 200;

/// Validate a free-text case field. Empty text is allowed.
pub fn validate_text(field: &String) -> Result<(), ContractError> {
    if field.len() > MAX_TEXT_LEN {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

/// Validate a status or urgency tag.
pub fn validate_tag(tag: &String) -> Result<(), ContractError> {
    if tag.len() > MAX_TAG_LEN {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

/// Validate a registrar's institution name.
pub fn validate_institution(institution: &String) -> Result<(), ContractError> {
    if institution.len() > MAX_INSTITUTION_LEN {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

/// Validate a registrar's credential text.
pub fn validate_credentials(credentials: &String) -> Result<(), ContractError> {
    if credentials.len() > MAX_CREDENTIALS_LEN {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn test_validate_text() {
        let env = Env::default();

        assert_eq!(validate_text(&String::from_str(&env, "")), Ok(()));
        assert_eq!(
            validate_text(&String::from_str(&env, "Progressive muscle weakness")),
            Ok(())
        );

        let at_limit = "a".repeat(500);
        assert_eq!(validate_text(&String::from_str(&env, &at_limit)), Ok(()));

        let over_limit = "a".repeat(501);
        assert_eq!(
            validate_text(&String::from_str(&env, &over_limit)),
            Err(ContractError::InvalidInput)
        );
    }

    #[test]
    fn test_validate_tag() {
        let env = Env::default();

        assert_eq!(validate_tag(&String::from_str(&env, "registered")), Ok(()));
        assert_eq!(validate_tag(&String::from_str(&env, "critical")), Ok(()));

        let over_limit = "x".repeat(51);
        assert_eq!(
            validate_tag(&String::from_str(&env, &over_limit)),
            Err(ContractError::InvalidInput)
        );
    }

    #[test]
    fn test_validate_institution_and_credentials() {
        let env = Env::default();

        assert_eq!(
            validate_institution(&String::from_str(&env, "University Medical Center")),
            Ok(())
        );
        assert_eq!(
            validate_institution(&String::from_str(&env, &"i".repeat(101))),
            Err(ContractError::InvalidInput)
        );

        assert_eq!(
            validate_credentials(&String::from_str(
                &env,
                "Board Certified Neurologist, License 12345"
            )),
            Ok(())
        );
        assert_eq!(
            validate_credentials(&String::from_str(&env, &"c".repeat(201))),
            Err(ContractError::InvalidInput)
        );
    }
}
