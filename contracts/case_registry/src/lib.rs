#![no_std]

pub mod events;

mod audit;
mod identity;
mod types;
mod validation;

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Symbol, Vec};

pub use types::{CaseUpdate, MedicalCase, RegistrarGrant, UpdateType, VerifierGrant};

/// Storage keys for the contract
const ADMIN: Symbol = symbol_short!("ADMIN");
const INITIALIZED: Symbol = symbol_short!("INIT");

/// Counter for generating monotonic case ids.
const CASE_CTR: Symbol = symbol_short!("CASE_CTR");

fn case_key(case_id: u64) -> (Symbol, u64) {
    (symbol_short!("CASE"), case_id)
}

/// Allocate and return the next case id (1-based, monotonically increasing,
/// never reused).
fn next_case_id(env: &Env) -> u64 {
    let current: u64 = env.storage().instance().get(&CASE_CTR).unwrap_or(0u64);
    let next = current.saturating_add(1);
    env.storage().instance().set(&CASE_CTR, &next);
    next
}

/// Contract errors
#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    CaseNotFound = 4,
    UpdateNotFound = 5,
    InvalidInput = 6,
}

#[contract]
pub struct CaseRegistryContract;

#[contractimpl]
impl CaseRegistryContract {
    /// Initialize the contract with an admin address
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&INITIALIZED, &true);

        events::publish_initialized(&env, admin);

        Ok(())
    }

    /// Get the admin address
    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)
    }

    /// Check if the contract is initialized
    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        caller.require_auth();
        let admin: Address = env
            .storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)?;
        if *caller != admin {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    /// Grant an address the right to register and amend cases (admin only).
    ///
    /// Re-authorizing overwrites the previous grant, so this also reinstates
    /// a revoked registrar.
    pub fn authorize_registrar(
        env: Env,
        caller: Address,
        registrar: Address,
        institution: String,
        credentials: String,
    ) -> Result<(), ContractError> {
        Self::require_admin(&env, &caller)?;

        validation::validate_institution(&institution)?;
        validation::validate_credentials(&credentials)?;

        let grant = RegistrarGrant {
            registrar: registrar.clone(),
            institution: institution.clone(),
            credentials,
            authorized: true,
            granted_at: env.ledger().timestamp(),
        };
        identity::store_registrar_grant(&env, &grant);

        events::publish_registrar_authorized(&env, registrar, institution);

        Ok(())
    }

    /// Revoke a registrar's authorization (admin only).
    pub fn revoke_registrar(
        env: Env,
        caller: Address,
        registrar: Address,
    ) -> Result<(), ContractError> {
        Self::require_admin(&env, &caller)?;

        identity::revoke_registrar(&env, &registrar);

        events::publish_registrar_revoked(&env, registrar);

        Ok(())
    }

    /// Mark an address as a clinical verifier (admin only).
    pub fn add_verifier(env: Env, caller: Address, verifier: Address) -> Result<(), ContractError> {
        Self::require_admin(&env, &caller)?;

        let grant = VerifierGrant {
            verifier: verifier.clone(),
            is_verifier: true,
            added_at: env.ledger().timestamp(),
        };
        identity::store_verifier_grant(&env, &grant);

        events::publish_verifier_added(&env, verifier);

        Ok(())
    }

    /// Remove a verifier grant (admin only).
    pub fn remove_verifier(
        env: Env,
        caller: Address,
        verifier: Address,
    ) -> Result<(), ContractError> {
        Self::require_admin(&env, &caller)?;

        identity::remove_verifier(&env, &verifier);

        events::publish_verifier_removed(&env, verifier);

        Ok(())
    }

    /// Check whether an address holds an unrevoked registrar grant
    pub fn is_registrar_authorized(env: Env, registrar: Address) -> bool {
        identity::is_registrar_authorized(&env, &registrar)
    }

    /// Check whether an address is a clinical verifier
    pub fn is_verifier(env: Env, verifier: Address) -> bool {
        identity::is_verifier(&env, &verifier)
    }

    /// Get a registrar's grant, if one was ever issued
    pub fn get_registrar_grant(env: Env, registrar: Address) -> Option<RegistrarGrant> {
        identity::get_registrar_grant(&env, &registrar)
    }

    /// Register a new medical case.
    ///
    /// The caller must hold an unrevoked registrar grant and becomes the
    /// case's immutable owner. The case starts in status "registered",
    /// unverified, and the registration is recorded in the audit log.
    #[allow(clippy::too_many_arguments)]
    pub fn register_case(
        env: Env,
        registrar: Address,
        condition_category: String,
        primary_symptoms: String,
        secondary_symptoms: String,
        diagnostic_tests: String,
        test_results: String,
        medical_history_relevant: String,
        demographic_data: String,
        geographic_region: String,
        unusual_factors: String,
        attempted_treatments: String,
        urgency_level: String,
    ) -> Result<u64, ContractError> {
        registrar.require_auth();

        if !identity::is_registrar_authorized(&env, &registrar) {
            return Err(ContractError::Unauthorized);
        }

        validation::validate_text(&condition_category)?;
        validation::validate_text(&primary_symptoms)?;
        validation::validate_text(&secondary_symptoms)?;
        validation::validate_text(&diagnostic_tests)?;
        validation::validate_text(&test_results)?;
        validation::validate_text(&medical_history_relevant)?;
        validation::validate_text(&demographic_data)?;
        validation::validate_text(&geographic_region)?;
        validation::validate_text(&unusual_factors)?;
        validation::validate_text(&attempted_treatments)?;
        validation::validate_tag(&urgency_level)?;

        let case_id = next_case_id(&env);
        let now = env.ledger().timestamp();

        let case = MedicalCase {
            id: case_id,
            registrar: registrar.clone(),
            condition_category,
            primary_symptoms,
            secondary_symptoms,
            diagnostic_tests,
            test_results,
            medical_history_relevant,
            demographic_data,
            geographic_region,
            unusual_factors,
            attempted_treatments,
            current_status: String::from_str(&env, "registered"),
            urgency_level: urgency_level.clone(),
            registration_date: now,
            last_updated: now,
            is_verified: false,
        };
        env.storage().persistent().set(&case_key(case_id), &case);

        audit::append(
            &env,
            case_id,
            UpdateType::StatusChange,
            String::from_str(&env, "Case registered"),
            registrar.clone(),
            now,
        );

        events::publish_case_registered(&env, case_id, registrar, urgency_level);

        Ok(case_id)
    }

    /// Amend the editable fields of an existing case.
    ///
    /// Only the case's registrar may amend it. Status, verification flag,
    /// ownership and registration date are untouched.
    #[allow(clippy::too_many_arguments)]
    pub fn update_case(
        env: Env,
        caller: Address,
        case_id: u64,
        primary_symptoms: String,
        secondary_symptoms: String,
        diagnostic_tests: String,
        test_results: String,
        unusual_factors: String,
        attempted_treatments: String,
        urgency_level: String,
    ) -> Result<u64, ContractError> {
        caller.require_auth();

        let mut case: MedicalCase = env
            .storage()
            .persistent()
            .get(&case_key(case_id))
            .ok_or(ContractError::CaseNotFound)?;

        if case.registrar != caller {
            return Err(ContractError::Unauthorized);
        }

        validation::validate_text(&primary_symptoms)?;
        validation::validate_text(&secondary_symptoms)?;
        validation::validate_text(&diagnostic_tests)?;
        validation::validate_text(&test_results)?;
        validation::validate_text(&unusual_factors)?;
        validation::validate_text(&attempted_treatments)?;
        validation::validate_tag(&urgency_level)?;

        let now = env.ledger().timestamp();
        case.primary_symptoms = primary_symptoms;
        case.secondary_symptoms = secondary_symptoms;
        case.diagnostic_tests = diagnostic_tests;
        case.test_results = test_results;
        case.unusual_factors = unusual_factors;
        case.attempted_treatments = attempted_treatments;
        case.urgency_level = urgency_level;
        case.last_updated = now;
        env.storage().persistent().set(&case_key(case_id), &case);

        audit::append(
            &env,
            case_id,
            UpdateType::CaseUpdate,
            String::from_str(&env, "Case details updated"),
            caller.clone(),
            now,
        );

        events::publish_case_updated(&env, case_id, caller);

        Ok(case_id)
    }

    /// Change a case's status tag.
    ///
    /// Permitted for the case's registrar or an assigned specialist. The
    /// status string and the caller-supplied details are stored verbatim.
    pub fn update_case_status(
        env: Env,
        caller: Address,
        case_id: u64,
        status: String,
        details: String,
    ) -> Result<u64, ContractError> {
        caller.require_auth();

        let mut case: MedicalCase = env
            .storage()
            .persistent()
            .get(&case_key(case_id))
            .ok_or(ContractError::CaseNotFound)?;

        if case.registrar != caller
            && !identity::is_authorized_specialist(&env, &caller, case_id)
        {
            return Err(ContractError::Unauthorized);
        }

        validation::validate_tag(&status)?;
        validation::validate_text(&details)?;

        let now = env.ledger().timestamp();
        case.current_status = status.clone();
        case.last_updated = now;
        env.storage().persistent().set(&case_key(case_id), &case);

        audit::append(
            &env,
            case_id,
            UpdateType::StatusChange,
            details,
            caller.clone(),
            now,
        );

        events::publish_status_changed(&env, case_id, caller, status);

        Ok(case_id)
    }

    /// Set or clear a case's clinical verification flag.
    ///
    /// Authorization is checked before existence so a non-verifier cannot
    /// probe which case ids exist through this entry point. Verification is
    /// not an edit; `last_updated` stays as-is.
    pub fn verify_case(
        env: Env,
        caller: Address,
        case_id: u64,
        verified: bool,
    ) -> Result<u64, ContractError> {
        caller.require_auth();

        if !identity::is_verifier(&env, &caller) {
            return Err(ContractError::Unauthorized);
        }

        let mut case: MedicalCase = env
            .storage()
            .persistent()
            .get(&case_key(case_id))
            .ok_or(ContractError::CaseNotFound)?;

        case.is_verified = verified;
        env.storage().persistent().set(&case_key(case_id), &case);

        let details = if verified {
            String::from_str(&env, "Case verified")
        } else {
            String::from_str(&env, "Case verification revoked")
        };
        audit::append(
            &env,
            case_id,
            UpdateType::Verification,
            details,
            caller.clone(),
            env.ledger().timestamp(),
        );

        events::publish_case_verified(&env, case_id, caller, verified);

        Ok(case_id)
    }

    /// Get a case by id
    pub fn get_case(env: Env, case_id: u64) -> Result<MedicalCase, ContractError> {
        env.storage()
            .persistent()
            .get(&case_key(case_id))
            .ok_or(ContractError::CaseNotFound)
    }

    /// Get an audit log entry by id
    pub fn get_case_update(env: Env, update_id: u64) -> Result<CaseUpdate, ContractError> {
        audit::get(&env, update_id).ok_or(ContractError::UpdateNotFound)
    }

    /// Get the update ids recorded for a case, in chronological order
    pub fn get_case_history(env: Env, case_id: u64) -> Vec<u64> {
        audit::history(&env, case_id)
    }

    /// Get the total number of registered cases
    pub fn get_case_count(env: Env) -> u64 {
        env.storage().instance().get(&CASE_CTR).unwrap_or(0)
    }

    /// Get the total number of audit log entries
    pub fn get_update_count(env: Env) -> u64 {
        audit::count(&env)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }
}
