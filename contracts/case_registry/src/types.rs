use soroban_sdk::{contracttype, Address, String};

/// Kinds of entries recorded in the audit log.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UpdateType {
    StatusChange,
    CaseUpdate,
    Verification,
}

/// Credential grant allowing an institution's registrar to file cases.
///
/// Revocation clears `authorized` but keeps the record, so the institution
/// and credential text remain available for later review.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistrarGrant {
    pub registrar: Address,
    pub institution: String,
    pub credentials: String,
    pub authorized: bool,
    pub granted_at: u64,
}

/// Grant marking an address as a clinical verifier.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerifierGrant {
    pub verifier: Address,
    pub is_verifier: bool,
    pub added_at: u64,
}

/// A registered medical case.
///
/// `current_status` and `urgency_level` are free-form tags supplied by
/// callers ("registered", "matched", "in-treatment", "high", ...); the
/// registry stores them verbatim and enforces no transition graph.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MedicalCase {
    pub id: u64,
    /// The registrar that filed the case. Never changes.
    pub registrar: Address,
    pub condition_category: String,
    pub primary_symptoms: String,
    pub secondary_symptoms: String,
    pub diagnostic_tests: String,
    pub test_results: String,
    pub medical_history_relevant: String,
    pub demographic_data: String,
    pub geographic_region: String,
    pub unusual_factors: String,
    pub attempted_treatments: String,
    pub current_status: String,
    pub urgency_level: String,
    pub registration_date: u64,
    pub last_updated: u64,
    pub is_verified: bool,
}

/// Immutable audit entry, written once and never edited or removed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CaseUpdate {
    pub id: u64,
    pub case_id: u64,
    pub update_type: UpdateType,
    pub details: String,
    pub updated_by: Address,
    pub timestamp: u64,
}
