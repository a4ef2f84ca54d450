use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
}

pub fn publish_initialized(env: &Env, admin: Address) {
    env.events()
        .publish((symbol_short!("INIT"),), InitializedEvent { admin });
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistrarAuthorizedEvent {
    pub registrar: Address,
    pub institution: String,
}

pub fn publish_registrar_authorized(env: &Env, registrar: Address, institution: String) {
    env.events().publish(
        (symbol_short!("REG_AUTH"), registrar.clone()),
        RegistrarAuthorizedEvent {
            registrar,
            institution,
        },
    );
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistrarRevokedEvent {
    pub registrar: Address,
}

pub fn publish_registrar_revoked(env: &Env, registrar: Address) {
    env.events().publish(
        (symbol_short!("REG_REV"), registrar.clone()),
        RegistrarRevokedEvent { registrar },
    );
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerifierAddedEvent {
    pub verifier: Address,
}

pub fn publish_verifier_added(env: &Env, verifier: Address) {
    env.events().publish(
        (symbol_short!("VER_ADD"), verifier.clone()),
        VerifierAddedEvent { verifier },
    );
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerifierRemovedEvent {
    pub verifier: Address,
}

pub fn publish_verifier_removed(env: &Env, verifier: Address) {
    env.events().publish(
        (symbol_short!("VER_REM"), verifier.clone()),
        VerifierRemovedEvent { verifier },
    );
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CaseRegisteredEvent {
    pub case_id: u64,
    pub registrar: Address,
    pub urgency_level: String,
}

pub fn publish_case_registered(env: &Env, case_id: u64, registrar: Address, urgency_level: String) {
    env.events().publish(
        (symbol_short!("CASE_REG"), registrar.clone()),
        CaseRegisteredEvent {
            case_id,
            registrar,
            urgency_level,
        },
    );
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CaseUpdatedEvent {
    pub case_id: u64,
    pub updated_by: Address,
}

pub fn publish_case_updated(env: &Env, case_id: u64, updated_by: Address) {
    env.events().publish(
        (symbol_short!("CASE_UPD"), updated_by.clone()),
        CaseUpdatedEvent {
            case_id,
            updated_by,
        },
    );
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatusChangedEvent {
    pub case_id: u64,
    pub updated_by: Address,
    pub status: String,
}

pub fn publish_status_changed(env: &Env, case_id: u64, updated_by: Address, status: String) {
    env.events().publish(
        (symbol_short!("CASE_STS"), updated_by.clone()),
        StatusChangedEvent {
            case_id,
            updated_by,
            status,
        },
    );
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CaseVerifiedEvent {
    pub case_id: u64,
    pub verifier: Address,
    pub verified: bool,
}

pub fn publish_case_verified(env: &Env, case_id: u64, verifier: Address, verified: bool) {
    env.events().publish(
        (symbol_short!("CASE_VRF"), verifier.clone()),
        CaseVerifiedEvent {
            case_id,
            verifier,
            verified,
        },
    );
}
