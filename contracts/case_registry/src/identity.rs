use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::types::{RegistrarGrant, VerifierGrant};

// ── Storage keys ────────────────────────────────────────────────────────────

const REGISTRAR: Symbol = symbol_short!("REGISTRAR");
const VERIFIER: Symbol = symbol_short!("VERIFIER");

const GRANT_TTL_THRESHOLD: u32 = 5_184_000; // ~60 days
const GRANT_TTL_EXTEND_TO: u32 = 10_368_000; // ~120 days

fn registrar_key(registrar: &Address) -> (Symbol, Address) {
    (REGISTRAR, registrar.clone())
}

fn verifier_key(verifier: &Address) -> (Symbol, Address) {
    (VERIFIER, verifier.clone())
}

fn extend_grant_ttl(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, GRANT_TTL_THRESHOLD, GRANT_TTL_EXTEND_TO);
}

// ── Registrar grants ────────────────────────────────────────────────────────

/// Persist a registrar grant, overwriting any previous grant for the address.
pub fn store_registrar_grant(env: &Env, grant: &RegistrarGrant) {
    let key = registrar_key(&grant.registrar);
    env.storage().persistent().set(&key, grant);
    extend_grant_ttl(env, &key);
}

/// Retrieve a registrar grant, returning `None` when none was ever issued.
pub fn get_registrar_grant(env: &Env, registrar: &Address) -> Option<RegistrarGrant> {
    env.storage().persistent().get(&registrar_key(registrar))
}

/// Returns whether the address holds a grant that has not been revoked.
///
/// A missing grant is an ordinary `false`, never an error.
pub fn is_registrar_authorized(env: &Env, registrar: &Address) -> bool {
    let key = registrar_key(registrar);
    match env.storage().persistent().get::<_, RegistrarGrant>(&key) {
        Some(grant) if grant.authorized => {
            extend_grant_ttl(env, &key);
            true
        }
        _ => false,
    }
}

/// Clear the `authorized` flag on an existing grant.
///
/// Unknown registrars are a no-op; the grant record itself is retained.
pub fn revoke_registrar(env: &Env, registrar: &Address) {
    let key = registrar_key(registrar);
    if let Some(mut grant) = env.storage().persistent().get::<_, RegistrarGrant>(&key) {
        grant.authorized = false;
        env.storage().persistent().set(&key, &grant);
    }
}

// ── Verifier grants ─────────────────────────────────────────────────────────

/// Persist a verifier grant.
pub fn store_verifier_grant(env: &Env, grant: &VerifierGrant) {
    let key = verifier_key(&grant.verifier);
    env.storage().persistent().set(&key, grant);
    extend_grant_ttl(env, &key);
}

/// Returns whether the address is an active clinical verifier.
pub fn is_verifier(env: &Env, verifier: &Address) -> bool {
    let key = verifier_key(verifier);
    match env.storage().persistent().get::<_, VerifierGrant>(&key) {
        Some(grant) if grant.is_verifier => {
            extend_grant_ttl(env, &key);
            true
        }
        _ => false,
    }
}

/// Remove a verifier grant entirely.
pub fn remove_verifier(env: &Env, verifier: &Address) {
    env.storage().persistent().remove(&verifier_key(verifier));
}

// ── Specialist capability hook ──────────────────────────────────────────────

/// Whether `specialist` may change status on `case_id`.
///
/// No specialist-assignment mechanism exists yet, so this denies every
/// non-registrar. `update_case_status` routes through this predicate so an
/// assignment map can be added without touching its call site.
// TODO: consult the specialist assignment map once the matching contract lands.
pub fn is_authorized_specialist(_env: &Env, _specialist: &Address, _case_id: u64) -> bool {
    false
}
