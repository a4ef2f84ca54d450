use soroban_sdk::{symbol_short, Address, Env, String, Symbol, Vec};

use crate::types::{CaseUpdate, UpdateType};

// ── Storage keys ────────────────────────────────────────────────────────────

/// Counter for generating monotonic update ids.
const UPD_CTR: Symbol = symbol_short!("UPD_CTR");

fn update_key(id: u64) -> (Symbol, u64) {
    (symbol_short!("UPDATE"), id)
}

fn history_key(case_id: u64) -> (Symbol, u64) {
    (symbol_short!("CASE_LOG"), case_id)
}

/// Allocate and return the next update id (1-based, monotonically increasing).
fn next_update_id(env: &Env) -> u64 {
    let current: u64 = env.storage().instance().get(&UPD_CTR).unwrap_or(0u64);
    let next = current.saturating_add(1);
    env.storage().instance().set(&UPD_CTR, &next);
    next
}

// ── Log operations ──────────────────────────────────────────────────────────

/// Append an immutable update record and index it under its case.
///
/// Entries are never edited or removed after this call, so a case's full
/// provenance is `history(case_id)` read back in id order.
pub fn append(
    env: &Env,
    case_id: u64,
    update_type: UpdateType,
    details: String,
    updated_by: Address,
    timestamp: u64,
) -> u64 {
    let id = next_update_id(env);
    let update = CaseUpdate {
        id,
        case_id,
        update_type,
        details,
        updated_by,
        timestamp,
    };
    env.storage().persistent().set(&update_key(id), &update);

    let key = history_key(case_id);
    let mut history: Vec<u64> = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or(Vec::new(env));
    history.push_back(id);
    env.storage().persistent().set(&key, &history);

    id
}

/// Retrieve an update by id, returning `None` when not found.
pub fn get(env: &Env, update_id: u64) -> Option<CaseUpdate> {
    env.storage().persistent().get(&update_key(update_id))
}

/// Update ids recorded for a case, in append (= chronological) order.
pub fn history(env: &Env, case_id: u64) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&history_key(case_id))
        .unwrap_or(Vec::new(env))
}

/// Total number of updates ever appended.
pub fn count(env: &Env) -> u64 {
    env.storage().instance().get(&UPD_CTR).unwrap_or(0u64)
}
