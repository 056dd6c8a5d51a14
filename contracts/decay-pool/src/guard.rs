use crate::storage::{is_locked, set_locked};
use decay_types::PoolError;
use soroban_sdk::Env;

/// Scoped reentrancy lock
///
/// Held for the whole duration of a mutating entry point. The lock flag is
/// cleared when the guard is dropped, on success and error paths alike.
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn acquire(env: &'a Env) -> Result<Self, PoolError> {
        if is_locked(env) {
            return Err(PoolError::Reentrancy);
        }
        set_locked(env, true);
        Ok(Self { env })
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        set_locked(self.env, false);
    }
}
