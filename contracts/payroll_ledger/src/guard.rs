use soroban_sdk::Env;

use crate::storage::{PayrollError, StorageKey};

/// Call-scoped lock over the payout path.
///
/// Held from before the employee record is read until the payout has
/// returned; dropping it releases the lock. If the call fails the host
/// rolls the lock back together with every other write.
pub struct ReentrancyGuard {
    env: Env,
}

impl ReentrancyGuard {
    pub fn acquire(env: &Env) -> Result<Self, PayrollError> {
        let storage = env.storage().instance();
        if storage.has(&StorageKey::ReentrancyLock) {
            return Err(PayrollError::Reentrancy);
        }
        storage.set(&StorageKey::ReentrancyLock, &true);
        Ok(Self { env: env.clone() })
    }

    pub fn is_held(env: &Env) -> bool {
        env.storage().instance().has(&StorageKey::ReentrancyLock)
    }
}

impl Drop for ReentrancyGuard {
    fn drop(&mut self) {
        self.env
            .storage()
            .instance()
            .remove(&StorageKey::ReentrancyLock);
    }
}
