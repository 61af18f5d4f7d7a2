use crate::errors::Error;
use crate::storage;
use soroban_sdk::{Address, Env};

pub fn get_admin(env: &Env) -> Result<Address, Error> {
    storage::get_admin(env).ok_or(Error::NotInitialized)
}

/// Fails unless `caller` is the recorded administrator.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    let stored_admin = get_admin(env)?;
    caller.require_auth();
    if stored_admin != *caller {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

/// The seller may not bid against participants.
pub fn require_not_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    let stored_admin = get_admin(env)?;
    caller.require_auth();
    if stored_admin == *caller {
        return Err(Error::Unauthorized);
    }
    Ok(())
}
