use crate::error::Error;
use crate::math;
use crate::storage::{AllowanceKey, DataKey};
use soroban_sdk::{Address, Env};

pub fn read_balance(env: &Env, id: &Address) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Balance(id.clone()))
        .unwrap_or(0)
}

fn write_balance(env: &Env, id: &Address, amount: i128) {
    let key = DataKey::Balance(id.clone());
    if amount == 0 {
        env.storage().instance().remove(&key);
    } else {
        env.storage().instance().set(&key, &amount);
    }
}

pub fn receive_balance(env: &Env, id: &Address, amount: i128) -> Result<(), Error> {
    let balance = read_balance(env, id);
    write_balance(env, id, math::add(balance, amount)?);
    Ok(())
}

pub fn spend_balance(env: &Env, id: &Address, amount: i128) -> Result<(), Error> {
    let balance = read_balance(env, id);
    if balance < amount {
        return Err(Error::InsufficientBalance);
    }
    write_balance(env, id, math::sub(balance, amount)?);
    Ok(())
}

pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Allowance(AllowanceKey {
            from: from.clone(),
            spender: spender.clone(),
        }))
        .unwrap_or(0)
}

pub fn write_allowance(env: &Env, from: &Address, spender: &Address, amount: i128) {
    let key = DataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    if amount == 0 {
        env.storage().instance().remove(&key);
    } else {
        env.storage().instance().set(&key, &amount);
    }
}

pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), Error> {
    let allowance = read_allowance(env, from, spender);
    if allowance < amount {
        return Err(Error::InsufficientAllowance);
    }
    write_allowance(env, from, spender, math::sub(allowance, amount)?);
    Ok(())
}

pub fn read_claimable(env: &Env, investor: &Address) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Claimable(investor.clone()))
        .unwrap_or(0)
}

pub fn write_claimable(env: &Env, investor: &Address, amount: i128) {
    let key = DataKey::Claimable(investor.clone());
    if amount == 0 {
        env.storage().instance().remove(&key);
    } else {
        env.storage().instance().set(&key, &amount);
    }
}
