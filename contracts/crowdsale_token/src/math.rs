//! Checked arithmetic over ledger quantities. Balances, allowances, the total
//! supply and the sold counter are only ever combined through these four
//! functions; no unchecked arithmetic on them is allowed anywhere else.

use crate::error::Error;

pub fn add(a: i128, b: i128) -> Result<i128, Error> {
    a.checked_add(b).ok_or(Error::Overflow)
}

pub fn sub(a: i128, b: i128) -> Result<i128, Error> {
    if a < b {
        return Err(Error::Underflow);
    }
    Ok(a - b)
}

pub fn mul(a: i128, b: i128) -> Result<i128, Error> {
    a.checked_mul(b).ok_or(Error::Overflow)
}

pub fn div(a: i128, b: i128) -> Result<i128, Error> {
    if b == 0 {
        return Err(Error::DivisionByZero);
    }
    Ok(a / b)
}
