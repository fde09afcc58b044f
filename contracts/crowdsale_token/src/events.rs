use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug)]
pub struct TransferEvent {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ApprovalEvent {
    pub from: Address,
    pub spender: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct MintEvent {
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct BurnEvent {
    pub from: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct InvestedEvent {
    pub investor: Address,
    pub value: i128,
    pub tokens: i128,
    pub day: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ClaimedEvent {
    pub investor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct PausedEvent {
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ResumedEvent {
    pub owner: Address,
}
