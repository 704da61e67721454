use std::collections::BTreeMap;

use bevy_ecs::resource::Resource;

/// Per-faction monetary balances, keyed by faction id.
///
/// A faction's balance record is created lazily: the first settlement that
/// touches an unknown faction initializes it to the configured starting
/// balance via [`ensure`](FactionLedger::ensure). Only the settlement engine
/// mutates balances during simulation.
#[derive(Resource, Debug, Clone, Default)]
pub struct FactionLedger {
    balances: BTreeMap<u64, f64>,
}

impl FactionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current balance, if the faction has been initialized.
    pub fn balance(&self, faction: u64) -> Option<f64> {
        self.balances.get(&faction).copied()
    }

    /// Resolve-or-create: returns the balance, initializing an unknown
    /// faction to `starting_balance` first.
    pub fn ensure(&mut self, faction: u64, starting_balance: f64) -> f64 {
        *self.balances.entry(faction).or_insert(starting_balance)
    }

    /// Overwrite a faction's balance (scenario setup).
    pub fn set(&mut self, faction: u64, balance: f64) {
        self.balances.insert(faction, balance);
    }

    /// Credit `amount` to an initialized faction. Unknown factions are
    /// ignored; callers must `ensure` first.
    pub fn credit(&mut self, faction: u64, amount: f64) {
        if let Some(balance) = self.balances.get_mut(&faction) {
            *balance += amount;
        }
    }

    /// Debit `amount` from an initialized faction. Returns false (no
    /// mutation) when the faction is unknown or cannot cover the amount.
    pub fn debit(&mut self, faction: u64, amount: f64) -> bool {
        match self.balances.get_mut(&faction) {
            Some(balance) if *balance >= amount => {
                *balance -= amount;
                true
            }
            _ => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.balances.iter().map(|(&id, &balance)| (id, balance))
    }
}
