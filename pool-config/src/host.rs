use alloy_primitives::U256;
use soroban_sdk::{Env, U256 as HostU256};

use crate::{reserve_config::ReserveConfigurationMap, user_config::UserConfigurationMap};

/// Convert a packed word into a host `U256` so it can be written to contract storage
fn word_to_host(e: &Env, word: &U256) -> HostU256 {
    let limbs = word.as_limbs();
    HostU256::from_parts(e, limbs[3], limbs[2], limbs[1], limbs[0])
}

/// Convert a host `U256` read from contract storage back into a packed word
fn word_from_host(value: &HostU256) -> U256 {
    let mut buf = [0u8; 32];
    value.to_be_bytes().copy_into_slice(&mut buf);
    U256::from_be_bytes(buf)
}

impl ReserveConfigurationMap {
    /// The big-endian image of the packed word
    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.word().to_be_bytes::<32>()
    }

    /// Load a configuration from the big-endian image of its packed word
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        ReserveConfigurationMap::from_word(U256::from_be_bytes(bytes))
    }

    /// Convert the configuration into a host value for contract storage
    pub fn to_host(&self, e: &Env) -> HostU256 {
        word_to_host(e, &self.word())
    }

    /// Load a configuration from a host value read from contract storage
    pub fn from_host(value: &HostU256) -> Self {
        ReserveConfigurationMap::from_word(word_from_host(value))
    }
}

impl UserConfigurationMap {
    /// The big-endian image of the packed word
    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.word().to_be_bytes::<32>()
    }

    /// Load a configuration from the big-endian image of its packed word
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        UserConfigurationMap::from_word(U256::from_be_bytes(bytes))
    }

    /// Convert the configuration into a host value for contract storage
    pub fn to_host(&self, e: &Env) -> HostU256 {
        word_to_host(e, &self.word())
    }

    /// Load a configuration from a host value read from contract storage
    pub fn from_host(value: &HostU256) -> Self {
        UserConfigurationMap::from_word(word_from_host(value))
    }
}
