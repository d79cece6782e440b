use cosmwasm_std::{Addr, Env};
use sha2::{Digest, Sha256};

use crate::error::ContractError;

/// One unsigned entropy value per play: SHA256("wager_v1" || block time ||
/// block height || player || lucky_number), first 8 bytes big-endian.
pub fn draw_entropy(env: &Env, player: &Addr, lucky_number: u64) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(b"wager_v1");
    hasher.update(env.block.time.nanos().to_be_bytes());
    hasher.update(env.block.height.to_be_bytes());
    hasher.update(player.as_bytes());
    hasher.update(lucky_number.to_be_bytes());
    let hash = hasher.finalize();

    let mut buf = [0u8; 8];
    buf.copy_from_slice(&hash[..8]);
    u64::from_be_bytes(buf)
}

/// Win iff the draw lands on zero, so the win chance is exactly 1/bound.
/// A zero bound is a configuration fault, reported before any modulus.
pub fn decide_win(entropy: u64, bound: u64) -> Result<bool, ContractError> {
    if bound == 0 {
        return Err(ContractError::InvalidRandomBound);
    }
    Ok(entropy % bound == 0)
}
