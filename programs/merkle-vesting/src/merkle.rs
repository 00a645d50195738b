use anchor_lang::solana_program::hash::hashv;

use crate::vesting::WhitelistEntry;

pub type Hash = [u8; 32];

/// SHA-256 over the entry's fixed-width fields, in the order the whitelist
/// tooling emits them: address, stage, amount, tge, start_at, duration, cliff.
pub fn leaf_hash(entry: &WhitelistEntry) -> Hash {
    hashv(&[
        entry.address.as_ref(),
        &entry.stage.to_le_bytes(),
        &entry.amount.to_le_bytes(),
        &entry.tge.to_le_bytes(),
        &entry.start_at.to_le_bytes(),
        &entry.duration.to_le_bytes(),
        &entry.cliff.to_le_bytes(),
    ])
    .to_bytes()
}

/// Parent of two nodes. The smaller hash always goes first so proofs carry
/// no left/right markers.
pub fn hash_pair(a: &Hash, b: &Hash) -> Hash {
    if a <= b {
        hashv(&[a, b]).to_bytes()
    } else {
        hashv(&[b, a]).to_bytes()
    }
}

pub fn verify(leaf: &Hash, proof: &[Hash], root: &Hash) -> bool {
    let computed = proof
        .iter()
        .fold(*leaf, |acc, sibling| hash_pair(&acc, sibling));
    &computed == root
}

/// Off-chain tree builder used by round tooling and tests. The program
/// itself only ever verifies against a stored root.
#[derive(Debug, Clone)]
pub struct MerkleTree {
    // levels[0] holds the sorted leaves, the last level holds the root
    levels: Vec<Vec<Hash>>,
}

impl MerkleTree {
    pub fn new(mut leaves: Vec<Hash>) -> Self {
        leaves.sort_unstable();
        leaves.dedup();

        let mut levels = vec![leaves];
        while levels.last().map_or(false, |level| level.len() > 1) {
            let next = levels
                .last()
                .map(|level| {
                    level
                        .chunks(2)
                        .map(|pair| match pair {
                            [left, right] => hash_pair(left, right),
                            // odd node is promoted as is
                            [single] => *single,
                            _ => unreachable!(),
                        })
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default();
            levels.push(next);
        }

        Self { levels }
    }

    pub fn from_entries(entries: &[WhitelistEntry]) -> Self {
        Self::new(entries.iter().map(leaf_hash).collect())
    }

    pub fn root(&self) -> Option<Hash> {
        self.levels.last().and_then(|level| level.first()).copied()
    }

    pub fn proof(&self, leaf: &Hash) -> Option<Vec<Hash>> {
        let mut index = self.levels.first()?.binary_search(leaf).ok()?;
        let mut proof = Vec::with_capacity(self.levels.len());

        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = index ^ 1;
            if let Some(hash) = level.get(sibling) {
                proof.push(*hash);
            }
            index /= 2;
        }

        Some(proof)
    }
}
