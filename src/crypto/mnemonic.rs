//! 25-word mnemonic encoding of an account seed.
//!
//! Algorand encodes the 32-byte private key seed as 24 words of 11 bits each
//! (little-endian bit packing) plus one checksum word derived from the first
//! two bytes of the seed's SHA-512/256 digest. Words come from the BIP-39
//! English wordlist.

use bip39::Language;
use sha2::{Digest, Sha512_256};

const WORD_MASK: u32 = 0x7ff;

fn wordlist() -> &'static [&'static str] {
    Language::English.words_by_prefix("")
}

/// Packs bytes into 11-bit groups, least significant bits first.
fn to_11_bit(data: &[u8]) -> Vec<u16> {
    let mut out = Vec::with_capacity(data.len() * 8 / 11 + 1);
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for &byte in data {
        buffer |= (byte as u32) << bits;
        bits += 8;
        if bits >= 11 {
            out.push((buffer & WORD_MASK) as u16);
            buffer >>= 11;
            bits -= 11;
        }
    }
    if bits > 0 {
        out.push((buffer & WORD_MASK) as u16);
    }

    out
}

fn checksum_word(seed: &[u8; 32]) -> &'static str {
    let digest = Sha512_256::digest(seed);
    let index = to_11_bit(&digest[..2])[0];
    wordlist()[index as usize]
}

/// Encodes a seed as its 25-word mnemonic phrase.
pub fn from_seed(seed: &[u8; 32]) -> String {
    let words = wordlist();
    let mut phrase: Vec<&str> = to_11_bit(seed)
        .iter()
        .map(|&index| words[index as usize])
        .collect();
    phrase.push(checksum_word(seed));

    phrase.join(" ")
}
