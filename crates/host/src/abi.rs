//! Calldata encoding for the game contract's external interface
//!
//! Covers exactly the shapes the constructor and `mintItem(uint256)` use:
//! unsigned words, strings, and dynamic arrays of either. Encoding follows
//! the standard head/tail layout: static values sit in the head, dynamic
//! values leave a byte offset in the head and their payload in the tail.

use tiny_keccak::{Hasher, Keccak};

use epicgame_core::DeploymentRequest;

const WORD: usize = 32;

/// Compute keccak256 hash
fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// First four bytes of the keccak hash of a function signature.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash[..4]);
    selector
}

/// ABI value. Only the shapes the game contract needs.
#[derive(Clone, Debug)]
pub enum Token {
    Uint(u64),
    Str(String),
    UintArray(Vec<u64>),
    StrArray(Vec<String>),
}

impl Token {
    /// Tail payload of a dynamic token. `Uint` has none.
    fn tail(&self) -> Vec<u8> {
        match self {
            Token::Uint(_) => Vec::new(),
            Token::Str(s) => encode_str(s),
            Token::UintArray(values) => {
                let mut out = Vec::with_capacity(WORD * (1 + values.len()));
                out.extend_from_slice(&uint_word(values.len() as u64));
                for &value in values {
                    out.extend_from_slice(&uint_word(value));
                }
                out
            }
            Token::StrArray(values) => {
                // Element offsets are relative to the start of the element
                // area, which begins right after the length word.
                let head_len = values.len() * WORD;
                let mut head = Vec::with_capacity(head_len);
                let mut tail = Vec::new();
                for value in values {
                    head.extend_from_slice(&uint_word((head_len + tail.len()) as u64));
                    tail.extend_from_slice(&encode_str(value));
                }
                let mut out = Vec::with_capacity(WORD + head.len() + tail.len());
                out.extend_from_slice(&uint_word(values.len() as u64));
                out.extend_from_slice(&head);
                out.extend_from_slice(&tail);
                out
            }
        }
    }
}

/// A 32-byte big-endian word holding `value`.
fn uint_word(value: u64) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    word[WORD - 8..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Length word followed by the UTF-8 bytes, zero-padded to a word boundary.
fn encode_str(value: &str) -> Vec<u8> {
    let bytes = value.as_bytes();
    let padded = bytes.len().div_ceil(WORD) * WORD;
    let mut out = Vec::with_capacity(WORD + padded);
    out.extend_from_slice(&uint_word(bytes.len() as u64));
    out.extend_from_slice(bytes);
    out.resize(WORD + padded, 0);
    out
}

/// Encode a token sequence with the standard head/tail layout. Offsets in
/// the head are relative to the start of the returned block.
pub fn encode(tokens: &[Token]) -> Vec<u8> {
    let head_len = tokens.len() * WORD;
    let mut head = Vec::with_capacity(head_len);
    let mut tail = Vec::new();
    for token in tokens {
        match token {
            Token::Uint(value) => head.extend_from_slice(&uint_word(*value)),
            dynamic => {
                head.extend_from_slice(&uint_word((head_len + tail.len()) as u64));
                tail.extend_from_slice(&dynamic.tail());
            }
        }
    }
    head.extend_from_slice(&tail);
    head
}

/// Constructor arguments appended to the creation bytecode, in the
/// contract's positional order: item names, item attack powers, item
/// health values, item image URIs, boss name, boss image URI, boss
/// health, boss attack power.
pub fn constructor_args(request: &DeploymentRequest) -> Vec<u8> {
    let names = request.items.iter().map(|i| i.name.clone()).collect();
    let attack_powers = request.items.iter().map(|i| i.attack_power).collect();
    let healths = request.items.iter().map(|i| i.health).collect();
    let image_uris = request.items.iter().map(|i| i.image_uri.clone()).collect();

    encode(&[
        Token::StrArray(names),
        Token::UintArray(attack_powers),
        Token::UintArray(healths),
        Token::StrArray(image_uris),
        Token::Str(request.boss.name.clone()),
        Token::Str(request.boss.image_uri.clone()),
        Token::Uint(request.boss.health),
        Token::Uint(request.boss.attack_power),
    ])
}

/// `mintItem(uint256)` calldata for one item-type index.
pub fn mint_item_calldata(item_index: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(4 + WORD);
    data.extend_from_slice(&selector("mintItem(uint256)"));
    data.extend_from_slice(&uint_word(item_index));
    data
}
