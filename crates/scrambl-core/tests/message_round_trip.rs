use scrambl_core::crypto::{
    decode_tagged_key, derive_keypair, encode_tagged_key, generate_passphrase,
    validate_passphrase,
};
use scrambl_core::envelope::{open, open_text, seal, seal_text};
use scrambl_core::link::{parse_link, parse_write_link, read_link};
use scrambl_core::{Link, OsEntropy, Recipient, Session, WordList, DEFAULT_BASE_URL, WORD_COUNT};

const PASSPHRASE: &str = "alpha bravo charlie delta echo foxtrot golf";
const OTHER_PASSPHRASE: &str = "hotel golf foxtrot echo delta charlie bravo";
const BASE58: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

fn word_list() -> WordList {
    let mut words: Vec<String> = [
        "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect();
    words.extend((words.len()..WORD_COUNT).map(|i| format!("word{}", i)));
    WordList::new(words).expect("synthetic list should be valid")
}

#[test]
fn test_hello_scenario() {
    let pair = derive_keypair(PASSPHRASE);
    let other = derive_keypair(OTHER_PASSPHRASE);

    let envelope = seal("hello", pair.public_key(), &mut OsEntropy).expect("seal should succeed");
    assert_eq!(open(&envelope, pair.secret_key()).expect("open should succeed"), "hello");
    assert!(open(&envelope, other.secret_key()).is_err());
}

#[test]
fn test_generated_passphrase_round_trip() {
    let words = word_list();
    let passphrase = generate_passphrase(&words, &mut OsEntropy).expect("generation should succeed");
    validate_passphrase(&words, &passphrase).expect("generated passphrase should validate");

    let pair = derive_keypair(&passphrase);
    assert_eq!(derive_keypair(&passphrase), pair);
    assert_ne!(derive_keypair(PASSPHRASE), pair);

    let long = "long ".repeat(200);
    for message in ["", "hello", "two\nlines\n", long.as_str()] {
        let text = seal_text(message, pair.public_key(), &mut OsEntropy).expect("seal should succeed");
        assert_eq!(open_text(&text, pair.secret_key()).expect("open should succeed"), message);
    }
}

#[test]
fn test_flipping_tagged_key_characters_is_detected() {
    let tagged = encode_tagged_key(derive_keypair(PASSPHRASE).public_key());
    let chars: Vec<char> = tagged.chars().collect();

    let mut accepted = 0;
    for (index, &original) in chars.iter().enumerate() {
        let replacement = BASE58
            .chars()
            .find(|&c| c != original)
            .expect("alphabet has more than one character");
        let mut flipped = chars.clone();
        flipped[index] = replacement;
        let flipped: String = flipped.into_iter().collect();
        if decode_tagged_key(&flipped).is_ok() {
            accepted += 1;
        }
    }
    assert!(accepted <= 3, "{} of {} flips went undetected", accepted, chars.len());
}

#[test]
fn test_short_tagged_key_rejected() {
    assert!(decode_tagged_key(&"1".repeat(32)).is_err());
}

#[test]
fn test_write_link_to_read_link_flow() {
    let words = word_list();
    let mut receiver = Session::start();
    receiver.unlock(&words, PASSPHRASE).expect("unlock should succeed");
    let recipient = Recipient::Email("me@example.com".to_string());
    let link = receiver
        .write_link(DEFAULT_BASE_URL, Some(&recipient))
        .expect("write link should build");

    // The sender only has the link.
    let parsed = parse_write_link(&link).expect("write link should parse");
    assert_eq!(parsed.recipients, vec![recipient]);
    let envelope = seal("meet at noon", &parsed.key, &mut OsEntropy).expect("seal should succeed");
    let reply = read_link(DEFAULT_BASE_URL, &envelope);

    let Link::Read(read) = parse_link(&reply).expect("read link should parse") else {
        panic!("expected a read link");
    };
    let text = receiver.decrypt(&read.ciphertext).expect("decrypt should succeed");
    assert_eq!(text, "meet at noon");
}

#[test]
fn test_wrong_passphrase_session_cannot_read() {
    let words = word_list();
    let mut sender = Session::start();
    let tagged = encode_tagged_key(derive_keypair(PASSPHRASE).public_key());
    let text = sender.encrypt(&tagged, "private").expect("encrypt should succeed");

    let mut intruder = Session::start();
    intruder.unlock(&words, OTHER_PASSPHRASE).expect("unlock should succeed");
    assert!(intruder.decrypt(&text).is_err());
}
