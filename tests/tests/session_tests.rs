//! Integration tests for cipher sessions

use std::thread;

use gmcrypt_api::Error;
use gmcrypt_symmetric::{
    decrypt, encrypt, generate_iv, generate_iv_with, generate_key, generate_key_with,
    AlgorithmSpec, CipherKind, CipherMode, CipherSession, CipherTable, CipherTableBuilder,
    Direction,
};
use gmcrypt_tests::vectors::run_session;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

#[test]
fn test_sms4_hello_with_random_key_and_iv() {
    let table = CipherTable::standard();
    assert_eq!(table.key_length("SMS4").unwrap(), 16);
    assert_eq!(table.iv_length("SMS4").unwrap(), 16);

    let key = generate_key(&table, "SMS4").unwrap();
    let iv = generate_iv(&table, "SMS4").unwrap();

    let mut enc = CipherSession::open(&table, "SMS4", &key, &iv, Direction::Encrypt).unwrap();
    let mut ciphertext = enc.update(b"hello").unwrap();
    ciphertext.extend(enc.finalize().unwrap());
    assert_eq!(ciphertext.len(), 16);

    let mut dec = CipherSession::open(&table, "SMS4", &key, &iv, Direction::Decrypt).unwrap();
    let mut plaintext = dec.update(&ciphertext).unwrap();
    plaintext.extend(dec.finalize().unwrap());
    assert_eq!(plaintext, b"hello");
}

#[test]
fn test_chunking_patterns_agree() {
    let table = CipherTable::standard();
    let key = [0x3cu8; 16];
    let iv = [0xa5u8; 16];
    let message: Vec<u8> = (0..=255u8).cycle().take(1000).collect();

    let reference = encrypt(&table, "SMS4", &key, &iv, &message).unwrap();
    for chunk in [1usize, 7, 15, 16, 17, 64, 999, 1000, 4096] {
        let ciphertext =
            run_session(&table, "SMS4", &key, &iv, Direction::Encrypt, &message, chunk).unwrap();
        assert_eq!(ciphertext, reference, "encrypt, chunk {}", chunk);

        let plaintext =
            run_session(&table, "SMS4", &key, &iv, Direction::Decrypt, &reference, chunk).unwrap();
        assert_eq!(plaintext, message, "decrypt, chunk {}", chunk);
    }
}

#[test]
fn test_empty_updates_are_harmless() {
    let table = CipherTable::standard();
    let key = [1u8; 16];
    let iv = [2u8; 16];

    let mut enc = CipherSession::open(&table, "SMS4", &key, &iv, Direction::Encrypt).unwrap();
    let mut ciphertext = Vec::new();
    for piece in [&b""[..], b"he", b"", b"", b"llo", b""] {
        ciphertext.extend(enc.update(piece).unwrap());
    }
    ciphertext.extend(enc.finalize().unwrap());

    assert_eq!(ciphertext, encrypt(&table, "SMS4", &key, &iv, b"hello").unwrap());
}

#[test]
fn test_padding_boundaries() {
    let table = CipherTable::standard();
    let key = [9u8; 16];
    let iv = [8u8; 16];

    for len in 0..=48usize {
        let message = vec![0x42u8; len];
        let ciphertext = encrypt(&table, "SMS4", &key, &iv, &message).unwrap();
        assert_eq!(ciphertext.len(), (len / 16 + 1) * 16, "length {}", len);
        assert_eq!(decrypt(&table, "SMS4", &key, &iv, &ciphertext).unwrap(), message);
    }
}

#[test]
fn test_tampering_earlier_block_garbles_without_failing() {
    let table = CipherTable::standard();
    let key = [4u8; 16];
    let iv = [5u8; 16];
    let message = b"a message that spans three blocks of SMS4 data".to_vec();

    let mut ciphertext = encrypt(&table, "SMS4", &key, &iv, &message).unwrap();
    assert_eq!(ciphertext.len(), 48);
    ciphertext[3] ^= 0x01;

    let plaintext = decrypt(&table, "SMS4", &key, &iv, &ciphertext).unwrap();
    assert_eq!(plaintext.len(), message.len());
    assert_ne!(&plaintext[..16], &message[..16]);
    assert_eq!(plaintext[19], message[19] ^ 0x01);
    assert_eq!(&plaintext[32..], &message[32..]);
}

#[test]
fn test_tampering_padding_is_rejected() {
    let table = CipherTable::standard();
    let key = [6u8; 16];
    let iv = [7u8; 16];

    // The last plaintext byte is 0x01; flipping bit 1 via the previous
    // ciphertext block turns it into 0x03 over a non-0x03 fill.
    let mut ciphertext = encrypt(&table, "SMS4", &key, &iv, &[0u8; 31]).unwrap();
    ciphertext[15] ^= 0x02;

    let err = decrypt(&table, "SMS4", &key, &iv, &ciphertext).unwrap_err();
    assert_eq!(err, Error::InvalidPadding);
    assert!(err.is_decryption_failure());
    assert_eq!(err.to_string(), Error::TruncatedCiphertext.to_string());
}

#[test]
fn test_update_after_finalize() {
    let table = CipherTable::standard();
    for direction in [Direction::Encrypt, Direction::Decrypt] {
        let mut session =
            CipherSession::open(&table, "SMS4", &[0u8; 16], &[0u8; 16], direction).unwrap();
        let _ = session.finalize();
        assert_eq!(session.update(b"x"), Err(Error::SessionFinalized));
        assert_eq!(session.finalize(), Err(Error::SessionFinalized));
    }
}

#[test]
fn test_every_table_entry_round_trips() {
    let table = CipherTable::standard();
    let message = b"every algorithm in the table, end to end";

    for name in table.names() {
        let key = generate_key(&table, name).unwrap();
        let iv = generate_iv(&table, name).unwrap();
        let ciphertext = encrypt(&table, name, &key, &iv, message).unwrap();
        assert_eq!(decrypt(&table, name, &key, &iv, &ciphertext).unwrap(), message, "{}", name);
    }
}

#[test]
fn test_custom_table() {
    let table = CipherTableBuilder::new()
        .register("SMS4-CBC", AlgorithmSpec::SMS4_CBC)
        .alias("GM-CBC", "SMS4-CBC")
        .unwrap()
        .register("GM-ECB", AlgorithmSpec::new(CipherKind::Sms4, CipherMode::Ecb))
        .build();

    assert_eq!(table.names().collect::<Vec<_>>(), ["SMS4-CBC", "GM-CBC", "GM-ECB"]);
    assert_eq!(table.iv_length("gm_ecb").unwrap(), 0);
    assert!(matches!(
        CipherSession::open(&table, "AES-128-CBC", &[0u8; 16], &[0u8; 16], Direction::Encrypt),
        Err(Error::UnknownAlgorithm { .. })
    ));

    let key = [0x10u8; 16];
    let iv = [0x20u8; 16];
    assert_eq!(
        encrypt(&table, "gm-cbc", &key, &iv, b"alias").unwrap(),
        encrypt(&CipherTable::standard(), "SMS4", &key, &iv, b"alias").unwrap()
    );
}

#[test]
fn test_independent_sessions_run_concurrently() {
    let table = CipherTable::standard();
    let message: Vec<u8> = (0..200u8).collect();

    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            let key = [i; 16];
            let iv = [i.wrapping_mul(3); 16];
            let session =
                CipherSession::open(&table, "SMS4", &key, &iv, Direction::Encrypt).unwrap();
            let message = message.clone();
            thread::spawn(move || {
                let mut session = session;
                let mut out = session.update(&message).unwrap();
                out.extend(session.finalize().unwrap());
                (key, iv, out)
            })
        })
        .collect();

    for handle in handles {
        let (key, iv, ciphertext) = handle.join().unwrap();
        assert_eq!(ciphertext, encrypt(&table, "SMS4", &key, &iv, &message).unwrap());
    }
}

#[test]
fn test_seeded_keys_round_trip_every_algorithm() {
    let table = CipherTable::standard();
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);

    for name in table.names() {
        let spec = table.lookup(name).unwrap();
        let key = generate_key_with(&mut rng, spec).unwrap();
        let iv = generate_iv_with(&mut rng, spec).unwrap();
        assert_eq!(key.len(), spec.key_len());
        assert_eq!(iv.len(), spec.iv_len());

        let mut message = vec![0u8; (rng.next_u32() % 300) as usize];
        rng.fill_bytes(&mut message);

        let ciphertext =
            run_session(&table, name, &key, &iv, Direction::Encrypt, &message, 7).unwrap();
        assert_eq!(ciphertext.len(), (message.len() / 16 + 1) * 16, "{}", name);
        let plaintext =
            run_session(&table, name, &key, &iv, Direction::Decrypt, &ciphertext, 5).unwrap();
        assert_eq!(plaintext, message, "{}", name);
    }
}

#[test]
fn test_same_seed_same_ciphertext() {
    let table = CipherTable::standard();
    let spec = AlgorithmSpec::SMS4_CBC;

    let ciphertexts: Vec<Vec<u8>> = (0..2)
        .map(|_| {
            let mut rng = ChaCha20Rng::seed_from_u64(42);
            let key = generate_key_with(&mut rng, spec).unwrap();
            let iv = generate_iv_with(&mut rng, spec).unwrap();
            encrypt(&table, "SMS4", &key, &iv, b"deterministic").unwrap()
        })
        .collect();
    assert_eq!(ciphertexts[0], ciphertexts[1]);
}
