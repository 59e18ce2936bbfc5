//! Known-answer tests run through the public session API

use gmcrypt_symmetric::CipherTable;
use gmcrypt_tests::vectors::{check, SESSION_VECTORS};

#[test]
fn test_session_known_answers() {
    let table = CipherTable::standard();
    for vector in SESSION_VECTORS {
        if let Err(err) = check(&table, vector) {
            panic!("{}", err);
        }
    }
}

#[test]
fn test_vectors_cover_every_builtin_cipher() {
    let table = CipherTable::standard();
    for kind_name in ["SMS4", "AES-128", "AES-192", "AES-256"] {
        assert!(
            SESSION_VECTORS
                .iter()
                .any(|v| table.lookup(v.algorithm).unwrap().kind.name() == kind_name),
            "no vector for {}",
            kind_name
        );
    }
}
