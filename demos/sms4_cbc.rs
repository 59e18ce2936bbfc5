//! SMS4-CBC walkthrough
//!
//! Looks up the key and IV lengths for SMS4, draws a random key and IV,
//! encrypts "hello" across update + finalize, decrypts it again and
//! prints every intermediate value in hex.
//!
//! Run with `cargo run --example sms4_cbc`.

use gmcrypt::prelude::*;

fn main() -> Result<()> {
    let table = CipherTable::standard();
    let name = "SMS4";

    let key_len = table.key_length(name)?;
    let iv_len = table.iv_length(name)?;
    println!("{}: key length {}, IV length {}", name, key_len, iv_len);

    let key = generate_random(key_len)?;
    let iv = generate_random(iv_len)?;
    println!("key: {}", hex::encode(&key));
    println!("iv:  {}", hex::encode(&iv));

    let message = b"hello";

    let mut enc = CipherSession::open(&table, name, &key, &iv, Direction::Encrypt)?;
    let mut ciphertext = enc.update(message)?;
    println!("encrypt update: {} bytes", ciphertext.len());
    let last = enc.finalize()?;
    println!("encrypt final:  {} bytes", last.len());
    ciphertext.extend(last);
    println!("ciphertext: {}", hex::encode(&ciphertext));

    let mut dec = CipherSession::open(&table, name, &key, &iv, Direction::Decrypt)?;
    let mut plaintext = dec.update(&ciphertext)?;
    println!("decrypt update: {} bytes", plaintext.len());
    let last = dec.finalize()?;
    println!("decrypt final:  {} bytes", last.len());
    plaintext.extend(last);
    println!("plaintext: {}", String::from_utf8_lossy(&plaintext));

    assert_eq!(plaintext, message);
    Ok(())
}
