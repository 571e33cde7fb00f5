#![no_main]

use std::sync::LazyLock;

use libfuzzer_sys::fuzz_target;
use ntru_crypto::{DEMO_PARAMS, IntPolynomial, Ntru};
use num::{BigInt, Signed};

static KEY_HOLDER: LazyLock<Ntru> = LazyLock::new(|| {
    let mut ntru = Ntru::new(DEMO_PARAMS);
    ntru.generate_public_key(
        &IntPolynomial::from([1, 1, -1, 0, -1, 1]),
        &IntPolynomial::from([-1, 0, 1, 1, 0, 0, -1]),
        2,
    )
    .expect("reference key pair is invertible");
    ntru
});

fuzz_target!(|data: &[u8]| {
    let ntru = &*KEY_HOLDER;
    let n = DEMO_PARAMS.n();
    let p = BigInt::from(DEMO_PARAMS.p());

    // arbitrary ciphertexts decrypt to something in [0, p) without panicking
    let ciphertext = IntPolynomial::from(
        data.chunks(4)
            .take(2 * n)
            .map(|chunk| chunk.iter().fold(0i64, |acc, &b| (acc << 8) | b as i64))
            .collect::<Vec<_>>(),
    );
    let plaintext = ntru.decrypt(&ciphertext).unwrap();
    assert!(plaintext.degree() < n);
    assert!(plaintext.coefficients().iter().all(|c| !c.is_negative() && *c < p));

    // well-formed messages with a ternary blinding polynomial always round trip
    if data.len() >= 2 * n {
        let (message, blinding) = data.split_at(n);
        let message = IntPolynomial::from(
            message.iter().map(|&b| b as i64 % DEMO_PARAMS.p() as i64).collect::<Vec<_>>(),
        );
        let r = IntPolynomial::from(
            blinding[..n].iter().map(|&b| (b % 3) as i64 - 1).collect::<Vec<_>>(),
        );
        let ciphertext = ntru.encrypt(&message, &r).unwrap();
        assert_eq!(ntru.decrypt(&ciphertext).unwrap(), message);
    }
});
